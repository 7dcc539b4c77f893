// ============================================================================
// CopyDeck - 文案键结构
// ============================================================================
//
// 文件: src/copy/schema.rs
// 职责: 各分区的规范键集合（以英文参考表为准）
// 边界:
//   - ✅ 分区结构与键名声明
//   - ✅ 上游未使用键标记
//   - ❌ 不应包含任何语言的文案内容
//
// ============================================================================

copy_table! {
    /// 顶部导航文案
    pub struct NavCopy for Nav {
        skip_to_content,
        nav_documentation,
        nav_documentation_short,
        nav_download,
        nav_community,
        nav_playground,
        nav_playground_short,
        nav_handbook,
        nav_tools,
        nav_search_placeholder,
        nav_search_aria,
        /// 版本横幅按 `TypeScript X.Y [stable][between]Z.Y[beta/rc]` 拼接
        nav_version_stable_prefix,
        nav_version_between,
        nav_version_beta_prefix,
        nav_version_rc_prefix,
        nav_this_page_in_your_lang,
        nav_this_page_in_your_lang_open,
        nav_this_page_in_your_lang_no_more,
    }
}

copy_table! {
    /// 在线演练场文案
    pub struct PlayCopy for Playground {
        play_subnav_title,
        play_subnav_config,
        play_config_language_blurb,
        play_subnav_handbook,
        play_subnav_examples,
        play_subnav_examples_close,
        play_subnav_settings,
        play_settings_tabs_settings,
        /// 加载中提示
        play_downloading_typescript,
        /// 加载中提示
        play_downloading_version,
        play_toolbar_run,
        play_toolbar_export,
        play_toolbar_share,
        play_sidebar_js,
        play_sidebar_dts,
        play_sidebar_errors,
        play_sidebar_errors_no_errors,
        play_sidebar_logs,
        play_sidebar_logs_no_logs,
        play_sidebar_options,
        play_sidebar_options_restart_required,
        play_sidebar_options_disable_ata,
        play_sidebar_options_disable_ata_copy,
        play_sidebar_options_disable_save,
        play_sidebar_options_disable_save_copy,
        play_sidebar_plugins,
        play_sidebar_featured_plugins,
        play_sidebar_plugins_options_external,
        play_sidebar_plugins_options_external_warning,
        play_sidebar_plugins_options_modules,
        play_sidebar_plugins_options_modules_placeholder,
        play_sidebar_plugins_plugin_dev,
        play_sidebar_plugins_plugin_dev_option,
        play_sidebar_plugins_plugin_dev_copy,
        play_export_report_issue,
        play_export_tweet_md,
        play_export_copy_md,
        play_export_copy_link,
        play_export_copy_link_preview,
        play_export_tsast,
        play_export_bugworkbench,
        play_export_vscode_dev_play,
        play_export_sandbox,
        play_export_stackblitz,
        play_export_clipboard,
        play_esm_mode,
        play_clear_logs,
        play_run_js,
        play_run_ts,
        play_run_js_fail,
        /// 编辑器初始代码，末尾空白属于内容的一部分
        play_default_code_sample,
        play_sidebar_js_title,
        play_sidebar_js_blurb,
        play_sidebar_dts_title,
        play_sidebar_dts_blurb,
        play_sidebar_err_title,
        play_sidebar_err_blurb,
        play_sidebar_run_title,
        play_sidebar_run_blurb,
        play_sidebar_plugins_title,
        play_sidebar_plugins_blurb,
        play_sidebar_ast_title,
        play_sidebar_ast_blurb,
        play_sidebar_tools_filter_placeholder,
    }
}

copy_table! {
    /// 手册页面文案
    pub struct HandbookCopy for Handbook {
        handb_prev,
        handb_next,
        handb_on_this_page,
        handb_like_dislike_title,
        handb_like_desc,
        handb_dislike_desc,
        handb_thanks,
        handb_deprecated_title,
        handb_deprecated_subtitle,
        handb_deprecated_subtitle_link,
        handb_deprecated_subtitle_action,
        handb_experimental_title,
        handb_experimental_subtitle,
    }
}

copy_table! {
    /// 文档首页文案
    pub struct DocCopy for Documentation {
        doc_layout_title,
        doc_layout_description,
        doc_bootstrap_title,
        doc_bootstrap_description,
        doc_headline,
        doc_headline_ts_for_js_title,
        doc_headline_ts_for_js_blurb,
        doc_headline_ts_first_title,
        doc_headline_ts_first_blurb,
        /// 实际显示在 doc_learn 区块
        doc_headline_handbook_title,
        doc_headline_handbook_blurb,
        doc_headline_examples_title,
        doc_headline_examples_blurb,
        doc_start_a_project,
        doc_start_a_project_desc,
        doc_node_npm,
        doc_node_npm_oclif_blurb,
        doc_node_npm_gluegun_blurb,
        doc_node_npm_tsup_blurb,
        doc_frameworks,
        doc_frameworks_angular_blurb,
        doc_frameworks_ember_blurb,
        doc_frameworks_react_blurb,
        doc_frameworks_vue_blurb,
        doc_frameworks_ror_blurb,
        doc_frameworks_asp_blurb,
        doc_apis,
        doc_apis_azure_blurb,
        doc_apis_feather_blurb,
        doc_apis_graphql_blurb,
        doc_apis_nest_blurb,
        doc_apis_node_blurb,
        doc_apis_wechat_blurb,
        doc_apis_loopback_blurb,
        doc_apis_fastify_blurb,
        doc_apis_foal_blurb,
        doc_react,
        doc_react_create_blurb,
        doc_react_gatsby_blurb,
        doc_react_next_blurb,
        doc_react_redwood_blurb,
        doc_react_razzle_blurb,
        doc_react_toolchains_title,
        doc_react_toolchains_blurb,
        doc_apps,
        doc_apps_electron_blurb,
        doc_apps_expo_blurb,
        doc_apps_react_native_blurb,
        doc_apps_native_script_blurb,
        doc_apps_make_code_blurb,
        doc_tooling,
        doc_tooling_babel_blurb,
        doc_tooling_parcel_blurb,
        doc_tooling_vite_blurb,
        doc_tooling_webpack_blurb,
        doc_learn,
        doc_learn_3_5_release_notes_title,
        doc_learn_handbook_blurb,
        doc_learn_d_ts_title,
        doc_learn_d_ts_blurb,
        doc_learn_playground_blurb,
        doc_cheatsheets_subnav_title,
        doc_learn_cheatsheets_blurb,
    }
    unused = [
        doc_headline_ts_for_js_title,
        doc_headline_ts_for_js_blurb,
        doc_headline_ts_first_title,
        doc_headline_ts_first_blurb,
        doc_headline_examples_title,
        doc_headline_examples_blurb,
        doc_learn_handbook_blurb,
    ];
}

copy_table! {
    /// 速查表文案
    pub struct CheatCopy for Cheatsheets {
        cht_layout_title,
        cht_layout_description,
        cht_download,
        cht_blurb_1,
        cht_blurb_2,
        cht_cfa,
        cht_interfaces,
        cht_types,
        cht_classes,
        cht_dl_title,
        cht_dl_subtitle,
    }
}

copy_table! {
    /// 站点首页文案
    pub struct IndexCopy for Index {
        index_2_headline,
        index_2_byline,
        index_2_summary,
        index_2_cta_install,
        index_2_cta_install_subtitle,
        index_2_cta_play,
        index_2_cta_play_subtitle,
        index_2_cta_download,
        index_2_cta_download_subtitle,
        index_2_tab_1,
        index_2_tab_2,
        index_2_tab_3,
        index_2_tab_4,
        index_2_tab_5,
        index_2_what_is,
        index_2_what_is_js,
        index_2_what_is_js_copy,
        index_2_trust,
        index_2_trust_copy,
        index_2_scale,
        index_2_scale_copy,
        /// 入门链接在页面上出现两次
        index_2_started_title,
        index_2_started_handbook,
        index_2_started_handbook_blurb,
        index_2_install,
        index_2_playground_blurb,
        index_2_migrate_1,
        index_2_migrate_2,
        index_2_migrate_3,
        index_2_migrate_4,
        index_2_migration_title,
        index_2_migration_oss,
        index_2_loved_by,
        index_2_loved_stack,
        index_2_loved_state_js,
        index_2_loved_state_js2,
        index_2_describe,
        index_2_describe_blurb1,
        index_2_describe_blurb2,
        index_2_transform,
        index_2_transform_1,
        index_2_transform_2,
        index_2_transform_3,
        index_2_adopt,
        index_2_adopt_blurb_1,
        index_2_adopt_blurb_2,
        index_2_adopt_info_1,
    }
}

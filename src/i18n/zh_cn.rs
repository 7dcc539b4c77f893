// ============================================================================
// CopyDeck - 中文翻译表
// ============================================================================
//
// 文件: src/i18n/zh_cn.rs
// 职责: 中文翻译内容定义
// 边界:
//   - ✅ 中文翻译字符串定义
//   - ✅ 翻译键值对维护
//   - ❌ 不应包含翻译逻辑
//   - ❌ 不应包含业务逻辑
//   - ❌ 不应包含其他语言翻译
//   - ❌ 不应包含站点文案表
//
// ============================================================================

/// 中文翻译表
pub const TRANSLATIONS: &[(&str, &str)] = &[
    // 错误信息
    ("error.command_failed", "命令执行失败: {}"),
    ("error.unknown_key", "键 '{}' 不存在于 {} ({})"),
    ("error.dir_not_exist", "目录不存在: {}"),
    ("error.no_tables_found", "{} 中没有找到文案表"),
    ("error.out_not_dir", "输出路径不是目录: {}"),
    // show 命令
    ("show.header", "{} / {}: 共 {} 条"),
    ("show.unused_hint", "其中 {} 条保留但未在站点上使用"),
    // check 命令
    ("cli.check.start", "开始检查文案表..."),
    ("cli.check.builtin", "检查内置语言: {}"),
    ("cli.check.loading_dir", "从 {} 加载文案表"),
    ("check.details", "问题详情"),
    ("check.table_header", "{} / {} (共 {} 条)"),
    ("check.table_clean", "{} / {}: 没有问题"),
    ("check.table_counts", "错误 {} 个，警告 {} 个，提示 {} 个"),
    ("check.untranslated_hidden", "{} 条未翻译 (使用 --detail 查看)"),
    ("check.summary", "已检查 {} 张表: 错误 {} 个，警告 {} 个，提示 {} 个"),
    ("check.kind_count", "{}: {}"),
    ("check.all_good", "所有文案表均一致"),
    ("check.failed", "文案检查未通过"),
    ("check.strict_warnings", "严格模式下警告也视为失败"),
    // 问题类型
    ("issue.missing_key", "缺少键"),
    ("issue.extra_key", "多余的键"),
    ("issue.duplicate_key", "重复的键"),
    ("issue.empty_value", "空文案"),
    ("issue.unbalanced_markup", "标记未配对"),
    ("issue.round_trip", "序列化往返后内容改变"),
    ("issue.unknown_tag", "未知标记"),
    ("issue.markup_mismatch", "标记与参考文案不一致"),
    ("issue.untranslated", "与参考文案相同"),
    // export 命令
    ("export.start", "导出 {} 张表到 {}"),
    ("export.written", "已写入 {}"),
    ("export.completed", "已导出 {} 个 {} 文件"),
    ("export.use_force_hint", "使用 --force 覆盖已存在的文件"),
    // init 命令
    ("init.start", "初始化 CopyDeck 配置..."),
    ("init.config_exists", "配置文件已存在: {}"),
    ("init.use_force_hint", "使用 --force 覆盖已存在的配置文件"),
    ("init.config_created", "已创建配置文件: {}"),
    ("init.next_steps", "可在 [check] 段调整允许的标记，然后运行 'copydeck check'"),
    ("init.create_failed", "创建配置文件失败: {}"),
];

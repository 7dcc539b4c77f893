use crate::copy::PlayCopy;

pub const PLAYGROUND: PlayCopy = PlayCopy {
    play_subnav_title: "Playground",
    play_subnav_config: "TS Config",
    play_config_language_blurb: "在编辑器中使用哪种语言",
    play_subnav_handbook: "帮助",
    play_subnav_examples: "示例",
    play_subnav_examples_close: "关闭",
    play_subnav_settings: "设置",
    play_settings_tabs_settings: "侧边栏 Tabs",
    play_downloading_typescript: "正在下载 TypeScript...",
    play_downloading_version: "Version...",
    play_toolbar_run: "Run",
    play_toolbar_export: "Export",
    play_toolbar_share: "Share",
    play_sidebar_js: ".JS",
    play_sidebar_dts: ".D.TS",
    play_sidebar_errors: "Errors",
    play_sidebar_errors_no_errors: "No errors",
    play_sidebar_logs: "Logs",
    play_sidebar_logs_no_logs: "No logs",
    play_sidebar_options: "Options",
    play_sidebar_options_restart_required: "需要刷新浏览器",
    play_sidebar_options_disable_ata: "禁用 ATA",
    play_sidebar_options_disable_ata_copy: "禁用 require 或 import 的自动类型获取。",
    play_sidebar_options_disable_save: "禁用即时保存",
    play_sidebar_options_disable_save_copy: "禁用在输入时更改 URL。",
    play_sidebar_plugins: "Plugins",
    play_sidebar_featured_plugins: "推荐 Plugins",
    play_sidebar_plugins_options_external: "来自<a href='https://www.npmjs.com/search?q=keywords:playground-plugin'>npm</a> 的第三方 Plugins",
    play_sidebar_plugins_options_external_warning: "警告：插件中的代码来自第三方。",
    play_sidebar_plugins_options_modules: "自定义 npm 模块",
    play_sidebar_plugins_options_modules_placeholder: "npm 上的模块。",
    play_sidebar_plugins_plugin_dev: "Plugin 开发",
    play_sidebar_plugins_plugin_dev_option: "访问 <code>localhost:5000</code>",
    play_sidebar_plugins_plugin_dev_copy: "在开发模式下自动尝试连接到演练场的插件。你可以在<a href='/dev/playground-plugins/' title='链接到演练场插件的相关页面'>这里开始创建一个插件</a>。",
    play_export_report_issue: "为 TypeScript 提交 Github issue。",
    play_export_tweet_md: "将 Playground 链接分享到 Twitter",
    play_export_copy_md: "复制为 Markdown 格式的 issue 模板",
    play_export_copy_link: "复制为 Markdown 格式的链接",
    play_export_copy_link_preview: "复制为 Markdown 格式可预览的链接",
    play_export_tsast: "在 TypeScript AST 查看器中打开",
    play_export_bugworkbench: "在 Bug Workbench 中打开",
    play_export_vscode_dev_play: "在 VSCode TS Playground（测试版）中打开",
    play_export_sandbox: "在 CodeSandbox 中打开",
    play_export_stackblitz: "在 StackBlitz 中打开",
    play_export_clipboard: "复制 URL 到剪贴板",
    play_esm_mode: "切换到 ESM 模式",
    play_clear_logs: "日志已清空",
    play_run_js: "已执行 JavaScript",
    play_run_ts: "已执行编译后的 TypeScript",
    play_run_js_fail: "执行 JavaScript 失败:",
    play_default_code_sample: concat!(
        "// 欢迎来到 TypeScript Playground, \n",
        "// 这是一个让您有机会编写、分享和学习 TypeScript 的网站。\n",
        "\n",
        "// 您可以从三个方面来理解它：\n",
        "//\n",
        "//  - 一个学习 TypeScript 的地方，在这里不会出现破坏性错误\n",
        "//  - 一个实验 TypeScript 语法的地方，并与他人分享 URL\n",
        "//  - 一个用于尝试 TypeScript 不同编译器特性的沙盒\n",
        "const anExampleVariable = \"Hello World\"\n",
        "console.log(anExampleVariable)\n",
        "\n",
        "// 要了解更多关于语言的内容，请点击上面的“示例”或“最新动态”。\n",
        "//  或者删除这些注释并且开始使用，整个 Playground 都属于你。\n",
        "  ",
    ),
    play_sidebar_js_title: "JavaScript",
    play_sidebar_js_blurb: "显示转换后的 JavaScript",
    play_sidebar_dts_title: "定义文件",
    play_sidebar_dts_blurb: "显示代码的 .d.ts 输出",
    play_sidebar_err_title: "编译器错误",
    play_sidebar_err_blurb: "完整显示编译器错误",
    play_sidebar_run_title: "在浏览器中运行 JavaScript",
    play_sidebar_run_blurb: "显示该编辑器中的代码运行后的输出",
    play_sidebar_plugins_title: "管理 Playground Plugins",
    play_sidebar_plugins_blurb: "向 Playground 添加/移除第三方扩展程序",
    play_sidebar_ast_title: "[WIP] AST 查看器",
    play_sidebar_ast_blurb: "检查 TypeScript 的抽象语法树（AST）",
    play_sidebar_tools_filter_placeholder: "筛选",
};

use crate::copy::PlayCopy;

pub const PLAYGROUND: PlayCopy = PlayCopy {
    play_subnav_title: "Playground",
    play_subnav_config: "TS Config",
    play_config_language_blurb: "Which language should be used in the editor",
    play_subnav_handbook: "Help",
    play_subnav_examples: "Examples",
    play_subnav_examples_close: "Close",
    play_subnav_settings: "Settings",
    play_settings_tabs_settings: "Sidebar Tabs",
    play_downloading_typescript: "Downloading TypeScript...",
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
    play_sidebar_options_restart_required: "Requires a restart of the playground",
    play_sidebar_options_disable_ata: "Disable ATA",
    play_sidebar_options_disable_ata_copy: "Disable Automatic Type Acquisition on require or import.",
    play_sidebar_options_disable_save: "Disable Save-On-Type",
    play_sidebar_options_disable_save_copy: "Disable changing the URL when you type.",
    play_sidebar_plugins: "Plugins",
    play_sidebar_featured_plugins: "Featured Plugins",
    play_sidebar_plugins_options_external: "Third-party plugins from <a href='https://www.npmjs.com/search?q=keywords:playground-plugin'>npm</a>",
    play_sidebar_plugins_options_external_warning: "Warning: Code from plugins are from third-parties.",
    play_sidebar_plugins_options_modules: "Custom npm Modules",
    play_sidebar_plugins_options_modules_placeholder: "Module from npm.",
    play_sidebar_plugins_plugin_dev: "Plugin Dev",
    play_sidebar_plugins_plugin_dev_option: "Connect to <code>localhost:5000</code>",
    play_sidebar_plugins_plugin_dev_copy: "Automatically try connect to a playground plugin in development mode. You can get started <a href='/dev/playground-plugins/' title='link to the playground plugins page'>here</a>.",
    play_export_report_issue: "Report GitHub issue on TypeScript",
    play_export_tweet_md: "Tweet link to Playground",
    play_export_copy_md: "Copy as Markdown Issue",
    play_export_copy_link: "Copy as Markdown Link",
    play_export_copy_link_preview: "Copy as Markdown Link with Preview",
    play_export_tsast: "Open in TypeScript AST Viewer",
    play_export_bugworkbench: "Open in Bug Workbench",
    play_export_vscode_dev_play: "Open in VSCode TS Playground (Beta)",
    play_export_sandbox: "Open in CodeSandbox",
    play_export_stackblitz: "Open in StackBlitz",
    play_export_clipboard: "Copy URL to clipboard",
    play_esm_mode: "Switch to ESM",
    play_clear_logs: "Cleared logs",
    play_run_js: "Executed JavaScript",
    play_run_ts: "Executed transpiled TypeScript",
    play_run_js_fail: "Failed to execute JavaScript:",
    play_default_code_sample: concat!(
        "// Welcome to the TypeScript Playground, this is a website\n",
        "// which gives you a chance to write, share and learn TypeScript.\n",
        "\n",
        "// You could think of it in three ways:\n",
        "//\n",
        "//  - A location to learn TypeScript where nothing can break\n",
        "//  - A place to experiment with TypeScript syntax, and share the URLs with others\n",
        "//  - A sandbox to experiment with different compiler features of TypeScript\n",
        "\n",
        "const anExampleVariable = \"Hello World\"\n",
        "console.log(anExampleVariable)\n",
        "\n",
        "// To learn more about the language, click above in \"Examples\" or \"What's New\".\n",
        "// Otherwise, get started by removing these comments and the world is your playground.\n",
        "  ",
    ),

    play_sidebar_js_title: "JavaScript",
    play_sidebar_js_blurb: "See the JavaScript output",
    play_sidebar_dts_title: "Definitions",
    play_sidebar_dts_blurb: "See the .d.ts output of your code",
    play_sidebar_err_title: "Compiler Errors",
    play_sidebar_err_blurb: "Show the full list of compiler errors",
    play_sidebar_run_title: "Run JavaScript in your Browser",
    play_sidebar_run_blurb: "Show output from running the code in the editor",
    play_sidebar_plugins_title: "Manage Playground Plugins",
    play_sidebar_plugins_blurb: "Add/Remove third-party extensions to the playground",
    play_sidebar_ast_title: "[WIP] AST Viewer",
    play_sidebar_ast_blurb: "Inspect the Abstract Syntax Tree of your TypeScript code",
    play_sidebar_tools_filter_placeholder: "Filter",
};

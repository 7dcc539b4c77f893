use crate::copy::DocCopy;

pub const DOCUMENTATION: DocCopy = DocCopy {
    doc_layout_title: "学习 TypeScript 的起点",
    doc_layout_description: "寻找 TypeScript 入门项目：从 Angular 到 React 或 Node.js 以及命令行界面（CLIs）。",
    doc_bootstrap_title: "TypeScript 项目的引导工具",
    doc_bootstrap_description: "构建 CLIs、Web 应用、APIs 和应用的工具链。",
    doc_headline: "学习资源",
    doc_headline_ts_for_js_title: "TS for JS",
    doc_headline_ts_for_js_blurb: "An overview of TypeScript for engineers with a JavaScript background",
    doc_headline_ts_first_title: "Start with TS",
    doc_headline_ts_first_blurb: "A beginners introduction to JavaScript and TypeScript",
    doc_headline_handbook_title: "Handbook",
    doc_headline_handbook_blurb: "TypeScript 语言参考",
    doc_headline_examples_title: "Examples",
    doc_headline_examples_blurb: "Comprehensive hands-on playground tutorials",
    doc_start_a_project: "开始一个新项目",
    doc_start_a_project_desc: "因为 TypeScript 是 JavaScript 的超集，它没有默认模板——那样会太多。相反，其他项目有自己的 TypeScript 引导模板，带有自己的上下文。这些项目提供的模板包括了 TypeScript 支持。",
    doc_node_npm: "使用 npm 的 Node",
    doc_node_npm_oclif_blurb: "创建用户喜爱的命令行工具",
    doc_node_npm_gluegun_blurb: "构建 TypeScript 驱动的命令行应用的愉悦工具包",
    doc_node_npm_tsup_blurb: "使用 esbuild 无需配置即可打包您的 TypeScript 库。",
    doc_frameworks: "Web 框架",
    doc_frameworks_angular_blurb: "现代 Web 开发者平台",
    doc_frameworks_ember_blurb: "雄心勃勃的 Web 开发者框架",
    doc_frameworks_react_blurb: "用于构建用户界面的 JavaScript 库",
    doc_frameworks_vue_blurb: "渐进式 JavaScript 框架",
    doc_frameworks_ror_blurb: "约定优于配置的 Web 框架",
    doc_frameworks_asp_blurb: "构建现代、基于云、互联网连接应用的框架",
    doc_apis: "Node API",
    doc_apis_azure_blurb: "在 VS Code 中几分钟内构建和部署",
    doc_apis_feather_blurb: "实时应用和 REST API 的框架",
    doc_apis_graphql_blurb: "几秒内启动您的 GraphQL 服务器",
    doc_apis_nest_blurb: "用于构建高效和可扩展服务器端应用的渐进式 Node.js 框架",
    doc_apis_node_blurb: "TS 团队提供的有文档的启动模板",
    doc_apis_wechat_blurb: "使用 TypeScript 与微信 JSSDK",
    doc_apis_loopback_blurb: "高度可扩展的 Node.js 和 TypeScript 框架，用于构建 API 和微服务",
    doc_apis_fastify_blurb: "快速且开销低的 Node.js Web 框架",
    doc_apis_foal_blurb: "优雅且完整的 Node.js 框架，用于构建 Web 应用",
    doc_react: "React 项目",
    doc_react_create_blurb: "通过运行一个命令设置现代 Web 应用",
    doc_react_gatsby_blurb: "帮助开发者构建快速的网站和应用",
    doc_react_next_blurb: "生产用的 React 框架",
    doc_react_redwood_blurb: "初创公司的 JS 应用框架",
    doc_react_razzle_blurb: "无需配置的服务器渲染通用 JavaScript 应用",
    doc_react_toolchains_title: "推荐的工具链",
    doc_react_toolchains_blurb: "来自 React 团队的推荐",
    doc_apps: "构建应用",
    doc_apps_electron_blurb: "使用 JavaScript、HTML 和 CSS 构建跨平台桌面应用",
    doc_apps_expo_blurb: "构建应用的最快方式",
    doc_apps_react_native_blurb: "一次学习，随处编写",
    doc_apps_native_script_blurb: "用于构建真正原生移动应用的开源框架",
    doc_apps_make_code_blurb: "为所有学生带来有趣的项目，让计算机科学栩栩如生",
    doc_tooling: "工具",
    doc_tooling_babel_blurb: "今天使用下一代 JavaScript",
    doc_tooling_parcel_blurb: "极速、零配置的 Web 应用打包器",
    doc_tooling_vite_blurb: "下一代前端工具",
    doc_tooling_webpack_blurb: "打包您的资产、脚本、图像和样式",
    doc_learn: "已经熟悉 TypeScript？",
    doc_learn_3_5_release_notes_title: "发布说明",
    doc_learn_handbook_blurb: "The TypeScript language reference",
    doc_learn_d_ts_title: "d.ts 指南",
    doc_learn_d_ts_blurb: "学习如何声明 JS 的结构",
    doc_learn_playground_blurb: "在线探索和分享 TypeScript",
    doc_cheatsheets_subnav_title: "速查表",
    doc_learn_cheatsheets_blurb: "一目了然的 TypeScript 语法",
};

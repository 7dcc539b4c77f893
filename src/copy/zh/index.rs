use crate::copy::IndexCopy;

pub const INDEX: IndexCopy = IndexCopy {
    index_2_headline: "TypeScript 是 <bold>带有类型语法的 JavaScript。</bold>",
    index_2_byline: "TypeScript 通过添加类型来扩展 JavaScript。",
    index_2_summary: "TypeScript 是一种强类型编程语言，它在 JavaScript 的基础上进行了扩展，无论在何种规模的项目中都能提供更好的工具支持。",
    index_2_cta_install: "立即尝试 TypeScript",
    index_2_cta_install_subtitle: "在线或通过 npm 安装",
    index_2_cta_play: "在您的浏览器中",
    index_2_cta_play_subtitle: "通过 Playgroud",
    index_2_cta_download: "在您的计算机上",
    index_2_cta_download_subtitle: "通过 npm",
    index_2_tab_1: "编辑器检查",
    index_2_tab_2: "自动补全",
    index_2_tab_3: "Interfaces",
    index_2_tab_4: "JSX",
    index_2_tab_5: "ESNext",
    index_2_what_is: "什么是 TypeScript?",
    index_2_what_is_js: "JavaScript 及其更多",
    index_2_what_is_js_copy: "TypeScript 在 JavaScript 的基础上增加了额外的语法，以支持与您的编辑器进行<strong>更紧密的集成</strong>。以便在编辑器中尽早捕获错误。",
    index_2_trust: "更值得信赖的结果",
    index_2_trust_copy: "TypeScript 代码转换为 JavaScript，这意味着它<strong>可以在任何运行 JavaScript 的地方运行</strong>：在浏览器中、Node.js 或 Deno 上以及您的应用程序中。",
    index_2_scale: "在任何规模的工程中均保持安全性",
    index_2_scale_copy: "TypeScript 理解 JavaScript 并使用<strong>类型推断来提供出色的工具支持</strong>，而无需额外编写代码。",
    index_2_started_title: "开始",
    index_2_started_handbook: "手册",
    index_2_started_handbook_blurb: "学习该语言",
    index_2_install: "安装 TypeScript",
    index_2_playground_blurb: "在您的浏览器中尝试",
    index_2_migrate_1: "JavaScript 文件",
    index_2_migrate_2: "带有 TypeScript 检查的 JavaScript",
    index_2_migrate_3: "带有 JSDoc 的 JavaScript",
    index_2_migrate_4: "TypeScript 文件",
    index_2_migration_title: "TypeScript 评价",
    index_2_migration_oss: "使用 TypeScript 的开源项目",
    index_2_loved_by: "深受开发者喜爱",
    index_2_loved_stack: "在 <so>Stack Overflow 2020 开发者调查</so> 中被评为<strong>第二受欢迎的编程语言</strong>",
    index_2_loved_state_js: "TypeScript 在 <js>2020 State of JS</js> 调查的受访者中有<strong>78%的使用率</strong>，其中<strong>93%表示会再次使用</strong>。",
    index_2_loved_state_js2: "基于年增长率，TypeScript 被授予了<strong>“Most Adopted Technology”</strong>奖项。",
    index_2_describe: "描述您的数据",
    index_2_describe_blurb1: "<strong>描述代码中对象和函数的结构</strong>。",
    index_2_describe_blurb2: "使得能够在<strong>编辑器中可以看到文档和问题</strong>。",
    index_2_transform: "TypeScript 通过删除部分内容变成 JavaScript。",
    index_2_transform_1: "<strong>TypeScript 文件</strong>。",
    index_2_transform_2: "<strong>类型被移除</strong>。",
    index_2_transform_3: "<strong>JavaScript 文件</strong>。",
    index_2_adopt: "逐步采用 TypeScript",
    index_2_adopt_blurb_1: "逐步将类型应用到您的 JavaScript 项目中，<strong>每一步都改善了编辑器的支持</strong>并提升了您的代码库。",
    index_2_adopt_blurb_2: "让我们以这段错误的 JavaScript 代码为例，看看 <strong>TypeScript 如何在编辑器中捕捉到错误</strong>。",
    index_2_adopt_info_1: "在 JavaScript 文件中没有编辑器警告。<br/><br/>这在运行时会崩溃。",
};

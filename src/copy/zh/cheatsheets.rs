use crate::copy::CheatCopy;

pub const CHEATSHEETS: CheatCopy = CheatCopy {
    cht_layout_title: "速查表",
    cht_layout_description: "TypeScript 语法速查表",
    cht_download: "下载 zip 包",
    cht_blurb_1: "可下载的 TypeScript 不同模块的常用语法",
    cht_blurb_2: "了解关于 Classes, Interfaces, Types 和 Control Flow Analysis 的更多信息",
    cht_cfa: "Control Flow Analysis",
    cht_interfaces: "Interfaces",
    cht_types: "Types",
    cht_classes: "Classes",
    cht_dl_title: "下载 PDF 和 PNG",
    cht_dl_subtitle: "稍后阅读或打印",
};

use crate::copy::HandbookCopy;

pub const HANDBOOK: HandbookCopy = HandbookCopy {
    handb_prev: "上一页",
    handb_next: "下一页",
    handb_on_this_page: "本页内容",
    handb_like_dislike_title: "本页面有帮助吗？",
    handb_like_desc: "是的",
    handb_dislike_desc: "不是",
    handb_thanks: "感谢您的反馈",
    handb_deprecated_title: "本页面已弃用",
    handb_deprecated_subtitle: "本手册页面已被替换，",
    handb_deprecated_subtitle_link: "转到新页面",
    handb_deprecated_subtitle_action: "前往新页面",
    handb_experimental_title: "本页面包含实验性文档",
    handb_experimental_subtitle: "内容涉及正在进行中的主题。",
};

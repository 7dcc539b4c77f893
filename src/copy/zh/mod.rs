//! 简体中文文案表。部分条目按作者原样保留英文，表示尚未翻译。

mod cheatsheets;
mod documentation;
mod handbook;
mod index;
mod nav;
mod playground;

use crate::copy::LocaleCopy;

pub use cheatsheets::CHEATSHEETS;
pub use documentation::DOCUMENTATION;
pub use handbook::HANDBOOK;
pub use index::INDEX;
pub use nav::NAV;
pub use playground::PLAYGROUND;

/// 简体中文全部分区
pub static COPY: LocaleCopy = LocaleCopy {
    nav: NAV,
    playground: PLAYGROUND,
    handbook: HANDBOOK,
    documentation: DOCUMENTATION,
    cheatsheets: CHEATSHEETS,
    index: INDEX,
};

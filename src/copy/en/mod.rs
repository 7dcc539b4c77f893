//! 英文文案表，作为其他语言校验键集合与占位标记的规范参考。

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

/// 英文全部分区
pub static COPY: LocaleCopy = LocaleCopy {
    nav: NAV,
    playground: PLAYGROUND,
    handbook: HANDBOOK,
    documentation: DOCUMENTATION,
    cheatsheets: CHEATSHEETS,
    index: INDEX,
};

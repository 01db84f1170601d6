//! View 层：UI 渲染
//!
//! 只读取 Model，不做任何状态修改。

pub mod components;
pub mod layout;
pub mod pages;
pub mod theme;

pub use layout::render;

//! Event 层：原始输入的采集与翻译
//!
//! 负责从终端读取 crossterm 事件，并翻译为语义化的 `AppMessage`。
//! 这里不修改任何状态。

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};

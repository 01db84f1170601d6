//! Util 层：基础设施和工具函数
//!
//! 提供与业务逻辑无关的基础设施代码，
//! 主要负责终端的初始化和恢复。

mod terminal;

pub use terminal::{init_terminal, restore_terminal, Term};

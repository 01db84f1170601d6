//! Message 层：状态变更意图定义
//!
//! 消息描述"发生了什么"，由 Event 层从原始输入翻译而来，
//! 由 Update 层消费并修改 Model。

mod app;
mod content;
mod modal;
mod navigation;

pub use app::AppMessage;
pub use content::ContentMessage;
pub use modal::ModalMessage;
pub use navigation::NavigationMessage;

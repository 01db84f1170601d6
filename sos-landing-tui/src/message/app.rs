//! 应用级消息

use super::{ContentMessage, ModalMessage, NavigationMessage};

/// 应用级消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 切换焦点面板
    ToggleFocus,

    /// 返回导航面板
    GoBack,

    /// 打开语言选择菜单
    ShowLanguageMenu,

    /// 导航消息
    Navigation(NavigationMessage),

    /// 内容区消息
    Content(ContentMessage),

    /// 弹窗消息
    Modal(ModalMessage),

    /// 清除状态栏消息
    ClearStatus,

    /// 无操作
    Noop,
}

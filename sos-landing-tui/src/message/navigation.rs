//! 导航消息

/// 导航栏消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationMessage {
    /// 选择上一项
    SelectPrevious,
    /// 选择下一项
    SelectNext,
    /// 跳到第一项
    SelectFirst,
    /// 跳到最后一项
    SelectLast,
    /// 确认选择，切换到对应页面
    Confirm,
}

//! 内容区消息

/// 内容面板消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentMessage {
    /// 向上滚动一行
    ScrollUp,
    /// 向下滚动一行
    ScrollDown,
    /// 向上翻页
    PageUp,
    /// 向下翻页
    PageDown,
    /// 回到顶部
    ScrollTop,

    /// 轮播：上一张截图
    PrevSlide,
    /// 轮播：下一张截图
    NextSlide,

    /// 订阅表单：输入字符
    Input(char),
    /// 订阅表单：删除字符
    Backspace,
    /// 订阅表单：提交
    Submit,
}

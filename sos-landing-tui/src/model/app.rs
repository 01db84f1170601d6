//! 应用主状态结构

use sos_landing_i18n::LanguageContext;

use super::{FocusPanel, ModalState, NavigationState, NewsletterState, Page, ScreenshotsState};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 导航状态
    pub navigation: NavigationState,

    /// 当前页面
    pub current_page: Page,

    /// 内容区垂直滚动偏移（切换页面时归零）
    pub scroll: u16,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 语言上下文（唯一写入点是语言菜单的确认操作）
    pub i18n: LanguageContext,

    // === 各页面状态 ===
    /// 截图轮播状态
    pub screenshots: ScreenshotsState,
    /// 订阅表单状态
    pub newsletter: NewsletterState,

    /// 弹窗状态
    pub modal: ModalState,
}

impl App {
    /// 创建新的应用实例
    pub fn new(i18n: LanguageContext) -> Self {
        Self {
            should_quit: false,
            focus: FocusPanel::Navigation,
            navigation: NavigationState::new(),
            current_page: Page::Hero,
            scroll: 0,
            status_message: None,
            i18n,
            screenshots: ScreenshotsState::new(),
            newsletter: NewsletterState::new(),
            modal: ModalState::new(),
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

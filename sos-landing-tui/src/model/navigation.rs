//! 导航状态定义

use sos_landing_i18n::LanguageContext;

/// 导航项 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItemId {
    Hero,
    Story,
    Features,
    Screenshots,
    Requirements,
    Reviews,
    Newsletter,
}

impl NavItemId {
    /// 解析导航项的显示标签。
    /// 截图页在原版里只是占位组件，没有对应的翻译键，沿用其硬编码英文。
    pub fn label(&self, i18n: &LanguageContext) -> &'static str {
        match self {
            NavItemId::Hero => i18n.translate("nav.main"),
            NavItemId::Story => i18n.translate("nav.about"),
            NavItemId::Features => i18n.translate("nav.gameFeatures"),
            NavItemId::Screenshots => "SCREENSHOTS",
            NavItemId::Requirements => i18n.translate("nav.systemRequirements"),
            NavItemId::Reviews => i18n.translate("nav.quotes"),
            NavItemId::Newsletter => i18n.translate("newsletter.subtitle"),
        }
    }
}

/// 导航项
#[derive(Debug, Clone)]
pub struct NavItem {
    pub id: NavItemId,
    pub icon: &'static str,
}

/// 导航状态
pub struct NavigationState {
    /// 导航项列表
    pub items: Vec<NavItem>,
    /// 当前选中的索引
    pub selected: usize,
}

impl NavigationState {
    /// 创建默认导航状态
    pub fn new() -> Self {
        Self {
            items: vec![
                NavItem {
                    id: NavItemId::Hero,
                    icon: "⌂",
                },
                NavItem {
                    id: NavItemId::Story,
                    icon: "☠",
                },
                NavItem {
                    id: NavItemId::Features,
                    icon: "★",
                },
                NavItem {
                    id: NavItemId::Screenshots,
                    icon: "▣",
                },
                NavItem {
                    id: NavItemId::Requirements,
                    icon: "≣",
                },
                NavItem {
                    id: NavItemId::Reviews,
                    icon: "❝",
                },
                NavItem {
                    id: NavItemId::Newsletter,
                    icon: "@",
                },
            ],
            selected: 0,
        }
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if self.selected < self.items.len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    /// 获取当前选中的导航项
    pub fn current_item(&self) -> Option<&NavItem> {
        self.items.get(self.selected)
    }

    /// 获取当前选中的导航项 ID
    pub fn current_id(&self) -> Option<NavItemId> {
        self.current_item().map(|item| item.id)
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}

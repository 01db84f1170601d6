//! 主题和样式定义
//!
//! 整个界面只有一套深色主题，基调取自游戏的末世配色：
//! 近黑的背景配暴风橙的点缀。

use ratatui::style::{Color, Modifier, Style};

/// 获取颜色方案
pub fn colors() -> ThemeColors {
    ThemeColors::dark()
}

/// 主题颜色
#[derive(Debug, Clone)]
pub struct ThemeColors {
    pub bg: Color,
    pub fg: Color,
    pub border: Color,
    pub border_focused: Color,
    pub highlight: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub success: Color,
    pub error: Color,
    pub muted: Color,
}

impl ThemeColors {
    /// 深色主题
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb(10, 10, 10),
            fg: Color::Rgb(220, 220, 220),
            border: Color::Rgb(62, 62, 62),
            border_focused: Color::Rgb(255, 179, 71),
            highlight: Color::Rgb(255, 179, 71),
            selected_bg: Color::Rgb(70, 45, 10),
            selected_fg: Color::Rgb(255, 214, 150),
            success: Color::Rgb(0, 255, 136),
            error: Color::Rgb(244, 135, 113),
            muted: Color::Rgb(128, 128, 128),
        }
    }
}

/// 常用样式
pub struct Styles;

impl Styles {
    /// 标题样式
    pub fn title() -> Style {
        Style::default()
            .fg(Color::Rgb(255, 179, 71))
            .add_modifier(Modifier::BOLD)
    }

    /// 状态栏样式
    pub fn statusbar() -> Style {
        Style::default()
            .bg(Color::Rgb(70, 45, 10))
            .fg(Color::Rgb(220, 220, 220))
    }

    /// 快捷键提示样式
    pub fn hint_key() -> Style {
        Style::default()
            .fg(Color::Rgb(255, 179, 71))
            .add_modifier(Modifier::BOLD)
    }

    /// 快捷键说明样式
    pub fn hint_desc() -> Style {
        Style::default().fg(Color::Rgb(180, 180, 180))
    }
}

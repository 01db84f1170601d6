//! 弹窗组件

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use sos_landing_i18n::Language;

use crate::model::{App, Modal};
use crate::view::theme::colors;

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::LanguageMenu { selected } => render_language_menu(app, frame, selected),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 渲染语言选择菜单
fn render_language_menu(app: &App, frame: &mut Frame, selected: usize) {
    let c = colors();
    let languages = Language::all();

    // 高度：语言条目 + 边框
    let height = languages.len() as u16 + 2;
    let area = centered_rect(30, height, frame.area());

    // 清除背景
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Language ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border_focused))
        .style(Style::default().bg(c.bg));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let current = app.i18n.current_language();
    let lines: Vec<Line> = languages
        .iter()
        .enumerate()
        .map(|(i, lang)| {
            let is_selected = i == selected;
            let marker = if *lang == current { "●" } else { "○" };
            let content = format!(" {} {} ({})", marker, lang.display_name(), lang.code());

            let style = if is_selected {
                Style::default()
                    .bg(c.selected_bg)
                    .fg(c.selected_fg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(c.fg)
            };

            Line::from(Span::styled(content, style))
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

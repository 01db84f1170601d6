//! 截图轮播视图

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::App;
use crate::view::theme::colors;

/// 渲染截图轮播
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let (title, caption) = app.screenshots.current_slide();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // 截图占位框
            Constraint::Length(1), // 说明文字
            Constraint::Length(1), // 位置指示
        ])
        .split(area);

    // 没有真实图片素材，用标题占位框代替
    let placeholder = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .title_style(
            Style::default()
                .fg(c.highlight)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border));
    frame.render_widget(placeholder, layout[0]);

    let caption_line = Paragraph::new(Line::from(Span::styled(
        caption,
        Style::default().fg(c.fg),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(caption_line, layout[1]);

    // ◀ ● ○ ○ ○ ▶ 形式的位置指示
    render_indicator(app, frame, layout[2]);
}

/// 渲染轮播位置指示
fn render_indicator(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let mut spans = vec![Span::styled("◀ ", Style::default().fg(c.muted))];

    for i in 0..app.screenshots.len() {
        let dot = if i == app.screenshots.current {
            Span::styled("● ", Style::default().fg(c.highlight))
        } else {
            Span::styled("○ ", Style::default().fg(c.muted))
        };
        spans.push(dot);
    }

    spans.push(Span::styled("▶", Style::default().fg(c.muted)));

    let indicator = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(indicator, area);
}

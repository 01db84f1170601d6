//! 剧情介绍视图

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::model::App;
use crate::view::theme::colors;

/// 渲染剧情介绍
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let i18n = &app.i18n;

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", i18n.translate("story.subtitle")),
            Style::default().fg(c.muted),
        )),
        Line::from(Span::styled(
            format!("  {}", i18n.translate("story.title")),
            Style::default()
                .fg(c.highlight)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", i18n.translate("story.description")),
            Style::default().fg(c.fg),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("  ◆ ", Style::default().fg(c.highlight)),
            Span::styled(
                i18n.translate("story.gameplay.players"),
                Style::default().fg(c.fg),
            ),
        ]),
        Line::from(vec![
            Span::styled("  ◆ ", Style::default().fg(c.highlight)),
            Span::styled(
                i18n.translate("story.gameplay.survivors"),
                Style::default().fg(c.fg),
            ),
        ]),
        Line::from(vec![
            Span::styled("  ◆ ", Style::default().fg(c.highlight)),
            Span::styled(
                i18n.translate("story.gameplay.timeLimit"),
                Style::default().fg(c.fg),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", i18n.translate("story.gameplay.decision")),
            Style::default().fg(c.muted).add_modifier(Modifier::ITALIC),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));
    frame.render_widget(paragraph, area);
}

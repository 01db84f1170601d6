//! 系统需求视图

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::model::App;
use crate::view::theme::colors;

/// 规格条目的标签与取值键
const SPEC_ROWS: &[(&str, &str)] = &[
    ("systemReq.specs.os", "systemReq.values.os"),
    ("systemReq.specs.processor", "systemReq.values.processor"),
    ("systemReq.specs.memory", "systemReq.values.memory"),
    ("systemReq.specs.storage", "systemReq.values.storage"),
    ("systemReq.specs.graphics", "systemReq.values.graphics"),
];

/// 渲染系统需求
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let i18n = &app.i18n;

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", i18n.translate("systemReq.subtitle")),
            Style::default().fg(c.muted),
        )),
        Line::from(Span::styled(
            format!("  {}", i18n.translate("systemReq.title")),
            Style::default()
                .fg(c.highlight)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for (label_key, value_key) in SPEC_ROWS {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {} ", i18n.translate(label_key)),
                Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
            ),
            Span::styled(i18n.translate(value_key), Style::default().fg(c.fg)),
        ]));
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));
    frame.render_widget(paragraph, area);
}

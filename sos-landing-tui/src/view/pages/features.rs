//! 游戏特性视图

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::model::App;
use crate::view::theme::colors;

/// 特性条目的标题与描述键
const FEATURE_ITEMS: &[(&str, &str)] = &[
    (
        "features.items.survive.title",
        "features.items.survive.description",
    ),
    (
        "features.items.allies.title",
        "features.items.allies.description",
    ),
    (
        "features.items.audience.title",
        "features.items.audience.description",
    ),
];

/// 渲染游戏特性
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let i18n = &app.i18n;

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", i18n.translate("features.subtitle")),
            Style::default().fg(c.muted),
        )),
        Line::from(Span::styled(
            format!("  {}", i18n.translate("features.title")),
            Style::default()
                .fg(c.highlight)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for (title_key, description_key) in FEATURE_ITEMS {
        let title = i18n.translate(title_key);
        let description = i18n.translate(description_key);

        lines.push(Line::from(Span::styled(
            format!("  ★ {title}"),
            Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("    {description}"),
            Style::default().fg(c.muted),
        )));
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));
    frame.render_widget(paragraph, area);
}

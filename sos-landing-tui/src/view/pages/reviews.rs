//! 玩家评价视图

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::model::App;
use crate::view::theme::colors;

/// 媒体评价条目：姓名、头衔、引语、日期的键
const REVIEWERS: &[(&str, &str, &str, &str)] = &[
    (
        "reviews.reviewers.evanLahti.name",
        "reviews.reviewers.evanLahti.title",
        "reviews.reviewers.evanLahti.quote",
        "reviews.reviewers.evanLahti.date",
    ),
    (
        "reviews.reviewers.jadaGriffin.name",
        "reviews.reviewers.jadaGriffin.title",
        "reviews.reviewers.jadaGriffin.quote",
        "reviews.reviewers.jadaGriffin.date",
    ),
    (
        "reviews.reviewers.aaronWilliams.name",
        "reviews.reviewers.aaronWilliams.title",
        "reviews.reviewers.aaronWilliams.quote",
        "reviews.reviewers.aaronWilliams.date",
    ),
];

/// 渲染玩家评价
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let i18n = &app.i18n;

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", i18n.translate("reviews.subtitle")),
            Style::default().fg(c.muted),
        )),
        Line::from(Span::styled(
            format!("  {}", i18n.translate("reviews.title")),
            Style::default()
                .fg(c.highlight)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", i18n.translate("reviews.description")),
            Style::default().fg(c.fg),
        )),
        Line::from(""),
    ];

    for (name_key, title_key, quote_key, date_key) in REVIEWERS {
        lines.push(Line::from(Span::styled(
            format!("  ❝ {} ❞", i18n.translate(quote_key)),
            Style::default().fg(c.fg).add_modifier(Modifier::ITALIC),
        )));
        lines.push(Line::from(vec![
            Span::styled(
                format!("    — {}", i18n.translate(name_key)),
                Style::default()
                    .fg(c.highlight)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(", {} · {}", i18n.translate(title_key), i18n.translate(date_key)),
                Style::default().fg(c.muted),
            ),
        ]));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        format!("  [ {} ]", i18n.translate("reviews.ctaButton")),
        Style::default().fg(c.bg).bg(c.highlight),
    )));

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));
    frame.render_widget(paragraph, area);
}

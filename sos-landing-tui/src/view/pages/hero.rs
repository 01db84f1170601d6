//! 首屏视图

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::model::App;
use crate::view::theme::colors;

/// 渲染首屏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let i18n = &app.i18n;

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", i18n.translate("hero.title")),
            Style::default()
                .fg(c.highlight)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", i18n.translate("hero.subtitle")),
            Style::default().fg(c.fg),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!("  [ {} — {} ]", i18n.translate("hero.ctaButton"), i18n.translate("hero.price")),
                Style::default()
                    .fg(c.bg)
                    .bg(c.highlight)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(""),
        // 向下滚动的指引，对应原版页面底部的箭头
        Line::from(Span::styled(
            format!("  ▼ {}", i18n.translate("hero.scrollHint")),
            Style::default().fg(c.muted),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));
    frame.render_widget(paragraph, area);
}

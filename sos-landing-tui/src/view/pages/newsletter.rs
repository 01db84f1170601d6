//! 订阅表单视图

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use unicode_width::UnicodeWidthStr;

use crate::model::{App, NewsletterPhase};
use crate::view::theme::colors;

/// 渲染订阅表单
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let i18n = &app.i18n;

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // 标题与描述
            Constraint::Length(3), // 输入框
            Constraint::Min(1),    // 提示区
        ])
        .split(area);

    // 标题与描述
    let header = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", i18n.translate("newsletter.subtitle")),
            Style::default().fg(c.muted),
        )),
        Line::from(Span::styled(
            format!("  {}", i18n.translate("newsletter.title")),
            Style::default()
                .fg(c.highlight)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", i18n.translate("newsletter.description")),
            Style::default().fg(c.fg),
        )),
    ];
    frame.render_widget(Paragraph::new(header).wrap(Wrap { trim: false }), layout[0]);

    // 输入框：为空时显示占位文本
    render_input(app, frame, layout[1]);

    // 提示区：校验错误 / 提交进度 / 成功提示 / 隐私说明
    render_feedback(app, frame, layout[2]);
}

/// 渲染邮箱输入框
fn render_input(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let state = &app.newsletter;

    let block = Block::default()
        .title(format!(" {} ", app.i18n.translate("newsletter.ctaButton")))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if state.error.is_some() {
            c.error
        } else {
            c.border_focused
        }));

    let content = if state.email.is_empty() {
        Span::styled(
            app.i18n.translate("newsletter.placeholder"),
            Style::default().fg(c.muted).add_modifier(Modifier::ITALIC),
        )
    } else {
        // 输入过长时只保留能容纳的尾部，光标保持可见
        let inner_width = area.width.saturating_sub(3) as usize;
        let mut shown = state.email.as_str();
        while shown.width() > inner_width && !shown.is_empty() {
            let mut chars = shown.chars();
            chars.next();
            shown = chars.as_str();
        }
        Span::styled(shown.to_string(), Style::default().fg(c.fg))
    };

    // 编辑态在末尾显示光标
    let mut spans = vec![content];
    if state.is_editing() && !state.email.is_empty() {
        spans.push(Span::styled("█", Style::default().fg(c.highlight)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// 渲染表单下方的反馈信息
fn render_feedback(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let state = &app.newsletter;

    let line = match &state.phase {
        NewsletterPhase::Submitting { .. } => Line::from(Span::styled(
            format!("  ⏳ {}", app.i18n.translate("common.loading")),
            Style::default().fg(c.highlight),
        )),
        NewsletterPhase::Submitted { .. } => Line::from(Span::styled(
            format!("  ✔ {}", app.i18n.translate("common.success")),
            Style::default().fg(c.success).add_modifier(Modifier::BOLD),
        )),
        NewsletterPhase::Editing => {
            if let Some(error) = &state.error {
                Line::from(Span::styled(
                    format!("  ✘ {error}"),
                    Style::default().fg(c.error),
                ))
            } else {
                Line::from(Span::styled(
                    format!("  {}", app.i18n.translate("newsletter.privacy")),
                    Style::default().fg(c.muted),
                ))
            }
        }
    };

    frame.render_widget(Paragraph::new(line), area);
}

//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::{App, Page};

use super::components;
use super::pages;
use super::theme::colors;

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();
    let c = colors();

    // 整体背景
    frame.render_widget(
        Block::default().style(Style::default().bg(c.bg)),
        size,
    );

    // 四层布局：标题栏 + 主内容区 + 页脚 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 页脚
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    let title_area = main_layout[0];
    let content_area = main_layout[1];
    let footer_area = main_layout[2];
    let status_area = main_layout[3];

    // 渲染标题栏
    render_title_bar(app, frame, title_area);

    // 左右分栏布局
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25), // 左侧导航
            Constraint::Percentage(75), // 右侧内容
        ])
        .split(content_area);

    let nav_area = columns[0];
    let page_area = columns[1];

    // 渲染左侧导航
    components::navigation::render(app, frame, nav_area);

    // 渲染右侧内容
    render_page_content(app, frame, page_area);

    // 渲染页脚
    render_footer(app, frame, footer_area);

    // 渲染状态栏
    components::statusbar::render(app, frame, status_area);

    // 渲染弹窗（在最上层）
    components::modal::render(app, frame);
}

/// 渲染标题栏
fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = Paragraph::new(format!(
        " ☣ SOS — {} · [{}]",
        app.i18n.translate("hero.subtitle"),
        app.i18n.current_language().code().to_uppercase()
    ))
    .style(Style::default().bg(c.highlight).fg(c.bg));
    frame.render_widget(title, area);
}

/// 渲染页脚：版权信息 + 链接行
fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let links = [
        app.i18n.translate("footer.links.privacy"),
        app.i18n.translate("footer.links.terms"),
        app.i18n.translate("footer.links.conduct"),
    ];

    let mut spans = vec![Span::styled(
        format!(" {} ", app.i18n.translate("footer.copyright")),
        Style::default().fg(c.muted),
    )];
    for link in links {
        spans.push(Span::styled("│ ", Style::default().fg(c.border)));
        spans.push(Span::styled(
            format!("{link} "),
            Style::default().fg(c.fg).add_modifier(Modifier::UNDERLINED),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// 根据当前页面渲染内容
fn render_page_content(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    // 内容区域的边框
    let is_focused = app.focus.is_content();
    let border_style = if is_focused {
        Style::default().fg(c.border_focused)
    } else {
        Style::default().fg(c.border)
    };

    // 页面标题直接复用导航标签
    let page_title = app
        .navigation
        .items
        .iter()
        .find(|item| page_matches(app.current_page, item.id))
        .map(|item| item.id.label(&app.i18n))
        .unwrap_or_default();

    let block = Block::default()
        .title(format!(" {page_title} "))
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    // 根据当前页面渲染具体内容
    match app.current_page {
        Page::Hero => pages::hero::render(app, frame, inner_area),
        Page::Story => pages::story::render(app, frame, inner_area),
        Page::Features => pages::features::render(app, frame, inner_area),
        Page::Screenshots => pages::screenshots::render(app, frame, inner_area),
        Page::Requirements => pages::requirements::render(app, frame, inner_area),
        Page::Reviews => pages::reviews::render(app, frame, inner_area),
        Page::Newsletter => pages::newsletter::render(app, frame, inner_area),
    }
}

/// 页面与导航项的对应关系
fn page_matches(page: Page, id: crate::model::NavItemId) -> bool {
    use crate::model::NavItemId;
    matches!(
        (page, id),
        (Page::Hero, NavItemId::Hero)
            | (Page::Story, NavItemId::Story)
            | (Page::Features, NavItemId::Features)
            | (Page::Screenshots, NavItemId::Screenshots)
            | (Page::Requirements, NavItemId::Requirements)
            | (Page::Reviews, NavItemId::Reviews)
            | (Page::Newsletter, NavItemId::Newsletter)
    )
}

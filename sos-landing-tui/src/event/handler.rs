//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, ModalMessage, NavigationMessage};
use crate::model::{App, Page};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // 终端窗口大小改变，自动重绘
        Event::Resize(_, _) => AppMessage::Noop,
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 重要：只处理 Press 事件，忽略 Release 和 Repeat
    // 避免 Windows 终端上按键重复问题的发生
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if app.modal.is_open() {
        return handle_modal_keys(key);
    }

    // 全局快捷键（无论焦点在哪里）
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::LANGUAGE.matches(&key) {
        return AppMessage::ShowLanguageMenu;
    }

    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }

    // Tab: 切换焦点面板
    if key.modifiers.is_empty() && key.code == KeyCode::Tab {
        return AppMessage::ToggleFocus;
    }

    // 根据焦点位置处理按键
    if app.focus.is_navigation() {
        handle_navigation_keys(key)
    } else {
        handle_content_keys(key, app)
    }
}

/// 处理弹窗（语言菜单）的按键
fn handle_modal_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Esc => AppMessage::Modal(ModalMessage::Close),
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Modal(ModalMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Modal(ModalMessage::SelectNext),
        KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
        _ => AppMessage::Noop,
    }
}

/// 处理导航面板的按键
fn handle_navigation_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // ↑ 或 k: 上移
        KeyCode::Up | KeyCode::Char('k') => {
            AppMessage::Navigation(NavigationMessage::SelectPrevious)
        }

        // ↓ 或 j: 下移
        KeyCode::Down | KeyCode::Char('j') => {
            AppMessage::Navigation(NavigationMessage::SelectNext)
        }

        // Enter: 确认选择
        KeyCode::Enter => AppMessage::Navigation(NavigationMessage::Confirm),

        // Home: 跳到第一项
        KeyCode::Home => AppMessage::Navigation(NavigationMessage::SelectFirst),

        // End: 跳到最后一项
        KeyCode::End => AppMessage::Navigation(NavigationMessage::SelectLast),

        _ => AppMessage::Noop,
    }
}

/// 处理内容面板的按键
fn handle_content_keys(key: KeyEvent, app: &App) -> AppMessage {
    // 页面特定按键优先于通用滚动
    match app.current_page {
        Page::Screenshots => {
            // ← →: 切换截图
            if key.code == KeyCode::Left {
                return AppMessage::Content(ContentMessage::PrevSlide);
            }
            if key.code == KeyCode::Right {
                return AppMessage::Content(ContentMessage::NextSlide);
            }
        }
        Page::Newsletter => {
            // 订阅表单的文本输入
            match key.code {
                KeyCode::Char(c) if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT => {
                    return AppMessage::Content(ContentMessage::Input(c));
                }
                KeyCode::Backspace => {
                    return AppMessage::Content(ContentMessage::Backspace);
                }
                KeyCode::Enter => {
                    return AppMessage::Content(ContentMessage::Submit);
                }
                _ => {}
            }
        }
        _ => {}
    }

    // 通用滚动
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::ScrollUp),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::ScrollDown),
        KeyCode::PageUp => AppMessage::Content(ContentMessage::PageUp),
        KeyCode::PageDown => AppMessage::Content(ContentMessage::PageDown),
        KeyCode::Home => AppMessage::Content(ContentMessage::ScrollTop),
        _ => AppMessage::Noop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FocusPanel;
    use sos_landing_i18n::{LanguageContext, MemoryPreferenceStore, CATALOG};

    fn test_app() -> App {
        let store = Box::new(MemoryPreferenceStore::new());
        App::new(LanguageContext::new(&CATALOG, store))
    }

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn ctrl_c_quits() {
        let app = test_app();
        let msg = handle_event(press(KeyCode::Char('c'), KeyModifiers::CONTROL), &app);
        assert_eq!(msg, AppMessage::Quit);
    }

    #[test]
    fn alt_l_opens_language_menu() {
        let app = test_app();
        let msg = handle_event(press(KeyCode::Char('l'), KeyModifiers::ALT), &app);
        assert_eq!(msg, AppMessage::ShowLanguageMenu);
    }

    #[test]
    fn modal_takes_priority_over_globals() {
        let mut app = test_app();
        app.modal.show_language_menu(0);
        let msg = handle_event(press(KeyCode::Char('l'), KeyModifiers::ALT), &app);
        assert_eq!(msg, AppMessage::Noop);
        let msg = handle_event(press(KeyCode::Enter, KeyModifiers::NONE), &app);
        assert_eq!(msg, AppMessage::Modal(ModalMessage::Confirm));
    }

    #[test]
    fn arrows_move_navigation_when_focused() {
        let app = test_app();
        let msg = handle_event(press(KeyCode::Down, KeyModifiers::NONE), &app);
        assert_eq!(msg, AppMessage::Navigation(NavigationMessage::SelectNext));
    }

    #[test]
    fn typing_reaches_newsletter_form() {
        let mut app = test_app();
        app.focus = FocusPanel::Content;
        app.current_page = Page::Newsletter;
        let msg = handle_event(press(KeyCode::Char('a'), KeyModifiers::NONE), &app);
        assert_eq!(msg, AppMessage::Content(ContentMessage::Input('a')));
        let msg = handle_event(press(KeyCode::Enter, KeyModifiers::NONE), &app);
        assert_eq!(msg, AppMessage::Content(ContentMessage::Submit));
    }

    #[test]
    fn left_right_change_slides_on_screenshots() {
        let mut app = test_app();
        app.focus = FocusPanel::Content;
        app.current_page = Page::Screenshots;
        let msg = handle_event(press(KeyCode::Right, KeyModifiers::NONE), &app);
        assert_eq!(msg, AppMessage::Content(ContentMessage::NextSlide));
    }

    #[test]
    fn release_events_are_ignored() {
        let app = test_app();
        let mut key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        key.kind = KeyEventKind::Release;
        assert_eq!(handle_event(Event::Key(key), &app), AppMessage::Noop);
    }
}

//! Update 层：状态更新逻辑
//!
//! 这是唯一允许修改 Model 的地方。
//! 顶层 `update` 按消息类型分发到子模块。

mod content;
mod modal;
mod navigation;

use std::time::Instant;

use sos_landing_i18n::Language;

use crate::message::AppMessage;
use crate::model::App;

/// 处理应用级消息，分发到各子模块
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            app.focus = app.focus.toggle();
        }

        AppMessage::GoBack => {
            app.focus = crate::model::FocusPanel::Navigation;
        }

        AppMessage::ShowLanguageMenu => {
            let current = app.i18n.current_language();
            let selected = Language::all()
                .iter()
                .position(|lang| *lang == current)
                .unwrap_or(0);
            app.modal.show_language_menu(selected);
        }

        AppMessage::Navigation(nav_msg) => {
            navigation::update(app, nav_msg);
        }

        AppMessage::Content(content_msg) => {
            content::update(app, content_msg);
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
        }

        AppMessage::ClearStatus => {
            app.clear_status();
        }

        AppMessage::Noop => {}
    }
}

/// 推进与时间相关的状态，由主循环每轮调用
pub fn tick(app: &mut App) {
    app.newsletter.tick(Instant::now());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{ModalMessage, NavigationMessage};
    use crate::model::{FocusPanel, Modal, Page};
    use sos_landing_i18n::{LanguageContext, MemoryPreferenceStore, CATALOG};

    fn test_app() -> App {
        let store = Box::new(MemoryPreferenceStore::new());
        App::new(LanguageContext::new(&CATALOG, store))
    }

    #[test]
    fn quit_sets_flag() {
        let mut app = test_app();
        update(&mut app, AppMessage::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn toggle_focus_switches_panel() {
        let mut app = test_app();
        assert_eq!(app.focus, FocusPanel::Navigation);
        update(&mut app, AppMessage::ToggleFocus);
        assert_eq!(app.focus, FocusPanel::Content);
        update(&mut app, AppMessage::ToggleFocus);
        assert_eq!(app.focus, FocusPanel::Navigation);
    }

    #[test]
    fn go_back_returns_to_navigation() {
        let mut app = test_app();
        app.focus = FocusPanel::Content;
        update(&mut app, AppMessage::GoBack);
        assert_eq!(app.focus, FocusPanel::Navigation);
    }

    #[test]
    fn show_language_menu_highlights_current() {
        let mut app = test_app();
        app.i18n.set_language(Language::Fra);
        update(&mut app, AppMessage::ShowLanguageMenu);
        assert_eq!(app.modal.active, Some(Modal::LanguageMenu { selected: 2 }));
    }

    #[test]
    fn language_menu_confirm_switches_language() {
        let mut app = test_app();
        update(&mut app, AppMessage::ShowLanguageMenu);
        update(&mut app, AppMessage::Modal(ModalMessage::SelectNext));
        update(&mut app, AppMessage::Modal(ModalMessage::Confirm));
        assert_eq!(app.i18n.current_language(), Language::Rus);
        assert!(!app.modal.is_open());
        assert!(app.status_message.is_some());
    }

    #[test]
    fn navigation_confirm_changes_page_and_resets_scroll() {
        let mut app = test_app();
        app.scroll = 7;
        update(&mut app, AppMessage::Navigation(NavigationMessage::SelectNext));
        update(&mut app, AppMessage::Navigation(NavigationMessage::Confirm));
        assert_eq!(app.current_page, Page::Story);
        assert_eq!(app.scroll, 0);
        assert_eq!(app.focus, FocusPanel::Content);
    }
}

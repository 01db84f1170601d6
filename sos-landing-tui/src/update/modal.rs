//! 弹窗更新逻辑

use sos_landing_i18n::Language;

use crate::message::ModalMessage;
use crate::model::{App, Modal};

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) {
    let Some(Modal::LanguageMenu { selected }) = app.modal.active else {
        return;
    };

    match msg {
        ModalMessage::Close => {
            app.modal.close();
        }
        ModalMessage::SelectPrevious => {
            let count = Language::all().len();
            let next = if selected == 0 { count - 1 } else { selected - 1 };
            app.modal.show_language_menu(next);
        }
        ModalMessage::SelectNext => {
            let count = Language::all().len();
            app.modal.show_language_menu((selected + 1) % count);
        }
        ModalMessage::Confirm => {
            if let Some(language) = Language::all().get(selected).copied() {
                app.i18n.set_language(language);
                app.set_status(format!("✔ {}", language.display_name()));
            }
            app.modal.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sos_landing_i18n::{LanguageContext, MemoryPreferenceStore, CATALOG};

    fn test_app() -> App {
        let store = Box::new(MemoryPreferenceStore::new());
        let mut app = App::new(LanguageContext::new(&CATALOG, store));
        app.modal.show_language_menu(0);
        app
    }

    #[test]
    fn selection_wraps_both_directions() {
        let mut app = test_app();
        update(&mut app, ModalMessage::SelectPrevious);
        assert_eq!(
            app.modal.active,
            Some(Modal::LanguageMenu {
                selected: Language::all().len() - 1
            })
        );
        update(&mut app, ModalMessage::SelectNext);
        assert_eq!(app.modal.active, Some(Modal::LanguageMenu { selected: 0 }));
    }

    #[test]
    fn confirm_applies_selected_language() {
        let mut app = test_app();
        update(&mut app, ModalMessage::SelectNext);
        update(&mut app, ModalMessage::SelectNext);
        update(&mut app, ModalMessage::Confirm);
        assert_eq!(app.i18n.current_language(), Language::Fra);
        assert!(!app.modal.is_open());
    }

    #[test]
    fn close_keeps_language() {
        let mut app = test_app();
        update(&mut app, ModalMessage::SelectNext);
        update(&mut app, ModalMessage::Close);
        assert_eq!(app.i18n.current_language(), Language::En);
        assert!(!app.modal.is_open());
    }

    #[test]
    fn messages_ignored_when_no_modal() {
        let mut app = test_app();
        app.modal.close();
        update(&mut app, ModalMessage::Confirm);
        assert_eq!(app.i18n.current_language(), Language::En);
    }
}

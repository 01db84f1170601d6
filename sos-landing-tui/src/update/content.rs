//! 内容区更新逻辑

use std::time::Instant;

use crate::message::ContentMessage;
use crate::model::{App, Page};

/// 翻页的滚动行数
const PAGE_STEP: u16 = 5;

/// 处理内容面板消息
pub fn update(app: &mut App, msg: ContentMessage) {
    match msg {
        ContentMessage::ScrollUp => {
            app.scroll = app.scroll.saturating_sub(1);
        }
        ContentMessage::ScrollDown => {
            app.scroll = app.scroll.saturating_add(1);
        }
        ContentMessage::PageUp => {
            app.scroll = app.scroll.saturating_sub(PAGE_STEP);
        }
        ContentMessage::PageDown => {
            app.scroll = app.scroll.saturating_add(PAGE_STEP);
        }
        ContentMessage::ScrollTop => {
            app.scroll = 0;
        }

        ContentMessage::PrevSlide => {
            if app.current_page == Page::Screenshots {
                app.screenshots.prev_slide();
            }
        }
        ContentMessage::NextSlide => {
            if app.current_page == Page::Screenshots {
                app.screenshots.next_slide();
            }
        }

        ContentMessage::Input(c) => {
            if app.current_page == Page::Newsletter {
                app.newsletter.input(c);
            }
        }
        ContentMessage::Backspace => {
            if app.current_page == Page::Newsletter {
                app.newsletter.backspace();
            }
        }
        ContentMessage::Submit => {
            if app.current_page == Page::Newsletter
                && !app.newsletter.submit(Instant::now())
                && app.newsletter.is_editing()
            {
                // 原版表单的校验提示没有翻译键，依赖字面键回退原样显示
                let message = app
                    .i18n
                    .translate("Please enter a valid email address")
                    .to_string();
                app.newsletter.error = Some(message);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NewsletterPhase;
    use sos_landing_i18n::{LanguageContext, MemoryPreferenceStore, CATALOG};

    fn test_app() -> App {
        let store = Box::new(MemoryPreferenceStore::new());
        App::new(LanguageContext::new(&CATALOG, store))
    }

    #[test]
    fn scroll_saturates_at_zero() {
        let mut app = test_app();
        update(&mut app, ContentMessage::ScrollUp);
        assert_eq!(app.scroll, 0);
        update(&mut app, ContentMessage::ScrollDown);
        update(&mut app, ContentMessage::ScrollDown);
        assert_eq!(app.scroll, 2);
        update(&mut app, ContentMessage::ScrollTop);
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn slides_only_move_on_screenshots_page() {
        let mut app = test_app();
        update(&mut app, ContentMessage::NextSlide);
        assert_eq!(app.screenshots.current, 0);

        app.current_page = Page::Screenshots;
        update(&mut app, ContentMessage::NextSlide);
        assert_eq!(app.screenshots.current, 1);
    }

    #[test]
    fn invalid_submit_sets_literal_error() {
        let mut app = test_app();
        app.current_page = Page::Newsletter;
        update(&mut app, ContentMessage::Input('x'));
        update(&mut app, ContentMessage::Submit);
        assert_eq!(
            app.newsletter.error.as_deref(),
            Some("Please enter a valid email address")
        );
        assert_eq!(app.newsletter.phase, NewsletterPhase::Editing);
    }

    #[test]
    fn valid_submit_enters_submitting_phase() {
        let mut app = test_app();
        app.current_page = Page::Newsletter;
        for c in "survivor@example.com".chars() {
            update(&mut app, ContentMessage::Input(c));
        }
        update(&mut app, ContentMessage::Submit);
        assert!(matches!(
            app.newsletter.phase,
            NewsletterPhase::Submitting { .. }
        ));
        assert!(app.newsletter.error.is_none());
    }

    #[test]
    fn typing_ignored_off_newsletter_page() {
        let mut app = test_app();
        update(&mut app, ContentMessage::Input('a'));
        assert!(app.newsletter.email.is_empty());
    }
}

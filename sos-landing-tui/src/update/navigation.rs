//! 导航栏更新逻辑

use crate::message::NavigationMessage;
use crate::model::{App, FocusPanel, NavItemId, Page};

/// 处理导航消息
pub fn update(app: &mut App, msg: NavigationMessage) {
    match msg {
        NavigationMessage::SelectPrevious => {
            app.navigation.select_previous();
        }
        NavigationMessage::SelectNext => {
            app.navigation.select_next();
        }
        NavigationMessage::SelectFirst => {
            app.navigation.selected = 0;
        }
        NavigationMessage::SelectLast => {
            app.navigation.selected = app.navigation.items.len().saturating_sub(1);
        }
        NavigationMessage::Confirm => {
            if let Some(id) = app.navigation.current_id() {
                app.current_page = page_for(id);
                // 切换页面时滚动归零，焦点移入内容区
                app.scroll = 0;
                app.focus = FocusPanel::Content;
            }
        }
    }
}

/// 导航项到页面的映射
fn page_for(id: NavItemId) -> Page {
    match id {
        NavItemId::Hero => Page::Hero,
        NavItemId::Story => Page::Story,
        NavItemId::Features => Page::Features,
        NavItemId::Screenshots => Page::Screenshots,
        NavItemId::Requirements => Page::Requirements,
        NavItemId::Reviews => Page::Reviews,
        NavItemId::Newsletter => Page::Newsletter,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sos_landing_i18n::{LanguageContext, MemoryPreferenceStore, CATALOG};

    fn test_app() -> App {
        let store = Box::new(MemoryPreferenceStore::new());
        App::new(LanguageContext::new(&CATALOG, store))
    }

    #[test]
    fn selection_stops_at_bounds() {
        let mut app = test_app();
        update(&mut app, NavigationMessage::SelectPrevious);
        assert_eq!(app.navigation.selected, 0);

        update(&mut app, NavigationMessage::SelectLast);
        let last = app.navigation.items.len() - 1;
        assert_eq!(app.navigation.selected, last);
        update(&mut app, NavigationMessage::SelectNext);
        assert_eq!(app.navigation.selected, last);
    }

    #[test]
    fn every_item_maps_to_its_page() {
        let mut app = test_app();
        let expected = [
            Page::Hero,
            Page::Story,
            Page::Features,
            Page::Screenshots,
            Page::Requirements,
            Page::Reviews,
            Page::Newsletter,
        ];
        update(&mut app, NavigationMessage::SelectFirst);
        for page in expected {
            update(&mut app, NavigationMessage::Confirm);
            assert_eq!(app.current_page, page);
            update(&mut app, NavigationMessage::SelectNext);
        }
    }
}

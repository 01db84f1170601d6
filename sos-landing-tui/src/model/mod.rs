//! Model 层：应用状态定义
//!
//! Model 层是应用状态的唯一真相来源，只包含数据结构，
//! 所有状态变更都通过 Update 层触发。
//!
//! - `app`        主应用状态（含注入的 `LanguageContext`）
//! - `focus`      焦点状态（Navigation / Content）
//! - `navigation` 导航栏状态
//! - `page`       页面路由状态
//! - `state`      各页面的数据状态（轮播、订阅表单、弹窗）

mod app;
mod focus;
mod navigation;
mod page;
pub mod state;

pub use app::App;
pub use focus::FocusPanel;
pub use navigation::{NavItem, NavItemId, NavigationState};
pub use page::Page;
pub use state::{Modal, ModalState, NewsletterPhase, NewsletterState, ScreenshotsState};

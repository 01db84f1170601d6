//! 各页面的数据状态

mod modal;
mod newsletter;
mod screenshots;

pub use modal::{Modal, ModalState};
pub use newsletter::{NewsletterPhase, NewsletterState};
pub use screenshots::ScreenshotsState;

//! 各页面的渲染实现

pub mod features;
pub mod hero;
pub mod newsletter;
pub mod requirements;
pub mod reviews;
pub mod screenshots;
pub mod story;

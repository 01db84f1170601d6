//! 弹窗状态

/// 弹窗类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    /// 语言选择菜单，`selected` 为列表中的高亮索引
    LanguageMenu { selected: usize },
}

/// 弹窗状态
#[derive(Debug, Clone, Default)]
pub struct ModalState {
    /// 当前打开的弹窗
    pub active: Option<Modal>,
}

impl ModalState {
    pub fn new() -> Self {
        Self { active: None }
    }

    /// 打开语言菜单，高亮当前语言
    pub fn show_language_menu(&mut self, selected: usize) {
        self.active = Some(Modal::LanguageMenu { selected });
    }

    /// 关闭弹窗
    pub fn close(&mut self) {
        self.active = None;
    }

    /// 是否有弹窗打开
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }
}

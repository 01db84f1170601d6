//! 订阅表单状态
//!
//! 提交流程是纯本地模拟：进入 `Submitting` 后停留 1500ms，
//! 随后切换到 `Submitted` 展示 3000ms 成功提示，最后回到编辑态并清空输入。

use std::time::{Duration, Instant};

/// 模拟网络提交的耗时
const SUBMIT_DELAY: Duration = Duration::from_millis(1500);
/// 成功提示的展示时长
const SUCCESS_DISPLAY: Duration = Duration::from_millis(3000);

/// 订阅表单所处阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewsletterPhase {
    /// 正在编辑邮箱
    Editing,
    /// 模拟提交中
    Submitting { since: Instant },
    /// 提交成功，展示提示
    Submitted { since: Instant },
}

/// 订阅表单状态
#[derive(Debug, Clone)]
pub struct NewsletterState {
    /// 邮箱输入缓冲
    pub email: String,
    /// 当前阶段
    pub phase: NewsletterPhase,
    /// 校验失败提示（已翻译文本）
    pub error: Option<String>,
}

impl NewsletterState {
    pub fn new() -> Self {
        Self {
            email: String::new(),
            phase: NewsletterPhase::Editing,
            error: None,
        }
    }

    /// 是否接受键盘输入（提交期间输入被忽略）
    pub fn is_editing(&self) -> bool {
        matches!(self.phase, NewsletterPhase::Editing)
    }

    /// 追加一个输入字符
    pub fn input(&mut self, c: char) {
        if self.is_editing() {
            self.email.push(c);
            self.error = None;
        }
    }

    /// 删除末尾字符
    pub fn backspace(&mut self) {
        if self.is_editing() {
            self.email.pop();
            self.error = None;
        }
    }

    /// 极简邮箱格式校验，与原版表单一致：包含 '@' 且 '@' 之后有 '.'
    pub fn email_is_valid(&self) -> bool {
        let email = self.email.trim();
        match email.find('@') {
            Some(at) if at > 0 => email[at + 1..].contains('.'),
            _ => false,
        }
    }

    /// 尝试提交。校验失败返回 false，由调用方填充错误提示。
    pub fn submit(&mut self, now: Instant) -> bool {
        if !self.is_editing() {
            return false;
        }
        if !self.email_is_valid() {
            return false;
        }
        self.error = None;
        self.phase = NewsletterPhase::Submitting { since: now };
        true
    }

    /// 推进定时状态，由主循环每轮调用
    pub fn tick(&mut self, now: Instant) {
        match self.phase {
            NewsletterPhase::Submitting { since } => {
                if now.duration_since(since) >= SUBMIT_DELAY {
                    self.phase = NewsletterPhase::Submitted { since: now };
                }
            }
            NewsletterPhase::Submitted { since } => {
                if now.duration_since(since) >= SUCCESS_DISPLAY {
                    self.phase = NewsletterPhase::Editing;
                    self.email.clear();
                }
            }
            NewsletterPhase::Editing => {}
        }
    }
}

impl Default for NewsletterState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_email() {
        let mut state = NewsletterState::new();
        state.email = "not-an-email".to_string();
        assert!(!state.submit(Instant::now()));
        assert_eq!(state.phase, NewsletterPhase::Editing);

        state.email = "@nothing.com".to_string();
        assert!(!state.submit(Instant::now()));

        state.email = "user@nodot".to_string();
        assert!(!state.submit(Instant::now()));
    }

    #[test]
    fn accepts_valid_email() {
        let mut state = NewsletterState::new();
        state.email = "survivor@example.com".to_string();
        let now = Instant::now();
        assert!(state.submit(now));
        assert_eq!(state.phase, NewsletterPhase::Submitting { since: now });
    }

    #[test]
    fn full_submit_cycle() {
        let mut state = NewsletterState::new();
        state.email = "survivor@example.com".to_string();
        let start = Instant::now();
        assert!(state.submit(start));

        // 延迟未到，仍在提交中
        state.tick(start + Duration::from_millis(1400));
        assert!(matches!(state.phase, NewsletterPhase::Submitting { .. }));

        // 提交完成
        let done = start + Duration::from_millis(1500);
        state.tick(done);
        assert!(matches!(state.phase, NewsletterPhase::Submitted { .. }));

        // 成功提示到期后回到编辑态并清空输入
        state.tick(done + Duration::from_millis(3000));
        assert_eq!(state.phase, NewsletterPhase::Editing);
        assert!(state.email.is_empty());
    }

    #[test]
    fn input_ignored_while_submitting() {
        let mut state = NewsletterState::new();
        state.email = "survivor@example.com".to_string();
        state.submit(Instant::now());
        state.input('x');
        state.backspace();
        assert_eq!(state.email, "survivor@example.com");
    }
}

//! 截图轮播状态

/// 轮播展示的截图描述（占位图，无真实素材）
pub const SLIDES: &[(&str, &str)] = &[
    ("STORM CIRCLE", "The deadly storm closes in on the last survivors."),
    ("NIGHT RAID", "Squads clash over an abandoned supply depot at dusk."),
    ("EXTRACTION", "A rescue chopper hovers above the evacuation zone."),
    ("WASTELAND", "Ruined highways stretch across the quarantine zone."),
];

/// 截图轮播状态
#[derive(Debug, Clone)]
pub struct ScreenshotsState {
    /// 当前展示的截图索引
    pub current: usize,
}

impl ScreenshotsState {
    pub fn new() -> Self {
        Self { current: 0 }
    }

    /// 截图总数
    pub fn len(&self) -> usize {
        SLIDES.len()
    }

    /// 切换到上一张（首张时绕回末张）
    pub fn prev_slide(&mut self) {
        if self.current == 0 {
            self.current = SLIDES.len().saturating_sub(1);
        } else {
            self.current -= 1;
        }
    }

    /// 切换到下一张（末张时绕回首张）
    pub fn next_slide(&mut self) {
        self.current = (self.current + 1) % SLIDES.len();
    }

    /// 当前截图
    pub fn current_slide(&self) -> (&'static str, &'static str) {
        SLIDES[self.current % SLIDES.len()]
    }
}

impl Default for ScreenshotsState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_to_first() {
        let mut state = ScreenshotsState::new();
        for _ in 0..SLIDES.len() {
            state.next_slide();
        }
        assert_eq!(state.current, 0);
    }

    #[test]
    fn prev_wraps_to_last() {
        let mut state = ScreenshotsState::new();
        state.prev_slide();
        assert_eq!(state.current, SLIDES.len() - 1);
    }

    #[test]
    fn prev_then_next_round_trip() {
        let mut state = ScreenshotsState::new();
        state.next_slide();
        state.prev_slide();
        assert_eq!(state.current, 0);
    }
}

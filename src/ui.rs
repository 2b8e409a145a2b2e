//! HUD score display
//!
//! The page only needs new text when the score actually changes, so the
//! display remembers what it last showed.

/// Format the HUD score line
pub fn score_text(score: u64) -> String {
    format!("Score: {}", score)
}

/// Change-detecting score sink
#[derive(Debug, Clone, Default)]
pub struct ScoreDisplay {
    last_shown: Option<u64>,
}

impl ScoreDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text to show for `score`, or None if it is already on screen
    pub fn update(&mut self, score: u64) -> Option<String> {
        if self.last_shown == Some(score) {
            return None;
        }
        self.last_shown = Some(score);
        Some(score_text(score))
    }
}

//! Splash screen animation state

use std::time::{Duration, Instant};

/// Animation phase for splash screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashPhase {
    /// Static wordmark display
    Display,
    /// Wordmark lifting off the top
    ScrollUp,
    /// Animation finished
    Complete,
}

/// Splash screen animation state
#[derive(Debug)]
pub struct SplashState {
    /// When the splash started
    pub start_time: Instant,
    /// Current animation phase
    pub phase: SplashPhase,
    /// Current vertical offset (for scroll animation)
    pub scroll_offset: f32,
}

impl SplashState {
    const DISPLAY_DURATION: Duration = Duration::from_millis(1200);
    const ANIMATION_DURATION: Duration = Duration::from_millis(700);

    pub fn new() -> Self {
        Self::started_at(Instant::now())
    }

    fn started_at(start_time: Instant) -> Self {
        Self {
            start_time,
            phase: SplashPhase::Display,
            scroll_offset: 0.0,
        }
    }

    /// Update animation state based on elapsed time
    pub fn update(&mut self, terminal_height: u16) {
        self.advance(self.start_time.elapsed(), terminal_height);
    }

    fn advance(&mut self, elapsed: Duration, terminal_height: u16) {
        // A skip is final
        if self.phase == SplashPhase::Complete {
            return;
        }
        if elapsed < Self::DISPLAY_DURATION {
            self.phase = SplashPhase::Display;
            self.scroll_offset = 0.0;
        } else if elapsed < Self::DISPLAY_DURATION + Self::ANIMATION_DURATION {
            self.phase = SplashPhase::ScrollUp;
            let animation_elapsed = elapsed - Self::DISPLAY_DURATION;
            let progress =
                animation_elapsed.as_secs_f32() / Self::ANIMATION_DURATION.as_secs_f32();
            // Ease-out so the wordmark decelerates as it leaves
            let eased = simple_easing::cubic_out(progress);
            self.scroll_offset = eased * (terminal_height as f32);
        } else {
            self.phase = SplashPhase::Complete;
        }
    }

    /// Skip to completion (user pressed a key)
    pub fn skip(&mut self) {
        self.phase = SplashPhase::Complete;
    }

    pub fn is_complete(&self) -> bool {
        self.phase == SplashPhase::Complete
    }
}

impl Default for SplashState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_in_display_phase() {
        let state = SplashState::new();
        assert_eq!(state.phase, SplashPhase::Display);
        assert_eq!(state.scroll_offset, 0.0);
        assert!(!state.is_complete());
    }

    #[test]
    fn test_skip_immediately_completes() {
        let mut state = SplashState::new();
        state.skip();
        assert!(state.is_complete());
        state.skip();
        assert_eq!(state.phase, SplashPhase::Complete);
    }

    #[test]
    fn test_skip_survives_later_updates() {
        let mut state = SplashState::new();
        state.skip();
        state.update(24);
        assert!(state.is_complete());
        state.advance(Duration::ZERO, 24);
        assert_eq!(state.phase, SplashPhase::Complete);
    }

    #[test]
    fn test_update_stays_in_display_phase_initially() {
        let mut state = SplashState::new();
        state.update(24);
        assert_eq!(state.phase, SplashPhase::Display);
        assert_eq!(state.scroll_offset, 0.0);
    }

    #[test]
    fn test_scroll_phase_moves_up() {
        let mut state = SplashState::new();
        state.advance(SplashState::DISPLAY_DURATION + Duration::from_millis(350), 40);
        assert_eq!(state.phase, SplashPhase::ScrollUp);
        assert!(state.scroll_offset > 0.0);
        assert!(state.scroll_offset < 40.0);
    }

    #[test]
    fn test_scroll_is_eased_out() {
        let mut state = SplashState::new();
        let half = SplashState::ANIMATION_DURATION / 2;
        state.advance(SplashState::DISPLAY_DURATION + half, 40);
        // Past the linear midpoint thanks to the ease-out
        assert!(state.scroll_offset > 20.0);
    }

    #[test]
    fn test_completes_after_animation() {
        let mut state = SplashState::new();
        state.advance(
            SplashState::DISPLAY_DURATION + SplashState::ANIMATION_DURATION,
            40,
        );
        assert!(state.is_complete());
    }
}

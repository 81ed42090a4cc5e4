//! Thumbnail hover highlight using iced_anim
//!
//! Only one thumbnail is under the cursor at a time, so the strip keeps two
//! transitions: the highlighted thumbnail fading in and the one it replaced
//! fading out.

use std::time::{Duration, Instant};

use iced_anim::Animated;
use iced_anim::transition::Easing;

const HOVER_DURATION: Duration = Duration::from_millis(200);

fn hover_easing() -> Easing {
    Easing::EASE_OUT.with_duration(HOVER_DURATION)
}

#[derive(Debug)]
pub struct ThumbnailHover {
    active: Option<usize>,
    active_anim: Animated<f32>,
    fading: Option<usize>,
    fading_anim: Animated<f32>,
}

impl Default for ThumbnailHover {
    fn default() -> Self {
        Self::new()
    }
}

impl ThumbnailHover {
    pub fn new() -> Self {
        Self {
            active: None,
            active_anim: Animated::transition(0.0, hover_easing()),
            fading: None,
            fading_anim: Animated::transition(0.0, hover_easing()),
        }
    }

    /// Move the highlight to `index`, or clear it with `None`
    pub fn set_hovered(&mut self, index: Option<usize>) {
        if self.active == index {
            return;
        }

        // The previous highlight fades out from wherever it got to
        if let Some(old) = self.active.take() {
            let current = *self.active_anim.value();
            self.fading = Some(old);
            self.fading_anim = Animated::transition(current, hover_easing());
            self.fading_anim.update(0.0.into());
        }

        if let Some(new) = index {
            self.active = Some(new);
            self.active_anim = Animated::transition(0.0, hover_easing());
            self.active_anim.update(1.0.into());
        }
    }

    /// Highlight amount for a thumbnail, 0.0 to 1.0
    pub fn progress(&self, index: usize) -> f32 {
        if self.active == Some(index) {
            *self.active_anim.value()
        } else if self.fading == Some(index) {
            *self.fading_anim.value()
        } else {
            0.0
        }
    }

    pub fn is_animating(&self) -> bool {
        self.active_anim.is_animating() || self.fading_anim.is_animating()
    }

    pub fn tick(&mut self, now: Instant) {
        self.active_anim.tick(now);
        self.fading_anim.tick(now);
        if self.fading.is_some() && !self.fading_anim.is_animating() {
            self.fading = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlight_is_exclusive() {
        let mut hover = ThumbnailHover::new();
        assert_eq!(hover.progress(0), 0.0);

        hover.set_hovered(Some(0));
        assert!(hover.is_animating());

        hover.set_hovered(Some(2));
        assert_eq!(hover.active, Some(2));
        assert_eq!(hover.fading, Some(0));
        assert_eq!(hover.progress(1), 0.0);
    }

    #[test]
    fn progress_stays_in_range() {
        let mut hover = ThumbnailHover::new();
        hover.set_hovered(Some(1));
        hover.tick(Instant::now() + HOVER_DURATION * 2);
        let p = hover.progress(1);
        assert!((0.0..=1.0).contains(&p));
    }

    #[test]
    fn clearing_fades_the_active_thumbnail() {
        let mut hover = ThumbnailHover::new();
        hover.set_hovered(Some(3));
        hover.set_hovered(None);
        assert_eq!(hover.active, None);
        assert_eq!(hover.fading, Some(3));
    }
}

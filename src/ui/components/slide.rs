use ratatui::layout::Rect;

use crate::routing::Animation;

const SLIDE_FRAMES: u16 = 6;

/// Reveals freshly navigated content over a few ticks.
#[derive(Debug, Clone, Copy)]
pub struct Slide {
    animation: Animation,
    remaining: u16,
}

impl Default for Slide {
    fn default() -> Self {
        Self {
            animation: Animation::Still,
            remaining: 0,
        }
    }
}

impl Slide {
    pub fn start(&mut self, animation: Animation) {
        self.animation = animation;
        self.remaining = match animation {
            Animation::Still => 0,
            _ => SLIDE_FRAMES,
        };
    }

    pub fn tick(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    pub fn is_running(&self) -> bool {
        self.remaining > 0
    }

    pub fn apply(&self, area: Rect) -> Rect {
        let offset = (u32::from(area.width) * u32::from(self.remaining) / u32::from(SLIDE_FRAMES)) as u16;
        match self.animation {
            Animation::SlideFromRight => Rect {
                x: area.x + offset,
                width: area.width - offset,
                ..area
            },
            Animation::SlideFromLeft => Rect {
                width: area.width - offset,
                ..area
            },
            Animation::Still => area,
        }
    }
}

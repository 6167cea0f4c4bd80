//! Splash screen shown at power-on.

use std::thread;
use std::time::Instant;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::colors::{BLACK, WHITE};
use crate::config::SPLASH_DURATION;
use crate::context::Context;
use crate::input::InputSnapshot;
use crate::screens::{NextScreen, Request, Screen};
use crate::styles::TITLE_FONT;

const TITLE: &str = "SNAKE!";

pub struct SplashScreen {
    shown_at: Option<Instant>,
}

impl SplashScreen {
    pub fn new() -> Self {
        Self { shown_at: None }
    }
}

impl Default for SplashScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: DrawTarget<Color = Rgb565>> Screen<D> for SplashScreen {
    fn on_init(&mut self, ctx: &mut Context<D>) {
        self.shown_at = Some(Instant::now());
        ctx.clear(BLACK);
        let rect = ctx.screen_rect();
        ctx.draw_text_centered(TITLE, TITLE_FONT, rect, WHITE);
    }

    fn render(&mut self, _ctx: &mut Context<D>, _input: &InputSnapshot) -> Option<Request> {
        if self.shown_at.is_some_and(|t| t.elapsed() >= SPLASH_DURATION) {
            Some(Request::Goto(NextScreen::MainMenu))
        } else {
            thread::sleep(SPLASH_DURATION);
            None
        }
    }

    fn on_end(&mut self, _ctx: &mut Context<D>) {}
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputScheme;
    use crate::store::MemoryStore;
    use crate::testutil::TestCanvas;

    #[test]
    fn test_splash_hands_over_to_menu() {
        let mut ctx = Context::new(
            TestCanvas::new(),
            Box::new(MemoryStore::new()),
            160,
            128,
            InputScheme::Digital,
        );
        let mut screen = SplashScreen::new();
        screen.on_init(&mut ctx);

        // First tick waits out the splash duration, second one moves on.
        assert_eq!(screen.render(&mut ctx, &InputSnapshot::default()), None);
        assert_eq!(
            screen.render(&mut ctx, &InputSnapshot::default()),
            Some(Request::Goto(NextScreen::MainMenu))
        );
    }
}

//! Drawing context shared by every screen.
//!
//! Wraps the display target together with the persistence collaborator and
//! the small amount of cross-screen state (cached max score, the selected
//! input scheme). All drawing is generic over `DrawTarget<Color = Rgb565>`
//! and treats draw operations as non-failing.

use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, StrokeAlignment};
use embedded_graphics::text::Text;

use crate::input::InputScheme;
use crate::store::Persistence;
use crate::styles::{CENTERED, TOP_LEFT};

/// Pixel size of `text` in `font`. Monospaced, so width is a multiplication.
pub fn text_size(text: &str, font: &MonoFont<'_>) -> Size {
    let chars = text.chars().count() as u32;
    Size::new(chars * font.character_size.width, font.character_size.height)
}

/// Display wrapper plus cross-screen state, owned by the host loop and
/// passed to whichever screen is active.
pub struct Context<D> {
    pub display: D,
    pub store: Box<dyn Persistence>,
    pub width: u32,
    pub height: u32,
    pub scheme: InputScheme,
    /// Cached copy of the persisted max score; 0 when none was ever saved.
    pub max_score: u32,
}

impl<D: DrawTarget<Color = Rgb565>> Context<D> {
    pub fn new(display: D, store: Box<dyn Persistence>, width: u32, height: u32, scheme: InputScheme) -> Self {
        let max_score = store.max_score().unwrap_or(0);
        Self {
            display,
            store,
            width,
            height,
            scheme,
            max_score,
        }
    }

    /// The full display area.
    pub fn screen_rect(&self) -> Rectangle {
        Rectangle::new(Point::zero(), Size::new(self.width, self.height))
    }

    // -------------------------------------------------------------------------
    // Drawing
    // -------------------------------------------------------------------------

    pub fn clear(&mut self, color: Rgb565) {
        self.display.clear(color).ok();
    }

    pub fn fill_rect(&mut self, rect: Rectangle, color: Rgb565) {
        rect.into_styled(PrimitiveStyle::with_fill(color)).draw(&mut self.display).ok();
    }

    /// Filled rectangle with a 1px border in a separate color.
    pub fn fill_rect_bordered(&mut self, rect: Rectangle, border: Rgb565, fill: Rgb565) {
        let style = PrimitiveStyleBuilder::new()
            .fill_color(fill)
            .stroke_color(border)
            .stroke_width(1)
            .stroke_alignment(StrokeAlignment::Inside)
            .build();
        rect.into_styled(style).draw(&mut self.display).ok();
    }

    /// Rectangle outline only.
    pub fn draw_rect(&mut self, rect: Rectangle, color: Rgb565) {
        let style = PrimitiveStyleBuilder::new()
            .stroke_color(color)
            .stroke_width(1)
            .stroke_alignment(StrokeAlignment::Inside)
            .build();
        rect.into_styled(style).draw(&mut self.display).ok();
    }

    /// Text anchored at its top-left corner.
    pub fn draw_text(&mut self, text: &str, font: &MonoFont<'_>, top_left: Point, color: Rgb565) {
        Text::with_text_style(text, top_left, MonoTextStyle::new(font, color), TOP_LEFT)
            .draw(&mut self.display)
            .ok();
    }

    /// Text centered inside `rect`, both axes.
    pub fn draw_text_centered(&mut self, text: &str, font: &MonoFont<'_>, rect: Rectangle, color: Rgb565) {
        Text::with_text_style(text, rect.center(), MonoTextStyle::new(font, color), CENTERED)
            .draw(&mut self.display)
            .ok();
    }

    // -------------------------------------------------------------------------
    // Persistence
    // -------------------------------------------------------------------------

    /// Report a finished game's score; persists it when it beats the saved
    /// max.
    pub fn notify_score(&mut self, score: u32) {
        if score > self.max_score {
            self.store.set_max_score(score);
            self.max_score = score;
        }
    }

    /// Drop the saved max score and reset the cached copy.
    pub fn reset_max_score(&mut self) {
        self.store.clear_max_score();
        self.max_score = 0;
    }

    /// Persist a new analog calibration center.
    pub fn save_calibration(&mut self, x: i16, y: i16) {
        self.store.set_calibration(x, y);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BLACK, GREEN, WHITE};
    use crate::store::MemoryStore;
    use crate::testutil::TestCanvas;

    fn ctx() -> Context<TestCanvas> {
        Context::new(
            TestCanvas::new(),
            Box::new(MemoryStore::new()),
            160,
            128,
            InputScheme::Digital,
        )
    }

    #[test]
    fn test_text_size() {
        use crate::styles::{LABEL_FONT, TITLE_FONT};
        assert_eq!(text_size("Play", LABEL_FONT), Size::new(24, 10));
        assert_eq!(text_size("Go!", TITLE_FONT), Size::new(30, 20));
        assert_eq!(text_size("", LABEL_FONT), Size::new(0, 10));
    }

    #[test]
    fn test_fill_rect_paints_interior() {
        let mut ctx = ctx();
        let rect = Rectangle::new(Point::new(10, 10), Size::new(4, 4));
        ctx.fill_rect(rect, GREEN);

        assert_eq!(ctx.display.pixel(Point::new(10, 10)), Some(GREEN));
        assert_eq!(ctx.display.pixel(Point::new(13, 13)), Some(GREEN));
        assert_eq!(ctx.display.pixel(Point::new(14, 14)), None, "outside the rect");
    }

    #[test]
    fn test_fill_rect_bordered_distinct_edge() {
        let mut ctx = ctx();
        let rect = Rectangle::new(Point::new(20, 20), Size::new(6, 6));
        ctx.fill_rect_bordered(rect, WHITE, BLACK);

        assert_eq!(ctx.display.pixel(Point::new(20, 20)), Some(WHITE), "border pixel");
        assert_eq!(ctx.display.pixel(Point::new(22, 22)), Some(BLACK), "fill pixel");
    }

    #[test]
    fn test_notify_score_updates_only_on_new_max() {
        let mut ctx = ctx();
        ctx.notify_score(100);
        assert_eq!(ctx.max_score, 100);
        assert_eq!(ctx.store.max_score(), Some(100), "new max persisted");

        ctx.notify_score(50);
        assert_eq!(ctx.max_score, 100, "lower score ignored");
        assert_eq!(ctx.store.max_score(), Some(100));

        ctx.notify_score(101);
        assert_eq!(ctx.max_score, 101);
    }

    #[test]
    fn test_reset_max_score() {
        let mut ctx = ctx();
        ctx.notify_score(42);
        ctx.reset_max_score();

        assert_eq!(ctx.max_score, 0);
        assert_eq!(ctx.store.max_score(), None, "reset restores absence");
    }

    #[test]
    fn test_new_reads_persisted_score() {
        let mut store = MemoryStore::new();
        store.set_max_score(777);
        let ctx = Context::new(TestCanvas::new(), Box::new(store), 160, 128, InputScheme::Analog);
        assert_eq!(ctx.max_score, 777);
    }
}

//! Analog stick calibration screen.
//!
//! Shows a 3x3 grid of reference points over a square preview area and a red
//! cursor tracking the calibrated axis values. Pressing the button stores the
//! current raw sample as the new center; pressing again returns to the menu.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::colors::{BLACK, RED, WHITE};
use crate::config::AXIS_MAX;
use crate::context::Context;
use crate::input::InputSnapshot;
use crate::screens::{NextScreen, Request, Screen};
use crate::widgets::{ListItem, ListMenu, Neighbors};

const CALIBRATE_LABEL: &str = "Calibrate";
const RETURN_LABEL: &str = "Return";

/// Edge length of the control points and the cursor.
const POINT_SIZE: i32 = 4;

/// Height of the bottom button.
const BUTTON_HEIGHT: u32 = 20;

pub struct CalibrationScreen {
    list: Option<ListMenu>,
    calibrated: bool,
    control_points: [Rectangle; 9],
    button_rect: Rectangle,
    /// Center of the preview area in pixels.
    center: Point,
    /// Half the preview edge; full-scale deflection maps to this.
    max_value: i32,
    cursor: Rectangle,
    last_axis: Option<(i32, i32)>,
}

impl CalibrationScreen {
    pub fn new() -> Self {
        Self {
            list: None,
            calibrated: false,
            control_points: [Rectangle::zero(); 9],
            button_rect: Rectangle::zero(),
            center: Point::zero(),
            max_value: 1,
            cursor: Rectangle::zero(),
            last_axis: None,
        }
    }

    /// Map a calibrated axis sample into a cursor rectangle inside the
    /// preview. Screen Y grows downward, so the Y axis flips.
    fn cursor_rect(&self, axis_x: i32, axis_y: i32) -> Rectangle {
        Rectangle::new(
            Point::new(
                axis_x * self.max_value / AXIS_MAX + self.center.x - POINT_SIZE / 2,
                -axis_y * self.max_value / AXIS_MAX + self.center.y - POINT_SIZE / 2,
            ),
            Size::new(POINT_SIZE as u32, POINT_SIZE as u32),
        )
    }
}

impl Default for CalibrationScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: DrawTarget<Color = Rgb565>> Screen<D> for CalibrationScreen {
    fn on_init(&mut self, ctx: &mut Context<D>) {
        ctx.clear(BLACK);
        self.button_rect = Rectangle::new(
            Point::new(0, (ctx.height - BUTTON_HEIGHT) as i32),
            Size::new(ctx.width, BUTTON_HEIGHT),
        );

        // Square preview over most of the smaller screen dimension, nudged
        // up to make room for the button.
        let usable_h = ctx.height - BUTTON_HEIGHT;
        let min_side = ctx.width.min(usable_h);
        let preview = min_side * 4 / 5;
        let preview_pos = Point::new(
            (ctx.width as i32 - preview as i32) / 2,
            (ctx.height as i32 - preview as i32) / 2 - 10,
        );

        let margin = preview as i32 / 2;
        let mut index = 0;
        for x in 0..3 {
            for y in 0..3 {
                let point = Rectangle::new(
                    Point::new(
                        preview_pos.x + margin * x - POINT_SIZE / 2,
                        preview_pos.y + margin * y - POINT_SIZE / 2,
                    ),
                    Size::new(POINT_SIZE as u32, POINT_SIZE as u32),
                );
                self.control_points[index] = point;
                ctx.fill_rect(point, WHITE);
                index += 1;
            }
        }
        self.center = preview_pos + Point::new(margin, margin);
        self.max_value = margin.max(1);
        self.cursor = Rectangle::zero();
        self.last_axis = None;

        let list = ListMenu::new(
            vec![ListItem::new(CALIBRATE_LABEL, self.button_rect, Neighbors::NONE)],
            0,
        );
        list.draw(ctx);
        self.list = Some(list);
    }

    fn render(&mut self, ctx: &mut Context<D>, input: &InputSnapshot) -> Option<Request> {
        if let Some(list) = self.list.as_mut() {
            list.handle_input(ctx, input);
        }

        // Repaint the cursor only when the stick actually moved.
        let axis = (input.axis_x, input.axis_y);
        if self.last_axis != Some(axis) {
            ctx.fill_rect(self.cursor, BLACK);

            // Restore control points the old cursor may have overlapped.
            for point in self.control_points {
                let dx = self.cursor.top_left.x - point.top_left.x;
                let dy = self.cursor.top_left.y - point.top_left.y;
                if dx * dx + dy * dy < 2 * POINT_SIZE * POINT_SIZE {
                    ctx.fill_rect(point, WHITE);
                }
            }

            self.cursor = self.cursor_rect(axis.0, axis.1);
            self.last_axis = Some(axis);
            ctx.fill_rect(self.cursor, RED);
        }

        if input.start_pressed {
            if self.calibrated {
                return Some(Request::Goto(NextScreen::MainMenu));
            }
            ctx.save_calibration(input.raw_x as i16, input.raw_y as i16);
            self.calibrated = true;

            if let Some(list) = self.list.as_mut() {
                list.replace_item(ctx, 0, ListItem::new(RETURN_LABEL, self.button_rect, Neighbors::NONE));
            }
            return Some(Request::Calibrate {
                raw_x: input.raw_x,
                raw_y: input.raw_y,
            });
        }
        None
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

    fn ctx() -> Context<TestCanvas> {
        Context::new(
            TestCanvas::new(),
            Box::new(MemoryStore::new()),
            160,
            128,
            InputScheme::Analog,
        )
    }

    fn snapshot(raw_x: i32, raw_y: i32, start: bool) -> InputSnapshot {
        InputSnapshot {
            start_pressed: start,
            start_down: start,
            raw_x,
            raw_y,
            axis_x: raw_x,
            axis_y: raw_y,
            ..InputSnapshot::default()
        }
    }

    #[test]
    fn test_first_press_stores_center_and_requests_retune() {
        let mut ctx = ctx();
        let mut screen = CalibrationScreen::new();
        screen.on_init(&mut ctx);

        let request = screen.render(&mut ctx, &snapshot(37, -12, true));

        assert_eq!(request, Some(Request::Calibrate { raw_x: 37, raw_y: -12 }));
        assert_eq!(ctx.store.calibration(), Some((37, -12)), "center persisted");
    }

    #[test]
    fn test_second_press_returns_to_menu() {
        let mut ctx = ctx();
        let mut screen = CalibrationScreen::new();
        screen.on_init(&mut ctx);

        screen.render(&mut ctx, &snapshot(0, 0, true));
        let request = screen.render(&mut ctx, &snapshot(0, 0, true));

        assert_eq!(request, Some(Request::Goto(NextScreen::MainMenu)));
    }

    #[test]
    fn test_cursor_tracks_deflection() {
        let mut ctx = ctx();
        let mut screen = CalibrationScreen::new();
        screen.on_init(&mut ctx);

        screen.render(&mut ctx, &snapshot(0, 0, false));
        let centered = screen.cursor;
        assert_eq!(
            centered.top_left,
            screen.center - Point::new(POINT_SIZE / 2, POINT_SIZE / 2),
            "zero deflection centers the cursor"
        );

        screen.render(&mut ctx, &snapshot(AXIS_MAX, 0, false));
        let deflected = screen.cursor;
        assert_eq!(
            deflected.top_left.x - centered.top_left.x,
            screen.max_value,
            "full deflection reaches the preview edge"
        );
        assert_eq!(deflected.top_left.y, centered.top_left.y);
    }

    #[test]
    fn test_cursor_not_repainted_when_idle() {
        let mut ctx = ctx();
        let mut screen = CalibrationScreen::new();
        screen.on_init(&mut ctx);

        screen.render(&mut ctx, &snapshot(100, 100, false));
        let cursor = screen.cursor;

        // Overwrite a cursor pixel; an identical sample must not repaint it.
        ctx.fill_rect(Rectangle::new(cursor.top_left, Size::new(1, 1)), WHITE);
        screen.render(&mut ctx, &snapshot(100, 100, false));
        assert_eq!(ctx.display.pixel(cursor.top_left), Some(WHITE));
    }
}

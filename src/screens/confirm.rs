//! Confirmation screen shown before the saved max score is erased.

use std::thread;
use std::time::Duration;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::colors::{BLACK, RED, WHITE};
use crate::config::MENU_ACTION_DELAY;
use crate::context::Context;
use crate::input::InputSnapshot;
use crate::screens::{NextScreen, Request, Screen};
use crate::styles::{LABEL_FONT, TITLE_FONT};
use crate::widgets::{ListItem, ListMenu, Neighbors};

const TITLE: &str = "Careful!";
const BODY: [&str; 6] = [
    "This will erase the",
    "max score that is",
    "saved in the board's",
    "memory.",
    "",
    "Do you want to continue?",
];
const DONE: &str = "Deleted!";

/// How long the deletion notice stays up.
const DONE_BEAT: Duration = Duration::from_millis(700);

/// Vertical distance between body lines.
const LINE_STEP: i32 = 11;

pub struct ConfirmResetScreen {
    list: Option<ListMenu>,
}

impl ConfirmResetScreen {
    pub fn new() -> Self {
        Self { list: None }
    }
}

impl Default for ConfirmResetScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: DrawTarget<Color = Rgb565>> Screen<D> for ConfirmResetScreen {
    fn on_init(&mut self, ctx: &mut Context<D>) {
        ctx.clear(BLACK);
        ctx.draw_text(TITLE, TITLE_FONT, Point::new(5, 5), RED);
        for (i, line) in BODY.iter().enumerate() {
            ctx.draw_text(line, LABEL_FONT, Point::new(5, 30 + i as i32 * LINE_STEP), WHITE);
        }

        let half = ctx.width / 2;
        let y = ctx.height as i32 - 16;
        let items = vec![
            ListItem::new(
                "Yes",
                Rectangle::new(Point::new(0, y), Size::new(half, 16)),
                Neighbors::cycle(1, 1),
            ),
            ListItem::new(
                "No",
                Rectangle::new(Point::new(half as i32, y), Size::new(half, 16)),
                Neighbors::cycle(0, 0),
            ),
        ];

        // Backing out is the default choice.
        let list = ListMenu::new(items, 1);
        list.draw(ctx);
        self.list = Some(list);
    }

    fn render(&mut self, ctx: &mut Context<D>, input: &InputSnapshot) -> Option<Request> {
        let chosen = {
            let list = self.list.as_mut()?;
            list.handle_input(ctx, input);
            if !input.start_pressed {
                return None;
            }
            list.chosen()
        };

        if chosen == 0 {
            ctx.reset_max_score();
            ctx.clear(BLACK);
            let rect = ctx.screen_rect();
            ctx.draw_text_centered(DONE, TITLE_FONT, rect, RED);
            thread::sleep(DONE_BEAT);
        }
        thread::sleep(MENU_ACTION_DELAY);
        Some(Request::Goto(NextScreen::MainMenu))
    }

    fn on_end(&mut self, _ctx: &mut Context<D>) {}
}

// =============================================================================
// Unit Tests
// =============================================================================

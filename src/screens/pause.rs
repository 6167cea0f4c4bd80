//! Pause sub-screen, nested inside the game screen.
//!
//! While paused the game delegates rendering and input here; the grid, the
//! snake queue and the score stay untouched in memory. Exiting the game asks
//! for confirmation first.

use std::thread;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::colors::{BLACK, ORANGE};
use crate::config::MENU_ACTION_DELAY;
use crate::context::Context;
use crate::input::InputSnapshot;
use crate::styles::TITLE_FONT;
use crate::widgets::{ListItem, ListMenu, Neighbors};

/// What the game screen should do after a pause tick.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PauseAction {
    Resume,
    ExitToMenu,
}

pub struct PauseScreen {
    list: Option<ListMenu>,
    /// True while the exit confirmation is showing.
    confirm: bool,
}

impl PauseScreen {
    pub fn new() -> Self {
        Self {
            list: None,
            confirm: false,
        }
    }

    pub fn on_init<D: DrawTarget<Color = Rgb565>>(&mut self, ctx: &mut Context<D>) {
        self.show(ctx, "Paused", "Resume", "Exit game", 0);
    }

    /// Paint the title and rebuild the two-item list.
    fn show<D: DrawTarget<Color = Rgb565>>(
        &mut self,
        ctx: &mut Context<D>,
        title: &'static str,
        first: &'static str,
        second: &'static str,
        default_item: usize,
    ) {
        let title_h = ctx.height * 7 / 10;
        let title_rect = Rectangle::new(Point::zero(), Size::new(ctx.width, title_h));
        ctx.fill_rect(title_rect, BLACK);
        ctx.draw_text_centered(title, TITLE_FONT, title_rect, ORANGE);
        ctx.fill_rect(
            Rectangle::new(Point::new(0, title_h as i32), Size::new(ctx.width, ctx.height - title_h)),
            BLACK,
        );

        let item_h = (ctx.height - title_h) / 2;
        let items = vec![
            ListItem::new(
                first,
                Rectangle::new(Point::new(0, title_h as i32), Size::new(ctx.width, item_h)),
                Neighbors::cycle(1, 1),
            ),
            ListItem::new(
                second,
                Rectangle::new(
                    Point::new(0, (title_h + item_h) as i32),
                    Size::new(ctx.width, item_h),
                ),
                Neighbors::cycle(0, 0),
            ),
        ];

        let list = ListMenu::new(items, default_item);
        list.draw(ctx);
        self.list = Some(list);
    }

    /// One pause tick. Returns the action the game should take, if any.
    pub fn render<D: DrawTarget<Color = Rgb565>>(
        &mut self,
        ctx: &mut Context<D>,
        input: &InputSnapshot,
    ) -> Option<PauseAction> {
        let chosen = {
            let list = self.list.as_mut()?;
            list.handle_input(ctx, input);
            if !input.start_pressed {
                return None;
            }
            list.chosen()
        };
        thread::sleep(MENU_ACTION_DELAY);

        match (self.confirm, chosen) {
            (false, 0) => Some(PauseAction::Resume),
            (true, 0) => Some(PauseAction::ExitToMenu),
            (false, _) => {
                self.confirm = true;
                self.show(ctx, "Sure?", "Yes", "No", 1);
                None
            }
            (true, _) => {
                self.confirm = false;
                self.show(ctx, "Paused", "Resume", "Exit game", 0);
                None
            }
        }
    }
}

impl Default for PauseScreen {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

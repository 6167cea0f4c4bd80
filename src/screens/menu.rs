//! Main menu: title, best score line and the action list.
//!
//! The item set depends on the input scheme selected at startup; the
//! calibration entry only exists for the analog stick.

use core::fmt::Write as _;
use std::thread;
use std::time::Duration;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::colors::{AQUA, BLACK, WHITE};
use crate::config::MENU_ACTION_DELAY;
use crate::context::Context;
use crate::input::{InputScheme, InputSnapshot};
use crate::screens::{NextScreen, Request, Screen};
use crate::styles::{LABEL_FONT, TITLE_FONT};
use crate::widgets::{ListItem, ListMenu, Neighbors};

const TITLE: &str = "SNAKE!";
const BEST_PREFIX: &str = "Best: ";

const REBOOT_TITLE: &str = "Rebooting!";
const REBOOT_SUBTITLE: &str = "See you soon!";

/// How long the reboot message stays up before the white flash.
const REBOOT_MESSAGE_BEAT: Duration = Duration::from_millis(750);

pub struct MainMenuScreen {
    list: Option<ListMenu>,
}

impl MainMenuScreen {
    pub fn new() -> Self {
        Self { list: None }
    }
}

/// Farewell message, white flash, then hand the restart to the host.
fn reboot_sequence<D: DrawTarget<Color = Rgb565>>(ctx: &mut Context<D>) -> Request {
    ctx.clear(BLACK);

    let title_rect = Rectangle::new(
        Point::new(0, (ctx.height as i32 - 20) * 2 / 5),
        Size::new(ctx.width, 20),
    );
    ctx.draw_text_centered(REBOOT_TITLE, TITLE_FONT, title_rect, AQUA);

    let subtitle_rect = Rectangle::new(
        Point::new(0, (ctx.height as i32 - 10) * 2 / 3),
        Size::new(ctx.width, 10),
    );
    ctx.draw_text_centered(REBOOT_SUBTITLE, LABEL_FONT, subtitle_rect, AQUA);

    thread::sleep(REBOOT_MESSAGE_BEAT);
    ctx.clear(WHITE);
    Request::Reboot
}

impl Default for MainMenuScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: DrawTarget<Color = Rgb565>> Screen<D> for MainMenuScreen {
    fn on_init(&mut self, ctx: &mut Context<D>) {
        // The item list is one entry shorter without the calibration entry,
        // so the title area grows to keep the buttons the same size.
        let title_h = match ctx.scheme {
            InputScheme::Analog => ctx.height / 2,
            InputScheme::Digital => ctx.height * 3 / 5,
        };
        let title_rect = Rectangle::new(Point::zero(), Size::new(ctx.width, title_h));
        ctx.fill_rect(title_rect, BLACK);
        ctx.draw_text_centered(TITLE, TITLE_FONT, title_rect, WHITE);
        ctx.fill_rect(
            Rectangle::new(Point::new(0, title_h as i32), Size::new(ctx.width, ctx.height - title_h)),
            BLACK,
        );

        let mut best: heapless::String<24> = heapless::String::new();
        write!(best, "{}{}", BEST_PREFIX, ctx.max_score).ok();
        let best_rect = Rectangle::new(
            Point::new(0, title_rect.center().y + 11),
            Size::new(ctx.width, 10),
        );
        ctx.draw_text_centered(&best, LABEL_FONT, best_rect, AQUA);

        let labels: &[&'static str] = match ctx.scheme {
            InputScheme::Analog => &["Play", "Calibrate stick", "Reset score", "Reboot"],
            InputScheme::Digital => &["Play", "Reset score", "Reboot"],
        };
        let count = labels.len();
        let item_h = (ctx.height - title_h) / count as u32;

        let items = labels
            .iter()
            .enumerate()
            .map(|(i, &label)| {
                let prev = (i + count - 1) % count;
                let next = (i + 1) % count;
                ListItem::new(
                    label,
                    Rectangle::new(
                        Point::new(0, title_h as i32 + (i as u32 * item_h) as i32),
                        Size::new(ctx.width, item_h),
                    ),
                    Neighbors::cycle(prev, next),
                )
            })
            .collect();

        let list = ListMenu::new(items, 0);
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
        thread::sleep(MENU_ACTION_DELAY);

        match ctx.scheme {
            InputScheme::Analog => match chosen {
                0 => Some(Request::Goto(NextScreen::Game)),
                1 => Some(Request::Goto(NextScreen::Calibration)),
                2 => Some(Request::Goto(NextScreen::ConfirmReset)),
                _ => Some(reboot_sequence(ctx)),
            },
            InputScheme::Digital => match chosen {
                0 => Some(Request::Goto(NextScreen::Game)),
                1 => Some(Request::Goto(NextScreen::ConfirmReset)),
                // The last entry and its successor index share the reboot
                // action on purpose.
                2 | 3 => Some(reboot_sequence(ctx)),
                _ => None,
            },
        }
    }

    fn on_end(&mut self, _ctx: &mut Context<D>) {}
}

// =============================================================================
// Unit Tests
// =============================================================================

//! End-of-game screen: win or lose title, final score, retry options.

use core::fmt::Write as _;
use std::thread;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::colors::{AQUA, BLACK, GREEN, RED};
use crate::config::{GAME_OVER_BEAT, MENU_ACTION_DELAY};
use crate::context::Context;
use crate::input::InputSnapshot;
use crate::screens::{NextScreen, Request, Screen};
use crate::styles::{LABEL_FONT, TITLE_FONT};
use crate::widgets::{ListItem, ListMenu, Neighbors};

const WIN_TITLE: &str = "You Win!";
const LOSE_TITLE: &str = "Game Over";
const SCORE_PREFIX: &str = "Score: ";

pub struct GameEndScreen {
    win: bool,
    score: u32,
    list: Option<ListMenu>,
}

impl GameEndScreen {
    pub fn new(win: bool, score: u32) -> Self {
        Self {
            win,
            score,
            list: None,
        }
    }
}

impl<D: DrawTarget<Color = Rgb565>> Screen<D> for GameEndScreen {
    fn on_init(&mut self, ctx: &mut Context<D>) {
        let (title, title_color) = if self.win {
            (WIN_TITLE, GREEN)
        } else {
            (LOSE_TITLE, RED)
        };

        let title_h = ctx.height * 7 / 10;
        let title_rect = Rectangle::new(Point::zero(), Size::new(ctx.width, title_h));
        ctx.fill_rect(title_rect, BLACK);
        ctx.draw_text_centered(title, TITLE_FONT, title_rect, title_color);
        ctx.fill_rect(
            Rectangle::new(Point::new(0, title_h as i32), Size::new(ctx.width, ctx.height - title_h)),
            BLACK,
        );

        let mut line: heapless::String<20> = heapless::String::new();
        write!(line, "{}{}", SCORE_PREFIX, self.score).ok();
        let score_top = title_rect.center().y + 10;
        let score_rect = Rectangle::new(
            Point::new(0, score_top),
            Size::new(ctx.width, (title_h as i32 - score_top).max(10) as u32),
        );
        ctx.draw_text_centered(&line, LABEL_FONT, score_rect, AQUA);

        thread::sleep(GAME_OVER_BEAT);

        let item_h = (ctx.height - title_h) / 2;
        let items = vec![
            ListItem::new(
                "Retry",
                Rectangle::new(Point::new(0, title_h as i32), Size::new(ctx.width, item_h)),
                Neighbors::cycle(1, 1),
            ),
            ListItem::new(
                "Back to menu",
                Rectangle::new(
                    Point::new(0, (title_h + item_h) as i32),
                    Size::new(ctx.width, item_h),
                ),
                Neighbors::cycle(0, 0),
            ),
        ];

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

        if chosen == 0 {
            Some(Request::Goto(NextScreen::Game))
        } else {
            Some(Request::Goto(NextScreen::MainMenu))
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
    use crate::input::{Direction, InputScheme};
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

    fn pressed() -> InputSnapshot {
        InputSnapshot {
            start_pressed: true,
            start_down: true,
            ..InputSnapshot::default()
        }
    }

    #[test]
    fn test_retry_restarts_game() {
        let mut ctx = ctx();
        let mut screen = GameEndScreen::new(false, 42);
        screen.on_init(&mut ctx);

        assert_eq!(
            screen.render(&mut ctx, &pressed()),
            Some(Request::Goto(NextScreen::Game)),
            "Retry is the default item"
        );
    }

    #[test]
    fn test_back_to_menu() {
        let mut ctx = ctx();
        let mut screen = GameEndScreen::new(true, 9000);
        screen.on_init(&mut ctx);

        let down = InputSnapshot {
            direction: Direction::Down,
            turned: Direction::Down,
            ..InputSnapshot::default()
        };
        screen.render(&mut ctx, &down);
        assert_eq!(
            screen.render(&mut ctx, &pressed()),
            Some(Request::Goto(NextScreen::MainMenu))
        );
    }
}

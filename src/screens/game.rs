//! The gameplay engine.
//!
//! Owns the playfield grid, the snake ring buffer, the score and the
//! movement/countdown/pause state machine. Rendering is incremental: a full
//! clear-and-redraw happens only on entry and on resume; every other tick
//! paints just the cells that changed (new head, vacated tail, coin blink,
//! score digits), so per-tick drawing cost does not grow with the snake.

use core::fmt::Write as _;
use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::buffer::RingBuffer;
use crate::colors::{AQUA, BLACK, DARK_RED, GREEN, RED, WHITE};
use crate::config::{
    COIN_BLINK_INTERVAL, COUNTDOWN_INTERVAL, GAME_OVER_BEAT, MOVE_DELAY_MIN, MOVE_DELAY_START,
    MOVE_DELAY_STEP, SWEEP_STEP,
};
use crate::context::{Context, text_size};
use crate::input::{Direction, InputSnapshot};
use crate::playfield::{Cell, Playfield};
use crate::screens::{NextScreen, PauseAction, PauseScreen, Request, Screen};
use crate::styles::{COUNTDOWN_FONT, LABEL_FONT};

const SCORE_LABEL: &str = "Score: ";
const COUNTDOWN_START: i8 = 3;

/// Length of the snake at game start.
const INITIAL_LENGTH: usize = 3;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Phase {
    /// Pre-game countdown. Steps 3, 2, 1 show digits, 0 shows "Go!", and the
    /// step after that clears the label and starts the movement timer.
    Countdown(i8),
    Running,
}

/// Tiny xorshift PRNG for coin placement.
struct XorShift32(u32);

impl XorShift32 {
    fn new(seed: u32) -> Self {
        Self(if seed == 0 { 0x9E37_79B9 } else { seed })
    }

    fn next(&mut self) -> u32 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 17;
        self.0 ^= self.0 << 5;
        self.0
    }

    fn range(&mut self, max: u32) -> u32 {
        self.next() % max
    }
}

pub struct GameScreen {
    field: Playfield,
    snake: RingBuffer<usize>,
    phase: Phase,
    /// Direction applied on the next movement tick.
    pending_dir: Direction,
    /// Direction of the last applied move.
    applied_dir: Direction,
    move_delay: Duration,
    last_move: Instant,
    score: u32,
    coin_index: usize,
    coin_visible: bool,
    last_blink: Instant,
    countdown_tick_at: Option<Instant>,
    /// Area of the last drawn countdown label, erased before the next one.
    countdown_rect: Rectangle,
    score_value_origin: Point,
    score_value_size: Size,
    pause: Option<PauseScreen>,
    rng: XorShift32,
}

impl GameScreen {
    pub fn new(width: u32, height: u32) -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
            .unwrap_or(0xC0FF_EE00);
        Self::with_seed(width, height, seed)
    }

    pub fn with_seed(width: u32, height: u32, seed: u32) -> Self {
        let field = Playfield::new(width, height);
        let capacity = field.total();
        Self {
            field,
            snake: RingBuffer::new(capacity),
            phase: Phase::Countdown(COUNTDOWN_START),
            pending_dir: Direction::Right,
            applied_dir: Direction::Right,
            move_delay: MOVE_DELAY_START,
            last_move: Instant::now(),
            score: 0,
            coin_index: 0,
            coin_visible: false,
            last_blink: Instant::now(),
            countdown_tick_at: None,
            countdown_rect: Rectangle::zero(),
            score_value_origin: Point::zero(),
            score_value_size: Size::zero(),
            pause: None,
            rng: XorShift32::new(seed),
        }
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    /// Full repaint: optional clear, playfield border, every snake segment,
    /// and the score bar. Only used on entry and on resume.
    fn full_render<D: DrawTarget<Color = Rgb565>>(&mut self, ctx: &mut Context<D>, clean: bool, border: bool, snake: bool) {
        if clean {
            ctx.clear(BLACK);
        }
        if border {
            ctx.draw_rect(self.field.area, WHITE);
        }
        if snake {
            for i in 0..self.snake.len() {
                let rect = self.field.block_rect(self.snake.at_front_offset(i as isize));
                ctx.fill_rect(rect, GREEN);
            }
        }

        let label_origin = Point::new(
            self.field.area.top_left.x + 1,
            (self.field.area.top_left.y - 10) / 2,
        );
        ctx.draw_text(SCORE_LABEL, LABEL_FONT, label_origin, WHITE);
        self.score_value_origin =
            label_origin + Point::new(text_size(SCORE_LABEL, LABEL_FONT).width as i32, 0);
        self.score_value_size = Size::zero();
        self.draw_score_value(ctx);
    }

    /// Erase the previous score digits and draw the current value.
    fn draw_score_value<D: DrawTarget<Color = Rgb565>>(&mut self, ctx: &mut Context<D>) {
        ctx.fill_rect(Rectangle::new(self.score_value_origin, self.score_value_size), BLACK);

        let mut text: heapless::String<12> = heapless::String::new();
        write!(text, "{}", self.score).ok();
        self.score_value_size = text_size(&text, LABEL_FONT);
        ctx.draw_text(&text, LABEL_FONT, self.score_value_origin, WHITE);
    }

    fn blink_coin<D: DrawTarget<Color = Rgb565>>(&mut self, ctx: &mut Context<D>) {
        self.last_blink = Instant::now();
        self.coin_visible = !self.coin_visible;
        let color = if self.coin_visible { AQUA } else { BLACK };
        ctx.fill_rect(self.field.coin_rect(self.coin_index), color);
    }

    // -------------------------------------------------------------------------
    // Countdown
    // -------------------------------------------------------------------------

    fn countdown_tick<D: DrawTarget<Color = Rgb565>>(&mut self, ctx: &mut Context<D>) {
        let due = self
            .countdown_tick_at
            .is_none_or(|t| t.elapsed() >= COUNTDOWN_INTERVAL);
        if !due {
            return;
        }
        self.countdown_tick_at = Some(Instant::now());

        ctx.fill_rect(self.countdown_rect, BLACK);
        let Phase::Countdown(step) = self.phase else {
            return;
        };
        let label = match step {
            3 => "3",
            2 => "2",
            1 => "1",
            0 => "Go!",
            _ => {
                // Countdown over. Repaint the snake in case the labels
                // clipped it, then start the movement timer fresh.
                self.full_render(ctx, false, false, true);
                self.phase = Phase::Running;
                self.last_move = Instant::now();
                self.last_blink = Instant::now();
                return;
            }
        };

        let rect = Rectangle::with_center(self.field.area.center(), text_size(label, COUNTDOWN_FONT));
        self.countdown_rect = rect;
        ctx.draw_text_centered(label, COUNTDOWN_FONT, rect, WHITE);
        self.phase = Phase::Countdown(step - 1);
    }

    // -------------------------------------------------------------------------
    // Movement
    // -------------------------------------------------------------------------

    /// Apply one movement tick.
    fn step<D: DrawTarget<Color = Rgb565>>(&mut self, ctx: &mut Context<D>) -> Option<Request> {
        self.applied_dir = self.pending_dir;
        self.last_move = Instant::now();

        let head = self.snake.back();
        let new_head = match self.field.neighbor(head, self.pending_dir) {
            Some(index) if self.field.get(index) != Cell::Snake => index,
            // Out of bounds or into the body.
            _ => return Some(self.game_over(ctx, false)),
        };

        let length = self.snake.len();
        let landed_on_coin = self.field.get(new_head) == Cell::Coin;

        self.snake.push(new_head);
        ctx.fill_rect(self.field.block_rect(new_head), GREEN);

        if landed_on_coin {
            self.score += 20 * length as u32;
            self.regen_coin();
            self.move_delay = self.move_delay.saturating_sub(MOVE_DELAY_STEP).max(MOVE_DELAY_MIN);
        } else {
            self.score += length as u32;
            if let Some(tail) = self.snake.pop() {
                ctx.fill_rect(self.field.block_rect(tail), BLACK);
                self.field.set(tail, Cell::Empty);
            }
        }
        self.field.set(new_head, Cell::Snake);
        self.draw_score_value(ctx);

        if self.snake.len() == self.field.total() {
            return Some(self.game_over(ctx, true));
        }
        None
    }

    /// Place the coin on a uniformly random empty cell.
    ///
    /// Picks a random rank first and resolves it in one linear pass, instead
    /// of sampling random cells until an empty one turns up. The retry
    /// approach degrades badly once the snake covers most of the board; this
    /// stays O(total cells) always.
    fn regen_coin(&mut self) {
        let empties = self.field.total() - self.snake.len();
        if empties == 0 {
            return;
        }
        let rank = self.rng.range(empties as u32) as usize;
        if let Some(index) = self.field.nth_empty(rank) {
            self.field.set(index, Cell::Coin);
            self.coin_index = index;
        }
    }

    // -------------------------------------------------------------------------
    // Game Over
    // -------------------------------------------------------------------------

    /// Report the score and hand over to the end screen. The losing path
    /// first runs the death sweep from the head back along the body.
    fn game_over<D: DrawTarget<Color = Rgb565>>(&mut self, ctx: &mut Context<D>, win: bool) -> Request {
        thread::sleep(GAME_OVER_BEAT);
        if !win {
            let mut prev: Option<Rectangle> = None;
            for i in 0..self.snake.len() {
                let current = self.field.block_rect(self.snake.at_back_offset(-(i as isize)));
                if let Some(p) = prev {
                    ctx.fill_rect(p, DARK_RED);
                }
                ctx.fill_rect(current, RED);
                thread::sleep(SWEEP_STEP);
                if let Some(p) = prev {
                    ctx.fill_rect(p, BLACK);
                }
                prev = Some(current);
            }
            thread::sleep(SWEEP_STEP);
            if let Some(p) = prev {
                ctx.fill_rect(p, BLACK);
            }
            thread::sleep(GAME_OVER_BEAT);
        }
        ctx.notify_score(self.score);
        Request::Goto(NextScreen::GameEnd {
            win,
            score: self.score,
        })
    }

    // -------------------------------------------------------------------------
    // Pause
    // -------------------------------------------------------------------------

    /// Freeze the game and hand control to the nested pause screen.
    pub fn pause_game<D: DrawTarget<Color = Rgb565>>(&mut self, ctx: &mut Context<D>) {
        if self.pause.is_some() {
            return;
        }
        let mut pause = PauseScreen::new();
        pause.on_init(ctx);
        self.pause = Some(pause);
    }

    /// Leave the pause screen: full repaint and a fresh countdown. Score,
    /// snake and coin are exactly as they were.
    pub fn resume_game<D: DrawTarget<Color = Rgb565>>(&mut self, ctx: &mut Context<D>) {
        self.pause = None;
        self.phase = Phase::Countdown(COUNTDOWN_START);
        self.countdown_tick_at = None;
        self.countdown_rect = Rectangle::zero();
        self.full_render(ctx, true, true, true);
    }

    fn pause_tick<D: DrawTarget<Color = Rgb565>>(&mut self, ctx: &mut Context<D>, input: &InputSnapshot) -> Option<Request> {
        let action = self.pause.as_mut().and_then(|pause| pause.render(ctx, input));
        match action {
            Some(PauseAction::Resume) => {
                self.resume_game(ctx);
                None
            }
            Some(PauseAction::ExitToMenu) => Some(Request::Goto(NextScreen::MainMenu)),
            None => None,
        }
    }
}

impl<D: DrawTarget<Color = Rgb565>> Screen<D> for GameScreen {
    fn on_init(&mut self, ctx: &mut Context<D>) {
        for index in 0..INITIAL_LENGTH {
            self.field.set(index, Cell::Snake);
            self.snake.push(index);
        }
        self.regen_coin();
        self.full_render(ctx, true, true, true);
    }

    fn render(&mut self, ctx: &mut Context<D>, input: &InputSnapshot) -> Option<Request> {
        if self.pause.is_some() {
            return self.pause_tick(ctx, input);
        }

        // Accept a new direction unless it would reverse the snake into
        // itself, judged against both the last applied and the pending one.
        if input.direction != Direction::None
            && self.pending_dir != input.direction.opposite()
            && self.applied_dir != input.direction.opposite()
        {
            self.pending_dir = input.direction;
        }

        if input.start_pressed {
            self.pause_game(ctx);
            return None;
        }

        match self.phase {
            Phase::Countdown(_) => {
                self.countdown_tick(ctx);
                None
            }
            Phase::Running => {
                if self.last_move.elapsed() >= self.move_delay
                    && let Some(request) = self.step(ctx)
                {
                    return Some(request);
                }
                if self.last_blink.elapsed() >= COIN_BLINK_INTERVAL {
                    self.blink_coin(ctx);
                }
                None
            }
        }
    }

    fn on_end(&mut self, _ctx: &mut Context<D>) {}
}

// =============================================================================
// Unit Tests
// =============================================================================

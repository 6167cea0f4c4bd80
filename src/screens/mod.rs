//! Screens and the screen lifecycle director.
//!
//! The program is organized as a set of screens, each owning its own state
//! and rendering. The director holds exactly one active screen and drives it
//! once per tick with a fresh input snapshot. Screens never replace
//! themselves directly; `render` returns a [`Request`] that the director (or
//! the host, for hardware-level effects) honors on the tick boundary.
//!
//! Lifecycle contract: on a transition the outgoing screen's `on_end` runs
//! first, then it is destroyed, and only then does the incoming screen's
//! `on_init` run.

mod calibration;
mod confirm;
mod game;
mod game_end;
mod menu;
mod pause;
mod splash;

pub use calibration::CalibrationScreen;
pub use confirm::ConfirmResetScreen;
pub use game::GameScreen;
pub use game_end::GameEndScreen;
pub use menu::MainMenuScreen;
pub use pause::{PauseAction, PauseScreen};
pub use splash::SplashScreen;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::context::Context;
use crate::input::InputSnapshot;

/// One phase of the program (menu, gameplay, ...).
pub trait Screen<D: DrawTarget<Color = Rgb565>> {
    /// Called once when the screen becomes active.
    fn on_init(&mut self, ctx: &mut Context<D>);

    /// Called once per tick while active.
    fn render(&mut self, ctx: &mut Context<D>, input: &InputSnapshot) -> Option<Request>;

    /// Called before the screen is destroyed.
    fn on_end(&mut self, ctx: &mut Context<D>);
}

/// Identifies the screen a transition should activate.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NextScreen {
    Splash,
    MainMenu,
    Calibration,
    ConfirmReset,
    Game,
    GameEnd { win: bool, score: u32 },
}

/// Effect requested by a screen's `render`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Request {
    /// Replace the active screen. Handled by the director.
    Goto(NextScreen),
    /// Retune the live input source with a new center. Handled by the host.
    Calibrate { raw_x: i32, raw_y: i32 },
    /// Restart the whole program. Handled by the host.
    Reboot,
}

/// Owns the active screen and manages init/end/replace transitions.
pub struct Director<D> {
    active: Option<Box<dyn Screen<D>>>,
}

impl<D: DrawTarget<Color = Rgb565>> Director<D> {
    pub fn new() -> Self {
        Self { active: None }
    }

    /// Replace the active screen: end the old one, destroy it, then
    /// initialize the new one.
    pub fn transition_to(&mut self, mut next: Box<dyn Screen<D>>, ctx: &mut Context<D>) {
        if let Some(mut previous) = self.active.take() {
            previous.on_end(ctx);
            drop(previous);
        }
        next.on_init(ctx);
        self.active = Some(next);
    }

    /// Drive the active screen for one tick. Transition requests are honored
    /// here; host-level requests pass through to the caller.
    pub fn tick(&mut self, ctx: &mut Context<D>, input: &InputSnapshot) -> Option<Request> {
        let request = self.active.as_mut().and_then(|screen| screen.render(ctx, input))?;
        match request {
            Request::Goto(next) => {
                let screen = Self::build(next, ctx);
                self.transition_to(screen, ctx);
                None
            }
            other => Some(other),
        }
    }

    fn build(next: NextScreen, ctx: &Context<D>) -> Box<dyn Screen<D>> {
        match next {
            NextScreen::Splash => Box::new(SplashScreen::new()),
            NextScreen::MainMenu => Box::new(MainMenuScreen::new()),
            NextScreen::Calibration => Box::new(CalibrationScreen::new()),
            NextScreen::ConfirmReset => Box::new(ConfirmResetScreen::new()),
            NextScreen::Game => Box::new(GameScreen::new(ctx.width, ctx.height)),
            NextScreen::GameEnd { win, score } => Box::new(GameEndScreen::new(win, score)),
        }
    }
}

impl<D: DrawTarget<Color = Rgb565>> Default for Director<D> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

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
            InputScheme::Digital,
        )
    }

    /// Screen probe that records its lifecycle events into a shared log.
    struct Probe {
        name: &'static str,
        log: Rc<RefCell<Vec<String>>>,
        request: Option<Request>,
    }

    impl Probe {
        fn new(name: &'static str, log: Rc<RefCell<Vec<String>>>) -> Self {
            Self {
                name,
                log,
                request: None,
            }
        }
    }

    impl Screen<TestCanvas> for Probe {
        fn on_init(&mut self, _ctx: &mut Context<TestCanvas>) {
            self.log.borrow_mut().push(format!("{}:init", self.name));
        }

        fn render(&mut self, _ctx: &mut Context<TestCanvas>, _input: &InputSnapshot) -> Option<Request> {
            self.log.borrow_mut().push(format!("{}:render", self.name));
            self.request.take()
        }

        fn on_end(&mut self, _ctx: &mut Context<TestCanvas>) {
            self.log.borrow_mut().push(format!("{}:end", self.name));
        }
    }

    impl Drop for Probe {
        fn drop(&mut self) {
            self.log.borrow_mut().push(format!("{}:drop", self.name));
        }
    }

    #[test]
    fn test_transition_order_end_drop_init() {
        let mut ctx = ctx();
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut director: Director<TestCanvas> = Director::new();

        director.transition_to(Box::new(Probe::new("a", log.clone())), &mut ctx);
        director.transition_to(Box::new(Probe::new("b", log.clone())), &mut ctx);

        assert_eq!(
            *log.borrow(),
            vec!["a:init", "a:end", "a:drop", "b:init"],
            "end happens before destruction, destruction before the next init"
        );
    }

    #[test]
    fn test_tick_renders_active_screen_once() {
        let mut ctx = ctx();
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut director: Director<TestCanvas> = Director::new();

        director.transition_to(Box::new(Probe::new("a", log.clone())), &mut ctx);
        director.tick(&mut ctx, &InputSnapshot::default());
        director.tick(&mut ctx, &InputSnapshot::default());

        let renders = log.borrow().iter().filter(|e| e.ends_with("render")).count();
        assert_eq!(renders, 2, "one render per tick");
    }

    #[test]
    fn test_tick_without_active_screen_is_noop() {
        let mut ctx = ctx();
        let mut director: Director<TestCanvas> = Director::new();
        assert!(director.tick(&mut ctx, &InputSnapshot::default()).is_none());
    }

    #[test]
    fn test_goto_request_swaps_screen_on_tick_boundary() {
        let mut ctx = ctx();
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut director: Director<TestCanvas> = Director::new();

        let mut probe = Probe::new("a", log.clone());
        probe.request = Some(Request::Goto(NextScreen::Splash));
        director.transition_to(Box::new(probe), &mut ctx);

        let passed_through = director.tick(&mut ctx, &InputSnapshot::default());
        assert!(passed_through.is_none(), "transitions are consumed by the director");
        assert!(
            log.borrow().contains(&"a:end".to_string()),
            "requesting screen was ended"
        );
        assert!(log.borrow().contains(&"a:drop".to_string()));
    }

    #[test]
    fn test_host_requests_pass_through() {
        let mut ctx = ctx();
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut director: Director<TestCanvas> = Director::new();

        let mut probe = Probe::new("a", log.clone());
        probe.request = Some(Request::Reboot);
        director.transition_to(Box::new(probe), &mut ctx);

        assert_eq!(
            director.tick(&mut ctx, &InputSnapshot::default()),
            Some(Request::Reboot),
            "host effects are returned, not swallowed"
        );
        assert!(
            !log.borrow().contains(&"a:end".to_string()),
            "screen stays active on host requests"
        );
    }
}

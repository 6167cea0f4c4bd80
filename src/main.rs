//! Desktop simulator for the snake game.
//!
//! Runs the game against an `embedded-graphics-simulator` window, with the
//! keyboard standing in for the input hardware and a small save file for the
//! persistent state.
//!
//! # Controls
//!
//! | Key                 | Action                      |
//! |---------------------|-----------------------------|
//! | Arrows / WASD       | Direction                   |
//! | Enter / Space       | Start button                |
//!
//! Pass `--analog` to emulate the two-axis stick scheme (enables the
//! calibration screen); the default is the four-button scheme.

use std::path::PathBuf;
use std::thread;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use snake_tft::colors::BLACK;
use snake_tft::config::{AXIS_MAX, SCREEN_HEIGHT, SCREEN_WIDTH, TICK_INTERVAL};
use snake_tft::context::Context;
use snake_tft::input::{AnalogPad, ButtonPad, InputScheme, InputSource};
use snake_tft::screens::{Director, Request, SplashScreen};
use snake_tft::store::FileStore;

const SAVE_FILE: &str = "snake-tft.sav";

/// Current keyboard state, sampled from SDL events.
#[derive(Default)]
struct Keys {
    left: bool,
    right: bool,
    up: bool,
    down: bool,
    start: bool,
}

/// The input strategy selected at startup.
enum Pad {
    Analog(AnalogPad),
    Digital(ButtonPad),
}

impl Pad {
    /// Translate the keyboard state into the pad's native sample shape.
    fn feed(&mut self, keys: &Keys) {
        match self {
            Pad::Analog(pad) => {
                let x = if keys.left {
                    -AXIS_MAX
                } else if keys.right {
                    AXIS_MAX
                } else {
                    0
                };
                let y = if keys.up {
                    AXIS_MAX
                } else if keys.down {
                    -AXIS_MAX
                } else {
                    0
                };
                pad.set_axes(x, y);
                pad.set_start(keys.start);
            }
            Pad::Digital(pad) => {
                pad.set_buttons(keys.left, keys.right, keys.up, keys.down, keys.start);
            }
        }
    }

    fn source(&mut self) -> &mut dyn InputSource {
        match self {
            Pad::Analog(pad) => pad,
            Pad::Digital(pad) => pad,
        }
    }
}

fn set_key(keys: &mut Keys, keycode: Keycode, down: bool) {
    match keycode {
        Keycode::Left | Keycode::A => keys.left = down,
        Keycode::Right | Keycode::D => keys.right = down,
        Keycode::Up | Keycode::W => keys.up = down,
        Keycode::Down | Keycode::S => keys.down = down,
        Keycode::Return | Keycode::Space => keys.start = down,
        _ => {}
    }
}

fn main() {
    let scheme = if std::env::args().any(|arg| arg == "--analog") {
        InputScheme::Analog
    } else {
        InputScheme::Digital
    };

    let display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(3).build();
    let mut window = Window::new("Snake", &output_settings);

    let store = FileStore::open(PathBuf::from(SAVE_FILE));
    let mut ctx = Context::new(display, Box::new(store), SCREEN_WIDTH, SCREEN_HEIGHT, scheme);
    ctx.clear(BLACK);
    window.update(&ctx.display);

    let mut pad = match scheme {
        InputScheme::Analog => Pad::Analog(AnalogPad::new(ctx.store.calibration())),
        InputScheme::Digital => Pad::Digital(ButtonPad::new()),
    };

    let mut keys = Keys::default();
    let mut director = Director::new();
    director.transition_to(Box::new(SplashScreen::new()), &mut ctx);

    'run: loop {
        for event in window.events() {
            match event {
                SimulatorEvent::Quit => break 'run,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    // OS key repeat would fake start button edges.
                    if !repeat {
                        set_key(&mut keys, keycode, true);
                    }
                }
                SimulatorEvent::KeyUp { keycode, .. } => set_key(&mut keys, keycode, false),
                _ => {}
            }
        }

        pad.feed(&keys);
        let snapshot = pad.source().poll();

        match director.tick(&mut ctx, &snapshot) {
            Some(Request::Calibrate { raw_x, raw_y }) => pad.source().calibrate(raw_x, raw_y),
            Some(Request::Reboot) => {
                // Power cycle: fresh screen stack over a reread save state.
                ctx.max_score = ctx.store.max_score().unwrap_or(0);
                director = Director::new();
                director.transition_to(Box::new(SplashScreen::new()), &mut ctx);
            }
            Some(Request::Goto(_)) | None => {}
        }

        window.update(&ctx.display);
        thread::sleep(TICK_INTERVAL);
    }
}

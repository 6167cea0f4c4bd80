//! Application configuration constants.
//!
//! Layout values like the playfield block size and the reserved score bar
//! height are compile-time `const`, so the per-tick code never recomputes
//! them. Timing values are `Duration` constants consumed by the screens and
//! the host loop.

use std::time::Duration;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (160x128 class TFT).
pub const SCREEN_WIDTH: u32 = 160;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 128;

// =============================================================================
// Playfield Configuration
// =============================================================================

/// Edge length of one playfield block in pixels.
pub const BLOCK_SIZE: u32 = 8;

/// Edge length of the coin marker. Two pixels smaller than a block so the
/// coin renders centered inside its cell.
pub const COIN_SIZE: u32 = BLOCK_SIZE - 2;

/// Vertical space reserved above the playfield for the score bar.
pub const SCORE_BAR_HEIGHT: u32 = 12;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Pacing delay of the host loop. One input snapshot and one screen render
/// per tick.
pub const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Movement delay at game start. The snake advances one block each time this
/// much time has elapsed since the previous move.
pub const MOVE_DELAY_START: Duration = Duration::from_millis(500);

/// Lower bound for the movement delay.
pub const MOVE_DELAY_MIN: Duration = Duration::from_millis(50);

/// Movement delay reduction applied for every coin eaten.
pub const MOVE_DELAY_STEP: Duration = Duration::from_millis(10);

/// Cadence of the pre-game countdown ("3", "2", "1", "Go!").
pub const COUNTDOWN_INTERVAL: Duration = Duration::from_millis(1000);

/// Coin blink toggle interval.
pub const COIN_BLINK_INTERVAL: Duration = Duration::from_millis(100);

/// Delay between segments of the death sweep animation.
pub const SWEEP_STEP: Duration = Duration::from_millis(50);

/// Beat before and after the death sweep, and before the game-end buttons
/// appear.
pub const GAME_OVER_BEAT: Duration = Duration::from_millis(500);

/// How long the splash screen is shown.
pub const SPLASH_DURATION: Duration = Duration::from_millis(500);

/// Debounce beat after a menu item is activated.
pub const MENU_ACTION_DELAY: Duration = Duration::from_millis(100);

// =============================================================================
// Input Configuration
// =============================================================================

/// Maximum absolute value of a calibrated analog axis.
pub const AXIS_MAX: i32 = 512;

/// Minimum axis deflection that registers as a direction.
pub const AXIS_THRESHOLD: i32 = 300;

//! Color constants for the game.
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! This format is native to ST7789-class displays, so no conversion happens
//! when writing to the display buffer. Standard colors come from the
//! `RgbColor` trait constants; the rest are application-specific.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black. Background everywhere.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white. Borders, labels, selected list items.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure green. Snake body and pressed list items.
pub const GREEN: Rgb565 = Rgb565::GREEN;

/// Pure red. Death sweep impact color, warning titles.
pub const RED: Rgb565 = Rgb565::RED;

/// Cyan. Coin marker and score highlights.
pub const AQUA: Rgb565 = Rgb565::CYAN;

// =============================================================================
// Custom Colors (application-specific)
// =============================================================================

/// Half-brightness red trailing the death sweep.
/// RGB565: (15, 0, 0).
pub const DARK_RED: Rgb565 = Rgb565::new(15, 0, 0);

/// Orange for the pause title.
/// RGB565: (31, 35, 0) - slightly darker than yellow.
pub const ORANGE: Rgb565 = Rgb565::new(31, 35, 0);

//! Snake game runtime for small TFT displays.
//!
//! The crate is organized around a screen lifecycle: a director owns exactly
//! one active screen (splash, menu, calibration, confirmation, gameplay,
//! game over) and drives it once per tick with a fresh input snapshot. The
//! gameplay screen hosts the actual engine: a playfield grid, a snake stored
//! in a fixed-capacity ring buffer, and incremental redraw so per-tick work
//! stays bounded.
//!
//! Hardware concerns stay behind three seams:
//! - **Display**: anything implementing `DrawTarget<Color = Rgb565>`
//! - **Persistence**: the [`store::Persistence`] trait (max score,
//!   calibration center)
//! - **Input**: the [`input::InputSource`] trait, with analog-stick and
//!   four-button strategies
//!
//! The desktop simulator binary (feature `simulator`) wires these to an
//! `embedded-graphics-simulator` window, a save file and the keyboard.
//!
//! # Testing
//!
//! The library is pure host code; run the test suite with `cargo test`.
//! Screens are exercised against an in-memory recording draw target.

// Crate-level lints: pixel math casts between i32/u32/usize are pervasive
// and intentional.
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod buffer;
pub mod colors;
pub mod config;
pub mod context;
pub mod input;
pub mod playfield;
pub mod screens;
pub mod store;
pub mod styles;
pub mod widgets;

#[cfg(test)]
pub(crate) mod testutil;

//! Pre-computed static text styles and font references.
//!
//! `TextStyle` objects are `const`, so they live in the binary's read-only
//! data section and cost nothing to reference at draw time. Character styles
//! need a runtime color, so the fonts are exposed as references and callers
//! build `MonoTextStyle::new(font, color)` on the spot.

use embedded_graphics::{
    mono_font::{
        MonoFont,
        ascii::{FONT_6X10, FONT_10X20},
    },
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder},
};
use profont::PROFONT_24_POINT;

// =============================================================================
// Font References
// =============================================================================

/// Small font (6x10). List items, score bar, body text.
pub const LABEL_FONT: &MonoFont = &FONT_6X10;

/// Medium font (10x20). Screen titles.
pub const TITLE_FONT: &MonoFont = &FONT_10X20;

/// Large font for the pre-game countdown digits.
pub const COUNTDOWN_FONT: &MonoFont = &PROFONT_24_POINT;

// =============================================================================
// Text Alignment Styles (const - zero runtime cost)
// =============================================================================

/// Anchor text at its top-left corner. Used for absolutely positioned text
/// like the score bar.
pub const TOP_LEFT: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Top)
    .build();

/// Center text on the anchor point, both axes. Used for titles, list item
/// labels and countdown digits.
pub const CENTERED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

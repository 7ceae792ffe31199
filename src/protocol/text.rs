//! # ESC/POS Text Styling Commands
//!
//! This module implements the text half of the command table.
//!
//! ## Text Styling Overview
//!
//! | Style | Command | Effect |
//! |-------|---------|--------|
//! | Alignment | ESC a n | Left / center / right |
//! | Size | GS ! n | Width and height multipliers |
//! | Bold | ESC E n | **Emphasized** text |
//! | Underline | ESC - n | Underlined text |
//!
//! ## Text Alignment
//!
//! ```text
//! Left aligned (default)    |LEFT TEXT
//! Center aligned            |  CENTER TEXT
//! Right aligned             |      RIGHT TEXT
//! ```

use serde::{Deserialize, Serialize};

use super::commands::{ESC, GS};

// ============================================================================
// TEXT ALIGNMENT
// ============================================================================

/// Text alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left = 0,
    Center = 1,
    Right = 2,
}

/// # Select Justification (ESC a n)
///
/// Sets the alignment for subsequent lines.
///
/// ## Protocol Details
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | ESC a n  |
/// | Hex     | 1B 61 n  |
/// | Decimal | 27 97 n  |
///
/// ## Parameters
///
/// - `n = 0`: Left alignment (default)
/// - `n = 1`: Center alignment
/// - `n = 2`: Right alignment
///
/// ## Example
///
/// ```
/// use recibo::protocol::text::{align, Alignment};
///
/// assert_eq!(align(Alignment::Center), "\x1Ba\x01");
/// ```
pub fn align(alignment: Alignment) -> String {
    format!("{ESC}a{}", char::from(alignment as u8))
}

// ============================================================================
// CHARACTER SIZE
// ============================================================================

/// Character size presets used by the header levels.
///
/// The value is the `GS !` parameter: high nibble is the width
/// multiplier minus one, low nibble the height multiplier minus one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextSize {
    /// 1x1
    #[default]
    Normal = 0x00,
    /// 2x wide, 1x high
    DoubleWidth = 0x10,
    /// 2x2
    Large = 0x11,
    /// 3x3
    ExtraLarge = 0x22,
}

/// # Select Character Size (GS ! n)
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | GS ! n   |
/// | Hex     | 1D 21 n  |
///
/// ## Example
///
/// ```
/// use recibo::protocol::text::{set_size, TextSize};
///
/// assert_eq!(set_size(TextSize::Large), "\x1D!\x11");
/// ```
pub fn set_size(size: TextSize) -> String {
    format!("{GS}!{}", char::from(size as u8))
}

/// Back to 1x1 (GS ! 0).
#[inline]
pub fn reset_size() -> String {
    set_size(TextSize::Normal)
}

// ============================================================================
// EMPHASIS
// ============================================================================

/// # Bold On (ESC E 1)
#[inline]
pub fn bold_on() -> String {
    format!("{ESC}E\x01")
}

/// # Bold Off (ESC E 0)
#[inline]
pub fn bold_off() -> String {
    format!("{ESC}E\x00")
}

/// # Underline On (ESC - 1)
///
/// Single-dot underline for subsequent text.
#[inline]
pub fn underline_on() -> String {
    format!("{ESC}-\x01")
}

/// # Underline Off (ESC - 0)
#[inline]
pub fn underline_off() -> String {
    format!("{ESC}-\x00")
}

//! # ESC/POS Paper and Printer Commands
//!
//! This module implements the printer-level half of the ESC/POS command table:
//! initialization, character set selection, paper feed, cutting and the buzzer.
//!
//! ## Escape Sequence Structure
//!
//! Commands are short byte sequences led by one of two prefix bytes:
//! - `ESC` (0x1B) for printer and text commands: `ESC @`, `ESC d n`
//! - `GS` (0x1D) for extended commands: `GS V n`, `GS ! n`
//!
//! ## Representation
//!
//! Every command is returned as a `String` whose chars are all in
//! U+0000–U+00FF, so it can be interleaved with text fragments in the
//! receipt buffer and mapped one-to-one onto bytes by
//! [`latin1::encode`](super::latin1::encode).

// ============================================================================
// ESCAPE SEQUENCE CONSTANTS
// ============================================================================

/// ESC (Escape) - Command prefix byte
///
/// Most ESC/POS commands begin with ESC (0x1B). This byte signals the start
/// of a control sequence rather than printable text.
pub const ESC: char = '\x1B';

/// GS (Group Separator) - Extended command prefix
///
/// Used for size selection and the cutter.
/// - Hex: 0x1D, Decimal: 29
pub const GS: char = '\x1D';

/// LF (Line Feed) - Print and advance one line
pub const LF: char = '\n';

/// CR (Carriage Return) - Required before LF by some printers
pub const CR: char = '\r';

// ============================================================================
// INITIALIZATION COMMANDS
// ============================================================================

/// # Initialize Printer (ESC @)
///
/// Resets the printer to its power-on default state.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC @ |
/// | Hex     | 1B 40 |
/// | Decimal | 27 64 |
///
/// ## What Gets Reset
///
/// - Print buffer is cleared
/// - Bold and underline disabled
/// - Character size reset to 1x1
/// - Alignment reset to left
///
/// ## Example
///
/// ```
/// use recibo::protocol::commands;
///
/// assert_eq!(commands::init(), "\x1B@");
/// ```
#[inline]
pub fn init() -> String {
    format!("{ESC}@")
}

/// # Select Character Code Table (ESC R 0)
///
/// Selects the international character set. Receipts are emitted with
/// diacritics stripped, so the plain table 0 is always used.
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | ESC R 0  |
/// | Hex     | 1B 52 00 |
#[inline]
pub fn select_charset() -> String {
    format!("{ESC}R\x00")
}

// ============================================================================
// PAPER FEED
// ============================================================================

/// # Print and Feed n Lines (ESC d n)
///
/// Prints the line buffer and advances the paper by `lines` lines.
///
/// ## Protocol Details
///
/// | Format  | Bytes      |
/// |---------|------------|
/// | ASCII   | ESC d n    |
/// | Hex     | 1B 64 n    |
/// | Decimal | 27 100 n   |
///
/// ## Example
///
/// ```
/// use recibo::protocol::commands;
///
/// assert_eq!(commands::feed(3), "\x1Bd\x03");
/// ```
#[inline]
pub fn feed(lines: u8) -> String {
    format!("{ESC}d{}", char::from(lines))
}

// ============================================================================
// CUTTER CONTROL COMMANDS
// ============================================================================

/// # Full Cut (GS V 0)
///
/// Cuts the paper completely at the current position.
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | GS V 0   |
/// | Hex     | 1D 56 00 |
#[inline]
pub fn cut_full() -> String {
    format!("{GS}V\x00")
}

/// # Partial Cut (GS V 1)
///
/// Leaves a small hinge connecting the receipt to the roll.
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | GS V 1   |
/// | Hex     | 1D 56 01 |
#[inline]
pub fn cut_partial() -> String {
    format!("{GS}V\x01")
}

// ============================================================================
// BUZZER
// ============================================================================

/// # Beep (ESC B n t)
///
/// Sounds the buzzer 3 times with a duration factor of 2.
///
/// | Format  | Bytes       |
/// |---------|-------------|
/// | ASCII   | ESC B 3 2   |
/// | Hex     | 1B 42 03 02 |
#[inline]
pub fn beep() -> String {
    format!("{ESC}B\x03\x02")
}

// ============================================================================
// TESTS
// ============================================================================

//! # ESC/POS Protocol Implementation
//!
//! Low-level command builders for the ESC/POS command family used by most
//! thermal receipt printers (Epson, Elgin, Bematech, Daruma, generic 58mm
//! and 80mm units).
//!
//! ## Module Structure
//!
//! - [`commands`]: Printer-level commands (init, charset, feed, cut, beep)
//! - [`text`]: Text styling (alignment, size, bold, underline)
//! - [`latin1`]: Final byte encoding
//!
//! ## Usage Example
//!
//! ```
//! use recibo::protocol::{commands, latin1, text};
//!
//! let mut data = String::new();
//! data.push_str(&commands::init());
//! data.push_str(&text::align(text::Alignment::Center));
//! data.push_str(&text::bold_on());
//! data.push_str("RECEIPT\n");
//! data.push_str(&text::bold_off());
//! data.push_str(&commands::feed(3));
//! data.push_str(&commands::cut_full());
//!
//! let bytes = latin1::encode(&data);
//! assert_eq!(&bytes[..2], &[0x1B, 0x40]);
//! ```
//!
//! The byte values are fixed by the ESC/POS standard and must not change:
//! printers in the field depend on them.

pub mod commands;
pub mod latin1;
pub mod text;

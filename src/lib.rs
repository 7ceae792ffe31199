//! # Recibo - ESC/POS Receipt Builder
//!
//! Recibo is a Rust library for generating receipts for ESC/POS thermal
//! printers. It provides:
//!
//! - **Document builder**: a chainable API that accumulates text and commands
//! - **Capability profiles**: per-model feature flags and hardware quirks
//! - **Text layout**: word wrap, key/value rows, product lines, tables
//! - **Protocol implementation**: the ESC/POS command table
//!
//! Printers implement ESC/POS unevenly. Each builder is bound to a
//! [`CapabilityProfile`] and quietly degrades what the printer can't do
//! (no alignment codes, plain headers, no cut) instead of failing.
//!
//! ## Quick Start
//!
//! ```
//! use recibo::{receipt, CapabilityProfile};
//! use recibo::builder::CutMode;
//! use recibo::layout::Price;
//!
//! let mut r = receipt(CapabilityProfile::parse("elgin-i9")?);
//! r.center()
//!     .h1("MERCADO")
//!     .left()
//!     .hr()
//!     .product_line(1, "Arroz 5kg", Some(Price::from(27.9)))
//!     .br()
//!     .money("Total", 27.9)
//!     .cut(CutMode::Full, None);
//!
//! // Write these bytes to the printer's serial, USB or network stream
//! let bytes = r.build_bytes();
//! assert!(bytes.starts_with(&[0x1B, 0x40]));
//!
//! # Ok::<(), recibo::ReciboError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`builder`] | Receipt builder and capability gating |
//! | [`layout`] | Pure text layout functions |
//! | [`printer`] | Capability profiles |
//! | [`protocol`] | ESC/POS command table and encoding |
//! | [`json_api`] | JSON receipt documents |
//! | [`receipt`] | Demo templates |
//! | [`error`] | Error types |
//!
//! ## Supported Printers
//!
//! Built-in profiles cover a generic 80mm ESC/POS printer, the Elgin i9,
//! Bematech MP-4200 TH, Daruma DR800 and generic 58mm units. Other models
//! can be described in JSON.

pub mod builder;
pub mod error;
pub mod json_api;
pub mod layout;
pub mod printer;
pub mod protocol;
pub mod receipt;

// Re-exports for convenience
pub use builder::{ReceiptBuilder, receipt};
pub use error::ReciboError;
pub use printer::CapabilityProfile;

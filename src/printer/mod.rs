//! # Printer Module
//!
//! This module provides printer model descriptions.
//!
//! ## Modules
//!
//! - [`profile`]: Capability flags, quirks and the built-in catalog

pub mod profile;

pub use profile::{Capabilities, CapabilityProfile, Quirks};

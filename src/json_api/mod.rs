//! # JSON API
//!
//! Deserialize JSON receipt documents and replay them onto a
//! [`ReceiptBuilder`](crate::ReceiptBuilder).
//!
//! This lets point-of-sale systems written in other languages describe a
//! receipt as data and get printer bytes back from the `recibo` CLI.
//!
//! ## Example
//!
//! ```
//! use recibo::json_api::JsonDocument;
//! use recibo::printer::CapabilityProfile;
//!
//! let json = r#"{
//!     "document": [
//!         {"type": "align", "align": "center"},
//!         {"type": "header", "content": "LOJA", "level": 2},
//!         {"type": "rule"},
//!         {"type": "product_line", "quantity": 2, "name": "Café", "price": 4.5},
//!         {"type": "money", "label": "Total", "value": 9.0}
//!     ],
//!     "cut": true
//! }"#;
//!
//! let doc: JsonDocument = serde_json::from_str(json).unwrap();
//! let receipt = doc.render(CapabilityProfile::generic()).unwrap();
//! let bytes = receipt.build_bytes();
//! assert!(!bytes.is_empty());
//! ```

mod convert;
mod schema;

pub use convert::JsonApiError;
pub use schema::{JsonComponent, JsonDocument};

//! Replaying JSON documents onto a [`ReceiptBuilder`].

use std::fmt;

use crate::builder::{CutMode, HeadingLevel, ReceiptBuilder};
use crate::error::ReciboError;
use crate::printer::CapabilityProfile;

use super::schema::*;

/// Errors from JSON → builder conversion.
#[derive(Debug)]
pub enum JsonApiError {
    /// A field value is invalid.
    InvalidField {
        component: &'static str,
        field: &'static str,
        message: String,
    },
    /// The document names a profile that doesn't exist.
    UnknownProfile(String),
}

impl fmt::Display for JsonApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonApiError::InvalidField {
                component,
                field,
                message,
            } => write!(f, "{}: invalid {}: {}", component, field, message),
            JsonApiError::UnknownProfile(name) => write!(f, "unknown profile '{}'", name),
        }
    }
}

impl std::error::Error for JsonApiError {}

impl From<JsonApiError> for ReciboError {
    fn from(e: JsonApiError) -> Self {
        ReciboError::Document(e.to_string())
    }
}

impl JsonDocument {
    /// The profile named by the document, or `fallback` when it names none.
    pub fn resolve_profile(
        &self,
        fallback: CapabilityProfile,
    ) -> Result<CapabilityProfile, JsonApiError> {
        match &self.profile {
            Some(name) => CapabilityProfile::parse(name)
                .map_err(|_| JsonApiError::UnknownProfile(name.clone())),
            None => Ok(fallback),
        }
    }

    /// Build this document for `profile`, ending with a full cut if `cut`
    /// is set. The document's own `profile` field is not consulted here;
    /// see [`resolve_profile`](Self::resolve_profile).
    pub fn render(&self, profile: CapabilityProfile) -> Result<ReceiptBuilder, JsonApiError> {
        let mut builder = ReceiptBuilder::new(profile);
        for component in &self.document {
            component.apply(&mut builder)?;
        }
        if self.cut {
            builder.cut(CutMode::Full, None);
        }
        Ok(builder)
    }
}

impl JsonComponent {
    fn apply(&self, b: &mut ReceiptBuilder) -> Result<(), JsonApiError> {
        match self {
            JsonComponent::Align(a) => {
                b.align(a.align);
            }
            JsonComponent::Header(h) => {
                let level = HeadingLevel::from_number(h.level).ok_or_else(|| {
                    JsonApiError::InvalidField {
                        component: "header",
                        field: "level",
                        message: format!("expected 1, 2 or 3, got {}", h.level),
                    }
                })?;
                b.heading(level, &h.content);
            }
            JsonComponent::Text(t) => {
                b.text(&t.content);
            }
            JsonComponent::Paragraph(t) => {
                b.p(&t.content);
            }
            JsonComponent::Bold(t) => {
                b.bold_on().text(&t.content).bold_off();
            }
            JsonComponent::Underline(t) => {
                b.underline(&t.content);
            }
            JsonComponent::LineBreak(l) => {
                b.line_breaks(l.lines);
            }
            JsonComponent::Rule(r) => {
                b.rule(r.width, r.style);
            }
            JsonComponent::Table(t) => {
                if t.columns.is_empty() {
                    return Err(JsonApiError::InvalidField {
                        component: "table",
                        field: "columns",
                        message: "at least one column is required".to_string(),
                    });
                }
                b.table(&t.columns, &t.rows);
            }
            JsonComponent::Row(r) => {
                let width = r.width.unwrap_or(b.width());
                b.row_width(&r.label, &r.value, width);
            }
            JsonComponent::Rows(r) => {
                let width = r.width.unwrap_or(b.width());
                b.rows_width(&r.items, width);
            }
            JsonComponent::ProductLine(p) => {
                let width = p.width.unwrap_or(b.width());
                b.product_line_width(&p.quantity, &p.name, p.price.clone(), width);
            }
            JsonComponent::Money(m) => {
                let width = m.width.unwrap_or(b.width());
                b.money_width(&m.label, m.value, width);
            }
            JsonComponent::Initialize => {
                b.initialize();
            }
            JsonComponent::Feed(l) => {
                b.feed(l.lines);
            }
            JsonComponent::Beep => {
                b.beep();
            }
            JsonComponent::QrCode(q) => {
                b.qr_code(&q.data, q.size);
            }
            JsonComponent::Cut(c) => {
                let mode = if c.partial {
                    CutMode::Partial
                } else {
                    CutMode::Full
                };
                b.cut(mode, c.feed_lines);
            }
        }
        Ok(())
    }
}

//! JSON schema types for the document API.

use serde::Deserialize;

use crate::builder::{RowItem, RuleStyle};
use crate::layout::{Cell, Price, TableColumn};
use crate::protocol::text::Alignment;

fn default_true() -> bool {
    true
}

fn default_one() -> usize {
    1
}

fn default_level() -> u8 {
    1
}

fn default_qr_size() -> u8 {
    6
}

/// Top-level JSON document.
#[derive(Debug, Deserialize)]
pub struct JsonDocument {
    /// Built-in profile slug or name. The caller's profile is used when absent.
    #[serde(default)]
    pub profile: Option<String>,
    /// Components, replayed onto the builder in order.
    pub document: Vec<JsonComponent>,
    /// Whether to cut paper after printing (default: true).
    #[serde(default = "default_true")]
    pub cut: bool,
}

/// A single component in the document.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum JsonComponent {
    Align(JsonAlign),
    Header(JsonHeader),
    Text(JsonContent),
    Paragraph(JsonContent),
    Bold(JsonContent),
    Underline(JsonContent),
    LineBreak(JsonLines),
    Rule(JsonRule),
    Table(JsonTable),
    Row(JsonRow),
    Rows(JsonRows),
    ProductLine(JsonProductLine),
    Money(JsonMoney),
    Initialize,
    Feed(JsonLines),
    Beep,
    QrCode(JsonQrCode),
    Cut(JsonCut),
}

#[derive(Debug, Deserialize)]
pub struct JsonAlign {
    pub align: Alignment,
}

/// Header: level 1 (largest) to 3.
#[derive(Debug, Deserialize)]
pub struct JsonHeader {
    pub content: String,
    #[serde(default = "default_level")]
    pub level: u8,
}

#[derive(Debug, Deserialize)]
pub struct JsonContent {
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct JsonLines {
    #[serde(default = "default_one")]
    pub lines: usize,
}

/// Horizontal rule; full width when `width` is absent.
#[derive(Debug, Deserialize)]
pub struct JsonRule {
    #[serde(default)]
    pub width: Option<usize>,
    #[serde(default)]
    pub style: RuleStyle,
}

#[derive(Debug, Deserialize)]
pub struct JsonTable {
    pub columns: Vec<TableColumn>,
    #[serde(default)]
    pub rows: Vec<Vec<Cell>>,
}

#[derive(Debug, Deserialize)]
pub struct JsonRow {
    pub label: String,
    pub value: Cell,
    #[serde(default)]
    pub width: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct JsonRows {
    pub items: Vec<RowItem>,
    #[serde(default)]
    pub width: Option<usize>,
}

/// Product line: quantity and name on the left, price on the right.
#[derive(Debug, Deserialize)]
pub struct JsonProductLine {
    pub quantity: Cell,
    pub name: String,
    #[serde(default)]
    pub price: Option<Price>,
    #[serde(default)]
    pub width: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct JsonMoney {
    pub label: String,
    pub value: f64,
    #[serde(default)]
    pub width: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct JsonQrCode {
    pub data: String,
    #[serde(default = "default_qr_size")]
    pub size: u8,
}

#[derive(Debug, Deserialize)]
pub struct JsonCut {
    #[serde(default)]
    pub partial: bool,
    #[serde(default)]
    pub feed_lines: Option<u8>,
}

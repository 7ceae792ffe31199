//! # Receipt Builder
//!
//! A fluent, profile-aware ESC/POS document builder.
//!
//! Every operation appends zero or more fragments to an ordered buffer and
//! returns the builder for chaining. Whether a fragment is a real control
//! sequence, plain text or nothing at all depends on the
//! [`CapabilityProfile`]: unsupported features degrade quietly instead of
//! failing.
//!
//! ## Example
//!
//! ```
//! use recibo::{CapabilityProfile, ReceiptBuilder};
//! use recibo::builder::CutMode;
//! use recibo::layout::Price;
//!
//! let mut receipt = ReceiptBuilder::new(CapabilityProfile::printer_58mm());
//! receipt
//!     .center()
//!     .h1("PADARIA")
//!     .left()
//!     .hr()
//!     .product_line(2, "Pão francês", Some(Price::from(1.5)))
//!     .br()
//!     .money("Total", 3.0)
//!     .cut(CutMode::Full, None);
//!
//! let bytes = receipt.build_bytes();
//! assert!(bytes.ends_with(&[0x1D, 0x56, 0x00]));
//! ```
//!
//! ## Capability Gating
//!
//! | Operation | Gate | Fallback |
//! |-----------|------|----------|
//! | `left` / `center` / `right` | `alignment` | nothing |
//! | `h1` / `h2` | `double_width` and `double_height` | plain wrapped text |
//! | `h3` | `double_width` | plain wrapped text |
//! | `bold_on` / `bold_off` | `bold`, unless the bold quirk is set | nothing |
//! | `underline` | `underline` | plain wrapped text |
//! | `cut` | custom cut quirk, else `cut` | feed only |
//! | `beep` | `beep` | nothing |
//! | `qr_code` | `qr_code` | nothing |

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::layout::{
    Cell, Price, TableColumn, format_currency, format_product_line, format_row, render_table,
    strip_diacritics, wrap,
};
use crate::printer::CapabilityProfile;
use crate::protocol::commands;
use crate::protocol::latin1;
use crate::protocol::text::{self, Alignment, TextSize};

/// Header sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    /// Extra large (3x3); needs double width and height
    H1,
    /// Large (2x2); needs double width and height
    H2,
    /// Double width only
    H3,
}

impl HeadingLevel {
    /// Level from its number, 1 to 3.
    pub fn from_number(level: u8) -> Option<Self> {
        match level {
            1 => Some(Self::H1),
            2 => Some(Self::H2),
            3 => Some(Self::H3),
            _ => None,
        }
    }

    fn size(self) -> TextSize {
        match self {
            Self::H1 => TextSize::ExtraLarge,
            Self::H2 => TextSize::Large,
            Self::H3 => TextSize::DoubleWidth,
        }
    }
}

/// Horizontal rule styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleStyle {
    /// `-----`
    #[default]
    Dashed,
    /// `_____`
    Solid,
    /// `=====`
    Double,
}

impl RuleStyle {
    fn fill(self) -> char {
        match self {
            Self::Dashed => '-',
            Self::Solid => '_',
            Self::Double => '=',
        }
    }
}

/// Cut type requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CutMode {
    #[default]
    Full,
    /// Leaves a hinge; falls back to a full cut when the cutter can't.
    Partial,
}

/// A label/value pair for [`ReceiptBuilder::rows`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowItem {
    pub label: String,
    /// Numbers are accepted when deserializing and kept as their text.
    #[serde(deserialize_with = "value_as_text")]
    pub value: String,
}

fn value_as_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Cell::deserialize(deserializer).map(|cell| cell.to_string())
}

impl RowItem {
    pub fn new(label: impl Into<String>, value: impl fmt::Display) -> Self {
        Self {
            label: label.into(),
            value: value.to_string(),
        }
    }
}

/// Non-fatal problems noticed while building.
///
/// These never stop the document; they are kept on the builder and also
/// logged through `tracing`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The profile claims QR support but QR encoding is not implemented.
    QrCodeNotImplemented { data_len: usize, size: u8 },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::QrCodeNotImplemented { data_len, size } => write!(
                f,
                "QR code support not yet implemented \
                 ({data_len} bytes, module size {size}); skipped"
            ),
        }
    }
}

/// Stateful ESC/POS document builder bound to one printer profile.
///
/// The buffer is append-only and owned by this builder. [`build`](Self::build)
/// joins it without consuming it, so building twice gives the same output.
#[derive(Debug, Clone)]
pub struct ReceiptBuilder {
    profile: CapabilityProfile,
    width: usize,
    buffer: Vec<String>,
    diagnostics: Vec<Diagnostic>,
}

/// Create a builder for `profile`. Shorthand for [`ReceiptBuilder::new`].
pub fn receipt(profile: CapabilityProfile) -> ReceiptBuilder {
    ReceiptBuilder::new(profile)
}

impl ReceiptBuilder {
    /// Create a builder. Profiles with the init-per-document quirk get
    /// [`initialize`](Self::initialize) emitted immediately.
    pub fn new(profile: CapabilityProfile) -> Self {
        let width = profile.width();
        debug!(profile = %profile.name, width, "receipt builder created");

        let needs_init = profile.quirks.requires_init_per_document;
        let mut builder = Self {
            profile,
            width,
            buffer: Vec::new(),
            diagnostics: Vec::new(),
        };
        if needs_init {
            builder.initialize();
        }
        builder
    }

    /// The profile this builder emits for.
    pub fn profile(&self) -> &CapabilityProfile {
        &self.profile
    }

    /// Wrap width in characters.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Fragments appended so far, in call order.
    pub fn fragments(&self) -> &[String] {
        &self.buffer
    }

    /// Non-fatal problems recorded so far.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    fn push(&mut self, fragment: impl Into<String>) -> &mut Self {
        self.buffer.push(fragment.into());
        self
    }

    fn wrapped(&self, text: &str) -> String {
        wrap(&strip_diacritics(text), self.width)
    }

    // === Alignment ===

    /// Set alignment for subsequent lines. No-op without alignment support.
    pub fn align(&mut self, alignment: Alignment) -> &mut Self {
        if self.profile.capabilities.alignment {
            self.push(text::align(alignment));
        }
        self
    }

    pub fn left(&mut self) -> &mut Self {
        self.align(Alignment::Left)
    }

    pub fn center(&mut self) -> &mut Self {
        self.align(Alignment::Center)
    }

    pub fn right(&mut self) -> &mut Self {
        self.align(Alignment::Right)
    }

    // === Text ===

    /// Wrapped header text; each wrapped line is sized and reset on its own.
    pub fn heading(&mut self, level: HeadingLevel, content: &str) -> &mut Self {
        let wrapped = self.wrapped(content);
        let caps = self.profile.capabilities;
        let supported = match level {
            HeadingLevel::H1 | HeadingLevel::H2 => caps.double_width && caps.double_height,
            HeadingLevel::H3 => caps.double_width,
        };

        if !supported {
            return self.push(wrapped);
        }

        let on = text::set_size(level.size());
        let off = text::reset_size();
        let sized = wrapped
            .split('\n')
            .map(|line| format!("{on}{line}{off}"))
            .collect::<Vec<_>>()
            .join("\n");
        self.push(sized)
    }

    pub fn h1(&mut self, content: &str) -> &mut Self {
        self.heading(HeadingLevel::H1, content)
    }

    pub fn h2(&mut self, content: &str) -> &mut Self {
        self.heading(HeadingLevel::H2, content)
    }

    pub fn h3(&mut self, content: &str) -> &mut Self {
        self.heading(HeadingLevel::H3, content)
    }

    /// Plain wrapped text. No trailing newline.
    pub fn text(&mut self, content: &str) -> &mut Self {
        let wrapped = self.wrapped(content);
        self.push(wrapped)
    }

    /// Paragraph; identical to [`text`](Self::text).
    pub fn p(&mut self, content: &str) -> &mut Self {
        self.text(content)
    }

    /// Start bold. Dropped when bold is unsupported or known broken.
    pub fn bold_on(&mut self) -> &mut Self {
        if self.profile.bold_usable() {
            self.push(text::bold_on());
        }
        self
    }

    /// End bold. Same gating as [`bold_on`](Self::bold_on).
    pub fn bold_off(&mut self) -> &mut Self {
        if self.profile.bold_usable() {
            self.push(text::bold_off());
        }
        self
    }

    /// Wrapped text between underline on/off.
    pub fn underline(&mut self, content: &str) -> &mut Self {
        let wrapped = self.wrapped(content);
        if self.profile.capabilities.underline {
            let underlined = format!("{}{wrapped}{}", text::underline_on(), text::underline_off());
            self.push(underlined)
        } else {
            self.push(wrapped)
        }
    }

    // === Spacing ===

    /// One newline.
    pub fn br(&mut self) -> &mut Self {
        self.line_breaks(1)
    }

    /// `lines` newlines.
    pub fn line_breaks(&mut self, lines: usize) -> &mut Self {
        self.push(commands::LF.to_string().repeat(lines))
    }

    /// Dashed rule across the full width.
    pub fn hr(&mut self) -> &mut Self {
        self.rule(None, RuleStyle::Dashed)
    }

    /// Horizontal rule with a newline on each side.
    ///
    /// `width` defaults to the full line and is capped at it.
    pub fn rule(&mut self, width: Option<usize>, style: RuleStyle) -> &mut Self {
        let width = width.unwrap_or(self.width).min(self.width);
        let line: String = std::iter::repeat_n(style.fill(), width).collect();
        self.push(format!("\n{line}\n"))
    }

    /// `lines` newlines.
    pub fn feed(&mut self, lines: usize) -> &mut Self {
        self.line_breaks(lines)
    }

    // === Layout ===

    /// Table across the full width. See [`render_table`].
    pub fn table<R>(&mut self, columns: &[TableColumn], rows: &[R]) -> &mut Self
    where
        R: AsRef<[Cell]>,
    {
        let rendered = render_table(columns, rows, self.width);
        self.push(rendered)
    }

    /// `label: value` across the full width.
    pub fn row(&mut self, label: &str, value: impl fmt::Display) -> &mut Self {
        let width = self.width;
        self.row_width(label, value, width)
    }

    /// `label: value` padded to `width`.
    pub fn row_width(&mut self, label: &str, value: impl fmt::Display, width: usize) -> &mut Self {
        self.push(format_row(label, &value.to_string(), width))
    }

    /// Several rows in one fragment, joined by newlines.
    pub fn rows(&mut self, items: &[RowItem]) -> &mut Self {
        let width = self.width;
        self.rows_width(items, width)
    }

    pub fn rows_width(&mut self, items: &[RowItem], width: usize) -> &mut Self {
        let joined = items
            .iter()
            .map(|item| format_row(&item.label, &item.value, width))
            .collect::<Vec<_>>()
            .join("\n");
        self.push(joined)
    }

    /// `2x Name.....R$ 9,00` across the full width.
    pub fn product_line(
        &mut self,
        quantity: impl fmt::Display,
        name: &str,
        price: Option<Price>,
    ) -> &mut Self {
        let width = self.width;
        self.product_line_width(quantity, name, price, width)
    }

    pub fn product_line_width(
        &mut self,
        quantity: impl fmt::Display,
        name: &str,
        price: Option<Price>,
        width: usize,
    ) -> &mut Self {
        self.push(format_product_line(quantity, name, price.as_ref(), width))
    }

    /// `label: R$ 0,00` across the full width.
    pub fn money(&mut self, label: &str, value: f64) -> &mut Self {
        let width = self.width;
        self.money_width(label, value, width)
    }

    pub fn money_width(&mut self, label: &str, value: f64, width: usize) -> &mut Self {
        self.push(format_row(label, &format_currency(value), width))
    }

    // === Printer Control ===

    /// `ESC @` followed by the charset select.
    pub fn initialize(&mut self) -> &mut Self {
        self.push(commands::init());
        self.push(commands::select_charset())
    }

    /// Feed, then cut.
    ///
    /// A custom cut command on the profile replaces everything: it is
    /// emitted verbatim with no feed. Otherwise `feed_lines` (or the
    /// profile's count) lines are fed and, if the printer has a cutter,
    /// the cut is sent. Partial cuts become full cuts on printers that
    /// can't do them.
    ///
    /// On profiles that require CRLF, a feed count of 10 is the LF byte
    /// and gets a CR inserted before it by [`build`](Self::build), which
    /// corrupts the `ESC d` parameter. Use 9 or 11 there.
    pub fn cut(&mut self, mode: CutMode, feed_lines: Option<u8>) -> &mut Self {
        if let Some(custom) = self.profile.quirks.custom_cut_command.clone() {
            return self.push(custom);
        }

        let lines = feed_lines.unwrap_or_else(|| self.profile.feed_lines_before_cut());
        self.push(commands::feed(lines));

        let caps = self.profile.capabilities;
        if caps.cut {
            let code = match mode {
                CutMode::Partial if caps.partial_cut => commands::cut_partial(),
                _ => commands::cut_full(),
            };
            self.push(code);
        }
        self
    }

    pub fn beep(&mut self) -> &mut Self {
        if self.profile.capabilities.beep {
            self.push(commands::beep());
        }
        self
    }

    /// QR codes are not encoded yet. On printers that support them a
    /// [`Diagnostic`] is recorded and nothing is emitted.
    pub fn qr_code(&mut self, data: &str, size: u8) -> &mut Self {
        if self.profile.capabilities.qr_code {
            let diagnostic = Diagnostic::QrCodeNotImplemented {
                data_len: data.len(),
                size,
            };
            warn!(profile = %self.profile.name, "{diagnostic}");
            self.diagnostics.push(diagnostic);
        }
        self
    }

    // === Build ===

    /// Join the buffer, applying CRLF conversion when the profile needs it.
    pub fn build(&self) -> String {
        let joined = self.buffer.concat();
        let out = if self.profile.quirks.requires_crlf {
            joined.replace(commands::LF, &format!("{}{}", commands::CR, commands::LF))
        } else {
            joined
        };
        debug!(fragments = self.buffer.len(), chars = out.len(), "receipt built");
        out
    }

    /// [`build`](Self::build), encoded as Latin-1 bytes.
    pub fn build_bytes(&self) -> Vec<u8> {
        latin1::encode(&self.build())
    }
}

impl Default for ReceiptBuilder {
    fn default() -> Self {
        Self::new(CapabilityProfile::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::printer::{Capabilities, Quirks};

    fn profile_with(
        columns: usize,
        capabilities: Capabilities,
        quirks: Quirks,
    ) -> CapabilityProfile {
        CapabilityProfile {
            name: "Test".to_string(),
            columns,
            capabilities,
            quirks,
        }
    }

    fn bare(columns: usize) -> CapabilityProfile {
        profile_with(columns, Capabilities::default(), Quirks::default())
    }

    #[test]
    fn test_new_builder_is_empty() {
        let b = ReceiptBuilder::default();
        assert!(b.fragments().is_empty());
        assert_eq!(b.build(), "");
        assert_eq!(b.width(), 48);
    }

    #[test]
    fn test_init_per_document() {
        let b = ReceiptBuilder::new(CapabilityProfile::elgin_i9());
        assert_eq!(b.fragments(), &["\x1B@".to_string(), "\x1BR\x00".to_string()]);
    }

    #[test]
    fn test_alignment_supported() {
        let mut b = ReceiptBuilder::default();
        b.left().center().right();
        assert_eq!(b.build(), "\x1Ba\x00\x1Ba\x01\x1Ba\x02");
    }

    #[test]
    fn test_alignment_unsupported() {
        let mut b = ReceiptBuilder::new(bare(48));
        b.center().right();
        assert!(b.fragments().is_empty());
    }

    #[test]
    fn test_h1_sized() {
        let mut b = ReceiptBuilder::default();
        b.h1("Olá");
        assert_eq!(b.build(), "\x1D!\x22Ola\x1D!\x00");
    }

    #[test]
    fn test_h2_sized() {
        let mut b = ReceiptBuilder::default();
        b.h2("Hi");
        assert_eq!(b.build(), "\x1D!\x11Hi\x1D!\x00");
    }

    #[test]
    fn test_heading_wraps_each_line() {
        let mut b = ReceiptBuilder::new(profile_with(5, Capabilities::ALL, Quirks::default()));
        b.h3("ab cd ef");
        assert_eq!(b.build(), "\x1D!\x10ab cd\x1D!\x00\n\x1D!\x10ef\x1D!\x00");
    }

    #[test]
    fn test_h1_needs_double_height() {
        let caps = Capabilities {
            double_width: true,
            ..Default::default()
        };
        let mut b = ReceiptBuilder::new(profile_with(48, caps, Quirks::default()));
        b.h1("Big").h2("Mid").h3("Wide");
        assert_eq!(b.fragments()[0], "Big");
        assert_eq!(b.fragments()[1], "Mid");
        assert_eq!(b.fragments()[2], "\x1D!\x10Wide\x1D!\x00");
    }

    #[test]
    fn test_text_wraps_to_effective_width() {
        let quirks = Quirks {
            effective_line_width: Some(10),
            ..Default::default()
        };
        let mut b = ReceiptBuilder::new(profile_with(48, Capabilities::ALL, quirks));
        b.text("obrigado pela preferência");
        assert_eq!(b.build(), "obrigado\npela\npreferencia");
    }

    #[test]
    fn test_p_matches_text() {
        let mut a = ReceiptBuilder::default();
        let mut b = ReceiptBuilder::default();
        a.text("same words");
        b.p("same words");
        assert_eq!(a.build(), b.build());
    }

    #[test]
    fn test_bold_supported() {
        let mut b = ReceiptBuilder::default();
        b.bold_on().text("X").bold_off();
        assert_eq!(b.build(), "\x1BE\x01X\x1BE\x00");
    }

    #[test]
    fn test_bold_broken_is_dropped() {
        let quirks = Quirks {
            bold_command_is_broken: true,
            ..Default::default()
        };
        let mut b = ReceiptBuilder::new(profile_with(48, Capabilities::ALL, quirks));
        b.bold_on().bold_off();
        assert!(b.fragments().is_empty());
    }

    #[test]
    fn test_underline_fallback() {
        let mut b = ReceiptBuilder::new(bare(48));
        b.underline("nota");
        assert_eq!(b.build(), "nota");

        let mut b = ReceiptBuilder::default();
        b.underline("nota");
        assert_eq!(b.build(), "\x1B-\x01nota\x1B-\x00");
    }

    #[test]
    fn test_line_breaks() {
        let mut b = ReceiptBuilder::default();
        b.br().line_breaks(3).feed(2);
        assert_eq!(b.build(), "\n\n\n\n\n\n");
    }

    #[test]
    fn test_hr_full_width() {
        let mut b = ReceiptBuilder::new(CapabilityProfile::printer_58mm());
        b.hr();
        assert_eq!(b.build(), format!("\n{}\n", "-".repeat(32)));
    }

    #[test]
    fn test_rule_capped_and_styled() {
        let mut b = ReceiptBuilder::new(bare(8));
        b.rule(Some(100), RuleStyle::Double).rule(Some(3), RuleStyle::Solid);
        assert_eq!(b.build(), "\n========\n\n___\n");
    }

    #[test]
    fn test_table_uses_profile_width() {
        let mut b = ReceiptBuilder::new(bare(12));
        let columns = [TableColumn::new("A"), TableColumn::new("B").align(Alignment::Right)];
        b.table(&columns, &[vec![Cell::from("x"), Cell::from(1)]]);
        assert_eq!(b.build(), "A          B\n------------\nx          1");
    }

    #[test]
    fn test_row_and_rows() {
        let mut b = ReceiptBuilder::new(bare(10));
        b.row("Mesa", 7);
        b.rows(&[RowItem::new("A", "1"), RowItem::new("B", "2")]);
        assert_eq!(b.fragments()[0], "Mesa: 7   ");
        assert_eq!(b.fragments()[1], "A: 1      \nB: 2      ");
    }

    #[test]
    fn test_row_width_override() {
        let mut b = ReceiptBuilder::default();
        b.row_width("a", "b", 6);
        assert_eq!(b.build(), "a: b  ");
    }

    #[test]
    fn test_product_line() {
        let mut b = ReceiptBuilder::new(bare(20));
        b.product_line(1, "Widget", Some(Price::from(9.5)));
        assert_eq!(b.build(), "1x Widget....R$ 9,50");
    }

    #[test]
    fn test_money() {
        let mut b = ReceiptBuilder::new(bare(20));
        b.money("Total", 12.5);
        assert_eq!(b.build(), "Total: R$ 12,50     ");
    }

    #[test]
    fn test_money_and_product_line_round_ties_up() {
        let mut b = ReceiptBuilder::new(bare(20));
        b.money("Total", 0.625)
            .br()
            .product_line(1, "Pao", Some(Price::from(12.625)))
            .br()
            .money("Troco", -0.0);
        assert_eq!(
            b.build(),
            "Total: R$ 0,63      \n1x Pao......R$ 12,63\nTroco: R$ 0,00      "
        );
    }

    #[test]
    fn test_crlf_feed_of_ten_gets_cr_in_parameter() {
        let mut b = ReceiptBuilder::new(CapabilityProfile::elgin_i9());
        b.cut(CutMode::Full, Some(10));
        assert!(b.build().ends_with("\x1Bd\r\n\x1DV\x00"));
    }

    #[test]
    fn test_initialize() {
        let mut b = ReceiptBuilder::default();
        b.initialize();
        assert_eq!(b.build(), "\x1B@\x1BR\x00");
    }

    #[test]
    fn test_cut_full_default_feed() {
        let mut b = ReceiptBuilder::default();
        b.cut(CutMode::Full, None);
        assert_eq!(b.build(), "\x1Bd\x03\x1DV\x00");
    }

    #[test]
    fn test_cut_partial_supported() {
        let mut b = ReceiptBuilder::default();
        b.cut(CutMode::Partial, Some(7));
        assert_eq!(b.build(), "\x1Bd\x07\x1DV\x01");
    }

    #[test]
    fn test_cut_partial_falls_back_to_full() {
        let mut b = ReceiptBuilder::new(CapabilityProfile::elgin_i9());
        b.cut(CutMode::Partial, None);
        assert_eq!(b.fragments()[2..], ["\x1Bd\x05".to_string(), "\x1DV\x00".to_string()]);
    }

    #[test]
    fn test_cut_without_cutter_feeds_only() {
        let mut b = ReceiptBuilder::new(bare(48));
        b.cut(CutMode::Full, None);
        assert_eq!(b.build(), "\x1Bd\x03");
    }

    #[test]
    fn test_custom_cut_overrides_everything() {
        let quirks = Quirks {
            custom_cut_command: Some("\x1Bi".to_string()),
            extra_feed_lines_before_cut: Some(9),
            ..Default::default()
        };
        // No cutter capability, still emitted
        let mut b = ReceiptBuilder::new(profile_with(48, Capabilities::default(), quirks.clone()));
        b.cut(CutMode::Partial, Some(2));
        assert_eq!(b.build(), "\x1Bi");

        let mut b = ReceiptBuilder::new(profile_with(48, Capabilities::ALL, quirks));
        b.cut(CutMode::Full, None);
        assert_eq!(b.build(), "\x1Bi");
    }

    #[test]
    fn test_beep_gated() {
        let mut b = ReceiptBuilder::default();
        b.beep();
        assert_eq!(b.build(), "\x1BB\x03\x02");

        let mut b = ReceiptBuilder::new(bare(48));
        b.beep();
        assert_eq!(b.build(), "");
    }

    #[test]
    fn test_qr_code_records_diagnostic() {
        let mut b = ReceiptBuilder::default();
        b.qr_code("https://example.com", 6).text("after");
        assert_eq!(b.build(), "after");
        assert_eq!(
            b.diagnostics(),
            &[Diagnostic::QrCodeNotImplemented { data_len: 19, size: 6 }]
        );
    }

    #[test]
    fn test_qr_code_unsupported_is_silent() {
        let mut b = ReceiptBuilder::new(CapabilityProfile::bematech_mp4200());
        b.qr_code("data", 6);
        assert!(b.diagnostics().is_empty());
        assert!(b.fragments().is_empty());
    }

    #[test]
    fn test_crlf_conversion() {
        let mut b = ReceiptBuilder::new(CapabilityProfile::elgin_i9());
        b.text("a").br().hr().text("b");
        let out = b.build();
        assert!(out.contains("a\r\n"));
        for (i, _) in out.match_indices('\n') {
            assert_eq!(&out[i - 1..i], "\r");
        }
    }

    #[test]
    fn test_build_idempotent() {
        let mut b = ReceiptBuilder::new(CapabilityProfile::elgin_i9());
        b.h1("Loja").br().money("Total", 1.0).cut(CutMode::Full, None);
        assert_eq!(b.build(), b.build());
        assert_eq!(b.build_bytes(), b.build_bytes());
    }

    #[test]
    fn test_fragments_in_call_order() {
        let mut b = ReceiptBuilder::new(bare(48));
        b.text("1").br().text("2").feed(1).text("3");
        assert_eq!(b.build(), "1\n2\n3");
        assert_eq!(b.fragments().len(), 5);
    }

    #[test]
    fn test_heading_level_from_number() {
        assert_eq!(HeadingLevel::from_number(2), Some(HeadingLevel::H2));
        assert_eq!(HeadingLevel::from_number(0), None);
        assert_eq!(HeadingLevel::from_number(4), None);
    }
}

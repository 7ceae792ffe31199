//! # Text Layout Utilities
//!
//! Pure string functions shared by the builder and the table renderer.
//!
//! All widths are counted in chars. After [`strip_diacritics`] receipt text
//! is single-byte Latin-1, so one char is one printer column.

use std::fmt;

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

/// Combining Diacritical Marks block.
const COMBINING_MARKS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036F}';

/// Ordinal indicators and the degree sign, dropped outright.
const DROPPED_SYMBOLS: [char; 3] = ['ª', 'º', '°'];

/// Fill character between a product name and its price.
const LEADER: char = '.';

/// Decimal places in a formatted amount.
const CENT_PLACES: u32 = 2;

/// Remove accents so text survives single-byte printer charsets.
///
/// Decomposes to NFD, then drops combining marks (U+0300–U+036F) and the
/// `ª º °` symbols.
///
/// ## Example
///
/// ```
/// use recibo::layout::strip_diacritics;
///
/// assert_eq!(strip_diacritics("Pão de açúcar nº 5"), "Pao de acucar n 5");
/// ```
pub fn strip_diacritics(text: &str) -> String {
    text.nfd()
        .filter(|c| !COMBINING_MARKS.contains(c) && !DROPPED_SYMBOLS.contains(c))
        .collect()
}

/// Greedy word wrap on single spaces.
///
/// A word is appended to the current line while `line + 1 + word` fits in
/// `max_width`; otherwise the line is flushed. Words longer than
/// `max_width` are never split and sit alone on an overlong line. The last
/// line carries no trailing `\n`.
///
/// ## Example
///
/// ```
/// use recibo::layout::wrap;
///
/// assert_eq!(wrap("the quick brown fox", 10), "the quick\nbrown fox");
/// assert_eq!(wrap("", 10), "");
/// ```
pub fn wrap(text: &str, max_width: usize) -> String {
    let mut result = String::with_capacity(text.len());
    let mut line = String::new();
    let mut line_len = 0;

    // split(' ') keeps empty words for runs of spaces, which then survive
    // as extra spaces inside a line.
    for word in text.split(' ') {
        let word_len = char_len(word);
        if line_len == 0 {
            line.clear();
            line.push_str(word);
            line_len = word_len;
        } else if line_len + 1 + word_len <= max_width {
            line.push(' ');
            line.push_str(word);
            line_len += 1 + word_len;
        } else {
            result.push_str(&line);
            result.push('\n');
            line.clear();
            line.push_str(word);
            line_len = word_len;
        }
    }

    if line_len > 0 {
        result.push_str(&line);
    }
    result
}

/// `label: value` padded to exactly `width`, or two lines when it won't fit.
///
/// Both sides are trimmed and stripped of diacritics. On overflow the
/// result is `label:` followed by the value alone on the next line; the
/// value is not wrapped further.
///
/// ## Example
///
/// ```
/// use recibo::layout::format_row;
///
/// assert_eq!(format_row("Mesa", "12", 10), "Mesa: 12  ");
/// assert_eq!(format_row("Cliente", "Maria da Silva", 10), "Cliente:\nMaria da Silva");
/// ```
pub fn format_row(label: &str, value: &str, width: usize) -> String {
    let label = strip_diacritics(label.trim());
    let value = strip_diacritics(value.trim());
    let combined = format!("{label}: {value}");
    let len = char_len(&combined);

    if len <= width {
        format!("{combined}{}", pad(width - len))
    } else {
        format!("{label}:\n{value}")
    }
}

/// Quantity, name and an optional price joined by a dot leader.
///
/// ```text
/// 2x Cafe expresso.............R$ 9,00
/// ```
///
/// Without a price the left part is padded to `width`. When the leader
/// would be shorter than two dots the price drops to its own
/// right-aligned line.
///
/// ## Example
///
/// ```
/// use recibo::layout::{format_product_line, Price};
///
/// let line = format_product_line(1, "Widget", Some(&Price::from(9.5)), 20);
/// assert_eq!(line, "1x Widget....R$ 9,50");
/// ```
pub fn format_product_line(
    quantity: impl fmt::Display,
    name: &str,
    price: Option<&Price>,
    width: usize,
) -> String {
    let left = format!("{quantity}x {}", strip_diacritics(name.trim()));
    let left_len = char_len(&left);

    let Some(price) = price.filter(|p| !p.is_empty()) else {
        return format!("{left}{}", pad(width.saturating_sub(left_len)));
    };

    let right = price.to_string();
    let right_len = char_len(&right);
    let dots_needed = width as isize - left_len as isize - right_len as isize;

    if dots_needed <= 1 {
        return format!("{left}\n{}{right}", pad(width.saturating_sub(right_len)));
    }

    let dots: String = std::iter::repeat_n(LEADER, dots_needed as usize).collect();
    format!("{left}{dots}{right}")
}

/// Brazilian real formatting: two decimals, comma separator.
///
/// Rounds the exact binary value of `amount` half away from zero, so
/// `12.625` prints as `12,63` and `1.005` (stored as 1.00499...) as `1,00`.
/// Negative zero prints without a sign.
///
/// ## Example
///
/// ```
/// use recibo::layout::format_currency;
///
/// assert_eq!(format_currency(1234.5), "R$ 1234,50");
/// assert_eq!(format_currency(0.125), "R$ 0,13");
/// ```
pub fn format_currency(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let digits = match Decimal::from_f64_retain(amount.abs()) {
        Some(value) => {
            let mut rounded =
                value.round_dp_with_strategy(CENT_PLACES, RoundingStrategy::MidpointAwayFromZero);
            rounded.rescale(CENT_PLACES);
            rounded.to_string()
        }
        // NaN, infinities and values beyond Decimal's range
        None => format!("{:.2}", amount.abs()),
    };
    format!("R$ {sign}{}", digits.replace('.', ","))
}

/// A price as the caller supplied it.
///
/// Numbers get currency formatting; text is passed through behind the
/// `R$ ` prefix untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Amount(f64),
    Text(String),
}

impl Price {
    /// An empty text price counts as no price at all.
    pub fn is_empty(&self) -> bool {
        matches!(self, Price::Text(s) if s.is_empty())
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Price::Amount(amount) => f.write_str(&format_currency(*amount)),
            Price::Text(text) => write!(f, "R$ {text}"),
        }
    }
}

impl From<f64> for Price {
    fn from(amount: f64) -> Self {
        Price::Amount(amount)
    }
}

impl From<&str> for Price {
    fn from(text: &str) -> Self {
        Price::Text(text.to_string())
    }
}

impl From<String> for Price {
    fn from(text: String) -> Self {
        Price::Text(text)
    }
}

/// Length in chars (one printer column each).
#[inline]
pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}

#[inline]
pub(crate) fn pad(n: usize) -> String {
    " ".repeat(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_diacritics_portuguese() {
        assert_eq!(strip_diacritics("ação"), "acao");
        assert_eq!(strip_diacritics("AVENIDA SÃO JOÃO"), "AVENIDA SAO JOAO");
        assert_eq!(strip_diacritics("Crème brûlée"), "Creme brulee");
    }

    #[test]
    fn test_strip_diacritics_symbols() {
        assert_eq!(strip_diacritics("1ª via, 2º andar, 30°C"), "1 via, 2 andar, 30C");
    }

    #[test]
    fn test_strip_diacritics_ascii_untouched() {
        assert_eq!(strip_diacritics("Plain text 123"), "Plain text 123");
    }

    #[test]
    fn test_wrap_empty() {
        assert_eq!(wrap("", 5), "");
        assert_eq!(wrap("", 1), "");
    }

    #[test]
    fn test_wrap_fits() {
        assert_eq!(wrap("hello world", 11), "hello world");
    }

    #[test]
    fn test_wrap_breaks() {
        assert_eq!(wrap("aaa bbb ccc", 7), "aaa bbb\nccc");
    }

    #[test]
    fn test_wrap_long_word_unsplit() {
        assert_eq!(wrap("a supercalifragilistic b", 5), "a\nsupercalifragilistic\nb");
    }

    #[test]
    fn test_wrap_line_limit() {
        let text = "Lorem ipsum dolor sit amet consectetur adipiscing elit sed do";
        for width in 11..30 {
            for line in wrap(text, width).split('\n') {
                assert!(char_len(line) <= width, "{line:?} exceeds {width}");
            }
        }
    }

    #[test]
    fn test_wrap_double_space_preserved() {
        assert_eq!(wrap("a  b", 10), "a  b");
    }

    #[test]
    fn test_wrap_leading_space_dropped() {
        assert_eq!(wrap(" a", 10), "a");
    }

    #[test]
    fn test_format_row_padded() {
        let row = format_row("Total", "10", 12);
        assert_eq!(row, "Total: 10   ");
        assert_eq!(char_len(&row), 12);
    }

    #[test]
    fn test_format_row_exact_fit() {
        assert_eq!(format_row("ab", "cd", 6), "ab: cd");
    }

    #[test]
    fn test_format_row_overflow() {
        assert_eq!(
            format_row("Endereço", "Rua das Flores 100", 16),
            "Endereco:\nRua das Flores 100"
        );
    }

    #[test]
    fn test_format_row_trims() {
        assert_eq!(format_row("  a ", " b  ", 4), "a: b");
    }

    #[test]
    fn test_product_line_with_dots() {
        let line = format_product_line(1, "Widget", Some(&Price::Amount(9.5)), 20);
        assert_eq!(line, "1x Widget....R$ 9,50");
        assert_eq!(char_len(&line), 20);
    }

    #[test]
    fn test_product_line_no_price() {
        assert_eq!(format_product_line(3, "Pão", None, 10), "3x Pao    ");
    }

    #[test]
    fn test_product_line_no_price_overlong() {
        assert_eq!(format_product_line(1, "Refrigerante", None, 8), "1x Refrigerante");
    }

    #[test]
    fn test_product_line_empty_text_price_is_absent() {
        let line = format_product_line(1, "Agua", Some(&Price::from("")), 10);
        assert_eq!(line, "1x Agua   ");
    }

    #[test]
    fn test_product_line_text_price() {
        let line = format_product_line("2", "Suco", Some(&Price::from("5,00")), 20);
        assert_eq!(line, "2x Suco......R$ 5,00");
    }

    #[test]
    fn test_product_line_single_dot_falls_back() {
        // 9 + 7 = 16, width 17 leaves one dot: not enough
        let line = format_product_line(1, "Widget", Some(&Price::Amount(9.5)), 17);
        assert_eq!(line, format!("1x Widget\n{}R$ 9,50", " ".repeat(10)));
    }

    #[test]
    fn test_product_line_price_wider_than_line() {
        let line = format_product_line(1, "X", Some(&Price::Amount(1000.0)), 5);
        assert_eq!(line, "1x X\nR$ 1000,00");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(9.5), "R$ 9,50");
        assert_eq!(format_currency(0.0), "R$ 0,00");
        assert_eq!(format_currency(-3.25), "R$ -3,25");
    }

    #[test]
    fn test_format_currency_rounds_ties_up() {
        assert_eq!(format_currency(0.125), "R$ 0,13");
        assert_eq!(format_currency(0.625), "R$ 0,63");
        assert_eq!(format_currency(12.625), "R$ 12,63");
        assert_eq!(format_currency(-12.625), "R$ -12,63");
    }

    #[test]
    fn test_format_currency_inexact_ties_follow_binary_value() {
        // 1.005 is stored just below the tie
        assert_eq!(format_currency(1.005), "R$ 1,00");
        assert_eq!(format_currency(2.675), "R$ 2,67");
    }

    #[test]
    fn test_format_currency_negative_zero() {
        assert_eq!(format_currency(-0.0), "R$ 0,00");
    }

    #[test]
    fn test_format_product_line_rounds_ties_up() {
        assert_eq!(
            format_product_line(1, "Pao", Some(&Price::from(12.625)), 20),
            "1x Pao......R$ 12,63"
        );
    }
}

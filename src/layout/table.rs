//! # Table Layout
//!
//! Column-width allocation and fixed-width table rendering.
//!
//! ## Rendering
//!
//! ```text
//! Item              Qtd     Valor     <- titles, aligned per column
//! ----------------------------------  <- dashes, min(width, header)
//! Cafe expresso     2        9,00
//! Pao de queijo     10      35,00
//! com requeijao                       <- cells wrap independently
//! ```
//!
//! Columns are concatenated with no separator, so a column's width
//! includes whatever gap the caller wants after it.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::text::{char_len, pad, strip_diacritics, wrap};
use crate::protocol::text::Alignment;

/// Narrowest a flexible column may become.
pub const MIN_COLUMN_WIDTH: usize = 4;

/// A table column definition.
///
/// A fixed width wins over flex. Flexible columns share what is left of
/// the line in proportion to their weights (default 1).
///
/// ## Example
///
/// ```
/// use recibo::layout::TableColumn;
/// use recibo::protocol::text::Alignment;
///
/// let columns = [
///     TableColumn::new("Qtd").width(5),
///     TableColumn::new("Item").flex(2.0),
///     TableColumn::new("Valor").align(Alignment::Right),
/// ];
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableColumn {
    pub title: String,
    /// Characters; zero or negative render as an empty column.
    #[serde(default, alias = "width", skip_serializing_if = "Option::is_none")]
    pub fixed_width: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flex: Option<f64>,
    #[serde(default)]
    pub align: Alignment,
}

impl TableColumn {
    /// Left-aligned flexible column with weight 1.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            fixed_width: None,
            flex: None,
            align: Alignment::Left,
        }
    }

    /// Fix the width in characters.
    pub fn width(mut self, width: i32) -> Self {
        self.fixed_width = Some(width);
        self
    }

    /// Set the flex weight. Ignored when a fixed width is set.
    pub fn flex(mut self, weight: f64) -> Self {
        self.flex = Some(weight);
        self
    }

    /// Set the cell alignment.
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    fn fixed(&self) -> Option<usize> {
        self.fixed_width.map(|w| w.max(0) as usize)
    }

    fn weight(&self) -> f64 {
        self.flex.unwrap_or(1.0).max(0.0)
    }
}

/// A table cell: text or a number, rendered through `Display`.
///
/// Numbers print the shortest way (`10`, `9.5`), not as currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Text(String),
    Number(f64),
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => f.write_str(s),
            Cell::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Cell::Number(n)
    }
}

impl From<i32> for Cell {
    fn from(n: i32) -> Self {
        Cell::Number(n.into())
    }
}

impl From<u32> for Cell {
    fn from(n: u32) -> Self {
        Cell::Number(n.into())
    }
}

/// Compute each column's width for a line of `total_width` characters.
///
/// 1. Fixed widths are taken verbatim (negative clamps to 0).
/// 2. The rest of the line is split across flexible columns by weight,
///    floored, with a floor of [`MIN_COLUMN_WIDTH`].
/// 3. If the sum overflows the line, every width is scaled by
///    `total / sum`, floored, and re-clamped to [`MIN_COLUMN_WIDTH`].
///
/// The rescale can leave the sum a few characters off `total_width`; that is
/// the layout existing receipts were printed with and is kept as is.
///
/// ## Example
///
/// ```
/// use recibo::layout::{allocate_columns, TableColumn};
///
/// let columns = [
///     TableColumn::new("A").width(10),
///     TableColumn::new("B"),
///     TableColumn::new("C").flex(2.0),
/// ];
/// assert_eq!(allocate_columns(&columns, 40), vec![10, 10, 20]);
/// ```
pub fn allocate_columns(columns: &[TableColumn], total_width: usize) -> Vec<usize> {
    let fixed_total: usize = columns.iter().filter_map(TableColumn::fixed).sum();
    let total_flex: f64 = columns
        .iter()
        .filter(|c| c.fixed().is_none())
        .map(TableColumn::weight)
        .sum();
    let remaining = total_width.saturating_sub(fixed_total);

    let mut widths: Vec<usize> = columns
        .iter()
        .map(|col| match col.fixed() {
            Some(width) => width,
            None => {
                let proportional = if total_flex > 0.0 {
                    (remaining as f64 * col.weight() / total_flex).floor() as usize
                } else {
                    0
                };
                proportional.max(MIN_COLUMN_WIDTH)
            }
        })
        .collect();

    let computed: usize = widths.iter().sum();
    if computed > total_width {
        let scale = total_width as f64 / computed as f64;
        for width in &mut widths {
            *width = ((*width as f64 * scale).floor() as usize).max(MIN_COLUMN_WIDTH);
        }
    }

    widths
}

/// Fit `text` into exactly `width` characters.
///
/// Diacritics are stripped, overlong text is truncated, then the rest is
/// padded with spaces: before for right, split (floor left) for center,
/// after for left.
///
/// ## Example
///
/// ```
/// use recibo::layout::align_cell;
/// use recibo::protocol::text::Alignment;
///
/// assert_eq!(align_cell("42", 5, Alignment::Right), "   42");
/// assert_eq!(align_cell("ab", 5, Alignment::Center), " ab  ");
/// assert_eq!(align_cell("abcdefg", 3, Alignment::Left), "abc");
/// ```
pub fn align_cell(text: &str, width: usize, align: Alignment) -> String {
    let truncated: String = strip_diacritics(text).chars().take(width).collect();
    let padding = width - char_len(&truncated);

    match align {
        Alignment::Right => format!("{}{truncated}", pad(padding)),
        Alignment::Center => {
            let left = padding / 2;
            format!("{}{truncated}{}", pad(left), pad(padding - left))
        }
        Alignment::Left => format!("{truncated}{}", pad(padding)),
    }
}

/// Wrap one cell's text inside its column.
fn wrap_cell(text: &str, width: usize) -> Vec<String> {
    wrap(&strip_diacritics(text), width)
        .split('\n')
        .map(str::to_string)
        .collect()
}

/// Render a header, a dash separator and the wrapped rows.
///
/// Missing trailing cells render as empty. Each row takes as many lines
/// as its tallest wrapped cell. Lines are joined with `\n`, no trailing
/// newline.
pub fn render_table<R>(columns: &[TableColumn], rows: &[R], total_width: usize) -> String
where
    R: AsRef<[Cell]>,
{
    let widths = allocate_columns(columns, total_width);
    let mut lines = Vec::with_capacity(rows.len() + 2);

    let header: String = columns
        .iter()
        .zip(&widths)
        .map(|(col, &width)| align_cell(&col.title, width, col.align))
        .collect();
    let separator = "-".repeat(total_width.min(char_len(&header)));
    lines.push(header);
    lines.push(separator);

    for row in rows {
        let row = row.as_ref();
        let wrapped: Vec<Vec<String>> = widths
            .iter()
            .enumerate()
            .map(|(i, &width)| {
                let value = row.get(i).map(Cell::to_string).unwrap_or_default();
                wrap_cell(&value, width)
            })
            .collect();

        let max_lines = wrapped.iter().map(Vec::len).max().unwrap_or(0);
        for line_index in 0..max_lines {
            let line: String = columns
                .iter()
                .zip(&widths)
                .zip(&wrapped)
                .map(|((col, &width), cell)| {
                    let text = cell.get(line_index).map(String::as_str).unwrap_or("");
                    align_cell(text, width, col.align)
                })
                .collect();
            lines.push(line);
        }
    }

    lines.join("\n")
}

//! # Receipt Templates
//!
//! Pre-built receipts demonstrating the builder on any profile.
//!
//! The same template renders differently per printer: on the Elgin i9 the
//! bold markers vanish and line endings become CRLF, on a 58mm printer
//! everything wraps at 32 columns.

use crate::builder::{CutMode, ReceiptBuilder, RowItem, RuleStyle};
use crate::layout::{Cell, Price, TableColumn};
use crate::printer::CapabilityProfile;
use crate::protocol::text::Alignment;

// ============================================================================
// RECEIPT TEMPLATES
// ============================================================================

/// A point-of-sale receipt.
///
/// Features demonstrated:
/// - Header sizes and alignment
/// - Key/value rows
/// - Product lines with dot leaders
/// - Money rows
/// - Bold, underline and beep
pub fn demo_receipt(profile: CapabilityProfile) -> ReceiptBuilder {
    let mut r = ReceiptBuilder::new(profile);
    r.center()
        .h1("PADARIA")
        .br()
        .h3("São João")
        .br()
        .text("Av. Paulista, 1000 - São Paulo")
        .br()
        .left()
        .hr()
        .rows(&[
            RowItem::new("Pedido", "#1042"),
            RowItem::new("Data", "2026-01-20 12:00"),
        ])
        .hr()
        .product_line(2, "Pão francês", Some(Price::from(1.5)))
        .br()
        .product_line(1, "Café expresso duplo com leite vaporizado", Some(Price::from(8.9)))
        .br()
        .product_line(3, "Pão de queijo", Some(Price::from("12,00")))
        .br()
        .product_line(1, "Cortesia da casa", None)
        .rule(None, RuleStyle::Double)
        .bold_on()
        .money("Total", 23.9)
        .bold_off()
        .br()
        .money("Troco", 1.1)
        .br()
        .br()
        .center()
        .underline("Obrigado pela preferência!")
        .br()
        .beep()
        .cut(CutMode::Partial, None);
    r
}

/// A kitchen ticket laid out as a table.
pub fn kitchen_ticket(profile: CapabilityProfile) -> ReceiptBuilder {
    let columns = [
        TableColumn::new("Qtd").width(5),
        TableColumn::new("Item").flex(3.0),
        TableColumn::new("Obs").flex(2.0),
        TableColumn::new("Mesa").width(6).align(Alignment::Right),
    ];
    let rows: Vec<Vec<Cell>> = vec![
        vec![2.into(), "X-Burger".into(), "sem cebola".into(), 12.into()],
        vec![1.into(), "Porção de batata frita".into(), "bem passada".into(), 12.into()],
        vec![4.into(), "Refrigerante lata".into()],
    ];

    let mut r = ReceiptBuilder::new(profile);
    r.center()
        .h2("COZINHA")
        .br()
        .left()
        .hr()
        .table(&columns, &rows)
        .hr()
        .row("Garçom", "Ana")
        .br()
        .beep()
        .cut(CutMode::Full, None);
    r
}

/// Width calibration: rulers and a table at the profile's width.
pub fn calibration(profile: CapabilityProfile) -> ReceiptBuilder {
    let mut r = ReceiptBuilder::new(profile);
    let ruler: String = (0..r.width())
        .map(|i| char::from(b'0' + (i % 10) as u8))
        .collect();
    r.initialize()
        .text(&ruler)
        .rule(None, RuleStyle::Dashed)
        .rule(None, RuleStyle::Solid)
        .rule(None, RuleStyle::Double)
        .table(
            &[
                TableColumn::new("L"),
                TableColumn::new("C").align(Alignment::Center),
                TableColumn::new("R").align(Alignment::Right),
            ],
            &[vec![Cell::from("left"), Cell::from("mid"), Cell::from("right")]],
        )
        .br()
        .qr_code("calibration", 6)
        .cut(CutMode::Full, None);
    r
}

// ============================================================================
// LOOKUP FUNCTIONS
// ============================================================================

/// List available receipt templates
pub fn list_receipts() -> &'static [&'static str] {
    &["receipt", "kitchen", "calibration"]
}

/// Build a template by name for `profile`
pub fn by_name(name: &str, profile: CapabilityProfile) -> Option<ReceiptBuilder> {
    match name.to_lowercase().as_str() {
        "receipt" => Some(demo_receipt(profile)),
        "kitchen" => Some(kitchen_ticket(profile)),
        "calibration" => Some(calibration(profile)),
        _ => None,
    }
}

//! Receipt
//!
//! Terminal rendering for the cart: one row per entry with unit price,
//! quantity and line total, followed by a summary block with the derived
//! total. The receipt captures its rows when built, so it stays a plain
//! value that can be rendered repeatedly.

use std::io;

use rusty_money::{Money, iso::Currency};
use tabled::{
    builder::Builder,
    grid::config::HorizontalLine,
    settings::{
        Alignment, Color, Style, Theme,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{
    cart::Cart,
    pricing::{TotalPriceError, line_total},
};

/// Errors that can occur when building or writing a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// Error calculating a total from the cart entries.
    #[error(transparent)]
    TotalPrice(#[from] TotalPriceError),

    /// IO error
    #[error("IO error")]
    IO,
}

/// One rendered receipt row.
#[derive(Debug, Clone)]
struct ReceiptRow {
    name: String,
    unit_price: String,
    quantity: u32,
    line_total: String,
}

/// Printable snapshot of a cart.
#[derive(Debug, Clone)]
pub struct Receipt<'a> {
    rows: Vec<ReceiptRow>,
    total: Money<'a, Currency>,
    currency: &'static Currency,
}

impl<'a> Receipt<'a> {
    /// Build a receipt from the current cart state.
    ///
    /// # Errors
    ///
    /// Returns a [`ReceiptError`] if a line or cart total cannot be
    /// calculated.
    pub fn from_cart(cart: &Cart<'a>) -> Result<Self, ReceiptError> {
        let rows = cart
            .iter()
            .map(|entry| {
                let line = line_total(entry.product().price, entry.quantity())?;

                Ok(ReceiptRow {
                    name: entry.product().name.clone(),
                    unit_price: format!("{}", entry.product().price),
                    quantity: entry.quantity(),
                    line_total: format!("{line}"),
                })
            })
            .collect::<Result<Vec<_>, TotalPriceError>>()?;

        Ok(Receipt {
            rows,
            total: cart.total()?,
            currency: cart.currency(),
        })
    }

    /// The derived cart total captured when the receipt was built.
    #[must_use]
    pub fn total(&self) -> Money<'a, Currency> {
        self.total
    }

    /// Number of entry rows on the receipt.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the receipt has no entry rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Currency used for all monetary values.
    #[must_use]
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Writes the receipt table and summary.
    ///
    /// # Errors
    ///
    /// Returns a [`ReceiptError::IO`] if the receipt cannot be written.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReceiptError> {
        let mut builder = Builder::default();

        builder.push_record(["", "Item", "Unit Price", "Qty", "Line Total"]);

        for (idx, row) in self.rows.iter().enumerate() {
            builder.push_record([
                format!("#{:<3}", idx + 1),
                row.name.clone(),
                row.unit_price.clone(),
                row.quantity.to_string(),
                row.line_total.clone(),
            ]);
        }

        write_receipt_table(&mut out, builder)?;
        write_receipt_summary(&mut out, self)?;

        Ok(())
    }
}

fn write_receipt_table(out: &mut impl io::Write, builder: Builder) -> Result<(), ReceiptError> {
    let mut table = builder.build();
    let mut theme = Theme::from(Style::modern_rounded());
    let separator = HorizontalLine::new(Some('─'), Some('┼'), Some('├'), Some('┤'));

    theme.remove_horizontal_lines();
    theme.insert_horizontal_line(1, separator);

    table.with(theme);
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(2..5), Alignment::right());

    writeln!(out, "\n{table}").map_err(|_err| ReceiptError::IO)
}

fn write_receipt_summary(out: &mut impl io::Write, receipt: &Receipt<'_>) -> Result<(), ReceiptError> {
    let units: u32 = receipt.rows.iter().map(|row| row.quantity).sum();

    writeln!(out, " Items: {} ({units} units)", receipt.len()).map_err(|_err| ReceiptError::IO)?;
    writeln!(out, " \x1b[1mTotal:\x1b[0m {}\n", receipt.total()).map_err(|_err| ReceiptError::IO)
}

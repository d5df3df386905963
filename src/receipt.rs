//! Receipt
//!
//! Terminal table of the cart's lines with their totals.

use std::io;

use tabled::{
    builder::Builder,
    grid::config::HorizontalLine,
    settings::{Alignment, Style, Theme, object::Columns},
};
use thiserror::Error;

use crate::{
    cart::{Cart, CartLine},
    pricing::{TotalPriceError, format_amount, line_total},
};

/// Errors that can occur when rendering a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// Error calculating a line or cart total.
    #[error(transparent)]
    TotalPrice(#[from] TotalPriceError),

    /// IO error
    #[error("IO error")]
    IO,
}

/// Printable view over a cart.
#[derive(Debug, Clone, Copy)]
pub struct CartReceipt<'a> {
    cart: &'a Cart,
}

impl<'a> CartReceipt<'a> {
    /// Receipt for `cart`.
    pub fn new(cart: &'a Cart) -> Self {
        Self { cart }
    }

    /// Writes the cart table followed by the total.
    ///
    /// # Errors
    ///
    /// Returns an error if a total overflows or the output can't be written.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReceiptError> {
        if self.cart.is_empty() {
            return writeln!(out, "Seu carrinho está vazio").map_err(|_err| ReceiptError::IO);
        }

        let mut builder = Builder::default();

        builder.push_record(["", "Item", "Tamanho", "Qtd", "Preço", "Subtotal"]);

        for (idx, line) in self.cart.iter().enumerate() {
            builder.push_record(line_cells(idx + 1, line)?);
        }

        let mut table = builder.build();
        let mut theme = Theme::from(Style::modern_rounded());

        theme.remove_horizontal_lines();
        theme.insert_horizontal_line(
            1,
            HorizontalLine::new(Some('─'), Some('┼'), Some('├'), Some('┤')),
        );

        table.with(theme);
        table.modify(Columns::new(3..6), Alignment::right());

        let total = self.cart.total()?;

        writeln!(out, "{table}").map_err(|_err| ReceiptError::IO)?;
        writeln!(out, "Total: R$ {}", format_amount(&total)).map_err(|_err| ReceiptError::IO)
    }
}

fn line_cells(position: usize, line: &CartLine) -> Result<[String; 6], ReceiptError> {
    Ok([
        position.to_string(),
        line.name().to_string(),
        line.size().map_or_else(|| "-".to_string(), |size| size.label().to_string()),
        line.quantity().to_string(),
        format!("R$ {}", format_amount(line.unit_price())),
        format!("R$ {}", format_amount(&line_total(line)?)),
    ])
}

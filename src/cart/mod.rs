//! Cart
//!
//! The cart engine: selected lines plus the customer's checkout details. Lines are
//! kept in insertion order and identified by `(id, size)`.

use rusty_money::{Money, iso::Currency};
use tracing::debug;

use crate::pricing::{TotalPriceError, total_price};

pub mod customer;
pub mod half_and_half;
pub mod line;

pub use customer::{
    CustomerField, CustomerInfo, MissingFields, OrderType, PaymentMethod, ValidationError,
};
pub use half_and_half::HalfAndHalf;
pub use line::{CartLine, Category, LineCandidate, Size};

/// Cart
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
    customer: CustomerInfo,
}

impl Cart {
    /// Create an empty cart with blank customer details.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `candidate`.
    ///
    /// When a line with the same `(id, size)` exists its quantity is incremented and
    /// its name, category and unit price are kept: the first line added wins.
    pub fn add_item(&mut self, candidate: LineCandidate) {
        if let Some(existing) = self.line_mut(candidate.id(), candidate.size()) {
            existing.increment();

            debug!(
                id = existing.id(),
                size = ?existing.size(),
                quantity = existing.quantity(),
                "incremented cart line"
            );

            return;
        }

        debug!(id = candidate.id(), size = ?candidate.size(), "added cart line");

        self.lines.push(CartLine::with_quantity(candidate, 1));
    }

    /// Set the quantity of the line identified by `(id, size)`.
    ///
    /// A quantity of zero or less removes the line. There is no upper bound. Unknown
    /// lines are ignored.
    pub fn update_quantity(&mut self, id: &str, size: Option<Size>, quantity: i64) {
        let Ok(quantity) = u64::try_from(quantity) else {
            self.remove_item(id, size);
            return;
        };

        if quantity == 0 {
            self.remove_item(id, size);
            return;
        }

        for line in self.lines.iter_mut().filter(|line| line.matches(id, size)) {
            line.set_quantity(quantity);
        }

        debug!(id, ?size, quantity, "updated cart line quantity");
    }

    /// Remove the line(s) identified by `(id, size)`. Unknown lines are ignored.
    pub fn remove_item(&mut self, id: &str, size: Option<Size>) {
        let before = self.lines.len();

        self.lines.retain(|line| !line.matches(id, size));

        debug!(id, ?size, removed = before - self.lines.len(), "removed cart line");
    }

    /// Empty the cart and reset the customer details to their defaults.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.customer = CustomerInfo::default();

        debug!("cleared cart");
    }

    /// Total of `unit price × quantity` over all lines.
    ///
    /// # Errors
    ///
    /// Returns a [`TotalPriceError`] if the total overflows.
    pub fn total(&self) -> Result<Money<'static, Currency>, TotalPriceError> {
        total_price(&self.lines)
    }

    /// Look up the line identified by `(id, size)`.
    pub fn line(&self, id: &str, size: Option<Size>) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.matches(id, size))
    }

    fn line_mut(&mut self, id: &str, size: Option<Size>) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.matches(id, size))
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Iterate over the lines in the cart.
    pub fn iter(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.iter()
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of the quantities of every line.
    pub fn item_count(&self) -> u64 {
        self.lines
            .iter()
            .fold(0, |count, line| count.saturating_add(line.quantity()))
    }

    /// Customer details.
    pub fn customer(&self) -> &CustomerInfo {
        &self.customer
    }

    /// Customer details, mutably.
    pub fn customer_mut(&mut self) -> &mut CustomerInfo {
        &mut self.customer
    }

    /// Replace the customer details.
    pub fn set_customer(&mut self, customer: CustomerInfo) {
        self.customer = customer;
    }
}

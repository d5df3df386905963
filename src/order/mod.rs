//! Order
//!
//! Checkout: gate on opening hours and customer details, then hand the order
//! transcript to an [`OrderChannel`] as a deep link and clear the cart.

use jiff::{civil::DateTime, tz::TimeZone};
use thiserror::Error;
use tracing::{info, warn};

use crate::{
    availability::{NextOpening, Schedule, now_in},
    cart::{Cart, ValidationError},
    pricing::TotalPriceError,
    summary::build_order_summary,
};

pub mod channel;
pub mod link;

pub use channel::{OrderChannel, Outbox};
pub use link::{OrderLink, OrderLinkBuilder, encode_uri_component};

/// Why a checkout was blocked. The cart is left untouched in every case.
#[derive(Debug, Error, PartialEq)]
pub enum CheckoutError {
    /// The store isn't taking orders.
    #[error("Estamos fechados no momento.{}", describe_next_opening(.next_opening))]
    StoreClosed {
        /// When the store opens again
        next_opening: Option<NextOpening>,
    },

    /// There's nothing to order.
    #[error("Seu carrinho está vazio")]
    EmptyCart,

    /// Required customer details are missing.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The total couldn't be calculated.
    #[error(transparent)]
    TotalPrice(#[from] TotalPriceError),
}

#[expect(
    clippy::ref_option,
    reason = "receives a borrowed field from the error's format arguments"
)]
fn describe_next_opening(next_opening: &Option<NextOpening>) -> String {
    next_opening
        .map(|next| format!(" Abrimos {next}."))
        .unwrap_or_default()
}

/// Checkout flow for one store.
#[derive(Clone, Debug)]
pub struct Checkout {
    schedule: Schedule,
    links: OrderLinkBuilder,
}

impl Checkout {
    /// Create a checkout for `schedule`, sending orders through `links`.
    pub fn new(schedule: Schedule, links: OrderLinkBuilder) -> Self {
        Self { schedule, links }
    }

    /// Submit `cart` as of `at`.
    ///
    /// Checks, in order, that the store is open, the cart has lines and the customer
    /// details are complete for the cart's order type. On success the order link is
    /// opened on `channel`, the cart is cleared and the link returned.
    ///
    /// # Errors
    ///
    /// Returns a [`CheckoutError`] describing the first failed check; the cart is unchanged.
    pub fn submit(
        &self,
        cart: &mut Cart,
        at: DateTime,
        mut channel: impl OrderChannel,
    ) -> Result<OrderLink, CheckoutError> {
        if !self.schedule.is_open(at) {
            let next_opening = self.schedule.next_opening(at);

            warn!(%at, ?next_opening, "checkout blocked: store closed");

            return Err(CheckoutError::StoreClosed { next_opening });
        }

        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let order_type = cart.customer().order_type;

        if let Err(err) = cart.customer().validate(order_type) {
            warn!(%err, "checkout blocked: missing customer details");

            return Err(err.into());
        }

        let summary = build_order_summary(cart, order_type)?;
        let link = self.links.link(&summary);

        channel.open(&link);

        info!(
            lines = cart.len(),
            items = cart.item_count(),
            order_type = order_type.label(),
            "order sent"
        );

        cart.clear();

        Ok(link)
    }

    /// Submit `cart`, reading the current time in `tz`.
    ///
    /// # Errors
    ///
    /// See [`Checkout::submit`].
    pub fn submit_now(
        &self,
        cart: &mut Cart,
        tz: &TimeZone,
        channel: impl OrderChannel,
    ) -> Result<OrderLink, CheckoutError> {
        self.submit(cart, now_in(tz), channel)
    }
}

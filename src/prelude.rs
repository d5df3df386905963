//! Pizzeria prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    availability::{Availability, NextOpening, Schedule, ScheduleRow},
    cart::{
        Cart, CartLine, Category, CustomerField, CustomerInfo, HalfAndHalf, LineCandidate,
        OrderType, PaymentMethod, Size, ValidationError,
    },
    catalog::{Catalog, CatalogError, MenuItem, Prices, Promotion},
    order::{Checkout, CheckoutError, OrderChannel, OrderLink, OrderLinkBuilder, Outbox},
    preferences::{
        FilePreferences, FloatingButtonPosition, MemoryPreferences, PreferenceError,
        PreferenceStore,
    },
    pricing::{TotalPriceError, format_amount, parse_price},
    receipt::{CartReceipt, ReceiptError},
    summary::build_order_summary,
};

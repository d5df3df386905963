//! Pizzeria
//!
//! Storefront engine for a pizzeria: menu catalog, shopping cart, opening-hours policy
//! and order hand-off to a messaging deep link.

pub mod availability;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod order;
pub mod preferences;
pub mod prelude;
pub mod pricing;
pub mod receipt;
pub mod summary;

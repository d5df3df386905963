//! Promotions

use rusty_money::{Money, iso::Currency};
use smallvec::SmallVec;

use crate::cart::{Category, LineCandidate};

/// A fixed, pre-priced bundle. Added to a cart as one opaque line.
#[derive(Clone, Debug, PartialEq)]
pub struct Promotion {
    id: String,
    name: String,
    description: String,
    price: Money<'static, Currency>,
    items: SmallVec<[String; 8]>,
}

impl Promotion {
    /// Create a new promotion.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Money<'static, Currency>,
        items: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            price,
            items: items.into_iter().collect(),
        }
    }

    /// Catalog id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Bundle price
    pub fn price(&self) -> &Money<'static, Currency> {
        &self.price
    }

    /// Labels of the included items
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Cart candidate for the whole bundle. Bundles are mostly esfihas, so they're
    /// filed under savoury esfihas.
    pub fn candidate(&self) -> LineCandidate {
        LineCandidate::new(
            self.id.clone(),
            Category::EsfihaSalgada,
            self.name.clone(),
            self.price,
            None,
        )
    }
}

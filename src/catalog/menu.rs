//! Menu Items

use rusty_money::{Money, iso::Currency};

use crate::{
    cart::{Category, LineCandidate, Size},
    catalog::CatalogError,
};

/// Prices by variant. A missing variant isn't sold.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Prices {
    /// Small pizza price
    pub broto: Option<Money<'static, Currency>>,

    /// Large pizza price
    pub grande: Option<Money<'static, Currency>>,

    /// Price for items sold by unit
    pub unit: Option<Money<'static, Currency>>,
}

impl Prices {
    /// Price for `size`; `None` asks for the unit price.
    pub fn get(&self, size: Option<Size>) -> Option<&Money<'static, Currency>> {
        match size {
            Some(Size::Broto) => self.broto.as_ref(),
            Some(Size::Grande) => self.grande.as_ref(),
            None => self.unit.as_ref(),
        }
    }
}

/// Menu Item
#[derive(Clone, Debug, PartialEq)]
pub struct MenuItem {
    id: String,
    name: String,
    description: Option<String>,
    prices: Prices,
}

impl MenuItem {
    /// Create a new menu item.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: Option<String>,
        prices: Prices,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description,
            prices,
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

    /// Ingredients or other description
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Prices by variant
    pub fn prices(&self) -> &Prices {
        &self.prices
    }

    /// Price for `size`, or the unit price when `size` is `None`.
    pub fn price(&self, size: Option<Size>) -> Option<&Money<'static, Currency>> {
        self.prices.get(size)
    }

    /// Build a cart candidate for this item at `size`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::SizeNotSold`] if the item has no price for `size`.
    pub fn candidate(
        &self,
        category: Category,
        size: Option<Size>,
    ) -> Result<LineCandidate, CatalogError> {
        let price = self
            .price(size)
            .copied()
            .ok_or_else(|| CatalogError::SizeNotSold {
                id: self.id.clone(),
                size,
            })?;

        Ok(LineCandidate::new(
            self.id.clone(),
            category,
            self.name.clone(),
            price,
            size,
        ))
    }
}

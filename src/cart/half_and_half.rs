//! Half-and-half pizzas

use rusty_money::{Money, iso::Currency};

use crate::{
    cart::{Category, LineCandidate, Size},
    catalog::{CatalogError, MenuItem},
};

/// A pizza with two flavours, priced at the dearer of the two halves.
#[derive(Clone, Copy, Debug)]
pub struct HalfAndHalf<'a> {
    first: &'a MenuItem,
    second: &'a MenuItem,
    size: Size,
}

impl<'a> HalfAndHalf<'a> {
    /// Combine two flavours at one size.
    pub fn new(first: &'a MenuItem, second: &'a MenuItem, size: Size) -> Self {
        Self {
            first,
            second,
            size,
        }
    }

    /// Composite id shared by every identical combination, so repeats merge.
    pub fn id(&self) -> String {
        format!("mm-{}-{}", self.first.id(), self.second.id())
    }

    /// Display name, e.g. `MEIO A MEIO (GRANDE): CALABRESA + BACON`.
    pub fn name(&self) -> String {
        format!(
            "MEIO A MEIO ({}): {} + {}",
            self.size.label(),
            self.first.name(),
            self.second.name()
        )
    }

    /// Build the cart line for this combination.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::SizeNotSold`] if either flavour isn't sold at the chosen size.
    pub fn candidate(&self, category: Category) -> Result<LineCandidate, CatalogError> {
        let first = self.half_price(self.first)?;
        let second = self.half_price(self.second)?;

        let price = if first.to_minor_units() >= second.to_minor_units() {
            first
        } else {
            second
        };

        Ok(LineCandidate::new(
            self.id(),
            category,
            self.name(),
            price,
            Some(self.size),
        ))
    }

    fn half_price(&self, item: &MenuItem) -> Result<Money<'static, Currency>, CatalogError> {
        item.price(Some(self.size))
            .copied()
            .ok_or_else(|| CatalogError::SizeNotSold {
                id: item.id().to_string(),
                size: Some(self.size),
            })
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::{Money, iso::BRL};
    use testresult::TestResult;

    use crate::catalog::Prices;

    use super::*;

    fn pizza(id: &str, broto: i64, grande: i64) -> MenuItem {
        MenuItem::new(
            id,
            id.to_uppercase(),
            None,
            Prices {
                broto: Some(Money::from_minor(broto, BRL)),
                grande: Some(Money::from_minor(grande, BRL)),
                unit: None,
            },
        )
    }

    #[test]
    fn priced_at_dearer_half() -> TestResult {
        let calabresa = pizza("calabresa", 3499, 4499);
        let camarao = pizza("camarao", 5999, 6999);

        let candidate =
            HalfAndHalf::new(&calabresa, &camarao, Size::Grande).candidate(Category::PizzaSalgada)?;

        assert_eq!(candidate.unit_price(), &Money::from_minor(6999, BRL));
        assert_eq!(candidate.id(), "mm-calabresa-camarao");
        assert_eq!(candidate.name(), "MEIO A MEIO (GRANDE): CALABRESA + CAMARAO");
        assert_eq!(candidate.size(), Some(Size::Grande));

        Ok(())
    }

    #[test]
    fn unsold_size_is_rejected() {
        let calabresa = pizza("calabresa", 3499, 4499);
        let coca = MenuItem::new(
            "coca",
            "COCA-COLA",
            None,
            Prices {
                unit: Some(Money::from_minor(800, BRL)),
                ..Prices::default()
            },
        );

        let result = HalfAndHalf::new(&calabresa, &coca, Size::Broto).candidate(Category::PizzaSalgada);

        assert!(matches!(
            result,
            Err(CatalogError::SizeNotSold { id, size: Some(Size::Broto) }) if id == "coca"
        ));
    }
}

//! Catalog YAML schema

use rusty_money::{Money, iso::Currency};
use serde::Deserialize;

use crate::{
    cart::Category,
    catalog::{CatalogError, MenuItem, Prices, Promotion},
    pricing::parse_price,
};

/// Menu item as written in a catalog file.
#[derive(Debug, Deserialize)]
pub struct MenuItemFixture {
    /// Unique id
    pub id: String,

    /// Display name
    pub name: String,

    /// Optional description
    #[serde(default)]
    pub description: Option<String>,

    /// Decimal prices by variant, e.g. `{ broto: "34.99", grande: "44.99" }`
    pub prices: PricesFixture,
}

/// Decimal prices by variant.
#[derive(Debug, Default, Deserialize)]
pub struct PricesFixture {
    /// Small pizza price
    #[serde(default)]
    pub broto: Option<String>,

    /// Large pizza price
    #[serde(default)]
    pub grande: Option<String>,

    /// Unit price
    #[serde(default)]
    pub unit: Option<String>,
}

/// Promotion as written in a catalog file.
#[derive(Debug, Deserialize)]
pub struct PromotionFixture {
    /// Unique id
    pub id: String,

    /// Display name
    pub name: String,

    /// Description
    #[serde(default)]
    pub description: String,

    /// Decimal bundle price
    pub price: String,

    /// Labels of the included items
    #[serde(default)]
    pub items: Vec<String>,
}

/// A whole catalog file: one list per menu section plus promotions.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct CatalogFixture {
    /// Savoury pizzas
    #[serde(default)]
    pub pizza_salgada: Vec<MenuItemFixture>,

    /// Sweet pizzas
    #[serde(default)]
    pub pizza_doce: Vec<MenuItemFixture>,

    /// Savoury esfihas
    #[serde(default)]
    pub esfiha_salgada: Vec<MenuItemFixture>,

    /// Sweet esfihas
    #[serde(default)]
    pub esfiha_doce: Vec<MenuItemFixture>,

    /// Drinks
    #[serde(default)]
    pub bebida: Vec<MenuItemFixture>,

    /// Bundles
    #[serde(default)]
    pub promotions: Vec<PromotionFixture>,
}

impl CatalogFixture {
    /// Split into menu sections, in menu order, and promotions.
    pub fn into_sections(self) -> ([(Category, Vec<MenuItemFixture>); 5], Vec<PromotionFixture>) {
        (
            [
                (Category::PizzaSalgada, self.pizza_salgada),
                (Category::PizzaDoce, self.pizza_doce),
                (Category::EsfihaSalgada, self.esfiha_salgada),
                (Category::EsfihaDoce, self.esfiha_doce),
                (Category::Bebida, self.bebida),
            ],
            self.promotions,
        )
    }
}

fn parse_field(id: &str, value: &str) -> Result<Money<'static, Currency>, CatalogError> {
    parse_price(value).map_err(|source| CatalogError::InvalidPrice {
        id: id.to_string(),
        source,
    })
}

fn optional_field(
    id: &str,
    value: Option<&str>,
) -> Result<Option<Money<'static, Currency>>, CatalogError> {
    value.map(|value| parse_field(id, value)).transpose()
}

impl TryFrom<MenuItemFixture> for MenuItem {
    type Error = CatalogError;

    fn try_from(fixture: MenuItemFixture) -> Result<Self, Self::Error> {
        let prices = Prices {
            broto: optional_field(&fixture.id, fixture.prices.broto.as_deref())?,
            grande: optional_field(&fixture.id, fixture.prices.grande.as_deref())?,
            unit: optional_field(&fixture.id, fixture.prices.unit.as_deref())?,
        };

        Ok(MenuItem::new(
            fixture.id,
            fixture.name,
            fixture.description,
            prices,
        ))
    }
}

impl TryFrom<PromotionFixture> for Promotion {
    type Error = CatalogError;

    fn try_from(fixture: PromotionFixture) -> Result<Self, Self::Error> {
        let price = parse_field(&fixture.id, &fixture.price)?;

        Ok(Promotion::new(
            fixture.id,
            fixture.name,
            fixture.description,
            price,
            fixture.items,
        ))
    }
}

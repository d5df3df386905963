//! Cart Lines

use std::fmt;

use rusty_money::{Money, iso::Currency};
use serde::{Deserialize, Serialize};

/// Pizza size variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    /// Small pizza.
    Broto,

    /// Large pizza.
    Grande,
}

impl Size {
    /// Lower-case identifier, as used in catalogs and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Size::Broto => "broto",
            Size::Grande => "grande",
        }
    }

    /// Upper-case label used in order transcripts.
    pub fn label(self) -> &'static str {
        match self {
            Size::Broto => "BROTO",
            Size::Grande => "GRANDE",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Menu section a line was picked from. Has no effect on pricing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Savoury pizzas
    PizzaSalgada,

    /// Sweet pizzas
    PizzaDoce,

    /// Savoury esfihas
    EsfihaSalgada,

    /// Sweet esfihas
    EsfihaDoce,

    /// Drinks
    Bebida,
}

impl Category {
    /// All categories, in menu order.
    pub const ALL: [Category; 5] = [
        Category::PizzaSalgada,
        Category::PizzaDoce,
        Category::EsfihaSalgada,
        Category::EsfihaDoce,
        Category::Bebida,
    ];

    /// Section title shown on the menu.
    pub fn title(self) -> &'static str {
        match self {
            Category::PizzaSalgada => "Pizzas Salgadas",
            Category::PizzaDoce => "Pizzas Doces",
            Category::EsfihaSalgada => "Esfihas Salgadas",
            Category::EsfihaDoce => "Esfihas Doces",
            Category::Bebida => "Bebidas",
        }
    }
}

/// A purchasable configuration waiting to be added to a cart.
#[derive(Clone, Debug, PartialEq)]
pub struct LineCandidate {
    id: String,
    category: Category,
    name: String,
    unit_price: Money<'static, Currency>,
    size: Option<Size>,
}

impl LineCandidate {
    /// Create a new candidate line.
    pub fn new(
        id: impl Into<String>,
        category: Category,
        name: impl Into<String>,
        unit_price: Money<'static, Currency>,
        size: Option<Size>,
    ) -> Self {
        Self {
            id: id.into(),
            category,
            name: name.into(),
            unit_price,
            size,
        }
    }

    /// Catalog or composite id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price.
    pub fn unit_price(&self) -> &Money<'static, Currency> {
        &self.unit_price
    }

    /// Size, if the item is sold by size.
    pub fn size(&self) -> Option<Size> {
        self.size
    }
}

/// One distinct purchasable configuration in a cart.
///
/// Two lines are the same line when their `id` and `size` are equal; category and
/// name take no part in identity.
#[derive(Clone, Debug, PartialEq)]
pub struct CartLine {
    id: String,
    category: Category,
    name: String,
    unit_price: Money<'static, Currency>,
    size: Option<Size>,
    quantity: u64,
}

impl CartLine {
    pub(crate) fn with_quantity(candidate: LineCandidate, quantity: u64) -> Self {
        let LineCandidate {
            id,
            category,
            name,
            unit_price,
            size,
        } = candidate;

        Self {
            id,
            category,
            name,
            unit_price,
            size,
            quantity,
        }
    }

    /// Whether this line is identified by `(id, size)`.
    pub fn matches(&self, id: &str, size: Option<Size>) -> bool {
        self.id == id && self.size == size
    }

    /// Catalog or composite id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Menu section.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price, fixed when the line was created.
    pub fn unit_price(&self) -> &Money<'static, Currency> {
        &self.unit_price
    }

    /// Size, absent for items sold by unit.
    pub fn size(&self) -> Option<Size> {
        self.size
    }

    /// Quantity, always positive.
    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    pub(crate) fn increment(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    pub(crate) fn set_quantity(&mut self, quantity: u64) {
        self.quantity = quantity;
    }
}

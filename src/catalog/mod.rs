//! Catalog
//!
//! Read-only menu and promotion data, loaded once from a YAML file.

use std::{fs, path::Path};

use rustc_hash::FxHashMap;
use slotmap::{SlotMap, new_key_type};
use thiserror::Error;

use crate::{
    cart::{Category, Size},
    catalog::fixture::CatalogFixture,
    pricing::PriceParseError,
};

pub mod fixture;
pub mod menu;
pub mod promotions;

pub use menu::{MenuItem, Prices};
pub use promotions::Promotion;

new_key_type! {
    /// Menu Item Key
    pub struct MenuItemKey;

    /// Promotion Key
    pub struct PromotionKey;
}

/// Catalog loading and lookup errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// IO error reading the catalog file
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// A price couldn't be parsed
    #[error("Invalid price for {id}: {source}")]
    InvalidPrice {
        /// Item or promotion id
        id: String,

        /// Parse failure
        source: PriceParseError,
    },

    /// An id appears more than once
    #[error("Duplicate catalog id: {0}")]
    DuplicateId(String),

    /// Menu item not found
    #[error("Menu item not found: {0}")]
    ItemNotFound(String),

    /// Promotion not found
    #[error("Promotion not found: {0}")]
    PromotionNotFound(String),

    /// The item has no price for the requested variant
    #[error("{id} is not sold {}", describe_size(.size))]
    SizeNotSold {
        /// Menu item id
        id: String,

        /// Requested size; `None` is the unit variant
        size: Option<Size>,
    },
}

#[expect(
    clippy::ref_option,
    reason = "receives a borrowed field from the error's format arguments"
)]
fn describe_size(size: &Option<Size>) -> String {
    match size {
        Some(size) => format!("in size {size}"),
        None => "by unit".to_string(),
    }
}

/// Catalog
#[derive(Debug, Default)]
pub struct Catalog {
    items: SlotMap<MenuItemKey, (Category, MenuItem)>,
    promotions: SlotMap<PromotionKey, Promotion>,

    /// Catalog id -> key lookups
    item_keys: FxHashMap<String, MenuItemKey>,
    promotion_keys: FxHashMap<String, PromotionKey>,

    /// Keys per section, in catalog order
    sections: FxHashMap<Category, Vec<MenuItemKey>>,
    promotion_order: Vec<PromotionKey>,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a catalog from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, a price is invalid, or an id
    /// is duplicated.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path)?;

        Self::from_yaml_str(&contents)
    }

    /// Parse a catalog from a YAML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be parsed, a price is invalid, or an id is
    /// duplicated.
    pub fn from_yaml_str(contents: &str) -> Result<Self, CatalogError> {
        let fixture: CatalogFixture = serde_norway::from_str(contents)?;
        let (sections, promotions) = fixture.into_sections();

        let mut catalog = Self::new();

        for (category, items) in sections {
            for item in items {
                catalog.insert_item(category, item.try_into()?)?;
            }
        }

        for promotion in promotions {
            catalog.insert_promotion(promotion.try_into()?)?;
        }

        Ok(catalog)
    }

    /// Add a menu item to `category`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] if the id is already taken.
    pub fn insert_item(
        &mut self,
        category: Category,
        item: MenuItem,
    ) -> Result<MenuItemKey, CatalogError> {
        self.ensure_unique(item.id())?;

        let id = item.id().to_string();
        let key = self.items.insert((category, item));

        self.item_keys.insert(id, key);
        self.sections.entry(category).or_default().push(key);

        Ok(key)
    }

    /// Add a promotion.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] if the id is already taken.
    pub fn insert_promotion(&mut self, promotion: Promotion) -> Result<PromotionKey, CatalogError> {
        self.ensure_unique(promotion.id())?;

        let id = promotion.id().to_string();
        let key = self.promotions.insert(promotion);

        self.promotion_keys.insert(id, key);
        self.promotion_order.push(key);

        Ok(key)
    }

    fn ensure_unique(&self, id: &str) -> Result<(), CatalogError> {
        if self.item_keys.contains_key(id) || self.promotion_keys.contains_key(id) {
            return Err(CatalogError::DuplicateId(id.to_string()));
        }

        Ok(())
    }

    /// Get a menu item and its section by id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::ItemNotFound`] if there is no such item.
    pub fn item(&self, id: &str) -> Result<(Category, &MenuItem), CatalogError> {
        self.item_keys
            .get(id)
            .and_then(|key| self.items.get(*key))
            .map(|(category, item)| (*category, item))
            .ok_or_else(|| CatalogError::ItemNotFound(id.to_string()))
    }

    /// Get a promotion by id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::PromotionNotFound`] if there is no such promotion.
    pub fn promotion(&self, id: &str) -> Result<&Promotion, CatalogError> {
        self.promotion_keys
            .get(id)
            .and_then(|key| self.promotions.get(*key))
            .ok_or_else(|| CatalogError::PromotionNotFound(id.to_string()))
    }

    /// Items in `category`, in catalog order.
    pub fn items(&self, category: Category) -> impl Iterator<Item = &MenuItem> {
        self.sections
            .get(&category)
            .into_iter()
            .flatten()
            .filter_map(|key| self.items.get(*key))
            .map(|(_, item)| item)
    }

    /// Promotions, in catalog order.
    pub fn promotions(&self) -> impl Iterator<Item = &Promotion> {
        self.promotion_order
            .iter()
            .filter_map(|key| self.promotions.get(*key))
    }

    /// Items whose name contains `term`, ignoring case, in menu order.
    ///
    /// An empty term matches every item.
    pub fn search(&self, term: &str) -> Vec<(Category, &MenuItem)> {
        let needle = term.to_lowercase();

        Category::ALL
            .into_iter()
            .flat_map(|category| self.items(category).map(move |item| (category, item)))
            .filter(|(_, item)| item.name().to_lowercase().contains(&needle))
            .collect()
    }

    /// Number of menu items, excluding promotions.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the catalog has no menu items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

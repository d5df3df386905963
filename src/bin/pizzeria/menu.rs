//! `menu` command

use std::io;

use clap::Args;
use pizzeria::{
    cart::Category,
    catalog::{Catalog, MenuItem, Prices},
    config::StoreConfig,
    preferences::{FilePreferences, has_seen_intro, mark_intro_seen},
    pricing::format_amount,
};
use rusty_money::{Money, iso::Currency};
use tabled::{builder::Builder, settings::Style};

const DELIVERY_NOTICE: &str =
    "Aviso: o tempo médio de entrega é de 50 a 60 minutos. Agradecemos a compreensão!";

#[derive(Debug, Args)]
pub(crate) struct MenuArgs {
    /// Only show items whose name contains this text
    #[arg(long)]
    search: Option<String>,
}

pub(crate) fn run(
    store: &StoreConfig,
    args: &MenuArgs,
    mut out: impl io::Write,
) -> anyhow::Result<()> {
    let mut preferences = FilePreferences::open(&store.preferences)?;

    if !has_seen_intro(&preferences) {
        writeln!(out, "{DELIVERY_NOTICE}\n")?;
        mark_intro_seen(&mut preferences)?;
    }

    let catalog = Catalog::load(&store.catalog)?;

    if let Some(term) = &args.search {
        let matches = catalog.search(term);

        if matches.is_empty() {
            writeln!(out, "Nenhum item encontrado para \"{term}\"")?;
        } else {
            let mut builder = price_table_header();

            for (category, item) in matches {
                builder.push_record(item_record(item, Some(category)));
            }

            writeln!(out, "{}", builder.build().with(Style::rounded()))?;
        }

        return Ok(());
    }

    for category in Category::ALL {
        let mut builder = price_table_header();
        let mut empty = true;

        for item in catalog.items(category) {
            builder.push_record(item_record(item, None));
            empty = false;
        }

        if !empty {
            writeln!(out, "{}", category.title())?;
            writeln!(out, "{}\n", builder.build().with(Style::rounded()))?;
        }
    }

    let mut promotions = Builder::default();

    promotions.push_record(["Id", "Promoção", "Preço", "Itens"]);

    for promotion in catalog.promotions() {
        promotions.push_record([
            promotion.id().to_string(),
            promotion.name().to_string(),
            price_cell(Some(promotion.price())),
            promotion.items().join(", "),
        ]);
    }

    writeln!(out, "Promoções")?;
    writeln!(out, "{}", promotions.build().with(Style::rounded()))?;

    Ok(())
}

fn price_table_header() -> Builder {
    let mut builder = Builder::default();

    builder.push_record(["Id", "Item", "Descrição", "Broto", "Grande", "Unidade"]);

    builder
}

fn item_record(item: &MenuItem, category: Option<Category>) -> [String; 6] {
    let Prices {
        broto,
        grande,
        unit,
    } = item.prices();

    let name = match category {
        Some(category) => format!("{} ({})", item.name(), category.title()),
        None => item.name().to_string(),
    };

    [
        item.id().to_string(),
        name,
        item.description().unwrap_or_default().to_string(),
        price_cell(broto.as_ref()),
        price_cell(grande.as_ref()),
        price_cell(unit.as_ref()),
    ]
}

fn price_cell(price: Option<&Money<'static, Currency>>) -> String {
    price.map_or_else(String::new, |price| format!("R$ {}", format_amount(price)))
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::BRL;

    use super::*;

    fn item(description: Option<&str>) -> MenuItem {
        MenuItem::new(
            "calabresa",
            "CALABRESA",
            description.map(str::to_string),
            Prices {
                broto: Some(Money::from_minor(3499, BRL)),
                grande: Some(Money::from_minor(4499, BRL)),
                unit: None,
            },
        )
    }

    #[test]
    fn record_shows_description_and_prices() {
        assert_eq!(
            item_record(&item(Some("Calabresa e cebola")), None),
            [
                "calabresa".to_string(),
                "CALABRESA".to_string(),
                "Calabresa e cebola".to_string(),
                "R$ 34.99".to_string(),
                "R$ 44.99".to_string(),
                String::new(),
            ]
        );
    }

    #[test]
    fn search_record_names_category_and_leaves_missing_description_blank() {
        let [_, name, description, ..] = item_record(&item(None), Some(Category::PizzaSalgada));

        assert_eq!(name, format!("CALABRESA ({})", Category::PizzaSalgada.title()));
        assert!(description.is_empty());
    }
}

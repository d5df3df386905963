//! `order` command

use std::io;

use anyhow::{Context, bail};
use clap::{Args, ValueEnum};
use jiff::civil::DateTime;
use pizzeria::{
    cart::{Cart, CustomerInfo, HalfAndHalf, OrderType, PaymentMethod, Size},
    catalog::Catalog,
    config::StoreConfig,
    order::{OrderChannel, OrderLink},
    receipt::CartReceipt,
};
use tracing::{debug, info};

/// Stands in for the browser: logs the link it would open.
#[derive(Debug)]
struct LogChannel;

impl OrderChannel for LogChannel {
    fn open(&mut self, link: &OrderLink) {
        info!(%link, "opening order link");
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Payment {
    Dinheiro,
    Debito,
    Credito,
    Pix,
}

impl From<Payment> for PaymentMethod {
    fn from(payment: Payment) -> Self {
        match payment {
            Payment::Dinheiro => PaymentMethod::Dinheiro,
            Payment::Debito => PaymentMethod::Debito,
            Payment::Credito => PaymentMethod::Credito,
            Payment::Pix => PaymentMethod::Pix,
        }
    }
}

#[derive(Debug, Args)]
pub(crate) struct OrderArgs {
    /// Menu item to add, as ID or ID:SIZE (broto, grande); repeat to add more
    #[arg(long = "item", value_name = "ID[:SIZE]")]
    items: Vec<String>,

    /// Promotion to add; repeat to add more
    #[arg(long = "promo", value_name = "ID")]
    promos: Vec<String>,

    /// Half-and-half pizza, as FIRST+SECOND:SIZE
    #[arg(long = "half", value_name = "FIRST+SECOND:SIZE")]
    halves: Vec<String>,

    /// Customer name
    #[arg(long, default_value = "")]
    name: String,

    /// Contact phone
    #[arg(long, default_value = "")]
    phone: String,

    /// Deliver instead of picking up
    #[arg(long)]
    delivery: bool,

    /// Street address (delivery)
    #[arg(long, default_value = "")]
    address: String,

    /// Street number (delivery)
    #[arg(long, default_value = "")]
    number: String,

    /// Neighbourhood (delivery)
    #[arg(long, default_value = "")]
    neighborhood: String,

    /// Payment method
    #[arg(long, value_enum, default_value_t = Payment::Dinheiro)]
    payment: Payment,

    /// Notes for the kitchen or courier
    #[arg(long)]
    observations: Option<String>,

    /// Wall-clock time to submit at instead of now, e.g. 2025-10-17T23:30
    #[arg(long)]
    at: Option<DateTime>,
}

pub(crate) fn run(
    store: &StoreConfig,
    args: OrderArgs,
    mut out: impl io::Write,
) -> anyhow::Result<()> {
    let catalog = Catalog::load(&store.catalog)
        .with_context(|| format!("loading catalog {}", store.catalog.display()))?;

    let mut cart = Cart::new();

    fill_cart(&mut cart, &catalog, &args)?;

    cart.set_customer(CustomerInfo {
        name: args.name,
        phone: args.phone,
        address: args.address,
        neighborhood: args.neighborhood,
        number: args.number,
        observations: args.observations,
        payment_method: args.payment.into(),
        order_type: if args.delivery {
            OrderType::Entrega
        } else {
            OrderType::Retirada
        },
    });

    CartReceipt::new(&cart).write_to(&mut out)?;

    let checkout = store.checkout();

    let link = match args.at {
        Some(at) => checkout.submit(&mut cart, at, LogChannel)?,
        None => checkout.submit_now(&mut cart, &store.time_zone()?, LogChannel)?,
    };

    writeln!(out, "\nPedido pronto! Envie pelo link:\n{link}")?;

    Ok(())
}

fn fill_cart(cart: &mut Cart, catalog: &Catalog, args: &OrderArgs) -> anyhow::Result<()> {
    for entry in &args.items {
        let (id, size) = match entry.split_once(':') {
            Some((id, size)) => (id, Some(parse_size(size)?)),
            None => (entry.as_str(), None),
        };

        let (category, item) = catalog.item(id)?;

        cart.add_item(item.candidate(category, size)?);
    }

    for id in &args.promos {
        cart.add_item(catalog.promotion(id)?.candidate());
    }

    for entry in &args.halves {
        let Some((flavours, size)) = entry.split_once(':') else {
            bail!("half-and-half needs a size: {entry}");
        };

        let Some((first, second)) = flavours.split_once('+') else {
            bail!("half-and-half needs two flavours: {entry}");
        };

        let (category, first) = catalog.item(first)?;
        let (_, second) = catalog.item(second)?;

        cart.add_item(HalfAndHalf::new(first, second, parse_size(size)?).candidate(category)?);
    }

    debug!(lines = cart.len(), items = cart.item_count(), "cart built");

    Ok(())
}

fn parse_size(size: &str) -> anyhow::Result<Size> {
    match size.to_lowercase().as_str() {
        "broto" => Ok(Size::Broto),
        "grande" => Ok(Size::Grande),
        _ => bail!("unknown size {size}, expected broto or grande"),
    }
}

//! Order Summary
//!
//! The plain-text transcript sent to the store. A person reads it on the other end, so
//! the layout is stable but not a parsed format.

use std::fmt::Write;

use crate::{
    cart::{Cart, OrderType},
    pricing::{TotalPriceError, format_amount, line_total},
};

/// Placeholder written when there are no observations.
pub const NO_OBSERVATIONS: &str = "Nenhuma";

/// Build the order transcript for `cart` as an `order_type` order.
///
/// The address block is only written for deliveries.
///
/// # Errors
///
/// Returns a [`TotalPriceError`] if a line total or the cart total overflows.
pub fn build_order_summary(cart: &Cart, order_type: OrderType) -> Result<String, TotalPriceError> {
    let mut out = String::from("Pedido:\n");

    for line in cart.iter() {
        let price = line_total(line)?;

        // Writing to a String can't fail.
        _ = write!(out, "{}x {}", line.quantity(), line.name());

        if let Some(size) = line.size() {
            _ = write!(out, " ({})", size.label());
        }

        _ = writeln!(out, " - R$ {}", format_amount(&price));
    }

    let customer = cart.customer();

    _ = writeln!(out, "\nTotal: R$ {}\n", format_amount(&cart.total()?));
    _ = writeln!(out, "Tipo de pedido: {}", order_type.label());
    _ = writeln!(out, "Cliente: {}", customer.name);
    _ = writeln!(out, "Telefone: {}", customer.phone);

    if order_type.requires_address() {
        _ = writeln!(
            out,
            "Endereço: {}, {} - {}",
            customer.address, customer.number, customer.neighborhood
        );
    }

    _ = writeln!(
        out,
        "Observações: {}",
        customer.observations().unwrap_or(NO_OBSERVATIONS)
    );
    _ = write!(
        out,
        "Forma de pagamento: {}",
        customer.payment_method.label()
    );

    Ok(out)
}

#[cfg(test)]
mod tests {
    use rusty_money::{Money, iso::BRL};
    use testresult::TestResult;

    use crate::cart::{Category, CustomerInfo, LineCandidate, PaymentMethod, Size};

    use super::*;

    fn cart() -> Cart {
        let mut cart = Cart::new();

        cart.add_item(LineCandidate::new(
            "calabresa",
            Category::PizzaSalgada,
            "CALABRESA",
            Money::from_minor(4499, BRL),
            Some(Size::Grande),
        ));
        cart.add_item(LineCandidate::new(
            "coca",
            Category::Bebida,
            "COCA-COLA",
            Money::from_minor(800, BRL),
            None,
        ));

        cart.set_customer(CustomerInfo {
            name: "Ana".to_string(),
            phone: "11999999999".to_string(),
            address: "Estrada dos Fidelis".to_string(),
            neighborhood: "Jd Iguatemi".to_string(),
            number: "85".to_string(),
            observations: Some("sem cebola".to_string()),
            payment_method: PaymentMethod::Pix,
            order_type: OrderType::Entrega,
        });

        cart
    }

    #[test]
    fn delivery_summary_layout() -> TestResult {
        let summary = build_order_summary(&cart(), OrderType::Entrega)?;

        assert_eq!(
            summary,
            "Pedido:\n\
             1x CALABRESA (GRANDE) - R$ 44.99\n\
             1x COCA-COLA - R$ 8.00\n\
             \n\
             Total: R$ 52.99\n\
             \n\
             Tipo de pedido: Entrega\n\
             Cliente: Ana\n\
             Telefone: 11999999999\n\
             Endereço: Estrada dos Fidelis, 85 - Jd Iguatemi\n\
             Observações: sem cebola\n\
             Forma de pagamento: PIX"
        );

        Ok(())
    }

    #[test]
    fn pickup_summary_omits_address() -> TestResult {
        let summary = build_order_summary(&cart(), OrderType::Retirada)?;

        assert!(summary.contains("Tipo de pedido: Retirada\n"));
        assert!(!summary.contains("Endereço"));

        Ok(())
    }

    #[test]
    fn blank_observations_use_placeholder() -> TestResult {
        let mut cart = cart();
        cart.customer_mut().observations = None;

        let summary = build_order_summary(&cart, OrderType::Retirada)?;

        assert!(summary.contains("Observações: Nenhuma\n"));

        Ok(())
    }

    #[test]
    fn line_price_is_quantity_times_unit() -> TestResult {
        let mut cart = cart();
        cart.update_quantity("coca", None, 3);

        let summary = build_order_summary(&cart, OrderType::Retirada)?;

        assert!(summary.contains("3x COCA-COLA - R$ 24.00\n"));
        assert!(summary.contains("Total: R$ 68.99\n"));

        Ok(())
    }
}

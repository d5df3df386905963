//! Customer Details

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

/// How the customer pays on delivery or pickup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Cash
    #[default]
    Dinheiro,

    /// Debit card
    Debito,

    /// Credit card
    Credito,

    /// PIX instant transfer
    Pix,
}

impl PaymentMethod {
    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            PaymentMethod::Dinheiro => "Dinheiro",
            PaymentMethod::Debito => "Cartão de Débito",
            PaymentMethod::Credito => "Cartão de Crédito",
            PaymentMethod::Pix => "PIX",
        }
    }
}

/// Whether the order is picked up or delivered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    /// Pickup at the store
    #[default]
    Retirada,

    /// Delivery to the customer's address
    Entrega,
}

impl OrderType {
    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            OrderType::Retirada => "Retirada",
            OrderType::Entrega => "Entrega",
        }
    }

    /// Whether address fields are required for this order type.
    pub fn requires_address(self) -> bool {
        matches!(self, OrderType::Entrega)
    }
}

/// A customer field checked before submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CustomerField {
    /// Name
    Name,

    /// Phone number
    Phone,

    /// Street address
    Address,

    /// Neighbourhood
    Neighborhood,

    /// Street number
    Number,
}

impl fmt::Display for CustomerField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CustomerField::Name => "Nome",
            CustomerField::Phone => "Telefone",
            CustomerField::Address => "Endereço",
            CustomerField::Neighborhood => "Bairro",
            CustomerField::Number => "Número",
        })
    }
}

/// Missing fields, in form order.
pub type MissingFields = SmallVec<[CustomerField; 5]>;

/// Customer details failed the submission precondition.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Required fields are blank.
    #[error("Por favor, preencha todos os campos obrigatórios: {}", join_fields(.0))]
    MissingFields(MissingFields),
}

fn join_fields(fields: &[CustomerField]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Customer and delivery details collected at checkout.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CustomerInfo {
    /// Customer name
    pub name: String,

    /// Contact phone
    pub phone: String,

    /// Street address
    pub address: String,

    /// Neighbourhood
    pub neighborhood: String,

    /// Street number
    pub number: String,

    /// Free-form notes for the kitchen or courier
    pub observations: Option<String>,

    /// Payment method
    pub payment_method: PaymentMethod,

    /// Pickup or delivery
    pub order_type: OrderType,
}

impl CustomerInfo {
    /// Fields that must be filled in for `order_type` but are empty.
    pub fn missing_fields(&self, order_type: OrderType) -> MissingFields {
        let mut required = vec![
            (CustomerField::Name, &self.name),
            (CustomerField::Phone, &self.phone),
        ];

        if order_type.requires_address() {
            required.extend([
                (CustomerField::Address, &self.address),
                (CustomerField::Neighborhood, &self.neighborhood),
                (CustomerField::Number, &self.number),
            ]);
        }

        required
            .into_iter()
            .filter(|(_, value)| is_blank(value))
            .map(|(field, _)| field)
            .collect()
    }

    /// Whether every field required for `order_type` is filled in.
    pub fn is_complete(&self, order_type: OrderType) -> bool {
        self.missing_fields(order_type).is_empty()
    }

    /// Check the submission precondition for `order_type`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingFields`] listing every blank required field.
    pub fn validate(&self, order_type: OrderType) -> Result<(), ValidationError> {
        let missing = self.missing_fields(order_type);

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::MissingFields(missing))
        }
    }

    /// Observations as typed, or `None` when blank.
    pub fn observations(&self) -> Option<&str> {
        self.observations.as_deref().filter(|text| !is_blank(text))
    }
}

// Whitespace-only input counts as not filled in.
fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use smallvec::smallvec;

    use super::*;

    fn name_and_phone() -> CustomerInfo {
        CustomerInfo {
            name: "Ana".to_string(),
            phone: "(11) 99999-9999".to_string(),
            ..CustomerInfo::default()
        }
    }

    #[test]
    fn default_pays_cash_and_picks_up() {
        let info = CustomerInfo::default();

        assert_eq!(info.payment_method, PaymentMethod::Dinheiro);
        assert_eq!(info.order_type, OrderType::Retirada);
        assert!(info.name.is_empty());
    }

    #[test]
    fn pickup_needs_only_name_and_phone() {
        assert!(name_and_phone().is_complete(OrderType::Retirada));
    }

    #[test]
    fn delivery_needs_address_fields() {
        let info = name_and_phone();

        assert_eq!(
            info.validate(OrderType::Entrega),
            Err(ValidationError::MissingFields(smallvec![
                CustomerField::Address,
                CustomerField::Neighborhood,
                CustomerField::Number,
            ]))
        );
    }

    #[test]
    fn blank_customer_misses_name_and_phone() {
        let missing = CustomerInfo::default().missing_fields(OrderType::Retirada);

        assert_eq!(missing.as_slice(), &[CustomerField::Name, CustomerField::Phone]);
    }

    #[test]
    fn whitespace_only_fields_are_missing() {
        let info = CustomerInfo {
            name: "   ".to_string(),
            phone: "\t".to_string(),
            address: "Rua A".to_string(),
            neighborhood: " ".to_string(),
            number: "12".to_string(),
            ..CustomerInfo::default()
        };

        assert_eq!(
            info.missing_fields(OrderType::Entrega).as_slice(),
            &[
                CustomerField::Name,
                CustomerField::Phone,
                CustomerField::Neighborhood,
            ]
        );
    }

    #[test]
    fn validation_message_lists_fields() {
        let err = CustomerInfo::default()
            .validate(OrderType::Retirada)
            .err()
            .map(|err| err.to_string());

        assert_eq!(
            err.as_deref(),
            Some("Por favor, preencha todos os campos obrigatórios: Nome, Telefone")
        );
    }

    #[test]
    fn blank_observations_are_none() {
        let mut info = name_and_phone();
        assert_eq!(info.observations(), None);

        info.observations = Some("   ".to_string());
        assert_eq!(info.observations(), None);

        info.observations = Some("sem cebola".to_string());
        assert_eq!(info.observations(), Some("sem cebola"));
    }

    #[test]
    fn observations_are_kept_as_typed() {
        let info = CustomerInfo {
            observations: Some("  sem cebola\ntroco para 50 ".to_string()),
            ..name_and_phone()
        };

        assert_eq!(info.observations(), Some("  sem cebola\ntroco para 50 "));
    }

    #[test]
    fn labels() {
        assert_eq!(PaymentMethod::Credito.label(), "Cartão de Crédito");
        assert_eq!(OrderType::Entrega.label(), "Entrega");
    }
}

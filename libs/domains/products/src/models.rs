use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::borrow::Cow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Product price as submitted by the client.
///
/// Wraps the raw JSON number so the value is echoed back with the same
/// representation it arrived with: `10` stays an integer, `10.99` stays a float.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Number);

impl Price {
    /// Returns `None` for NaN and infinities, which JSON cannot carry.
    pub fn from_f64(value: f64) -> Option<Self> {
        Number::from_f64(value).map(Self)
    }

    pub fn as_f64(&self) -> Option<f64> {
        self.0.as_f64()
    }

    pub fn is_positive(&self) -> bool {
        self.as_f64().is_some_and(|value| value > 0.0)
    }
}

impl From<i64> for Price {
    fn from(value: i64) -> Self {
        Self(Number::from(value))
    }
}

impl From<u64> for Price {
    fn from(value: u64) -> Self {
        Self(Number::from(value))
    }
}

impl PartialEq<f64> for Price {
    fn eq(&self, other: &f64) -> bool {
        self.as_f64() == Some(*other)
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Product entity, immutable once stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique identifier assigned by the store
    pub id: Uuid,
    /// Product name, exactly as submitted
    pub name: String,
    /// Unit price, strictly positive
    #[schema(value_type = f64, example = 10.99)]
    pub price: Price,
    /// Identifier of the owning seller
    pub seller_id: String,
    /// Units available
    pub quantity: u64,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp (equal to `created_at`; products are never updated)
    pub updated_at: DateTime<Utc>,
}

/// Candidate product as received from the client.
///
/// Every field is optional at decode time so that missing fields surface as
/// validation errors rather than decode errors. Unknown fields are rejected.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateProduct {
    #[validate(
        required(message = "name is required"),
        custom(function = "not_blank")
    )]
    #[schema(example = "Widget")]
    pub name: Option<String>,

    #[validate(
        required(message = "price is required"),
        custom(function = "positive_price")
    )]
    #[schema(value_type = Option<f64>, example = 10.99)]
    pub price: Option<Price>,

    #[validate(
        required(message = "seller_id is required"),
        custom(function = "not_blank")
    )]
    #[schema(example = "seller123")]
    pub seller_id: Option<String>,

    /// Defaults to 0 when omitted
    #[validate(range(min = 0, message = "quantity must not be negative"))]
    #[schema(example = 5)]
    pub quantity: Option<i64>,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message(Cow::Borrowed("must not be empty")));
    }
    Ok(())
}

fn positive_price(price: &Price) -> Result<(), ValidationError> {
    if !price.is_positive() {
        return Err(ValidationError::new("range")
            .with_message(Cow::Borrowed("price must be greater than zero")));
    }
    Ok(())
}

/// A candidate that passed every business rule, ready for storage.
///
/// Only [`crate::validation::validate`] constructs this type.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub(crate) name: String,
    pub(crate) price: Price,
    pub(crate) seller_id: String,
    pub(crate) quantity: u64,
}

impl NewProduct {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> &Price {
        &self.price
    }

    pub fn seller_id(&self) -> &str {
        &self.seller_id
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    /// Materialize the stored entity with its assigned identity.
    pub fn into_product(self, id: Uuid, created_at: DateTime<Utc>) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
            seller_id: self.seller_id,
            quantity: self.quantity,
            created_at,
            updated_at: created_at,
        }
    }
}

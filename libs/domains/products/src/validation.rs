//! Business rules for product candidates.
//!
//! Pure and deterministic: the same candidate always yields the same outcome,
//! and nothing here touches the store.

use serde::Serialize;
use serde_json::{Map, Value, json};
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

use crate::models::{CreateProduct, NewProduct};

/// A single violated rule on a single field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldViolation {
    pub field: String,
    /// Rule identifier, e.g. `required`, `blank`, `range`
    pub code: String,
    pub message: String,
}

/// Every rule a rejected candidate violated, ordered by field then code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    violations: Vec<FieldViolation>,
}

impl ValidationFailure {
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// Names of the offending fields, deduplicated, in order.
    pub fn fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = self.violations.iter().map(|v| v.field.as_str()).collect();
        fields.dedup();
        fields
    }

    /// JSON object keyed by field, each holding its list of violations.
    pub fn details(&self) -> Value {
        let mut details = Map::new();
        for violation in &self.violations {
            let entry = details
                .entry(violation.field.clone())
                .or_insert_with(|| Value::Array(Vec::new()));
            if let Value::Array(list) = entry {
                list.push(json!({ "code": violation.code, "message": violation.message }));
            }
        }
        Value::Object(details)
    }

    fn required(field: &str) -> Self {
        Self {
            violations: vec![FieldViolation {
                field: field.to_string(),
                code: "required".to_string(),
                message: format!("{} is required", field),
            }],
        }
    }
}

impl From<&ValidationErrors> for ValidationFailure {
    fn from(errors: &ValidationErrors) -> Self {
        let mut violations: Vec<FieldViolation> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| FieldViolation {
                    field: field.to_string(),
                    code: error.code.to_string(),
                    message: error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", field)),
                })
            })
            .collect();

        violations.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.code.cmp(&b.code)));

        Self { violations }
    }
}

impl std::fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .violations
            .iter()
            .map(|v| format!("{}: {}", v.field, v.message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationFailure {}

/// Check a candidate against every rule.
///
/// - `name`: present, non-empty after trimming
/// - `price`: present, strictly greater than zero
/// - `seller_id`: present, non-empty after trimming
/// - `quantity`: optional, `>= 0`, defaults to `0`
///
/// Values are carried over untouched; a name with surrounding whitespace is
/// stored as submitted.
pub fn validate(candidate: CreateProduct) -> Result<NewProduct, ValidationFailure> {
    candidate
        .validate()
        .map_err(|errors| ValidationFailure::from(&errors))?;

    let CreateProduct {
        name,
        price,
        seller_id,
        quantity,
    } = candidate;

    // `validate()` already enforced presence; these only guard the unwrap.
    let name = name.ok_or_else(|| ValidationFailure::required("name"))?;
    let price = price.ok_or_else(|| ValidationFailure::required("price"))?;
    let seller_id = seller_id.ok_or_else(|| ValidationFailure::required("seller_id"))?;
    let quantity = quantity
        .and_then(|q| u64::try_from(q).ok())
        .unwrap_or(0);

    Ok(NewProduct {
        name,
        price,
        seller_id,
        quantity,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Price;

    fn widget() -> CreateProduct {
        CreateProduct {
            name: Some("Widget".to_string()),
            price: Price::from_f64(10.99),
            seller_id: Some("seller123".to_string()),
            quantity: Some(5),
        }
    }

    #[test]
    fn test_valid_candidate_passes_unchanged() {
        let product = validate(widget()).unwrap();
        assert_eq!(product.name(), "Widget");
        assert_eq!(*product.price(), 10.99);
        assert_eq!(product.seller_id(), "seller123");
        assert_eq!(product.quantity(), 5);
    }

    #[test]
    fn test_missing_quantity_defaults_to_zero() {
        let candidate = CreateProduct {
            quantity: None,
            ..widget()
        };
        assert_eq!(validate(candidate).unwrap().quantity(), 0);
    }

    #[test]
    fn test_explicit_zero_quantity_is_valid() {
        let candidate = CreateProduct {
            quantity: Some(0),
            ..widget()
        };
        assert_eq!(validate(candidate).unwrap().quantity(), 0);
    }

    #[test]
    fn test_empty_name_is_invalid() {
        let candidate = CreateProduct {
            name: Some(String::new()),
            ..widget()
        };
        let failure = validate(candidate).unwrap_err();
        assert_eq!(failure.fields(), vec!["name"]);
    }

    #[test]
    fn test_whitespace_name_is_invalid() {
        let candidate = CreateProduct {
            name: Some("   ".to_string()),
            ..widget()
        };
        assert_eq!(validate(candidate).unwrap_err().fields(), vec!["name"]);
    }

    #[test]
    fn test_name_with_padding_is_kept_as_submitted() {
        let candidate = CreateProduct {
            name: Some("  Widget ".to_string()),
            ..widget()
        };
        assert_eq!(validate(candidate).unwrap().name(), "  Widget ");
    }

    #[test]
    fn test_zero_and_negative_price_are_invalid() {
        for price in [Price::from(0i64), Price::from(-1i64), Price::from_f64(-0.5).unwrap()] {
            let candidate = CreateProduct {
                price: Some(price),
                ..widget()
            };
            let failure = validate(candidate).unwrap_err();
            assert_eq!(failure.fields(), vec!["price"]);
            assert_eq!(failure.violations()[0].message, "price must be greater than zero");
        }
    }

    #[test]
    fn test_missing_seller_id_is_invalid() {
        let candidate = CreateProduct {
            seller_id: None,
            ..widget()
        };
        let failure = validate(candidate).unwrap_err();
        assert_eq!(failure.fields(), vec!["seller_id"]);
        assert_eq!(failure.violations()[0].code, "required");
    }

    #[test]
    fn test_negative_quantity_is_invalid() {
        let candidate = CreateProduct {
            quantity: Some(-3),
            ..widget()
        };
        assert_eq!(validate(candidate).unwrap_err().fields(), vec!["quantity"]);
    }

    #[test]
    fn test_all_violations_reported_in_field_order() {
        let candidate = CreateProduct {
            name: Some(String::new()),
            price: Some(Price::from(-1i64)),
            seller_id: None,
            quantity: None,
        };
        let failure = validate(candidate).unwrap_err();
        assert_eq!(failure.fields(), vec!["name", "price", "seller_id"]);
    }

    #[test]
    fn test_validation_is_deterministic() {
        let candidate = CreateProduct::default();
        let first = validate(candidate.clone()).unwrap_err();
        let second = validate(candidate).unwrap_err();
        assert_eq!(first, second);
        assert_eq!(first.to_string(), second.to_string());
    }

    #[test]
    fn test_details_group_by_field() {
        let failure = validate(CreateProduct::default()).unwrap_err();
        let details = failure.details();
        assert_eq!(details["name"][0]["code"], "required");
        assert_eq!(details["price"][0]["message"], "price is required");
        assert!(details.get("quantity").is_none());
    }
}

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Query parameters shared by the paginated list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema, IntoParams)]
pub struct FindAllQuery {
    #[serde(default = "default_page")]
    pub page: i64,

    #[serde(default = "default_page_size")]
    pub page_size: i64,

    #[serde(default)]
    pub search: String,
}

fn default_page() -> i64 {
    1
}

fn default_page_size() -> i64 {
    10
}

impl Default for FindAllQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            page_size: default_page_size(),
            search: String::new(),
        }
    }
}

fn validate_uuid(value: &str) -> Result<(), ValidationError> {
    Uuid::parse_str(value)
        .map(|_| ())
        .map_err(|_| ValidationError::new("uuid").with_message("must be a valid UUID".into()))
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Dell Latitude 7440")]
    pub name: String,

    pub description: Option<String>,

    #[validate(length(min = 1, message = "SKU is required"))]
    #[schema(example = "LAP-7440-01")]
    pub sku: String,

    pub category_id: Option<Uuid>,

    #[validate(range(min = 0, message = "Total quantity cannot be negative"))]
    #[schema(example = 25)]
    pub total_quantity: i64,

    #[validate(range(min = 0, message = "Low stock threshold cannot be negative"))]
    #[schema(example = 5)]
    pub low_stock_threshold: i64,

    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    pub description: Option<String>,

    #[validate(length(min = 1, message = "SKU is required"))]
    pub sku: String,

    pub category_id: Option<Uuid>,

    #[validate(range(min = 0, message = "Low stock threshold cannot be negative"))]
    pub low_stock_threshold: i64,

    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckOutRequest {
    pub user_id: Uuid,

    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    #[schema(example = 2)]
    pub quantity: i64,

    #[validate(length(min = 1, message = "A purpose is required to check out"))]
    #[schema(example = "Field deployment")]
    pub purpose: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckInRequest {
    /// Identifier of the OPEN check-out transaction this check-in closes.
    #[validate(custom(function = validate_uuid))]
    pub check_out_transaction_id: String,

    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: i64,

    #[schema(example = "GOOD")]
    pub condition: Option<crate::domain::model::ItemCondition>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RestockRequest {
    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_out_requires_purpose() {
        let req = CheckOutRequest {
            user_id: Uuid::new_v4(),
            quantity: 1,
            purpose: String::new(),
        };
        let err = req.validate().unwrap_err();
        assert!(err.field_errors().contains_key("purpose"));
    }

    #[test]
    fn check_out_rejects_zero_quantity() {
        let req = CheckOutRequest {
            user_id: Uuid::new_v4(),
            quantity: 0,
            purpose: "maintenance".into(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn check_in_rejects_malformed_transaction_id() {
        let req = CheckInRequest {
            check_out_transaction_id: "not-a-uuid".into(),
            quantity: 1,
            condition: None,
        };
        let err = req.validate().unwrap_err();
        assert!(err.field_errors().contains_key("check_out_transaction_id"));
    }

    #[test]
    fn check_in_accepts_uuid_transaction_id() {
        let req = CheckInRequest {
            check_out_transaction_id: Uuid::new_v4().to_string(),
            quantity: 3,
            condition: None,
        };
        assert!(req.validate().is_ok());
    }
}

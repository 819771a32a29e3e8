use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Stock status bands derived from `available_quantity` against the
/// product's `low_stock_threshold`. The upstream service sends the same
/// display strings on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum StockStatus {
    #[serde(rename = "In Stock")]
    InStock,
    #[serde(rename = "Medium")]
    Medium,
    #[serde(rename = "Low Stock")]
    LowStock,
    #[serde(rename = "Out of Stock")]
    OutOfStock,
}

impl StockStatus {
    /// Zero available is always Out of Stock, regardless of total quantity.
    /// Medium covers the band between the low threshold and twice the
    /// threshold; for aggregate statistics it counts as In Stock.
    pub fn derive(available_quantity: i64, low_stock_threshold: i64) -> Self {
        if available_quantity <= 0 {
            StockStatus::OutOfStock
        } else if available_quantity <= low_stock_threshold {
            StockStatus::LowStock
        } else if available_quantity <= low_stock_threshold.saturating_mul(2) {
            StockStatus::Medium
        } else {
            StockStatus::InStock
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::InStock => "In Stock",
            StockStatus::Medium => "Medium",
            StockStatus::LowStock => "Low Stock",
            StockStatus::OutOfStock => "Out of Stock",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub sku: String,
    #[serde(default)]
    pub category_id: Option<Uuid>,
    #[serde(default)]
    pub category_name: Option<String>,
    pub total_quantity: i64,
    pub available_quantity: i64,
    pub checked_out_quantity: i64,
    pub low_stock_threshold: i64,
    pub status: StockStatus,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub created_on: Option<String>,
    #[serde(default)]
    pub updated_on: Option<String>,
}

impl Product {
    /// Recomputes the status band from the current quantities. The upstream
    /// value is authoritative; this exists for locally constructed records.
    pub fn derived_status(&self) -> StockStatus {
        StockStatus::derive(self.available_quantity, self.low_stock_threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_available_is_out_of_stock_regardless_of_total() {
        assert_eq!(StockStatus::derive(0, 5), StockStatus::OutOfStock);
        assert_eq!(StockStatus::derive(0, 0), StockStatus::OutOfStock);
    }

    #[test]
    fn below_threshold_is_low_stock() {
        assert_eq!(StockStatus::derive(3, 5), StockStatus::LowStock);
        assert_eq!(StockStatus::derive(5, 5), StockStatus::LowStock);
    }

    #[test]
    fn between_one_and_two_thresholds_is_medium() {
        assert_eq!(StockStatus::derive(6, 5), StockStatus::Medium);
        assert_eq!(StockStatus::derive(10, 5), StockStatus::Medium);
    }

    #[test]
    fn above_twice_threshold_is_in_stock() {
        assert_eq!(StockStatus::derive(11, 5), StockStatus::InStock);
    }

    #[test]
    fn extreme_threshold_does_not_overflow() {
        assert_eq!(StockStatus::derive(1, i64::MAX), StockStatus::LowStock);
        assert_eq!(
            StockStatus::derive(i64::MAX, i64::MAX / 2 + 1),
            StockStatus::Medium
        );
    }

    #[test]
    fn wire_format_uses_display_strings() {
        let json = serde_json::to_string(&StockStatus::OutOfStock).unwrap();
        assert_eq!(json, "\"Out of Stock\"");
        let parsed: StockStatus = serde_json::from_str("\"Low Stock\"").unwrap();
        assert_eq!(parsed, StockStatus::LowStock);
    }
}

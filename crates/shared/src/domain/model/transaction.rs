use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    CheckOut,
    CheckIn,
}

/// A check-out stays OPEN until a check-in references it through
/// `check_out_transaction_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    Open,
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemCondition {
    Good,
    Damaged,
    NeedsRepair,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: Uuid,
    pub product_id: Uuid,
    pub quantity: i64,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub user_id: Uuid,
    #[serde(default)]
    pub status: Option<TransactionStatus>,
    #[serde(default)]
    pub purpose: Option<String>,
    #[serde(default)]
    pub condition: Option<ItemCondition>,
    #[serde(default)]
    pub check_out_transaction_id: Option<Uuid>,
    #[serde(default)]
    pub created_on: Option<String>,
}

impl Transaction {
    pub fn is_open_check_out(&self) -> bool {
        self.transaction_type == TransactionType::CheckOut
            && self.status == Some(TransactionStatus::Open)
    }
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Page metadata as the upstream list endpoints report it.
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub size: i64,
    pub number: i64,
    pub total_elements: i64,
    pub total_pages: i64,
}

/// List payloads arrive as `data.content` plus `data.page`.
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct PagedData<T> {
    pub content: Vec<T>,
    pub page: Page,
}

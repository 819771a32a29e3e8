mod api;
mod pagination;

pub use self::api::ApiResponse;
pub use self::pagination::{Page, PagedData};

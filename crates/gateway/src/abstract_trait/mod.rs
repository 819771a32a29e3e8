pub mod activity_log;
pub mod auth;
pub mod category;
pub mod product;
pub mod user;

pub use self::activity_log::{ActivityLogApiTrait, DynActivityLogApi};
pub use self::auth::{AuthApiTrait, DynAuthApi};
pub use self::category::{CategoryApiTrait, DynCategoryApi};
pub use self::product::{DynProductApi, ProductApiTrait};
pub use self::user::{DynUserApi, UserApiTrait};

mod auth;
mod category;
mod invitation;
mod product;

pub use self::auth::{LoginRequest, RegisterRequest};
pub use self::category::{CreateCategoryRequest, UpdateCategoryRequest};
pub use self::invitation::InviteUserRequest;
pub use self::product::{
    CheckInRequest, CheckOutRequest, CreateProductRequest, FindAllQuery, RestockRequest,
    UpdateProductRequest,
};

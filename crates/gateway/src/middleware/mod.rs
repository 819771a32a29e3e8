pub mod auth;
pub mod organization;
pub mod validate;

pub use self::auth::{BearerToken, auth_middleware};
pub use self::organization::{OrganizationId, organization_middleware};
pub use self::validate::SimpleValidatedJson;

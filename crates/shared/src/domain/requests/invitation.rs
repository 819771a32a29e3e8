use crate::domain::model::UserRole;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InviteUserRequest {
    #[validate(email(message = "A valid email address is required"))]
    #[schema(example = "teammate@example.com")]
    pub email: String,

    /// Role membership is enforced by deserialization into the fixed set.
    pub role: UserRole,
}

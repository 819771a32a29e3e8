use uuid::Uuid;

/// Session bootstrap data, passed explicitly to the store instead of being
/// read from ambient browser storage at every call site.
#[derive(Debug, Clone)]
pub struct SessionContext {
    pub token: String,
    pub organization_id: Uuid,
    pub user_id: Uuid,
}

impl SessionContext {
    pub fn new(token: impl Into<String>, organization_id: Uuid, user_id: Uuid) -> Self {
        Self {
            token: token.into(),
            organization_id,
            user_id,
        }
    }
}

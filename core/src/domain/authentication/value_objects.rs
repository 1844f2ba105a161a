use uuid::Uuid;

/// Caller on whose behalf a service operation runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
    User(Uuid),
}

impl Identity {
    pub fn id(&self) -> Uuid {
        match self {
            Identity::User(user_id) => *user_id,
        }
    }
}

use quotehub_core::{User, UserId};

/// Authenticated identity for a request.
///
/// Inserted by the auth middleware; present on every protected route.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    user: User,
}

impl CurrentUser {
    pub fn new(user: User) -> Self {
        Self { user }
    }

    pub fn id(&self) -> UserId {
        self.user.id
    }

    pub fn is_admin(&self) -> bool {
        self.user.is_admin
    }

    pub fn user(&self) -> &User {
        &self.user
    }
}

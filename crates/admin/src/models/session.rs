//! Session-related types for admin authentication.

use serde::{Deserialize, Serialize};

use wanderlust_core::{AdminId, Email};

use super::admin::Admin;

/// The authenticated admin, as seen by handlers and returned by the login API.
///
/// Carries only public fields. There is deliberately no way to get from a
/// `CurrentAdmin` back to a password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentAdmin {
    /// Admin's database ID.
    pub id: AdminId,
    /// Admin's email address.
    pub email: Email,
    /// Admin's display name.
    pub name: String,
}

impl From<&Admin> for CurrentAdmin {
    fn from(admin: &Admin) -> Self {
        Self {
            id: admin.id,
            email: admin.email.clone(),
            name: admin.name.clone(),
        }
    }
}

impl From<Admin> for CurrentAdmin {
    fn from(admin: Admin) -> Self {
        Self {
            id: admin.id,
            email: admin.email,
            name: admin.name,
        }
    }
}

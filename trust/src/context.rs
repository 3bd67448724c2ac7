//! Per-request user identity.

use brutacritic_types::UserId;
use serde::{Deserialize, Serialize};

/// Who is acting, resolved once per request by the caller and passed in
/// explicitly. The engine never reads session state on its own.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserContext {
    pub user_id: UserId,
    /// Whether a humanity proof passed for this user.
    pub human_verified: bool,
}

impl UserContext {
    /// A user who has not yet passed a humanity check.
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            human_verified: false,
        }
    }

    /// A user with a passing humanity check.
    pub fn verified(user_id: UserId) -> Self {
        Self {
            user_id,
            human_verified: true,
        }
    }
}

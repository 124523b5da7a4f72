//! The shared authorization guard. Every protected handler funnels through
//! these two functions instead of repeating self-or-admin checks inline.

use anyhow::anyhow;
use service_core::error::AppError;

use crate::models::{CurrentUser, Role};

/// Decide whether `caller` may act on the target resource.
///
/// Admins pass unconditionally. Otherwise the caller must hold
/// `required_role` when one is demanded, and may only touch a target
/// matching their own id; a `None` target is a collection-level access
/// gated by the role check alone.
pub fn authorize(
    caller: &CurrentUser,
    target_id: Option<&str>,
    required_role: Option<Role>,
) -> Result<(), AppError> {
    if caller.is_admin() {
        return Ok(());
    }

    if let Some(required) = required_role {
        if caller.role != required {
            return Err(AppError::Forbidden(anyhow!(
                "You do not have permission to perform this action"
            )));
        }
    }

    match target_id {
        None => Ok(()),
        Some(id) if caller.user_id == id => Ok(()),
        Some(_) => Err(AppError::Forbidden(anyhow!(
            "You can only modify your own account"
        ))),
    }
}

/// Account deletion shares the guard above, with one carve-out: an admin
/// deleting the account matching their own id is rejected outright.
pub fn authorize_user_delete(caller: &CurrentUser, target_id: &str) -> Result<(), AppError> {
    if caller.is_admin() && caller.user_id == target_id {
        return Err(AppError::BadRequest(anyhow!(
            "Admins cannot delete their own account"
        )));
    }

    authorize(caller, Some(target_id), None)
}

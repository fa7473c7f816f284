//! Role-based access rules.

use thiserror::Error;

use crate::domain::users::records::{UserRecord, UserUuid};

/// Something an authenticated user is attempting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ListUsers,
    ViewUser(UserUuid),
    CreateProduct,
    UpdateProduct,
    DeleteProduct,
    ListOrders,
    ViewOrder,
    CreateOrder,
    UpdateOrderStatus,
    ViewDashboard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("not enough permissions")]
pub struct AccessDenied;

/// Decide whether `user` may perform `action`.
///
/// # Errors
///
/// Returns [`AccessDenied`] when the user's role does not permit it.
pub fn authorize(user: &UserRecord, action: Action) -> Result<(), AccessDenied> {
    let allowed = match action {
        Action::ListUsers
        | Action::CreateProduct
        | Action::UpdateProduct
        | Action::DeleteProduct => user.is_admin(),
        Action::ViewUser(target) => user.is_admin() || user.uuid == target,
        Action::ListOrders
        | Action::ViewOrder
        | Action::CreateOrder
        | Action::UpdateOrderStatus
        | Action::ViewDashboard => true,
    };

    if allowed { Ok(()) } else { Err(AccessDenied) }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use crate::domain::users::records::Role;

    use super::*;

    fn user(role: Role) -> UserRecord {
        UserRecord {
            uuid: UserUuid::new(),
            email: "ann@example.com".to_string(),
            full_name: "Ann".to_string(),
            phone: None,
            role,
            is_active: true,
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        }
    }

    #[test]
    fn admin_only_actions_reject_plain_users() {
        let plain = user(Role::User);
        let admin = user(Role::Admin);

        for action in [
            Action::ListUsers,
            Action::CreateProduct,
            Action::UpdateProduct,
            Action::DeleteProduct,
        ] {
            assert_eq!(authorize(&plain, action), Err(AccessDenied), "{action:?}");
            assert_eq!(authorize(&admin, action), Ok(()), "{action:?}");
        }
    }

    #[test]
    fn users_may_view_only_themselves() {
        let plain = user(Role::User);
        let other = UserUuid::new();

        assert_eq!(authorize(&plain, Action::ViewUser(plain.uuid)), Ok(()));
        assert_eq!(authorize(&plain, Action::ViewUser(other)), Err(AccessDenied));
        assert_eq!(authorize(&user(Role::Admin), Action::ViewUser(other)), Ok(()));
    }

    #[test]
    fn order_and_dashboard_actions_are_open_to_any_user() {
        let plain = user(Role::User);

        for action in [
            Action::ListOrders,
            Action::ViewOrder,
            Action::CreateOrder,
            Action::UpdateOrderStatus,
            Action::ViewDashboard,
        ] {
            assert_eq!(authorize(&plain, action), Ok(()), "{action:?}");
        }
    }
}

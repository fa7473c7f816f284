//! Test helpers.

use std::sync::Arc;

use backoffice_app::{
    auth::MockAuthService,
    context::AppContext,
    domain::{
        orders::MockOrdersService,
        products::MockProductsService,
        stats::MockStatsService,
        users::{
            MockUsersService,
            records::{Role, UserRecord, UserUuid},
        },
    },
};
use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use crate::{extensions::*, state::State};

pub(crate) const ADMIN_UUID: UserUuid = UserUuid::from_uuid(Uuid::from_u128(1));

pub(crate) const CUSTOMER_UUID: UserUuid = UserUuid::from_uuid(Uuid::from_u128(2));

pub(crate) fn admin() -> UserRecord {
    user(ADMIN_UUID, "admin@example.com", Role::Admin)
}

pub(crate) fn customer() -> UserRecord {
    user(CUSTOMER_UUID, "customer@example.com", Role::User)
}

pub(crate) fn user(uuid: UserUuid, email: &str, role: Role) -> UserRecord {
    UserRecord {
        uuid,
        email: email.to_string(),
        full_name: "Test User".to_string(),
        phone: None,
        role,
        is_active: true,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

/// Mocks for every service. An unconfigured mock fails the test on any call.
#[derive(Default)]
pub(crate) struct Mocks {
    pub(crate) users: MockUsersService,
    pub(crate) products: MockProductsService,
    pub(crate) orders: MockOrdersService,
    pub(crate) stats: MockStatsService,
    pub(crate) auth: MockAuthService,
}

impl Mocks {
    pub(crate) fn into_state(self) -> Arc<State> {
        State::from_app_context(AppContext {
            users: Arc::new(self.users),
            products: Arc::new(self.products),
            orders: Arc::new(self.orders),
            stats: Arc::new(self.stats),
            auth: Arc::new(self.auth),
        })
    }
}

#[salvo::handler]
async fn inject_admin(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_current_user(admin());
    ctrl.call_next(req, depot, res).await;
}

#[salvo::handler]
async fn inject_customer(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_current_user(customer());
    ctrl.call_next(req, depot, res).await;
}

/// Serve `route` with no authenticated caller.
pub(crate) fn anonymous_service(mocks: Mocks, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(mocks.into_state())).push(route))
}

/// Serve `route` as an authenticated administrator.
pub(crate) fn admin_service(mocks: Mocks, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(mocks.into_state()))
            .hoop(inject_admin)
            .push(route),
    )
}

/// Serve `route` as an authenticated non-admin user.
pub(crate) fn customer_service(mocks: Mocks, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(mocks.into_state()))
            .hoop(inject_customer)
            .push(route),
    )
}

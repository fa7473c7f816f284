//! Orders service.

use std::collections::HashMap;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::{
        orders::{
            data::NewOrder,
            errors::OrdersServiceError,
            records::{OrderItemRecord, OrderRecord, OrderUuid},
            repositories::{PgOrderItemsRepository, PgOrdersRepository},
            status::{OrderStatus, TransitionPolicy},
        },
        pagination::Pagination,
        users::records::UserUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgOrdersService {
    db: Db,
    policy: TransitionPolicy,
    orders_repository: PgOrdersRepository,
    items_repository: PgOrderItemsRepository,
}

impl PgOrdersService {
    #[must_use]
    pub fn new(db: Db, policy: TransitionPolicy) -> Self {
        Self {
            db,
            policy,
            orders_repository: PgOrdersRepository::new(),
            items_repository: PgOrderItemsRepository::new(),
        }
    }
}

#[async_trait]
impl OrdersService for PgOrdersService {
    #[tracing::instrument(
        name = "orders.create_order",
        skip(self, order),
        fields(order_uuid = %order.uuid, item_count = order.items.len()),
        err
    )]
    async fn create_order(
        &self,
        user: UserUuid,
        order: NewOrder,
    ) -> Result<OrderRecord, OrdersServiceError> {
        let prepared = order.prepare(user, Timestamp::now())?;

        let mut tx = self.db.begin().await?;

        let mut created = self.orders_repository.create_order(&mut tx, &prepared).await?;

        created.items.reserve_exact(prepared.items.len());

        for item in &prepared.items {
            let item = self
                .items_repository
                .create_item(&mut tx, created.uuid, item, prepared.created_at)
                .await?;

            created.items.push(item);
        }

        tx.commit().await?;

        info!(
            order_number = %created.order_number,
            total_amount = %created.total_amount,
            "order created"
        );

        Ok(created)
    }

    async fn get_order(&self, order: OrderUuid) -> Result<OrderRecord, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let mut order = self.orders_repository.get_order(&mut tx, order).await?;

        order.items = self.items_repository.get_items(&mut tx, &[order.uuid]).await?;

        tx.commit().await?;

        Ok(order)
    }

    async fn list_orders(
        &self,
        status: Option<OrderStatus>,
        page: Pagination,
    ) -> Result<Vec<OrderRecord>, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let mut orders = self
            .orders_repository
            .list_orders(&mut tx, status, page)
            .await?;

        let uuids: Vec<OrderUuid> = orders.iter().map(|order| order.uuid).collect();

        let items = self.items_repository.get_items(&mut tx, &uuids).await?;

        tx.commit().await?;

        attach_items(&mut orders, items);

        Ok(orders)
    }

    #[tracing::instrument(name = "orders.update_status", skip(self), err)]
    async fn update_status(
        &self,
        order: OrderUuid,
        status: OrderStatus,
    ) -> Result<OrderRecord, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let current = self.orders_repository.lock_status(&mut tx, order).await?;

        if !self.policy.allows(current, status) {
            return Err(OrdersServiceError::InvalidTransition {
                from: current,
                to: status,
            });
        }

        let mut updated = self
            .orders_repository
            .set_status(&mut tx, order, status)
            .await?;

        updated.items = self.items_repository.get_items(&mut tx, &[order]).await?;

        tx.commit().await?;

        info!(from = %current, to = %status, "order status updated");

        Ok(updated)
    }
}

fn attach_items(orders: &mut [OrderRecord], items: Vec<OrderItemRecord>) {
    let mut by_order: HashMap<OrderUuid, Vec<OrderItemRecord>> = HashMap::new();

    for item in items {
        by_order.entry(item.order_uuid).or_default().push(item);
    }

    for order in orders {
        if let Some(items) = by_order.remove(&order.uuid) {
            order.items = items;
        }
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Validates and stores an order with all of its items, attributed to
    /// `user`. Either every row is written or none is.
    async fn create_order(
        &self,
        user: UserUuid,
        order: NewOrder,
    ) -> Result<OrderRecord, OrdersServiceError>;

    /// Retrieve a single order with its items.
    async fn get_order(&self, order: OrderUuid) -> Result<OrderRecord, OrdersServiceError>;

    /// Retrieves a page of orders, newest first, optionally only those in
    /// `status`.
    async fn list_orders(
        &self,
        status: Option<OrderStatus>,
        page: Pagination,
    ) -> Result<Vec<OrderRecord>, OrdersServiceError>;

    /// Moves an order to `status` if the configured transition policy allows it.
    async fn update_status(
        &self,
        order: OrderUuid,
        status: OrderStatus,
    ) -> Result<OrderRecord, OrdersServiceError>;
}

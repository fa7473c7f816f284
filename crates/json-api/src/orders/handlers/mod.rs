//! Order Handlers

pub(crate) mod create;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod update_status;

#[cfg(test)]
pub(crate) mod tests {
    use jiff::Timestamp;
    use rust_decimal::Decimal;

    use backoffice_app::domain::{
        orders::{OrderItemRecord, OrderItemUuid, OrderRecord, OrderStatus, OrderUuid},
        products::records::ProductUuid,
    };

    use crate::test_helpers::CUSTOMER_UUID;

    /// A pending order for two units at 12.50.
    pub(crate) fn make_order(uuid: OrderUuid) -> OrderRecord {
        OrderRecord {
            uuid,
            order_number: "ORD-20260101-1234".to_string(),
            user_uuid: CUSTOMER_UUID,
            customer_name: "Ann".to_string(),
            customer_email: "ann@example.com".to_string(),
            customer_phone: None,
            customer_address: None,
            total_amount: Decimal::new(2500, 2),
            status: OrderStatus::Pending,
            payment_method: "cash".to_string(),
            payment_status: "pending".to_string(),
            notes: None,
            items: vec![OrderItemRecord {
                uuid: OrderItemUuid::new(),
                order_uuid: uuid,
                product_uuid: ProductUuid::new(),
                quantity: 2,
                price: Decimal::new(1250, 2),
                created_at: Timestamp::UNIX_EPOCH,
            }],
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        }
    }
}

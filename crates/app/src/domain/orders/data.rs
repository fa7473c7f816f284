//! Order Data

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::domain::{
    money::{MAX_STORABLE_AMOUNT, is_storable_amount},
    orders::{
        errors::OrdersServiceError,
        number,
        records::{OrderItemUuid, OrderUuid},
    },
    products::records::ProductUuid,
    users::records::UserUuid,
};

/// Payment method recorded when the caller does not name one.
pub const DEFAULT_PAYMENT_METHOD: &str = "cash";

/// Contact details captured on the order header.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerDetails {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// New Order Item Data
///
/// `price` is the unit price the caller quotes; it is stored as given.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrderItem {
    pub uuid: OrderItemUuid,
    pub product_uuid: ProductUuid,
    pub quantity: u32,
    pub price: Decimal,
}

/// New Order Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub uuid: OrderUuid,
    pub customer: CustomerDetails,
    pub items: Vec<NewOrderItem>,
    pub payment_method: Option<String>,
    pub notes: Option<String>,
}

/// An order that passed validation and carries every derived field, ready
/// to be written in a single transaction.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PreparedOrder {
    pub uuid: OrderUuid,
    pub order_number: String,
    pub user_uuid: UserUuid,
    pub customer: CustomerDetails,
    pub total_amount: Decimal,
    pub payment_method: String,
    pub notes: Option<String>,
    pub items: Vec<NewOrderItem>,
    pub created_at: Timestamp,
}

impl NewOrder {
    /// Validate the order and derive its number and total.
    pub(crate) fn prepare(
        self,
        user: UserUuid,
        at: Timestamp,
    ) -> Result<PreparedOrder, OrdersServiceError> {
        if self.items.is_empty() {
            return Err(OrdersServiceError::EmptyOrder);
        }

        if self.customer.name.trim().is_empty() || self.customer.email.trim().is_empty() {
            return Err(OrdersServiceError::MissingRequiredData);
        }

        let total_amount = order_total(&self.items)?;

        Ok(PreparedOrder {
            uuid: self.uuid,
            order_number: number::generate(at),
            user_uuid: user,
            customer: self.customer,
            total_amount,
            payment_method: self
                .payment_method
                .filter(|method| !method.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_PAYMENT_METHOD.to_string()),
            notes: self.notes,
            items: self.items,
            created_at: at,
        })
    }
}

/// Exact sum of `price * quantity` over `items`.
///
/// # Errors
///
/// Returns [`OrdersServiceError::InvalidItem`] for the first item with a zero
/// quantity, a price that is negative or finer than a cent, or a line that
/// pushes the total past [`MAX_STORABLE_AMOUNT`].
pub fn order_total(items: &[NewOrderItem]) -> Result<Decimal, OrdersServiceError> {
    items
        .iter()
        .enumerate()
        .try_fold(Decimal::ZERO, |total, (index, item)| {
            let invalid = || OrdersServiceError::InvalidItem { index };

            if item.quantity == 0
                || i32::try_from(item.quantity).is_err()
                || !is_storable_amount(item.price)
            {
                return Err(invalid());
            }

            item.price
                .checked_mul(Decimal::from(item.quantity))
                .and_then(|line| total.checked_add(line))
                .filter(|running| *running <= MAX_STORABLE_AMOUNT)
                .ok_or_else(invalid)
        })
}

//! Test Helpers

use rust_decimal::Decimal;

use crate::{
    auth::NewRegistration,
    domain::{
        orders::{CustomerDetails, NewOrder, NewOrderItem, OrderItemUuid, OrderUuid},
        products::{data::ProductDetails, records::ProductUuid},
        users::{
            data::NewUser,
            records::{Role, UserUuid},
        },
    },
};

/// Users created this way cannot log in: the hash is not a real PHC string.
pub(crate) fn new_user(email: &str, role: Role) -> NewUser {
    NewUser {
        uuid: UserUuid::new(),
        email: email.to_string(),
        password_hash: "not-a-real-hash".to_string(),
        full_name: "Test User".to_string(),
        phone: None,
        role,
    }
}

pub(crate) fn registration(email: &str, password: &str, full_name: &str) -> NewRegistration {
    NewRegistration {
        email: email.to_string(),
        password: password.to_string(),
        full_name: full_name.to_string(),
        phone: None,
    }
}

pub(crate) fn product_details(
    name: &str,
    price: Decimal,
    category: Option<&str>,
) -> ProductDetails {
    ProductDetails {
        name: name.to_string(),
        description: None,
        price,
        stock: 10,
        category: category.map(str::to_string),
        image_url: None,
    }
}

pub(crate) fn order_item(product: ProductUuid, quantity: u32, price: Decimal) -> NewOrderItem {
    NewOrderItem {
        uuid: OrderItemUuid::new(),
        product_uuid: product,
        quantity,
        price,
    }
}

pub(crate) fn new_order(items: Vec<NewOrderItem>) -> NewOrder {
    NewOrder {
        uuid: OrderUuid::new(),
        customer: CustomerDetails {
            name: "Ann Customer".to_string(),
            email: "customer@example.com".to_string(),
            phone: Some("+998 90 000 00 00".to_string()),
            address: Some("1 Test Street".to_string()),
        },
        items,
        payment_method: None,
        notes: None,
    }
}

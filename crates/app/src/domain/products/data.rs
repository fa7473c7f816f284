//! Products Data

use rust_decimal::Decimal;

use crate::domain::{
    money::is_storable_amount, products::errors::ProductsServiceError,
    products::records::ProductUuid,
};

/// Editable product fields, shared by creation and full updates.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetails {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub stock: u32,
    pub category: Option<String>,
    pub image_url: Option<String>,
}

impl ProductDetails {
    pub(crate) fn validate(&self) -> Result<(), ProductsServiceError> {
        if self.name.trim().is_empty() {
            return Err(ProductsServiceError::MissingRequiredData);
        }

        if !is_storable_amount(self.price) {
            return Err(ProductsServiceError::InvalidPrice);
        }

        Ok(())
    }
}

/// New Product Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub uuid: ProductUuid,
    pub details: ProductDetails,
}

/// Product Update Data
pub type ProductUpdate = ProductDetails;

#[cfg(test)]
mod tests {
    use super::*;

    fn details(price: Decimal) -> ProductDetails {
        ProductDetails {
            name: "Trail shoe".to_string(),
            description: None,
            price,
            stock: 3,
            category: Some("shoes".to_string()),
            image_url: None,
        }
    }

    #[test]
    fn negative_price_is_rejected() {
        let result = details(Decimal::new(-100, 2)).validate();

        assert!(matches!(result, Err(ProductsServiceError::InvalidPrice)));
    }

    #[test]
    fn price_beyond_column_range_is_rejected() {
        let result = details(Decimal::new(10_000_000_000, 0)).validate();

        assert!(matches!(result, Err(ProductsServiceError::InvalidPrice)));
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut product = details(Decimal::new(100, 2));

        product.name = "   ".to_string();

        assert!(matches!(
            product.validate(),
            Err(ProductsServiceError::MissingRequiredData)
        ));
    }

    #[test]
    fn valid_details_pass() {
        assert!(details(Decimal::new(4999, 2)).validate().is_ok());
    }
}

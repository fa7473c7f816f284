//! Products service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        pagination::Pagination,
        products::{
            data::{NewProduct, ProductUpdate},
            errors::ProductsServiceError,
            records::{ProductRecord, ProductUuid},
            repository::PgProductsRepository,
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgProductsService {
    db: Db,
    repository: PgProductsRepository,
}

impl PgProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgProductsRepository::new(),
        }
    }
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn list_products(
        &self,
        category: Option<String>,
        page: Pagination,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let products = self
            .repository
            .list_products(&mut tx, category.as_deref(), page)
            .await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn get_product(
        &self,
        product: ProductUuid,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let product = self.repository.get_product(&mut tx, product).await?;

        tx.commit().await?;

        Ok(product)
    }

    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError> {
        product.details.validate()?;

        let mut tx = self.db.begin().await?;

        let created = self
            .repository
            .create_product(&mut tx, product.uuid, &product.details)
            .await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn update_product(
        &self,
        product: ProductUuid,
        update: ProductUpdate,
    ) -> Result<ProductRecord, ProductsServiceError> {
        update.validate()?;

        let mut tx = self.db.begin().await?;

        let updated = self
            .repository
            .update_product(&mut tx, product, &update)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn delete_product(&self, product: ProductUuid) -> Result<(), ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_product(&mut tx, product).await?;

        if rows_affected == 0 {
            return Err(ProductsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves a page of active products, optionally restricted to one category.
    async fn list_products(
        &self,
        category: Option<String>,
        page: Pagination,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Retrieve a single active product.
    async fn get_product(
        &self,
        product: ProductUuid,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Creates a new product.
    async fn create_product(&self, product: NewProduct)
    -> Result<ProductRecord, ProductsServiceError>;

    /// Overwrites every editable field of a product.
    async fn update_product(
        &self,
        product: ProductUuid,
        update: ProductUpdate,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Soft-deletes a product by clearing its active flag.
    async fn delete_product(&self, product: ProductUuid) -> Result<(), ProductsServiceError>;
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::test::{TestContext, helpers::product_details};

    use super::*;

    #[tokio::test]
    async fn create_product_returns_active_product() -> TestResult {
        let ctx = TestContext::new().await;
        let uuid = ProductUuid::new();

        let product = ctx
            .products
            .create_product(NewProduct {
                uuid,
                details: product_details("Trail shoe", Decimal::new(4999, 2), Some("shoes")),
            })
            .await?;

        assert_eq!(product.uuid, uuid);
        assert_eq!(product.price, Decimal::new(4999, 2));
        assert_eq!(product.category.as_deref(), Some("shoes"));
        assert!(product.is_active);

        Ok(())
    }

    #[tokio::test]
    async fn create_product_duplicate_uuid_returns_already_exists() -> TestResult {
        let ctx = TestContext::new().await;
        let uuid = ProductUuid::new();

        let details = product_details("Mug", Decimal::new(800, 2), None);

        ctx.products
            .create_product(NewProduct {
                uuid,
                details: details.clone(),
            })
            .await?;

        let result = ctx.products.create_product(NewProduct { uuid, details }).await;

        assert!(
            matches!(result, Err(ProductsServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn create_product_negative_price_returns_invalid_price() {
        let ctx = TestContext::new().await;

        let result = ctx
            .products
            .create_product(NewProduct {
                uuid: ProductUuid::new(),
                details: product_details("Mug", Decimal::new(-1, 0), None),
            })
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::InvalidPrice)),
            "expected InvalidPrice, got {result:?}"
        );
    }

    #[tokio::test]
    async fn get_product_unknown_uuid_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.products.get_product(ProductUuid::new()).await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn list_products_filters_by_category() -> TestResult {
        let ctx = TestContext::new().await;

        let shoe = ctx
            .create_product("Trail shoe", Decimal::new(4999, 2), Some("shoes"))
            .await;

        ctx.create_product("Mug", Decimal::new(800, 2), Some("kitchen"))
            .await;

        ctx.create_product("Gift card", Decimal::new(2500, 2), None)
            .await;

        let products = ctx
            .products
            .list_products(Some("shoes".to_string()), Pagination::default())
            .await?;

        assert_eq!(products.len(), 1, "only the shoe should match");
        assert_eq!(products[0].uuid, shoe.uuid);

        Ok(())
    }

    #[tokio::test]
    async fn list_products_without_category_returns_all_active() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.create_product("Trail shoe", Decimal::new(4999, 2), Some("shoes"))
            .await;

        ctx.create_product("Mug", Decimal::new(800, 2), None).await;

        let products = ctx
            .products
            .list_products(None, Pagination::default())
            .await?;

        assert_eq!(products.len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn update_product_overwrites_fields() -> TestResult {
        let ctx = TestContext::new().await;

        let product = ctx
            .create_product("Mug", Decimal::new(800, 2), Some("kitchen"))
            .await;

        let updated = ctx
            .products
            .update_product(
                product.uuid,
                product_details("Large mug", Decimal::new(1050, 2), None),
            )
            .await?;

        assert_eq!(updated.uuid, product.uuid);
        assert_eq!(updated.name, "Large mug");
        assert_eq!(updated.price, Decimal::new(1050, 2));
        assert_eq!(updated.category, None);

        Ok(())
    }

    #[tokio::test]
    async fn update_product_unknown_uuid_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx
            .products
            .update_product(
                ProductUuid::new(),
                product_details("Mug", Decimal::new(800, 2), None),
            )
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn deleted_product_is_hidden_from_reads() -> TestResult {
        let ctx = TestContext::new().await;

        let product = ctx
            .create_product("Trail shoe", Decimal::new(4999, 2), Some("shoes"))
            .await;

        ctx.products.delete_product(product.uuid).await?;

        let listed = ctx
            .products
            .list_products(Some("shoes".to_string()), Pagination::default())
            .await?;

        let fetched = ctx.products.get_product(product.uuid).await;

        assert!(listed.is_empty(), "soft-deleted product should not be listed");
        assert!(
            matches!(fetched, Err(ProductsServiceError::NotFound)),
            "expected NotFound after soft delete, got {fetched:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn delete_product_keeps_the_row() -> TestResult {
        let ctx = TestContext::new().await;

        let product = ctx.create_product("Mug", Decimal::new(800, 2), None).await;

        ctx.products.delete_product(product.uuid).await?;

        let is_active: bool = sqlx::query_scalar("SELECT is_active FROM products WHERE uuid = $1")
            .bind(product.uuid.into_uuid())
            .fetch_one(ctx.db.pool())
            .await?;

        assert!(!is_active);

        Ok(())
    }

    #[tokio::test]
    async fn delete_product_unknown_uuid_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.products.delete_product(ProductUuid::new()).await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }
}

use std::sync::Arc;

use anyhow::Result;
use uuid::Uuid;

use crate::domain::shared::Repository;
use crate::events::SharedEventDispatcher;

use super::entity::Product;
use super::errors::ProductError;
use super::events::{ProductCreated, ProductCreatedEvent};

// ============================================================================
// Product Service
// ============================================================================

pub struct ProductService<R: Repository<Product>> {
    repository: Arc<R>,
    dispatcher: SharedEventDispatcher,
}

impl<R: Repository<Product>> ProductService<R> {
    pub fn new(repository: Arc<R>, dispatcher: SharedEventDispatcher) -> Self {
        Self {
            repository,
            dispatcher,
        }
    }

    /// Persist a new product, then raise `ProductCreatedEvent`.
    ///
    /// A handler failure is returned as a [`DispatchError`] after the product
    /// has been stored.
    ///
    /// [`DispatchError`]: crate::events::DispatchError
    pub async fn create(&self, name: &str, description: &str, price: f64) -> Result<Product> {
        let product = Product::new(Uuid::new_v4().to_string(), name, price)?;

        self.repository.create(&product).await?;
        tracing::info!(product_id = %product.id(), "Product created");

        self.dispatcher.notify(&ProductCreatedEvent::new(ProductCreated {
            name: product.name().to_string(),
            description: description.to_string(),
            price: product.price(),
        }))?;
        Ok(product)
    }

    /// Raise the price of every stored product by `percent` and persist it
    pub async fn increase_all_prices(&self, percent: f64) -> Result<Vec<Product>> {
        let mut products = self.repository.find_all().await?;
        increase_prices(&mut products, percent)?;
        self.repository.update_all(&products).await?;

        tracing::info!(products = products.len(), percent, "Increased all prices");
        Ok(products)
    }
}

/// Raise every price by `percent` (10.0 means +10%).
///
/// Either every product gets its new price or, on error, none does.
pub fn increase_prices(products: &mut [Product], percent: f64) -> Result<(), ProductError> {
    let mut raised = products.to_vec();
    for product in raised.iter_mut() {
        let price = product.price() * percent / 100.0 + product.price();
        product.change_price(price)?;
    }
    products.clone_from_slice(&raised);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increase_prices() {
        let mut products = vec![
            Product::new("1", "Product 1", 10.0).unwrap(),
            Product::new("2", "Product 2", 20.0).unwrap(),
        ];

        increase_prices(&mut products, 100.0).unwrap();

        assert_eq!(products[0].price(), 20.0);
        assert_eq!(products[1].price(), 40.0);
    }

    #[test]
    fn test_increase_prices_rejects_negative_result() {
        let mut products = vec![Product::new("1", "Product 1", 10.0).unwrap()];

        assert!(increase_prices(&mut products, -200.0).is_err());
    }

    #[test]
    fn test_failed_increase_leaves_every_price_unchanged() {
        let mut products = vec![
            Product::new("1", "Product 1", 0.0).unwrap(),
            Product::new("2", "Product 2", 10.0).unwrap(),
        ];

        assert!(matches!(
            increase_prices(&mut products, -200.0),
            Err(ProductError::NegativePrice(_))
        ));
        assert_eq!(products[0].price(), 0.0);
        assert_eq!(products[1].price(), 10.0);
    }
}

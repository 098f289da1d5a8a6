use super::errors::ProductError;

// ============================================================================
// Product Entity
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: String,
    name: String,
    price: f64,
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
    ) -> Result<Self, ProductError> {
        let product = Self {
            id: id.into(),
            name: name.into(),
            price,
        };
        product.validate()?;
        Ok(product)
    }

    fn validate(&self) -> Result<(), ProductError> {
        if self.id.is_empty() {
            return Err(ProductError::EmptyId);
        }
        if self.name.is_empty() {
            return Err(ProductError::EmptyName);
        }
        check_price(self.price)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn change_name(&mut self, name: impl Into<String>) -> Result<(), ProductError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ProductError::EmptyName);
        }
        self.name = name;
        Ok(())
    }

    pub fn change_price(&mut self, price: f64) -> Result<(), ProductError> {
        check_price(price)?;
        self.price = price;
        Ok(())
    }
}

fn check_price(price: f64) -> Result<(), ProductError> {
    if price.is_nan() || price < 0.0 {
        return Err(ProductError::NegativePrice(price));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_creation() {
        let product = Product::new("123", "Product 1", 10.0).unwrap();

        assert_eq!(product.id(), "123");
        assert_eq!(product.name(), "Product 1");
        assert_eq!(product.price(), 10.0);
    }

    #[test]
    fn test_product_validation() {
        assert!(matches!(Product::new("", "Product 1", 10.0), Err(ProductError::EmptyId)));
        assert!(matches!(Product::new("1", "", 10.0), Err(ProductError::EmptyName)));
        assert!(matches!(
            Product::new("1", "Product 1", -1.0),
            Err(ProductError::NegativePrice(_))
        ));
        assert!(Product::new("1", "Free sample", 0.0).is_ok());
    }

    #[test]
    fn test_change_name_and_price() {
        let mut product = Product::new("1", "Product 1", 100.0).unwrap();

        product.change_name("Product 2").unwrap();
        product.change_price(150.0).unwrap();

        assert_eq!(product.name(), "Product 2");
        assert_eq!(product.price(), 150.0);

        assert!(product.change_price(-5.0).is_err());
        assert_eq!(product.price(), 150.0);
    }
}

use super::errors::OrderError;

// ============================================================================
// Order Item
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    id: String,
    name: String,
    price: f64,
    product_id: String,
    quantity: u32,
}

impl OrderItem {
    /// `price` is the unit price
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        product_id: impl Into<String>,
        quantity: u32,
    ) -> Result<Self, OrderError> {
        let item = Self {
            id: id.into(),
            name: name.into(),
            price,
            product_id: product_id.into(),
            quantity,
        };
        item.validate()?;
        Ok(item)
    }

    fn validate(&self) -> Result<(), OrderError> {
        if self.id.is_empty() {
            return Err(OrderError::EmptyItemId);
        }
        if self.product_id.is_empty() {
            return Err(OrderError::EmptyProductId);
        }
        if self.quantity == 0 {
            return Err(OrderError::InvalidQuantity(self.quantity));
        }
        if self.price.is_nan() || self.price < 0.0 {
            return Err(OrderError::NegativePrice(self.price));
        }
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price
    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price times quantity
    pub fn total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }

    pub fn change_price(&mut self, price: f64) -> Result<(), OrderError> {
        if price.is_nan() || price < 0.0 {
            return Err(OrderError::NegativePrice(price));
        }
        self.price = price;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_item_creation() {
        let item = OrderItem::new("i1", "Item 1", 100.0, "p1", 2).unwrap();

        assert_eq!(item.id(), "i1");
        assert_eq!(item.product_id(), "p1");
        assert_eq!(item.quantity(), 2);
        assert_eq!(item.price(), 100.0);
        assert_eq!(item.total(), 200.0);
    }

    #[test]
    fn test_order_item_validation() {
        assert!(matches!(
            OrderItem::new("i1", "Item 1", 100.0, "p1", 0),
            Err(OrderError::InvalidQuantity(0))
        ));
        assert!(matches!(
            OrderItem::new("i1", "Item 1", -1.0, "p1", 1),
            Err(OrderError::NegativePrice(_))
        ));
        assert!(matches!(
            OrderItem::new("", "Item 1", 1.0, "p1", 1),
            Err(OrderError::EmptyItemId)
        ));
        assert!(matches!(
            OrderItem::new("i1", "Item 1", 1.0, "", 1),
            Err(OrderError::EmptyProductId)
        ));
    }

    #[test]
    fn test_change_price() {
        let mut item = OrderItem::new("i1", "Item 1", 10.0, "p1", 3).unwrap();
        item.change_price(5.0).unwrap();
        assert_eq!(item.total(), 15.0);
    }
}

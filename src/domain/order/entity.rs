use super::errors::OrderError;
use super::order_item::OrderItem;

// ============================================================================
// Order Aggregate
// ============================================================================
//
// Invariants:
// - id and customer_id are non-empty
// - there is always at least one item
//
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    id: String,
    customer_id: String,
    items: Vec<OrderItem>,
}

impl Order {
    pub fn new(
        id: impl Into<String>,
        customer_id: impl Into<String>,
        items: Vec<OrderItem>,
    ) -> Result<Self, OrderError> {
        let order = Self {
            id: id.into(),
            customer_id: customer_id.into(),
            items,
        };
        order.validate()?;
        Ok(order)
    }

    fn validate(&self) -> Result<(), OrderError> {
        if self.id.is_empty() {
            return Err(OrderError::EmptyId);
        }
        if self.customer_id.is_empty() {
            return Err(OrderError::EmptyCustomerId);
        }
        if self.items.is_empty() {
            return Err(OrderError::EmptyItems);
        }
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(OrderItem::total).sum()
    }

    pub fn add_item(&mut self, item: OrderItem) {
        self.items.push(item);
    }

    /// Remove the item with `item_id`. The last item cannot be removed.
    pub fn remove_item(&mut self, item_id: &str) -> Result<OrderItem, OrderError> {
        let position = self
            .items
            .iter()
            .position(|item| item.id() == item_id)
            .ok_or_else(|| OrderError::ItemNotFound(item_id.to_string()))?;

        if self.items.len() == 1 {
            return Err(OrderError::EmptyItems);
        }
        Ok(self.items.remove(position))
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, price: f64, quantity: u32) -> OrderItem {
        OrderItem::new(id, format!("Item {id}"), price, format!("p{id}"), quantity).unwrap()
    }

    #[test]
    fn test_order_validation() {
        assert!(matches!(
            Order::new("", "c1", vec![item("1", 10.0, 1)]),
            Err(OrderError::EmptyId)
        ));
        assert!(matches!(
            Order::new("o1", "", vec![item("1", 10.0, 1)]),
            Err(OrderError::EmptyCustomerId)
        ));
        assert!(matches!(Order::new("o1", "c1", vec![]), Err(OrderError::EmptyItems)));
    }

    #[test]
    fn test_order_total() {
        let order = Order::new("o1", "c1", vec![item("1", 100.0, 2), item("2", 200.0, 2)]).unwrap();
        assert_eq!(order.total(), 600.0);
    }

    #[test]
    fn test_add_and_remove_item() {
        let mut order = Order::new("o1", "c1", vec![item("1", 10.0, 2)]).unwrap();

        order.add_item(item("2", 20.0, 1));
        assert_eq!(order.items().len(), 2);
        assert_eq!(order.total(), 40.0);

        let removed = order.remove_item("2").unwrap();
        assert_eq!(removed.id(), "2");
        assert_eq!(order.total(), 20.0);
    }

    #[test]
    fn test_remove_unknown_item() {
        let mut order = Order::new("o1", "c1", vec![item("1", 10.0, 2)]).unwrap();
        assert!(matches!(order.remove_item("404"), Err(OrderError::ItemNotFound(_))));
    }

    #[test]
    fn test_cannot_remove_last_item() {
        let mut order = Order::new("o1", "c1", vec![item("1", 10.0, 2)]).unwrap();
        assert!(matches!(order.remove_item("1"), Err(OrderError::EmptyItems)));
        assert_eq!(order.items().len(), 1);
    }
}

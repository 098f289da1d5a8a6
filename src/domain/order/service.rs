use uuid::Uuid;

use crate::domain::customer::Customer;

use super::entity::Order;
use super::errors::OrderError;
use super::order_item::OrderItem;

// ============================================================================
// Order Service
// ============================================================================

/// Create an order for `customer` and credit half of its total as reward points
pub fn place_order(customer: &mut Customer, items: Vec<OrderItem>) -> Result<Order, OrderError> {
    let order = Order::new(Uuid::new_v4().to_string(), customer.id(), items)?;
    customer.add_reward_points((order.total() / 2.0) as u32);

    tracing::debug!(
        order_id = %order.id(),
        customer_id = %customer.id(),
        total = order.total(),
        "Order placed"
    );
    Ok(order)
}

/// Sum of the totals of `orders`
pub fn total(orders: &[Order]) -> f64 {
    orders.iter().map(Order::total).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_order_credits_reward_points() {
        let mut customer = Customer::new("c1", "Customer 1").unwrap();
        let items = vec![OrderItem::new("i1", "Item 1", 10.0, "p1", 1).unwrap()];

        let order = place_order(&mut customer, items).unwrap();

        assert_eq!(customer.reward_points(), 5);
        assert_eq!(order.customer_id(), "c1");
        assert_eq!(order.total(), 10.0);
    }

    #[test]
    fn test_place_order_without_items_fails() {
        let mut customer = Customer::new("c1", "Customer 1").unwrap();

        assert!(matches!(place_order(&mut customer, vec![]), Err(OrderError::EmptyItems)));
        assert_eq!(customer.reward_points(), 0);
    }

    #[test]
    fn test_total_of_all_orders() {
        let first = Order::new(
            "o1",
            "c1",
            vec![OrderItem::new("i1", "Item 1", 100.0, "p1", 1).unwrap()],
        )
        .unwrap();
        let second = Order::new(
            "o2",
            "c1",
            vec![OrderItem::new("i2", "Item 2", 200.0, "p2", 2).unwrap()],
        )
        .unwrap();

        assert_eq!(total(&[first, second]), 500.0);
    }
}

use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ddd_events::config::AppConfig;
use ddd_events::domain::customer::{
    Address, CustomerAddressChangedLogHandler, CustomerAddressUpdatedEvent, CustomerCreatedEvent,
    CustomerService, FirstCustomerCreatedLogHandler, SecondCustomerCreatedLogHandler,
};
use ddd_events::domain::order::{self, OrderItem};
use ddd_events::domain::product::{ProductCreatedEvent, ProductService, SendEmailWhenProductIsCreatedHandler};
use ddd_events::domain::shared::Repository;
use ddd_events::events::{EventDispatcher, NamedEvent, SharedEventDispatcher};
use ddd_events::infrastructure::{self, CustomerRepository, OrderRepository, ProductRepository};
use ddd_events::DispatchMetrics;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Config file path from the first argument, defaults to ./app.toml
    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("app.toml"));
    let config = AppConfig::load(Some(&config_path))?;

    // RUST_LOG overrides the configured filter
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .init();

    tracing::info!("Starting domain events demo");

    // === 1. Database ===
    let pool = infrastructure::connect(&config.database).await?;
    infrastructure::migrate(&pool).await?;

    let customers = Arc::new(CustomerRepository::new(pool.clone()));
    let products = Arc::new(ProductRepository::new(pool.clone()));
    let orders = OrderRepository::new(pool.clone());

    // === 2. Dispatcher and handlers ===
    let metrics = Arc::new(DispatchMetrics::new()?);
    let dispatcher: SharedEventDispatcher = EventDispatcher::new().with_metrics(metrics.clone()).into();

    dispatcher.register(ProductCreatedEvent::NAME, Arc::new(SendEmailWhenProductIsCreatedHandler));
    dispatcher.register(CustomerCreatedEvent::NAME, Arc::new(FirstCustomerCreatedLogHandler));
    dispatcher.register(CustomerCreatedEvent::NAME, Arc::new(SecondCustomerCreatedLogHandler));
    dispatcher.register(CustomerAddressUpdatedEvent::NAME, Arc::new(CustomerAddressChangedLogHandler));

    // === 3. Domain flow ===
    let product_service = ProductService::new(products.clone(), dispatcher.clone());
    let customer_service = CustomerService::new(customers.clone(), dispatcher.clone());

    let product = product_service.create("Product 1", "Product 1 description", 10.0).await?;

    let customer = customer_service
        .create("Customer 1", Some(Address::new("Street 1", 21, "ZipCode 1", "City 1")?))
        .await?;
    let mut customer = customer_service
        .change_address(customer.id(), Address::new("Street 2", 22, "ZipCode 2", "City 2")?)
        .await?;

    let item = OrderItem::new(
        uuid::Uuid::new_v4().to_string(),
        product.name(),
        product.price(),
        product.id(),
        2,
    )?;
    let placed = order::place_order(&mut customer, vec![item])?;
    orders.create(&placed).await?;
    customers.update(&customer).await?;

    tracing::info!(
        order_id = %placed.id(),
        total = placed.total(),
        reward_points = customer.reward_points(),
        "Order placed"
    );

    product_service.increase_all_prices(10.0).await?;

    // === 4. Report ===
    tracing::info!(orders = orders.find_all().await?.len(), "Demo complete");
    tracing::debug!("Dispatch metrics:\n{}", metrics.encode_text()?);

    Ok(())
}

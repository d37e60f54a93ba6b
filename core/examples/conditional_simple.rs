// condflow/examples/conditional_simple.rs

use condflow::conditional;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Debug, PartialEq)]
struct Order {
  id: u32,
  total_cents: u64,
  status: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();
  info!("--- Simple Conditional Example ---");

  let route_order = conditional::<Order, anyhow::Error>()
    .when(|order| order.total_cents >= 100_000)
    .then(|mut order| {
      order.status = "manual_review".to_string();
      Ok(order)
    })
    .else_when(|order| order.total_cents == 0)
    .then(|_| Err(anyhow::anyhow!("empty order")))
    .catch(|e| {
      info!("Rejected order: {}", e);
      Ok(Order {
        id: 0,
        total_cents: 0,
        status: "rejected".to_string(),
      })
    })
    .otherwise()
    .then(|mut order| {
      order.status = "auto_approved".to_string();
      Ok(order)
    })
    .end();

  let orders = [
    Order { id: 1, total_cents: 250_000, status: "new".to_string() },
    Order { id: 2, total_cents: 0, status: "new".to_string() },
    Order { id: 3, total_cents: 4_999, status: "new".to_string() },
  ];

  for order in orders {
    let id = order.id;
    let routed = route_order.run(order).await?;
    info!("Order {} -> {}", id, routed.status);
  }

  let big = route_order
    .run(Order { id: 4, total_cents: 100_000, status: "new".to_string() })
    .await?;
  assert_eq!(big.status, "manual_review");

  Ok(())
}

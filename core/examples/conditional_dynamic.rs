// condflow/examples/conditional_dynamic.rs

//! Async conditions and a custom `Condition` implementation backed by shared state.

use async_trait::async_trait;
use condflow::{conditional, Condition};
use std::collections::HashSet;
use std::sync::{Arc, RwLock};
use std::time::Duration;
use tracing::info;

/// Condition backed by a blocklist that can change between runs.
struct Blocklisted {
  users: Arc<RwLock<HashSet<String>>>,
}

#[async_trait]
impl Condition<String, anyhow::Error> for Blocklisted {
  async fn evaluate(&self, user: &String) -> anyhow::Result<bool> {
    let blocked = self
      .users
      .read()
      .map_err(|_| anyhow::anyhow!("blocklist lock poisoned"))?
      .contains(user);
    Ok(blocked)
  }
}

async fn lookup_is_admin(user: String) -> anyhow::Result<bool> {
  // Stand-in for a directory service call.
  tokio::time::sleep(Duration::from_millis(10)).await;
  Ok(user.starts_with("admin-"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).init();
  info!("--- Dynamic Conditional Example ---");

  let blocklist = Arc::new(RwLock::new(HashSet::new()));

  let greet = conditional::<String, anyhow::Error>()
    .when_condition(Blocklisted { users: blocklist.clone() })
    .then(|_| Err(anyhow::anyhow!("access denied")))
    .else_when_async(lookup_is_admin)
    .then_async(|user| async move { Ok::<_, anyhow::Error>(format!("Welcome back, administrator {}", user)) })
    .otherwise()
    .then(|user| Ok(format!("Hello, {}", user)))
    .finally(|| {
      info!("Greeting attempt finished.");
      Ok(())
    })
    .end();

  info!("{}", greet.run("admin-ada".to_string()).await?);
  info!("{}", greet.run("grace".to_string()).await?);

  blocklist
    .write()
    .map_err(|_| anyhow::anyhow!("blocklist lock poisoned"))?
    .insert("mallory".to_string());
  match greet.run("mallory".to_string()).await {
    Ok(msg) => info!("Unexpected greeting: {}", msg),
    Err(e) => info!("Greeting refused: {}", e),
  }

  let outcome = greet.evaluate("grace".to_string()).await?;
  info!("Matched branch: {:?}", outcome.matched);

  Ok(())
}

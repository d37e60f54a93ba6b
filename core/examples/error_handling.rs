// condflow/examples/error_handling.rs

use condflow::{conditional, ConditionalError, Link};
use tracing::{error, info};

#[derive(Debug, thiserror::Error)]
enum ParseError {
  #[error("not a number: {0}")]
  NotANumber(String),
  #[error("out of range: {0}")]
  OutOfRange(i64),
}

#[tokio::main]
async fn main() -> Result<(), ConditionalError> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();
  info!("--- Error Handling Example ---");

  // Build-time misuse is reported before anything runs.
  let empty = conditional::<String, ParseError>();
  if let Err(e) = empty.try_chain(Link::then(|s: String| Ok(s))) {
    info!("Caught usage error: {}", e);
  }

  let normalize = conditional::<String, ParseError>()
    .when(|s| s.trim().starts_with('-'))
    .then(|s| Err(ParseError::NotANumber(s)))
    .otherwise()
    .try_chain(Link::then(|s: String| {
      let n: i64 = s.trim().parse().map_err(|_| ParseError::NotANumber(s.clone()))?;
      if n > 1_000 {
        return Err(ParseError::OutOfRange(n));
      }
      Ok(n.to_string())
    }))?
    .try_chain(Link::catch(|e| match e {
      ParseError::OutOfRange(_) => Ok("1000".to_string()),
      other => Err(other),
    }))?
    .end();

  for input in ["42", "5000", "abc", "-7"] {
    match normalize.run(input.to_string()).await {
      Ok(value) => info!("{:>6} -> {}", input, value),
      Err(e) => error!("{:>6} -> rejected: {}", input, e),
    }
  }

  Ok(())
}

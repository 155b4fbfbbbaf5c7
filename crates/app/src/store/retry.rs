//! Bounded connection retry used at startup.

use std::{error::Error as StdError, future::Future, time::Duration};

use thiserror::Error;
use tokio::time::sleep;
use tracing::{error, warn};

/// Fixed attempt count and fixed delay between attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub attempts: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: 5,
            delay: Duration::from_millis(2_000),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConnectError<E>
where
    E: StdError + 'static,
{
    #[error("invalid connection settings")]
    Invalid(#[source] E),

    #[error("failed to connect after {attempts} attempts")]
    Exhausted {
        attempts: u32,
        #[source]
        source: E,
    },
}

/// Run `connect` until it succeeds or the policy's attempts are used up.
///
/// `connect` receives the 1-based attempt number. A policy with zero attempts still tries once.
///
/// # Errors
///
/// Returns [`ConnectError::Exhausted`] carrying the last failure.
pub async fn connect_with_retry<T, E, F, Fut>(
    policy: &RetryPolicy,
    mut connect: F,
) -> Result<T, ConnectError<E>>
where
    E: StdError + 'static,
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let attempts = policy.attempts.max(1);
    let mut attempt = 1;

    loop {
        match connect(attempt).await {
            Ok(connected) => return Ok(connected),
            Err(source) if attempt >= attempts => {
                error!(attempt, attempts, "connection attempt failed, giving up: {source}");

                return Err(ConnectError::Exhausted { attempts, source });
            }
            Err(source) => {
                warn!(attempt, attempts, "connection attempt failed: {source}");

                sleep(policy.delay).await;

                attempt += 1;
            }
        }
    }
}

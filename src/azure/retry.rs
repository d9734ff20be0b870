//! Bounded retry for flaky az queries.

use crate::AnyError;
use std::time::Duration;

/// Run `op` until it succeeds or `retries` extra attempts are used up.
///
/// The pause starts at `delay` and doubles after every failure. The last
/// error is returned when every attempt failed.
pub fn with_retry<T, F>(retries: u32, delay: Duration, what: &str, mut op: F) -> Result<T, AnyError>
where
    F: FnMut() -> Result<T, AnyError>,
{
    let mut pause = delay;
    let mut attempt = 0;
    loop {
        match op() {
            Ok(value) => {
                if attempt > 0 {
                    log::info!("{what}: succeeded on attempt {}", attempt + 1);
                }
                return Ok(value);
            }
            Err(e) if attempt < retries => {
                attempt += 1;
                log::warn!(
                    "{what}: attempt {attempt}/{total} failed: {e}",
                    total = retries + 1
                );
                std::thread::sleep(pause);
                pause = pause.saturating_mul(2);
            }
            Err(e) => return Err(e),
        }
    }
}

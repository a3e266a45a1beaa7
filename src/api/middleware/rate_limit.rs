//! Per-IP rate limiting using the token bucket algorithm.

use anyhow::{Context, Result};
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use std::time::Duration;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

/// Creates a rate limiter keyed by the client socket address.
///
/// # Limits
///
/// - **Rate**: `per_second` tokens replenished per second, one every
///   `1s / per_second`
/// - **Burst**: up to `burst` requests at once
///
/// Requests exceeding the limit receive `429 Too Many Requests`. The router must
/// be served with connect info so the peer address is available.
///
/// # Errors
///
/// Returns an error if either value is zero, or if `per_second` exceeds one
/// token per nanosecond.
///
/// # Example
///
/// ```rust,ignore
/// let api = character_routes(state.clone()).layer(rate_limit::layer(2, 100)?);
/// ```
pub fn layer(
    per_second: u64,
    burst: u32,
) -> Result<GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>> {
    let nanos = 1_000_000_000u64.checked_div(per_second).unwrap_or(0);

    // The builder takes the replenish interval, not a rate.
    let governor_conf = GovernorConfigBuilder::default()
        .period(Duration::from_nanos(nanos))
        .burst_size(burst)
        .finish()
        .context("Rate limit values must be greater than zero")?;

    Ok(GovernorLayer::new(Arc::new(governor_conf)))
}

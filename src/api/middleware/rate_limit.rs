//! Per-IP rate limiting using the token bucket algorithm.

use axum::Router;
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{KeyExtractor, PeerIpKeyExtractor, SmartIpKeyExtractor},
};

use crate::state::AppState;

/// Token bucket parameters for a group of routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    /// Public pricing lookup.
    ///
    /// - **Rate**: 2 requests per second
    /// - **Burst**: 30 requests
    Public,
    /// Admin endpoints, login included.
    ///
    /// - **Rate**: 1 request per second
    /// - **Burst**: 10 requests
    Secure,
}

impl Limit {
    fn per_second(self) -> u64 {
        match self {
            Limit::Public => 2,
            Limit::Secure => 1,
        }
    }

    fn burst_size(self) -> u32 {
        match self {
            Limit::Public => 30,
            Limit::Secure => 10,
        }
    }
}

/// Wraps `router` in a rate limiter.
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// - `behind_proxy == false` - socket peer address; the server must be started
///   with connect info
/// - `behind_proxy == true` - `X-Forwarded-For` / `X-Real-IP` / `Forwarded`,
///   falling back to the peer address. Only safe behind a trusted proxy.
///
/// # Example
///
/// ```rust,ignore
/// let public = rate_limit::apply(api::routes::public_routes(), Limit::Public, false);
/// ```
pub fn apply(router: Router<AppState>, limit: Limit, behind_proxy: bool) -> Router<AppState> {
    if behind_proxy {
        router.layer(build(SmartIpKeyExtractor, limit))
    } else {
        router.layer(build(PeerIpKeyExtractor, limit))
    }
}

fn build<K: KeyExtractor>(
    key_extractor: K,
    limit: Limit,
) -> GovernorLayer<K, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(key_extractor)
            .per_second(limit.per_second())
            .burst_size(limit.burst_size())
            .finish()
            .expect("rate limit periods and bursts are non-zero"),
    );

    GovernorLayer::new(governor_conf)
}

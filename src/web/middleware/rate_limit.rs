//! Rate limiting for the submission routes using a token bucket.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{KeyExtractor, PeerIpKeyExtractor, SmartIpKeyExtractor},
};

/// Rate limiter type produced by [`submission_layer`].
pub type SubmissionLimiter<K> = GovernorLayer<K, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Creates a rate limiter for comment and reply submissions.
///
/// # Limits
///
/// - **Replenish**: one request every 2 seconds
/// - **Burst**: 10 requests
///
/// Requests exceeding the limit receive `429 Too Many Requests`. Keys are
/// client IPs as produced by `key_extractor`.
pub fn submission_layer<K>(key_extractor: K) -> SubmissionLimiter<K>
where
    K: KeyExtractor,
{
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(2)
            .burst_size(10)
            .key_extractor(key_extractor)
            .finish()
            .expect("rate limit quota is non-zero"),
    );

    GovernorLayer::new(governor_conf)
}

/// Limiter keyed by the socket peer address.
pub fn peer_layer() -> SubmissionLimiter<PeerIpKeyExtractor> {
    submission_layer(PeerIpKeyExtractor)
}

/// Limiter keyed by `X-Forwarded-For` / `X-Real-IP`, for deployments behind
/// a trusted reverse proxy.
pub fn proxy_layer() -> SubmissionLimiter<SmartIpKeyExtractor> {
    submission_layer(SmartIpKeyExtractor)
}

//! Per-client token bucket protecting the `/api` scope.

use actix_governor::governor::clock::QuantaInstant;
use actix_governor::governor::middleware::NoOpMiddleware;
use actix_governor::{GovernorConfig, GovernorConfigBuilder, PeerIpKeyExtractor};

use crate::models::config::RateLimitSettings;

pub type ApiGovernorConfig = GovernorConfig<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>>;

/// Builds the limiter configuration, or `None` when a setting is zero.
pub fn governor_config(settings: &RateLimitSettings) -> Option<ApiGovernorConfig> {
    GovernorConfigBuilder::default()
        .seconds_per_request(settings.seconds_per_request)
        .burst_size(settings.burst_size)
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_build_a_limiter() {
        assert!(governor_config(&RateLimitSettings::default()).is_some());
    }

    #[test]
    fn zero_burst_is_rejected() {
        let settings = RateLimitSettings {
            seconds_per_request: 1,
            burst_size: 0,
        };
        assert!(governor_config(&settings).is_none());
    }
}

use std::{sync::Arc, time::Duration};

use insightchef_core::application::InsightChefService;

use crate::{application::rate_limit::RateLimiter, args::Args};

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: InsightChefService,
    pub rate_limiter: Arc<RateLimiter>,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: InsightChefService) -> Self {
        let rate_limiter = RateLimiter::new(
            args.server.rate_limit_max,
            Duration::from_secs(args.server.rate_limit_window_secs),
        );

        Self {
            args,
            service,
            rate_limiter: Arc::new(rate_limiter),
        }
    }
}

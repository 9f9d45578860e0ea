use std::sync::Arc;

use crate::config::Config;
use crate::matching::{MatchEngine, RuleBasedMatcher};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable matching backend. Default: RuleBasedMatcher.
    pub matcher: Arc<dyn MatchEngine>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            matcher: Arc::new(RuleBasedMatcher::default()),
        }
    }
}

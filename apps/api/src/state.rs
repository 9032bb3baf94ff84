use std::sync::Arc;

use crate::config::Config;
use crate::critique::rubric::KeywordRubric;
use crate::grammar::GrammarClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Fixed purpose-to-keyword tables. Built once at startup, read-only
    /// for the process lifetime, passed explicitly into the scorer.
    pub rubric: Arc<KeywordRubric>,
    pub grammar: GrammarClient,
}

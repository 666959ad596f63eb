//! Service mode and capability bindings.
//!
//! Whether the session runs against the live language model or the
//! offline fallbacks is decided once, at construction, from the
//! configuration; nothing probes the environment per call.

use std::sync::Arc;

use crate::adapters::fallback::{FallbackCaseGenerator, FallbackEvaluator, FallbackInterrogator};
use crate::adapters::gemini::{GeminiClient, GeminiConfig};
use crate::adapters::offline::{Casebook, HeuristicEvaluator, KeywordResolver};
use crate::config::AppConfig;
use crate::ports::{CaseGenerator, Interrogator, SolutionEvaluator};

/// The three capability bindings a session runs against.
#[derive(Clone)]
pub struct ServiceBindings {
    pub generator: Arc<dyn CaseGenerator>,
    pub interrogator: Arc<dyn Interrogator>,
    pub evaluator: Arc<dyn SolutionEvaluator>,
}

impl ServiceBindings {
    /// Creates bindings from explicit port implementations.
    pub fn new(
        generator: Arc<dyn CaseGenerator>,
        interrogator: Arc<dyn Interrogator>,
        evaluator: Arc<dyn SolutionEvaluator>,
    ) -> Self {
        Self {
            generator,
            interrogator,
            evaluator,
        }
    }
}

/// Explicit selection between live and offline behavior.
pub enum ServiceMode {
    /// Live capabilities, each shielded by its offline fallback.
    Live(ServiceBindings),
    /// Offline fallbacks only.
    Offline,
}

impl ServiceMode {
    /// Selects the mode from configuration: live when an API key is
    /// present, offline otherwise.
    pub fn from_config(config: &AppConfig) -> Self {
        if !config.ai.has_api_key() {
            tracing::info!("no API key configured, running offline");
            return Self::Offline;
        }

        use secrecy::ExposeSecret;
        let key = config
            .ai
            .api_key
            .as_ref()
            .map(|k| k.expose_secret().clone())
            .unwrap_or_default();
        let client = Arc::new(GeminiClient::new(
            GeminiConfig::new(key)
                .with_model(config.ai.model.clone())
                .with_base_url(config.ai.base_url.clone())
                .with_timeout(config.ai.timeout())
                .with_history_window(config.ai.history_window),
        ));

        Self::Live(ServiceBindings::new(
            client.clone(),
            client.clone(),
            client,
        ))
    }

    /// Resolves the mode into concrete bindings.
    ///
    /// Live bindings are wrapped in the fallback decorators so that a
    /// live failure degrades to offline behavior instead of surfacing.
    pub fn bind(self) -> ServiceBindings {
        match self {
            Self::Offline => ServiceBindings::new(
                Arc::new(Casebook::builtin()),
                Arc::new(KeywordResolver::new()),
                Arc::new(HeuristicEvaluator::new()),
            ),
            Self::Live(bindings) => ServiceBindings::new(
                Arc::new(FallbackCaseGenerator::new(
                    bindings.generator,
                    Casebook::builtin(),
                )),
                Arc::new(FallbackInterrogator::new(
                    bindings.interrogator,
                    KeywordResolver::new(),
                )),
                Arc::new(FallbackEvaluator::new(
                    bindings.evaluator,
                    HeuristicEvaluator::new(),
                )),
            ),
        }
    }
}

//! Application state
//!
//! Holds the shared state for the Axum application including
//! the transformation engine, delivery gateway, and configuration.

use std::sync::Arc;

use bridge_common::AppConfig;
use bridge_core::MessageDelivery;
use bridge_transform::TransformEngine;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Transformation engine with the mapping registry
    engine: Arc<TransformEngine>,
    /// Delivery gateway for outbound messages
    delivery: Arc<dyn MessageDelivery>,
    /// Application configuration
    config: Arc<AppConfig>,
}

impl AppState {
    /// Create a new AppState
    ///
    /// The delivery gateway comes in as a trait object so tests can swap
    /// the homeserver client for a recording stub.
    pub fn new(
        engine: TransformEngine,
        delivery: Arc<dyn MessageDelivery>,
        config: AppConfig,
    ) -> Self {
        Self {
            engine: Arc::new(engine),
            delivery,
            config: Arc::new(config),
        }
    }

    /// Get the transformation engine
    pub fn engine(&self) -> &TransformEngine {
        &self.engine
    }

    /// Get the delivery gateway
    pub fn delivery(&self) -> &dyn MessageDelivery {
        self.delivery.as_ref()
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("engine", &"TransformEngine")
            .field("delivery", &"dyn MessageDelivery")
            .field("config", &"AppConfig")
            .finish()
    }
}

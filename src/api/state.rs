//! Application state for the year-end bonus API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::{Arc, Mutex};

use tracing::warn;

use crate::calculation::CalculationSession;
use crate::config::ConfigLoader;
use crate::error::EngineResult;

/// Shared application state.
///
/// Holds the loaded configuration and the single calculation session whose
/// month selection persists between requests. The session lock also keeps
/// calculations from overlapping.
#[derive(Clone)]
pub struct AppState {
    /// The loaded calculator configuration.
    config: Arc<ConfigLoader>,
    /// The user's calculation session.
    session: Arc<Mutex<CalculationSession>>,
}

impl AppState {
    /// Creates a new application state with an empty session.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
            session: Arc::new(Mutex::new(CalculationSession::new())),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Runs `f` with exclusive access to the session.
    ///
    /// If an earlier holder panicked, the session is reset and the lock
    /// recovered, so one failed request cannot block the ones after it.
    pub fn with_session<T>(
        &self,
        f: impl FnOnce(&mut CalculationSession) -> EngineResult<T>,
    ) -> EngineResult<T> {
        let mut session = self.session.lock().unwrap_or_else(|poisoned| {
            warn!("Calculation session lock was poisoned, resetting the session");
            self.session.clear_poison();
            let mut session = poisoned.into_inner();
            session.reset();
            session
        });
        f(&mut session)
    }
}

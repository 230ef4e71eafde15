//! Configuration types for the year-end bonus service.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from `calculator.yaml`. The tax tables live in code,
//! not here.

use serde::{Deserialize, Serialize};

use crate::models::Installment;

/// Where the HTTP server listens.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    /// The host or IP address to bind.
    pub host: String,
    /// The TCP port to bind.
    pub port: u16,
}

/// Values a blank calculation form starts with.
///
/// Request fields that are omitted fall back to these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormDefaults {
    /// The installment selected by default.
    pub installment: Installment,
    /// Whether INSS is withheld by default.
    pub deduct_inss: bool,
    /// Whether IRRF is withheld by default.
    pub deduct_irrf: bool,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            installment: Installment::Full,
            deduct_inss: true,
            deduct_irrf: true,
        }
    }
}

/// The complete calculator configuration loaded from YAML.
#[derive(Debug, Clone, Deserialize)]
pub struct CalculatorConfig {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Defaults applied to incomplete forms.
    #[serde(default)]
    pub form_defaults: FormDefaults,
}

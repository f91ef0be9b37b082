//! Configuration for schema inference

use serde::{Deserialize, Serialize};

/// Configuration for schema inference
///
/// A plain value passed explicitly to the classifier and exporter; the
/// engine holds no process-wide state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InferenceConfig {
    /// Padding added to the first observed string length when computing a
    /// `VARCHAR` width. Widths are computed from the first observed value
    /// only; there is no cross-record widening.
    pub padding_factor: usize,

    /// `VARCHAR` width assigned to absent or null values
    pub null_width: usize,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            padding_factor: 12,
            null_width: 50,
        }
    }
}

impl InferenceConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for custom configuration
    pub fn builder() -> InferenceConfigBuilder {
        InferenceConfigBuilder::default()
    }
}

/// Builder for InferenceConfig
#[derive(Debug, Default)]
pub struct InferenceConfigBuilder {
    config: InferenceConfig,
}

impl InferenceConfigBuilder {
    /// Set the padding added to inferred VARCHAR widths
    pub fn padding_factor(mut self, padding: usize) -> Self {
        self.config.padding_factor = padding;
        self
    }

    /// Set the VARCHAR width used for null values
    pub fn null_width(mut self, width: usize) -> Self {
        self.config.null_width = width;
        self
    }

    /// Build the configuration
    pub fn build(self) -> InferenceConfig {
        self.config
    }
}

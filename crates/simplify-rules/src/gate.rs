//! Whether the `simplify` category is currently enabled.

use crate::diagnostic::CATEGORY;
use simplify_config::{ConfigSource, WarningConfig};

/// Reads the host's warning selection on every call.
pub struct WarningGate {
    source: Box<dyn ConfigSource>,
}

impl WarningGate {
    pub fn new(source: impl ConfigSource + 'static) -> Self {
        Self {
            source: Box::new(source),
        }
    }

    pub fn enabled(&self) -> bool {
        Self::allows(&self.source.warning_config())
    }

    /// Resolve a selection. Unrecognized selections disable the category.
    pub fn allows(config: &WarningConfig) -> bool {
        match config {
            WarningConfig::All => true,
            WarningConfig::Except(excluded) => !excluded.contains(CATEGORY),
            WarningConfig::Only(included) => included.contains(CATEGORY),
            WarningConfig::Unrecognized => {
                tracing::trace!("unrecognized warning selection, {CATEGORY} disabled");
                false
            }
        }
    }
}

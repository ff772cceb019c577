//! Which warning categories the host currently has enabled.

use std::collections::BTreeSet;
use std::sync::{Arc, RwLock};

/// The host's warning selection.
///
/// Mirrors the three shapes a byte compiler accepts for its warning list:
/// `true` (everything), `("not" a b ...)` (everything except), and
/// `(a b ...)` (only these). Anything else is kept as `Unrecognized` so the
/// consumer can decide how to treat it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WarningConfig {
    #[default]
    All,
    Except(BTreeSet<String>),
    Only(BTreeSet<String>),
    Unrecognized,
}

impl WarningConfig {
    pub fn except<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        WarningConfig::Except(categories.into_iter().map(Into::into).collect())
    }

    pub fn only<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        WarningConfig::Only(categories.into_iter().map(Into::into).collect())
    }

    /// No categories at all (`warnings = false`).
    pub fn none() -> Self {
        WarningConfig::Only(BTreeSet::new())
    }
}

impl From<toml::Value> for WarningConfig {
    fn from(value: toml::Value) -> Self {
        match value {
            toml::Value::Boolean(true) => WarningConfig::All,
            toml::Value::Boolean(false) => WarningConfig::none(),
            toml::Value::Array(items) => {
                let names: Option<Vec<String>> = items
                    .into_iter()
                    .map(|item| match item {
                        toml::Value::String(s) => Some(s),
                        _ => None,
                    })
                    .collect();
                match names {
                    Some(names) if names.first().map(String::as_str) == Some("not") => {
                        WarningConfig::except(names.into_iter().skip(1))
                    }
                    Some(names) => WarningConfig::only(names),
                    None => WarningConfig::Unrecognized,
                }
            }
            _ => WarningConfig::Unrecognized,
        }
    }
}

/// Read access to the host's current warning selection.
///
/// Called on every dispatch; implementations must return the live value.
pub trait ConfigSource: Send + Sync {
    fn warning_config(&self) -> WarningConfig;
}

impl ConfigSource for WarningConfig {
    fn warning_config(&self) -> WarningConfig {
        self.clone()
    }
}

/// A warning selection the host can change while compilation is running.
#[derive(Debug, Clone, Default)]
pub struct SharedConfig {
    inner: Arc<RwLock<WarningConfig>>,
}

impl SharedConfig {
    pub fn new(config: WarningConfig) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
        }
    }

    /// Replace the current selection. Visible to the next read.
    pub fn set(&self, config: WarningConfig) {
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        *guard = config;
    }

    pub fn get(&self) -> WarningConfig {
        self.inner.read().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl ConfigSource for SharedConfig {
    fn warning_config(&self) -> WarningConfig {
        self.get()
    }
}

impl<F> ConfigSource for F
where
    F: Fn() -> WarningConfig + Send + Sync,
{
    fn warning_config(&self) -> WarningConfig {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(src: &str) -> WarningConfig {
        let table: toml::Table = src.parse().unwrap();
        WarningConfig::from(table.get("warnings").cloned().unwrap())
    }

    #[test]
    fn test_shapes() {
        assert_eq!(parse("warnings = true"), WarningConfig::All);
        assert_eq!(parse("warnings = false"), WarningConfig::none());
        assert_eq!(
            parse(r#"warnings = ["not", "simplify", "obsolete"]"#),
            WarningConfig::except(["simplify", "obsolete"])
        );
        assert_eq!(
            parse(r#"warnings = ["simplify", "free-vars"]"#),
            WarningConfig::only(["simplify", "free-vars"])
        );
    }

    #[test]
    fn test_unrecognized_shapes() {
        assert_eq!(parse("warnings = 3"), WarningConfig::Unrecognized);
        assert_eq!(parse(r#"warnings = "all""#), WarningConfig::Unrecognized);
        assert_eq!(
            parse(r#"warnings = ["simplify", 1]"#),
            WarningConfig::Unrecognized
        );
    }

    #[test]
    fn test_bare_not_excludes_nothing() {
        assert_eq!(
            parse(r#"warnings = ["not"]"#),
            WarningConfig::Except(BTreeSet::new())
        );
    }

    #[test]
    fn test_shared_config_sees_updates() {
        let shared = SharedConfig::new(WarningConfig::All);
        let reader = shared.clone();
        assert_eq!(reader.warning_config(), WarningConfig::All);

        shared.set(WarningConfig::only(["obsolete"]));
        assert_eq!(reader.warning_config(), WarningConfig::only(["obsolete"]));
    }

    #[test]
    fn test_closure_source() {
        let source = || WarningConfig::except(["simplify"]);
        assert_eq!(source.warning_config(), WarningConfig::except(["simplify"]));
    }
}

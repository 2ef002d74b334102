//! Named-check registration.
//!
//! The host hands over an optional JSON mapping of check name to enabled flag.
//! Without a mapping every check runs; with one, a check runs unless it is
//! listed with a value other than `true`.

use std::sync::Arc;

use serde_json::Value;

use crate::check::{Check, OrderCheck};

/// Errors from resolving which checks are enabled.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("conf must be a map of check names to booleans, got {0}")]
    InvalidConfig(String),
}

/// All checks known to the host, in registration order.
#[derive(Clone, Default)]
pub struct Registry {
    checks: Vec<Arc<dyn Check>>,
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in check.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(OrderCheck::new()));
        registry
    }

    /// Add a check. A check with the same name replaces the earlier one.
    pub fn register(&mut self, check: Arc<dyn Check>) {
        match self.checks.iter().position(|c| c.name() == check.name()) {
            Some(i) => self.checks[i] = check,
            None => self.checks.push(check),
        }
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.checks.iter().map(|c| c.name()).collect()
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Check>> {
        self.checks.iter().find(|c| c.name() == name).cloned()
    }

    /// Resolve the enabled checks from the host mapping.
    pub fn enabled(&self, conf: Option<&Value>) -> Result<Vec<Arc<dyn Check>>, RegistryError> {
        let Some(conf) = conf else {
            return Ok(self.checks.clone());
        };
        let map = conf
            .as_object()
            .ok_or_else(|| RegistryError::InvalidConfig(value_kind(conf).to_string()))?;

        for name in map.keys() {
            if self.get(name).is_none() {
                tracing::debug!(check = %name, "ignoring unknown check in config");
            }
        }

        Ok(self
            .checks
            .iter()
            .filter(|c| match map.get(c.name()) {
                None => true,
                Some(value) => value.as_bool().unwrap_or(false),
            })
            .cloned()
            .collect())
    }

    /// Enabled state of every registered check, in registration order.
    pub fn states(&self, conf: Option<&Value>) -> Result<Vec<(&'static str, bool)>, RegistryError> {
        let enabled: Vec<&'static str> = self.enabled(conf)?.iter().map(|c| c.name()).collect();
        Ok(self
            .checks
            .iter()
            .map(|c| (c.name(), enabled.contains(&c.name())))
            .collect())
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

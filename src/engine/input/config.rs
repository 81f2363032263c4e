// Input configuration and remapping

use super::action::{default_bindings, Action, InputSource};
use std::collections::HashMap;

/// Maps input sources (keys) to driver actions
#[derive(Debug, Clone, Default)]
pub struct InputConfig {
    /// A source drives at most one action
    bindings: HashMap<InputSource, Action>,
}

impl InputConfig {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration from a list of bindings
    pub fn from_bindings(bindings: Vec<(InputSource, Action)>) -> Self {
        let mut config = Self::new();
        for (source, action) in bindings {
            config.bind(source, action);
        }
        config
    }

    /// Configuration with the default key bindings
    pub fn with_defaults() -> Self {
        Self::from_bindings(default_bindings())
    }

    /// Bind an input source to an action, replacing any earlier binding
    pub fn bind(&mut self, source: InputSource, action: Action) {
        self.bindings.insert(source, action);
    }

    /// Get the action bound to an input source
    pub fn get_action(&self, source: InputSource) -> Option<Action> {
        self.bindings.get(&source).copied()
    }
}

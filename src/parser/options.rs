//! Parser configuration

/// Blueprint every class may derive from.
pub const DEFAULT_BLUEPRINT: &str = "Application";

/// Settings that change what the parser accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserOptions {
    blueprints: Vec<String>,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            blueprints: vec![DEFAULT_BLUEPRINT.to_string()],
        }
    }
}

impl ParserOptions {
    /// Allow one more blueprint name after ':' in class definitions.
    pub fn with_blueprint(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !self.allows_blueprint(&name) {
            self.blueprints.push(name);
        }
        self
    }

    pub fn blueprints(&self) -> &[String] {
        &self.blueprints
    }

    pub fn allows_blueprint(&self, name: &str) -> bool {
        self.blueprints.iter().any(|b| b == name)
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Namespace assumed when an identifier string carries none.
pub const DEFAULT_NAMESPACE: &str = "minecraft";

/// A namespaced symbolic name, written `namespace:path` (e.g. `minecraft:cod`).
///
/// Namespaces may contain `[a-z0-9_.-]`; paths additionally allow `/`.
/// A bare `path` or an empty namespace (`:path`) falls back to
/// [`DEFAULT_NAMESPACE`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    namespace: String,
    path: String,
}

impl Identifier {
    pub fn new(namespace: &str, path: &str) -> Result<Self, IdentifierError> {
        let namespace = if namespace.is_empty() {
            DEFAULT_NAMESPACE
        } else {
            namespace
        };
        if !namespace.chars().all(is_namespace_char) {
            return Err(IdentifierError::InvalidNamespace(format!(
                "{namespace}:{path}"
            )));
        }
        if path.is_empty() || !path.chars().all(is_path_char) {
            return Err(IdentifierError::InvalidPath(format!("{namespace}:{path}")));
        }
        Ok(Self {
            namespace: namespace.to_string(),
            path: path.to_string(),
        })
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl FromStr for Identifier {
    type Err = IdentifierError;

    /// Parse `namespace:path`, splitting at the first `:`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((namespace, path)) => Self::new(namespace, path),
            None => Self::new(DEFAULT_NAMESPACE, s),
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

fn is_namespace_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '_' | '.' | '-')
}

fn is_path_char(c: char) -> bool {
    is_namespace_char(c) || c == '/'
}

/// Identifies an item in the catalog. Cheap to copy and compare; key equality
/// is item identity, regardless of which spelling resolved to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemKey(pub u32);

#[derive(Debug, Clone, thiserror::Error)]
pub enum IdentifierError {
    #[error("invalid character in namespace of '{0}'")]
    InvalidNamespace(String),
    #[error("invalid character in path of '{0}'")]
    InvalidPath(String),
}

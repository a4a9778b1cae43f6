use serde::{Deserialize, Serialize};
use thiserror::Error;

use autobuild_config::DEFAULT_PRODUCT_NAME;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("React code cannot be empty.")]
    EmptySource,
}

/// Raw form contents as typed by the user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildInput {
    pub product_name: String,
    pub source_code: String,
}

impl BuildInput {
    pub fn new(product_name: impl Into<String>, source_code: impl Into<String>) -> Self {
        Self {
            product_name: product_name.into(),
            source_code: source_code.into(),
        }
    }
}

/// Sanitized, immutable description of one build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildRequest {
    product_name: String,
    package_name: String,
    source_code: String,
}

/// Keeps alphanumerics, `-` and `_`. Falls back to the default product name
/// when nothing survives.
pub fn sanitize_product_name(raw: &str) -> String {
    let sanitized: String = raw
        .trim()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '-' || *c == '_')
        .collect();

    if sanitized.is_empty() {
        DEFAULT_PRODUCT_NAME.to_string()
    } else {
        sanitized
    }
}

impl BuildRequest {
    pub fn from_input(input: &BuildInput) -> Self {
        let product_name = sanitize_product_name(&input.product_name);
        let package_name = product_name.to_lowercase();
        Self {
            product_name,
            package_name,
            source_code: input.source_code.trim().to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), RequestError> {
        if self.source_code.is_empty() {
            return Err(RequestError::EmptySource);
        }
        Ok(())
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    pub fn source_code(&self) -> &str {
        &self.source_code
    }
}

use thiserror::Error;
use wasm_bindgen::JsValue;

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Failures raised by the ledger, its storage and the identity bridge.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("No transaction at position {index} (list has {len})")]
    InvalidIndex { index: usize, len: usize },
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Identity service unavailable: {0}")]
    IdentityUnavailable(String),
}

impl LedgerError {
    /// Wraps a browser storage exception.
    pub fn storage(err: JsValue) -> Self {
        LedgerError::Storage(describe_js(&err))
    }

    pub fn identity(err: JsValue) -> Self {
        LedgerError::IdentityUnavailable(describe_js(&err))
    }
}

/// Rejections from the entry form. The message is shown inline to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter an amount.")]
    EmptyAmount,
    #[error("Please enter a valid positive number.")]
    NotANumber,
    #[error("Amount must be a valid positive number greater than zero.")]
    NotPositive,
}

fn describe_js(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(value, &JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_mention_positive_numbers() {
        assert!(ValidationError::NotANumber
            .to_string()
            .contains("valid positive number"));
        assert!(ValidationError::NotPositive
            .to_string()
            .contains("valid positive number"));
    }

    #[test]
    fn invalid_index_reports_bounds() {
        let err = LedgerError::InvalidIndex { index: 4, len: 2 };
        assert_eq!(err.to_string(), "No transaction at position 4 (list has 2)");
    }

    #[test]
    fn validation_error_is_transparent() {
        let err = LedgerError::from(ValidationError::EmptyAmount);
        assert_eq!(err.to_string(), "Please enter an amount.");
    }
}

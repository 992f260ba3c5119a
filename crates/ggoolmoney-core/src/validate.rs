//! Input validation for transaction drafts and tab names.
//!
//! Error messages are the Korean strings shown beside the offending form field.

use crate::types::{Tab, TransactionDraft};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("사용처를 입력해주세요.")]
    MissingDescription,
    #[error("유효한 금액을 입력해주세요.")]
    InvalidAmount,
    #[error("탭 이름을 입력해주세요.")]
    MissingTabName,
    #[error("이미 사용 중인 탭 이름입니다.")]
    DuplicateTabName,
}

impl TransactionDraft {
    /// Check the draft, reporting the first invalid field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.description.trim().is_empty() {
            return Err(ValidationError::MissingDescription);
        }
        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(ValidationError::InvalidAmount);
        }
        Ok(())
    }
}

/// Validate a tab name against the existing tabs and return it trimmed.
///
/// `editing` is the id of the tab being renamed; its own current name does not
/// count as a duplicate.
pub fn validate_tab_name(name: &str, tabs: &[Tab], editing: Option<&str>) -> Result<String, ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::MissingTabName);
    }
    if tabs.iter().any(|t| t.name == name && Some(t.id.as_str()) != editing) {
        return Err(ValidationError::DuplicateTabName);
    }
    Ok(name.to_string())
}

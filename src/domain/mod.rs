//! Strongly-typed domain structures for the site and donations.
use std::fmt;
use std::path::{Component, Path, PathBuf};

use chrono::{DateTime, Utc};
use serde_json::Number;
use thiserror::Error;

/// Directory the site is served from (e.g. `./public`).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SiteRoot(PathBuf);

impl SiteRoot {
    pub fn new(path: PathBuf) -> Self {
        Self(path)
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Resolve a relative path within the root.
    pub fn resolve(&self, relative: &RelativePath) -> PathBuf {
        self.0.join(relative.as_path())
    }
}

impl From<PathBuf> for SiteRoot {
    fn from(value: PathBuf) -> Self {
        Self::new(value)
    }
}

/// Path relative to the site root. Cannot climb out of it.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct RelativePath(PathBuf);

impl RelativePath {
    pub fn try_new(path: PathBuf) -> Result<Self, TypeConstraintError> {
        if path.components().any(|c| {
            matches!(
                c,
                Component::ParentDir | Component::RootDir | Component::Prefix(_)
            )
        }) {
            return Err(TypeConstraintError::InvalidPath);
        }

        Ok(Self(path))
    }

    /// Build from a URL path, dropping the leading slashes.
    pub fn try_from_str(input: &str) -> Result<Self, TypeConstraintError> {
        let trimmed = input.trim_start_matches('/');
        Self::try_new(PathBuf::from(trimmed))
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

/// Donation amount exactly as submitted. Always finite and positive.
#[derive(Clone, Debug, PartialEq)]
pub struct Amount(Number);

impl Amount {
    pub fn try_new(value: Number) -> Result<Self, TypeConstraintError> {
        let numeric = value
            .as_f64()
            .filter(|n| n.is_finite())
            .ok_or(TypeConstraintError::NonFiniteAmount)?;
        if numeric <= 0.0 {
            return Err(TypeConstraintError::NonPositiveAmount);
        }
        Ok(Self(value))
    }

    pub fn as_number(&self) -> &Number {
        &self.0
    }

    pub fn into_number(self) -> Number {
        self.0
    }
}

/// A validated donation submission.
#[derive(Clone, Debug, PartialEq)]
pub struct DonationRequest {
    amount: Amount,
    name: Option<String>,
    message: Option<String>,
}

impl DonationRequest {
    pub fn new(amount: Amount, name: Option<String>, message: Option<String>) -> Self {
        Self {
            amount,
            name,
            message,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn into_parts(self) -> (Amount, Option<String>, Option<String>) {
        (self.amount, self.name, self.message)
    }
}

/// `BF-<unix seconds>`. Not unique within a second.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ReceiptId(String);

impl ReceiptId {
    pub fn from_time(issued_at: &DateTime<Utc>) -> Self {
        Self(format!("BF-{}", issued_at.timestamp()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Confirmation handed back for a donation. Never stored.
#[derive(Clone, Debug, PartialEq)]
pub struct Receipt {
    pub id: ReceiptId,
    pub name: String,
    pub amount: Amount,
    pub message: String,
    pub issued_at: DateTime<Utc>,
}

#[derive(Debug, Error)]
pub enum TypeConstraintError {
    #[error("invalid relative path")]
    InvalidPath,
    #[error("amount must be a finite number")]
    NonFiniteAmount,
    #[error("amount must be greater than zero")]
    NonPositiveAmount,
}

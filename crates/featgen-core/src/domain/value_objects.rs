//! Domain value objects: FeatureName, NameStrictness, Layer.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity. A
//! `FeatureName` is the only piece of operator input that reaches the domain;
//! everything else the scaffolder needs is static data.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

// ── NameStrictness ───────────────────────────────────────────────────────────

/// How much checking a feature name gets before it is used as a path segment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameStrictness {
    /// Accept any string verbatim (after trim + lower-case). Empty names,
    /// separators and dots all pass through untouched.
    Permissive,
    /// Require a Dart-style identifier: `[a-z][a-z0-9_]*`.
    #[default]
    Strict,
}

impl NameStrictness {
    pub const fn from_strict_flag(strict: bool) -> Self {
        if strict { Self::Strict } else { Self::Permissive }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Permissive => "permissive",
            Self::Strict => "strict",
        }
    }
}

impl fmt::Display for NameStrictness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── FeatureName ──────────────────────────────────────────────────────────────

/// The operator-supplied feature name, normalised to lower case.
///
/// Substituted verbatim for `{feature}` and, via [`FeatureName::capitalized`],
/// for `{Feature}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeatureName(String);

impl FeatureName {
    /// Normalise `input` (trim, lower-case) and check it against `strictness`.
    pub fn parse(input: &str, strictness: NameStrictness) -> Result<Self, DomainError> {
        let name = input.trim().to_lowercase();

        if strictness == NameStrictness::Strict {
            validate_strict(&name)?;
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First character upper-cased, the rest as-is.
    ///
    /// The name is already lower-case, so this matches the usual
    /// "capitalize" semantics: `wallet` → `Wallet`, `user_profile` →
    /// `User_profile`.
    pub fn capitalized(&self) -> String {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) => {
                let mut out = String::with_capacity(self.0.len());
                out.extend(first.to_uppercase());
                out.push_str(chars.as_str());
                out
            }
            None => String::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn validate_strict(name: &str) -> Result<(), DomainError> {
    let invalid = |reason: String| DomainError::InvalidFeatureName {
        name: name.to_string(),
        reason,
    };

    let Some(first) = name.chars().next() else {
        return Err(invalid("name cannot be empty".into()));
    };

    if !first.is_ascii_lowercase() {
        return Err(invalid(format!("must start with a letter, found '{first}'")));
    }

    if let Some(bad) = name
        .chars()
        .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_'))
    {
        let reason = match bad {
            '/' | '\\' => "name cannot contain path separators".to_string(),
            c if c.is_whitespace() => "name cannot contain whitespace".to_string(),
            c => format!("character '{c}' is not allowed"),
        };
        return Err(invalid(reason));
    }

    Ok(())
}

impl fmt::Display for FeatureName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FeatureName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ── Layer ────────────────────────────────────────────────────────────────────

/// One of the four top-level directories of a feature.
///
/// Files with the same name resolve to different content depending on which
/// layer they sit in (see `ContentCatalog`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    Domain,
    External,
    Infra,
    Presentation,
}

impl Layer {
    pub const ALL: [Layer; 4] = [
        Layer::Domain,
        Layer::External,
        Layer::Infra,
        Layer::Presentation,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Domain => "domain",
            Self::External => "external",
            Self::Infra => "infra",
            Self::Presentation => "presentation",
        }
    }

    /// Exact match on a single path segment.
    pub fn from_segment(segment: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.as_str() == segment)
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}


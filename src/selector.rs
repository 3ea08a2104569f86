//! Version selectors for template variants.
//!
//! A selector is the key a variant is registered under: either an exact
//! semantic version or a semver requirement range. Parsing follows the usual
//! package-manager convention that a bare version string (`"5.12.2"`, with or
//! without a leading `v`) means an exact match, while anything carrying range
//! operators (`"^5.12"`, `">=5.11, <5.13"`) is a requirement.

use std::fmt;
use std::str::FromStr;

use semver::{Version, VersionReq};

use crate::error::RenderError;

/// The matching key of one template variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Matches exactly one version.
    Exact(Version),
    /// Matches every version satisfying a semver requirement.
    Range(VersionReq),
}

impl Selector {
    /// Parse a selector string.
    ///
    /// Tries an exact version first (tolerating a leading `v`), then falls
    /// back to a semver requirement. Fails with
    /// [`RenderError::InvalidSelector`] when the input is neither.
    ///
    /// # Examples
    ///
    /// ```
    /// use gradlegen::selector::Selector;
    ///
    /// assert!(matches!(Selector::parse("5.12.2")?, Selector::Exact(_)));
    /// assert!(matches!(Selector::parse("^5.12")?, Selector::Range(_)));
    /// # Ok::<(), gradlegen::error::RenderError>(())
    /// ```
    pub fn parse(input: &str) -> Result<Self, RenderError> {
        let trimmed = input.trim();
        let bare = trimmed.strip_prefix('v').unwrap_or(trimmed);

        if let Ok(version) = Version::parse(bare) {
            return Ok(Self::Exact(version));
        }

        VersionReq::parse(trimmed).map(Self::Range).map_err(|source| {
            RenderError::InvalidSelector {
                input: trimmed.to_string(),
                source,
            }
        })
    }

    /// Whether this selector matches the given concrete version.
    pub fn matches(&self, version: &Version) -> bool {
        match self {
            Self::Exact(exact) => exact == version,
            Self::Range(req) => req.matches(version),
        }
    }

    /// Whether this is an exact-version selector. Exactness is what the
    /// [`PreferExact`](crate::store::MatchPolicy::PreferExact) tie-break
    /// keys on.
    pub fn is_exact(&self) -> bool {
        matches!(self, Self::Exact(_))
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(version) => version.fmt(f),
            Self::Range(req) => req.fmt(f),
        }
    }
}

impl FromStr for Selector {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

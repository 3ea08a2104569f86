//! Error types for template parsing, resolution, and rendering.
//!
//! Every failure is reported synchronously as a typed error at the call that
//! triggered it. Nothing is retried or suppressed internally; the caller
//! decides user-visible behavior.

use thiserror::Error;

/// Errors raised while resolving a template variant or rendering it.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A variant with an equal selector is already registered.
    ///
    /// Registration compares selectors for equality, not for range overlap.
    /// Overlapping ranges are legal and handled at resolution time by the
    /// store's [`MatchPolicy`](crate::store::MatchPolicy).
    #[error("a template is already registered for selector '{selector}'")]
    DuplicateSelector {
        /// Display form of the selector that was registered twice
        selector: String,
    },

    /// No registered selector matches the requested version.
    #[error("no template variant matches version '{requested}'")]
    NoMatch {
        /// The version that was requested
        requested: String,
    },

    /// More than one selector matches and the store's policy does not
    /// define a winner.
    #[error("version '{requested}' matches multiple selectors: {}", .candidates.join(", "))]
    AmbiguousMatch {
        /// The version that was requested
        requested: String,
        /// Display forms of every selector that matched
        candidates: Vec<String>,
    },

    /// The number of substitution values does not equal the resolved
    /// variant's placeholder count. No partial substitution is performed.
    #[error("template expects {expected} substitution value(s), got {got}")]
    ArityMismatch {
        /// Placeholder count of the resolved variant
        expected: usize,
        /// Number of values the caller supplied
        got: usize,
    },

    /// The selector or version string is not valid semver.
    #[error("invalid version selector '{input}'")]
    InvalidSelector {
        /// The string that failed to parse
        input: String,
        /// The underlying semver parse failure
        #[source]
        source: semver::Error,
    },

    /// A template body failed to parse while populating a store.
    #[error("template syntax error")]
    Template(#[from] ParseError),
}

/// Errors raised while parsing template source text into segments.
///
/// Template source uses `{}` as the placeholder marker and `{{` / `}}` as
/// escapes for literal braces, so any lone brace is a syntax error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A `{` that starts neither a placeholder nor an `{{` escape.
    #[error("unclosed '{{' at byte offset {offset}")]
    UnclosedBrace {
        /// Byte offset of the offending brace in the source text
        offset: usize,
    },

    /// A `}` with no matching opener and no `}}` escape.
    #[error("unmatched '}}' at byte offset {offset}")]
    UnmatchedBrace {
        /// Byte offset of the offending brace in the source text
        offset: usize,
    },
}

/// Errors raised while validating a Maven dependency coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoordinateError {
    /// Input does not split into exactly `group:artifact:version`.
    #[error("expected 'group:artifact:version', got '{input}'")]
    Malformed {
        /// The string that failed validation
        input: String,
    },

    /// One of the three coordinate parts is empty.
    #[error("coordinate '{input}' has an empty segment")]
    EmptySegment {
        /// The string that failed validation
        input: String,
    },

    /// A coordinate part contains whitespace.
    #[error("coordinate '{input}' contains whitespace")]
    Whitespace {
        /// The string that failed validation
        input: String,
    },
}

//! The template store: a fixed catalog of selector-tagged variants.
//!
//! A [`TemplateStore`] is populated once and read-only afterwards. Both
//! [`register`](TemplateStore::register) and
//! [`resolve`](TemplateStore::resolve) only touch immutable data after
//! population, so a store behind a shared reference can serve any number of
//! threads without locking.

use semver::Version;
use tracing::{debug, trace};

use crate::error::RenderError;
use crate::selector::Selector;
use crate::template::Template;

/// How [`TemplateStore::resolve`] behaves when several selectors match the
/// requested version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchPolicy {
    /// Exactly one selector may match; anything else is
    /// [`RenderError::AmbiguousMatch`]. The default.
    #[default]
    RequireUnique,
    /// A single exact-version selector wins over any number of matching
    /// ranges. Ambiguity among ranges alone (or among several exact
    /// selectors, which registration already prevents) still errors.
    PreferExact,
}

/// One registered template variant: a selector plus its parsed body.
#[derive(Debug, Clone)]
pub struct Variant {
    selector: Selector,
    template: Template,
}

impl Variant {
    /// The selector this variant is registered under.
    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    /// The parsed template body.
    pub fn template(&self) -> &Template {
        &self.template
    }
}

/// Immutable catalog of template variants, resolved by version.
#[derive(Debug, Clone, Default)]
pub struct TemplateStore {
    variants: Vec<Variant>,
    policy: MatchPolicy,
}

impl TemplateStore {
    /// Create an empty store with [`MatchPolicy::RequireUnique`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with an explicit match policy.
    pub fn with_policy(policy: MatchPolicy) -> Self {
        Self {
            variants: Vec::new(),
            policy,
        }
    }

    /// The policy this store resolves under.
    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    /// Number of registered variants.
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    /// Whether the store holds no variants.
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Register a variant under a selector.
    ///
    /// Fails with [`RenderError::DuplicateSelector`] when an equal selector
    /// is already present. Equality, not overlap: two distinct ranges that
    /// both cover some version are accepted here and disambiguated (or
    /// rejected) at resolution time by the [`MatchPolicy`].
    pub fn register(&mut self, selector: Selector, template: Template) -> Result<(), RenderError> {
        if self.variants.iter().any(|v| v.selector == selector) {
            return Err(RenderError::DuplicateSelector {
                selector: selector.to_string(),
            });
        }

        debug!(
            selector = %selector,
            arity = template.placeholder_count(),
            "registered template variant"
        );
        self.variants.push(Variant { selector, template });
        Ok(())
    }

    /// Resolve the single variant whose selector matches `version`.
    ///
    /// Fails with [`RenderError::NoMatch`] when nothing matches and never
    /// falls back to a default. With more than one match the outcome depends
    /// on the store's [`MatchPolicy`].
    pub fn resolve(&self, version: &Version) -> Result<&Variant, RenderError> {
        let matched: Vec<&Variant> =
            self.variants.iter().filter(|v| v.selector.matches(version)).collect();

        match matched.as_slice() {
            [] => Err(RenderError::NoMatch {
                requested: version.to_string(),
            }),
            [only] => {
                trace!(version = %version, selector = %only.selector, "resolved template variant");
                Ok(*only)
            }
            several => {
                if self.policy == MatchPolicy::PreferExact {
                    let mut exact = several.iter().filter(|v| v.selector.is_exact());
                    if let (Some(winner), None) = (exact.next(), exact.next()) {
                        trace!(
                            version = %version,
                            selector = %winner.selector,
                            "exact selector won over range matches"
                        );
                        return Ok(*winner);
                    }
                }
                Err(RenderError::AmbiguousMatch {
                    requested: version.to_string(),
                    candidates: several.iter().map(|v| v.selector.to_string()).collect(),
                })
            }
        }
    }
}

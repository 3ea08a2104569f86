//! Rendering: resolve a variant and substitute values into it.

use semver::Version;
use tracing::debug;

use crate::error::RenderError;
use crate::store::TemplateStore;

/// Renders template variants from a borrowed store.
///
/// The renderer is a pure pipeline over the store's immutable data:
/// resolve, validate arity, substitute, concatenate. Identical inputs always
/// produce byte-identical output, and a `Renderer` borrowing a shared store
/// may be used from any number of threads.
#[derive(Debug, Clone, Copy)]
pub struct Renderer<'a> {
    store: &'a TemplateStore,
}

impl<'a> Renderer<'a> {
    /// Create a renderer over an already-populated store.
    pub const fn new(store: &'a TemplateStore) -> Self {
        Self { store }
    }

    /// Render the variant selected by a version string.
    ///
    /// Parses `selector` as a concrete semver version, then delegates to
    /// [`render_version`](Self::render_version).
    pub fn render<S: AsRef<str>>(&self, selector: &str, values: &[S]) -> Result<String, RenderError> {
        let trimmed = selector.trim();
        let version = Version::parse(trimmed.strip_prefix('v').unwrap_or(trimmed)).map_err(
            |source| RenderError::InvalidSelector {
                input: selector.to_string(),
                source,
            },
        )?;
        self.render_version(&version, values)
    }

    /// Render the variant selected by a concrete version.
    ///
    /// Resolution failures from the store propagate unchanged; an arity
    /// mismatch between `values` and the resolved variant fails before any
    /// substitution happens.
    pub fn render_version<S: AsRef<str>>(
        &self,
        version: &Version,
        values: &[S],
    ) -> Result<String, RenderError> {
        let variant = self.store.resolve(version)?;
        debug!(
            version = %version,
            selector = %variant.selector(),
            values = values.len(),
            "rendering template variant"
        );
        variant.template().render(values)
    }
}

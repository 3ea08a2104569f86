//! gradlegen - template resolution and rendering for Gradle build descriptors.
//!
//! Given a target version selector and a dependency coordinate, gradlegen
//! picks exactly one template variant from an immutable catalog, substitutes
//! the caller's values positionally, and returns a ready-to-use
//! `build.gradle.kts`. Writing the result to disk, serving it over HTTP, or
//! invoking Gradle is the caller's business; this crate is the pure
//! select/validate/substitute/concatenate pipeline in the middle.
//!
//! # Core Modules
//!
//! - [`template`] - Positional template parsing (`{}` placeholders,
//!   `{{`/`}}` escapes) and substitution
//! - [`selector`] - Exact-version and semver-range selectors
//! - [`store`] - The immutable variant catalog and its match policies
//! - [`renderer`] - The resolve-then-render pipeline
//! - [`catalog`] - The compiled-in Gradle Kotlin DSL catalog, one variant per
//!   supported JUnit BOM version
//! - [`coordinate`] - Validated `group:artifact:version` dependency
//!   coordinates
//! - [`error`] - Typed errors for every failure path
//!
//! # Example
//!
//! ```
//! use gradlegen::catalog::build_script;
//! use gradlegen::coordinate::Coordinate;
//!
//! let dependency: Coordinate = "net.minestom:minestom-snapshots:1f34e60ea6".parse()?;
//! let script = build_script("5.13.1", &dependency)?;
//! assert!(script.contains("implementation(\"net.minestom:minestom-snapshots:1f34e60ea6\")"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Custom catalogs work the same way, just without the compiled-in store:
//!
//! ```
//! use gradlegen::renderer::Renderer;
//! use gradlegen::selector::Selector;
//! use gradlegen::store::TemplateStore;
//! use gradlegen::template::Template;
//!
//! let mut store = TemplateStore::new();
//! store.register(
//!     Selector::parse("1.0.0")?,
//!     Template::parse("dependency: {}")?,
//! )?;
//!
//! let renderer = Renderer::new(&store);
//! assert_eq!(renderer.render("1.0.0", &["a:b:1"])?, "dependency: a:b:1");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Concurrency
//!
//! Everything after store population is read-only: a populated
//! [`store::TemplateStore`] (the built-in catalog included) can serve
//! resolution and rendering from any number of threads without locking.

pub mod catalog;
pub mod coordinate;
pub mod error;
pub mod renderer;
pub mod selector;
pub mod store;
pub mod template;

pub use catalog::{JUNIT_BOM_VERSIONS, build_script, builtin_store};
pub use coordinate::Coordinate;
pub use error::{CoordinateError, ParseError, RenderError};
pub use renderer::Renderer;
pub use selector::Selector;
pub use store::{MatchPolicy, TemplateStore, Variant};
pub use template::{Segment, Template};

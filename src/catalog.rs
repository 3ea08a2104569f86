//! The built-in Gradle Kotlin DSL catalog.
//!
//! One shared build-script skeleton, parameterized by two slots: the
//! dependency coordinate (left open for the caller) and the JUnit BOM version
//! (bound per variant at catalog construction). Each supported BOM version
//! becomes one store entry with arity 1, so the caller's only job is to
//! supply the dependency line.
//!
//! The catalog is process-wide immutable state built exactly once; there are
//! no mutable globals and no registration after startup.

use std::sync::OnceLock;

use tracing::debug;

use crate::coordinate::Coordinate;
use crate::error::RenderError;
use crate::renderer::Renderer;
use crate::selector::Selector;
use crate::store::TemplateStore;
use crate::template::Template;

/// Shared Gradle Kotlin DSL skeleton. Slot 0 is the dependency coordinate,
/// slot 1 the JUnit BOM version; literal braces are `{{`/`}}`-escaped.
const GRADLE_KTS_SKELETON: &str = r#"plugins {{
    java
}}

group = "com.example"
version = "0.1.0-SNAPSHOT"

repositories {{
    mavenCentral()
}}

dependencies {{
    implementation("{}")

    testImplementation(platform("org.junit:junit-bom:{}"))
    testImplementation("org.junit.jupiter:junit-jupiter")
}}

tasks.test {{
    useJUnitPlatform()
}}
"#;

/// Placeholder position of the BOM version within the skeleton.
const BOM_SLOT: usize = 1;

/// JUnit BOM versions the built-in catalog carries, one variant each.
pub const JUNIT_BOM_VERSIONS: [&str; 3] = ["5.11.4", "5.12.2", "5.13.1"];

/// The built-in store of Gradle build-script variants.
///
/// Built on first access and immutable afterwards; every later call returns
/// the same instance. The catalog data is compiled in, so a failure to build
/// it is a programming error and panics rather than returning `Err`.
pub fn builtin_store() -> &'static TemplateStore {
    static STORE: OnceLock<TemplateStore> = OnceLock::new();
    STORE.get_or_init(|| {
        let skeleton =
            Template::parse(GRADLE_KTS_SKELETON).expect("built-in skeleton parses");
        let mut store = TemplateStore::new();
        for bom in JUNIT_BOM_VERSIONS {
            let variant = skeleton
                .bind(BOM_SLOT, bom)
                .expect("built-in skeleton has a BOM slot");
            let selector = Selector::parse(bom).expect("built-in BOM versions are semver");
            store
                .register(selector, variant)
                .expect("built-in BOM versions are distinct");
        }
        debug!(variants = store.len(), "built-in Gradle catalog initialized");
        store
    })
}

/// Render a ready-to-use `build.gradle.kts` for one dependency.
///
/// `bom` selects the catalog variant (an exact JUnit BOM version such as
/// `"5.12.2"`); `dependency` fills the `implementation(...)` line.
///
/// # Examples
///
/// ```
/// use gradlegen::catalog::build_script;
/// use gradlegen::coordinate::Coordinate;
///
/// let dependency: Coordinate = "com.example:lib:2.0.0".parse()?;
/// let script = build_script("5.12.2", &dependency)?;
/// assert!(script.contains("implementation(\"com.example:lib:2.0.0\")"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn build_script(bom: &str, dependency: &Coordinate) -> Result<String, RenderError> {
    Renderer::new(builtin_store()).render(bom, &[dependency.to_string()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_store_shape() {
        let store = builtin_store();
        assert_eq!(store.len(), JUNIT_BOM_VERSIONS.len());
        for bom in JUNIT_BOM_VERSIONS {
            let version = semver::Version::parse(bom).unwrap();
            let variant = store.resolve(&version).unwrap();
            assert_eq!(variant.template().placeholder_count(), 1);
        }
    }

    #[test]
    fn test_builtin_store_is_a_singleton() {
        assert!(std::ptr::eq(builtin_store(), builtin_store()));
    }

    #[test]
    fn test_build_script_substitutes_both_layers() {
        let dependency: Coordinate = "com.example:lib:2.0.0".parse().unwrap();
        let script = build_script("5.12.2", &dependency).unwrap();
        assert!(script.contains("implementation(\"com.example:lib:2.0.0\")"));
        assert!(
            script.contains("testImplementation(platform(\"org.junit:junit-bom:5.12.2\"))")
        );
    }

    #[test]
    fn test_skeleton_literal_text_survives_verbatim() {
        let dependency: Coordinate = "x:y:1".parse().unwrap();
        let script = build_script("5.11.4", &dependency).unwrap();
        for literal in [
            "plugins {\n    java\n}",
            "group = \"com.example\"",
            "version = \"0.1.0-SNAPSHOT\"",
            "repositories {\n    mavenCentral()\n}",
            "testImplementation(\"org.junit.jupiter:junit-jupiter\")",
            "tasks.test {\n    useJUnitPlatform()\n}",
        ] {
            assert!(script.contains(literal), "missing literal: {literal}");
        }
        // The singular `plugin` block was a template-data bug; the catalog
        // uses the plural form only.
        assert!(!script.contains("plugin {\n"));
    }

    #[test]
    fn test_build_script_unknown_bom() {
        let dependency: Coordinate = "x:y:1".parse().unwrap();
        let err = build_script("9.9.9", &dependency).unwrap_err();
        assert!(matches!(err, RenderError::NoMatch { .. }));
    }
}

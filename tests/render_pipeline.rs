//! End-to-end tests for the resolve/render pipeline through the public API.

use gradlegen::{
    Coordinate, MatchPolicy, RenderError, Renderer, Selector, Template, TemplateStore,
    build_script, builtin_store,
};

#[test]
fn renders_catalog_variant_for_each_bom_version() {
    let dependency: Coordinate = "com.example:lib:2.0.0".parse().unwrap();

    let script = build_script("5.12.2", &dependency).unwrap();
    assert!(script.contains("implementation(\"com.example:lib:2.0.0\")"));
    assert!(script.contains("testImplementation(platform(\"org.junit:junit-bom:5.12.2\"))"));

    // Every variant shares the skeleton and differs only in the BOM line.
    for bom in gradlegen::JUNIT_BOM_VERSIONS {
        let script = build_script(bom, &dependency).unwrap();
        assert!(script.contains(&format!("org.junit:junit-bom:{bom}")));
        assert!(script.starts_with("plugins {\n"));
        assert!(script.contains("useJUnitPlatform()"));
    }
}

#[test]
fn unknown_bom_version_is_no_match() {
    let dependency: Coordinate = "x:y:1".parse().unwrap();
    let err = build_script("9.9.9", &dependency).unwrap_err();
    match err {
        RenderError::NoMatch { requested } => assert_eq!(requested, "9.9.9"),
        other => panic!("expected NoMatch, got {other:?}"),
    }
}

#[test]
fn empty_values_on_unary_variant_is_arity_mismatch() {
    let renderer = Renderer::new(builtin_store());
    let err = renderer.render::<&str>("5.11.4", &[]).unwrap_err();
    match err {
        RenderError::ArityMismatch { expected, got } => {
            assert_eq!(expected, 1);
            assert_eq!(got, 0);
        }
        other => panic!("expected ArityMismatch, got {other:?}"),
    }
}

#[test]
fn rendering_is_deterministic() {
    let dependency: Coordinate = "net.minestom:minestom-snapshots:1f34e60ea6".parse().unwrap();
    let first = build_script("5.13.1", &dependency).unwrap();
    let second = build_script("5.13.1", &dependency).unwrap();
    assert_eq!(first, second);
}

#[test]
fn custom_store_with_range_selectors() {
    let mut store = TemplateStore::with_policy(MatchPolicy::PreferExact);
    store
        .register(
            Selector::parse("^5.11").unwrap(),
            Template::parse("fallback: {}").unwrap(),
        )
        .unwrap();
    store
        .register(
            Selector::parse("5.12.2").unwrap(),
            Template::parse("pinned: {}").unwrap(),
        )
        .unwrap();

    let renderer = Renderer::new(&store);
    // Exact pin wins over the covering range.
    assert_eq!(renderer.render("5.12.2", &["a:b:1"]).unwrap(), "pinned: a:b:1");
    // Other versions in the range fall through to it.
    assert_eq!(renderer.render("5.11.9", &["a:b:1"]).unwrap(), "fallback: a:b:1");
}

#[test]
fn catalog_store_is_shared_and_thread_safe() {
    let dependency: Coordinate = "com.example:lib:2.0.0".parse().unwrap();
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let dependency = dependency.clone();
            std::thread::spawn(move || build_script("5.12.2", &dependency).unwrap())
        })
        .collect();

    let mut outputs: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    outputs.dedup();
    assert_eq!(outputs.len(), 1);
}

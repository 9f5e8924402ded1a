use parking_lot::Mutex;
use styled::{
    EngineConfig, EngineError, ErrorBoundary, StyleEngine, StyledComponent, SweepPolicy, Theme,
    TokenMap, TokenValue, UseStylesOptions,
};
use style_compiler::properties::*;
use style_compiler::{RuleBlock, StyleDefinition, StyleValue};

fn tile_bar() -> StyledComponent {
    StyledComponent::new(
        "TileBar",
        StyleDefinition::new(|theme| {
            Ok(vec![
                (
                    "root".to_owned(),
                    RuleBlock::new()
                        .set(POSITION, "absolute")
                        .set(HEIGHT, 48.0)
                        .set(MARGIN, StyleValue::number(theme.spacing(2.0)))
                        .set(FONT_FAMILY, StyleValue::token("typography.font_family")),
                ),
                (
                    "title".to_owned(),
                    RuleBlock::new()
                        .set(FONT_SIZE, theme.px_to_rem(16.0))
                        .set(OVERFLOW, "hidden"),
                ),
            ])
        }),
    )
}

fn evicting_config() -> EngineConfig {
    EngineConfig {
        sweep: SweepPolicy {
            max_idle_entries: 0,
            max_idle_age: None,
        },
        ..EngineConfig::default()
    }
}

#[test]
fn repeated_acquisition_is_deterministic_across_engines() {
    let _ = env_logger::builder().is_test(true).try_init();

    let run = || {
        let engine = StyleEngine::default();
        let handle = engine.use_styles(&tile_bar()).unwrap();
        let classes = (
            handle.class("root").to_owned(),
            handle.class("title").to_owned(),
        );
        drop(handle);
        (classes, engine.extract_critical_styles())
    };

    // Two independent engines stand in for two processes; class names and
    // rule text must match byte for byte (hydration requirement).
    let (classes_a, css_a) = run();
    let (classes_b, css_b) = run();
    assert_eq!(classes_a, classes_b);
    assert_eq!(css_a, css_b);
    assert!(css_a.contains("margin:16px"), "got: {css_a}");
}

#[test]
fn consumer_classes_are_appended_never_substituted() {
    let engine = StyleEngine::default();
    let handle = engine
        .use_styles_with(
            &tile_bar(),
            UseStylesOptions::new().class("root", "consumer-root"),
        )
        .unwrap();

    let list: Vec<&str> = handle.class("root").split(' ').collect();
    assert_eq!(list.len(), 2);
    // Base generated class first, consumer class after: additive, the base
    // is never dropped.
    assert!(list[0].starts_with("w-"));
    assert_eq!(list[1], "consumer-root");

    // Untouched slots carry just the generated class.
    assert_eq!(handle.class("title").split(' ').count(), 1);
}

#[test]
fn conditional_consumer_classes() {
    let engine = StyleEngine::default();
    let handle = engine
        .use_styles_with(
            &tile_bar(),
            UseStylesOptions::new()
                .class_if(true, "root", "with-subtitle")
                .class_if(false, "title", "never-applied"),
        )
        .unwrap();
    assert!(handle.class("root").ends_with("with-subtitle"));
    assert!(!handle.class("title").contains("never-applied"));
}

#[test]
fn inline_override_registers_after_base_and_wins_order() {
    let engine = StyleEngine::default();
    let override_component = StyledComponent::new(
        "TileBar::banner",
        StyleDefinition::new(|_| {
            Ok(vec![(
                "root".to_owned(),
                RuleBlock::new().set(MARGIN, 0),
            )])
        }),
    );

    let handle = engine
        .use_styles_with(
            &tile_bar(),
            UseStylesOptions::new().override_with(override_component),
        )
        .unwrap();

    // Highest precedence class is last in the slot list.
    let list: Vec<&str> = handle.class("root").split(' ').collect();
    assert_eq!(list.len(), 2);
    assert_ne!(list[0], list[1]);

    // The override's rule text serializes after the base sheet, so it wins
    // ties under equal specificity.
    let css = engine.extract_critical_styles();
    let base_at = css.find("margin:16px").expect("base rule present");
    let override_at = css.find("margin:0").expect("override rule present");
    assert!(base_at < override_at);
}

#[test]
fn equal_specificity_resolves_by_registration_order() {
    let engine = StyleEngine::default();
    let component = |name: &str, color: &'static str| {
        StyledComponent::new(
            name,
            StyleDefinition::new(move |_| {
                Ok(vec![("root".to_owned(), RuleBlock::new().set(COLOR, color))])
            }),
        )
    };

    let _a = engine.use_styles(&component("Alpha", "red")).unwrap();
    let _b = engine.use_styles(&component("Beta", "green")).unwrap();
    let _c = engine.use_styles(&component("Gamma", "blue")).unwrap();

    let css = engine.extract_critical_styles();
    let red = css.find("color:red").unwrap();
    let green = css.find("color:green").unwrap();
    let blue = css.find("color:blue").unwrap();
    assert!(red < green && green < blue);
}

#[test]
fn handles_release_on_drop_and_sweep_evicts() {
    let engine = StyleEngine::new(evicting_config());
    let component = tile_bar();

    let first = engine.use_styles(&component).unwrap();
    let second = engine.use_styles(&component).unwrap();
    assert_eq!(engine.refs("TileBar"), Some(2));

    drop(first);
    assert_eq!(engine.refs("TileBar"), Some(1));
    assert!(!engine.extract_critical_styles().is_empty());

    // Dropping the last handle releases to zero; the opportunistic sweep
    // under the zero-idle-budget policy evicts immediately.
    drop(second);
    assert_eq!(engine.cached_sheets(), 0);
    assert!(engine.extract_critical_styles().is_empty());
}

#[test]
fn reacquisition_after_eviction_matches_pre_eviction_output() {
    let engine = StyleEngine::new(evicting_config());
    let component = tile_bar();

    let handle = engine.use_styles(&component).unwrap();
    let class_before = handle.class("root").to_owned();
    let css_before = engine.extract_critical_styles();
    drop(handle);
    assert_eq!(engine.cached_sheets(), 0);

    let handle = engine.use_styles(&component).unwrap();
    assert_eq!(handle.class("root"), class_before);
    assert_eq!(engine.extract_critical_styles(), css_before);
}

#[test]
fn theme_switch_keeps_class_names_and_swaps_rule_text() {
    let engine = StyleEngine::default();
    let component = tile_bar();

    // Keep the light-theme handle alive across the switch.
    let light_handle = engine.use_styles(&component).unwrap();
    let light_class = light_handle.class("root").to_owned();

    let mut overrides = TokenMap::new();
    overrides.insert("spacing".to_owned(), {
        let mut spacing = TokenMap::new();
        spacing.insert("unit".to_owned(), TokenValue::Number(4.0));
        TokenValue::Map(spacing)
    });
    engine.set_theme(Theme::resolve(&engine.theme(), &overrides));

    let dense_handle = engine.use_styles(&component).unwrap();

    // The class name is an identity handle: stable across theme changes.
    assert_eq!(dense_handle.class("root"), light_class);
    // Both snapshots' texts are registered while both handles live.
    let css = engine.extract_critical_styles();
    let light_at = css.find("margin:16px").expect("light text");
    let dense_at = css.find("margin:8px").expect("dense text");
    assert!(light_at < dense_at);
    assert_eq!(engine.cached_sheets(), 2);
}

#[derive(Default)]
struct CapturingBoundary {
    reports: Mutex<Vec<String>>,
}

impl ErrorBoundary for CapturingBoundary {
    fn report(&self, error: &EngineError) {
        self.reports.lock().push(error.to_string());
    }
}

#[test]
fn failed_acquisition_renders_unstyled_but_reports() {
    let engine = StyleEngine::default();
    let broken = StyledComponent::new(
        "Broken",
        StyleDefinition::new(|_| {
            Ok(vec![(
                "root".to_owned(),
                RuleBlock::new().set(COLOR, StyleValue::token("palette.brand.main")),
            )])
        }),
    );

    let direct = engine.use_styles(&broken).unwrap_err();
    assert!(matches!(direct, EngineError::Compile { ref component, .. }
        if component == "Broken"));

    let boundary = CapturingBoundary::default();
    let handle = engine.use_styles_or_unstyled(&broken, UseStylesOptions::new(), &boundary);
    assert!(handle.is_unstyled());
    assert_eq!(handle.class("root"), "");

    let reports = boundary.reports.lock();
    assert_eq!(reports.len(), 1);
    assert!(reports[0].contains("palette.brand.main"));

    // A failed build leaves nothing cached or registered behind.
    assert_eq!(engine.cached_sheets(), 0);
    assert!(engine.extract_critical_styles().is_empty());
}

#[test]
fn failed_override_backs_out_the_base_acquisition() {
    let engine = StyleEngine::new(evicting_config());
    let broken_override = StyledComponent::new(
        "TileBar::broken",
        StyleDefinition::new(|_| {
            Ok(vec![(
                "root".to_owned(),
                RuleBlock::new().set(COLOR, StyleValue::token("palette.brand.main")),
            )])
        }),
    );

    let error = engine
        .use_styles_with(
            &tile_bar(),
            UseStylesOptions::new().override_with(broken_override),
        )
        .unwrap_err();
    assert!(matches!(error, EngineError::Compile { .. }));

    // The base reference taken before the override failed was released (and
    // swept under the zero-idle-budget policy).
    assert_eq!(engine.cached_sheets(), 0);
}

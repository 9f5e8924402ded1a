use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;
use styled::{StyleEngine, StyledComponent, Theme, TokenMap, TokenValue, UseStylesOptions};
use style_compiler::properties::{COLOR, MARGIN};
use style_compiler::{RuleBlock, StyleDefinition, StyleValue};

fn counting_component(name: &str, compiles: Arc<AtomicUsize>) -> StyledComponent {
    StyledComponent::new(
        name,
        StyleDefinition::new(move |theme| {
            compiles.fetch_add(1, Ordering::SeqCst);
            Ok(vec![(
                "root".to_owned(),
                RuleBlock::new()
                    .set(MARGIN, StyleValue::number(theme.spacing(2.0)))
                    .set(COLOR, StyleValue::token("palette.text.primary")),
            )])
        }),
    )
}

#[test]
fn concurrent_renders_share_one_compilation() {
    const THREADS: usize = 8;

    let engine = Arc::new(StyleEngine::default());
    let compiles = Arc::new(AtomicUsize::new(0));
    let component = Arc::new(counting_component("Toolbar", Arc::clone(&compiles)));
    let barrier = Arc::new(Barrier::new(THREADS));

    let workers: Vec<_> = (0..THREADS)
        .map(|_| {
            let engine = Arc::clone(&engine);
            let component = Arc::clone(&component);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                let handle = engine.use_styles(&component).unwrap();
                handle.class("root").to_owned()
            })
        })
        .collect();

    let classes: Vec<String> = workers
        .into_iter()
        .map(|worker| worker.join().unwrap())
        .collect();

    assert_eq!(compiles.load(Ordering::SeqCst), 1);
    assert!(classes.windows(2).all(|pair| pair[0] == pair[1]));

    // Every thread dropped its handle; the count is back to zero.
    assert_eq!(engine.refs("Toolbar"), Some(0));
}

#[test]
fn concurrent_requests_under_distinct_themes_do_not_interfere() {
    const REQUESTS: usize = 6;

    // One shared, process-wide engine; each "request" renders under its own
    // theme snapshot, as a server would.
    let engine = Arc::new(StyleEngine::default());
    let compiles = Arc::new(AtomicUsize::new(0));
    let component = Arc::new(counting_component("Toolbar", Arc::clone(&compiles)));
    let barrier = Arc::new(Barrier::new(REQUESTS));

    let workers: Vec<_> = (0..REQUESTS)
        .map(|request| {
            let engine = Arc::clone(&engine);
            let component = Arc::clone(&component);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                // Three distinct spacing units across six requests.
                let unit = 4.0 * ((request % 3) as f64 + 1.0);
                let mut overrides = TokenMap::new();
                overrides.insert("spacing".to_owned(), {
                    let mut spacing = TokenMap::new();
                    spacing.insert("unit".to_owned(), TokenValue::Number(unit));
                    TokenValue::Map(spacing)
                });
                let snapshot = Theme::create(&overrides);
                barrier.wait();
                let handle = engine
                    .use_styles_under(&component, &snapshot, UseStylesOptions::new())
                    .unwrap();
                handle.class("root").to_owned()
            })
        })
        .collect();

    let classes: Vec<String> = workers
        .into_iter()
        .map(|worker| worker.join().unwrap())
        .collect();

    // Exactly one compilation per distinct fingerprint, even with two
    // requests racing on each.
    assert_eq!(compiles.load(Ordering::SeqCst), 3);
    // Class names are theme-independent identity handles.
    assert!(classes.windows(2).all(|pair| pair[0] == pair[1]));

    // All three rule-text variants are registered.
    let css = engine.extract_critical_styles();
    for margin in ["margin:8px", "margin:16px", "margin:24px"] {
        assert!(css.contains(margin), "missing {margin} in: {css}");
    }
}

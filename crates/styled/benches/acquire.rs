use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use style_compiler::properties::*;
use style_compiler::{RuleBlock, StyleDefinition, StyleValue};
use styled::{StyleEngine, StyledComponent};

fn toolbar() -> StyledComponent {
    StyledComponent::new(
        "Toolbar",
        StyleDefinition::new(|theme| {
            Ok(vec![
                (
                    "root".to_owned(),
                    RuleBlock::new()
                        .set(DISPLAY, "flex")
                        .set(ALIGN_ITEMS, "center")
                        .set(PADDING, StyleValue::number(theme.spacing(2.0)))
                        .set(BACKGROUND_COLOR, StyleValue::token("palette.primary.main"))
                        .up(
                            "sm",
                            RuleBlock::new().set(PADDING, StyleValue::number(theme.spacing(3.0))),
                        ),
                ),
                (
                    "title".to_owned(),
                    RuleBlock::new()
                        .set(FONT_SIZE, theme.px_to_rem(20.0))
                        .set(COLOR, StyleValue::token("palette.primary.contrast_text")),
                ),
            ])
        }),
    )
}

fn bench_acquire_hot(c: &mut Criterion) {
    let engine = StyleEngine::default();
    let component = toolbar();
    // Prime the cache; the hot path is every render after the first.
    let _primed = engine.use_styles(&component).unwrap();

    c.bench_function("use_styles_cache_hit", |b| {
        b.iter(|| {
            let handle = engine.use_styles(black_box(&component)).unwrap();
            black_box(handle.class("root").len())
        });
    });
}

fn bench_compile_cold(c: &mut Criterion) {
    c.bench_function("use_styles_cold_compile", |b| {
        b.iter(|| {
            let engine = StyleEngine::default();
            let handle = engine.use_styles(black_box(&toolbar())).unwrap();
            black_box(handle.class("root").len())
        });
    });
}

criterion_group!(benches, bench_acquire_hot, bench_compile_cold);
criterion_main!(benches);

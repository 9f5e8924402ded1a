//! A tile bar styled end-to-end: definition, variants, overrides, and the
//! server-extracted critical CSS.

#![allow(
    clippy::print_stdout,
    clippy::expect_used,
    reason = "example binary: prints its output and fails loudly"
)]

use style_compiler::properties::*;
use style_compiler::{RuleBlock, StyleDefinition, StyleValue};
use styled::{StyleEngine, StyledComponent, Theme, TokenMap, TokenValue, UseStylesOptions};

fn tile_bar() -> StyledComponent {
    StyledComponent::new(
        "TileBar",
        StyleDefinition::new(|theme| {
            Ok(vec![
                (
                    "root".to_owned(),
                    RuleBlock::new()
                        .set(POSITION, "absolute")
                        .set(LEFT, 0)
                        .set(RIGHT, 0)
                        .set(HEIGHT, 48.0)
                        .set(BACKGROUND, "rgba(0, 0, 0, 0.5)")
                        .set(DISPLAY, "flex")
                        .set(ALIGN_ITEMS, "center")
                        .set(FONT_FAMILY, StyleValue::token("typography.font_family")),
                ),
                (
                    "title_wrap".to_owned(),
                    RuleBlock::new()
                        .set(FLEX_GROW, 1)
                        .set(MARGIN_LEFT, StyleValue::number(theme.spacing(2.0)))
                        .set(MARGIN_RIGHT, StyleValue::number(theme.spacing(2.0)))
                        .set(COLOR, StyleValue::token("palette.common.white"))
                        .set(OVERFLOW, "hidden"),
                ),
                (
                    "title".to_owned(),
                    RuleBlock::new()
                        .set(FONT_SIZE, theme.px_to_rem(16.0))
                        .set(LINE_HEIGHT, "24px")
                        .set(TEXT_OVERFLOW, "ellipsis")
                        .set(OVERFLOW, "hidden")
                        .set(WHITE_SPACE, "nowrap"),
                ),
            ])
        })
        .variant("title_position_bottom", |_| {
            Ok(RuleBlock::new().set(BOTTOM, 0))
        })
        .variant("title_position_top", |_| Ok(RuleBlock::new().set(TOP, 0)))
        .variant("action_icon_left", |_| {
            Ok(RuleBlock::new().set(ORDER, -1))
        }),
    )
}

fn main() {
    env_logger::init();

    let engine = StyleEngine::default();

    // Render once with a bottom-positioned title and a consumer class.
    let title_position = "bottom";
    let styles = engine
        .use_styles_with(
            &tile_bar(),
            UseStylesOptions::new().class_if(
                title_position == "bottom",
                "root",
                "gallery-tile-bar",
            ),
        )
        .expect("tile bar styles compile under the default theme");

    println!("root classes:  {}", styles.class("root"));
    println!("title classes: {}", styles.class("title"));
    println!(
        "bottom variant: {}",
        styles.class("title_position_bottom")
    );

    // A denser theme swaps rule text under the same class names.
    let mut overrides = TokenMap::new();
    overrides.insert("spacing".to_owned(), {
        let mut spacing = TokenMap::new();
        spacing.insert("unit".to_owned(), TokenValue::Number(4.0));
        TokenValue::Map(spacing)
    });
    engine.set_theme(Theme::resolve(&engine.theme(), &overrides));
    let dense = engine
        .use_styles(&tile_bar())
        .expect("tile bar styles compile under the dense theme");
    assert_eq!(dense.class("root"), styles.class("root").split(' ').next().unwrap_or(""));

    println!("\n/* critical CSS */");
    println!("{}", engine.extract_critical_styles());
}

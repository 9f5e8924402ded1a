//! Property name constants.

// Margin
pub const MARGIN: &str = "margin";
pub const MARGIN_TOP: &str = "margin-top";
pub const MARGIN_RIGHT: &str = "margin-right";
pub const MARGIN_BOTTOM: &str = "margin-bottom";
pub const MARGIN_LEFT: &str = "margin-left";

// Padding
pub const PADDING: &str = "padding";
pub const PADDING_TOP: &str = "padding-top";
pub const PADDING_RIGHT: &str = "padding-right";
pub const PADDING_BOTTOM: &str = "padding-bottom";
pub const PADDING_LEFT: &str = "padding-left";

// Position Offsets
pub const POSITION: &str = "position";
pub const TOP: &str = "top";
pub const RIGHT: &str = "right";
pub const BOTTOM: &str = "bottom";
pub const LEFT: &str = "left";
pub const Z_INDEX: &str = "z-index";

// Dimensions
pub const WIDTH: &str = "width";
pub const HEIGHT: &str = "height";
pub const MIN_WIDTH: &str = "min-width";
pub const MIN_HEIGHT: &str = "min-height";
pub const MAX_WIDTH: &str = "max-width";
pub const MAX_HEIGHT: &str = "max-height";

// Flex
pub const DISPLAY: &str = "display";
pub const FLEX: &str = "flex";
pub const FLEX_GROW: &str = "flex-grow";
pub const FLEX_SHRINK: &str = "flex-shrink";
pub const FLEX_DIRECTION: &str = "flex-direction";
pub const ALIGN_ITEMS: &str = "align-items";
pub const JUSTIFY_CONTENT: &str = "justify-content";
pub const ORDER: &str = "order";
pub const GAP: &str = "gap";

// Font
pub const FONT_FAMILY: &str = "font-family";
pub const FONT_SIZE: &str = "font-size";
pub const FONT_WEIGHT: &str = "font-weight";
pub const LINE_HEIGHT: &str = "line-height";
pub const TEXT_OVERFLOW: &str = "text-overflow";
pub const WHITE_SPACE: &str = "white-space";

// Color
pub const COLOR: &str = "color";
pub const BACKGROUND: &str = "background";
pub const BACKGROUND_COLOR: &str = "background-color";
pub const OPACITY: &str = "opacity";

// Misc
pub const OVERFLOW: &str = "overflow";
pub const BORDER: &str = "border";
pub const BORDER_RADIUS: &str = "border-radius";
pub const BOX_SHADOW: &str = "box-shadow";
pub const CURSOR: &str = "cursor";
pub const TRANSITION: &str = "transition";

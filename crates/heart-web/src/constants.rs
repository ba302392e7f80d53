// DOM hooks shared by the web frontend. These must match index.html and the stylesheet.

// Element ids
pub const CONFIRM_BUTTON_ID: &str = "confirm-btn";
pub const START_BACKDROP_ID: &str = "start-backdrop";
pub const BG_MUSIC_ID: &str = "bgMusic";
pub const POPUP_LAYER_ID: &str = "popup-layer";

// Stage markup
pub const STAGE_CLASS: &str = "heart-stage";
pub const INSTRUCTION_CLASS: &str = "heart-instruction";
pub const CONTAINER_CLASS: &str = "heart-container";
pub const HINT_CLASS: &str = "heart-hint";
pub const FLATTENED_CLASS: &str = "flattened";
pub const DENSITY_ATTR: &str = "data-layout-density";

// Tiles
pub const TILE_CLASS: &str = "tile";
pub const VISIBLE_CLASS: &str = "visible";

// Snow
pub const SNOW_CONTAINER_CLASS: &str = "snow-container";
pub const SNOWFLAKE_CLASS: &str = "snowflake";
pub const SNOWFLAKE_GLYPH: &str = "❄️";

// Inline styles
pub const BACKDROP_SHOWN_STYLE: &str = "display:flex";
pub const BACKDROP_HIDDEN_STYLE: &str = "display:none";
pub const FULL_VIEWPORT_WIDTH: &str = "100vw"; // grid container spans the whole screen
pub const FULL_VIEWPORT_HEIGHT: &str = "100vh";

#[inline]
pub fn px(value: f64) -> String {
    format!("{value}px")
}

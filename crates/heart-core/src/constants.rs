// Shared layout/timing tuning constants used by the core and the web frontend.

// Heart fit
pub const FIT_MARGIN: f64 = 0.9; // fraction of the container the heart may occupy per axis

// Assembly timing (milliseconds)
pub const SCATTER_BASE_DELAY_MS: u32 = 240; // default first-tile delay when scattering
pub const STAGGER_BASE_DELAY_MS: u32 = 20; // default first-tile delay for plain staggered moves
pub const STEP_DELAY_MS: u32 = 45; // default per-index delay increment
pub const SETTLE_BUFFER_MS: u32 = 800; // covers the CSS transition of the last tile

// Grid dispersal
pub const GRID_USABLE_RATIO: f64 = 0.88; // fraction of the viewport the grid spans per axis
pub const GRID_GUTTER_PX: f64 = 12.0; // subtracted from the cell to leave space between tiles
pub const GRID_TILE_MIN_PX: f64 = 70.0;
pub const GRID_TILE_MAX_PX: f64 = 120.0;

// Snowfall
pub const SNOWFLAKE_COUNT: u32 = 50;
pub const SNOWFLAKE_SPAWN_INTERVAL_MS: u32 = 200;
pub const SNOWFLAKE_LIFETIME_MS: u32 = 5000;
pub const SNOWFLAKE_FALL_MIN_SEC: f64 = 2.0;
pub const SNOWFLAKE_FALL_SPAN_SEC: f64 = 3.0;
pub const SNOWFLAKE_FONT_MIN_PX: f64 = 10.0;
pub const SNOWFLAKE_FONT_SPAN_PX: f64 = 10.0;

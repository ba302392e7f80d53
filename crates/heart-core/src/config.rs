//! Viewport-driven presentation presets.
//!
//! A preset is chosen from the shortest viewport side, so a phone held in
//! either orientation gets the same tile density.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How densely the heart is populated; mirrored on the stage as
/// `data-layout-density`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LayoutDensity {
    Compact,
    Balanced,
    Airy,
}

impl LayoutDensity {
    pub fn as_str(self) -> &'static str {
        match self {
            LayoutDensity::Compact => "compact",
            LayoutDensity::Balanced => "balanced",
            LayoutDensity::Airy => "airy",
        }
    }
}

impl fmt::Display for LayoutDensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown layout density `{0}`")]
pub struct ParseDensityError(pub String);

impl FromStr for LayoutDensity {
    type Err = ParseDensityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "compact" => Ok(LayoutDensity::Compact),
            "balanced" => Ok(LayoutDensity::Balanced),
            "airy" => Ok(LayoutDensity::Airy),
            other => Err(ParseDensityError(other.to_string())),
        }
    }
}

/// Tile count, stagger timing and container bounds for one viewport class.
///
/// Fields:
/// - `tile_count`: number of tiles (and heart samples)
/// - `base_delay_ms` / `step_delay_ms`: stagger `base + i * step` for assembly
/// - `width_ratio` / `height_ratio`: container size as a fraction of the viewport
/// - `min_*` / `max_*`: pixel clamps applied per axis after the ratio
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PresentationConfig {
    pub tile_count: usize,
    pub base_delay_ms: u32,
    pub step_delay_ms: u32,
    pub width_ratio: f64,
    pub height_ratio: f64,
    pub min_width: f64,
    pub max_width: f64,
    pub min_height: f64,
    pub max_height: f64,
    pub density: LayoutDensity,
}

/// One row of the breakpoint table. `max_shortest: None` catches everything.
#[derive(Clone, Copy, Debug)]
pub struct Breakpoint {
    pub max_shortest: Option<f64>,
    pub config: PresentationConfig,
}

pub static BREAKPOINTS: [Breakpoint; 3] = [
    Breakpoint {
        max_shortest: Some(520.0),
        config: PresentationConfig {
            tile_count: 120,
            base_delay_ms: 140,
            step_delay_ms: 34,
            width_ratio: 0.9,
            height_ratio: 0.78,
            min_width: 320.0,
            max_width: 640.0,
            min_height: 320.0,
            max_height: 540.0,
            density: LayoutDensity::Compact,
        },
    },
    Breakpoint {
        max_shortest: Some(720.0),
        config: PresentationConfig {
            tile_count: 150,
            base_delay_ms: 180,
            step_delay_ms: 40,
            width_ratio: 0.82,
            height_ratio: 0.75,
            min_width: 360.0,
            max_width: 680.0,
            min_height: 360.0,
            max_height: 580.0,
            density: LayoutDensity::Balanced,
        },
    },
    Breakpoint {
        max_shortest: None,
        config: PresentationConfig {
            tile_count: 180,
            base_delay_ms: 220,
            step_delay_ms: 45,
            width_ratio: 0.75,
            height_ratio: 0.7,
            min_width: 420.0,
            max_width: 760.0,
            min_height: 420.0,
            max_height: 640.0,
            density: LayoutDensity::Airy,
        },
    },
];

/// Pick the preset for a viewport of `width` x `height` CSS pixels.
pub fn presentation_config(width: f64, height: f64) -> PresentationConfig {
    let shortest = width.min(height);
    BREAKPOINTS
        .iter()
        .find(|bp| bp.max_shortest.map_or(true, |max| shortest <= max))
        .unwrap_or(&BREAKPOINTS[BREAKPOINTS.len() - 1])
        .config
}

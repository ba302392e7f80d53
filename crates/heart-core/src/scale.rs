use crate::config::PresentationConfig;
use crate::constants::FIT_MARGIN;
use glam::DVec2;

/// Pixel extent of a container or viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Heart container size for a viewport: ratio of the viewport, clamped per axis.
pub fn container_size(viewport: Size, config: &PresentationConfig) -> Size {
    let base_width = viewport.width * config.width_ratio;
    let base_height = viewport.height * config.height_ratio;
    Size {
        width: config.min_width.max(base_width.min(config.max_width)),
        height: config.min_height.max(base_height.min(config.max_height)),
    }
}

/// Uniform curve-space to pixel-space mapping for one container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitTransform {
    pub scale: f64,
    pub origin: DVec2,
}

impl FitTransform {
    /// Largest uniform scale that keeps a `span_x` x `span_y` curve inside
    /// the margin of `container`. A degenerate span keeps scale 1.
    pub fn fit(container: Size, span_x: f64, span_y: f64) -> Self {
        let scale = if span_x > 0.0 && span_y > 0.0 {
            ((container.width * FIT_MARGIN) / span_x).min((container.height * FIT_MARGIN) / span_y)
        } else {
            1.0
        };
        Self {
            scale,
            origin: container.center(),
        }
    }

    /// Map a centered curve point to container pixels. Curve +y points up.
    #[inline]
    pub fn to_pixel(&self, p: DVec2) -> DVec2 {
        DVec2::new(self.origin.x + p.x * self.scale, self.origin.y - p.y * self.scale)
    }
}

use glam::DVec2;
use std::f64::consts::PI;

/// Axis-aligned bounding box over a set of curve samples.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    fn empty() -> Self {
        Self {
            min_x: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            min_y: f64::INFINITY,
            max_y: f64::NEG_INFINITY,
        }
    }

    fn include(&mut self, p: DVec2) {
        self.min_x = self.min_x.min(p.x);
        self.max_x = self.max_x.max(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_y = self.max_y.max(p.y);
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    pub fn span_x(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn span_y(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// Raw heart samples in sampling order, plus their extents.
#[derive(Clone, Debug, Default)]
pub struct CurveSamples {
    pub points: Vec<DVec2>,
    pub bounds: Bounds,
}

/// Evaluate the heart curve at parameter `t`.
#[inline]
pub fn heart_point(t: f64) -> DVec2 {
    let x = 16.0 * t.sin().powi(3);
    let y = 13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos();
    DVec2::new(x, y)
}

/// Sample `count` points sweeping `t` from π downwards over one full turn.
///
/// `count == 0` yields no points and zeroed bounds.
pub fn sample_heart(count: usize) -> CurveSamples {
    if count == 0 {
        return CurveSamples::default();
    }
    let mut bounds = Bounds::empty();
    let points = (0..count)
        .map(|i| {
            let t = PI - (2.0 * PI * i as f64) / count as f64;
            let p = heart_point(t);
            bounds.include(p);
            p
        })
        .collect::<Vec<_>>();
    CurveSamples { points, bounds }
}

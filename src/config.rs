use serde::{Deserialize, Serialize};
/// Y-axis bounds policy for the rendered chart.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisBoundary {
    /// Recompute the range from the visible data on every refresh.
    pub auto_scale: bool,
    /// Lower bound when autoscale is off. `None` falls back to the data.
    pub min: Option<f64>,
    /// Upper bound when autoscale is off. `None` falls back to the data.
    pub max: Option<f64>,
    /// Axis label count hint for the renderer.
    pub label_count: Option<usize>,
}
impl Default for AxisBoundary {
    fn default() -> Self {
        Self {
            auto_scale: true,
            min: None,
            max: None,
            label_count: None,
        }
    }
}
impl AxisBoundary {
    pub fn auto() -> Self {
        Self::default()
    }
    pub fn fixed(min: f64, max: f64) -> Self {
        Self {
            auto_scale: false,
            min: Some(min),
            max: Some(max),
            label_count: None,
        }
    }
    /// Resolve the y-range against the data extent currently on screen.
    pub fn resolve(&self, observed: Option<(f64, f64)>) -> (f64, f64) {
        let (lo, hi) = observed.unwrap_or((-1.0, 1.0));
        if self.auto_scale {
            // Avoid a zero-height axis.
            let pad = ((hi - lo) * 0.1).max(1.0);
            (lo - pad, hi + pad)
        } else {
            (self.min.unwrap_or(lo), self.max.unwrap_or(hi))
        }
    }
}

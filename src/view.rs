use std::time::Duration;
use serde::{Deserialize, Serialize};
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlotPoint {
    /// Absolute timestamp in milliseconds.
    pub x: f64,
    /// Sample value in the feature's unit.
    pub y: f64,
}
/// Ordered copy of one channel's points, taken at call time.
#[derive(Clone, Debug)]
pub struct ChannelSnapshot {
    pub index: usize,
    pub name: String,
    pub points: Vec<PlotPoint>,
}
/// Everything a renderer needs for one refresh.
#[derive(Clone, Debug)]
pub struct PlotView {
    pub window: Option<Duration>,
    pub y_range: (f64, f64),
    pub y_label_count: Option<usize>,
    pub channels: Vec<ChannelSnapshot>,
}
/// Detached buffer contents, used to carry the visible trace across a
/// reconfiguration. Not tied to any storage format.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlotState {
    pub channels: Vec<SavedChannel>,
}
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavedChannel {
    pub name: String,
    pub points: Vec<PlotPoint>,
}

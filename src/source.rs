use std::collections::VecDeque;
use crate::error::PlotError;
/// One multi-channel sample from the device stream: a shared timestamp in
/// milliseconds plus one value per plotted channel.
#[derive(Clone, Debug, PartialEq)]
pub struct FeatureSample {
    pub x: f64,
    pub values: Vec<f64>,
}
impl FeatureSample {
    pub fn new(x: f64, values: impl Into<Vec<f64>>) -> Self {
        Self {
            x,
            values: values.into(),
        }
    }
    pub fn value_count(&self) -> usize {
        self.values.len()
    }
}
/// Something that can yield feature samples on demand.
pub trait SampleSource {
    fn next_sample(&mut self) -> Result<Option<FeatureSample>, PlotError>;
}
/// In-memory source useful for tests and deterministic playback.
pub struct ManualSource {
    queue: VecDeque<FeatureSample>,
}
impl ManualSource {
    pub fn new(samples: impl IntoIterator<Item = FeatureSample>) -> Self {
        Self {
            queue: samples.into_iter().collect(),
        }
    }
}
impl SampleSource for ManualSource {
    fn next_sample(&mut self) -> Result<Option<FeatureSample>, PlotError> {
        Ok(self.queue.pop_front())
    }
}

use crate::error::PlotError;
use crate::pipeline::PlotPipeline;
use crate::source::{FeatureSample, SampleSource};
use crate::view::PlotView;
/// Streaming state of the plot pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StreamState {
    Idle,
    Plotting,
    Paused,
}
/// Scoped live-plot stream, acquired via [`PlotPipeline::session`].
///
/// Dropping the session stops the stream, so release happens on every exit
/// path including early `?` returns.
pub struct PlotSession<'a> {
    pipeline: &'a mut PlotPipeline,
}
impl<'a> PlotSession<'a> {
    pub(crate) fn new(pipeline: &'a mut PlotPipeline) -> Self {
        Self { pipeline }
    }
    pub fn ingest(&mut self, sample: &FeatureSample) -> Result<(), PlotError> {
        self.pipeline.ingest(sample)
    }
    pub fn pump_once<S: SampleSource>(
        &mut self,
        source: &mut S,
    ) -> Result<Option<PlotView>, PlotError> {
        self.pipeline.pump_once(source)
    }
    /// Hold sample intake; samples arriving while paused are discarded.
    pub fn pause(&mut self) {
        self.pipeline.pause();
    }
    pub fn resume(&mut self) {
        self.pipeline.resume();
    }
    pub fn is_paused(&self) -> bool {
        self.pipeline.state() == StreamState::Paused
    }
    pub fn view(&self) -> PlotView {
        self.pipeline.view()
    }
    pub fn last_sample_text(&self) -> Option<String> {
        self.pipeline.last_sample_text()
    }
}
impl Drop for PlotSession<'_> {
    fn drop(&mut self) {
        self.pipeline.stop();
    }
}

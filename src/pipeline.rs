use std::time::Duration;
use log::{debug, trace};
use crate::buffer::PlotBuffer;
use crate::config::AxisBoundary;
use crate::error::PlotError;
use crate::session::{PlotSession, StreamState};
use crate::settings::{PlotFeature, PlotSettings};
use crate::source::{FeatureSample, SampleSource};
use crate::view::{PlotState, PlotView};
/// Glue between a sample stream and the chart renderer: appends incoming
/// rows to the buffer, enforces the retention window, and assembles
/// render-ready views.
pub struct PlotPipeline {
    buffer: PlotBuffer,
    feature: Option<PlotFeature>,
    window: Option<Duration>,
    boundary: AxisBoundary,
    state: StreamState,
    last_values: Vec<f64>,
}
impl PlotPipeline {
    pub fn new(settings: &PlotSettings) -> Self {
        let mut pipeline = Self {
            buffer: PlotBuffer::new(Vec::<String>::new()),
            feature: None,
            window: settings.window(),
            boundary: settings.boundary(),
            state: StreamState::Idle,
            last_values: Vec::new(),
        };
        pipeline.apply_settings(settings);
        pipeline
    }
    /// Re-sync with the settings store. A changed feature selection rebuilds
    /// the channel set and drops the stale trace; a shrunken window takes
    /// effect immediately rather than on the next sample.
    pub fn apply_settings(&mut self, settings: &PlotSettings) {
        self.window = settings.window();
        self.boundary = settings.boundary();
        let selected = settings.selected_feature();
        if selected != self.feature.as_ref() {
            self.feature = selected.cloned();
            match &self.feature {
                Some(feature) => debug!(
                    "plot reconfigured for {} ({} lines)",
                    feature.name,
                    feature.components.len()
                ),
                None => debug!("plot cleared, no feature selected"),
            }
            let components = self
                .feature
                .as_ref()
                .map(|feature| feature.components.clone())
                .unwrap_or_default();
            self.buffer = PlotBuffer::new(components);
            self.last_values.clear();
        }
        self.buffer.trim(self.window);
    }
    pub fn feature(&self) -> Option<&PlotFeature> {
        self.feature.as_ref()
    }
    pub fn window(&self) -> Option<Duration> {
        self.window
    }
    pub fn state(&self) -> StreamState {
        self.state
    }
    pub fn buffer(&self) -> &PlotBuffer {
        &self.buffer
    }
    /// Begin streaming and hand out the scoped guard; the stream stops when
    /// the guard is dropped.
    pub fn session(&mut self) -> PlotSession<'_> {
        self.start();
        PlotSession::new(self)
    }
    pub fn start(&mut self) {
        if self.state == StreamState::Idle {
            debug!("plot stream started");
        }
        self.state = StreamState::Plotting;
    }
    pub fn stop(&mut self) {
        if self.state != StreamState::Idle {
            self.state = StreamState::Idle;
            debug!("plot stream stopped");
        }
    }
    pub fn pause(&mut self) {
        if self.state == StreamState::Plotting {
            self.state = StreamState::Paused;
        }
    }
    pub fn resume(&mut self) {
        if self.state == StreamState::Paused {
            self.state = StreamState::Plotting;
        }
    }
    /// Feed one sample. Samples arriving while idle or paused are discarded;
    /// while plotting, the row is appended and the window enforced.
    pub fn ingest(&mut self, sample: &FeatureSample) -> Result<(), PlotError> {
        match self.state {
            StreamState::Plotting => {
                self.buffer.push_row(sample.x, &sample.values)?;
                self.buffer.trim(self.window);
                self.last_values.clear();
                self.last_values.extend_from_slice(&sample.values);
                Ok(())
            }
            StreamState::Idle | StreamState::Paused => {
                trace!("sample at {} dropped while {:?}", sample.x, self.state);
                Ok(())
            }
        }
    }
    /// Drain one sample from a source, if it has one, and return the fresh
    /// view.
    pub fn pump_once<S: SampleSource>(
        &mut self,
        source: &mut S,
    ) -> Result<Option<PlotView>, PlotError> {
        let Some(sample) = source.next_sample()? else {
            return Ok(None);
        };
        self.ingest(&sample)?;
        Ok(Some(self.view()))
    }
    pub fn view(&self) -> PlotView {
        PlotView {
            window: self.window,
            y_range: self.boundary.resolve(self.buffer.y_extent()),
            y_label_count: self.boundary.label_count,
            channels: self.buffer.snapshots(),
        }
    }
    /// Readout of the most recent sample, shown next to the chart.
    pub fn last_sample_text(&self) -> Option<String> {
        let feature = self.feature.as_ref()?;
        if self.last_values.is_empty() {
            return None;
        }
        let values = feature
            .components
            .iter()
            .zip(&self.last_values)
            .map(|(name, value)| format!("{name} {value:.2}"))
            .collect::<Vec<_>>()
            .join("  ");
        Some(match &feature.unit {
            Some(unit) => format!("{values} {unit}"),
            None => values,
        })
    }
    pub fn reset(&mut self) {
        self.buffer.reset();
        self.last_values.clear();
    }
    pub fn saved(&self) -> PlotState {
        self.buffer.saved()
    }
    pub fn restore(&mut self, state: &PlotState) -> Result<(), PlotError> {
        self.buffer.restore(state)
    }
}

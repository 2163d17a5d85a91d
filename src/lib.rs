pub mod buffer;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod session;
pub mod settings;
pub mod source;
pub mod view;
pub use buffer::{PlotBuffer, SeriesBuffer};
pub use config::AxisBoundary;
pub use error::PlotError;
pub use pipeline::PlotPipeline;
pub use session::{PlotSession, StreamState};
pub use settings::{PlotFeature, PlotSettings, SettingsEvent};
pub use source::{FeatureSample, ManualSource, SampleSource};
pub use view::{ChannelSnapshot, PlotPoint, PlotState, PlotView, SavedChannel};

use std::time::Duration;
use log::debug;
use serde::{Deserialize, Serialize};
use crate::config::AxisBoundary;
use crate::error::PlotError;
/// Retention window applied to a fresh settings store.
const DEFAULT_WINDOW: Duration = Duration::from_secs(5);
/// One plottable quantity exposed by a connected board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlotFeature {
    pub name: String,
    /// Unit shown next to values and on the y-axis, e.g. "mg" or "mBar".
    pub unit: Option<String>,
    /// Component (line) names; a scalar feature has exactly one.
    pub components: Vec<String>,
}
impl PlotFeature {
    pub fn scalar(name: impl Into<String>, unit: Option<&str>) -> Self {
        let name = name.into();
        Self {
            components: vec![name.clone()],
            unit: unit.map(str::to_owned),
            name,
        }
    }
    pub fn with_components<I, S>(name: impl Into<String>, unit: Option<&str>, components: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            unit: unit.map(str::to_owned),
            components: components.into_iter().map(Into::into).collect(),
        }
    }
}
/// Discrete updates to the plot configuration. The store is the single owner
/// of this state; nothing here lives in a global.
#[derive(Clone, Debug)]
pub enum SettingsEvent {
    FeaturesLoaded(Vec<PlotFeature>),
    FeatureSelected(usize),
    WindowChanged(Option<Duration>),
    BoundaryChanged(AxisBoundary),
}
/// Plot configuration store. Mutated only through [`SettingsEvent`]s; derived
/// views are pure functions of the current state.
#[derive(Clone, Debug)]
pub struct PlotSettings {
    features: Vec<PlotFeature>,
    selected: usize,
    window: Option<Duration>,
    boundary: AxisBoundary,
}
impl Default for PlotSettings {
    fn default() -> Self {
        Self {
            features: Vec::new(),
            selected: 0,
            window: Some(DEFAULT_WINDOW),
            boundary: AxisBoundary::default(),
        }
    }
}
impl PlotSettings {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn apply(&mut self, event: SettingsEvent) -> Result<(), PlotError> {
        match event {
            SettingsEvent::FeaturesLoaded(features) => {
                debug!("settings: {} plottable features loaded", features.len());
                self.features = features;
                self.selected = 0;
            }
            SettingsEvent::FeatureSelected(index) => {
                if index >= self.features.len() {
                    return Err(PlotError::FeatureOutOfRange {
                        index,
                        count: self.features.len(),
                    });
                }
                self.selected = index;
            }
            SettingsEvent::WindowChanged(window) => self.window = window,
            SettingsEvent::BoundaryChanged(boundary) => self.boundary = boundary,
        }
        Ok(())
    }
    pub fn features(&self) -> &[PlotFeature] {
        &self.features
    }
    pub fn selected_index(&self) -> usize {
        self.selected
    }
    pub fn selected_feature(&self) -> Option<&PlotFeature> {
        self.features.get(self.selected)
    }
    pub fn window(&self) -> Option<Duration> {
        self.window
    }
    pub fn boundary(&self) -> AxisBoundary {
        self.boundary
    }
    /// Legend entries for the selected feature, one per plotted line.
    pub fn legend_items(&self) -> Vec<String> {
        self.selected_feature()
            .map(|feature| feature.components.clone())
            .unwrap_or_default()
    }
    pub fn y_axis_label(&self) -> Option<String> {
        let feature = self.selected_feature()?;
        Some(match &feature.unit {
            Some(unit) => format!("{} [{}]", feature.name, unit),
            None => feature.name.clone(),
        })
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    fn demo_features() -> Vec<PlotFeature> {
        vec![
            PlotFeature::with_components("Acceleration", Some("mg"), ["X", "Y", "Z"]),
            PlotFeature::scalar("Pressure", Some("mBar")),
        ]
    }
    #[test]
    fn selection_drives_the_derived_views() {
        let mut settings = PlotSettings::new();
        settings
            .apply(SettingsEvent::FeaturesLoaded(demo_features()))
            .unwrap();
        assert_eq!(settings.legend_items(), vec!["X", "Y", "Z"]);
        assert_eq!(settings.y_axis_label().unwrap(), "Acceleration [mg]");
        settings.apply(SettingsEvent::FeatureSelected(1)).unwrap();
        assert_eq!(settings.legend_items(), vec!["Pressure"]);
        assert_eq!(settings.y_axis_label().unwrap(), "Pressure [mBar]");
    }
    #[test]
    fn selecting_a_missing_feature_is_rejected() {
        let mut settings = PlotSettings::new();
        settings
            .apply(SettingsEvent::FeaturesLoaded(demo_features()))
            .unwrap();
        let err = settings.apply(SettingsEvent::FeatureSelected(7)).unwrap_err();
        assert!(matches!(
            err,
            PlotError::FeatureOutOfRange { index: 7, count: 2 }
        ));
        assert_eq!(settings.selected_index(), 0);
    }
    #[test]
    fn loading_features_resets_the_selection() {
        let mut settings = PlotSettings::new();
        settings
            .apply(SettingsEvent::FeaturesLoaded(demo_features()))
            .unwrap();
        settings.apply(SettingsEvent::FeatureSelected(1)).unwrap();
        settings
            .apply(SettingsEvent::FeaturesLoaded(vec![PlotFeature::scalar(
                "Temperature",
                Some("C"),
            )]))
            .unwrap();
        assert_eq!(settings.selected_index(), 0);
        assert_eq!(settings.y_axis_label().unwrap(), "Temperature [C]");
    }
    #[test]
    fn fresh_store_has_a_bounded_window() {
        let settings = PlotSettings::new();
        assert_eq!(settings.window(), Some(Duration::from_secs(5)));
        assert!(settings.legend_items().is_empty());
        assert!(settings.y_axis_label().is_none());
    }
    #[test]
    fn window_can_be_cleared_to_unbounded() {
        let mut settings = PlotSettings::new();
        settings.apply(SettingsEvent::WindowChanged(None)).unwrap();
        assert_eq!(settings.window(), None);
    }
}

use std::collections::VecDeque;
use std::time::Duration;
use log::debug;
use crate::error::PlotError;
use crate::view::{ChannelSnapshot, PlotPoint, PlotState, SavedChannel};
/// One named time series. Points are append-only and ordered by `x`, with the
/// oldest point at the head.
pub struct SeriesBuffer {
    name: String,
    points: VecDeque<PlotPoint>,
}
impl SeriesBuffer {
    fn new(name: String) -> Self {
        Self {
            name,
            points: VecDeque::new(),
        }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn len(&self) -> usize {
        self.points.len()
    }
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = &PlotPoint> {
        self.points.iter()
    }
    pub fn last(&self) -> Option<PlotPoint> {
        self.points.back().copied()
    }
    fn push(&mut self, point: PlotPoint) {
        self.points.push_back(point);
    }
    /// Head-only eviction; the scan stops at the first surviving point.
    /// The newest point is never evicted, even when a sibling channel's
    /// larger `x_max` ages it out.
    fn evict_older_than(&mut self, min_valid_x: f64) {
        while self.points.len() > 1 {
            match self.points.front() {
                Some(front) if front.x < min_valid_x => {
                    self.points.pop_front();
                }
                _ => break,
            }
        }
    }
    fn clear(&mut self) {
        self.points.clear();
    }
}
/// Multi-channel rolling buffer behind the live chart.
///
/// Channels share one time axis; the retention window is enforced relative to
/// the newest timestamp present anywhere in the buffer. Mutation and reads are
/// expected from a single logical owner; there is no internal locking.
pub struct PlotBuffer {
    channels: Vec<SeriesBuffer>,
}
impl PlotBuffer {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            channels: names
                .into_iter()
                .map(|name| SeriesBuffer::new(name.into()))
                .collect(),
        }
    }
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }
    pub fn channel(&self, index: usize) -> Option<&SeriesBuffer> {
        self.channels.get(index)
    }
    pub fn channels(&self) -> impl Iterator<Item = &SeriesBuffer> {
        self.channels.iter()
    }
    /// Append one point. `x` must be at or after the channel's last stored
    /// timestamp; the producer owns ordering, the buffer only rejects.
    pub fn push(&mut self, channel: usize, x: f64, y: f64) -> Result<(), PlotError> {
        let count = self.channels.len();
        let series = self
            .channels
            .get_mut(channel)
            .ok_or(PlotError::ChannelOutOfRange {
                index: channel,
                count,
            })?;
        if let Some(last) = series.last() {
            if x < last.x {
                return Err(PlotError::BackwardsTimestamp {
                    channel,
                    last: last.x,
                    got: x,
                });
            }
        }
        series.push(PlotPoint { x, y });
        Ok(())
    }
    /// Append one value per channel at a shared timestamp. The whole row is
    /// validated up front; a rejected row leaves every channel untouched.
    pub fn push_row(&mut self, x: f64, values: &[f64]) -> Result<(), PlotError> {
        if values.len() != self.channels.len() {
            return Err(PlotError::ChannelMismatch {
                expected: self.channels.len(),
                actual: values.len(),
            });
        }
        for (channel, series) in self.channels.iter().enumerate() {
            if let Some(last) = series.last() {
                if x < last.x {
                    return Err(PlotError::BackwardsTimestamp {
                        channel,
                        last: last.x,
                        got: x,
                    });
                }
            }
        }
        for (series, &y) in self.channels.iter_mut().zip(values) {
            series.push(PlotPoint { x, y });
        }
        Ok(())
    }
    /// Newest timestamp across all channels, if any points exist.
    pub fn x_max(&self) -> Option<f64> {
        self.channels
            .iter()
            .filter_map(|series| series.last())
            .map(|point| point.x)
            .fold(None, |acc, x| Some(acc.map_or(x, |max: f64| max.max(x))))
    }
    /// Observed value extent across all channels.
    pub fn y_extent(&self) -> Option<(f64, f64)> {
        let mut extent: Option<(f64, f64)> = None;
        for series in &self.channels {
            for point in series.iter() {
                extent = Some(match extent {
                    Some((lo, hi)) => (lo.min(point.y), hi.max(point.y)),
                    None => (point.y, point.y),
                });
            }
        }
        extent
    }
    /// Drop points older than `x_max - window` from every channel's head.
    /// `None` means unbounded retention and is a no-op.
    pub fn trim(&mut self, window: Option<Duration>) {
        let Some(window) = window else {
            return;
        };
        let Some(x_max) = self.x_max() else {
            return;
        };
        let min_valid_x = x_max - window.as_secs_f64() * 1000.0;
        for series in &mut self.channels {
            series.evict_older_than(min_valid_x);
        }
    }
    /// Clear every channel's points. Channel registration survives.
    pub fn reset(&mut self) {
        for series in &mut self.channels {
            series.clear();
        }
        debug!("plot buffer reset ({} channels)", self.channels.len());
    }
    pub fn snapshot(&self, index: usize) -> Result<ChannelSnapshot, PlotError> {
        let series = self
            .channels
            .get(index)
            .ok_or(PlotError::ChannelOutOfRange {
                index,
                count: self.channels.len(),
            })?;
        Ok(ChannelSnapshot {
            index,
            name: series.name.clone(),
            points: series.iter().copied().collect(),
        })
    }
    pub fn snapshots(&self) -> Vec<ChannelSnapshot> {
        (0..self.channels.len())
            .map(|index| ChannelSnapshot {
                index,
                name: self.channels[index].name.clone(),
                points: self.channels[index].iter().copied().collect(),
            })
            .collect()
    }
    /// Detach the current contents, e.g. before tearing the owner down.
    pub fn saved(&self) -> PlotState {
        PlotState {
            channels: self
                .channels
                .iter()
                .map(|series| SavedChannel {
                    name: series.name.clone(),
                    points: series.iter().copied().collect(),
                })
                .collect(),
        }
    }
    /// Replace the current contents with a previously detached state. The
    /// state must carry the same number of channels; registered names win over
    /// saved ones.
    pub fn restore(&mut self, state: &PlotState) -> Result<(), PlotError> {
        if state.channels.len() != self.channels.len() {
            return Err(PlotError::ChannelMismatch {
                expected: self.channels.len(),
                actual: state.channels.len(),
            });
        }
        for (series, saved) in self.channels.iter_mut().zip(&state.channels) {
            series.points.clear();
            series.points.extend(saved.points.iter().copied());
        }
        Ok(())
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    fn buffer_with_points(xs: &[f64]) -> PlotBuffer {
        let mut buffer = PlotBuffer::new(["ch"]);
        for &x in xs {
            buffer.push(0, x, x * 0.5).unwrap();
        }
        buffer
    }
    fn xs(buffer: &PlotBuffer, channel: usize) -> Vec<f64> {
        buffer
            .channel(channel)
            .unwrap()
            .iter()
            .map(|p| p.x)
            .collect()
    }
    #[test]
    fn snapshot_preserves_insert_order() {
        let buffer = buffer_with_points(&[0.0, 10.0, 10.0, 25.0]);
        let snapshot = buffer.snapshot(0).unwrap();
        let got: Vec<f64> = snapshot.points.iter().map(|p| p.x).collect();
        assert_eq!(got, vec![0.0, 10.0, 10.0, 25.0]);
    }
    #[test]
    fn window_evicts_points_older_than_newest_minus_window() {
        let mut buffer = buffer_with_points(&[0.0, 200.0, 400.0, 1200.0, 1300.0]);
        buffer.trim(Some(Duration::from_millis(1000)));
        assert_eq!(xs(&buffer, 0), vec![400.0, 1200.0, 1300.0]);
    }
    #[test]
    fn unbounded_window_keeps_everything() {
        let mut buffer = buffer_with_points(&[0.0, 1.0, 2.0, 3.0, 4.0]);
        buffer.trim(None);
        assert_eq!(buffer.channel(0).unwrap().len(), 5);
    }
    #[test]
    fn single_point_outside_window_survives() {
        let mut buffer = buffer_with_points(&[5000.0]);
        buffer.trim(Some(Duration::from_millis(1000)));
        assert_eq!(xs(&buffer, 0), vec![5000.0]);
    }
    #[test]
    fn newest_point_survives_sibling_channels_time_axis() {
        let mut buffer = PlotBuffer::new(["slow", "fast"]);
        buffer.push(0, 100.0, 1.0).unwrap();
        buffer.push(1, 5000.0, 2.0).unwrap();
        buffer.trim(Some(Duration::from_millis(1000)));
        // min_valid_x is 4000 but the slow channel's only point stays.
        assert_eq!(xs(&buffer, 0), vec![100.0]);
        assert_eq!(xs(&buffer, 1), vec![5000.0]);
    }
    #[test]
    fn trim_on_empty_channels_does_not_fault() {
        let mut buffer = PlotBuffer::new(["a", "b"]);
        buffer.trim(Some(Duration::from_millis(100)));
        buffer.push(1, 900.0, 0.0).unwrap();
        buffer.trim(Some(Duration::from_millis(100)));
        assert!(buffer.channel(0).unwrap().is_empty());
        assert_eq!(buffer.channel(1).unwrap().len(), 1);
    }
    #[test]
    fn reset_clears_points_but_keeps_channels() {
        let mut buffer = PlotBuffer::new(["x", "y", "z"]);
        buffer.push_row(10.0, &[1.0, 2.0, 3.0]).unwrap();
        buffer.reset();
        assert_eq!(buffer.channel_count(), 3);
        for index in 0..3 {
            assert!(buffer.snapshot(index).unwrap().points.is_empty());
        }
    }
    #[test]
    fn push_rejects_out_of_range_channel() {
        let mut buffer = PlotBuffer::new(["only"]);
        let err = buffer.push(3, 0.0, 0.0).unwrap_err();
        assert!(matches!(
            err,
            PlotError::ChannelOutOfRange { index: 3, count: 1 }
        ));
    }
    #[test]
    fn push_rejects_backwards_timestamp_without_corrupting() {
        let mut buffer = PlotBuffer::new(["ch"]);
        buffer.push(0, 50.0, 1.0).unwrap();
        let err = buffer.push(0, 49.0, 2.0).unwrap_err();
        assert!(matches!(err, PlotError::BackwardsTimestamp { .. }));
        assert_eq!(xs(&buffer, 0), vec![50.0]);
    }
    #[test]
    fn push_row_rejects_shape_mismatch_before_mutation() {
        let mut buffer = PlotBuffer::new(["x", "y"]);
        let err = buffer.push_row(0.0, &[1.0]).unwrap_err();
        assert!(matches!(
            err,
            PlotError::ChannelMismatch {
                expected: 2,
                actual: 1
            }
        ));
        assert!(buffer.channel(0).unwrap().is_empty());
        assert!(buffer.channel(1).unwrap().is_empty());
    }
    #[test]
    fn x_max_spans_all_channels() {
        let mut buffer = PlotBuffer::new(["a", "b"]);
        assert_eq!(buffer.x_max(), None);
        buffer.push(0, 10.0, 0.0).unwrap();
        buffer.push(1, 30.0, 0.0).unwrap();
        assert_eq!(buffer.x_max(), Some(30.0));
    }
    #[test]
    fn saved_state_restores_into_matching_shape() {
        let mut buffer = PlotBuffer::new(["x", "y"]);
        buffer.push_row(1.0, &[0.1, 0.2]).unwrap();
        buffer.push_row(2.0, &[0.3, 0.4]).unwrap();
        let state = buffer.saved();
        let mut rebuilt = PlotBuffer::new(["x", "y"]);
        rebuilt.restore(&state).unwrap();
        assert_eq!(xs(&rebuilt, 0), vec![1.0, 2.0]);
        assert_eq!(rebuilt.channel(1).unwrap().last().unwrap().y, 0.4);
        let mut wrong_shape = PlotBuffer::new(["x"]);
        assert!(matches!(
            wrong_shape.restore(&state),
            Err(PlotError::ChannelMismatch { .. })
        ));
    }
}

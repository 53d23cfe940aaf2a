//! Per-generation result delivery.
//!
//! The controller hands one [`GenerationReport`] per generation to a
//! [`ResultSink`]. Sinks are called synchronously after the generation has
//! fully completed and must return promptly; anything slow (drawing,
//! animation pacing, network) belongs behind a buffer such as
//! [`ChannelSink`].

use crate::geo::Location;
use crate::tour::closed_path;
use std::sync::mpsc::{self, Receiver, Sender};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Snapshot of the global best after one generation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GenerationReport {
    /// Zero-based generation index.
    pub generation: usize,
    /// Best closed-tour distance seen so far, in kilometres.
    pub best_distance: f64,
    /// Visiting order of that tour.
    pub best_tour: Vec<usize>,
}

/// Receives one report per generation.
///
/// Called at most `max_iterations` times per run, in generation order.
pub trait ResultSink {
    fn on_generation(&mut self, report: &GenerationReport);
}

impl<F: FnMut(&GenerationReport)> ResultSink for F {
    fn on_generation(&mut self, report: &GenerationReport) {
        self(report)
    }
}

/// Discards every report.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl ResultSink for NullSink {
    fn on_generation(&mut self, _report: &GenerationReport) {}
}

/// Chart series: best distance against generation index.
#[derive(Debug, Clone, Default)]
pub struct HistorySink {
    points: Vec<(usize, f64)>,
}

impl HistorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// `(generation, best_distance)` pairs in arrival order.
    pub fn points(&self) -> &[(usize, f64)] {
        &self.points
    }

    pub fn distances(&self) -> Vec<f64> {
        self.points.iter().map(|&(_, d)| d).collect()
    }
}

impl ResultSink for HistorySink {
    fn on_generation(&mut self, report: &GenerationReport) {
        self.points.push((report.generation, report.best_distance));
    }
}

/// Map renderer feed: the latest best route as a closed polyline.
///
/// Tour indices with no matching entry in the sink's own location list are
/// left out of the route and of [`stops`](Self::stops).
#[derive(Debug, Clone)]
pub struct RouteSink {
    locations: Vec<Location>,
    route: Vec<(f64, f64)>,
    redraws: usize,
}

impl RouteSink {
    pub fn new(locations: &[Location]) -> Self {
        Self {
            locations: locations.to_vec(),
            route: Vec::new(),
            redraws: 0,
        }
    }

    /// `(latitude, longitude)` points, first point repeated at the end.
    pub fn route(&self) -> &[(f64, f64)] {
        &self.route
    }

    /// Names along the route, in visiting order (not closed).
    pub fn stops(&self, tour: &[usize]) -> Vec<&str> {
        tour.iter()
            .filter_map(|&i| self.locations.get(i))
            .map(|l| l.name.as_str())
            .collect()
    }

    /// How many times the route was replaced.
    pub fn redraws(&self) -> usize {
        self.redraws
    }
}

impl ResultSink for RouteSink {
    fn on_generation(&mut self, report: &GenerationReport) {
        self.route = closed_path(&report.best_tour, &self.locations);
        self.redraws += 1;
    }
}

/// Logs each generation's result line at `info` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl ResultSink for LogSink {
    fn on_generation(&mut self, report: &GenerationReport) {
        log::info!(
            "Best distance at iteration {}: {:.2} km",
            report.generation + 1,
            report.best_distance
        );
    }
}

/// Fire-and-forget forwarding to another thread.
///
/// Sending never blocks. If the receiver is gone, reports are dropped and
/// the run continues unaffected.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: Sender<GenerationReport>,
}

impl ChannelSink {
    /// Creates a sink and the receiving end for the consumer.
    pub fn channel() -> (Self, Receiver<GenerationReport>) {
        let (tx, rx) = mpsc::channel();
        (Self { tx }, rx)
    }
}

impl ResultSink for ChannelSink {
    fn on_generation(&mut self, report: &GenerationReport) {
        if self.tx.send(report.clone()).is_err() {
            log::trace!("report receiver dropped; generation {} discarded", report.generation);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(generation: usize, best_distance: f64, best_tour: Vec<usize>) -> GenerationReport {
        GenerationReport {
            generation,
            best_distance,
            best_tour,
        }
    }

    #[test]
    fn test_closure_sink() {
        let mut seen = Vec::new();
        {
            let mut sink = |r: &GenerationReport| seen.push(r.generation);
            sink.on_generation(&report(0, 1.0, vec![0]));
            sink.on_generation(&report(1, 1.0, vec![0]));
        }
        assert_eq!(seen, vec![0, 1]);
    }

    #[test]
    fn test_history_sink() {
        let mut sink = HistorySink::new();
        sink.on_generation(&report(0, 5.0, vec![0, 1]));
        sink.on_generation(&report(1, 4.0, vec![1, 0]));
        assert_eq!(sink.points(), &[(0, 5.0), (1, 4.0)]);
        assert_eq!(sink.distances(), vec![5.0, 4.0]);
    }

    #[test]
    fn test_route_sink_closes_loop() {
        let locs = vec![
            Location::new("a", 1.0, 2.0),
            Location::new("b", 3.0, 4.0),
            Location::new("c", 5.0, 6.0),
        ];
        let mut sink = RouteSink::new(&locs);
        sink.on_generation(&report(0, 9.0, vec![2, 0, 1]));
        assert_eq!(sink.route(), &[(5.0, 6.0), (1.0, 2.0), (3.0, 4.0), (5.0, 6.0)]);
        assert_eq!(sink.stops(&[2, 0, 1]), vec!["c", "a", "b"]);
        assert_eq!(sink.redraws(), 1);
    }

    #[test]
    fn test_route_sink_over_shorter_location_list() {
        let locs = vec![Location::new("only", 1.0, 2.0)];
        let mut sink = RouteSink::new(&locs);
        sink.on_generation(&report(0, 9.0, vec![3, 0, 7, 1]));
        assert_eq!(sink.route(), &[(1.0, 2.0), (1.0, 2.0)]);
        assert_eq!(sink.stops(&[3, 0, 7]), vec!["only"]);

        sink.on_generation(&report(1, 9.0, vec![4, 5]));
        assert!(sink.route().is_empty());
        assert_eq!(sink.redraws(), 2);
    }

    #[test]
    fn test_channel_sink_delivers_in_order() {
        let (mut sink, rx) = ChannelSink::channel();
        for g in 0..3 {
            sink.on_generation(&report(g, 10.0 - g as f64, vec![0]));
        }
        let got: Vec<usize> = rx.try_iter().map(|r| r.generation).collect();
        assert_eq!(got, vec![0, 1, 2]);
    }

    #[test]
    fn test_channel_sink_tolerates_dropped_receiver() {
        let (mut sink, rx) = ChannelSink::channel();
        drop(rx);
        sink.on_generation(&report(0, 1.0, vec![0]));
    }

    #[test]
    fn test_null_sink() {
        NullSink.on_generation(&report(0, 2.0, vec![]));
    }
}

//! Off-thread goal comparison with single-flight scheduling.

use crate::meshes_equal;
use shape_types::Point3;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use tracing::debug;

/// Runs the full mesh comparison on a worker thread.
///
/// The per-tick loop calls [`GoalComparator::request`] whenever the player
/// commits a shape and [`GoalComparator::poll`] once per tick. At most one
/// comparison is in flight; a request arriving while one is running parks
/// the new buffers as pending, and `poll` re-spawns for them as soon as the
/// running comparison finishes. The latest observed input is therefore
/// always eventually compared, though not necessarily in strict tick
/// order. There is no cancellation - an in-flight comparison always runs
/// to completion.
///
/// The worker only ever reads buffers cloned at request time, never the
/// live mesh, so no locking is needed.
pub struct GoalComparator {
    tolerance: f32,
    in_flight: Option<Receiver<bool>>,
    pending: Option<(Vec<Point3<f32>>, Vec<Point3<f32>>)>,
    last_result: Option<bool>,
}

impl GoalComparator {
    /// Create a comparator with the given per-axis tolerance.
    #[must_use]
    pub const fn new(tolerance: f32) -> Self {
        Self {
            tolerance,
            in_flight: None,
            pending: None,
            last_result: None,
        }
    }

    /// Schedule a comparison of the current buffer against the goal.
    ///
    /// Both buffers are cloned immediately. If a comparison is already in
    /// flight the clones replace any previously pending pair instead of
    /// spawning a second worker.
    pub fn request(&mut self, current: &[Point3<f32>], goal: &[Point3<f32>]) {
        let snapshot = (current.to_vec(), goal.to_vec());
        if self.in_flight.is_some() {
            debug!("comparison in flight, parking latest input as pending");
            self.pending = Some(snapshot);
        } else {
            self.spawn(snapshot);
        }
    }

    /// Consume a finished comparison result, if one is ready.
    ///
    /// Returns `Some(verdict)` exactly once per completed comparison. When
    /// a pending request is parked, completion immediately spawns the next
    /// comparison.
    pub fn poll(&mut self) -> Option<bool> {
        let receiver = self.in_flight.as_ref()?;
        match receiver.try_recv() {
            Ok(verdict) => {
                self.in_flight = None;
                self.last_result = Some(verdict);
                if let Some(snapshot) = self.pending.take() {
                    self.spawn(snapshot);
                }
                Some(verdict)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                // Worker vanished without a result; drop the flight so a
                // pending or future request can proceed.
                self.in_flight = None;
                if let Some(snapshot) = self.pending.take() {
                    self.spawn(snapshot);
                }
                None
            }
        }
    }

    /// Whether a comparison is currently in flight.
    #[must_use]
    pub const fn is_comparing(&self) -> bool {
        self.in_flight.is_some()
    }

    /// The most recently completed verdict, if any comparison has finished.
    #[must_use]
    pub const fn last_result(&self) -> Option<bool> {
        self.last_result
    }

    fn spawn(&mut self, (current, goal): (Vec<Point3<f32>>, Vec<Point3<f32>>)) {
        let (tx, rx) = mpsc::channel();
        let tolerance = self.tolerance;
        thread::spawn(move || {
            // Send can only fail if the comparator was dropped meanwhile.
            let _ = tx.send(meshes_equal(&current, &goal, tolerance));
        });
        self.in_flight = Some(rx);
    }
}

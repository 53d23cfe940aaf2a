//! Global best record for a run.

/// The best tour observed so far in a run.
///
/// Starts empty at `+inf`. [`offer`](Self::offer) only accepts strictly
/// shorter tours, so the recorded distance never increases.
#[derive(Debug, Clone, PartialEq)]
pub struct GlobalBest {
    tour: Option<Vec<usize>>,
    distance: f64,
}

impl Default for GlobalBest {
    fn default() -> Self {
        Self {
            tour: None,
            distance: f64::INFINITY,
        }
    }
}

impl GlobalBest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a copy of `tour` if `distance` beats the current best.
    ///
    /// Returns `true` if the record changed.
    pub fn offer(&mut self, tour: &[usize], distance: f64) -> bool {
        if distance < self.distance {
            match &mut self.tour {
                Some(existing) => {
                    existing.clear();
                    existing.extend_from_slice(tour);
                }
                None => self.tour = Some(tour.to_vec()),
            }
            self.distance = distance;
            true
        } else {
            false
        }
    }

    /// Back to `{absent, +inf}`.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn tour(&self) -> Option<&[usize]> {
        self.tour.as_deref()
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }
}

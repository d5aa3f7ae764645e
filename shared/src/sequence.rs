//! Prediction request sequencing
//!
//! Every dispatch gets a monotonically increasing generation. Only the latest
//! generation may write to the view; anything older is dropped on arrival.

use serde::Serialize;

use crate::models::PredictionRequest;

/// A dispatched prediction, tagged with its generation
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Dispatch {
    pub generation: u64,
    pub request: PredictionRequest,
}

/// Hands out generations and remembers whether the latest one is still in flight
#[derive(Debug, Clone, Default)]
pub struct RequestSequencer {
    latest: u64,
    in_flight: bool,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self, request: PredictionRequest) -> Dispatch {
        self.latest += 1;
        self.in_flight = true;
        Dispatch {
            generation: self.latest,
            request,
        }
    }

    pub fn latest(&self) -> u64 {
        self.latest
    }

    pub fn is_latest(&self, generation: u64) -> bool {
        generation == self.latest
    }

    /// Whether the latest dispatch has not completed yet
    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    /// Mark `generation` as completed.
    ///
    /// Returns false, changing nothing, unless it is the latest generation and has
    /// not completed before.
    pub fn settle(&mut self, generation: u64) -> bool {
        if !self.in_flight || !self.is_latest(generation) {
            return false;
        }
        self.in_flight = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn request() -> PredictionRequest {
        PredictionRequest::new("Kenya", "Maize")
    }

    #[test]
    fn test_generations_increase() {
        let mut sequencer = RequestSequencer::new();
        let first = sequencer.issue(request());
        let second = sequencer.issue(PredictionRequest::new("Kenya", "Wheat"));

        assert!(second.generation > first.generation);
        assert!(!sequencer.is_latest(first.generation));
        assert!(sequencer.is_latest(second.generation));
    }

    #[test]
    fn test_nothing_in_flight_initially() {
        let mut sequencer = RequestSequencer::new();
        assert!(!sequencer.in_flight());
        assert!(!sequencer.settle(0));
    }

    #[test]
    fn test_settle_only_latest_once() {
        let mut sequencer = RequestSequencer::new();
        let first = sequencer.issue(request());
        let second = sequencer.issue(request());

        assert!(!sequencer.settle(first.generation));
        assert!(sequencer.in_flight());

        assert!(sequencer.settle(second.generation));
        assert!(!sequencer.in_flight());
        assert!(!sequencer.settle(second.generation));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_only_last_dispatch_settles(count in 1usize..20) {
            let mut sequencer = RequestSequencer::new();
            let dispatches: Vec<_> = (0..count).map(|_| sequencer.issue(request())).collect();

            let (last, earlier) = dispatches.split_last().unwrap();
            for dispatch in earlier {
                prop_assert!(!sequencer.settle(dispatch.generation));
            }
            prop_assert!(sequencer.in_flight());
            prop_assert!(sequencer.settle(last.generation));
        }
    }
}

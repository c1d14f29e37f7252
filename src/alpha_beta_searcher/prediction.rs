//! The anticipated continuation of play.

use super::frame::Frame;

/// Best line found by a completed pass: the best root move first, the leaf
/// where the line was scored (or the game ended) last.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Prediction<S> {
    line: Vec<S>,
}

impl<S> Prediction<S> {
    pub fn empty() -> Self {
        Self { line: Vec::new() }
    }

    /// The state at the end of the predicted line.
    pub fn state(&self) -> Option<&S> {
        self.line.last()
    }

    /// The first predicted move, i.e. the best move.
    pub fn next(&self) -> Option<&S> {
        self.line.first()
    }

    pub fn line(&self) -> &[S] {
        &self.line
    }

    pub fn len(&self) -> usize {
        self.line.len()
    }

    pub fn is_empty(&self) -> bool {
        self.line.is_empty()
    }

    pub fn into_line(self) -> Vec<S> {
        self.line
    }
}

/// Reads the line off a completed root frame. Empty without one.
pub(crate) fn build_prediction<S: Clone>(root: Option<&Frame<S>>) -> Prediction<S> {
    match root {
        Some(frame) => Prediction {
            line: frame.line.clone(),
        },
        None => Prediction::empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_completed_root_gives_empty_prediction() {
        let prediction = build_prediction::<u8>(None);
        assert!(prediction.is_empty());
        assert_eq!(prediction.state(), None);
        assert_eq!(prediction.next(), None);
    }

    #[test]
    fn test_prediction_follows_root_line() {
        let mut root = Frame::root(10u8, 3);
        root.line = vec![8, 7, 4];

        let prediction = build_prediction(Some(&root));
        assert_eq!(prediction.next(), Some(&8));
        assert_eq!(prediction.state(), Some(&4));
        assert_eq!(prediction.len(), 3);
        assert_eq!(prediction, build_prediction(Some(&root)));
    }
}

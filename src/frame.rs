//! Animation frame snapshots recorded during hull construction.

use glam::DVec2;

/// A complete snapshot of the algorithm's state at one step of hull
/// construction, intended for sequential playback.
///
/// Each frame holds two flattened lists of points where consecutive pairs form
/// line segments:
///
/// - [`pivot_edges`](Self::pivot_edges): dividing lines still pending in the
///   recursion, typically rendered as tentative lines.
/// - [`hull_edges`](Self::hull_edges): segments already confirmed to lie on
///   the final hull boundary.
///
/// Frames are full snapshots rather than deltas, so any frame can be drawn
/// directly without replaying the ones before it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnimationFrame {
    pivot_edges: Vec<DVec2>,
    hull_edges: Vec<DVec2>,
}

impl AnimationFrame {
    pub(crate) fn new(pivot_edges: Vec<DVec2>, hull_edges: Vec<DVec2>) -> Self {
        Self {
            pivot_edges,
            hull_edges,
        }
    }

    /// Returns the endpoints of the pending dividing lines.
    ///
    /// Consecutive pairs form segments, so the returned slice always has even
    /// length.
    #[inline]
    pub fn pivot_edges(&self) -> &[DVec2] {
        &self.pivot_edges
    }

    /// Returns the endpoints of the segments confirmed to be on the hull.
    ///
    /// Consecutive pairs form segments. The slice has even length for every
    /// frame produced by the algorithm proper; the degenerate single-point
    /// input is the one exception, where it holds that lone point.
    #[inline]
    pub fn hull_edges(&self) -> &[DVec2] {
        &self.hull_edges
    }

    /// Returns an iterator over the pending dividing lines as
    /// `(start, end)` pairs.
    #[inline]
    pub fn pivot_segments(&self) -> impl Iterator<Item = (DVec2, DVec2)> + '_ {
        self.pivot_edges.chunks_exact(2).map(|pair| (pair[0], pair[1]))
    }

    /// Returns an iterator over the confirmed hull segments as
    /// `(start, end)` pairs.
    #[inline]
    pub fn hull_segments(&self) -> impl Iterator<Item = (DVec2, DVec2)> + '_ {
        self.hull_edges.chunks_exact(2).map(|pair| (pair[0], pair[1]))
    }

    pub(crate) fn push_pivot_segment(&mut self, start: DVec2, end: DVec2) {
        self.pivot_edges.push(start);
        self.pivot_edges.push(end);
    }

    /// Removes the trailing pivot segment, both endpoints at once.
    pub(crate) fn pop_pivot_segment(&mut self) {
        self.pivot_edges.pop();
        self.pivot_edges.pop();
    }

    pub(crate) fn push_hull_segment(&mut self, start: DVec2, end: DVec2) {
        self.hull_edges.push(start);
        self.hull_edges.push(end);
    }
}

/// Append-only history of [`AnimationFrame`]s, threaded by mutable reference
/// through the hull recursion.
///
/// Every recorded frame starts as a clone of the latest one, so earlier
/// frames are never touched again once a later frame has copied them.
#[derive(Debug, Default)]
pub(crate) struct FrameRecorder {
    frames: Vec<AnimationFrame>,
}

impl FrameRecorder {
    pub(crate) fn starting_with(frame: AnimationFrame) -> Self {
        Self {
            frames: vec![frame],
        }
    }

    /// Appends a clone of the latest frame and returns it for editing.
    pub(crate) fn record(&mut self) -> &mut AnimationFrame {
        let next = self.frames.last().cloned().unwrap_or_default();
        self.frames.push(next);
        self.frames.last_mut().unwrap()
    }

    pub(crate) fn into_frames(self) -> Vec<AnimationFrame> {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    #[test]
    fn record_clones_latest_without_touching_earlier_frames() {
        let initial = AnimationFrame::new(vec![dvec2(0.0, 0.0), dvec2(1.0, 0.0)], Vec::new());
        let mut recorder = FrameRecorder::starting_with(initial.clone());

        let frame = recorder.record();
        frame.push_pivot_segment(dvec2(0.0, 0.0), dvec2(0.5, 1.0));
        frame.push_pivot_segment(dvec2(0.5, 1.0), dvec2(1.0, 0.0));

        let frame = recorder.record();
        frame.pop_pivot_segment();
        frame.pop_pivot_segment();
        frame.push_hull_segment(dvec2(0.0, 0.0), dvec2(0.5, 1.0));

        let frames = recorder.into_frames();
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0], initial);
        assert_eq!(frames[1].pivot_edges().len(), 6);
        assert_eq!(frames[1].hull_edges().len(), 0);
        assert_eq!(frames[2].pivot_edges(), initial.pivot_edges());
        assert_eq!(
            frames[2].hull_edges(),
            &[dvec2(0.0, 0.0), dvec2(0.5, 1.0)]
        );
    }

    #[test]
    fn segment_iterators_pair_consecutive_points() {
        let frame = AnimationFrame::new(
            vec![
                dvec2(0.0, 0.0),
                dvec2(1.0, 0.0),
                dvec2(1.0, 0.0),
                dvec2(1.0, 1.0),
            ],
            vec![dvec2(2.0, 2.0), dvec2(3.0, 3.0)],
        );

        let pivots: Vec<_> = frame.pivot_segments().collect();
        assert_eq!(
            pivots,
            vec![
                (dvec2(0.0, 0.0), dvec2(1.0, 0.0)),
                (dvec2(1.0, 0.0), dvec2(1.0, 1.0)),
            ]
        );

        let hull: Vec<_> = frame.hull_segments().collect();
        assert_eq!(hull, vec![(dvec2(2.0, 2.0), dvec2(3.0, 3.0))]);
    }
}

use glam::DVec2;

use crate::frame::{AnimationFrame, FrameRecorder};

/// A 2D [convex hull] computed with the Quickhull algorithm, together with
/// the animation frames recorded while it was built.
///
/// The hull is the smallest convex polygon containing all input points. The
/// frames capture each step of the divide-and-conquer recursion, so a
/// renderer can replay the construction by stepping through them in order.
///
/// [convex hull]: https://en.wikipedia.org/wiki/Convex_hull
///
/// # Example
///
/// ```
/// use quickhull_anim::QuickHull2d;
/// use glam::DVec2;
///
/// let points = vec![
///     DVec2::new(0.0, 0.0),
///     DVec2::new(4.0, 0.0),
///     DVec2::new(4.0, 4.0),
///     DVec2::new(0.0, 4.0),
///     DVec2::new(2.0, 2.0),
/// ];
///
/// let hull = QuickHull2d::from_points(&points);
///
/// // The interior point is excluded; the corners are kept in winding order.
/// assert_eq!(
///     hull.vertices(),
///     &[
///         DVec2::new(0.0, 0.0),
///         DVec2::new(0.0, 4.0),
///         DVec2::new(4.0, 4.0),
///         DVec2::new(4.0, 0.0),
///     ],
/// );
///
/// // The last frame has no pending dividing lines left.
/// let last = hull.frames().last().unwrap();
/// assert!(last.pivot_edges().is_empty());
/// ```
pub struct QuickHull2d {
    vertices: Vec<DVec2>,
    frames: Vec<AnimationFrame>,
}

impl QuickHull2d {
    /// Computes the convex hull of the given points, recording an
    /// [`AnimationFrame`] history of the construction.
    ///
    /// The vertices are returned in consistent winding order as a closed
    /// polygon, with the first and last point implicitly connected. Every
    /// vertex is one of the input points.
    ///
    /// Inputs of two or fewer points are returned unchanged as the hull,
    /// with a single frame showing them as already final. The empty input
    /// yields empty vertices and one empty frame.
    pub fn from_points(points: &[DVec2]) -> Self {
        if points.len() <= 2 {
            return Self {
                vertices: points.to_vec(),
                frames: vec![AnimationFrame::new(Vec::new(), points.to_vec())],
            };
        }

        // Extreme points by x coordinate, first occurrence winning ties.
        let mut pivot_low = points[0];
        let mut pivot_high = points[0];
        for &point in &points[1..] {
            if point.x < pivot_low.x {
                pivot_low = point;
            }
            if point.x > pivot_high.x {
                pivot_high = point;
            }
        }

        let (left_partition, right_partition) = divide(points, pivot_low, pivot_high);

        let mut recorder = FrameRecorder::starting_with(AnimationFrame::new(
            vec![pivot_low, pivot_high],
            Vec::new(),
        ));

        // The right partition sees its line reversed so that its points also
        // lie to the left of the line it recurses on.
        let left_hull = hull_set(&left_partition, pivot_low, pivot_high, &mut recorder);
        let right_hull = hull_set(&right_partition, pivot_high, pivot_low, &mut recorder);

        // The initial dividing line is no longer pending.
        recorder.record().pop_pivot_segment();

        let mut vertices = Vec::with_capacity(left_hull.len() + right_hull.len() + 2);
        vertices.push(pivot_low);
        vertices.extend(left_hull);
        vertices.push(pivot_high);
        vertices.extend(right_hull);

        Self {
            vertices,
            frames: recorder.into_frames(),
        }
    }

    /// Returns the hull vertices as a closed polygon in winding order.
    #[inline]
    pub fn vertices(&self) -> &[DVec2] {
        &self.vertices
    }

    /// Returns the recorded animation frames, from initial to final state.
    #[inline]
    pub fn frames(&self) -> &[AnimationFrame] {
        &self.frames
    }

    /// Consumes the hull, returning the vertices and frames.
    #[inline]
    pub fn into_parts(self) -> (Vec<DVec2>, Vec<AnimationFrame>) {
        (self.vertices, self.frames)
    }
}

/// Splits `points` into those strictly left and strictly right of the
/// directed line `pivot_low -> pivot_high`.
///
/// Points exactly on the line are discarded; they are on the boundary or
/// interior of the triangle being processed and cannot be hull candidates.
fn divide(points: &[DVec2], pivot_low: DVec2, pivot_high: DVec2) -> (Vec<DVec2>, Vec<DVec2>) {
    let pivot_vector = pivot_high - pivot_low;

    let mut left = Vec::with_capacity(points.len());
    let mut right = Vec::with_capacity(points.len());

    for &point in points {
        let side = pivot_vector.perp_dot(point - pivot_low);
        if side > 0.0 {
            left.push(point);
        } else if side < 0.0 {
            right.push(point);
        }
    }

    (left, right)
}

/// Finds the point of `points` farthest from the directed line
/// `pivot_low -> pivot_high`, by signed triangle area.
///
/// Exact area ties fall back to the larger angle between the line vector and
/// the vector to the candidate. The exact float comparisons here mirror the
/// side test in [`divide`] and are not robust for nearly collinear inputs.
///
/// All of `points` must lie strictly left of the line, and there must be at
/// least one of them.
fn farthest_point(points: &[DVec2], pivot_low: DVec2, pivot_high: DVec2) -> DVec2 {
    let pivot_vector = pivot_high - pivot_low;

    let mut far_point = points[0];
    let mut max_area = 0.0;
    let mut max_angle = 0.0;

    for &point in points {
        let aux_vector = point - pivot_low;
        let area = pivot_vector.perp_dot(aux_vector) / 2.0;

        if area > max_area {
            max_area = area;
            far_point = point;
        } else if area == max_area {
            let angle = pivot_vector.angle_to(aux_vector);
            if angle > max_angle {
                max_angle = angle;
                far_point = point;
            }
        }
    }

    far_point
}

/// Recursively computes the hull points strictly outside the directed line
/// `pivot_low -> pivot_high`, for points already partitioned to that side.
///
/// Returns the hull points ordered from `pivot_low` towards `pivot_high`;
/// the pivots themselves are not included. Each step appends frames showing
/// the dividing lines it opens and the hull segments it settles.
fn hull_set(
    points: &[DVec2],
    pivot_low: DVec2,
    pivot_high: DVec2,
    recorder: &mut FrameRecorder,
) -> Vec<DVec2> {
    if points.is_empty() {
        return Vec::new();
    }

    if let [point] = points {
        // The lone point is the apex between the two pivots: one frame shows
        // it splitting the pending line, the next finalizes both segments.
        let frame = recorder.record();
        frame.push_pivot_segment(pivot_low, *point);
        frame.push_pivot_segment(*point, pivot_high);

        let frame = recorder.record();
        frame.pop_pivot_segment();
        frame.pop_pivot_segment();
        frame.push_hull_segment(pivot_low, *point);
        frame.push_hull_segment(*point, pivot_high);

        return vec![*point];
    }

    let far_point = farthest_point(points, pivot_low, pivot_high);

    // Points inside the triangle (pivot_low, far_point, pivot_high) fall out
    // of both partitions and are gone for good.
    let (partition1, rest) = divide(points, pivot_low, far_point);
    let (partition2, _) = divide(&rest, far_point, pivot_high);

    let frame = recorder.record();
    frame.push_pivot_segment(pivot_low, far_point);
    frame.push_pivot_segment(far_point, pivot_high);

    let hull1 = hull_set(&partition1, pivot_low, far_point, recorder);
    let hull2 = hull_set(&partition2, far_point, pivot_high, recorder);

    // An empty side means the far point connects straight to that pivot.
    let frame = recorder.record();
    frame.pop_pivot_segment();
    frame.pop_pivot_segment();
    if hull1.is_empty() {
        frame.push_hull_segment(pivot_low, far_point);
    }
    if hull2.is_empty() {
        frame.push_hull_segment(far_point, pivot_high);
    }

    let mut hull = Vec::with_capacity(hull1.len() + hull2.len() + 1);
    hull.extend(hull1);
    hull.push(far_point);
    hull.extend(hull2);

    hull
}

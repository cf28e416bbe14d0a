//! Polygon measurements and simplification on integer point sequences.
//!
//! All sequences are treated as closed curves: the last point connects back to
//! the first.

use imageproc::point::Point;

/// Perimeter of a closed curve.
pub fn arc_length(points: &[Point<i32>]) -> f64 {
    if points.len() < 2 {
        return 0.0;
    }
    points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(a, b)| distance(*a, *b))
        .sum()
}

/// Unsigned enclosed area of a closed polygon (shoelace formula).
pub fn polygon_area(points: &[Point<i32>]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let twice: i64 = (0..n)
        .map(|i| {
            let (p, q) = (points[i], points[(i + 1) % n]);
            p.x as i64 * q.y as i64 - q.x as i64 * p.y as i64
        })
        .sum();
    twice.abs() as f64 / 2.0
}

fn distance(a: Point<i32>, b: Point<i32>) -> f64 {
    let dx = (a.x - b.x) as f64;
    let dy = (a.y - b.y) as f64;
    dx.hypot(dy)
}

/// Distance from `p` to the infinite line through `a` and `b`.
fn line_distance(p: Point<i32>, a: Point<i32>, b: Point<i32>) -> f64 {
    let (dx, dy) = ((b.x - a.x) as f64, (b.y - a.y) as f64);
    let len = dx.hypot(dy);
    if len == 0.0 {
        return distance(p, a);
    }
    let cross = dx * (p.y - a.y) as f64 - dy * (p.x - a.x) as f64;
    cross.abs() / len
}

/// Distance from `p` to the segment between `a` and `b`.
fn segment_distance(p: Point<i32>, a: Point<i32>, b: Point<i32>) -> f64 {
    let (dx, dy) = ((b.x - a.x) as f64, (b.y - a.y) as f64);
    let len_sq = dx * dx + dy * dy;
    if len_sq == 0.0 {
        return distance(p, a);
    }
    let t = ((p.x - a.x) as f64 * dx + (p.y - a.y) as f64 * dy) / len_sq;
    if t <= 0.0 {
        distance(p, a)
    } else if t >= 1.0 {
        distance(p, b)
    } else {
        line_distance(p, a, b)
    }
}

fn farthest_from(points: &[Point<i32>], from: Point<i32>) -> usize {
    let mut best = 0;
    let mut best_dist = -1.0;
    for (i, p) in points.iter().enumerate() {
        let d = distance(*p, from);
        if d > best_dist {
            best = i;
            best_dist = d;
        }
    }
    best
}

/// Approximates a closed curve with fewer vertices (Douglas-Peucker).
///
/// Every dropped point lies within `epsilon` of the simplified outline. The curve
/// is split at two mutually distant anchor points, each half is simplified on its
/// own, and vertices that end up within `epsilon` of the segment joining their
/// neighbours are removed. Spikes that double back along a neighbour's line keep
/// their tip. The output keeps the input's winding.
pub fn approximate_polygon(points: &[Point<i32>], epsilon: f64) -> Vec<Point<i32>> {
    let n = points.len();
    if n < 3 {
        return points.to_vec();
    }

    // Refine the anchors a few times so they settle on extreme points
    let mut a = 0;
    let mut b = farthest_from(points, points[a]);
    for _ in 0..2 {
        a = farthest_from(points, points[b]);
        b = farthest_from(points, points[a]);
    }
    if a == b {
        return vec![points[a]];
    }

    let (first, second) = (a.min(b), a.max(b));
    let forward: Vec<Point<i32>> = points[first..=second].to_vec();
    let backward: Vec<Point<i32>> = points[second..]
        .iter()
        .chain(points[..=first].iter())
        .copied()
        .collect();

    let mut result = simplify_chain(&forward, epsilon);
    result.pop();
    let mut tail = simplify_chain(&backward, epsilon);
    tail.pop();
    result.extend(tail);

    remove_flat_vertices(result, epsilon)
}

/// Douglas-Peucker on an open chain; both end points are kept.
fn simplify_chain(chain: &[Point<i32>], epsilon: f64) -> Vec<Point<i32>> {
    let last = chain.len() - 1;
    let mut keep = vec![false; chain.len()];
    keep[0] = true;
    keep[last] = true;

    let mut stack = vec![(0usize, last)];
    while let Some((start, end)) = stack.pop() {
        if end <= start + 1 {
            continue;
        }
        let (mut split, mut max_dist) = (start, 0.0);
        for i in start + 1..end {
            let d = line_distance(chain[i], chain[start], chain[end]);
            if d > max_dist {
                split = i;
                max_dist = d;
            }
        }
        if max_dist > epsilon {
            keep[split] = true;
            stack.push((split, end));
            stack.push((start, split));
        }
    }

    chain
        .iter()
        .zip(keep)
        .filter_map(|(p, k)| k.then_some(*p))
        .collect()
}

fn remove_flat_vertices(mut polygon: Vec<Point<i32>>, epsilon: f64) -> Vec<Point<i32>> {
    let mut i = 0;
    while polygon.len() > 3 && i < polygon.len() {
        let n = polygon.len();
        let prev = polygon[(i + n - 1) % n];
        let next = polygon[(i + 1) % n];
        if segment_distance(polygon[i], prev, next) <= epsilon {
            polygon.remove(i);
            // Neighbours may have become flat; recheck from the previous vertex
            i = i.saturating_sub(1);
        } else {
            i += 1;
        }
    }
    polygon
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(raw: &[(i32, i32)]) -> Vec<Point<i32>> {
        raw.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    /// Every integer point along the outline of a closed polygon.
    fn densify(corners: &[(i32, i32)]) -> Vec<Point<i32>> {
        let mut out = Vec::new();
        for i in 0..corners.len() {
            let (x0, y0) = corners[i];
            let (x1, y1) = corners[(i + 1) % corners.len()];
            let steps = (x1 - x0).abs().max((y1 - y0).abs());
            for s in 0..steps {
                let t = s as f64 / steps as f64;
                out.push(Point::new(
                    (x0 as f64 + t * (x1 - x0) as f64).round() as i32,
                    (y0 as f64 + t * (y1 - y0) as f64).round() as i32,
                ));
            }
        }
        out
    }

    #[test]
    fn test_polygon_area_shoelace() {
        assert_eq!(polygon_area(&pts(&[(0, 0), (4, 0), (4, 3)])), 6.0);
        assert_eq!(polygon_area(&pts(&[(4, 3), (4, 0), (0, 0)])), 6.0);
        assert_eq!(polygon_area(&pts(&[(0, 0), (10, 0), (10, 10), (0, 10)])), 100.0);
        assert_eq!(polygon_area(&pts(&[(0, 0), (5, 5), (10, 10)])), 0.0);
        assert_eq!(polygon_area(&pts(&[(0, 0), (5, 5)])), 0.0);
    }

    #[test]
    fn test_arc_length_closes_the_curve() {
        assert_eq!(arc_length(&pts(&[(0, 0), (3, 0), (3, 4)])), 12.0);
        assert_eq!(arc_length(&pts(&[(0, 0), (0, 10), (10, 10), (10, 0)])), 40.0);
        assert_eq!(arc_length(&pts(&[(2, 2)])), 0.0);
    }

    #[test]
    fn test_line_distance() {
        let d = line_distance(Point::new(0, 5), Point::new(-10, 0), Point::new(10, 0));
        assert_eq!(d, 5.0);
        let d = line_distance(Point::new(3, 4), Point::new(0, 0), Point::new(0, 0));
        assert_eq!(d, 5.0);
    }

    #[test]
    fn test_segment_distance_clamps_to_end_points() {
        let (a, b) = (Point::new(0, 0), Point::new(0, 10));
        assert_eq!(segment_distance(Point::new(3, 5), a, b), 3.0);
        assert_eq!(segment_distance(Point::new(0, 40), a, b), 30.0);
        assert_eq!(segment_distance(Point::new(0, -4), a, b), 4.0);
        // The infinite line passes through both of these
        assert_eq!(line_distance(Point::new(0, 40), a, b), 0.0);
    }

    #[test]
    fn test_thin_l_keeps_both_arm_tips() {
        // Outline of two 1-px arms meeting at (5, 5)
        let outline = pts(&[(5, 5), (5, 44), (5, 6), (6, 5), (44, 5)]);
        let eps = 0.03 * arc_length(&outline);
        let approx = approximate_polygon(&outline, eps);

        assert_eq!(approx.len(), 4, "approx = {:?}", approx);
        for tip in [(5, 44), (44, 5), (5, 5)] {
            assert!(approx.contains(&Point::new(tip.0, tip.1)), "{:?} dropped from {:?}", tip, approx);
        }
    }

    #[test]
    fn test_spike_tip_survives_flat_vertex_pass() {
        // Neighbours of (0, 30) both lie on the line x = 0
        let polygon = pts(&[(0, 30), (0, 1), (40, 0), (0, 0)]);
        let kept = remove_flat_vertices(polygon, 2.0);
        assert!(kept.contains(&Point::new(0, 30)), "kept = {:?}", kept);
    }

    #[test]
    fn test_dense_triangle_reduces_to_three_vertices() {
        let outline = densify(&[(50, 5), (95, 90), (5, 90)]);
        let eps = 0.03 * arc_length(&outline);
        let approx = approximate_polygon(&outline, eps);

        assert_eq!(approx.len(), 3, "approx = {:?}", approx);
        for corner in [(50, 5), (95, 90), (5, 90)] {
            assert!(approx
                .iter()
                .any(|p| (p.x - corner.0).abs() <= 1 && (p.y - corner.1).abs() <= 1));
        }
    }

    #[test]
    fn test_dense_square_keeps_four_vertices() {
        let outline = densify(&[(10, 10), (60, 10), (60, 60), (10, 60)]);
        let eps = 0.03 * arc_length(&outline);
        let approx = approximate_polygon(&outline, eps);

        assert_eq!(approx.len(), 4, "approx = {:?}", approx);
        assert_eq!(polygon_area(&approx), 2500.0);
    }

    #[test]
    fn test_large_epsilon_collapses_shape() {
        let outline = densify(&[(10, 10), (60, 10), (60, 60), (10, 60)]);
        let approx = approximate_polygon(&outline, 1000.0);
        assert!(approx.len() < 3);
    }

    #[test]
    fn test_three_point_curve_is_preserved() {
        let triangle = pts(&[(0, 0), (40, 0), (0, 30)]);
        let eps = 0.03 * arc_length(&triangle);
        let approx = approximate_polygon(&triangle, eps);

        assert_eq!(approx.len(), 3);
        for p in &triangle {
            assert!(approx.contains(p));
        }
        assert_eq!(polygon_area(&approx), 600.0);
    }
}

//! Polyline primitives: geodesic length, nearest point, and sub-slicing.
//!
//! A polyline is a plain `&[GeoPoint]`.  Positions along it are described by
//! a [`PolylinePosition`]: the segment index plus the fraction `t` along
//! that segment.  Ordering positions by `(segment, t)` is exact, unlike
//! comparing accumulated metre offsets.
//!
//! # Projection
//!
//! Segments are short at campus scale, so points are projected in a local
//! equirectangular plane (longitude scaled by `cos(lat)` of the query
//! point) and the projected point is interpolated in lat/lon.  Distances
//! reported to callers are always haversine metres.  Segments crossing the
//! antimeridian are not supported.

use crate::GeoPoint;

/// A located point on a polyline.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PolylinePosition {
    /// The coordinate on the polyline.
    pub point: GeoPoint,
    /// Index of the segment `polyline[segment] → polyline[segment + 1]`.
    pub segment: usize,
    /// Fraction along the segment in `[0, 1]`.
    pub t: f64,
    /// Distance from `point` to the query point that produced it.  Zero for
    /// positions built with [`start`](Self::start) / [`end`](Self::end).
    pub distance_m: f64,
    /// Geodesic distance from the first vertex to `point` along the polyline.
    pub along_m: f64,
}

impl PolylinePosition {
    /// The first vertex of `polyline`, or `None` if it is empty.
    pub fn start(polyline: &[GeoPoint]) -> Option<Self> {
        let point = *polyline.first()?;
        Some(Self { point, segment: 0, t: 0.0, distance_m: 0.0, along_m: 0.0 })
    }

    /// The last vertex of `polyline`, or `None` if it is empty.
    pub fn end(polyline: &[GeoPoint]) -> Option<Self> {
        let point = *polyline.last()?;
        let (segment, t) = match polyline.len() {
            1 => (0, 0.0),
            n => (n - 2, 1.0),
        };
        Some(Self { point, segment, t, distance_m: 0.0, along_m: geodesic_length(polyline) })
    }

    /// `true` if `self` lies strictly further along the polyline than `other`.
    #[inline]
    pub fn is_after(&self, other: &PolylinePosition) -> bool {
        self.segment > other.segment || (self.segment == other.segment && self.t > other.t)
    }
}

/// Sum of haversine distances between consecutive vertices.
///
/// Empty and single-point polylines have length 0.
pub fn geodesic_length(polyline: &[GeoPoint]) -> f64 {
    polyline
        .windows(2)
        .fold(0.0, |acc, w| acc + w[0].distance_m(w[1]))
}

/// Closest point on `polyline` to `query`.
///
/// Every segment is tried in order and the first strictly-closer candidate
/// wins, so ties resolve to the earliest segment.  Returns `None` only for
/// an empty polyline; a single-point polyline yields that point.
pub fn nearest_point_on_polyline(polyline: &[GeoPoint], query: GeoPoint) -> Option<PolylinePosition> {
    let (&first, rest) = polyline.split_first()?;
    if rest.is_empty() {
        return Some(PolylinePosition {
            point: first,
            segment: 0,
            t: 0.0,
            distance_m: first.distance_m(query),
            along_m: 0.0,
        });
    }

    let kx = query.lat.to_radians().cos();
    let mut best: Option<PolylinePosition> = None;
    let mut along_m = 0.0;

    for (segment, w) in polyline.windows(2).enumerate() {
        let (a, b) = (w[0], w[1]);
        let t = segment_fraction(a, b, query, kx);
        let point = a.lerp(b, t);
        let distance_m = point.distance_m(query);

        if best.is_none_or(|p| distance_m < p.distance_m) {
            best = Some(PolylinePosition {
                point,
                segment,
                t,
                distance_m,
                along_m: along_m + a.distance_m(point),
            });
        }
        along_m += a.distance_m(b);
    }
    best
}

/// The part of `polyline` between two points lying on it, in the
/// `start → end` direction.
///
/// Both points are located with [`nearest_point_on_polyline`] to find which
/// vertices fall between them, but the returned slice begins with exactly
/// `start` and ends with exactly `end`.  If `start` lies after `end` the
/// result runs backwards along the polyline.
pub fn sub_slice(polyline: &[GeoPoint], start: GeoPoint, end: GeoPoint) -> Vec<GeoPoint> {
    let (Some(mut from), Some(mut to)) = (
        nearest_point_on_polyline(polyline, start),
        nearest_point_on_polyline(polyline, end),
    ) else {
        return Vec::new();
    };
    from.point = start;
    to.point = end;
    slice_between(polyline, &from, &to)
}

/// Like [`sub_slice`] for positions that are already located.
///
/// The output never holds the same coordinate twice in a row, e.g. when a
/// position sits exactly on a vertex.
pub fn slice_between(polyline: &[GeoPoint], from: &PolylinePosition, to: &PolylinePosition) -> Vec<GeoPoint> {
    if from.is_after(to) {
        let mut out = slice_between(polyline, to, from);
        out.reverse();
        return out;
    }

    let mut out = Vec::with_capacity(to.segment - from.segment + 2);
    push_distinct(&mut out, from.point);
    for &v in &polyline[from.segment + 1..=to.segment] {
        push_distinct(&mut out, v);
    }
    push_distinct(&mut out, to.point);
    out
}

/// Append `leg` to `route`, dropping the leg's first point if it equals the
/// route's last point.
///
/// Equality is exact: a distinct point is never dropped for merely being
/// close.
pub fn append_leg(route: &mut Vec<GeoPoint>, leg: &[GeoPoint]) {
    match (route.last(), leg.split_first()) {
        (Some(last), Some((first, rest))) if last == first => route.extend_from_slice(rest),
        _ => route.extend_from_slice(leg),
    }
}

#[inline]
fn push_distinct(out: &mut Vec<GeoPoint>, p: GeoPoint) {
    if out.last() != Some(&p) {
        out.push(p);
    }
}

/// Clamped projection fraction of `p` onto segment `a → b` in the local
/// plane.  A zero-length segment projects to its start.
fn segment_fraction(a: GeoPoint, b: GeoPoint, p: GeoPoint, kx: f64) -> f64 {
    let dx = (b.lon - a.lon) * kx;
    let dy = b.lat - a.lat;
    let len2 = dx * dx + dy * dy;
    if len2 == 0.0 {
        return 0.0;
    }
    let px = (p.lon - a.lon) * kx;
    let py = p.lat - a.lat;
    ((px * dx + py * dy) / len2).clamp(0.0, 1.0)
}

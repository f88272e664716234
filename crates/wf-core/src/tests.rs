//! Unit tests for wf-core primitives.

#[cfg(test)]
mod ids {
    use crate::{EdgeId, NodeId};

    #[test]
    fn index_roundtrip() {
        let id = NodeId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(NodeId::try_from(42usize).unwrap(), id);
        assert_eq!(NodeId::from_index(42), id);
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(NodeId::INVALID.0, u32::MAX);
        assert_eq!(EdgeId::INVALID.0, u32::MAX);
        assert_eq!(NodeId::default(), NodeId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(NodeId(7).to_string(), "NodeId(7)");
        assert_eq!(EdgeId(3).to_string(), "EdgeId(3)");
    }
}

#[cfg(test)]
mod geo {
    use crate::GeoPoint;

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(51.5226, -0.1302);
        assert_eq!(p.distance_m(p), 0.0);
    }

    #[test]
    fn one_degree_latitude() {
        let a = GeoPoint::new(30.0, -88.0);
        let b = GeoPoint::new(31.0, -88.0);
        let d = a.distance_m(b);
        assert!((d - 111_195.0).abs() < 1.0, "got {d}");
    }

    #[test]
    fn equator_distance_is_linear_in_longitude() {
        let o = GeoPoint::new(0.0, 0.0);
        let d5 = o.distance_m(GeoPoint::new(0.0, 5.0));
        let d10 = o.distance_m(GeoPoint::new(0.0, 10.0));
        assert!((d10 - 2.0 * d5).abs() < 1e-6, "{d10} vs {d5}");
    }

    #[test]
    fn lerp_ends_are_exact() {
        let a = GeoPoint::new(0.1, 0.7);
        let b = GeoPoint::new(0.3, 0.9);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
    }

    #[test]
    fn lerp_start_keeps_signed_zero() {
        let a = GeoPoint::new(-0.0, -0.0);
        let b = GeoPoint::new(1.0, 1.0);
        let start = a.lerp(b, 0.0);
        assert!(start.lat.is_sign_negative() && start.lon.is_sign_negative());
        assert_eq!(a.lerp(b, -0.5), a);
    }

    #[test]
    fn pair_conversion() {
        let p: GeoPoint = [1.5, -2.5].into();
        assert_eq!(p, GeoPoint::new(1.5, -2.5));
        assert_eq!(<[f64; 2]>::from(p), [1.5, -2.5]);
    }
}

#[cfg(test)]
mod polyline {
    use crate::{
        append_leg, geodesic_length, nearest_point_on_polyline, sub_slice, GeoPoint,
        PolylinePosition,
    };

    fn p(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(lat, lon)
    }

    /// Three vertices along the equator, one degree apart.
    fn equator() -> Vec<GeoPoint> {
        vec![p(0.0, 0.0), p(0.0, 1.0), p(0.0, 2.0)]
    }

    #[test]
    fn degenerate_lengths_are_zero() {
        assert_eq!(geodesic_length(&[]), 0.0);
        assert_eq!(geodesic_length(&[p(1.0, 1.0)]), 0.0);
        assert_eq!(geodesic_length(&[p(1.0, 1.0), p(1.0, 1.0)]), 0.0);
    }

    #[test]
    fn degenerate_lengths_are_positive_zero() {
        assert!(geodesic_length(&[]).is_sign_positive());
        assert!(geodesic_length(&[p(1.0, 1.0)]).is_sign_positive());
    }

    #[test]
    fn length_sums_segments() {
        let line = equator();
        let expected = line[0].distance_m(line[1]) + line[1].distance_m(line[2]);
        assert_eq!(geodesic_length(&line), expected);
    }

    #[test]
    fn nearest_on_empty_is_none() {
        assert!(nearest_point_on_polyline(&[], p(0.0, 0.0)).is_none());
    }

    #[test]
    fn nearest_on_single_point() {
        let pos = nearest_point_on_polyline(&[p(0.0, 0.0)], p(0.0, 1.0)).unwrap();
        assert_eq!(pos.point, p(0.0, 0.0));
        assert_eq!(pos.along_m, 0.0);
        assert!(pos.distance_m > 100_000.0);
    }

    #[test]
    fn nearest_point_exactly_on_line() {
        let pos = nearest_point_on_polyline(&[p(0.0, 0.0), p(0.0, 10.0)], p(0.0, 5.0)).unwrap();
        assert_eq!(pos.point, p(0.0, 5.0));
        assert_eq!(pos.distance_m, 0.0);
        assert_eq!(pos.segment, 0);
        assert_eq!(pos.t, 0.5);
    }

    #[test]
    fn nearest_picks_later_segment_and_accumulates() {
        let line = equator();
        let pos = nearest_point_on_polyline(&line, p(0.001, 1.5)).unwrap();
        assert_eq!(pos.segment, 1);
        assert!((pos.point.lon - 1.5).abs() < 1e-9);
        assert!(pos.point.lat.abs() < 1e-12);
        let expected = p(0.0, 0.0).distance_m(p(0.0, 1.5));
        assert!((pos.along_m - expected).abs() < 1e-3, "{} vs {expected}", pos.along_m);
    }

    #[test]
    fn nearest_clamps_past_the_end() {
        let line = equator();
        let pos = nearest_point_on_polyline(&line, p(0.0, 3.0)).unwrap();
        assert_eq!(pos.point, p(0.0, 2.0));
        assert_eq!(pos.segment, 1);
        assert_eq!(pos.t, 1.0);
    }

    #[test]
    fn nearest_tie_keeps_first_segment() {
        // Out and back over the same ground: both segments project to the
        // same point at the same distance.
        let line = vec![p(0.0, 0.0), p(0.0, 1.0), p(0.0, 0.0)];
        let pos = nearest_point_on_polyline(&line, p(0.1, 0.5)).unwrap();
        assert_eq!(pos.segment, 0);
    }

    #[test]
    fn zero_length_segment_does_not_panic() {
        let line = vec![p(0.0, 0.0), p(0.0, 0.0)];
        let pos = nearest_point_on_polyline(&line, p(0.0, 1.0)).unwrap();
        assert_eq!(pos.point, p(0.0, 0.0));
        assert_eq!(pos.t, 0.0);
    }

    #[test]
    fn sub_slice_keeps_intermediate_vertices() {
        let line = equator();
        let s = sub_slice(&line, p(0.0, 0.5), p(0.0, 1.5));
        assert_eq!(s, vec![p(0.0, 0.5), p(0.0, 1.0), p(0.0, 1.5)]);
    }

    #[test]
    fn sub_slice_reversed_runs_backwards() {
        let line = equator();
        let s = sub_slice(&line, p(0.0, 1.5), p(0.0, 0.0));
        assert_eq!(s, vec![p(0.0, 1.5), p(0.0, 1.0), p(0.0, 0.0)]);
    }

    #[test]
    fn sub_slice_on_a_vertex_has_no_duplicate() {
        let line = equator();
        let s = sub_slice(&line, p(0.0, 1.0), p(0.0, 2.0));
        assert_eq!(s, vec![p(0.0, 1.0), p(0.0, 2.0)]);
    }

    #[test]
    fn sub_slice_same_point_is_single_vertex() {
        let line = equator();
        let s = sub_slice(&line, p(0.0, 2.0), p(0.0, 2.0));
        assert_eq!(s, vec![p(0.0, 2.0)]);
    }

    #[test]
    fn endpoint_positions() {
        let line = equator();
        let start = PolylinePosition::start(&line).unwrap();
        let end = PolylinePosition::end(&line).unwrap();
        assert_eq!(start.point, line[0]);
        assert_eq!(end.point, line[2]);
        assert!(end.is_after(&start));
        assert!(!start.is_after(&end));
        assert_eq!(end.along_m, geodesic_length(&line));
        assert!(PolylinePosition::end(&[]).is_none());
    }

    #[test]
    fn append_leg_collapses_exact_junction() {
        let mut route = vec![p(0.0, 0.0), p(0.0, 1.0)];
        append_leg(&mut route, &[p(0.0, 1.0), p(0.0, 2.0)]);
        assert_eq!(route, vec![p(0.0, 0.0), p(0.0, 1.0), p(0.0, 2.0)]);
    }

    #[test]
    fn append_leg_keeps_nearby_but_distinct_point() {
        let mut route = vec![p(0.0, 0.0), p(0.0, 1.0)];
        append_leg(&mut route, &[p(0.0, 1.0 + 1e-12), p(0.0, 2.0)]);
        assert_eq!(route.len(), 4);
    }

    #[test]
    fn append_leg_to_empty_route() {
        let mut route = Vec::new();
        append_leg(&mut route, &[p(0.0, 1.0), p(0.0, 2.0)]);
        assert_eq!(route, vec![p(0.0, 1.0), p(0.0, 2.0)]);
    }
}

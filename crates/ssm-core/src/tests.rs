//! Unit tests for ssm-core primitives.

#[cfg(test)]
mod ids {
    use crate::{NodeId, WayId};

    #[test]
    fn index_cast() {
        assert_eq!(NodeId(42).index(), 42);
        assert_eq!(usize::from(WayId(7)), 7);
    }

    #[test]
    fn ordering() {
        assert!(NodeId(0) < NodeId(1));
        assert!(WayId(100) > WayId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(NodeId::INVALID.0, u32::MAX);
        assert_eq!(WayId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display_is_bare_number() {
        // Ids appear verbatim in REPL output, so no type-name wrapper.
        assert_eq!(NodeId(7).to_string(), "7");
        assert_eq!(WayId(12).to_string(), "12");
    }
}

#[cfg(test)]
mod geo {
    use crate::GeoPoint;

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(43.6629, -79.3957);
        assert!(p.distance_km(p) < 1e-9);
    }

    #[test]
    fn one_degree_of_latitude() {
        // ~111.19 km per degree of latitude on a 6371 km sphere.
        let a = GeoPoint::new(43.0, -79.0);
        let b = GeoPoint::new(44.0, -79.0);
        let d = a.distance_km(b);
        assert!((d - 111.195).abs() < 0.01, "got {d}");
    }

    #[test]
    fn symmetric() {
        let a = GeoPoint::new(43.6629, -79.3957);
        let b = GeoPoint::new(43.6536, -79.3832);
        assert!((a.distance_km(b) - b.distance_km(a)).abs() < 1e-12);
    }

    #[test]
    fn display_seven_decimals() {
        let p = GeoPoint::new(43.66, -79.39);
        assert_eq!(p.to_string(), "(43.6600000, -79.3900000)");
    }
}

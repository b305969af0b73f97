//! Unit tests for ssm-graph.
//!
//! All tests use hand-built fixtures; no map file on disk is required.

#[cfg(test)]
mod helpers {
    use ssm_core::{GeoPoint, NodeId, WayId};

    use crate::{StreetMap, StreetMapBuilder};

    /// Five nodes, three ways:
    ///
    /// ```text
    /// College Street   (way 0, 40 km/h, both ways):  0 - 1 - 2
    /// Spadina Avenue   (way 1, 50 km/h, one-way):    2 → 3 → 4
    /// Bloor Street West (way 2, 60 km/h, both ways): 0 - 4
    /// ```
    pub fn campus_map() -> StreetMap {
        let mut b = StreetMapBuilder::new(5, 3).unwrap();
        b.add_way(
            WayId(0),
            "College Street",
            40.0,
            false,
            vec![NodeId(0), NodeId(1), NodeId(2)],
        )
        .unwrap();
        b.add_way(
            WayId(1),
            "Spadina Avenue",
            50.0,
            true,
            vec![NodeId(2), NodeId(3), NodeId(4)],
        )
        .unwrap();
        b.add_way(WayId(2), "Bloor Street West", 60.0, false, vec![NodeId(0), NodeId(4)])
            .unwrap();

        let coords = [
            (43.6596, -79.4000),
            (43.6592, -79.3980),
            (43.6588, -79.3960),
            (43.6630, -79.3965),
            (43.6672, -79.3970),
        ];
        let incident: [&[u32]; 5] = [&[0, 2], &[0], &[0, 1], &[1], &[1, 2]];
        for (i, ((lat, lon), ways)) in coords.iter().zip(incident).enumerate() {
            b.add_node(
                NodeId(i as u32),
                GeoPoint::new(*lat, *lon),
                ways.iter().map(|&w| WayId(w)).collect(),
            )
            .unwrap();
        }
        b.build().unwrap()
    }
}

// ── Builder contract ──────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use ssm_core::{GeoPoint, NodeId, WayId};

    use crate::{GraphError, StreetMapBuilder};

    #[test]
    fn zero_capacity_rejected() {
        assert_eq!(StreetMapBuilder::new(0, 3).unwrap_err(), GraphError::ZeroCapacity);
        assert_eq!(StreetMapBuilder::new(3, 0).unwrap_err(), GraphError::ZeroCapacity);
    }

    #[test]
    fn id_collision_rejected() {
        let mut b = StreetMapBuilder::new(2, 1).unwrap();
        b.add_node(NodeId(0), GeoPoint::new(0.0, 0.0), vec![WayId(0)]).unwrap();
        let err = b.add_node(NodeId(0), GeoPoint::new(1.0, 1.0), vec![WayId(0)]);
        assert_eq!(err.unwrap_err(), GraphError::DuplicateNode(NodeId(0)));
    }

    #[test]
    fn out_of_range_id_rejected() {
        let mut b = StreetMapBuilder::new(2, 1).unwrap();
        let err = b.add_way(WayId(5), "Elsewhere Road", 50.0, false, vec![NodeId(0)]);
        assert!(matches!(err.unwrap_err(), GraphError::WayIdOutOfRange { .. }));
    }

    #[test]
    fn empty_way_rejected() {
        let mut b = StreetMapBuilder::new(2, 1).unwrap();
        let err = b.add_way(WayId(0), "Ghost Road", 50.0, false, vec![]);
        assert_eq!(err.unwrap_err(), GraphError::EmptyWay(WayId(0)));
    }

    #[test]
    fn repeated_node_in_way_rejected() {
        let mut b = StreetMapBuilder::new(3, 1).unwrap();
        let err = b.add_way(
            WayId(0),
            "Loop Road",
            50.0,
            false,
            vec![NodeId(0), NodeId(1), NodeId(0)],
        );
        assert_eq!(
            err.unwrap_err(),
            GraphError::RepeatedNodeInWay { way: WayId(0), node: NodeId(0) }
        );
    }

    #[test]
    fn negative_speed_rejected() {
        let mut b = StreetMapBuilder::new(2, 1).unwrap();
        let err = b.add_way(WayId(0), "Backwards Road", -5.0, false, vec![NodeId(0), NodeId(1)]);
        assert_eq!(err.unwrap_err(), GraphError::InvalidSpeed(WayId(0)));
    }

    #[test]
    fn unfilled_slot_fails_build() {
        let mut b = StreetMapBuilder::new(2, 1).unwrap();
        b.add_way(WayId(0), "Main Street", 50.0, false, vec![NodeId(0), NodeId(1)])
            .unwrap();
        b.add_node(NodeId(0), GeoPoint::new(0.0, 0.0), vec![WayId(0)]).unwrap();
        // node 1 never added
        assert_eq!(b.build().unwrap_err(), GraphError::MissingNode(NodeId(1)));
    }

    #[test]
    fn inconsistent_incidence_fails_build() {
        let mut b = StreetMapBuilder::new(2, 1).unwrap();
        b.add_way(WayId(0), "Main Street", 50.0, false, vec![NodeId(0), NodeId(1)])
            .unwrap();
        b.add_node(NodeId(0), GeoPoint::new(0.0, 0.0), vec![WayId(0)]).unwrap();
        // node 1 is on way 0's chain but does not list it back.
        b.add_node(NodeId(1), GeoPoint::new(0.0, 1.0), vec![]).unwrap();
        assert_eq!(
            b.build().unwrap_err(),
            GraphError::InconsistentIncidence { node: NodeId(1), way: WayId(0) }
        );
    }

    #[test]
    fn insertion_order_is_free() {
        // Ways may reference nodes that are added afterwards.
        let mut b = StreetMapBuilder::new(2, 1).unwrap();
        b.add_way(WayId(0), "Main Street", 50.0, false, vec![NodeId(0), NodeId(1)])
            .unwrap();
        b.add_node(NodeId(1), GeoPoint::new(0.0, 1.0), vec![WayId(0)]).unwrap();
        b.add_node(NodeId(0), GeoPoint::new(0.0, 0.0), vec![WayId(0)]).unwrap();
        let map = b.build().unwrap();
        assert_eq!(map.node_count(), 2);
        assert_eq!(map.way_count(), 1);
    }
}

// ── Lookup & name search ──────────────────────────────────────────────────────

#[cfg(test)]
mod queries {
    use ssm_core::{NodeId, WayId};

    #[test]
    fn lookup_by_id() {
        let map = super::helpers::campus_map();
        assert_eq!(map.way(WayId(1)).unwrap().name, "Spadina Avenue");
        assert!(map.way(WayId(1)).unwrap().one_way);
        assert_eq!(map.node(NodeId(3)).unwrap().way_ids, vec![WayId(1)]);
        assert!(map.node(NodeId(99)).is_none());
        assert!(map.way(WayId(99)).is_none());
    }

    #[test]
    fn find_ways_ascending() {
        let map = super::helpers::campus_map();
        assert_eq!(map.find_ways_by_name("Street"), vec![WayId(0), WayId(2)]);
        assert_eq!(map.find_ways_by_name("Spadina"), vec![WayId(1)]);
        assert!(map.find_ways_by_name("Queen").is_empty());
    }

    #[test]
    fn find_nodes_single_keyword() {
        let map = super::helpers::campus_map();
        assert_eq!(
            map.find_nodes_by_names("College", None),
            vec![NodeId(0), NodeId(1), NodeId(2)]
        );
    }

    #[test]
    fn find_nodes_two_keywords_is_an_intersection() {
        let map = super::helpers::campus_map();
        // College Street and Spadina Avenue cross at node 2.
        assert_eq!(
            map.find_nodes_by_names("College", Some("Spadina")),
            vec![NodeId(2)]
        );
    }

    #[test]
    fn two_keywords_need_two_distinct_ways() {
        let map = super::helpers::campus_map();
        // "College Street" alone matches both keywords, but node 1 touches
        // no second way, so it must not qualify. Node 0 does: "Street"
        // via Bloor Street West, "College" via College Street.
        assert_eq!(
            map.find_nodes_by_names("Street", Some("College")),
            vec![NodeId(0)]
        );
    }
}

// ── Adjacency ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod adjacency {
    use ssm_core::{NodeId, WayId};

    use crate::Neighbor;

    fn targets(neighbors: &[Neighbor]) -> Vec<NodeId> {
        neighbors.iter().map(|n| n.node).collect()
    }

    #[test]
    fn interior_of_bidirectional_way() {
        let map = super::helpers::campus_map();
        let mut got = targets(&map.neighbors(NodeId(1)));
        got.sort();
        assert_eq!(got, vec![NodeId(0), NodeId(2)]);
    }

    #[test]
    fn interior_of_one_way_goes_forward_only() {
        let map = super::helpers::campus_map();
        assert_eq!(
            map.neighbors(NodeId(3)),
            vec![Neighbor { node: NodeId(4), via: WayId(1) }]
        );
    }

    #[test]
    fn one_way_tail_has_no_backward_step() {
        let map = super::helpers::campus_map();
        // Node 4 ends Spadina Avenue (one-way), so only Bloor leads out.
        assert_eq!(
            map.neighbors(NodeId(4)),
            vec![Neighbor { node: NodeId(0), via: WayId(2) }]
        );
    }

    #[test]
    fn no_skipping_along_a_chain() {
        let map = super::helpers::campus_map();
        // 0 and 2 share College Street but are not consecutive on it.
        let got = targets(&map.neighbors(NodeId(0)));
        assert!(!got.contains(&NodeId(2)));
        assert!(got.contains(&NodeId(1)));
    }

    #[test]
    fn reports_the_connecting_way() {
        let map = super::helpers::campus_map();
        for n in map.neighbors(NodeId(2)) {
            let way = map.way(n.via).unwrap();
            assert!(way.contains(NodeId(2)) && way.contains(n.node));
        }
    }

    #[test]
    fn unknown_node_has_no_neighbors() {
        let map = super::helpers::campus_map();
        assert!(map.neighbors(NodeId(99)).is_empty());
    }
}

// ── Spatial nearest-node ──────────────────────────────────────────────────────

#[cfg(test)]
mod spatial {
    use ssm_core::{GeoPoint, NodeId};

    #[test]
    fn exact_position() {
        let map = super::helpers::campus_map();
        let hit = map.nearest_node(GeoPoint::new(43.6630, -79.3965)).unwrap();
        assert_eq!(hit, NodeId(3));
    }

    #[test]
    fn snaps_to_closest() {
        let map = super::helpers::campus_map();
        let hit = map.nearest_node(GeoPoint::new(43.6591, -79.3979)).unwrap();
        assert_eq!(hit, NodeId(1));
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use ssm_core::{NodeId, WayId};

    use crate::{GraphError, LoadError, load_map_reader, parse_map};

    const FIXTURE: &str = "\
Simple Street Map
2 ways
4 nodes
way 0 1001 Main Street
50 oneway 3
0 1 2
way 1 1002 Oak Avenue
40 bidirectional 2
2 3
node 0 2000 43.0000000 -79.0000000 1
0
node 1 2001 43.0010000 -79.0000000 1
0
node 2 2002 43.0020000 -79.0000000 2
0 1
node 3 2003 43.0020000 -79.0010000 1
1
";

    #[test]
    fn loads_fixture() {
        let map = load_map_reader(Cursor::new(FIXTURE)).unwrap();
        assert_eq!(map.node_count(), 4);
        assert_eq!(map.way_count(), 2);

        let main = map.way(WayId(0)).unwrap();
        assert_eq!(main.name, "Main Street");
        assert_eq!(main.speed_kmh, 50.0);
        assert!(main.one_way);
        assert_eq!(main.node_ids, vec![NodeId(0), NodeId(1), NodeId(2)]);

        let oak = map.way(WayId(1)).unwrap();
        assert!(!oak.one_way);

        assert_eq!(map.node(NodeId(2)).unwrap().way_ids, vec![WayId(0), WayId(1)]);
        assert_eq!(map.node(NodeId(0)).unwrap().position.lat, 43.0);
    }

    #[test]
    fn id_list_may_span_lines() {
        let split = FIXTURE.replace("0 1 2\n", "0\n1 2\n");
        let map = parse_map(&split).unwrap();
        assert_eq!(
            map.way(WayId(0)).unwrap().node_ids,
            vec![NodeId(0), NodeId(1), NodeId(2)]
        );
    }

    #[test]
    fn bad_magic_line() {
        let err = parse_map("Complex Street Map\n1 ways\n1 nodes\n").unwrap_err();
        assert!(matches!(err, LoadError::Format { line: 1, .. }), "{err}");
    }

    #[test]
    fn truncated_file() {
        let cut = &FIXTURE[..FIXTURE.find("way 1").unwrap() + 9];
        let err = parse_map(cut).unwrap_err();
        assert!(matches!(err, LoadError::Format { .. }), "{err}");
    }

    #[test]
    fn malformed_number_reports_line() {
        let bad = FIXTURE.replace("50 oneway 3", "fast oneway 3");
        let err = parse_map(&bad).unwrap_err();
        assert!(matches!(err, LoadError::Format { line: 5, .. }), "{err}");
    }

    #[test]
    fn repeated_node_in_way_is_a_graph_error() {
        let bad = FIXTURE.replace("0 1 2\n", "0 1 0\n");
        let err = parse_map(&bad).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Graph(GraphError::RepeatedNodeInWay { way: WayId(0), node: NodeId(0) })
        ));
    }

    #[test]
    fn zero_count_rejected() {
        let bad = FIXTURE.replace("40 bidirectional 2\n2 3\n", "40 bidirectional 0\n");
        let err = parse_map(&bad).unwrap_err();
        assert!(matches!(err, LoadError::Format { .. }), "{err}");
    }
}

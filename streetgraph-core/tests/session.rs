use streetgraph_core::prelude::*;

fn line(points: &[(i64, i64)]) -> Vec<Point> {
    points.iter().copied().map(Point::from).collect()
}

fn vertex_list(graph: &Graph) -> Vec<(VertexId, Point)> {
    graph.vertices().iter().collect()
}

fn edge_list(graph: &Graph) -> Vec<(VertexId, VertexId)> {
    graph.edges().map(|e| (e.low(), e.high())).collect()
}

#[test]
fn single_crossing_keeps_both_streets_whole() {
    let mut session = Session::default();
    session.add_street("main", line(&[(0, 0), (10, 0)])).unwrap();
    session.add_street("cross", line(&[(5, -5), (5, 5)])).unwrap();

    let graph = session.generate();

    // "cross" sorts first and is numbered first
    assert_eq!(
        vertex_list(graph),
        vec![
            (1, Point::new(5, -5)),
            (2, Point::new(5, 0)),
            (3, Point::new(5, 5)),
            (4, Point::new(0, 0)),
            (5, Point::new(10, 0)),
        ]
    );
    assert_eq!(edge_list(graph), vec![(1, 2), (2, 3), (2, 4), (2, 5)]);
    assert_eq!(graph.intersection_count(), 1);
    assert!(graph.is_intersection(&Point::new(5, 0)));
}

#[test]
fn streets_without_crossings_produce_empty_graph() {
    let mut session = Session::default();
    session.add_street("a", line(&[(0, 0), (1, 0)])).unwrap();
    session.add_street("b", line(&[(0, 2), (1, 2)])).unwrap();

    let graph = session.generate();
    assert_eq!(graph.vertex_count(), 0);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn generate_is_idempotent() {
    let mut session = Session::default();
    session
        .add_street("weber street", line(&[(2, -1), (2, 2), (5, 5), (5, 6), (3, 8)]))
        .unwrap();
    session
        .add_street("king street s", line(&[(4, 2), (4, 8)]))
        .unwrap();
    session
        .add_street("davenport road", line(&[(1, 4), (5, 8)]))
        .unwrap();

    let first_vertices = vertex_list(session.generate());
    let first_edges = edge_list(session.graph());
    let second_vertices = vertex_list(session.generate());
    let second_edges = edge_list(session.graph());

    assert!(!first_vertices.is_empty());
    assert_eq!(first_vertices, second_vertices);
    assert_eq!(first_edges, second_edges);
}

#[test]
fn removed_street_frees_identity_for_next_intersection() {
    let mut session = Session::default();
    session.add_street("main", line(&[(0, 0), (10, 0)])).unwrap();
    session.add_street("first", line(&[(2, -1), (2, 1)])).unwrap();
    session.add_street("second", line(&[(8, -1), (8, 1)])).unwrap();

    let before = vertex_list(session.generate());
    let id_at = |vertices: &[(VertexId, Point)], point: Point| {
        vertices
            .iter()
            .find(|(_, p)| *p == point)
            .map(|(id, _)| *id)
    };
    let crossing_second = id_at(&before, Point::new(8, 0)).unwrap();
    let crossing_first = id_at(&before, Point::new(2, 0)).unwrap();

    session.remove_street("first").unwrap();
    session.add_street("third", line(&[(5, -1), (5, 1)])).unwrap();
    let after = vertex_list(session.generate());

    // the surviving crossing keeps its identity
    assert_eq!(id_at(&after, Point::new(8, 0)), Some(crossing_second));
    assert_eq!(id_at(&after, Point::new(2, 0)), None);

    // every identity is unique and the smallest ones are in use
    let mut ids: Vec<_> = after.iter().map(|(id, _)| *id).collect();
    ids.sort_unstable();
    let expected: Vec<VertexId> = (1..=VertexId::try_from(after.len()).unwrap()).collect();
    assert_eq!(ids, expected);
    // the freed crossing identity went to the new crossing
    assert_eq!(id_at(&after, Point::new(5, 0)), Some(crossing_first));
}

#[test]
fn surviving_intersections_keep_identity_across_changes() {
    let mut session = Session::default();
    session.add_street("a", line(&[(0, 0), (10, 0)])).unwrap();
    session.add_street("b", line(&[(5, -5), (5, 5)])).unwrap();
    session.add_street("c", line(&[(0, 3), (10, 3)])).unwrap();

    let graph = session.generate();
    let crossing = graph.vertices().id_of(&Point::new(5, 3)).unwrap();

    session.change_street("a", line(&[(0, -2), (10, -2)])).unwrap();
    let graph = session.generate();
    assert_eq!(graph.vertices().id_of(&Point::new(5, 3)), Some(crossing));
    assert_eq!(graph.vertices().id_of(&Point::new(5, 0)), None);
    assert!(graph.vertices().id_of(&Point::new(5, -2)).is_some());
}

#[test]
fn duplicate_add_fails_and_store_is_unchanged() {
    let mut session = Session::default();
    session.add_street("main", line(&[(0, 0), (10, 0)])).unwrap();
    let err = session
        .add_street("MAIN", line(&[(1, 1), (2, 2)]))
        .unwrap_err();
    assert_eq!(err, StoreError::DuplicateStreet("main".to_string()));
    assert_eq!(
        session.streets().get("main").unwrap().points,
        line(&[(0, 0), (10, 0)])
    );
}

#[test]
fn store_mutations_do_not_touch_the_published_graph() {
    let mut session = Session::default();
    session.add_street("a", line(&[(0, 0), (10, 0)])).unwrap();
    session.add_street("b", line(&[(5, -5), (5, 5)])).unwrap();
    session.generate();

    session.remove_street("b").unwrap();
    assert_eq!(session.graph().vertex_count(), 5);

    assert_eq!(session.generate().vertex_count(), 0);
}

#[test]
fn collinear_overlap_links_through_shared_run() {
    let mut session = Session::default();
    session.add_street("a", line(&[(0, 0), (4, 0)])).unwrap();
    session.add_street("b", line(&[(2, 0), (6, 0)])).unwrap();

    let graph = session.generate();
    assert!(graph.is_intersection(&Point::new(2, 0)));
    assert!(graph.is_intersection(&Point::new(4, 0)));
    assert_eq!(graph.intersection_count(), 2);
    assert_eq!(graph.component_count(), 1);
}

#[test]
fn parallel_session_matches_sequential() {
    let build = |parallel: bool| {
        let mut session = Session::new(BuilderConfig { parallel });
        session.add_street("a", line(&[(0, 0), (10, 10), (20, 0)])).unwrap();
        session.add_street("b", line(&[(0, 5), (20, 5)])).unwrap();
        session.add_street("c", line(&[(3, -2), (3, 12), (15, 12), (15, -2)])).unwrap();
        let graph = session.generate();
        (vertex_list(graph), edge_list(graph))
    };
    assert_eq!(build(true), build(false));
}

#[test]
fn text_rendering_of_generated_graph() {
    let mut session = Session::default();
    session.add_street("main", line(&[(0, 0), (10, 0)])).unwrap();
    session.add_street("cross", line(&[(5, -5), (5, 5)])).unwrap();

    let text = render_text(session.generate());
    assert_eq!(
        text,
        "V = {\n  1: (5,-5)\n  2: (5,0)\n  3: (5,5)\n  4: (0,0)\n  5: (10,0)\n}\n\
         E = {\n  <1,2>,\n  <2,3>,\n  <2,4>,\n  <2,5>\n}"
    );
}

#[test]
fn oversized_coordinates_never_reach_the_builder() {
    let mut session = Session::default();
    let too_far = MAX_COORDINATE * 10_000;
    let err = session
        .add_street("far", vec![Point::new(0, too_far), Point::new(too_far, 0)])
        .unwrap_err();
    assert_eq!(
        err,
        StoreError::CoordinateOutOfRange(CoordinateOutOfRange(too_far))
    );

    let m = MAX_COORDINATE;
    session.add_street("up", line(&[(0, 0), (m, m)])).unwrap();
    session.add_street("down", line(&[(0, m), (m, 0)])).unwrap();
    let graph = session.generate();
    assert!(graph.is_intersection(&Point::new(m / 2, m / 2)));
    assert_eq!(graph.vertex_count(), 5);
}

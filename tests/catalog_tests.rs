use relais::{
    catalog::{self, Catalog, RelayPoint},
    shared::geo::{Coordinate, Distance, NEARBY_RADIUS},
};

fn ids<'a>(points: impl IntoIterator<Item = &'a RelayPoint>) -> Vec<&'a str> {
    points.into_iter().map(|point| &*point.id).collect()
}

#[test]
fn yaounde_catalog_keeps_order() {
    let catalog = Catalog::yaounde();
    assert_eq!(catalog.len(), 5);
    assert_eq!(
        ids(catalog.points()),
        ["relay1", "relay2", "relay3", "relay4", "relay5"]
    );
    assert!(
        catalog
            .points()
            .iter()
            .enumerate()
            .all(|(i, point)| point.index as usize == i)
    );
}

#[test]
fn lookup_by_id() {
    let catalog = Catalog::yaounde();
    let point = catalog.point_by_id("relay2").unwrap();
    assert_eq!(&*point.name, "Librairie Papyrus");
    assert_eq!(&*point.address, "Avenue Kennedy, Yaoundé");
    assert_eq!(point.coordinate, Coordinate::new(11.5022, 3.8662));
    assert!(point.is_available);
    assert!(catalog.contains("relay5"));
}

#[test]
fn unknown_id_is_absent() {
    let catalog = Catalog::yaounde();
    assert!(catalog.point_by_id("relay42").is_none());
    assert!(catalog.point_by_id("").is_none());
    assert!(!catalog.contains("RELAY1"));
}

#[test]
fn empty_catalog() {
    let catalog = Catalog::new();
    assert!(catalog.is_empty());
    assert!(catalog.point_by_id("relay1").is_none());
    assert!(catalog.nearest_point(&Coordinate::default()).is_none());
    assert!(catalog.search("papyrus").is_empty());
}

#[test]
fn rejects_duplicate_ids() {
    let points = vec![
        RelayPoint::new("a", "A", "Rue A", Coordinate::new(11.5, 3.8), true),
        RelayPoint::new("a", "B", "Rue B", Coordinate::new(11.6, 3.9), true),
    ];
    let result = Catalog::new().with_points(points);
    assert!(matches!(result, Err(catalog::Error::DuplicateId(id)) if id == "a"));
}

#[test]
fn rejects_empty_ids() {
    let points = vec![
        RelayPoint::new("a", "A", "Rue A", Coordinate::new(11.5, 3.8), true),
        RelayPoint::new("  ", "B", "Rue B", Coordinate::new(11.6, 3.9), true),
    ];
    let result = Catalog::new().with_points(points);
    assert!(matches!(result, Err(catalog::Error::EmptyId(1))));
}

#[test]
fn rejects_non_finite_coordinates() {
    let points = vec![RelayPoint::new(
        "nan",
        "Nowhere",
        "",
        Coordinate::new(f64::NAN, 3.8),
        true,
    )];
    let result = Catalog::new().with_points(points);
    assert!(matches!(result, Err(catalog::Error::InvalidCoordinate(id)) if id == "nan"));
}

#[test]
fn available_points_skip_closed_ones() {
    let points = vec![
        RelayPoint::new("open", "Open", "", Coordinate::new(11.5, 3.8), true),
        RelayPoint::new("closed", "Closed", "", Coordinate::new(11.5, 3.8), false),
    ];
    let catalog = Catalog::new().with_points(points).unwrap();
    assert_eq!(ids(catalog.available_points()), ["open"]);
}

#[test]
fn nearby_is_sorted_by_distance() {
    let catalog = Catalog::yaounde();
    let mahima = catalog.point_by_id("relay1").unwrap().coordinate;

    let within_1km = catalog.points_by_coordinate(&mahima, Distance::from_kilometers(1.0));
    assert_eq!(ids(within_1km), ["relay1", "relay5"]);

    let within_2km = catalog.points_by_coordinate(&mahima, Distance::from_kilometers(2.0));
    assert_eq!(ids(within_2km), ["relay1", "relay5", "relay3", "relay2"]);

    let default_radius = catalog.nearby(&mahima, NEARBY_RADIUS);
    assert_eq!(default_radius.len(), 5);
    assert!(default_radius.windows(2).all(|pair| pair[0].1 <= pair[1].1));
}

#[test]
fn nearby_with_zero_radius_only_hits_exact_position() {
    let catalog = Catalog::yaounde();
    let kiosque = Coordinate::new(11.5172, 3.8665);
    assert_eq!(
        ids(catalog.points_by_coordinate(&kiosque, Distance::default())),
        ["relay5"]
    );
}

#[test]
fn grid_lookup_matches_full_scan() {
    let points: Vec<_> = (0..30)
        .flat_map(|x| (0..30).map(move |y| (x, y)))
        .map(|(x, y)| {
            RelayPoint::new(
                format!("p{x}-{y}"),
                format!("Point {x} {y}"),
                "Yaoundé",
                Coordinate::new(11.40 + x as f64 * 0.005, 3.78 + y as f64 * 0.005),
                true,
            )
        })
        .collect();
    let catalog = Catalog::new().with_points(points).unwrap();
    let radius = Distance::from_kilometers(1.2);

    for center in [
        Coordinate::new(11.47, 3.85),
        Coordinate::new(11.40, 3.78),
        Coordinate::new(11.5474, 3.9249),
    ] {
        let mut expected: Vec<_> = catalog
            .points()
            .iter()
            .map(|point| (point, point.coordinate.distance(&center)))
            .filter(|(_, distance)| *distance <= radius)
            .collect();
        expected.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap().then(a.0.index.cmp(&b.0.index)));

        let found = catalog.nearby(&center, radius);
        assert!(!found.is_empty());
        assert_eq!(
            ids(found.iter().map(|(point, _)| *point)),
            ids(expected.iter().map(|(point, _)| *point))
        );
    }
}

#[test]
fn nearest_available_point() {
    let points = vec![
        RelayPoint::new("closed", "Closed", "", Coordinate::new(11.5172, 3.8665), false),
        RelayPoint::new("far", "Far", "", Coordinate::new(11.5128, 3.8905), true),
        RelayPoint::new("near", "Near", "", Coordinate::new(11.5174, 3.8721), true),
    ];
    let catalog = Catalog::new().with_points(points).unwrap();
    let nearest = catalog.nearest_point(&Coordinate::new(11.5170, 3.8660));
    assert_eq!(nearest.map(|point| &*point.id), Some("near"));
}

#[test]
fn search_by_name() {
    let catalog = Catalog::yaounde();
    let found = catalog.search("Papyrus");
    assert_eq!(ids(found.iter().copied()).first(), Some(&"relay2"));
}

#[test]
fn search_tolerates_typos_and_accents() {
    let catalog = Catalog::yaounde();
    assert_eq!(ids(catalog.search("librarie")).first(), Some(&"relay2"));
    assert_eq!(ids(catalog.search("epicerie")).first(), Some(&"relay4"));
}

#[test]
fn search_by_address() {
    let catalog = Catalog::yaounde();
    assert_eq!(ids(catalog.search("Bastos")), ["relay4"]);
    assert_eq!(ids(catalog.search("marche central")).first(), Some(&"relay3"));
}

#[test]
fn search_shared_address_keeps_catalog_order() {
    let catalog = Catalog::yaounde();
    assert_eq!(
        ids(catalog.search("yaoundé")),
        ["relay1", "relay2", "relay3", "relay4", "relay5"]
    );
}

#[test]
fn blank_search_lists_everything() {
    let catalog = Catalog::yaounde();
    assert_eq!(catalog.search("   ").len(), 5);
}

#[test]
fn unrelated_search_finds_nothing() {
    let catalog = Catalog::yaounde();
    assert!(catalog.search("zzzz").is_empty());
}

#[test]
fn huge_radius_returns_every_point() {
    let catalog = Catalog::yaounde();
    let found = catalog.nearby(
        &Coordinate::new(11.5, 3.87),
        Distance::from_kilometers(1e10),
    );
    assert_eq!(found.len(), catalog.len());
    assert!(found.windows(2).all(|pair| pair[0].1 <= pair[1].1));
}

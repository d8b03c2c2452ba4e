//! Property tests for nearest-neighbor tour construction.

use proptest::prelude::*;

use nn_tour::constructive::build_tour;
use nn_tour::distance::edge_weight;
use nn_tour::models::City;
use nn_tour::Error;

/// Non-empty city collections with ids 1..=n in insertion order.
fn arb_cities() -> impl Strategy<Value = Vec<City>> {
    prop::collection::vec((-1000.0f64..1000.0, -1000.0f64..1000.0), 1..40).prop_map(|coords| {
        coords
            .into_iter()
            .enumerate()
            .map(|(i, (x, y))| City::new(i + 1, x, y))
            .collect()
    })
}

/// A city collection together with the index of a valid start city.
fn arb_cities_with_start() -> impl Strategy<Value = (Vec<City>, usize)> {
    arb_cities().prop_flat_map(|cities| {
        let n = cities.len();
        (Just(cities), 0..n)
    })
}

proptest! {
    #[test]
    fn tour_visits_every_city_exactly_once((cities, start) in arb_cities_with_start()) {
        let n = cities.len();
        let start_id = cities[start].id();
        let tour = build_tour(cities, start_id).expect("valid input");

        prop_assert_eq!(tour.path().len(), n + 1);
        prop_assert_eq!(tour.path()[0].id(), start_id);
        prop_assert_eq!(tour.path()[n].id(), start_id);

        let mut interior: Vec<usize> = tour.city_ids()[..n].to_vec();
        interior.sort_unstable();
        prop_assert_eq!(interior, (1..=n).collect::<Vec<_>>());
    }

    #[test]
    fn weights_parallel_path_and_sum_to_total((cities, start) in arb_cities_with_start()) {
        let start_id = cities[start].id();
        let tour = build_tour(cities, start_id).expect("valid input");

        prop_assert_eq!(tour.path().len(), tour.weights().len());
        prop_assert_eq!(tour.weights()[0], 0);
        let sum: u64 = tour.weights().iter().sum();
        prop_assert_eq!(sum, tour.total_distance());
    }

    #[test]
    fn edge_weight_is_symmetric(
        (ax, ay, bx, by) in (
            -1000.0f64..1000.0,
            -1000.0f64..1000.0,
            -1000.0f64..1000.0,
            -1000.0f64..1000.0,
        )
    ) {
        let a = City::new(1, ax, ay);
        let b = City::new(2, bx, by);
        prop_assert_eq!(edge_weight(&a, &b), edge_weight(&b, &a));
    }

    #[test]
    fn builds_are_deterministic((cities, start) in arb_cities_with_start()) {
        let start_id = cities[start].id();
        let first = build_tour(cities.clone(), start_id).expect("valid input");
        let second = build_tour(cities, start_id).expect("valid input");

        prop_assert_eq!(first.city_ids(), second.city_ids());
        prop_assert_eq!(first.weights(), second.weights());
        prop_assert_eq!(first.total_distance(), second.total_distance());
    }

    #[test]
    fn absent_start_id_is_rejected(cities in arb_cities()) {
        let absent = cities.len() + 1;
        match build_tour(cities, absent) {
            Err(Error::StartCityNotFound(id)) => prop_assert_eq!(id, absent),
            other => prop_assert!(false, "expected StartCityNotFound, got {:?}", other),
        }
    }
}

#[test]
fn empty_collection_is_rejected() {
    match build_tour(Vec::new(), 1) {
        Err(Error::EmptyCities) => {}
        other => panic!("expected EmptyCities, got {other:?}"),
    }
}

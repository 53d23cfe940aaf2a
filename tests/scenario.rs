//! End-to-end runs on small instances with known optima.

use u_antlion::alo::{AloConfig, AloRunner, HistorySink, RouteSink};
use u_antlion::geo::{east_java, Location};
use u_antlion::tour::closed_length;

/// All distinct closed tours over 4 locations, with 0 fixed first and
/// reversals removed: 4! / 8 = 3.
fn brute_force_quad(locs: &[Location]) -> f64 {
    [[0, 1, 2, 3], [0, 1, 3, 2], [0, 2, 1, 3]]
        .iter()
        .map(|t| closed_length(t, locs))
        .fold(f64::INFINITY, f64::min)
}

#[test]
fn converges_to_optimum_on_convex_quadrilateral() {
    let locs = vec![
        Location::new("sw", 0.0, 0.0),
        Location::new("ne", 1.0, 1.2),
        Location::new("se", 0.0, 1.0),
        Location::new("nw", 1.1, 0.0),
    ];
    let optimum = brute_force_quad(&locs);

    let config = AloConfig::default()
        .with_num_antlions(10)
        .with_num_ants(10)
        .with_max_iterations(20)
        .with_seed(42);
    let result = AloRunner::run(locs.clone(), &config, &mut HistorySink::new()).unwrap();

    assert!(
        ((result.best_distance - optimum) / optimum).abs() < 1e-6,
        "expected optimum {optimum}, got {}",
        result.best_distance
    );
    // The optimal tour walks the hull: sw, se, ne, nw (or a rotation/reversal).
    assert!((closed_length(&result.best_tour, &locs) - optimum).abs() < 1e-9);
}

#[test]
fn east_java_run_feeds_chart_and_map() {
    let locs = east_java();
    let config = AloConfig::default().with_seed(2024);

    let mut chart = HistorySink::new();
    let result = AloRunner::run(locs.clone(), &config, &mut chart).unwrap();

    let mut map = RouteSink::new(&locs);
    let _ = AloRunner::run(locs.clone(), &config, &mut map).unwrap();

    assert_eq!(chart.points().len(), 100);
    assert_eq!(*chart.distances().last().unwrap(), result.best_distance);
    assert_eq!(map.redraws(), 100);
    assert_eq!(map.route().len(), 11);
    assert_eq!(map.route().first(), map.route().last());
    assert_eq!(map.stops(&result.best_tour).len(), 10);
}

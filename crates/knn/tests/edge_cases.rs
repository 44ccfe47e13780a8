//! Edge case integration tests.

use approx::assert_abs_diff_eq;
use vicinity_geom::{LabeledPoint, Point};
use vicinity_knn::{KnnConfig, classify, nearest_neighbors};
use vicinity_synth::Color;

fn labeled(points: &[(f64, f64, Color)]) -> Vec<LabeledPoint<Color>> {
    points
        .iter()
        .map(|&(x, y, c)| LabeledPoint::new(Point::new(x, y), c))
        .collect()
}

/// Three collinear points, query just right of the middle one.
#[test]
fn three_point_scenario() {
    let training = labeled(&[
        (-2.0, 0.0, Color::Blue),
        (0.0, 0.0, Color::Red),
        (2.0, 0.0, Color::Blue),
    ]);
    let p = classify(&training, Point::new(0.1, 0.0), &KnnConfig::new(2)).unwrap();

    assert_eq!(p.neighbor_indices(), vec![1, 2]);
    assert_abs_diff_eq!(p.neighbors()[0].distance(), 0.1, epsilon = 1e-12);
    assert_abs_diff_eq!(p.neighbors()[1].distance(), 1.9, epsilon = 1e-12);
    // One vote each; red was tallied first.
    assert_eq!(*p.label(), Color::Red);
    assert_eq!(p.votes(), 1);
}

/// k = n - 1 keeps everything except the farthest point.
#[test]
fn k_equals_n_minus_one() {
    let training = labeled(&[
        (0.0, 1.0, Color::Red),
        (0.0, -9.0, Color::Blue),
        (1.0, 1.0, Color::Red),
        (-1.0, 0.0, Color::Blue),
        (0.5, 0.5, Color::Red),
    ]);
    let n = nearest_neighbors(&training, Point::new(0.0, 0.0), &KnnConfig::new(4)).unwrap();
    assert_eq!(n.len(), 4);
    assert!(n.iter().all(|nb| nb.index() != 1));
}

/// All labels identical: the vote returns that label with k votes.
#[test]
fn unanimous_neighbors() {
    let training = labeled(&[
        (0.0, 0.0, Color::Blue),
        (0.1, 0.0, Color::Blue),
        (0.2, 0.0, Color::Blue),
        (9.0, 9.0, Color::Red),
    ]);
    let p = classify(&training, Point::new(0.0, 0.0), &KnnConfig::new(3)).unwrap();
    assert_eq!(*p.label(), Color::Blue);
    assert_eq!(p.votes(), 3);
}

/// Two training points coincide with the query: both at distance 0, scan order kept.
#[test]
fn coincident_with_query() {
    let training = labeled(&[
        (1.0, 1.0, Color::Red),
        (0.0, 0.0, Color::Blue),
        (0.0, 0.0, Color::Red),
    ]);
    let n = nearest_neighbors(&training, Point::new(0.0, 0.0), &KnnConfig::new(2)).unwrap();
    assert_eq!(n[0].index(), 1);
    assert_eq!(n[1].index(), 2);
    assert_eq!(n[0].distance(), 0.0);
    assert_eq!(n[1].distance(), 0.0);
}

/// Re-running the same query yields the same neighbor set.
#[test]
fn repeated_query_is_stable() {
    let training = labeled(&[
        (0.3, 0.4, Color::Red),
        (-0.3, 0.4, Color::Blue),
        (1.0, -1.0, Color::Red),
        (0.0, 0.0, Color::Blue),
    ]);
    let q = Point::new(0.05, 0.1);
    let config = KnnConfig::new(3);
    let a = classify(&training, q, &config).unwrap();
    let b = classify(&training, q, &config).unwrap();
    assert_eq!(a.neighbors(), b.neighbors());
    assert_eq!(a.label(), b.label());
}

/// Majority overrides the single nearest neighbor.
#[test]
fn majority_beats_nearest() {
    let training = labeled(&[
        (0.0, 0.0, Color::Red),
        (1.0, 0.0, Color::Blue),
        (0.0, 1.0, Color::Blue),
        (50.0, 50.0, Color::Red),
    ]);
    let p = classify(&training, Point::new(0.1, 0.1), &KnnConfig::new(3)).unwrap();
    assert_eq!(p.neighbor_indices()[0], 0);
    assert_eq!(*p.label(), Color::Blue);
    assert_eq!(p.votes(), 2);
}

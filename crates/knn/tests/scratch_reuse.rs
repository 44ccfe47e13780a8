//! Integration tests for KnnScratch reuse.

use rand::SeedableRng;
use rand::rngs::StdRng;
use vicinity_knn::{KnnConfig, KnnScratch, classify, classify_with_scratch};
use vicinity_synth::{CubicOracle, SynthConfig, generate_queries, generate_training_set};

/// Scratch version produces identical results to non-scratch.
#[test]
fn scratch_matches_non_scratch() {
    let mut rng = StdRng::seed_from_u64(42);
    let training = generate_training_set(&SynthConfig::new(60), &CubicOracle, &mut rng).unwrap();
    let queries = generate_queries(&SynthConfig::new(60), 50, &mut rng).unwrap();
    let config = KnnConfig::new(5);
    let mut scratch = KnnScratch::new(60, 5);

    for &q in &queries {
        let a = classify(&training, q, &config).unwrap();
        let b = classify_with_scratch(&training, q, &config, &mut scratch).unwrap();
        assert_eq!(a.label(), b.label());
        assert_eq!(a.votes(), b.votes());
        assert_eq!(a.neighbors(), b.neighbors());
    }
}

/// Distances in the scratch always describe the latest query only.
#[test]
fn distances_reset_between_queries() {
    let mut rng = StdRng::seed_from_u64(7);
    let training = generate_training_set(&SynthConfig::new(30), &CubicOracle, &mut rng).unwrap();
    let queries = generate_queries(&SynthConfig::new(30), 20, &mut rng).unwrap();
    let config = KnnConfig::new(3);
    let mut scratch = KnnScratch::default();

    for &q in &queries {
        classify_with_scratch(&training, q, &config, &mut scratch).unwrap();
        assert_eq!(scratch.distances().len(), training.len());
        for (lp, &d) in training.iter().zip(scratch.distances()) {
            assert_eq!(d, lp.point().distance(&q));
        }
    }
}

/// Scratch works correctly after large -> small training set transitions.
#[test]
fn scratch_large_then_small() {
    let mut scratch = KnnScratch::new(5, 2);
    let config = KnnConfig::new(2);
    let mut rng = StdRng::seed_from_u64(1);

    let large = generate_training_set(&SynthConfig::new(200), &CubicOracle, &mut rng).unwrap();
    let q = generate_queries(&SynthConfig::new(200), 1, &mut rng).unwrap()[0];
    let r1 = classify_with_scratch(&large, q, &config, &mut scratch).unwrap();
    assert_eq!(r1.neighbors().len(), 2);
    assert!(scratch.distances().len() == 200);

    let small = generate_training_set(&SynthConfig::new(5), &CubicOracle, &mut rng).unwrap();
    let r2 = classify_with_scratch(&small, q, &config, &mut scratch).unwrap();
    assert_eq!(r2.neighbors().len(), 2);
    assert!(r2.neighbors().iter().all(|n| n.index() < 5));
    assert_eq!(scratch.distances().len(), 5);
}

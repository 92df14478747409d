//! RNG Determinism Tests
//!
//! Synthetic datasets are reproduced from a seed alone, so the generator's
//! RNG must replay the same sequence for the same seed and stay inside
//! the ranges it promises.

use cleanup_cost_core::geo::{Bounds, FALLBACK_BOUNDS};
use cleanup_cost_core::RngManager;

#[test]
fn test_same_seed_same_sequence() {
    let mut a = RngManager::new(12345);
    let mut b = RngManager::new(12345);
    for _ in 0..1000 {
        assert_eq!(a.next(), b.next());
    }
}

#[test]
fn test_different_seeds_diverge() {
    let mut a = RngManager::new(1);
    let mut b = RngManager::new(2);
    let same = (0..100).filter(|_| a.next() == b.next()).count();
    assert!(same < 5);
}

#[test]
fn test_state_resumes_sequence() {
    let mut rng = RngManager::new(99);
    for _ in 0..10 {
        rng.next();
    }
    let mut resumed = RngManager::new(rng.get_state());
    assert_eq!(rng.next(), resumed.next());
}

#[test]
fn test_ranges_hold() {
    let mut rng = RngManager::new(7);
    for _ in 0..10_000 {
        let n = rng.range_inclusive(0, 20);
        assert!((0..=20).contains(&n));
        let x = rng.uniform(0.01, 5.0);
        assert!((0.01..5.0).contains(&x));
    }
}

#[test]
fn test_choose_covers_every_item() {
    let items = ["Land", "Water", "Underwater"];
    let mut rng = RngManager::new(3);
    let mut seen = [false; 3];
    for _ in 0..300 {
        let picked = rng.choose(&items).unwrap();
        let idx = items.iter().position(|i| i == picked).unwrap();
        seen[idx] = true;
    }
    assert!(seen.iter().all(|&s| s));
    assert!(rng.choose::<u8>(&[]).is_none());
}

#[test]
fn test_antimeridian_sampling_stays_in_bounds() {
    let fiji = Bounds::new((-21.0, -12.0), (177.0, -178.0));
    assert!(fiji.crosses_antimeridian());

    let mut rng = RngManager::new(42);
    let mut east = 0;
    for _ in 0..2000 {
        let point = fiji.sample(&mut rng);
        assert!(fiji.contains(&point), "{} escaped", point);
        assert!((-180.0..=180.0).contains(&point.lon));
        if point.lon < 0.0 {
            east += 1;
        }
    }
    // 2 of the 5 degrees lie east of the antimeridian
    assert!(east > 500 && east < 1100, "east = {}", east);
}

#[test]
fn test_fallback_bounds_sample_validly() {
    let mut rng = RngManager::new(5);
    for _ in 0..1000 {
        let point = FALLBACK_BOUNDS.sample(&mut rng);
        assert!(point.lat >= -60.0 && point.lat <= 60.0);
    }
}

use approx::assert_abs_diff_eq;
use vegentropy::estimators::approaches::{Binning, RaoDistance, RaoQuadraticEntropy};
use vegentropy::estimators::GlobalValue;

fn binning() -> Binning {
    Binning::new(4, 0.0, 4.0).unwrap()
}

#[test]
fn rao_q_two_bins_absolute_and_squared() {
    // bin centers 0.5 and 2.5, p = 0.5 each
    let sample = [0.5, 2.5, 0.7, 2.9];
    let abs = RaoQuadraticEntropy::new(&sample, &binning(), RaoDistance::Absolute).global_value();
    assert_abs_diff_eq!(abs, 2.0 * 0.25 * 2.0, epsilon = 1e-12);
    let sq = RaoQuadraticEntropy::new(&sample, &binning(), RaoDistance::Squared).global_value();
    assert_abs_diff_eq!(sq, 2.0 * 0.25 * 4.0, epsilon = 1e-12);
}

#[test]
fn rao_q_custom_distance() {
    fn doubled(a: f64, b: f64) -> f64 {
        2.0 * (a - b).abs()
    }
    let sample = [0.5, 1.5];
    let q = RaoQuadraticEntropy::new(&sample, &binning(), RaoDistance::Custom(doubled)).global_value();
    assert_abs_diff_eq!(q, 2.0 * 0.25 * 2.0, epsilon = 1e-12);
}

#[test]
fn rao_q_is_zero_only_for_degenerate_samples() {
    assert_eq!(RaoQuadraticEntropy::new(&[3.3; 12], &binning(), RaoDistance::Absolute).global_value(), 0.0);
    assert_eq!(RaoQuadraticEntropy::new(&[3.3], &binning(), RaoDistance::Absolute).global_value(), 0.0);
    for seed in 0..10 {
        let sample = crate::test_helpers::random_sample(20, 0.0, 4.0, seed);
        let q = RaoQuadraticEntropy::new(&sample, &binning(), RaoDistance::Absolute).global_value();
        assert!(q > 0.0);
    }
}

#[test]
fn rao_q_is_invariant_under_relabeling() {
    let symmetric = Binning::new(4, -2.0, 2.0).unwrap();
    let sample = [-1.5, -0.5, -0.5, 1.5, 0.5];
    let mirrored: Vec<f64> = sample.iter().map(|v| -v).collect();
    let mut shuffled = sample.to_vec();
    shuffled.reverse();

    let q = RaoQuadraticEntropy::new(&sample, &symmetric, RaoDistance::Absolute).global_value();
    let q_mirror = RaoQuadraticEntropy::new(&mirrored, &symmetric, RaoDistance::Absolute).global_value();
    let q_shuffled = RaoQuadraticEntropy::new(&shuffled, &symmetric, RaoDistance::Absolute).global_value();
    assert_abs_diff_eq!(q, q_mirror, epsilon = 1e-12);
    assert_abs_diff_eq!(q, q_shuffled, epsilon = 1e-12);
}

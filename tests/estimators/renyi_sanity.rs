use approx::assert_abs_diff_eq;
use vegentropy::estimators::approaches::{Binning, RenyiEntropy, ShannonEntropy};
use vegentropy::estimators::GlobalValue;
use vegentropy::Error;

fn binning() -> Binning {
    Binning::new(4, 0.0, 4.0).unwrap()
}

#[test]
fn renyi_zero_is_hartley_regardless_of_skew() {
    let mut skewed = vec![0.5; 50];
    skewed.extend([1.5, 2.5]);
    let h = RenyiEntropy::new(&skewed, &binning(), 0.0).unwrap().global_value();
    assert_abs_diff_eq!(h, 3f64.ln(), epsilon = 1e-12);

    let even = [0.5, 1.5, 2.5];
    let h_even = RenyiEntropy::new(&even, &binning(), 0.0).unwrap().global_value();
    assert_abs_diff_eq!(h, h_even, epsilon = 1e-12);
}

#[test]
fn renyi_two_is_collision_entropy() {
    let sample = [0.5, 0.5, 0.5, 1.5];
    let h = RenyiEntropy::new(&sample, &binning(), 2.0).unwrap().global_value();
    let expected = -(0.75f64 * 0.75 + 0.25 * 0.25).ln();
    assert_abs_diff_eq!(h, expected, epsilon = 1e-12);
}

#[test]
fn renyi_infinite_is_min_entropy() {
    let sample = [0.5, 0.5, 0.5, 1.5];
    let h = RenyiEntropy::new(&sample, &binning(), f64::INFINITY).unwrap().global_value();
    assert_abs_diff_eq!(h, -(0.75f64).ln(), epsilon = 1e-12);
}

#[test]
fn renyi_general_order() {
    let sample = [0.5, 0.5, 0.5, 1.5];
    let alpha = 3.0;
    let h = RenyiEntropy::new(&sample, &binning(), alpha).unwrap().global_value();
    let expected = (0.75f64.powf(alpha) + 0.25f64.powf(alpha)).ln() / (1.0 - alpha);
    assert_abs_diff_eq!(h, expected, epsilon = 1e-12);
}

#[test]
fn renyi_converges_to_shannon_near_one() {
    let sample = crate::test_helpers::random_sample(200, 0.0, 4.0, 7);
    let shannon = ShannonEntropy::new(&sample, &binning()).global_value();
    let exact = RenyiEntropy::new(&sample, &binning(), 1.0).unwrap().global_value();
    assert_eq!(exact, shannon);
    for alpha in [1.0 - 1e-3, 1.0 + 1e-3, 1.0 - 1e-5, 1.0 + 1e-5, 1.0 + 1e-9] {
        let h = RenyiEntropy::new(&sample, &binning(), alpha).unwrap().global_value();
        assert_abs_diff_eq!(h, shannon, epsilon = 5e-3);
    }
}

#[test]
fn renyi_is_non_increasing_in_alpha() {
    let sample = crate::test_helpers::random_sample(60, 0.0, 4.0, 3);
    let orders = [0.0, 0.5, 1.0, 2.0, 5.0, f64::INFINITY];
    let values: Vec<f64> = orders
        .iter()
        .map(|&a| RenyiEntropy::new(&sample, &binning(), a).unwrap().global_value())
        .collect();
    for pair in values.windows(2) {
        assert!(pair[0] + 1e-12 >= pair[1], "{values:?}");
    }
}

#[test]
fn renyi_large_orders_approach_min_entropy() {
    let mut skewed = vec![0.5; 3];
    skewed.extend([1.5, 2.5]);
    let min_entropy = -(0.6f64).ln();
    let distinct: Vec<f64> = (0..9).map(|i| -0.8 + 0.1 * i as f64).collect();
    for alpha in [200.0, 500.0, 1e6] {
        let h = RenyiEntropy::new(&skewed, &binning(), alpha).unwrap().global_value();
        assert!(h.is_finite() && h >= min_entropy, "alpha {alpha}: {h}");
        assert_abs_diff_eq!(h, min_entropy, epsilon = 1e-2);

        let uniform = RenyiEntropy::new(&distinct, &Binning::default(), alpha)
            .unwrap()
            .global_value();
        assert_abs_diff_eq!(uniform, 9f64.ln(), epsilon = 1e-9);
    }
}

#[test]
fn renyi_degenerate_samples_are_zero_for_every_order() {
    for alpha in [0.0, 0.5, 1.0, 2.0, 7.5, f64::INFINITY] {
        assert_eq!(RenyiEntropy::new(&[1.5; 9], &binning(), alpha).unwrap().global_value(), 0.0);
        assert_eq!(RenyiEntropy::new(&[1.5], &binning(), alpha).unwrap().global_value(), 0.0);
    }
}

#[test]
fn renyi_rejects_undefined_orders() {
    assert!(matches!(
        RenyiEntropy::new(&[0.5, 1.5], &binning(), -0.5),
        Err(Error::InvalidParameter { name: "alpha", .. })
    ));
    assert!(matches!(
        RenyiEntropy::new(&[0.5, 1.5], &binning(), f64::NAN),
        Err(Error::InvalidParameter { name: "alpha", .. })
    ));
}

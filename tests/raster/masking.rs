use ndarray::{array, Array2};
use vegentropy::raster::{ClassificationLayer, LandCoverScheme, MaskSource, MaskingPolicy, PixelClass};
use vegentropy::Error;

fn dw(labels: Array2<i32>) -> ClassificationLayer {
    ClassificationLayer::new(LandCoverScheme::DynamicWorld, labels)
}

fn esa(labels: Array2<i32>) -> ClassificationLayer {
    ClassificationLayer::new(LandCoverScheme::EsaWorldCover, labels)
}

#[test]
fn excluded_classes_per_scheme() {
    for code in [0, 5, 6, 7, 8] {
        assert!(LandCoverScheme::DynamicWorld.is_excluded(code));
    }
    for code in [1, 2, 3, 4] {
        assert!(!LandCoverScheme::DynamicWorld.is_excluded(code));
    }
    for code in [50, 60, 70, 80] {
        assert!(LandCoverScheme::EsaWorldCover.is_excluded(code));
    }
    for code in [10, 20, 30, 40, 90, 95, 100] {
        assert!(!LandCoverScheme::EsaWorldCover.is_excluded(code));
    }
}

#[test]
fn primary_classification_drives_the_mask() {
    let policy = MaskingPolicy::new(vec![Some(dw(array![[1, 0], [6, 2]]))], None);
    let mask = policy.derive(1, (2, 2)).unwrap();
    assert_eq!(mask.source(0), MaskSource::Primary);
    assert!(mask.is_valid(0, 0, 0));
    assert!(!mask.is_valid(0, 0, 1));
    assert!(!mask.is_valid(0, 1, 0));
    assert!(mask.is_valid(0, 1, 1));
}

#[test]
fn missing_primary_uses_fallback() {
    let policy = MaskingPolicy::new(
        vec![Some(dw(array![[1, 1], [1, 1]])), None],
        Some(esa(array![[10, 80], [50, 30]])),
    );
    let mask = policy.derive(2, (2, 2)).unwrap();
    assert_eq!(mask.source(0), MaskSource::Primary);
    assert_eq!(mask.source(1), MaskSource::Fallback);
    assert!(mask.is_valid(1, 0, 0));
    assert!(!mask.is_valid(1, 0, 1));
    assert!(!mask.is_valid(1, 1, 0));
    assert!(mask.is_valid(1, 1, 1));
    assert_eq!(mask.available_dates(), vec![0, 1]);
}

#[test]
fn date_without_any_source_is_unavailable() {
    let policy = MaskingPolicy::new(vec![Some(dw(array![[1, 1], [1, 1]])), None], None);
    let mask = policy.derive(2, (2, 2)).unwrap();
    assert_eq!(mask.source(1), MaskSource::Unavailable);
    assert!(!mask.is_available(1));
    assert_eq!(mask.available_dates(), vec![0]);
    for r in 0..2 {
        for c in 0..2 {
            assert!(!mask.is_valid(1, r, c));
        }
    }
}

#[test]
fn nodata_pixels_consult_fallback() {
    let primary = dw(array![[255, 1], [255, 0]]).with_nodata(255);
    assert_eq!(primary.classify(0, 0), PixelClass::Missing);
    let policy = MaskingPolicy::new(vec![Some(primary)], Some(esa(array![[10, 80], [80, 10]])));
    let mask = policy.derive(1, (2, 2)).unwrap();
    assert_eq!(mask.source(0), MaskSource::Primary);
    assert!(mask.is_valid(0, 0, 0)); // nodata -> ESA tree cover
    assert!(mask.is_valid(0, 0, 1)); // primary trees
    assert!(!mask.is_valid(0, 1, 0)); // nodata -> ESA water
    assert!(!mask.is_valid(0, 1, 1)); // primary water, fallback ignored
}

#[test]
fn nodata_without_fallback_is_invalid() {
    let primary = dw(array![[255, 1]]).with_nodata(255);
    let mask = MaskingPolicy::new(vec![Some(primary)], None).derive(1, (1, 2)).unwrap();
    assert!(!mask.is_valid(0, 0, 0));
    assert!(mask.is_valid(0, 0, 1));
}

#[test]
fn empty_primary_falls_back_unless_disabled() {
    let all_water = dw(array![[0, 0], [0, 0]]);
    let fallback = esa(array![[10, 10], [10, 80]]);

    let policy = MaskingPolicy::new(vec![Some(all_water.clone())], Some(fallback.clone()));
    let mask = policy.derive(1, (2, 2)).unwrap();
    assert_eq!(mask.source(0), MaskSource::Fallback);
    assert!(mask.is_valid(0, 0, 0));
    assert!(!mask.is_valid(0, 1, 1));

    let mut strict = MaskingPolicy::new(vec![Some(all_water)], Some(fallback));
    strict.fallback_on_empty_primary = false;
    let mask = strict.derive(1, (2, 2)).unwrap();
    assert_eq!(mask.source(0), MaskSource::Primary);
    assert!(!mask.is_valid(0, 0, 0));
}

#[test]
fn misaligned_layers_are_rejected() {
    let policy = MaskingPolicy::new(vec![Some(dw(array![[1, 1, 1]]))], None);
    assert!(matches!(policy.derive(1, (2, 2)), Err(Error::ShapeMismatch { .. })));
    let policy = MaskingPolicy::new(vec![None, None], None);
    assert!(matches!(policy.derive(3, (2, 2)), Err(Error::DateCountMismatch { .. })));
}

#[test]
fn static_mask_repeats_for_every_date() {
    let grid = array![[true, false], [false, true]];
    let mask = vegentropy::raster::ValidityMask::from_static(&grid, 3);
    assert_eq!(mask.dim(), (3, 2, 2));
    for t in 0..3 {
        assert_eq!(mask.source(t), MaskSource::Supplied);
        assert!(mask.is_valid(t, 0, 0));
        assert!(!mask.is_valid(t, 0, 1));
    }
}

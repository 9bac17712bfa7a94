use vegentropy::config::EntropyConfig;
use vegentropy::pipeline::run_with_mask;
use vegentropy::raster::ValidityMask;

use crate::test_helpers::{date, random_cube};

#[test]
fn identical_inputs_give_bit_identical_stacks() {
    let cube = random_cube((4, 12, 10), 99);
    let mut mask = ValidityMask::all_valid(4, (12, 10));
    mask.mark_unavailable(1);
    for name in ["shannon", "renyi_2", "rao_q"] {
        let mut config = EntropyConfig::new("NDVI", name, "det", date(2023, 6, 1), date(2023, 7, 1));
        config.window_size = 5;
        let first = run_with_mask(&config, &cube, &mask).unwrap().to_stack();
        let second = run_with_mask(&config, &cube, &mask).unwrap().to_stack();
        let a: Vec<u64> = first.iter().map(|v| v.to_bits()).collect();
        let b: Vec<u64> = second.iter().map(|v| v.to_bits()).collect();
        assert_eq!(a, b, "{name}");
    }
}

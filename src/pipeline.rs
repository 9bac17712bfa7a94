// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Entry point: validate, mask, run the three engines, compose

use crate::compose::EntropyMapSet;
use crate::config::{EntropyConfig, ValidatedConfig};
use crate::engines::{spatial_entropy, spatiotemporal_entropy, temporal_entropy, EntropyEngine};
use crate::error::Result;
use crate::maybe_rayon::join;
use crate::raster::cube::RasterCube;
use crate::raster::mask::{MaskingPolicy, ValidityMask};
use crate::raster::window::WindowSampler;

/// Derive the validity mask from land cover, then compute every product.
pub fn run(config: &EntropyConfig, cube: &RasterCube, policy: &MaskingPolicy) -> Result<EntropyMapSet> {
    let validated = config.validate()?;
    log::info!("Deriving validity mask for {} dates", cube.n_dates());
    let mask = policy.derive(cube.n_dates(), cube.shape())?;
    run_validated(&validated, cube, &mask)
}

/// Compute every product against a precomputed mask.
pub fn run_with_mask(config: &EntropyConfig, cube: &RasterCube, mask: &ValidityMask) -> Result<EntropyMapSet> {
    let validated = config.validate()?;
    run_validated(&validated, cube, mask)
}

pub fn run_validated(
    config: &ValidatedConfig,
    cube: &RasterCube,
    mask: &ValidityMask,
) -> Result<EntropyMapSet> {
    // All checks happen here, before any per-pixel work.
    let sampler = WindowSampler::new(cube, mask, config.window, config.min_valid_fraction)?;
    if cube.dates() != config.schedule.as_slice() {
        log::warn!(
            "Cube dates ({} bands) differ from the configured {} schedule ({} dates); labelling bands with cube dates",
            cube.n_dates(),
            config.frequency,
            config.schedule.len()
        );
    }
    let engine = EntropyEngine::new(sampler, config.estimator, config.sentinel);
    let label = config.estimator_label();
    let (rows, cols) = cube.shape();
    log::info!(
        "Computing {} entropy maps for {}x{} pixels, window {}",
        label,
        rows,
        cols,
        config.window.get()
    );

    let (spatial, (temporal, spatiotemporal)) = join(
        || spatial_entropy(&engine),
        || join(|| temporal_entropy(&engine), || spatiotemporal_entropy(&engine)),
    );
    log::info!("Entropy engines finished; composing {} bands", cube.n_dates() + 2);

    EntropyMapSet::compose(
        &label,
        cube.dates(),
        spatial,
        temporal,
        spatiotemporal,
        cube.metadata().clone(),
        config.sentinel,
    )
}

//! Raster cube, land-cover masking and window sampling

pub mod cube;
pub mod landcover;
pub mod mask;
pub mod window;

pub use cube::{GeoTransform, RasterCube, SpatialMetadata};
pub use landcover::{ClassificationLayer, LandCoverScheme, PixelClass};
pub use mask::{MaskSource, MaskingPolicy, ValidityMask};
pub use window::{Geometry, Window, WindowOutcome, WindowSampler, WindowSize};

pub mod discrete;

// Unified re-exports for common estimators so tests and users can import
// vegentropy::estimators::approaches::* ergonomically.
pub use discrete::binning::{Binning, Histogram};
pub use discrete::rao_q::{RaoDistance, RaoQuadraticEntropy};
pub use discrete::renyi::RenyiEntropy;
pub use discrete::shannon::ShannonEntropy;

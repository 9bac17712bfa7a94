pub mod approaches;
pub mod entropy;
pub mod traits;

pub use entropy::{EntropyEstimator, Measure};
pub use traits::GlobalValue;

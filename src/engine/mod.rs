mod tracker;
pub use tracker::*;

mod scoring;
pub use scoring::*;

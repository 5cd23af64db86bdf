pub mod config;
pub mod geom;

mod engine;
pub use engine::*;

mod session;
pub use session::*;

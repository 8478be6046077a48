pub mod config;
pub mod constants;
pub mod error;
pub mod gate;
pub mod geo;
pub mod state;

pub use config::*;
pub use error::*;
pub use gate::*;
pub use geo::*;
pub use state::*;

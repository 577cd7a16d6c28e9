pub mod graph;
pub mod io;
pub mod rank;
pub mod types;

pub use graph::*;
pub use io::*;
pub use rank::*;
pub use types::*;

pub type Rank = f64;
pub type DampingFactor = f64;

mod iterate;
mod sample;
mod transition;
mod util;

pub use iterate::*;
pub use sample::*;
pub use transition::*;
pub(crate) use util::*;

mod crawl;
mod report;

pub use crawl::*;
pub use report::*;

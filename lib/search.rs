mod metrics;
mod options;
mod score;
mod searcher;
mod tactics;

pub use metrics::*;
pub use options::*;
pub use score::*;
pub use searcher::*;
pub use tactics::*;

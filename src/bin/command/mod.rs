mod paths;
mod query;
mod show;

pub use paths::*;
pub use query::*;
pub use show::*;

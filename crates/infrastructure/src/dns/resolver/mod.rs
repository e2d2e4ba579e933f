mod config;
mod iterative;

pub use config::ResolverSettings;
pub use iterative::{IterativeResolver, NextStep};

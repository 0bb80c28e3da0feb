//! CLI driver

mod main;
mod options;
mod show;

pub use main::{app, main, run};
pub use options::Options;
pub use show::show;

pub mod build;
pub mod config;
pub mod keywords;

pub use build::run_build;
pub use keywords::show_keywords;

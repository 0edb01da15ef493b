pub mod collection;
pub mod config;
pub mod input;
pub mod logging;
pub mod output;

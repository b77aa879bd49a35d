//! Line-oriented front end: read a command, print feedback and the affected
//! list.

pub mod config;
pub mod repl;

pub use config::AppConfig;
pub use repl::run;

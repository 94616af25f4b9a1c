pub mod error;
pub mod parser;
pub mod runner;
pub mod sweep;
pub mod report;

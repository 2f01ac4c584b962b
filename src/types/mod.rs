pub mod config;
pub mod input;
pub mod report;
pub mod scoring;

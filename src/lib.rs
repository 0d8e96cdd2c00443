pub mod catalog;
pub mod config;
pub mod coverage;
pub mod edges;
pub mod output;
pub mod scoring;

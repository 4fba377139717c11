#[macro_use]
extern crate stump;

pub mod context;
pub mod decoder;
pub mod error;
pub mod framestore;
pub mod geometry;
pub mod normalize;
pub mod report;
pub mod scoreentry;
pub mod scoring;
pub mod search;
pub mod stats;

pub mod handler;
pub mod model;
pub mod ranker;
pub mod schedule;

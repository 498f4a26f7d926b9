//! Career Compass: matches resume skills against a role catalog, ranks roles by
//! skill overlap and market demand, and builds learning plans and career roadmaps.

pub mod analysis;
pub mod catalog;
pub mod config;
pub mod errors;
pub mod extraction;
pub mod routes;
pub mod state;

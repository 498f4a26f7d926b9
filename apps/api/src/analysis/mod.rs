// Resume analysis engine
// Skill extraction → fit scoring → learning plan / roadmap / report.
// Everything except `handlers` and `store` is pure and synchronous.

pub mod fit_scoring;
pub mod handlers;
pub mod learning_plan;
pub mod profile;
pub mod report;
pub mod roadmap;
pub mod skill_extractor;
pub mod store;

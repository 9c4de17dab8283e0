// Skill-gap analysis engine.
// Pure and synchronous: normalizer → registry → gap detector → plan → summary.
// No module here touches the network, the filesystem or global mutable state.

pub mod gap_detector;
pub mod handlers;
pub mod models;
pub mod normalizer;
pub mod orchestrator;
pub mod plan;
pub mod registry;
pub mod summary;

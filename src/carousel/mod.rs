pub mod gesture;
pub mod host;
pub mod observable;
pub mod orchestrator;
pub mod registry;
pub mod slide;

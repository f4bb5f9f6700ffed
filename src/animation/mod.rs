pub mod descriptor;
pub mod ease;
pub mod plan;
pub mod runner;

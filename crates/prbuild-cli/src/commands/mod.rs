mod build;
mod build_pipeline;
mod doctor;

pub use build::build;
pub use doctor::doctor;

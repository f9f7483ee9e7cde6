pub mod client;
pub mod executor;
pub mod osc;

pub use client::{
    BuildError, BuildOptions, CheckResult, CheckoutError, DoctorReport, OscClient,
};
pub use executor::{OscExecutor, RealExecutor};
pub use osc::OscError;

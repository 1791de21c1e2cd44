pub mod runner;
pub mod script;

pub use runner::{build_host, run_ops, ProbeOutput, ProbeResult};
pub use script::{Backend, Op, Script};

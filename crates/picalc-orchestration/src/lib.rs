//! # picalc-orchestration
//!
//! Back-end selection, fan-out execution, and result analysis.

pub mod interfaces;
pub mod orchestrator;
pub mod selection;

pub use interfaces::{ResultPresenter, RunResult};
pub use orchestrator::{analyze_agreement, execute_runs};
pub use selection::get_executors_to_run;

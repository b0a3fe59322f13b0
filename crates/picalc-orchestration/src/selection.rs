//! Back-end selection logic.

use std::sync::Arc;

use picalc_core::error::PiError;
use picalc_core::executor::Executor;
use picalc_core::registry::BackendFactory;

/// Get executors to run based on the back-end selection string.
pub fn get_executors_to_run(
    backend: &str,
    factory: &dyn BackendFactory,
) -> Result<Vec<Arc<dyn Executor>>, PiError> {
    match backend {
        "all" => {
            let names = factory.available();
            let mut executors = Vec::new();
            for name in names {
                executors.push(factory.get(name)?);
            }
            Ok(executors)
        }
        name => {
            let executor = factory.get(name)?;
            Ok(vec![executor])
        }
    }
}

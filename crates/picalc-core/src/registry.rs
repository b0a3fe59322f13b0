//! Back-end factory and registry.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use crate::error::PiError;
use crate::executor::{Executor, PiCalculator};
use crate::pool::Pool;
use crate::sequential::Sequential;
use crate::strided::Strided;
use crate::threads::Threads;

/// Factory trait for creating executors.
pub trait BackendFactory: Send + Sync {
    /// Get or create an executor by name.
    fn get(&self, name: &str) -> Result<Arc<dyn Executor>, PiError>;

    /// List all available back-end names.
    fn available(&self) -> Vec<&str>;
}

/// Default factory with lazy creation and cache.
pub struct DefaultFactory {
    cache: RwLock<HashMap<String, Arc<dyn Executor>>>,
}

impl DefaultFactory {
    /// Create a new default factory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }

    fn create_executor(name: &str) -> Result<Arc<dyn Executor>, PiError> {
        debug!(backend = name, "creating back-end");
        match name {
            "sequential" | "seq" => Ok(Arc::new(PiCalculator::new(Arc::new(Sequential::new())))),
            "strided" => Ok(Arc::new(PiCalculator::new(Arc::new(Strided::new())))),
            "threads" => Ok(Arc::new(PiCalculator::new(Arc::new(Threads::new())))),
            "pool" | "rayon" => Ok(Arc::new(PiCalculator::new(Arc::new(Pool::new())))),
            _ => Err(PiError::Config(format!("unknown back-end: {name}"))),
        }
    }
}

impl Default for DefaultFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl BackendFactory for DefaultFactory {
    fn get(&self, name: &str) -> Result<Arc<dyn Executor>, PiError> {
        // Check cache first
        if let Some(executor) = self.cache.read().get(name) {
            return Ok(Arc::clone(executor));
        }

        // Create and cache
        let executor = Self::create_executor(name)?;
        self.cache
            .write()
            .insert(name.to_string(), Arc::clone(&executor));
        Ok(executor)
    }

    fn available(&self) -> Vec<&str> {
        vec!["sequential", "strided", "threads", "pool"]
    }
}

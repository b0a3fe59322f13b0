#![no_main]

use libfuzzer_sys::fuzz_target;
use std::sync::Arc;

use picalc_core::executor::{Executor, PiCalculator};
use picalc_core::observer::NoOpObserver;
use picalc_core::options::Options;
use picalc_core::pool::Pool;
use picalc_core::progress::CancellationToken;
use picalc_core::sequential::Sequential;
use picalc_core::strided::Strided;
use picalc_core::threads::Threads;

fuzz_target!(|data: &[u8]| {
    if data.len() < 5 {
        return;
    }
    // Cap terms and workers for speed (4 back-ends per input)
    let terms = u64::from(u32::from_le_bytes([data[0], data[1], data[2], data[3]])) % 50_000 + 1;
    let workers = (data[4] as usize % 32 + 1).min(terms as usize);

    let backends: [Arc<dyn Executor>; 4] = [
        Arc::new(PiCalculator::new(Arc::new(Sequential::new()))),
        Arc::new(PiCalculator::new(Arc::new(Strided::new()))),
        Arc::new(PiCalculator::new(Arc::new(Threads::new()))),
        Arc::new(PiCalculator::new(Arc::new(Pool::new()))),
    ];

    let cancel = CancellationToken::new();
    let observer = NoOpObserver::new();
    let opts = Options {
        workers,
        ..Options::default()
    };

    let mut values = Vec::with_capacity(backends.len());
    for backend in &backends {
        values.push(
            backend
                .approximate(&cancel, &observer, 0, terms, &opts)
                .expect("valid request must succeed"),
        );
    }

    let reference = values[0];
    for value in &values[1..] {
        assert!(
            (value - reference).abs() <= 1e-9 * reference.abs().max(1.0),
            "back-ends diverged at terms={terms}, workers={workers}"
        );
    }
});

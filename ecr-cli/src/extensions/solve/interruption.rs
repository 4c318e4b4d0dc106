//! Interruption handler.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/interruption_test.rs"]
mod interruption_test;

use ecr_heuristics::prelude::Quota;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

/// Creates a quota which is reached when the process receives an interruption signal (Ctrl+C).
/// Returns none when the signal handler cannot be installed.
pub fn create_interruption_quota() -> Option<Arc<dyn Quota>> {
    get_interruption_flag().map::<Arc<dyn Quota>, _>(|should_interrupt| Arc::new(InterruptionQuota { should_interrupt }))
}

/// Returns a process wide flag which is set by the signal handler. The handler is installed once.
fn get_interruption_flag() -> Option<Arc<AtomicBool>> {
    static FLAG: OnceLock<Option<Arc<AtomicBool>>> = OnceLock::new();

    FLAG.get_or_init(|| {
        let should_interrupt = Arc::new(AtomicBool::new(false));

        ctrlc::set_handler({
            let should_interrupt = should_interrupt.clone();
            move || {
                should_interrupt.store(true, Ordering::Relaxed);
            }
        })
        .ok()
        .map(|_| should_interrupt)
    })
    .clone()
}

struct InterruptionQuota {
    should_interrupt: Arc<AtomicBool>,
}

impl Quota for InterruptionQuota {
    fn is_reached(&self) -> bool {
        self.should_interrupt.load(Ordering::Relaxed)
    }
}

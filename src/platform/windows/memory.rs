//! Working-set trim for the periodic trimmer.

use std::sync::Mutex;

use tracing::debug;
use windows::Win32::System::Threading::{GetCurrentProcess, SetProcessWorkingSetSize};

static TRIM_LOCK: Mutex<()> = Mutex::new(());

/// Ask the OS to page out as much of the working set as it can.
pub fn trim_working_set() {
    let _guard = TRIM_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    // (SIZE_T)-1 for both bounds removes as many pages as possible
    match unsafe { SetProcessWorkingSetSize(GetCurrentProcess(), usize::MAX, usize::MAX) } {
        Ok(()) => debug!("working set trimmed"),
        Err(e) => debug!("working set trim failed: {}", e),
    }
}

//! Pin the measuring thread to one core for the duration of a trial.
//!
//! Only Linux actually pins (through `libc::sched_setaffinity`). On other
//! targets the guard is a no-op and reports itself as unpinned.

#[cfg(target_os = "linux")]
mod platform {
    /// Saved affinity mask of the calling thread
    pub type Saved = libc::cpu_set_t;

    pub fn current_cpu() -> Option<usize> {
        // SAFETY: sched_getcpu has no preconditions.
        let cpu = unsafe { libc::sched_getcpu() };
        usize::try_from(cpu).ok()
    }

    pub fn save() -> Option<Saved> {
        // SAFETY: the set is zero-initialised and sized for the syscall.
        unsafe {
            let mut set: libc::cpu_set_t = std::mem::zeroed();
            (libc::sched_getaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &mut set) == 0)
                .then_some(set)
        }
    }

    pub fn pin(core: usize) -> bool {
        // SAFETY: CPU_SET only touches the local set; pid 0 is this thread.
        unsafe {
            let mut set: libc::cpu_set_t = std::mem::zeroed();
            libc::CPU_ZERO(&mut set);
            libc::CPU_SET(core, &mut set);
            libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &set) == 0
        }
    }

    pub fn restore(saved: &Saved) {
        // SAFETY: `saved` came from sched_getaffinity on this thread.
        unsafe {
            libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), saved);
        }
    }
}

#[cfg(not(target_os = "linux"))]
mod platform {
    pub type Saved = ();

    pub fn current_cpu() -> Option<usize> {
        None
    }

    pub fn save() -> Option<Saved> {
        None
    }

    pub fn pin(_core: usize) -> bool {
        false
    }

    pub fn restore(_saved: &Saved) {}
}

/// RAII guard: pins on creation, restores the previous mask on drop.
pub struct CpuPinGuard {
    pinned_core: Option<usize>,
    saved: Option<platform::Saved>,
}

impl CpuPinGuard {
    /// Pin to whichever core the thread is currently running on
    pub fn new() -> Self {
        let Some(core) = platform::current_cpu() else {
            return Self::unpinned();
        };
        let Some(saved) = platform::save() else {
            return Self::unpinned();
        };
        if platform::pin(core) {
            Self {
                pinned_core: Some(core),
                saved: Some(saved),
            }
        } else {
            Self::unpinned()
        }
    }

    fn unpinned() -> Self {
        Self {
            pinned_core: None,
            saved: None,
        }
    }

    pub fn core_id(&self) -> Option<usize> {
        self.pinned_core
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned_core.is_some()
    }
}

impl Default for CpuPinGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for CpuPinGuard {
    fn drop(&mut self) {
        if let Some(saved) = self.saved.take() {
            platform::restore(&saved);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_reports_consistent_state() {
        let guard = CpuPinGuard::new();
        assert_eq!(guard.is_pinned(), guard.core_id().is_some());
    }

    #[test]
    fn test_nested_guards_restore() {
        let outer = CpuPinGuard::new();
        {
            let inner = CpuPinGuard::new();
            if outer.is_pinned() {
                assert_eq!(inner.core_id(), outer.core_id());
            }
        }
        drop(outer);
    }
}

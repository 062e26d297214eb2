// Copyright (c) 2025 vivo Mobile Communication Co., Ltd.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//       http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Global exception masking through PRIMASK and FAULTMASK.
//!
//! The interrupt controller and timer drivers do not lock anything
//! themselves. Callers that must keep a priority update or a callback
//! registration atomic with respect to an exception handler wrap it in an
//! [`IrqGuard`] or [`free`].

use super::Arch;
use core::sync::atomic::{compiler_fence, Ordering};

cfg_if::cfg_if! {
    if #[cfg(all(target_arch = "arm", target_os = "none"))] {
        use core::arch::asm;

        #[inline]
        fn primask() -> usize {
            let r: u32;
            // SAFETY: Safe register read operation
            unsafe { asm!("mrs {}, PRIMASK", out(reg) r, options(nomem, nostack, preserves_flags)) };
            r as usize
        }

        #[inline]
        fn set_primask(state: usize) {
            // SAFETY: Safe register write operation
            unsafe { asm!("msr PRIMASK, {}", in(reg) state) };
        }

        #[inline]
        fn cpsid_i() {
            cortex_m::interrupt::disable();
        }

        #[inline]
        fn cpsie_i() {
            // SAFETY: callers pair this with an earlier mask
            unsafe { cortex_m::interrupt::enable() };
        }

        #[inline]
        fn cpsid_f() {
            // SAFETY: Safe register write operation
            unsafe { asm!("cpsid f", options(nomem, nostack, preserves_flags)) };
        }

        #[inline]
        fn cpsie_f() {
            // SAFETY: Safe register write operation
            unsafe { asm!("cpsie f", options(nomem, nostack, preserves_flags)) };
        }

        #[inline]
        fn faultmask() -> bool {
            cortex_m::register::faultmask::read().is_active()
        }
    } else {
        // Host builds have no PRIMASK/FAULTMASK, keep a software copy so the
        // drivers and their tests behave the same way.
        use core::sync::atomic::{AtomicBool, AtomicUsize};

        static PRIMASK: AtomicUsize = AtomicUsize::new(0);
        static FAULTMASK: AtomicBool = AtomicBool::new(false);

        fn primask() -> usize {
            PRIMASK.load(Ordering::SeqCst)
        }

        fn set_primask(state: usize) {
            PRIMASK.store(state & 1, Ordering::SeqCst);
        }

        fn cpsid_i() {
            PRIMASK.store(1, Ordering::SeqCst);
        }

        fn cpsie_i() {
            PRIMASK.store(0, Ordering::SeqCst);
        }

        fn cpsid_f() {
            FAULTMASK.store(true, Ordering::SeqCst);
        }

        fn cpsie_f() {
            FAULTMASK.store(false, Ordering::SeqCst);
        }

        fn faultmask() -> bool {
            FAULTMASK.load(Ordering::SeqCst)
        }
    }
}

impl Arch {
    /// Masks IRQs and configurable exceptions, returning the previous
    /// PRIMASK for [`Arch::restore_interrupts`].
    #[inline]
    pub fn disable_interrupts() -> usize {
        let r = primask();
        cpsid_i();
        // cortex_m::interrupt::disable() in 0.7.7 provides no fence.
        // Ensure no preceeding memory accesses are reordered to after interrupts are disabled.
        compiler_fence(Ordering::SeqCst);
        r
    }

    #[inline]
    pub fn restore_interrupts(state: usize) {
        // Ensure no preceeding memory accesses are reordered to after interrupts are enabled.
        compiler_fence(Ordering::SeqCst);
        set_primask(state);
    }

    /// Clears PRIMASK unconditionally (`cpsie i`).
    #[inline]
    pub fn enable_interrupts() {
        compiler_fence(Ordering::SeqCst);
        cpsie_i();
    }

    #[inline]
    pub fn is_interrupts_active() -> bool {
        primask() & 1 == 0
    }

    /// Masks every exception except NMI (`cpsid f`).
    #[inline]
    pub fn disable_faults() {
        cpsid_f();
        compiler_fence(Ordering::SeqCst);
    }

    #[inline]
    pub fn enable_faults() {
        compiler_fence(Ordering::SeqCst);
        cpsie_f();
    }

    #[inline]
    pub fn is_faults_active() -> bool {
        !faultmask()
    }
}

/// Scoped PRIMASK acquisition, the previous state comes back on drop.
pub struct IrqGuard {
    state: usize,
}

impl IrqGuard {
    #[inline]
    pub fn new() -> Self {
        Self {
            state: Arch::disable_interrupts(),
        }
    }
}

impl Default for IrqGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for IrqGuard {
    #[inline]
    fn drop(&mut self) {
        Arch::restore_interrupts(self.state);
    }
}

/// Runs `f` with IRQs masked.
#[inline]
pub fn free<R>(f: impl FnOnce() -> R) -> R {
    let _guard = IrqGuard::new();
    f()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // The host mask is process wide.
    static MASK_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_guard_restores_on_drop() {
        let _l = MASK_LOCK.lock().unwrap();
        Arch::enable_interrupts();
        {
            let _g = IrqGuard::new();
            assert!(!Arch::is_interrupts_active());
            {
                let _nested = IrqGuard::new();
                assert!(!Arch::is_interrupts_active());
            }
            // nested guard must not unmask early
            assert!(!Arch::is_interrupts_active());
        }
        assert!(Arch::is_interrupts_active());
    }

    #[test]
    fn test_free_keeps_masked_state() {
        let _l = MASK_LOCK.lock().unwrap();
        let _outer = Arch::disable_interrupts();
        let active = free(Arch::is_interrupts_active);
        assert!(!active);
        assert!(!Arch::is_interrupts_active());
        Arch::enable_interrupts();
    }

    #[test]
    fn test_fault_mask() {
        let _l = MASK_LOCK.lock().unwrap();
        Arch::disable_faults();
        assert!(!Arch::is_faults_active());
        Arch::enable_faults();
        assert!(Arch::is_faults_active());
    }
}

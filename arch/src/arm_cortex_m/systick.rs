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

//! SysTick periodic timer.
//!
//! The timer is either stopped, counting with the caller spinning on
//! COUNTFLAG, or counting with TICKINT set so that every wrap enters
//! `SysTick_Handler`, which calls [`SysTick::handle_interrupt`].

use super::{
    callback::{Callback, CallbackSlot},
    registers::{SysTickRegisters, CTRL, LOAD, SYSTICK, VAL},
    static_ref::StaticRef,
};
use crate::error::TimerError;
use core::hint::spin_loop;
use log::trace;
use tock_registers::interfaces::{ReadWriteable, Readable, Writeable};

/// Largest value the 24-bit reload register holds.
pub const RELOAD_MAX: u32 = 0x00ff_ffff;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TimerMode {
    Disabled,
    Polled,
    InterruptDriven,
}

pub struct SysTick {
    regs: StaticRef<SysTickRegisters>,
    ticks_per_ms: u32,
    callback: CallbackSlot,
}

impl SysTick {
    pub const fn new(regs: StaticRef<SysTickRegisters>, ticks_per_ms: u32) -> Self {
        Self {
            regs,
            ticks_per_ms,
            callback: CallbackSlot::new(),
        }
    }

    /// The core SysTick clocked at `ticks_per_ms` processor cycles per
    /// millisecond.
    pub const fn system(ticks_per_ms: u32) -> Self {
        Self::new(SYSTICK, ticks_per_ms)
    }

    pub fn ticks_per_ms(&self) -> u32 {
        self.ticks_per_ms
    }

    /// Longest duration a single reload covers.
    pub fn max_duration_ms(&self) -> u16 {
        (RELOAD_MAX + 1)
            .checked_div(self.ticks_per_ms)
            .map_or(u16::MAX, |ms| ms.min(u32::from(u16::MAX)) as u16)
    }

    /// Unchecked reload value for `ms`. Zero or overlong durations wrap, the
    /// register keeps the low 24 bits.
    #[inline]
    pub fn reload_value(&self, ms: u16) -> u32 {
        u32::from(ms)
            .wrapping_mul(self.ticks_per_ms)
            .wrapping_sub(1)
    }

    pub fn reload_for(&self, ms: u16) -> Result<u32, TimerError> {
        if ms == 0 {
            return Err(TimerError::ZeroDuration);
        }
        match u32::from(ms).checked_mul(self.ticks_per_ms) {
            Some(ticks) if ticks != 0 && ticks - 1 <= RELOAD_MAX => Ok(ticks - 1),
            _ => Err(TimerError::ReloadOverflow { ms }),
        }
    }

    fn program(&self, ms: u16) {
        let reload = self.reload_value(ms);
        trace!("systick: {} ms, reload {:#x}", ms, reload);
        self.regs.ctrl.set(0);
        self.regs.load.write(LOAD::RELOAD.val(reload));
        self.regs.val.set(0);
    }

    /// Starts periodic interrupts every `ms` milliseconds. `ms` must be
    /// non-zero and fit the 24-bit reload, see [`SysTick::try_init`].
    pub fn init(&self, ms: u16) {
        self.program(ms);
        self.regs
            .ctrl
            .write(CTRL::CLKSOURCE::System + CTRL::TICKINT::SET + CTRL::ENABLE::SET);
    }

    pub fn try_init(&self, ms: u16) -> Result<(), TimerError> {
        self.reload_for(ms)?;
        self.init(ms);
        Ok(())
    }

    /// Blocks for `ms` milliseconds by polling COUNTFLAG, then leaves the
    /// timer disabled. Must not be called from a handler that has to stay
    /// short.
    pub fn start_busy_wait(&self, ms: u16) {
        self.program(ms);
        self.regs
            .ctrl
            .write(CTRL::CLKSOURCE::System + CTRL::ENABLE::SET);
        while !self.regs.ctrl.is_set(CTRL::COUNTFLAG) {
            spin_loop();
        }
        self.regs.ctrl.set(0);
    }

    /// Replaces the callback run on every wrap. Takes effect from the first
    /// interrupt that observes the store.
    pub fn set_callback(&self, callback: Option<Callback>) {
        self.callback.set(callback);
    }

    pub fn callback(&self) -> Option<Callback> {
        self.callback.get()
    }

    /// Body of `SysTick_Handler`.
    #[inline]
    pub fn handle_interrupt(&self) {
        self.callback.invoke();
    }

    /// Resumes counting with the configuration left by `init`.
    pub fn start(&self) {
        self.regs.ctrl.modify(CTRL::ENABLE::SET);
    }

    pub fn stop(&self) {
        self.regs.ctrl.modify(CTRL::ENABLE::CLEAR);
    }

    /// Disables the timer and clears reload and current value. The callback
    /// stays registered.
    pub fn deinit(&self) {
        trace!("systick: deinit");
        self.regs.ctrl.set(0);
        self.regs.load.set(0);
        self.regs.val.set(0);
    }

    pub fn is_running(&self) -> bool {
        self.regs.ctrl.is_set(CTRL::ENABLE)
    }

    pub fn mode(&self) -> TimerMode {
        let ctrl = self.regs.ctrl.extract();
        match (ctrl.is_set(CTRL::ENABLE), ctrl.is_set(CTRL::TICKINT)) {
            (false, _) => TimerMode::Disabled,
            (true, false) => TimerMode::Polled,
            (true, true) => TimerMode::InterruptDriven,
        }
    }

    /// Reading COUNTFLAG clears it on hardware.
    pub fn has_wrapped(&self) -> bool {
        self.regs.ctrl.is_set(CTRL::COUNTFLAG)
    }

    pub fn reload(&self) -> u32 {
        self.regs.load.read(LOAD::RELOAD)
    }

    pub fn current(&self) -> u32 {
        self.regs.val.read(VAL::CURRENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arch::static_ref::host::{block, snapshot};
    use core::sync::atomic::{AtomicU32, AtomicUsize, Ordering};
    use std::thread;

    const TICKS_PER_MS: u32 = 16_000;
    const CTRL_WORD: usize = 0;
    const LOAD_WORD: usize = 1;
    const VAL_WORD: usize = 2;

    fn host_systick() -> (SysTick, &'static [AtomicU32]) {
        let (regs, raw) = block::<SysTickRegisters>();
        (SysTick::new(regs, TICKS_PER_MS), raw)
    }

    #[test]
    fn test_init_programs_reload() {
        let (systick, raw) = host_systick();
        raw[VAL_WORD].store(0x1234, Ordering::SeqCst);
        systick.init(100);
        assert_eq!(raw[LOAD_WORD].load(Ordering::SeqCst), 1_599_999);
        assert_eq!(raw[VAL_WORD].load(Ordering::SeqCst), 0);
        assert_eq!(raw[CTRL_WORD].load(Ordering::SeqCst), 0x7);
        assert_eq!(systick.mode(), TimerMode::InterruptDriven);
        assert_eq!(systick.reload(), 1_599_999);
    }

    #[test]
    fn test_start_stop_toggle_enable_only() {
        let (systick, raw) = host_systick();
        systick.init(10);
        let load = raw[LOAD_WORD].load(Ordering::SeqCst);
        systick.stop();
        assert_eq!(raw[CTRL_WORD].load(Ordering::SeqCst), 0x6);
        assert!(!systick.is_running());
        systick.start();
        assert_eq!(raw[CTRL_WORD].load(Ordering::SeqCst), 0x7);
        assert_eq!(raw[LOAD_WORD].load(Ordering::SeqCst), load);
    }

    // The helper thread's atomic writes race with the driver's volatile
    // reads of CTRL, which Miri rejects as a data race.
    #[test]
    #[cfg_attr(miri, ignore)]
    fn test_busy_wait_polls_count_flag() {
        let (systick, raw) = host_systick();
        let hardware = thread::spawn(move || {
            // the counter wraps once the driver has enabled it
            while raw[CTRL_WORD].load(Ordering::SeqCst) & 1 == 0 {
                thread::yield_now();
            }
            assert_eq!(raw[CTRL_WORD].load(Ordering::SeqCst), 0x5);
            assert_eq!(raw[LOAD_WORD].load(Ordering::SeqCst), 5 * TICKS_PER_MS - 1);
            raw[CTRL_WORD].fetch_or(1 << 16, Ordering::SeqCst);
        });
        systick.start_busy_wait(5);
        hardware.join().unwrap();
        assert_eq!(raw[CTRL_WORD].load(Ordering::SeqCst), 0);
        assert_eq!(systick.mode(), TimerMode::Disabled);
    }

    static CALLS: AtomicUsize = AtomicUsize::new(0);

    fn count_call() {
        CALLS.fetch_add(1, Ordering::SeqCst);
    }

    #[test]
    fn test_handler_runs_callback_once_per_call() {
        let (systick, _) = host_systick();
        systick.handle_interrupt();

        systick.set_callback(Some(count_call));
        let before = CALLS.load(Ordering::SeqCst);
        systick.handle_interrupt();
        assert_eq!(CALLS.load(Ordering::SeqCst) - before, 1);
        systick.handle_interrupt();
        assert_eq!(CALLS.load(Ordering::SeqCst) - before, 2);

        systick.set_callback(None);
        systick.handle_interrupt();
        assert_eq!(CALLS.load(Ordering::SeqCst) - before, 2);
    }

    #[test]
    fn test_deinit_keeps_callback() {
        let (systick, raw) = host_systick();
        systick.set_callback(Some(count_call));
        systick.init(1);
        raw[VAL_WORD].store(77, Ordering::SeqCst);
        systick.deinit();
        assert_eq!(&snapshot(raw)[..3], &[0u32, 0, 0]);
        assert!(systick.callback().is_some());
    }

    #[test]
    fn test_reload_bounds() {
        let (systick, raw) = host_systick();
        assert_eq!(systick.reload_for(1), Ok(15_999));
        assert_eq!(systick.reload_for(1048), Ok(16_767_999));
        assert_eq!(
            systick.reload_for(1049),
            Err(TimerError::ReloadOverflow { ms: 1049 })
        );
        assert_eq!(systick.reload_for(0), Err(TimerError::ZeroDuration));
        assert_eq!(systick.max_duration_ms(), 1048);
        assert_eq!(systick.try_init(0), Err(TimerError::ZeroDuration));
        assert_eq!(raw[CTRL_WORD].load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_unchecked_reload_truncates() {
        let (systick, raw) = host_systick();
        systick.init(2000);
        assert_eq!(
            raw[LOAD_WORD].load(Ordering::SeqCst),
            (2000 * TICKS_PER_MS - 1) & 0x00ff_ffff
        );
        systick.init(0);
        assert_eq!(raw[LOAD_WORD].load(Ordering::SeqCst), 0x00ff_ffff);
    }
}

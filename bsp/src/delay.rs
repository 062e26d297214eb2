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

//! Blocking delays on top of the SysTick busy-wait.

use crate::arch::SysTick;
use embedded_hal::delay::DelayNs;

/// Spins on SysTick for every delay. Sub-millisecond requests round up to a
/// whole millisecond, so delays are never shorter than asked.
///
/// Reprograms the timer on each call: do not use it while SysTick is
/// running interrupt-driven.
pub struct BusyWaitDelay<'a> {
    systick: &'a SysTick,
    max_chunk_ms: u32,
}

impl<'a> BusyWaitDelay<'a> {
    pub fn new(systick: &'a SysTick) -> Self {
        Self {
            systick,
            max_chunk_ms: u32::from(systick.max_duration_ms()).max(1),
        }
    }
}

impl DelayNs for BusyWaitDelay<'_> {
    fn delay_ns(&mut self, ns: u32) {
        self.delay_ms(ns.div_ceil(1_000_000));
    }

    fn delay_us(&mut self, us: u32) {
        self.delay_ms(us.div_ceil(1_000));
    }

    fn delay_ms(&mut self, ms: u32) {
        let mut left = ms;
        while left > 0 {
            let chunk = left.min(self.max_chunk_ms);
            // chunk never exceeds max_duration_ms, which fits u16
            self.systick.start_busy_wait(chunk as u16);
            left -= chunk;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arch::{registers::SysTickRegisters, static_ref::host::block};
    use core::sync::atomic::{AtomicU32, Ordering};
    use std::thread;

    const CTRL_WORD: usize = 0;
    const LOAD_WORD: usize = 1;
    const ENABLED_POLLED: u32 = 0x5;
    const COUNTFLAG: u32 = 1 << 16;

    fn host_systick() -> (SysTick, &'static [AtomicU32]) {
        let (regs, raw) = block::<SysTickRegisters>();
        (SysTick::new(regs, 16_000), raw)
    }

    /// Plays the counter: every time the driver starts a polled count, record
    /// the reload and raise COUNTFLAG.
    ///
    /// The atomic stores here race with the driver's volatile reads of the
    /// same words. Real hardware behaves this way but Miri reports it as a
    /// data race, so the tests using it are skipped there.
    fn run_hardware(raw: &'static [AtomicU32], wraps: usize) -> thread::JoinHandle<Vec<u32>> {
        thread::spawn(move || {
            let mut reloads = Vec::new();
            for _ in 0..wraps {
                while raw[CTRL_WORD].load(Ordering::SeqCst) != ENABLED_POLLED {
                    thread::yield_now();
                }
                reloads.push(raw[LOAD_WORD].load(Ordering::SeqCst));
                raw[CTRL_WORD].fetch_or(COUNTFLAG, Ordering::SeqCst);
            }
            reloads
        })
    }

    #[test]
    #[cfg_attr(miri, ignore)]
    fn test_long_delay_is_chunked() {
        let (systick, raw) = host_systick();
        let hardware = run_hardware(raw, 3);
        BusyWaitDelay::new(&systick).delay_ms(2500);
        let reloads = hardware.join().unwrap();
        assert_eq!(reloads, [16_767_999, 16_767_999, 404 * 16_000 - 1]);
        assert_eq!(raw[CTRL_WORD].load(Ordering::SeqCst), 0);
    }

    #[test]
    #[cfg_attr(miri, ignore)]
    fn test_short_delay_rounds_up() {
        let (systick, raw) = host_systick();
        let hardware = run_hardware(raw, 1);
        BusyWaitDelay::new(&systick).delay_us(10);
        assert_eq!(hardware.join().unwrap(), [15_999]);
    }

    #[test]
    fn test_zero_delay_does_not_touch_timer() {
        let (systick, raw) = host_systick();
        BusyWaitDelay::new(&systick).delay_ns(0);
        assert!(raw.iter().all(|w| w.load(Ordering::SeqCst) == 0));
    }
}

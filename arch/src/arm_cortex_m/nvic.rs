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

//! Nested vectored interrupt controller driver for peripheral IRQ lines.
//!
//! Line `n` lives in bank `n / 32` at bit `n % 32` of the set/clear
//! registers, and in priority register `n / 4` at byte lane `n % 4`.
//! Requests for lines the controller does not wire are ignored, they never
//! reach the hardware.

use super::{
    registers::{
        NvicRegisters, SystemHandlerRegisters, IRQ_LINES, IRQ_PER_BANK, NVIC,
        PRIORITY_FIELDS_PER_REGISTER, PRIORITY_LANES, SYSTEM_HANDLERS,
    },
    static_ref::StaticRef,
};
use crate::error::InterruptError;
use log::{trace, warn};
use tock_registers::interfaces::{ReadWriteable, Readable, Writeable};

/// Priority bits implemented per source on the TM4C123.
pub const PRIORITY_BITS: u8 = 3;
pub const PRIORITY_MAX: u8 = (1 << PRIORITY_BITS) - 1;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct IrqNumber(u16);

impl IrqNumber {
    #[inline]
    pub const fn new(number: u16) -> Result<Self, InterruptError> {
        if (number as usize) < IRQ_LINES {
            Ok(Self(number))
        } else {
            Err(InterruptError::IrqOutOfRange(number))
        }
    }

    /// # Safety
    ///
    /// `number` must be below 128.
    #[inline]
    pub const unsafe fn new_unchecked(number: u16) -> Self {
        Self(number)
    }

    #[inline]
    pub const fn number(self) -> u16 {
        self.0
    }

    #[inline]
    const fn bank(self) -> usize {
        self.0 as usize / IRQ_PER_BANK
    }

    #[inline]
    const fn bit(self) -> u32 {
        1 << (self.0 as usize % IRQ_PER_BANK)
    }

    #[inline]
    const fn priority_register(self) -> usize {
        self.0 as usize / PRIORITY_FIELDS_PER_REGISTER
    }

    #[inline]
    const fn priority_lane(self) -> usize {
        self.0 as usize % PRIORITY_FIELDS_PER_REGISTER
    }
}

impl TryFrom<u16> for IrqNumber {
    type Error = InterruptError;

    fn try_from(number: u16) -> Result<Self, Self::Error> {
        Self::new(number)
    }
}

impl From<IrqNumber> for usize {
    fn from(irq: IrqNumber) -> Self {
        usize::from(irq.0)
    }
}

// SAFETY: get the number of the interrupt is safe
#[cfg(all(target_arch = "arm", target_os = "none"))]
unsafe impl cortex_m::interrupt::InterruptNumber for IrqNumber {
    #[inline]
    fn number(self) -> u16 {
        self.0
    }
}

/// Preemption priority, 0 is the most urgent.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Priority(u8);

impl Priority {
    pub const HIGHEST: Priority = Priority(0);
    pub const LOWEST: Priority = Priority(PRIORITY_MAX);

    #[inline]
    pub const fn new(level: u8) -> Result<Self, InterruptError> {
        if level <= PRIORITY_MAX {
            Ok(Self(level))
        } else {
            Err(InterruptError::PriorityOutOfRange(level))
        }
    }

    /// Keeps the low [`PRIORITY_BITS`] bits, anything above would spill
    /// into the neighbouring field.
    #[inline]
    pub const fn from_bits_truncate(level: u8) -> Self {
        Self(level & PRIORITY_MAX)
    }

    #[inline]
    pub const fn level(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Priority {
    type Error = InterruptError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::new(level)
    }
}

pub struct Nvic {
    pub(super) nvic: StaticRef<NvicRegisters>,
    pub(super) scb: StaticRef<SystemHandlerRegisters>,
}

impl Nvic {
    pub const fn new(
        nvic: StaticRef<NvicRegisters>,
        scb: StaticRef<SystemHandlerRegisters>,
    ) -> Self {
        Self { nvic, scb }
    }

    /// The controller at its architectural address.
    pub const fn system() -> Self {
        Self::new(NVIC, SYSTEM_HANDLERS)
    }

    pub fn unmask(&self, irq: IrqNumber) {
        trace!("nvic: enable irq {}", irq.0);
        // EN reads back the enabled lines, so or-ing keeps them set
        let en = &self.nvic.iser[irq.bank()];
        en.set(en.get() | irq.bit());
    }

    /// Writes the line's bit to the clear-enable register. Other lines are
    /// untouched since zeros written there have no effect.
    pub fn mask(&self, irq: IrqNumber) {
        trace!("nvic: disable irq {}", irq.0);
        self.nvic.icer[irq.bank()].set(irq.bit());
    }

    /// Read-modify-write of the line's priority register. Not atomic: two
    /// contexts touching lines that share a register need an
    /// [`IrqGuard`](super::interrupt::IrqGuard) around the call.
    pub fn set_priority(&self, irq: IrqNumber, priority: Priority) {
        trace!("nvic: irq {} priority {}", irq.0, priority.0);
        let field = PRIORITY_LANES[irq.priority_lane()];
        self.nvic.ipr[irq.priority_register()].modify(field.val(u32::from(priority.0)));
    }

    pub fn priority(&self, irq: IrqNumber) -> Priority {
        let field = PRIORITY_LANES[irq.priority_lane()];
        Priority(self.nvic.ipr[irq.priority_register()].read(field) as u8)
    }

    pub fn is_enabled(&self, irq: IrqNumber) -> bool {
        self.nvic.iser[irq.bank()].get() & irq.bit() != 0
    }

    pub fn is_pending(&self, irq: IrqNumber) -> bool {
        self.nvic.ispr[irq.bank()].get() & irq.bit() != 0
    }

    pub fn is_active(&self, irq: IrqNumber) -> bool {
        self.nvic.iabr[irq.bank()].get() & irq.bit() != 0
    }

    pub fn pend(&self, irq: IrqNumber) {
        let pend = &self.nvic.ispr[irq.bank()];
        pend.set(pend.get() | irq.bit());
    }

    pub fn unpend(&self, irq: IrqNumber) {
        self.nvic.icpr[irq.bank()].set(irq.bit());
    }

    pub fn enable_irq(&self, irq: u16) {
        match IrqNumber::new(irq) {
            Ok(irq) => self.unmask(irq),
            Err(_) => warn!("nvic: ignoring enable of irq {}", irq),
        }
    }

    pub fn disable_irq(&self, irq: u16) {
        match IrqNumber::new(irq) {
            Ok(irq) => self.mask(irq),
            Err(_) => warn!("nvic: ignoring disable of irq {}", irq),
        }
    }

    /// Only the low three bits of `priority` are written.
    pub fn set_irq_priority(&self, irq: u16, priority: u8) {
        let Ok(irq) = IrqNumber::new(irq) else {
            warn!("nvic: ignoring priority of irq {}", irq);
            return;
        };
        if priority > PRIORITY_MAX {
            warn!("nvic: irq {} priority {} truncated", irq.0, priority);
        }
        self.set_priority(irq, Priority::from_bits_truncate(priority));
    }

    pub fn irq_priority(&self, irq: u16) -> Option<u8> {
        IrqNumber::new(irq).ok().map(|irq| self.priority(irq).0)
    }

    pub fn is_irq_enabled(&self, irq: u16) -> bool {
        IrqNumber::new(irq).is_ok_and(|irq| self.is_enabled(irq))
    }

    pub fn is_irq_pending(&self, irq: u16) -> bool {
        IrqNumber::new(irq).is_ok_and(|irq| self.is_pending(irq))
    }

    pub fn is_irq_active(&self, irq: u16) -> bool {
        IrqNumber::new(irq).is_ok_and(|irq| self.is_active(irq))
    }

    pub fn pend_irq(&self, irq: u16) {
        if let Ok(irq) = IrqNumber::new(irq) {
            self.pend(irq);
        }
    }

    pub fn unpend_irq(&self, irq: u16) {
        if let Ok(irq) = IrqNumber::new(irq) {
            self.unpend(irq);
        }
    }
}

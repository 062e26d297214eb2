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

//! Core system exceptions.
//!
//! Enable bits and priority fields of the system exceptions do not follow
//! any formula, so each exception is looked up in [`EXCEPTION_TABLE`].

use super::{
    nvic::{Nvic, Priority, PRIORITY_MAX},
    registers::{PRI, SHCSR},
};
use crate::error::InterruptError;
use log::{trace, warn};
use tock_registers::{
    fields::Field,
    interfaces::{ReadWriteable, Readable},
};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SystemException {
    Reset,
    NonMaskableInt,
    HardFault,
    MemoryManagement,
    BusFault,
    UsageFault,
    SVCall,
    DebugMonitor,
    PendSV,
    SysTick,
}

impl SystemException {
    pub const ALL: [SystemException; 10] = [
        Self::Reset,
        Self::NonMaskableInt,
        Self::HardFault,
        Self::MemoryManagement,
        Self::BusFault,
        Self::UsageFault,
        Self::SVCall,
        Self::DebugMonitor,
        Self::PendSV,
        Self::SysTick,
    ];

    /// Position in the vector table.
    pub const fn vector(self) -> u8 {
        match self {
            Self::Reset => 1,
            Self::NonMaskableInt => 2,
            Self::HardFault => 3,
            Self::MemoryManagement => 4,
            Self::BusFault => 5,
            Self::UsageFault => 6,
            Self::SVCall => 11,
            Self::DebugMonitor => 12,
            Self::PendSV => 14,
            Self::SysTick => 15,
        }
    }

    #[inline]
    pub const fn entry(self) -> ExceptionEntry {
        EXCEPTION_TABLE[self as usize]
    }

    pub const fn can_enable(self) -> bool {
        self.entry().enable.is_some()
    }

    pub const fn can_prioritize(self) -> bool {
        self.entry().priority.is_some()
    }
}

/// Which SYSPRIn register holds a priority, and where.
#[derive(Copy, Clone)]
pub struct PrioritySlot {
    /// 0 for SYSPRI1, 1 for SYSPRI2, 2 for SYSPRI3
    pub register: usize,
    pub field: Field<u32, PRI::Register>,
}

#[derive(Copy, Clone)]
pub struct ExceptionEntry {
    pub enable: Option<Field<u32, SHCSR::Register>>,
    pub priority: Option<PrioritySlot>,
}

const SYSPRI1: usize = 0;
const SYSPRI2: usize = 1;
const SYSPRI3: usize = 2;

const FIXED: ExceptionEntry = ExceptionEntry {
    enable: None,
    priority: None,
};

const fn fault(enable: Field<u32, SHCSR::Register>, field: Field<u32, PRI::Register>) -> ExceptionEntry {
    ExceptionEntry {
        enable: Some(enable),
        priority: Some(PrioritySlot {
            register: SYSPRI1,
            field,
        }),
    }
}

const fn handler(register: usize, field: Field<u32, PRI::Register>) -> ExceptionEntry {
    ExceptionEntry {
        enable: None,
        priority: Some(PrioritySlot { register, field }),
    }
}

/// Indexed by `SystemException as usize`.
pub const EXCEPTION_TABLE: [ExceptionEntry; 10] = [
    FIXED, // Reset
    FIXED, // NMI
    FIXED, // HardFault
    fault(SHCSR::MEMFAULTENA, PRI::PRI_0),
    fault(SHCSR::BUSFAULTENA, PRI::PRI_1),
    fault(SHCSR::USGFAULTENA, PRI::PRI_2),
    handler(SYSPRI2, PRI::PRI_3), // SVCall
    handler(SYSPRI3, PRI::PRI_0), // DebugMonitor
    handler(SYSPRI3, PRI::PRI_2), // PendSV
    handler(SYSPRI3, PRI::PRI_3), // SysTick
];

impl Nvic {
    /// No effect for exceptions without an enable bit in SYSHNDCTRL.
    pub fn enable_exception(&self, exception: SystemException) {
        if self.try_enable_exception(exception).is_err() {
            warn!("nvic: {:?} is always enabled", exception);
        }
    }

    pub fn disable_exception(&self, exception: SystemException) {
        if self.try_disable_exception(exception).is_err() {
            warn!("nvic: {:?} cannot be disabled", exception);
        }
    }

    /// No effect for Reset, NMI and HardFault, their priority is fixed.
    pub fn set_exception_priority(&self, exception: SystemException, priority: u8) {
        if priority > PRIORITY_MAX {
            warn!("nvic: {:?} priority {} truncated", exception, priority);
        }
        if self
            .try_set_exception_priority(exception, Priority::from_bits_truncate(priority))
            .is_err()
        {
            warn!("nvic: {:?} has a fixed priority", exception);
        }
    }

    pub fn try_enable_exception(&self, exception: SystemException) -> Result<(), InterruptError> {
        let field = exception
            .entry()
            .enable
            .ok_or(InterruptError::Unsupported(exception))?;
        trace!("nvic: enable {:?}", exception);
        self.scb.shcsr.modify(field.val(1));
        Ok(())
    }

    pub fn try_disable_exception(&self, exception: SystemException) -> Result<(), InterruptError> {
        let field = exception
            .entry()
            .enable
            .ok_or(InterruptError::Unsupported(exception))?;
        trace!("nvic: disable {:?}", exception);
        self.scb.shcsr.modify(field.val(0));
        Ok(())
    }

    pub fn try_set_exception_priority(
        &self,
        exception: SystemException,
        priority: Priority,
    ) -> Result<(), InterruptError> {
        let slot = exception
            .entry()
            .priority
            .ok_or(InterruptError::Unsupported(exception))?;
        trace!("nvic: {:?} priority {}", exception, priority.level());
        self.scb.shpr[slot.register].modify(slot.field.val(u32::from(priority.level())));
        Ok(())
    }

    /// `None` when the exception has no enable bit.
    pub fn is_exception_enabled(&self, exception: SystemException) -> Option<bool> {
        exception
            .entry()
            .enable
            .map(|field| self.scb.shcsr.read(field) != 0)
    }

    pub fn exception_priority(&self, exception: SystemException) -> Option<u8> {
        exception
            .entry()
            .priority
            .map(|slot| self.scb.shpr[slot.register].read(slot.field) as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arch::{nvic::tests::host_nvic, static_ref::host::snapshot};
    use core::sync::atomic::Ordering;

    const SHCSR_WORD: usize = 3;

    // (register word, bit offset) of every exception with a priority field
    const EXPECTED_PRIORITY: [(SystemException, usize, u32); 7] = [
        (SystemException::MemoryManagement, 0, 5),
        (SystemException::BusFault, 0, 13),
        (SystemException::UsageFault, 0, 21),
        (SystemException::SVCall, 1, 29),
        (SystemException::DebugMonitor, 2, 5),
        (SystemException::PendSV, 2, 21),
        (SystemException::SysTick, 2, 29),
    ];

    const FIXED_EXCEPTIONS: [SystemException; 3] = [
        SystemException::Reset,
        SystemException::NonMaskableInt,
        SystemException::HardFault,
    ];

    #[test]
    fn test_table_matches_vector_order() {
        for (i, e) in SystemException::ALL.iter().enumerate() {
            assert_eq!(*e as usize, i);
        }
        let enables: Vec<_> = SystemException::ALL
            .iter()
            .filter(|e| e.can_enable())
            .copied()
            .collect();
        assert_eq!(
            enables,
            [
                SystemException::MemoryManagement,
                SystemException::BusFault,
                SystemException::UsageFault
            ]
        );
    }

    #[test]
    fn test_priority_fields() {
        let (nvic, _, raw) = host_nvic();
        for (exception, word, shift) in EXPECTED_PRIORITY {
            for fill in [0u32, u32::MAX] {
                raw.iter().for_each(|w| w.store(fill, Ordering::SeqCst));
                let priority: u8 = if fill == 0 { 5 } else { 2 };
                nvic.set_exception_priority(exception, priority);
                let after = snapshot(raw);
                for (i, value) in after.iter().enumerate() {
                    if i == word {
                        let expected = (fill & !(0b111 << shift)) | (u32::from(priority) << shift);
                        assert_eq!(*value, expected, "{:?}", exception);
                    } else {
                        assert_eq!(*value, fill, "{:?} touched word {}", exception, i);
                    }
                }
                assert_eq!(nvic.exception_priority(exception), Some(priority));
            }
        }
    }

    #[test]
    fn test_fixed_priority_is_ignored() {
        let (nvic, _, raw) = host_nvic();
        raw[0].store(0x1234_5678, Ordering::SeqCst);
        raw[2].store(0x9abc_def0, Ordering::SeqCst);
        let before = snapshot(raw);
        for exception in FIXED_EXCEPTIONS {
            nvic.set_exception_priority(exception, 3);
            assert_eq!(
                nvic.try_set_exception_priority(exception, Priority::HIGHEST),
                Err(InterruptError::Unsupported(exception))
            );
            assert_eq!(nvic.exception_priority(exception), None);
        }
        assert_eq!(snapshot(raw), before);
    }

    #[test]
    fn test_enable_and_disable_faults() {
        let (nvic, _, raw) = host_nvic();
        for (exception, bit) in [
            (SystemException::MemoryManagement, 16),
            (SystemException::BusFault, 17),
            (SystemException::UsageFault, 18),
        ] {
            raw[SHCSR_WORD].store(0x0000_0800, Ordering::SeqCst);
            nvic.enable_exception(exception);
            assert_eq!(raw[SHCSR_WORD].load(Ordering::SeqCst), 0x0000_0800 | 1 << bit);
            assert_eq!(nvic.is_exception_enabled(exception), Some(true));
            nvic.disable_exception(exception);
            assert_eq!(raw[SHCSR_WORD].load(Ordering::SeqCst), 0x0000_0800);
            assert_eq!(nvic.is_exception_enabled(exception), Some(false));
        }
    }

    #[test]
    fn test_enable_unsupported_is_ignored() {
        let (nvic, _, raw) = host_nvic();
        raw[SHCSR_WORD].store(0x0005_0400, Ordering::SeqCst);
        let before = snapshot(raw);
        for exception in SystemException::ALL.iter().filter(|e| !e.can_enable()) {
            nvic.enable_exception(*exception);
            nvic.disable_exception(*exception);
            assert_eq!(
                nvic.try_enable_exception(*exception),
                Err(InterruptError::Unsupported(*exception))
            );
            assert_eq!(nvic.is_exception_enabled(*exception), None);
        }
        assert_eq!(snapshot(raw), before);
    }
}

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

//! Memory-mapped register layout of the Cortex-M4 NVIC, system handler
//! control and SysTick blocks.
//!
//! See the Cortex-M4 Devices Generic User Guide, sections 4.2, 4.3 and 4.4.

use super::static_ref::StaticRef;
use tock_registers::{
    register_bitfields, register_structs,
    registers::{ReadOnly, ReadWrite, WriteOnly},
};

/// Number of 32-line banks wired on the TM4C123 NVIC.
pub const IRQ_BANKS: usize = 4;
pub const IRQ_PER_BANK: usize = 32;
pub const IRQ_LINES: usize = IRQ_BANKS * IRQ_PER_BANK;
pub const PRIORITY_FIELDS_PER_REGISTER: usize = 4;

pub const NVIC_BASE: usize = 0xE000_E100;
pub const SYSTEM_HANDLER_BASE: usize = 0xE000_ED18;
pub const SYSTICK_BASE: usize = 0xE000_E010;

register_structs! {
    /// Nested vectored interrupt controller, starting at EN0.
    pub NvicRegisters {
        /// Interrupt set-enable, one bit per line
        (0x000 => pub iser: [ReadWrite<u32>; IRQ_BANKS]),
        (0x010 => _reserved0),
        /// Interrupt clear-enable, writing 1 disables the line
        (0x080 => pub icer: [WriteOnly<u32>; IRQ_BANKS]),
        (0x090 => _reserved1),
        /// Interrupt set-pending
        (0x100 => pub ispr: [ReadWrite<u32>; IRQ_BANKS]),
        (0x110 => _reserved2),
        /// Interrupt clear-pending, writing 1 clears the pending state
        (0x180 => pub icpr: [WriteOnly<u32>; IRQ_BANKS]),
        (0x190 => _reserved3),
        /// Interrupt active bits
        (0x200 => pub iabr: [ReadOnly<u32>; IRQ_BANKS]),
        (0x210 => _reserved4),
        /// Interrupt priority, four lines per register
        (0x300 => pub ipr: [ReadWrite<u32, PRI::Register>; IRQ_LINES / PRIORITY_FIELDS_PER_REGISTER]),
        (0x380 => @END),
    }
}

register_structs! {
    /// System handler priority and control, starting at SYSPRI1.
    pub SystemHandlerRegisters {
        /// SYSPRI1..SYSPRI3
        (0x000 => pub shpr: [ReadWrite<u32, PRI::Register>; 3]),
        /// System handler control and state
        (0x00C => pub shcsr: ReadWrite<u32, SHCSR::Register>),
        (0x010 => @END),
    }
}

register_structs! {
    pub SysTickRegisters {
        (0x000 => pub ctrl: ReadWrite<u32, CTRL::Register>),
        (0x004 => pub load: ReadWrite<u32, LOAD::Register>),
        (0x008 => pub val: ReadWrite<u32, VAL::Register>),
        (0x00C => _reserved0),
        (0x010 => @END),
    }
}

register_bitfields![u32,
    /// Layout shared by the NVIC priority registers and SYSPRI1..3. Each
    /// byte lane holds one priority, only its top three bits are implemented.
    pub PRI [
        PRI_0 OFFSET(5) NUMBITS(3) [],
        PRI_1 OFFSET(13) NUMBITS(3) [],
        PRI_2 OFFSET(21) NUMBITS(3) [],
        PRI_3 OFFSET(29) NUMBITS(3) []
    ],
    pub SHCSR [
        USGFAULTENA OFFSET(18) NUMBITS(1) [],
        BUSFAULTENA OFFSET(17) NUMBITS(1) [],
        MEMFAULTENA OFFSET(16) NUMBITS(1) []
    ],
    pub CTRL [
        /// Set by hardware when the counter reaches 0, cleared on read
        COUNTFLAG OFFSET(16) NUMBITS(1) [],
        CLKSOURCE OFFSET(2) NUMBITS(1) [
            PrecisionInternal = 0,
            System = 1
        ],
        TICKINT OFFSET(1) NUMBITS(1) [],
        ENABLE OFFSET(0) NUMBITS(1) []
    ],
    pub LOAD [
        RELOAD OFFSET(0) NUMBITS(24) []
    ],
    pub VAL [
        CURRENT OFFSET(0) NUMBITS(24) []
    ]
];

/// Priority field of each byte lane, indexed by `line % 4`.
pub const PRIORITY_LANES: [tock_registers::fields::Field<u32, PRI::Register>;
    PRIORITY_FIELDS_PER_REGISTER] = [PRI::PRI_0, PRI::PRI_1, PRI::PRI_2, PRI::PRI_3];

pub const NVIC: StaticRef<NvicRegisters> =
    unsafe { StaticRef::new(NVIC_BASE as *const NvicRegisters) };

pub const SYSTEM_HANDLERS: StaticRef<SystemHandlerRegisters> =
    unsafe { StaticRef::new(SYSTEM_HANDLER_BASE as *const SystemHandlerRegisters) };

pub const SYSTICK: StaticRef<SysTickRegisters> =
    unsafe { StaticRef::new(SYSTICK_BASE as *const SysTickRegisters) };

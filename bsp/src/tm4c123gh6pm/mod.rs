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

mod handlers;
pub mod irq;
pub mod sys_config;

pub use handlers::SysTick_Handler;

use crate::arch::{interrupt::IrqGuard, Nvic, SysTick, SystemException};
use log::info;
use sys_config::{
    FAULT_PRIORITY, PENDSV_PRIORITY, SVC_PRIORITY, SYSTICK_PRIORITY, TICKS_PER_MILLISECOND,
};

pub static NVIC: Nvic = Nvic::system();
pub static SYSTICK: SysTick = SysTick::system(TICKS_PER_MILLISECOND);

const FAULTS: [SystemException; 3] = [
    SystemException::MemoryManagement,
    SystemException::BusFault,
    SystemException::UsageFault,
];

/// Applies the board's exception priorities and turns on the configurable
/// fault handlers.
pub fn init() {
    init_with(&NVIC);
}

pub fn init_with(nvic: &Nvic) {
    let _guard = IrqGuard::new();
    nvic.set_exception_priority(SystemException::SVCall, SVC_PRIORITY);
    nvic.set_exception_priority(SystemException::PendSV, PENDSV_PRIORITY);
    nvic.set_exception_priority(SystemException::SysTick, SYSTICK_PRIORITY);
    for fault in FAULTS {
        nvic.set_exception_priority(fault, FAULT_PRIORITY);
        nvic.enable_exception(fault);
    }
    info!("tm4c123gh6pm: exceptions configured");
}

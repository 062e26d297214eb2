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

//! ARM Cortex-M4 interrupt controller and SysTick support.

pub mod callback;
pub mod exception;
pub mod interrupt;
pub mod nvic;
pub mod registers;
pub mod static_ref;
pub mod systick;

pub use exception::SystemException;
pub use interrupt::IrqGuard;
pub use nvic::{IrqNumber, Nvic, Priority};
pub use systick::{SysTick, TimerMode};

pub struct Arch;

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

//! Board support for the TM4C123GH6PM (Tiva C LaunchPad).

#![cfg_attr(not(test), no_std)]

pub mod delay;
pub mod logger;
mod tm4c123gh6pm;

pub use tiva_arch::arch;
pub use tm4c123gh6pm::*;

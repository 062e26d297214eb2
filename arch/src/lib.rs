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

//! Interrupt and timer support for the ARM Cortex-M4 core.
//!
//! Register-level drivers are written against [`arm_cortex_m::static_ref::StaticRef`]
//! so they work on any backing memory; the board crate binds them to the
//! architectural addresses.

#![cfg_attr(not(test), no_std)]

#[cfg(all(feature = "test-util", not(test)))]
extern crate std;

pub mod arm_cortex_m;
pub mod error;

pub use crate::arm_cortex_m as arch;

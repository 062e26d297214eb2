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

// Precision internal oscillator, the clock the board runs from out of reset.
pub const SYSTEM_CORE_CLOCK: u32 = 16_000_000;
pub const TICKS_PER_MILLISECOND: u32 = SYSTEM_CORE_CLOCK / 1000;

// 0 preempts everything, 7 preempts nothing.
pub const FAULT_PRIORITY: u8 = 0;
pub const SVC_PRIORITY: u8 = 5;
pub const SYSTICK_PRIORITY: u8 = 6;
pub const PENDSV_PRIORITY: u8 = 7;

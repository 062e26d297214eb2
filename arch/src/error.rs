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

use crate::arch::exception::SystemException;

/// Raised by the checked interrupt controller entry points.
///
/// The unchecked entry points never produce it, they ignore the request.
#[derive(Debug, Clone, Copy, Eq, PartialEq, thiserror::Error)]
pub enum InterruptError {
    #[error("IRQ {0} is out of range")]
    IrqOutOfRange(u16),
    #[error("Priority {0} exceeds the implemented priority bits")]
    PriorityOutOfRange(u8),
    #[error("{0:?} has no such field")]
    Unsupported(SystemException),
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, thiserror::Error)]
pub enum TimerError {
    #[error("Duration must be non-zero")]
    ZeroDuration,
    #[error("{ms} ms does not fit the 24-bit reload register")]
    ReloadOverflow { ms: u16 },
}

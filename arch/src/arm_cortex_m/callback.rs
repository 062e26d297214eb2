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

use core::{
    mem, ptr,
    sync::atomic::{AtomicPtr, Ordering},
};

pub type Callback = fn();

/// One-entry mailbox shared between thread mode and an exception handler.
///
/// The slot is a single pointer-sized atomic, so a `set` racing with
/// `invoke` is seen either before or after, never torn. No lock is taken,
/// which keeps `invoke` usable from interrupt context.
pub struct CallbackSlot {
    callback: AtomicPtr<()>,
}

impl CallbackSlot {
    pub const fn new() -> Self {
        Self {
            callback: AtomicPtr::new(ptr::null_mut()),
        }
    }

    pub fn set(&self, callback: Option<Callback>) {
        let raw = match callback {
            Some(f) => f as *mut (),
            None => ptr::null_mut(),
        };
        self.callback.store(raw, Ordering::Release);
    }

    pub fn get(&self) -> Option<Callback> {
        let raw = self.callback.load(Ordering::Acquire);
        if raw.is_null() {
            return None;
        }
        // SAFETY: only `set` stores into the slot and it only stores
        // null or a `Callback`.
        Some(unsafe { mem::transmute::<*mut (), Callback>(raw) })
    }

    pub fn is_set(&self) -> bool {
        !self.callback.load(Ordering::Acquire).is_null()
    }

    /// Calls the registered callback, if any. Returns whether one ran.
    #[inline]
    pub fn invoke(&self) -> bool {
        match self.get() {
            Some(f) => {
                f();
                true
            }
            None => false,
        }
    }
}

impl Default for CallbackSlot {
    fn default() -> Self {
        Self::new()
    }
}

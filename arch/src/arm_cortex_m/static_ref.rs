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

// This code is based on [tock](https://github.com/tock/tock/blob/master/kernel/src/utilities/static_ref.rs)

// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Wrapper type for pointers to memory-mapped register blocks.

use core::{ops::Deref, ptr::NonNull};

/// A pointer to a statically allocated register block.
///
/// Dereferencing is safe once the pointer has been built, which lets the
/// drivers hold a register block in a `const` or `static` at its fixed
/// architectural address. Tests build the same type over host memory.
#[derive(Debug)]
pub struct StaticRef<T> {
    ptr: NonNull<T>,
}

impl<T> StaticRef<T> {
    /// Create a new [`StaticRef`] from a raw pointer
    ///
    /// ## Safety
    ///
    /// - `ptr` must be aligned, non-null, and dereferencable as `T`.
    /// - `*ptr` must be valid for the program duration.
    pub const unsafe fn new(ptr: *const T) -> StaticRef<T> {
        // SAFETY: `ptr` is non-null as promised by the caller.
        StaticRef {
            ptr: NonNull::new_unchecked(ptr.cast_mut()),
        }
    }

    pub fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }
}

impl<T> Clone for StaticRef<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for StaticRef<T> {}

impl<T> Deref for StaticRef<T> {
    type Target = T;
    fn deref(&self) -> &T {
        // SAFETY: `ptr` is aligned and dereferencable for the program duration
        // as promised by the caller of `StaticRef::new`.
        unsafe { self.ptr.as_ref() }
    }
}

// SAFETY: register blocks are only accessed through volatile cells.
unsafe impl<T> Send for StaticRef<T> {}
unsafe impl<T> Sync for StaticRef<T> {}

/// Register blocks backed by leaked host memory, for driver tests here and
/// in dependent crates (`test-util` feature).
#[cfg(any(test, feature = "test-util"))]
pub mod host {
    use super::StaticRef;
    use core::{mem, sync::atomic::AtomicU32};
    use std::{boxed::Box, vec::Vec};

    /// Leaks a zeroed, word-aligned buffer large enough for `T` and returns
    /// both the register view and a raw word view of the same memory.
    pub fn block<T>() -> (StaticRef<T>, &'static [AtomicU32]) {
        let words = mem::size_of::<T>().div_ceil(4);
        let buf: Vec<AtomicU32> = (0..words).map(|_| AtomicU32::new(0)).collect();
        let raw: &'static [AtomicU32] = Box::leak(buf.into_boxed_slice());
        // SAFETY: the buffer is leaked, word aligned and covers `T`.
        let regs = unsafe { StaticRef::new(raw.as_ptr() as *const T) };
        (regs, raw)
    }

    pub fn snapshot(raw: &[AtomicU32]) -> Vec<u32> {
        raw.iter()
            .map(|w| w.load(core::sync::atomic::Ordering::SeqCst))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::host::{block, snapshot};
    use core::sync::atomic::Ordering;

    #[test]
    fn test_host_block_aliases_words() {
        let (regs, raw) = block::<[u32; 3]>();
        assert_eq!(raw.len(), 3);
        assert_eq!(snapshot(raw), [0, 0, 0]);
        raw[1].store(0xabcd, Ordering::SeqCst);
        assert_eq!(regs[1], 0xabcd);
        assert_eq!(regs.as_ptr() as usize, raw.as_ptr() as usize);
    }
}

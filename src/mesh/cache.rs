// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::{
    convert::Infallible,
    sync::{Arc, PoisonError, RwLock},
};

/// State of a structure derived from the face table.
#[derive(Debug)]
pub enum Derived<T> {
    Stale,
    Fresh(Arc<T>),
}

/// A lazily rebuilt, explicitly invalidated derived structure.
///
/// A rebuild runs under the write lock and publishes a complete `Arc`, so a
/// concurrent reader either waits for it or gets the finished value. A
/// failed rebuild leaves the cache `Stale`.
#[derive(Debug)]
pub struct DerivedCache<T> {
    slot: RwLock<Derived<T>>,
}

impl<T> Default for DerivedCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DerivedCache<T> {
    pub fn new() -> Self {
        Self {
            slot: RwLock::new(Derived::Stale),
        }
    }

    /// The current value, without building it.
    pub fn get(&self) -> Option<Arc<T>> {
        match &*self.slot.read().unwrap_or_else(PoisonError::into_inner) {
            Derived::Fresh(value) => Some(Arc::clone(value)),
            Derived::Stale => None,
        }
    }

    pub fn is_fresh(&self) -> bool {
        self.get().is_some()
    }

    pub fn get_or_build(&self, build: impl FnOnce() -> T) -> Arc<T> {
        match self.get_or_try_build(|| Ok::<T, Infallible>(build())) {
            Ok(value) => value,
            Err(never) => match never {},
        }
    }

    pub fn get_or_try_build<E>(&self, build: impl FnOnce() -> Result<T, E>) -> Result<Arc<T>, E> {
        if let Some(value) = self.get() {
            return Ok(value);
        }

        let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        // another reader may have finished the rebuild while we waited
        if let Derived::Fresh(value) = &*slot {
            return Ok(Arc::clone(value));
        }
        let value = Arc::new(build()?);
        *slot = Derived::Fresh(Arc::clone(&value));
        Ok(value)
    }

    pub fn invalidate(&mut self) {
        *self.slot.get_mut().unwrap_or_else(PoisonError::into_inner) = Derived::Stale;
    }
}

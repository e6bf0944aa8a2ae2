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

use std::fmt::Debug;

use num_traits::Float;

/// Floating-point coordinate type used by the geometry and mesh layers.
///
/// Besides the arithmetic provided by [`Float`], a scalar carries the
/// tolerances the crate falls back on when the caller does not pass one.
pub trait Scalar: Float + Debug + Default + Send + Sync + 'static {
    /// Default `eps` for containment queries.
    fn query_tolerance() -> Self;

    /// Squared norm under which a vector is treated as zero when normalizing.
    fn degeneracy_tolerance() -> Self;

    /// Converts an `f64` literal, rounding if the target is narrower.
    fn lit(value: f64) -> Self;

    #[inline(always)]
    fn two() -> Self {
        Self::one() + Self::one()
    }
}

impl Scalar for f64 {
    fn query_tolerance() -> Self {
        1e-10
    }

    fn degeneracy_tolerance() -> Self {
        1e-24
    }

    #[inline(always)]
    fn lit(value: f64) -> Self {
        value
    }
}

impl Scalar for f32 {
    fn query_tolerance() -> Self {
        1e-5
    }

    fn degeneracy_tolerance() -> Self {
        1e-12
    }

    #[inline(always)]
    fn lit(value: f64) -> Self {
        value as f32
    }
}

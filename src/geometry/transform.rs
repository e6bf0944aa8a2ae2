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

use crate::{geometry::point::Point3, numeric::scalar::Scalar};

/// Anything that maps points of 3D space affinely.
///
/// The transform algebra itself lives elsewhere; the mesh only needs to
/// apply one to its vertex positions.
pub trait AffineTransform3<T: Scalar> {
    fn apply(&self, p: &Point3<T>) -> Point3<T>;
}

/// Row-major 3x4 matrix `[R | t]`.
impl<T: Scalar> AffineTransform3<T> for [[T; 4]; 3] {
    fn apply(&self, p: &Point3<T>) -> Point3<T> {
        Point3 {
            coords: std::array::from_fn(|r| {
                self[r][0] * p[0] + self[r][1] * p[1] + self[r][2] * p[2] + self[r][3]
            }),
        }
    }
}

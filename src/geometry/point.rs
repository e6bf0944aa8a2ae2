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

use std::ops::{Add, Index, Sub};

use crate::{geometry::vector::Vector3, numeric::scalar::Scalar};

/// An immutable position in 3D space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point3<T: Scalar> {
    pub coords: [T; 3],
}

impl<T: Scalar> Point3<T> {
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { coords: [x, y, z] }
    }

    pub fn origin() -> Self {
        Self::new(T::zero(), T::zero(), T::zero())
    }

    pub fn from_vals<V: Into<T>>(vals: [V; 3]) -> Self {
        Self {
            coords: vals.map(Into::into),
        }
    }

    #[inline(always)]
    pub fn x(&self) -> T {
        self.coords[0]
    }

    #[inline(always)]
    pub fn y(&self) -> T {
        self.coords[1]
    }

    #[inline(always)]
    pub fn z(&self) -> T {
        self.coords[2]
    }

    pub fn distance_squared_to(&self, other: &Self) -> T {
        self.vector_to(other).norm_squared()
    }

    pub fn distance_to(&self, other: &Self) -> T {
        self.distance_squared_to(other).sqrt()
    }

    /// Vector pointing from `self` to `other`.
    pub fn vector_to(&self, other: &Self) -> Vector3<T> {
        Vector3::new(
            other.coords[0] - self.coords[0],
            other.coords[1] - self.coords[1],
            other.coords[2] - self.coords[2],
        )
    }

    pub fn add_vector(&self, v: &Vector3<T>) -> Self {
        Self::new(
            self.coords[0] + v[0],
            self.coords[1] + v[1],
            self.coords[2] + v[2],
        )
    }

    pub fn midpoint(&self, other: &Self) -> Self {
        let two = T::two();
        Self {
            coords: std::array::from_fn(|i| (self.coords[i] + other.coords[i]) / two),
        }
    }

    pub fn as_vector(&self) -> Vector3<T> {
        Vector3 { coords: self.coords }
    }

    pub fn is_finite(&self) -> bool {
        self.coords.iter().all(|c| c.is_finite())
    }
}

impl<T: Scalar> Index<usize> for Point3<T> {
    type Output = T;
    fn index(&self, i: usize) -> &Self::Output {
        &self.coords[i]
    }
}

impl<T: Scalar> From<[T; 3]> for Point3<T> {
    fn from(coords: [T; 3]) -> Self {
        Point3 { coords }
    }
}

impl<T: Scalar> From<Point3<T>> for [T; 3] {
    fn from(p: Point3<T>) -> Self {
        p.coords
    }
}

impl<T: Scalar> Sub for Point3<T> {
    type Output = Vector3<T>;
    fn sub(self, rhs: Point3<T>) -> Vector3<T> {
        rhs.vector_to(&self)
    }
}

impl<'a, 'b, T: Scalar> Sub<&'b Point3<T>> for &'a Point3<T> {
    type Output = Vector3<T>;
    fn sub(self, rhs: &'b Point3<T>) -> Vector3<T> {
        rhs.vector_to(self)
    }
}

impl<T: Scalar> Add<Vector3<T>> for Point3<T> {
    type Output = Point3<T>;
    fn add(self, rhs: Vector3<T>) -> Point3<T> {
        self.add_vector(&rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_distance() {
        let p1 = Point3::new(0.0, 0.0, 0.0);
        let p2 = Point3::new(1.0, 2.0, 2.0);
        assert_relative_eq!(p1.distance_to(&p2), 3.0);
        assert_relative_eq!(p1.distance_squared_to(&p2), 9.0);
    }

    #[test]
    fn test_sub_gives_vector() {
        let a = Point3::new(1.0, 1.0, 1.0);
        let b = Point3::new(4.0, 5.0, 1.0);
        let v = b - a;
        assert_eq!(v, Vector3::new(3.0, 4.0, 0.0));
        assert_eq!(a + v, b);
    }

    #[test]
    fn test_midpoint() {
        let a = Point3::<f64>::from_vals([0.0, 2.0, -2.0]);
        let b = Point3::from_vals([2.0, 2.0, 2.0]);
        assert_eq!(a.midpoint(&b), Point3::new(1.0, 2.0, 0.0));
    }
}

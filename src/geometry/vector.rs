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

use std::ops::{Add, AddAssign, Index, Mul, Neg, Sub};

use crate::numeric::scalar::Scalar;

/// An immutable displacement in 3D space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector3<T: Scalar> {
    pub coords: [T; 3],
}

impl<T: Scalar> Vector3<T> {
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { coords: [x, y, z] }
    }

    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero(), T::zero())
    }

    pub fn dot(&self, other: &Self) -> T {
        self.coords[0] * other.coords[0]
            + self.coords[1] * other.coords[1]
            + self.coords[2] * other.coords[2]
    }

    pub fn cross(&self, other: &Self) -> Self {
        let [ax, ay, az] = self.coords;
        let [bx, by, bz] = other.coords;
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    pub fn norm_squared(&self) -> T {
        self.dot(self)
    }

    pub fn norm(&self) -> T {
        self.norm_squared().sqrt()
    }

    pub fn scale(&self, k: T) -> Self {
        Self {
            coords: self.coords.map(|c| c * k),
        }
    }

    /// Unit vector in the same direction. A zero vector yields NaN components.
    pub fn normalized(&self) -> Self {
        let n = self.norm();
        Self {
            coords: self.coords.map(|c| c / n),
        }
    }

    /// Like [`normalized`](Self::normalized) but returns `None` for a
    /// (numerically) zero vector.
    pub fn try_normalized(&self) -> Option<Self> {
        if self.norm_squared() <= T::degeneracy_tolerance() {
            return None;
        }
        Some(self.normalized())
    }

    pub fn is_zero(&self) -> bool {
        self.coords.iter().all(|c| c.is_zero())
    }
}

impl<T: Scalar> Index<usize> for Vector3<T> {
    type Output = T;
    fn index(&self, i: usize) -> &Self::Output {
        &self.coords[i]
    }
}

impl<T: Scalar> Add for Vector3<T> {
    type Output = Vector3<T>;
    fn add(self, rhs: Vector3<T>) -> Vector3<T> {
        Self {
            coords: std::array::from_fn(|i| self.coords[i] + rhs.coords[i]),
        }
    }
}

impl<T: Scalar> AddAssign for Vector3<T> {
    fn add_assign(&mut self, rhs: Vector3<T>) {
        for i in 0..3 {
            self.coords[i] = self.coords[i] + rhs.coords[i];
        }
    }
}

impl<T: Scalar> Sub for Vector3<T> {
    type Output = Vector3<T>;
    fn sub(self, rhs: Vector3<T>) -> Vector3<T> {
        Self {
            coords: std::array::from_fn(|i| self.coords[i] - rhs.coords[i]),
        }
    }
}

impl<T: Scalar> Mul<T> for Vector3<T> {
    type Output = Vector3<T>;
    fn mul(self, k: T) -> Vector3<T> {
        self.scale(k)
    }
}

impl<T: Scalar> Neg for Vector3<T> {
    type Output = Vector3<T>;
    fn neg(self) -> Vector3<T> {
        Self {
            coords: self.coords.map(|c| -c),
        }
    }
}

impl<T: Scalar> From<[T; 3]> for Vector3<T> {
    fn from(coords: [T; 3]) -> Self {
        Vector3 { coords }
    }
}

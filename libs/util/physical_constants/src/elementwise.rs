// This file is part of Nitrogen.
//
// Nitrogen is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// Nitrogen is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with Nitrogen.  If not, see <http://www.gnu.org/licenses/>.
/// Something that can be fed through a per-altitude formula: either a single
/// value, giving a single result, or an ordered run of values, giving a run of
/// results of the same length and in the same order.
///
/// Scalars may be `f64`, `&f64`, `f32` or `i32`, widened to `f64` before the
/// formula runs. Sequences are `f64` only: arrays, slices and `Vec`s.
pub trait Elementwise {
    type Output;

    fn map_elementwise<F>(self, f: F) -> Self::Output
    where
        F: Fn(f64) -> f64;
}

impl Elementwise for f64 {
    type Output = f64;

    fn map_elementwise<F>(self, f: F) -> Self::Output
    where
        F: Fn(f64) -> f64,
    {
        f(self)
    }
}

impl Elementwise for &f64 {
    type Output = f64;

    fn map_elementwise<F>(self, f: F) -> Self::Output
    where
        F: Fn(f64) -> f64,
    {
        f(*self)
    }
}

impl Elementwise for f32 {
    type Output = f64;

    fn map_elementwise<F>(self, f: F) -> Self::Output
    where
        F: Fn(f64) -> f64,
    {
        f(f64::from(self))
    }
}

impl Elementwise for i32 {
    type Output = f64;

    fn map_elementwise<F>(self, f: F) -> Self::Output
    where
        F: Fn(f64) -> f64,
    {
        f(f64::from(self))
    }
}

impl<const N: usize> Elementwise for [f64; N] {
    type Output = [f64; N];

    fn map_elementwise<F>(self, f: F) -> Self::Output
    where
        F: Fn(f64) -> f64,
    {
        self.map(f)
    }
}

impl<const N: usize> Elementwise for &[f64; N] {
    type Output = [f64; N];

    fn map_elementwise<F>(self, f: F) -> Self::Output
    where
        F: Fn(f64) -> f64,
    {
        (*self).map(f)
    }
}

impl Elementwise for &[f64] {
    type Output = Vec<f64>;

    fn map_elementwise<F>(self, f: F) -> Self::Output
    where
        F: Fn(f64) -> f64,
    {
        self.iter().map(|&v| f(v)).collect()
    }
}

impl Elementwise for Vec<f64> {
    type Output = Vec<f64>;

    fn map_elementwise<F>(self, f: F) -> Self::Output
    where
        F: Fn(f64) -> f64,
    {
        self.into_iter().map(f).collect()
    }
}

impl Elementwise for &Vec<f64> {
    type Output = Vec<f64>;

    fn map_elementwise<F>(self, f: F) -> Self::Output
    where
        F: Fn(f64) -> f64,
    {
        self.as_slice().map_elementwise(f)
    }
}

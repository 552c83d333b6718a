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
use crate::{LengthUnit, Scalar, TimeUnit};
use ordered_float::OrderedFloat;
use std::{fmt, marker::PhantomData, ops::Mul};

#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct Velocity<L: LengthUnit, T: TimeUnit> {
    v: OrderedFloat<f64>,
    units: PhantomData<(L, T)>,
}
quantity!(Velocity<L: LengthUnit, T: TimeUnit>);

impl<L: LengthUnit, T: TimeUnit> fmt::Display for Velocity<L, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.v.0, f)?;
        write!(f, "{}/{}", L::SHORT_NAME, T::SHORT_NAME)
    }
}

// Applied left to right: m/s to knots is exactly `v / 1852 * 3600`.
impl<L, T, LO, TO> From<&Velocity<LO, TO>> for Velocity<L, T>
where
    L: LengthUnit,
    T: TimeUnit,
    LO: LengthUnit,
    TO: TimeUnit,
{
    fn from(other: &Velocity<LO, TO>) -> Self {
        Self::from_value(
            other.f64() * LO::SI_IN_UNIT / L::SI_IN_UNIT * T::SI_IN_UNIT / TO::SI_IN_UNIT,
        )
    }
}

/// Scales by a Mach number or other ratio.
impl<L: LengthUnit, T: TimeUnit> Mul<Scalar> for Velocity<L, T> {
    type Output = Self;

    fn mul(self, s: Scalar) -> Self {
        Self::from_value(self.f64() * s.f64())
    }
}

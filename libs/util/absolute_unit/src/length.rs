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
use crate::LengthUnit;
use ordered_float::OrderedFloat;
use std::{fmt, marker::PhantomData};

#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct Length<L: LengthUnit> {
    v: OrderedFloat<f64>,
    units: PhantomData<L>,
}
quantity!(Length<L: LengthUnit>);

impl<L: LengthUnit> fmt::Display for Length<L> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.v.0, f)?;
        f.write_str(L::SUFFIX)
    }
}

// Multiply before dividing: feet to meters is exactly `ft * 0.3048` and
// meters to feet exactly `m / 0.3048`.
impl<L: LengthUnit, LO: LengthUnit> From<&Length<LO>> for Length<L> {
    fn from(other: &Length<LO>) -> Self {
        Self::from_value(other.f64() * LO::SI_IN_UNIT / L::SI_IN_UNIT)
    }
}

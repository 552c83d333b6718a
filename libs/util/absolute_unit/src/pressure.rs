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
use crate::{PressureUnit, Scalar};
use ordered_float::OrderedFloat;
use std::{fmt, marker::PhantomData, ops::Div};

#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct Pressure<P: PressureUnit> {
    v: OrderedFloat<f64>,
    units: PhantomData<P>,
}
quantity!(Pressure<P: PressureUnit>);

impl<P: PressureUnit> fmt::Display for Pressure<P> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.v.0, f)?;
        f.write_str(P::SUFFIX)
    }
}

impl<P: PressureUnit, PO: PressureUnit> From<&Pressure<PO>> for Pressure<P> {
    fn from(other: &Pressure<PO>) -> Self {
        Self::from_value(other.f64() * PO::SI_IN_UNIT / P::SI_IN_UNIT)
    }
}

/// Pressure ratio, e.g. δ = p / p0.
impl<P: PressureUnit, PO: PressureUnit> Div<Pressure<PO>> for Pressure<P> {
    type Output = Scalar;

    fn div(self, other: Pressure<PO>) -> Scalar {
        Scalar::from(self.f64() / Pressure::<P>::from(&other).f64())
    }
}

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
use crate::{LengthUnit, MassUnit, Scalar};
use ordered_float::OrderedFloat;
use std::{fmt, marker::PhantomData, ops::Div};

/// Mass per cubed length.
#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct Density<M: MassUnit, L: LengthUnit> {
    v: OrderedFloat<f64>,
    units: PhantomData<(M, L)>,
}
quantity!(Density<M: MassUnit, L: LengthUnit>);

impl<M: MassUnit, L: LengthUnit> fmt::Display for Density<M, L> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.v.0, f)?;
        write!(f, "{}/{}^3", M::SHORT_NAME, L::SHORT_NAME)
    }
}

impl<M, L, MO, LO> From<&Density<MO, LO>> for Density<M, L>
where
    M: MassUnit,
    L: LengthUnit,
    MO: MassUnit,
    LO: LengthUnit,
{
    fn from(other: &Density<MO, LO>) -> Self {
        let per_length = L::SI_IN_UNIT / LO::SI_IN_UNIT;
        Self::from_value(other.f64() * MO::SI_IN_UNIT / M::SI_IN_UNIT * per_length.powi(3))
    }
}

/// Density ratio, e.g. σ = ρ / ρ0.
impl<M, L, MO, LO> Div<Density<MO, LO>> for Density<M, L>
where
    M: MassUnit,
    L: LengthUnit,
    MO: MassUnit,
    LO: LengthUnit,
{
    type Output = Scalar;

    fn div(self, other: Density<MO, LO>) -> Scalar {
        Scalar::from(self.f64() / Density::<M, L>::from(&other).f64())
    }
}

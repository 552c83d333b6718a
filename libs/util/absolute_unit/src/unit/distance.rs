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

unit!(Meters: LengthUnit, "m", "m", 1.);
unit!(
    /// International foot.
    Feet: LengthUnit, "ft", "'", 0.304_8
);
unit!(NauticalMiles: LengthUnit, "nm", "nm", 1_852.);

#[macro_export]
macro_rules! meters {
    ($num:expr) => {
        $crate::Length::<$crate::Meters>::from(&$num)
    };
}

#[macro_export]
macro_rules! feet {
    ($num:expr) => {
        $crate::Length::<$crate::Feet>::from(&$num)
    };
}

#[macro_export]
macro_rules! meters_per_second {
    ($num:expr) => {
        $crate::Velocity::<$crate::Meters, $crate::Seconds>::from(&$num)
    };
}

#[macro_export]
macro_rules! knots {
    ($num:expr) => {
        $crate::Velocity::<$crate::NauticalMiles, $crate::Hours>::from(&$num)
    };
}

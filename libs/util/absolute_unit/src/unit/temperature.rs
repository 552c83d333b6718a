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
use crate::{TemperatureUnit, Unit};

#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct Kelvin;
impl Unit for Kelvin {
    const SHORT_NAME: &'static str = "K";
    const SUFFIX: &'static str = "K";
    const SI_IN_UNIT: f64 = 1.;
}
impl TemperatureUnit for Kelvin {
    const OFFSET_K: f64 = 0.;
}

#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct Celsius;
impl Unit for Celsius {
    const SHORT_NAME: &'static str = "°C";
    const SUFFIX: &'static str = "°C";
    const SI_IN_UNIT: f64 = 1.;
}
impl TemperatureUnit for Celsius {
    const OFFSET_K: f64 = 273.15;
}

#[macro_export]
macro_rules! kelvin {
    ($num:expr) => {
        $crate::Temperature::<$crate::Kelvin>::from(&$num)
    };
}

#[macro_export]
macro_rules! celsius {
    ($num:expr) => {
        $crate::Temperature::<$crate::Celsius>::from(&$num)
    };
}

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
use crate::{Scalar, TemperatureUnit};
use ordered_float::OrderedFloat;
use std::{fmt, marker::PhantomData, ops::Div};

/// Held in kelvin whatever the display unit, so offset scales convert cleanly.
#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct Temperature<U: TemperatureUnit> {
    kelvin: OrderedFloat<f64>,
    unit: PhantomData<U>,
}

impl<U: TemperatureUnit> Temperature<U> {
    fn from_degrees(degrees: f64) -> Self {
        Self {
            kelvin: OrderedFloat(degrees * U::SI_IN_UNIT + U::OFFSET_K),
            unit: PhantomData,
        }
    }

    /// Degrees in `U`.
    pub fn f64(self) -> f64 {
        (self.kelvin.0 - U::OFFSET_K) / U::SI_IN_UNIT
    }
}

macro_rules! temperature_from_number {
    ($Num:ty) => {
        impl<U: TemperatureUnit> From<$Num> for Temperature<U> {
            fn from(v: $Num) -> Self {
                Self::from_degrees(f64::from(v))
            }
        }

        impl<U: TemperatureUnit> From<&$Num> for Temperature<U> {
            fn from(v: &$Num) -> Self {
                Self::from_degrees(f64::from(*v))
            }
        }
    };
}
temperature_from_number!(f64);
temperature_from_number!(i32);

impl<U: TemperatureUnit, UO: TemperatureUnit> From<&Temperature<UO>> for Temperature<U> {
    fn from(other: &Temperature<UO>) -> Self {
        Self {
            kelvin: other.kelvin,
            unit: PhantomData,
        }
    }
}

impl<U: TemperatureUnit> fmt::Display for Temperature<U> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.f64(), f)?;
        f.write_str(U::SUFFIX)
    }
}

/// Ratio of absolute temperatures, e.g. θ = T / T0.
impl<U: TemperatureUnit, UO: TemperatureUnit> Div<Temperature<UO>> for Temperature<U> {
    type Output = Scalar;

    fn div(self, other: Temperature<UO>) -> Scalar {
        Scalar::from(self.kelvin.0 / other.kelvin.0)
    }
}

#[cfg(test)]
mod test {
    use crate::{celsius, kelvin};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_celsius_to_kelvin() {
        let c = celsius!(15);
        println!("{} = {}", c, kelvin!(c));
        assert_abs_diff_eq!(kelvin!(c).f64(), 288.15, epsilon = 1e-9);
        assert_eq!(celsius!(kelvin!(216.65)).f64(), 216.65 - 273.15);
        assert_eq!(format!("{:0.2}", celsius!(kelvin!(216.65))), "-56.50°C");
    }

    #[test]
    fn test_theta_is_absolute() {
        let theta = kelvin!(216.65) / celsius!(15);
        assert_abs_diff_eq!(theta.f64(), 216.65 / 288.15, epsilon = 1e-12);
        assert_abs_diff_eq!((celsius!(0) / kelvin!(273.15)).f64(), 1., epsilon = 1e-12);
    }
}

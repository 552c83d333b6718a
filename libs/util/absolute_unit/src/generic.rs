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

// A quantity holds its value in its own units as `v`, next to a zero sized
// `units` marker carrying every unit parameter.
macro_rules! quantity {
    ($Q:ident < $($P:ident : $Bound:path),+ >) => {
        impl<$($P: $Bound),+> $Q<$($P),+> {
            pub(crate) fn from_value(v: f64) -> Self {
                Self {
                    v: $crate::ordered_float::OrderedFloat(v),
                    units: ::std::marker::PhantomData,
                }
            }

            pub fn f64(self) -> f64 {
                self.v.into_inner()
            }
        }

        impl<$($P: $Bound),+> From<f64> for $Q<$($P),+> {
            fn from(v: f64) -> Self {
                Self::from_value(v)
            }
        }

        impl<$($P: $Bound),+> From<&f64> for $Q<$($P),+> {
            fn from(v: &f64) -> Self {
                Self::from_value(*v)
            }
        }

        impl<$($P: $Bound),+> From<i32> for $Q<$($P),+> {
            fn from(v: i32) -> Self {
                Self::from_value(f64::from(v))
            }
        }

        impl<$($P: $Bound),+> From<&i32> for $Q<$($P),+> {
            fn from(v: &i32) -> Self {
                Self::from_value(f64::from(*v))
            }
        }

        impl<$($P: $Bound),+> From<$Q<$($P),+>> for f64 {
            fn from(q: $Q<$($P),+>) -> f64 {
                q.f64()
            }
        }

        impl<$($P: $Bound),+> $crate::approx::AbsDiffEq for $Q<$($P),+> {
            type Epsilon = f64;

            fn default_epsilon() -> f64 {
                <f64 as $crate::approx::AbsDiffEq>::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
                $crate::approx::AbsDiffEq::abs_diff_eq(&self.v.0, &other.v.0, epsilon)
            }
        }
    };
}

// A unit is a marker type with display names and its size in SI base units.
macro_rules! unit {
    ($(#[$meta:meta])* $Name:ident: $Dimension:ident, $short:expr, $suffix:expr, $si:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
        pub struct $Name;

        impl $crate::Unit for $Name {
            const SHORT_NAME: &'static str = $short;
            const SUFFIX: &'static str = $suffix;
            const SI_IN_UNIT: f64 = $si;
        }

        impl $crate::$Dimension for $Name {}
    };
}

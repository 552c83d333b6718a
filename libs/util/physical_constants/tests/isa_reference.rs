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
use approx::assert_abs_diff_eq;
use physical_constants::{
    a_isa, ft_m, kelvin_to_celsius, kts_ms, m_ft, p_isa, rho_isa, t_isa, AIR_GAS_CONSTANT,
    SEA_LEVEL_TEMPERATURE_K,
};

const ALTITUDES: [f64; 9] = [
    0., 1_000., 5_500., 10_999., 11_000., 11_001., 15_000., 18_288., 20_000.,
];

#[test]
fn flight_level_600() {
    let h = 60_000. * 0.304_8;
    assert_eq!(h, 18_288.);

    let pressure_hpa = p_isa(h) * 1e-2;
    let density = rho_isa(h);
    let temperature_c = t_isa(h) - 273.15;
    let tas_kts = kts_ms(a_isa(h));

    assert_abs_diff_eq!(pressure_hpa, 71.712, epsilon = 0.001);
    assert_abs_diff_eq!(density, 0.115_32, epsilon = 0.000_01);
    assert_abs_diff_eq!(temperature_c, -56.5, epsilon = 1e-9);
    assert_abs_diff_eq!(tas_kts, 573.556, epsilon = 0.001);
    assert_eq!(kelvin_to_celsius(t_isa(h)), temperature_c);
}

#[test]
fn sequence_matches_scalar_calls() {
    let temperatures = t_isa(&ALTITUDES);
    let pressures = p_isa(ALTITUDES.to_vec());
    let densities = rho_isa(&ALTITUDES[..]);
    let sounds = a_isa(ALTITUDES);
    let feet = ft_m(&ALTITUDES.to_vec());
    for (i, &h) in ALTITUDES.iter().enumerate() {
        assert_eq!(temperatures[i], t_isa(h));
        assert_eq!(pressures[i], p_isa(h));
        assert_eq!(densities[i], rho_isa(h));
        assert_eq!(sounds[i], a_isa(h));
        assert_eq!(feet[i], ft_m(h));
    }
    assert_eq!(pressures.len(), ALTITUDES.len());
    assert_eq!(kts_ms(sounds.to_vec()), sounds.map(kts_ms::<f64>));
}

#[test]
fn temperature_profile_shape() {
    for h in ALTITUDES {
        if h <= 11_000. {
            assert_eq!(t_isa(h), SEA_LEVEL_TEMPERATURE_K - 6.5 * h / 1000.);
        } else {
            assert_eq!(t_isa(h), 216.65);
        }
    }
}

#[test]
fn density_composition() {
    for h in ALTITUDES {
        assert_eq!(rho_isa(h), p_isa(h) / (AIR_GAS_CONSTANT * t_isa(h)));
    }
}

#[test]
fn speed_of_sound_reference() {
    assert_abs_diff_eq!(a_isa(0.), 340.29, epsilon = 0.1);
    assert_abs_diff_eq!(a_isa(11_000.), 295.063, epsilon = 0.001);
    assert_abs_diff_eq!(a_isa(11_000.), a_isa(20_000.), epsilon = 1e-9);
}

#[test]
fn feet_round_trip() {
    assert_eq!(ft_m(0.304_8), 1.0);
    assert_eq!(kts_ms(1_852. / 3_600.), 1.0);
    assert_abs_diff_eq!(ft_m(m_ft(60_000.)), 60_000., epsilon = 1e-9);
}

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
use anyhow::{ensure, Context, Result};
use log::info;
use physical_constants::{a_isa, ft_m, kts_ms, p_isa, rho_isa, t_isa};
use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::PathBuf,
    time::Instant,
};
use structopt::StructOpt;

/// Tabulate the standard atmosphere over a range of altitudes
#[derive(Debug, StructOpt)]
#[structopt(name = "dump-isa-tables")]
struct Opt {
    /// Lowest altitude, in meters
    #[structopt(long, default_value = "0")]
    start: f64,

    /// Highest altitude, in meters
    #[structopt(long, default_value = "20000")]
    end: f64,

    /// Distance between rows, in meters
    #[structopt(long, default_value = "1000")]
    step: f64,

    /// Write the table here instead of to stdout
    #[structopt(short, long, parse(from_os_str))]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let opt = Opt::from_args();

    let altitudes = altitude_range(opt.start, opt.end, opt.step)?;

    let write_start = Instant::now();
    if let Some(path) = &opt.output {
        let fp = File::create(path)
            .with_context(|| format!("unable to create table at {}", path.display()))?;
        let mut out = BufWriter::new(fp);
        write_table(&mut out, &altitudes)?;
        out.flush()?;
    } else {
        let stdout = io::stdout();
        write_table(&mut stdout.lock(), &altitudes)?;
    }
    info!("wrote {} rows in {:?}", altitudes.len(), write_start.elapsed());

    Ok(())
}

const MAX_ROWS: usize = 1_000_000;

// Slack on the step count, so an `end` that lands on a step up to rounding is kept.
const STEP_TOLERANCE: f64 = 1e-9;

// Inclusive of `end` when it falls on a step.
fn altitude_range(start: f64, end: f64, step: f64) -> Result<Vec<f64>> {
    ensure!(start.is_finite() && end.is_finite(), "altitude range must be finite");
    ensure!(step > 0., "step must be positive, not {}", step);
    ensure!(end >= start, "end {} is below start {}", end, start);
    let steps = ((end - start) / step + STEP_TOLERANCE).floor();
    ensure!(
        steps < MAX_ROWS as f64,
        "{} to {} by {} is more than {} rows",
        start,
        end,
        step,
        MAX_ROWS
    );
    Ok((0..=steps as usize).map(|i| start + i as f64 * step).collect())
}

const HEADER: &str = "altitude_m,altitude_ft,temperature_k,pressure_pa,density_kg_m3,speed_of_sound_m_s,speed_of_sound_kt";

fn write_table<W: Write>(out: &mut W, altitudes: &[f64]) -> Result<()> {
    let feet = ft_m(altitudes);
    let temperatures = t_isa(altitudes);
    let pressures = p_isa(altitudes);
    let densities = rho_isa(altitudes);
    let sounds = a_isa(altitudes);
    let sounds_kt = kts_ms(&sounds);

    writeln!(out, "{}", HEADER)?;
    for i in 0..altitudes.len() {
        writeln!(
            out,
            "{:.1},{:.1},{:.3},{:.2},{:.6},{:.3},{:.3}",
            altitudes[i],
            feet[i],
            temperatures[i],
            pressures[i],
            densities[i],
            sounds[i],
            sounds_kt[i]
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_altitude_range() -> Result<()> {
        assert_eq!(altitude_range(0., 3_000., 1_000.)?, vec![0., 1_000., 2_000., 3_000.]);
        assert_eq!(altitude_range(0., 2_500., 1_000.)?, vec![0., 1_000., 2_000.]);
        assert_eq!(altitude_range(500., 500., 1.)?, vec![500.]);
        Ok(())
    }

    #[test]
    fn test_fractional_step_keeps_end() -> Result<()> {
        // 0.3 / 0.1 is 2.9999999999999996 in f64.
        let range = altitude_range(0., 0.3, 0.1)?;
        assert_eq!(range.len(), 4);
        assert_abs_diff_eq!(range[3], 0.3, epsilon = 1e-12);
        assert_eq!(altitude_range(0., 0.35, 0.1)?.len(), 4);
        Ok(())
    }

    #[test]
    fn test_row_limit() {
        assert!(altitude_range(0., 1_000., 1e-12).is_err());
        assert!(altitude_range(-f64::MAX, f64::MAX, 1.).is_err());
        assert!(altitude_range(0., 999_999., 1.).is_ok());
        assert!(altitude_range(0., 1_000_000., 1.).is_err());
    }

    #[test]
    fn test_bad_ranges() {
        assert!(altitude_range(0., 1_000., 0.).is_err());
        assert!(altitude_range(0., 1_000., -10.).is_err());
        assert!(altitude_range(1_000., 0., 10.).is_err());
        assert!(altitude_range(0., f64::INFINITY, 10.).is_err());
    }

    #[test]
    fn test_write_table() -> Result<()> {
        let mut out = Vec::new();
        write_table(&mut out, &altitude_range(0., 20_000., 1_000.)?)?;
        let table = String::from_utf8(out)?;
        let lines = table.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 22);
        assert_eq!(lines[0], HEADER);
        assert_eq!(lines[1], "0.0,0.0,288.150,101325.00,1.225055,340.286,661.464");
        assert!(lines[12].starts_with("11000.0,36089.2,216.650,"));
        assert_eq!(lines[21].split(',').count(), 7);
        Ok(())
    }
}

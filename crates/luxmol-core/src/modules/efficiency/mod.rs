//! The photon-yield pipeline.
//!
//! One calculator consolidates what the reference workflow repeated per
//! batch/single-file/diagnostic variant: resample both curves onto a
//! common grid spanning the source's native domain, normalize the source
//! to unit radiant power, convert to photometric flux density, then to
//! molar photon energy, and integrate over the fixed PAR band.

mod parser;

pub use parser::parse_curve_table;

use crate::common::constants::{
    MAX_LUMINOUS_EFFICACY_LM_PER_W, PAR_BAND_MAX_NM, PAR_BAND_MIN_NM,
    molar_photon_energy_j_per_mol,
};
use crate::domain::{
    Curve, DegenerateCurveError, GridResolution, PhotonYield, SampledSpectra, YieldError,
};
use crate::numerics::{CubicSpline, integrate_trapezoid, linear_grid};
use std::fs;
use std::path::Path;

/// Read-only context for yield computations: the reference luminous-efficacy
/// curve and the sampling resolution, fixed at construction.
#[derive(Debug, Clone)]
pub struct SpectralEfficiencyCalculator {
    reference: Curve,
    resolution: GridResolution,
}

impl SpectralEfficiencyCalculator {
    pub fn new(reference: Curve) -> Self {
        Self::with_resolution(reference, GridResolution::default())
    }

    pub fn with_resolution(reference: Curve, resolution: GridResolution) -> Self {
        Self {
            reference,
            resolution,
        }
    }

    pub fn reference(&self) -> &Curve {
        &self.reference
    }

    pub fn resolution(&self) -> GridResolution {
        self.resolution
    }

    /// Photometric efficacy and PAR-band photon yield for one source
    /// spectrum.
    pub fn compute_yield(&self, source: &Curve) -> Result<PhotonYield, YieldError> {
        self.compute_yield_with_diagnostics(source)
            .map(|(result, _)| result)
    }

    /// Same computation, additionally returning the curves sampled on the
    /// common grid for dumps and invariant checks. Step order is fixed for
    /// numerical reproducibility.
    pub fn compute_yield_with_diagnostics(
        &self,
        source: &Curve,
    ) -> Result<(PhotonYield, SampledSpectra), YieldError> {
        let reference_spline = CubicSpline::fit(&self.reference)?;
        let source_spline = CubicSpline::fit(source)?;

        // Common grid over the source's native domain; the reference is
        // evaluated on it and rejects any part it does not cover.
        let grid_nm = linear_grid(
            source.min_wavelength_nm(),
            source.max_wavelength_nm(),
            self.resolution.points(),
        );
        let luminous_efficacy = reference_spline.evaluate_many(&grid_nm)?;
        let spd = source_spline.evaluate_many(&grid_nm)?;

        let spectral_power = integrate_trapezoid(&grid_nm, &spd)?;
        if !spectral_power.is_finite() || spectral_power <= 0.0 {
            return Err(DegenerateCurveError::ZeroSpectralPower {
                integral: spectral_power,
            }
            .into());
        }
        let spd_normalized: Vec<f64> = spd.iter().map(|value| value / spectral_power).collect();

        // Luminous flux per unit radiant power, per wavelength.
        let luminous_flux_density: Vec<f64> = spd_normalized
            .iter()
            .zip(&luminous_efficacy)
            .map(|(power, efficacy)| power * efficacy * MAX_LUMINOUS_EFFICACY_LM_PER_W)
            .collect();
        let lm_per_watt = integrate_trapezoid(&grid_nm, &luminous_flux_density)?;

        // (lm*s)/mol as a function of wavelength.
        let lumen_seconds_per_mol: Vec<f64> = grid_nm
            .iter()
            .zip(&luminous_flux_density)
            .map(|(&wavelength_nm, &flux)| molar_photon_energy_j_per_mol(wavelength_nm) * flux)
            .collect();

        let mol_curve = Curve::from_samples(grid_nm.clone(), lumen_seconds_per_mol)?;
        let mol_spline = CubicSpline::fit(&mol_curve)?;
        let par_grid_nm = linear_grid(PAR_BAND_MIN_NM, PAR_BAND_MAX_NM, self.resolution.points());
        let par_samples = mol_spline.evaluate_many(&par_grid_nm)?;
        let par_integral = integrate_trapezoid(&par_grid_nm, &par_samples)?;
        if !par_integral.is_finite() || par_integral <= 0.0 {
            return Err(DegenerateCurveError::ZeroParIntegral {
                integral: par_integral,
            }
            .into());
        }

        let result = PhotonYield {
            lm_per_watt,
            mol_per_lumen_second: 1.0 / par_integral,
        };
        let spectra = SampledSpectra {
            grid_nm,
            luminous_efficacy,
            spd,
            spd_normalized,
            luminous_flux_density,
        };
        Ok((result, spectra))
    }
}

/// Load and parse a source or reference table from disk.
pub fn load_curve_file(path: &Path) -> Result<Curve, YieldError> {
    let source = fs::read_to_string(path).map_err(|source| YieldError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_curve_table(&source).map_err(YieldError::from)
}

pub mod errors;

pub use errors::{DegenerateCurveError, DomainError, MalformedCurveError, YieldError};

use serde::{Deserialize, Serialize};

/// A cubic spline needs at least four knots.
pub const MIN_CURVE_SAMPLES: usize = 4;

/// An immutable sampled spectral curve: strictly increasing wavelengths in
/// nanometers with one relative-intensity value per wavelength. Derived
/// curves (resampled, normalized, unit-converted) are new values.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    wavelengths_nm: Vec<f64>,
    intensities: Vec<f64>,
}

impl Curve {
    pub fn from_samples(
        wavelengths_nm: Vec<f64>,
        intensities: Vec<f64>,
    ) -> Result<Self, MalformedCurveError> {
        if wavelengths_nm.len() != intensities.len() {
            return Err(MalformedCurveError::LengthMismatch {
                wavelengths: wavelengths_nm.len(),
                intensities: intensities.len(),
            });
        }
        if wavelengths_nm.len() < MIN_CURVE_SAMPLES {
            return Err(MalformedCurveError::TooFewSamples {
                minimum: MIN_CURVE_SAMPLES,
                actual: wavelengths_nm.len(),
            });
        }

        for (index, wavelength) in wavelengths_nm.iter().copied().enumerate() {
            if !wavelength.is_finite() || wavelength <= 0.0 {
                return Err(MalformedCurveError::NonPositiveWavelength {
                    index,
                    value: wavelength,
                });
            }
            if index > 0 {
                let previous = wavelengths_nm[index - 1];
                if wavelength <= previous {
                    return Err(MalformedCurveError::NonIncreasingWavelength {
                        index,
                        previous,
                        current: wavelength,
                    });
                }
            }
        }

        for (index, intensity) in intensities.iter().copied().enumerate() {
            if !intensity.is_finite() {
                return Err(MalformedCurveError::NonFiniteIntensity {
                    index,
                    value: intensity,
                });
            }
        }

        Ok(Self {
            wavelengths_nm,
            intensities,
        })
    }

    pub fn wavelengths_nm(&self) -> &[f64] {
        &self.wavelengths_nm
    }

    pub fn intensities(&self) -> &[f64] {
        &self.intensities
    }

    pub fn len(&self) -> usize {
        self.wavelengths_nm.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wavelengths_nm.is_empty()
    }

    pub fn min_wavelength_nm(&self) -> f64 {
        self.wavelengths_nm[0]
    }

    pub fn max_wavelength_nm(&self) -> f64 {
        self.wavelengths_nm[self.wavelengths_nm.len() - 1]
    }
}

/// Sample count for the common wavelength grid and the PAR-band resample.
/// Higher counts reduce trapezoidal truncation error near curvature peaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridResolution(usize);

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("grid resolution must be at least {minimum} points, got {points}")]
pub struct InvalidResolutionError {
    pub points: usize,
    pub minimum: usize,
}

impl GridResolution {
    /// The resampled PAR curve is re-fit with a cubic spline, so the grid
    /// itself must satisfy the spline's knot floor.
    pub const MIN_POINTS: usize = MIN_CURVE_SAMPLES;
    pub const DEFAULT_POINTS: usize = 1000;

    pub fn new(points: usize) -> Result<Self, InvalidResolutionError> {
        if points < Self::MIN_POINTS {
            return Err(InvalidResolutionError {
                points,
                minimum: Self::MIN_POINTS,
            });
        }
        Ok(Self(points))
    }

    pub const fn points(self) -> usize {
        self.0
    }
}

impl Default for GridResolution {
    fn default() -> Self {
        Self(Self::DEFAULT_POINTS)
    }
}

/// The two output quantities of one source-spectrum computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhotonYield {
    /// Photometric efficacy of the source spectrum, lm per optical watt.
    #[serde(rename = "lmPerWatt")]
    pub lm_per_watt: f64,
    /// Moles of PAR-band photons delivered per lumen-second.
    #[serde(rename = "molPerLumenSecond")]
    pub mol_per_lumen_second: f64,
}

impl PhotonYield {
    pub fn micromol_per_lumen_second(&self) -> f64 {
        self.mol_per_lumen_second * 1.0e6
    }
}

/// Diagnostic curves sampled on the common grid during one computation,
/// exposed for curve dumps and invariant checks.
#[derive(Debug, Clone, PartialEq)]
pub struct SampledSpectra {
    pub grid_nm: Vec<f64>,
    pub luminous_efficacy: Vec<f64>,
    pub spd: Vec<f64>,
    pub spd_normalized: Vec<f64>,
    pub luminous_flux_density: Vec<f64>,
}

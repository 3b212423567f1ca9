//! Not-a-knot cubic spline interpolation.
//!
//! Fitting solves for the second derivatives (moments) at the knots: the
//! not-a-knot conditions eliminate the boundary moments symbolically and the
//! remaining interior system is tridiagonal, solved with the Thomas
//! algorithm. Evaluation uses the moment form with binary-search
//! bracketing. The fitted interpolant is the unique C2 cubic through the
//! samples with a continuous third derivative at the second and
//! second-to-last knots, so it reproduces any single cubic polynomial
//! exactly.

use crate::domain::{Curve, DomainError, MalformedCurveError};

#[derive(Debug, Clone, PartialEq)]
pub struct CubicSpline {
    knots_nm: Vec<f64>,
    values: Vec<f64>,
    moments: Vec<f64>,
}

impl CubicSpline {
    pub fn fit(curve: &Curve) -> Result<Self, MalformedCurveError> {
        let x = curve.wavelengths_nm();
        let y = curve.intensities();
        let moments = solve_not_a_knot_moments(x, y)?;
        Ok(Self {
            knots_nm: x.to_vec(),
            values: y.to_vec(),
            moments,
        })
    }

    pub fn min_nm(&self) -> f64 {
        self.knots_nm[0]
    }

    pub fn max_nm(&self) -> f64 {
        self.knots_nm[self.knots_nm.len() - 1]
    }

    /// Interpolated intensity at `wavelength_nm`. Queries outside the
    /// fitted knot range (including NaN) are rejected; endpoints are
    /// in-domain.
    pub fn evaluate(&self, wavelength_nm: f64) -> Result<f64, DomainError> {
        let min_nm = self.min_nm();
        let max_nm = self.max_nm();
        if !(wavelength_nm >= min_nm && wavelength_nm <= max_nm) {
            return Err(DomainError {
                query_nm: wavelength_nm,
                min_nm,
                max_nm,
            });
        }

        let knot_count = self.knots_nm.len();
        let hi = match self.knots_nm.partition_point(|&knot| knot < wavelength_nm) {
            index if index >= knot_count => knot_count - 1,
            0 => 1,
            index => index,
        };
        let lo = hi - 1;

        let h = self.knots_nm[hi] - self.knots_nm[lo];
        let a = (self.knots_nm[hi] - wavelength_nm) / h;
        let b = (wavelength_nm - self.knots_nm[lo]) / h;

        Ok(a * self.values[lo]
            + b * self.values[hi]
            + (h * h / 6.0)
                * ((a * a - 1.0) * a * self.moments[lo] + (b * b - 1.0) * b * self.moments[hi]))
    }

    pub fn evaluate_many(&self, wavelengths_nm: &[f64]) -> Result<Vec<f64>, DomainError> {
        wavelengths_nm
            .iter()
            .map(|&wavelength| self.evaluate(wavelength))
            .collect()
    }
}

/// Second derivatives at the knots for the not-a-knot cubic spline.
///
/// Interior continuity gives, for i in 1..=n-2:
///   h[i-1]*M[i-1] + 2*(h[i-1]+h[i])*M[i] + h[i]*M[i+1] = r[i]
/// with r[i] = 6*((y[i+1]-y[i])/h[i] - (y[i]-y[i-1])/h[i-1]). The
/// not-a-knot conditions express M[0] and M[n-1] through their neighbors;
/// folding them into the first and last interior rows leaves a tridiagonal
/// system in M[1..=n-2].
fn solve_not_a_knot_moments(x: &[f64], y: &[f64]) -> Result<Vec<f64>, MalformedCurveError> {
    let n = x.len();
    let h: Vec<f64> = x.windows(2).map(|window| window[1] - window[0]).collect();
    let unknowns = n - 2;

    let mut sub = vec![0.0; unknowns];
    let mut diag = vec![0.0; unknowns];
    let mut sup = vec![0.0; unknowns];
    let mut rhs = vec![0.0; unknowns];
    for k in 0..unknowns {
        let i = k + 1;
        sub[k] = h[i - 1];
        diag[k] = 2.0 * (h[i - 1] + h[i]);
        sup[k] = h[i];
        rhs[k] = 6.0 * ((y[i + 1] - y[i]) / h[i] - (y[i] - y[i - 1]) / h[i - 1]);
    }

    // Left boundary: M[0] = ((h0+h1)*M[1] - h0*M[2]) / h1 folded into row 1.
    sub[0] = 0.0;
    diag[0] = (h[0] + h[1]) * (h[0] + 2.0 * h[1]) / h[1];
    sup[0] = (h[1] * h[1] - h[0] * h[0]) / h[1];
    // Right boundary, mirrored into the last interior row.
    let h_last = h[n - 2];
    let h_prev = h[n - 3];
    sub[unknowns - 1] = (h_prev * h_prev - h_last * h_last) / h_prev;
    diag[unknowns - 1] = (h_last + h_prev) * (h_last + 2.0 * h_prev) / h_prev;
    sup[unknowns - 1] = 0.0;

    // Thomas forward sweep.
    for k in 1..unknowns {
        let pivot = diag[k - 1];
        if pivot == 0.0 || !pivot.is_finite() {
            return Err(MalformedCurveError::SingularSplineSystem);
        }
        let factor = sub[k] / pivot;
        diag[k] -= factor * sup[k - 1];
        rhs[k] -= factor * rhs[k - 1];
    }

    let mut interior = vec![0.0; unknowns];
    let last_pivot = diag[unknowns - 1];
    if last_pivot == 0.0 || !last_pivot.is_finite() {
        return Err(MalformedCurveError::SingularSplineSystem);
    }
    interior[unknowns - 1] = rhs[unknowns - 1] / last_pivot;
    for k in (0..unknowns - 1).rev() {
        interior[k] = (rhs[k] - sup[k] * interior[k + 1]) / diag[k];
    }

    let mut moments = vec![0.0; n];
    moments[1..=unknowns].copy_from_slice(&interior);
    moments[0] = ((h[0] + h[1]) * moments[1] - h[0] * moments[2]) / h[1];
    moments[n - 1] =
        ((h_last + h_prev) * moments[n - 2] - h_last * moments[n - 3]) / h_prev;

    if moments.iter().any(|moment| !moment.is_finite()) {
        return Err(MalformedCurveError::SingularSplineSystem);
    }
    Ok(moments)
}

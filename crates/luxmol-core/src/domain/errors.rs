use std::path::PathBuf;

/// Bad input-table shape or content. Fatal for the offending source file
/// only; batch processing continues with the remaining files.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MalformedCurveError {
    #[error("curve requires at least {minimum} samples, got {actual}")]
    TooFewSamples { minimum: usize, actual: usize },
    #[error("curve column lengths differ: {wavelengths} wavelengths vs {intensities} intensities")]
    LengthMismatch {
        wavelengths: usize,
        intensities: usize,
    },
    #[error(
        "wavelengths must be strictly increasing, index {index} has {current} nm after {previous} nm"
    )]
    NonIncreasingWavelength {
        index: usize,
        previous: f64,
        current: f64,
    },
    #[error("wavelength at index {index} must be finite and > 0 nm, got {value}")]
    NonPositiveWavelength { index: usize, value: f64 },
    #[error("intensity at index {index} must be finite, got {value}")]
    NonFiniteIntensity { index: usize, value: f64 },
    #[error("row at line {line} has {found} columns, expected 2 (wavelength_nm intensity)")]
    ColumnCount { line: usize, found: usize },
    #[error("row at line {line} has non-numeric field '{token}'")]
    NonNumericField { line: usize, token: String },
    #[error("table contains no data rows")]
    EmptyTable,
    #[error("integration requires at least 2 samples, got {actual}")]
    InsufficientIntegrationPoints { actual: usize },
    #[error("cubic spline system is singular for the given wavelength grid")]
    SingularSplineSystem,
}

/// An interpolation query or PAR-band resample outside the fitted curve's
/// native wavelength range. Extrapolation is rejected, never silent.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("wavelength {query_nm} nm is outside the fitted domain [{min_nm}, {max_nm}] nm")]
pub struct DomainError {
    pub query_nm: f64,
    pub min_nm: f64,
    pub max_nm: f64,
}

/// A physically invalid spectrum: an integral that should be strictly
/// positive came out zero, negative, or non-finite.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum DegenerateCurveError {
    #[error("source spectrum integrates to {integral}; cannot normalize to unit radiant power")]
    ZeroSpectralPower { integral: f64 },
    #[error("PAR-band integral is {integral} (lm*s)/mol; photon yield is undefined")]
    ZeroParIntegral { integral: f64 },
}

/// Umbrella error for one source-file computation.
#[derive(Debug, thiserror::Error)]
pub enum YieldError {
    #[error(transparent)]
    Malformed(#[from] MalformedCurveError),
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Degenerate(#[from] DegenerateCurveError),
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl YieldError {
    /// Stable category name used in diagnostics and the JSON report.
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Malformed(_) => "malformed-curve",
            Self::Domain(_) => "domain",
            Self::Degenerate(_) => "degenerate-curve",
            Self::Io { .. } => "io",
        }
    }

    /// Process exit code when the error aborts a whole run: input-shape
    /// problems exit 2, I/O problems 3, computation problems 4.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Malformed(_) => 2,
            Self::Io { .. } => 3,
            Self::Domain(_) | Self::Degenerate(_) => 4,
        }
    }
}

//! Standard photopic luminous-efficacy dataset.
//!
//! ISO/CIE 11664-1:2015 spectral luminous efficiency V(lambda) for photopic
//! vision, 380-780 nm at 5 nm steps, normalized to 1.0 at 555 nm. Embedded
//! so the default reference curve needs no runtime file; a caller-supplied
//! table overrides it.

use crate::domain::Curve;

pub const PHOTOPIC_SAMPLE_COUNT: usize = 81;

pub const PHOTOPIC_WAVELENGTHS_NM: [f64; PHOTOPIC_SAMPLE_COUNT] = [
    380.0, 385.0, 390.0, 395.0, 400.0, 405.0, 410.0, 415.0, 420.0, 425.0, //
    430.0, 435.0, 440.0, 445.0, 450.0, 455.0, 460.0, 465.0, 470.0, 475.0, //
    480.0, 485.0, 490.0, 495.0, 500.0, 505.0, 510.0, 515.0, 520.0, 525.0, //
    530.0, 535.0, 540.0, 545.0, 550.0, 555.0, 560.0, 565.0, 570.0, 575.0, //
    580.0, 585.0, 590.0, 595.0, 600.0, 605.0, 610.0, 615.0, 620.0, 625.0, //
    630.0, 635.0, 640.0, 645.0, 650.0, 655.0, 660.0, 665.0, 670.0, 675.0, //
    680.0, 685.0, 690.0, 695.0, 700.0, 705.0, 710.0, 715.0, 720.0, 725.0, //
    730.0, 735.0, 740.0, 745.0, 750.0, 755.0, 760.0, 765.0, 770.0, 775.0, //
    780.0,
];

pub const PHOTOPIC_EFFICACY: [f64; PHOTOPIC_SAMPLE_COUNT] = [
    0.000039, 0.000064, 0.000120, 0.000217, 0.000396, 0.000640, 0.00121, 0.00218, 0.00400,
    0.00730, //
    0.0116, 0.01684, 0.0230, 0.0298, 0.0380, 0.0480, 0.0600, 0.0739, 0.09098, 0.1126, //
    0.13902, 0.1693, 0.20802, 0.2586, 0.3230, 0.4073, 0.5030, 0.6082, 0.7100, 0.7932, //
    0.8620, 0.91485, 0.9540, 0.9803, 0.99495, 1.0000, 0.9950, 0.9786, 0.9520, 0.9154, //
    0.8700, 0.8163, 0.7570, 0.6949, 0.6310, 0.5668, 0.5030, 0.4412, 0.3810, 0.3210, //
    0.2650, 0.2170, 0.1750, 0.1382, 0.1070, 0.0816, 0.0610, 0.04458, 0.0320, 0.0232, //
    0.0170, 0.01192, 0.00821, 0.005723, 0.004102, 0.002929, 0.002091, 0.001484, 0.001047,
    0.000740, //
    0.000520, 0.000361, 0.000249, 0.000172, 0.000120, 0.0000848, 0.0000600, 0.0000424,
    0.0000300, 0.0000212, //
    0.0000149,
];

/// The embedded table materialized as a `Curve`.
pub fn standard_photopic_curve() -> Curve {
    Curve::from_samples(
        PHOTOPIC_WAVELENGTHS_NM.to_vec(),
        PHOTOPIC_EFFICACY.to_vec(),
    )
    .expect("ISO/CIE photopic table should be a valid curve")
}

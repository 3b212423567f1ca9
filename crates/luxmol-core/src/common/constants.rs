//! Physical constants shared by the photon-yield pipeline.
//!
//! Values are kept at the truncated precision of the reference calculation
//! so derived quantities reproduce its outputs digit for digit.

/// Speed of light in vacuum, m/s.
pub const SPEED_OF_LIGHT_M_PER_S: f64 = 2.998e8;
/// Planck's constant, J*s.
pub const PLANCK_CONSTANT_J_S: f64 = 6.626e-34;
/// Avogadro's number, 1/mol.
pub const AVOGADRO_PER_MOL: f64 = 6.022e23;
/// Maximum luminous efficacy at the 555 nm photopic peak, lm/W.
pub const MAX_LUMINOUS_EFFICACY_LM_PER_W: f64 = 683.0;
/// Photosynthetically active radiation band, nm.
pub const PAR_BAND_MIN_NM: f64 = 400.0;
pub const PAR_BAND_MAX_NM: f64 = 700.0;

pub const METERS_PER_NM: f64 = 1.0e-9;

/// Energy carried by one mole of photons at `wavelength_nm`, J/mol,
/// via the Planck relation E = h*c/lambda scaled by Avogadro's number.
pub fn molar_photon_energy_j_per_mol(wavelength_nm: f64) -> f64 {
    PLANCK_CONSTANT_J_S * SPEED_OF_LIGHT_M_PER_S / (wavelength_nm * METERS_PER_NM)
        * AVOGADRO_PER_MOL
}

#[cfg(test)]
mod tests {
    use super::{
        AVOGADRO_PER_MOL, MAX_LUMINOUS_EFFICACY_LM_PER_W, PAR_BAND_MAX_NM, PAR_BAND_MIN_NM,
        PLANCK_CONSTANT_J_S, SPEED_OF_LIGHT_M_PER_S, molar_photon_energy_j_per_mol,
    };

    #[test]
    fn constants_remain_finite_and_positive() {
        for value in [
            SPEED_OF_LIGHT_M_PER_S,
            PLANCK_CONSTANT_J_S,
            AVOGADRO_PER_MOL,
            MAX_LUMINOUS_EFFICACY_LM_PER_W,
        ] {
            assert!(value.is_finite());
            assert!(value > 0.0);
        }
        assert!(PAR_BAND_MIN_NM < PAR_BAND_MAX_NM);
    }

    #[test]
    fn molar_photon_energy_matches_planck_relation_at_555nm() {
        let energy = molar_photon_energy_j_per_mol(555.0);
        // h*c/(555e-9) * N_A with the truncated constants above.
        let expected = 6.626e-34 * 2.998e8 / 555.0e-9 * 6.022e23;
        assert!((energy - expected).abs() / expected <= 1.0e-15);
        assert!((energy - 2.1554e5).abs() / 2.1554e5 <= 1.0e-3);
    }

    #[test]
    fn molar_photon_energy_decreases_with_wavelength() {
        assert!(molar_photon_energy_j_per_mol(400.0) > molar_photon_energy_j_per_mol(555.0));
        assert!(molar_photon_energy_j_per_mol(555.0) > molar_photon_energy_j_per_mol(700.0));
    }
}

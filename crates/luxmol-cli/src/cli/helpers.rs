use super::CliError;
use anyhow::Context;
use luxmol_core::domain::{SampledSpectra, YieldError};
use luxmol_core::modules::report::BatchReport;
use std::fs;
use std::path::Path;

/// Report label for a source file: its stem, falling back to the full path.
pub(super) fn source_label(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

pub(super) fn write_json_report(path: &Path, batch: &BatchReport) -> Result<(), CliError> {
    let json = batch
        .to_json()
        .context("failed to serialize the JSON report")?;
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).with_context(|| {
            format!("failed to create report directory '{}'", parent.display())
        })?;
    }
    fs::write(path, json)
        .with_context(|| format!("failed to write JSON report '{}'", path.display()))?;
    Ok(())
}

/// One five-column table per source: the curves sampled on the common grid,
/// ready for external plotting.
pub(super) fn write_curve_dump(
    directory: &Path,
    label: &str,
    spectra: &SampledSpectra,
) -> Result<(), YieldError> {
    fs::create_dir_all(directory).map_err(|source| YieldError::Io {
        path: directory.to_path_buf(),
        source,
    })?;

    let mut contents = String::with_capacity(spectra.grid_nm.len() * 80);
    contents.push_str(
        "# wavelength_nm luminous_efficacy spd spd_normalized luminous_flux_lm_per_W_nm\n",
    );
    for index in 0..spectra.grid_nm.len() {
        contents.push_str(&format!(
            "{:.9E} {:.9E} {:.9E} {:.9E} {:.9E}\n",
            spectra.grid_nm[index],
            spectra.luminous_efficacy[index],
            spectra.spd[index],
            spectra.spd_normalized[index],
            spectra.luminous_flux_density[index],
        ));
    }

    let path = directory.join(format!("{label}.curves.dat"));
    fs::write(&path, contents).map_err(|source| YieldError::Io { path, source })
}

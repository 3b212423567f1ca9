use super::CliError;
use super::helpers::{source_label, write_curve_dump, write_json_report};
use luxmol_core::common::photopic::standard_photopic_curve;
use luxmol_core::domain::{Curve, GridResolution, PhotonYield, YieldError};
use luxmol_core::modules::efficiency::{SpectralEfficiencyCalculator, load_curve_file};
use luxmol_core::modules::report::{
    BatchReport, efficacy_line, quantum_yield_line, render_human_summary,
};
use std::path::{Path, PathBuf};

#[derive(clap::Args)]
pub(super) struct YieldArgs {
    /// Source SPD tables (two columns: wavelength_nm relative_intensity)
    #[arg(value_name = "SPD_FILE", required = true)]
    sources: Vec<PathBuf>,

    /// Reference luminous-efficacy table; defaults to the embedded
    /// ISO/CIE 11664-1:2015 photopic data
    #[arg(long)]
    reference: Option<PathBuf>,

    /// Sample count for the common grid and the PAR-band resampling
    #[arg(long, default_value_t = GridResolution::DEFAULT_POINTS)]
    resolution: usize,

    /// Also print the lm/W photometric-efficacy line per source
    #[arg(long)]
    efficacy: bool,

    /// JSON report output path
    #[arg(long)]
    report: Option<PathBuf>,

    /// Directory for per-source sampled-curve dumps
    #[arg(long, value_name = "DIR")]
    dump_curves: Option<PathBuf>,
}

pub(super) fn run_yield_command(args: YieldArgs) -> Result<i32, CliError> {
    let resolution = GridResolution::new(args.resolution)
        .map_err(|error| CliError::Usage(error.to_string()))?;
    let reference = load_reference(args.reference.as_deref())?;
    let calculator = SpectralEfficiencyCalculator::with_resolution(reference, resolution);

    let mut batch = BatchReport::default();
    for path in &args.sources {
        let label = source_label(path);
        tracing::debug!(source = %path.display(), "processing SPD table");

        match process_source(&calculator, path, args.dump_curves.as_deref(), &label) {
            Ok(result) => {
                println!("{}", quantum_yield_line(&label, &result));
                if args.efficacy {
                    println!("{}", efficacy_line(&label, &result));
                }
                batch.push_success(label, result);
            }
            Err(error) => {
                tracing::warn!(source = %path.display(), kind = error.category(), "yield computation failed");
                eprintln!("{}: [{}] {}", label, error.category(), error);
                batch.push_failure(label, &error);
            }
        }
    }

    if let Some(report_path) = &args.report {
        write_json_report(report_path, &batch)?;
        println!("JSON report: {}", report_path.display());
    }
    println!("{}", render_human_summary(&batch));

    if batch.has_failures() { Ok(1) } else { Ok(0) }
}

fn load_reference(path: Option<&Path>) -> Result<Curve, CliError> {
    match path {
        Some(path) => load_curve_file(path).map_err(CliError::Compute),
        None => Ok(standard_photopic_curve()),
    }
}

fn process_source(
    calculator: &SpectralEfficiencyCalculator,
    path: &Path,
    dump_dir: Option<&Path>,
    label: &str,
) -> Result<PhotonYield, YieldError> {
    let source = load_curve_file(path)?;
    match dump_dir {
        Some(directory) => {
            let (result, spectra) = calculator.compute_yield_with_diagnostics(&source)?;
            write_curve_dump(directory, label, &spectra)?;
            Ok(result)
        }
        None => calculator.compute_yield(&source),
    }
}

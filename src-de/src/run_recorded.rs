//! Recording wrapper for differential evolution, used by tests and the CLI

use std::path::{Path, PathBuf};

use ndarray::Array1;

use crate::recorder::{OptimizationRecorder, RecordError};
use crate::{Bounds, DEConfig, DEReport, DifferentialEvolution};

/// Run differential evolution with one CSV row per generation
///
/// The CSV lands in `<output_dir>/<function_name>.csv`; its path is returned
/// along with the report.
pub fn run_recorded_differential_evolution<F>(
	function_name: &str,
	func: F,
	bounds: &[(f64, f64)],
	config: DEConfig,
	output_dir: impl AsRef<Path>,
) -> Result<(DEReport, PathBuf), RecordError>
where
	F: Fn(&Array1<f64>) -> f64,
{
	let recorder = OptimizationRecorder::new(function_name);
	let objective = |x: &Array1<f64>, _: &()| func(x);

	let mut de = DifferentialEvolution::with_config(&objective, &(), Bounds::new(bounds)?, config)?;
	de.set_callback(recorder.create_callback());
	let report = de.solve()?;

	let csv_path = recorder.save_to_csv(output_dir)?;
	log::info!(
		"{}: f={:.6e} after {} generations ({}), records in {}",
		function_name,
		report.fun,
		report.nit,
		report.message,
		csv_path.display()
	);
	Ok((report, csv_path))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{DEConfigBuilder, DEError};

	#[test]
	fn test_run_recorded_basic() {
		let quadratic = |x: &Array1<f64>| -> f64 { x.iter().map(|&xi| xi * xi).sum() };
		let dir = tempfile::tempdir().unwrap();

		let bounds = vec![(-5.0, 5.0), (-5.0, 5.0)];
		let config = DEConfigBuilder::new().seed(42).maxiter(60).unwrap().popsize(10).unwrap().build();

		let (report, csv_path) =
			run_recorded_differential_evolution("test_quadratic", quadratic, &bounds, config, dir.path())
				.unwrap();

		assert!(report.fun < 1e-3, "Function value too high: {}", report.fun);
		for &xi in report.x.iter() {
			assert!(xi.abs() < 1e-1, "Variable too far from 0: {}", xi);
		}

		let csv_content = std::fs::read_to_string(&csv_path).unwrap();
		let lines: Vec<&str> = csv_content.trim().lines().collect();
		assert_eq!(lines.len(), report.nit + 1, "one row per generation plus header");
		assert!(lines[0].starts_with("iteration,x0,x1,best_result,convergence,is_improvement"));
	}

	#[test]
	fn test_run_recorded_rejects_bad_bounds() {
		let dir = tempfile::tempdir().unwrap();
		let err = run_recorded_differential_evolution(
			"bad",
			|x: &Array1<f64>| x[0],
			&[(1.0, -1.0)],
			DEConfig::default(),
			dir.path(),
		)
		.unwrap_err();
		assert!(matches!(err, RecordError::Solver(DEError::InvalidBounds { index: 0, .. })));
	}
}

use optde::{DEConfigBuilder, RecordError, run_recorded_differential_evolution};
use optde_testfunctions::{get_function_bounds_vec, rastrigin};

#[test]
fn test_recorded_rastrigin() {
	let dir = tempfile::tempdir().unwrap();
	let bounds = get_function_bounds_vec("rastrigin", (-5.12, 5.12));
	let config = DEConfigBuilder::new().seed(12).maxiter(200).unwrap().build();

	let (report, csv_path) =
		run_recorded_differential_evolution("rastrigin", rastrigin, &bounds, config, dir.path()).unwrap();
	assert_eq!(csv_path, dir.path().join("rastrigin.csv"));

	let mut reader = csv::Reader::from_path(&csv_path).unwrap();
	let headers = reader.headers().unwrap().clone();
	assert_eq!(
		headers.iter().collect::<Vec<_>>(),
		vec!["iteration", "x0", "x1", "best_result", "convergence", "is_improvement"]
	);

	let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
	assert_eq!(rows.len(), report.nit);
	let mut previous = f64::INFINITY;
	for (k, row) in rows.iter().enumerate() {
		assert_eq!(row[0].parse::<usize>().unwrap(), k + 1);
		let best: f64 = row[3].parse().unwrap();
		assert!(best <= previous);
		previous = best;
	}
	let last: f64 = rows.last().unwrap()[3].parse().unwrap();
	assert!((last - report.fun).abs() <= 1e-12 * report.fun.abs().max(1.0));
}

#[test]
fn test_recorded_run_reports_config_errors() {
	let dir = tempfile::tempdir().unwrap();
	let mut config = DEConfigBuilder::new().build();
	config.maxiter = 0;
	let result = run_recorded_differential_evolution("sphere", optde_testfunctions::sphere, &[(0.0, 1.0)], config, dir.path());
	assert!(matches!(result, Err(RecordError::Solver(_))));
	assert!(!dir.path().join("sphere.csv").exists());
}

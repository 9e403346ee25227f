//! Per-generation recording of a run, saved as CSV.

use std::fs::create_dir_all;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use thiserror::Error;

use crate::{Callback, DEError, DEIntermediate};

/// Errors from recorded runs
#[derive(Debug, Error)]
pub enum RecordError {
	#[error(transparent)]
	Solver(#[from] DEError),

	#[error("failed to write record: {0}")]
	Io(#[from] std::io::Error),

	#[error("failed to write csv: {0}")]
	Csv(#[from] csv::Error),
}

/// A single optimization iteration record
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizationRecord {
	/// Iteration number
	pub iteration: usize,
	/// Best x found so far
	pub x: Vec<f64>,
	/// Best function result so far
	pub best_result: f64,
	/// Convergence measure (coefficient of variation of the energies)
	pub convergence: f64,
	/// Whether this iteration improved the best known result
	pub is_improvement: bool,
}

/// Records optimization progress via DE callbacks
#[derive(Debug, Clone)]
pub struct OptimizationRecorder {
	/// Function name (used for CSV filename)
	function_name: String,
	/// Shared records storage
	records: Arc<Mutex<Vec<OptimizationRecord>>>,
}

fn lock(records: &Mutex<Vec<OptimizationRecord>>) -> MutexGuard<'_, Vec<OptimizationRecord>> {
	// a panicking callback leaves complete records behind
	records.lock().unwrap_or_else(PoisonError::into_inner)
}

impl OptimizationRecorder {
	/// Create a new optimization recorder for the given function
	pub fn new(function_name: impl Into<String>) -> Self {
		Self { function_name: function_name.into(), records: Arc::new(Mutex::new(Vec::new())) }
	}

	/// Create a callback function that records optimization progress
	pub fn create_callback(&self) -> Callback<'static> {
		let records = self.records.clone();
		Box::new(move |intermediate: &DEIntermediate| {
			let mut guard = lock(&records);
			let is_improvement = match guard.last() {
				Some(last) => intermediate.fun < last.best_result,
				None => true,
			};
			guard.push(OptimizationRecord {
				iteration: intermediate.iter,
				x: intermediate.x.to_vec(),
				best_result: intermediate.fun,
				convergence: intermediate.convergence,
				is_improvement,
			});
		})
	}

	/// Save all recorded iterations to `<output_dir>/<function_name>.csv`
	pub fn save_to_csv(&self, output_dir: impl AsRef<Path>) -> Result<PathBuf, RecordError> {
		create_dir_all(output_dir.as_ref())?;
		let filename = output_dir.as_ref().join(format!("{}.csv", self.function_name));
		let mut writer = csv::Writer::from_path(&filename)?;

		let records = self.get_records();
		let num_dimensions = records.first().map_or(0, |r| r.x.len());

		let mut header = vec!["iteration".to_string()];
		header.extend((0..num_dimensions).map(|i| format!("x{}", i)));
		header.extend(["best_result", "convergence", "is_improvement"].map(String::from));
		writer.write_record(&header)?;

		for record in &records {
			let mut row = vec![record.iteration.to_string()];
			row.extend(record.x.iter().map(|xi| format!("{:.16}", xi)));
			row.push(format!("{:.16}", record.best_result));
			row.push(format!("{:.16}", record.convergence));
			row.push(record.is_improvement.to_string());
			writer.write_record(&row)?;
		}
		writer.flush()?;
		log::debug!("saved {} records to {}", records.len(), filename.display());

		Ok(filename)
	}

	/// Get a copy of all recorded iterations
	pub fn get_records(&self) -> Vec<OptimizationRecord> {
		lock(&self.records).clone()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use ndarray::Array1;

	#[test]
	fn test_optimization_recorder() {
		let recorder = OptimizationRecorder::new("test_function");
		let mut callback = recorder.create_callback();

		callback(&DEIntermediate { x: Array1::from(vec![1.0, 2.0]), fun: 5.0, convergence: 0.1, iter: 1 });
		callback(&DEIntermediate { x: Array1::from(vec![0.5, 1.0]), fun: 1.25, convergence: 0.05, iter: 2 });
		callback(&DEIntermediate { x: Array1::from(vec![0.5, 1.0]), fun: 1.25, convergence: 0.01, iter: 3 });

		let records = recorder.get_records();
		assert_eq!(records.len(), 3);
		assert_eq!(records[0].iteration, 1);
		assert_eq!(records[0].x, vec![1.0, 2.0]);
		assert!(records[0].is_improvement);
		assert_eq!(records[1].best_result, 1.25);
		assert!(records[1].is_improvement);
		assert!(!records[2].is_improvement);
		assert_eq!(records[2].convergence, 0.01);
	}

	#[test]
	fn test_save_to_csv() {
		let dir = tempfile::tempdir().unwrap();
		let recorder = OptimizationRecorder::new("csv_check");
		let mut callback = recorder.create_callback();
		callback(&DEIntermediate { x: Array1::from(vec![0.25, -1.0]), fun: 3.0, convergence: 0.5, iter: 1 });

		let path = recorder.save_to_csv(dir.path().join("records")).unwrap();
		let content = std::fs::read_to_string(&path).unwrap();
		let lines: Vec<&str> = content.trim().lines().collect();
		assert_eq!(lines.len(), 2);
		assert_eq!(lines[0], "iteration,x0,x1,best_result,convergence,is_improvement");
		assert!(lines[1].starts_with("1,0.2500000000000000,-1.0000000000000000,3.0000000000000000"));
		assert!(lines[1].ends_with(",true"));
	}
}

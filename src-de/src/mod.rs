//! Differential Evolution (DE) global optimizer in pure Rust using ndarray
//!
//! Minimizes a user objective over box bounds. The search runs in the
//! normalized space `[0, 1]^n`; the objective only ever sees points mapped
//! back into the user's bounds.
//!
//! Supported features:
//! - Twelve strategies: best1, best2, rand1, rand2, randtobest1, currenttobest1,
//!   each with binomial or exponential crossover
//! - Mutation factor dithered once per generation in a range [min,max)
//! - Initialization: Latin Hypercube Sampling (LHS) or random uniform
//! - Immediate or deferred replacement within a generation
//! - Out-of-bounds components resampled, never clipped
//! - Convergence by std(pop_f) <= atol + tol * |mean(pop_f)|
//! - Seeded runs are bit-for-bit reproducible
//! - Optional argument bag forwarded to every objective call
//!
//! ```rust
//! use ndarray::Array1;
//! use optde::{differential_evolution, DEConfigBuilder};
//!
//! let sphere = |x: &Array1<f64>| x[0].powi(2) + x[1].powi(2);
//! let config = DEConfigBuilder::new().seed(42).maxiter(200)?.build();
//! let report = differential_evolution(&sphere, &[(-5.0, 5.0), (-5.0, 5.0)], config)?;
//! assert!(report.fun < 1e-3);
//! # Ok::<(), optde::DEError>(())
//! ```

use std::fmt;
use std::time::Duration;

use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

pub mod config;
pub mod error;
pub mod evolution;
pub mod fitness;
pub mod individual;
pub mod scaler;

mod sample_indices;
mod init_latin_hypercube;
mod init_random;

mod mutant_best1;
mod mutant_best2;
mod mutant_current_to_best1;
mod mutant_rand1;
mod mutant_rand2;
mod mutant_rand_to_best1;

mod crossover_binomial;
mod crossover_exponential;
mod repair_inplace;
mod trial;

pub mod differential_evolution;
pub mod recorder;
pub mod run_recorded;


pub use config::{
	Crossover, DEConfig, DEConfigBuilder, Init, MIN_POPULATION, Mutation, MutationBase, Strategy,
	Updating,
};
pub use differential_evolution::{differential_evolution, differential_evolution_with_args};
pub use error::{DEError, Result};
pub use evolution::Evolution;
pub use fitness::Fitness;
pub use individual::{Individual, Population};
pub use recorder::{OptimizationRecord, OptimizationRecorder, RecordError};
pub use run_recorded::run_recorded_differential_evolution;
pub use scaler::{Bound, Bounds, Scaler};

/// Why a run stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Termination {
	/// The generation limit was reached
	MaxIterations,
	/// The population energies satisfied the tolerance test
	Converged,
}

impl fmt::Display for Termination {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Termination::MaxIterations => f.write_str("max iterations"),
			Termination::Converged => f.write_str("converged"),
		}
	}
}

/// Result/Report of a DE optimization run
#[derive(Clone)]
pub struct DEReport {
	/// Best point, in user coordinates
	pub x: Array1<f64>,
	pub fun: f64,
	/// `true` when the run converged
	pub success: bool,
	/// Textual termination cause: "converged" or "max iterations"
	pub message: String,
	pub termination: Termination,
	/// Generations performed
	pub nit: usize,
	/// Objective evaluations, initialization included
	pub nfev: usize,
	pub elapsed: Duration,
	/// std / |mean + eps| of the final energies
	pub convergence: f64,
	/// Final population in user coordinates, one row per individual, best first
	pub population: Array2<f64>,
	pub population_energies: Array1<f64>,
}

impl fmt::Debug for DEReport {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("DEReport")
			.field("x", &format!("len={}", self.x.len()))
			.field("fun", &self.fun)
			.field("success", &self.success)
			.field("message", &self.message)
			.field("nit", &self.nit)
			.field("nfev", &self.nfev)
			.field("elapsed", &self.elapsed)
			.field("convergence", &self.convergence)
			.field(
				"population",
				&format!("{}x{}", self.population.nrows(), self.population.ncols()),
			)
			.field("population_energies", &format!("len={}", self.population_energies.len()))
			.finish()
	}
}

/// Information passed to callback after each generation
#[derive(Debug, Clone)]
pub struct DEIntermediate {
	pub x: Array1<f64>,
	pub fun: f64,
	/// std / |mean + eps| of the current energies
	pub convergence: f64,
	pub iter: usize,
}

/// Per-generation observer
pub type Callback<'a> = Box<dyn FnMut(&DEIntermediate) + 'a>;

/// Differential Evolution optimizer
///
/// `A` is the argument bag forwarded to every objective call; use `()` when
/// the objective takes none.
pub struct DifferentialEvolution<'a, F, A = ()> {
	func: &'a F,
	args: &'a A,
	bounds: Bounds,
	scaler: Scaler,
	config: DEConfig,
	callback: Option<Callback<'a>>,
}

impl<'a, F, A> DifferentialEvolution<'a, F, A>
where
	F: Fn(&Array1<f64>, &A) -> f64,
{
	/// Create a new DE optimizer with objective `func`, argument bag `args` and validated bounds
	pub fn new(func: &'a F, args: &'a A, bounds: Bounds) -> Self {
		let scaler = Scaler::new(&bounds);
		Self { func, args, bounds, scaler, config: DEConfig::default(), callback: None }
	}

	/// Same as [`DifferentialEvolution::new`] with a configuration, checked here
	pub fn with_config(func: &'a F, args: &'a A, bounds: Bounds, config: DEConfig) -> Result<Self> {
		config.validate()?;
		config.population_size(bounds.len())?;
		let mut de = Self::new(func, args, bounds);
		de.config = config;
		Ok(de)
	}

	pub fn config(&self) -> &DEConfig {
		&self.config
	}

	/// Mutable access to configuration; checked again when a run starts
	pub fn config_mut(&mut self) -> &mut DEConfig {
		&mut self.config
	}

	pub fn bounds(&self) -> &Bounds {
		&self.bounds
	}

	pub fn scaler(&self) -> &Scaler {
		&self.scaler
	}

	/// Observe every generation of [`DifferentialEvolution::solve`]
	pub fn set_callback(&mut self, callback: Callback<'a>) {
		self.callback = Some(callback);
	}

	/// Validate the configuration, build and evaluate the initial population.
	///
	/// The returned run borrows the configuration, which therefore cannot
	/// change until the run is dropped.
	pub fn start(&self) -> Result<Evolution<'_, F, A>> {
		self.config.validate()?;
		let npop = self.config.population_size(self.scaler.len())?;
		let fitness = Fitness::new(self.func, self.args);
		Ok(Evolution::new(&self.config, &self.scaler, npop, fitness))
	}

	/// Run the optimization and return a report.
	///
	/// Each call is a fresh run: new random stream, new population.
	pub fn solve(&mut self) -> Result<DEReport> {
		let mut callback = self.callback.take();
		let report = self.run(&mut callback);
		self.callback = callback;
		report
	}

	fn run(&self, callback: &mut Option<Callback<'a>>) -> Result<DEReport> {
		let mut evolution = self.start()?;
		loop {
			let status = evolution.step();
			if let Some(cb) = callback.as_mut() {
				cb(&evolution.intermediate());
			}
			if status.is_some() {
				break;
			}
		}
		Ok(evolution.finish())
	}
}

//! Error types for the Differential Evolution optimizer.
//!
//! Configuration problems are reported where the value is assigned (builder
//! setters, [`crate::Bounds::new`]) and once more before a run starts, so an
//! invalid configuration never reaches the evolution loop.

use thiserror::Error;

/// Errors that can occur while configuring or starting a DE run.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DEError {
	/// No bound was supplied, the problem has zero dimensions.
	#[error("bounds are empty: at least one variable is required")]
	EmptyBounds,

	/// A bound pair is not finite or its lower end is not strictly below its upper end.
	#[error("invalid bounds at index {index}: lower ({lower}) must be finite and < upper ({upper})")]
	InvalidBounds {
		/// Index of the invalid bound pair
		index: usize,
		/// The lower bound value
		lower: f64,
		/// The upper bound value
		upper: f64,
	},

	/// Mutation dithering range outside [0, 2) or empty.
	#[error("invalid mutation range [{min}, {max}): both ends must be finite, in [0, 2) and min < max")]
	InvalidMutationRange {
		/// Lower end of the range
		min: f64,
		/// Upper end of the range
		max: f64,
	},

	/// Recombination probability outside [0, 1).
	#[error("invalid recombination probability: {rate} (must be in [0, 1))")]
	InvalidRecombination {
		/// The invalid probability
		rate: f64,
	},

	/// The maximum number of generations must be at least one.
	#[error("invalid maxiter: {maxiter} (must be >= 1)")]
	InvalidMaxIterations {
		/// The invalid iteration count
		maxiter: usize,
	},

	/// The population size multiplier must be at least one.
	#[error("invalid population multiplier: {popsize} (must be >= 1)")]
	InvalidPopulationSize {
		/// The invalid multiplier
		popsize: usize,
	},

	/// A convergence tolerance is negative or not finite.
	#[error("invalid {name}: {value} (must be finite and >= 0)")]
	InvalidTolerance {
		/// Which tolerance (`tol` or `atol`)
		name: &'static str,
		/// The invalid value
		value: f64,
	},

	/// A selector name does not match any known case.
	#[error("unknown {kind}: {name}")]
	UnknownVariant {
		/// Kind of selector (strategy, init, updating)
		kind: &'static str,
		/// The name that failed to parse
		name: String,
	},
}

/// A specialized `Result` type for DE operations.
pub type Result<T> = std::result::Result<T, DEError>;

impl DEError {
	/// Returns `true` if this is a bounds-related error.
	pub fn is_bounds_error(&self) -> bool {
		matches!(self, DEError::EmptyBounds | DEError::InvalidBounds { .. })
	}

	/// Returns `true` if this is a configuration error, bounds included.
	///
	/// Everything except [`DEError::UnknownVariant`] is a configuration error.
	pub fn is_config_error(&self) -> bool {
		!matches!(self, DEError::UnknownVariant { .. })
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_error_display() {
		let err = DEError::InvalidBounds { index: 2, lower: 5.0, upper: 3.0 };
		assert_eq!(
			err.to_string(),
			"invalid bounds at index 2: lower (5) must be finite and < upper (3)"
		);
		let err = DEError::UnknownVariant { kind: "strategy", name: "best3bin".into() };
		assert_eq!(err.to_string(), "unknown strategy: best3bin");
	}

	#[test]
	fn test_error_categories() {
		let bounds_err = DEError::EmptyBounds;
		let config_err = DEError::InvalidRecombination { rate: 1.5 };
		let variant_err = DEError::UnknownVariant { kind: "init", name: "sobol".into() };

		assert!(bounds_err.is_bounds_error());
		assert!(bounds_err.is_config_error());
		assert!(!config_err.is_bounds_error());
		assert!(config_err.is_config_error());
		assert!(!variant_err.is_config_error());
	}
}

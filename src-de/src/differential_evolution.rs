use crate::{Bounds, DEConfig, DEReport, DifferentialEvolution, Result};
use ndarray::Array1;

/// Runs Differential Evolution optimization on a function.
///
/// Convenience function mirroring SciPy's API shape (simplified):
/// - `func`: objective function mapping x -> f(x)
/// - `bounds`: slice of (lower, upper) pairs, one per variable
/// - `config`: DE configuration (use `DEConfigBuilder` to construct)
///
/// # Errors
///
/// Returns a configuration error for invalid bounds or tunables; no
/// evaluation happens in that case.
///
/// # Example
///
/// ```rust
/// use ndarray::Array1;
/// use optde::{differential_evolution, DEConfigBuilder, Strategy};
///
/// let result = differential_evolution(
///     &|x: &Array1<f64>| (x[0] - 1.0).powi(2) + (x[1] + 2.0).powi(2),
///     &[(-5.0, 5.0), (-5.0, 5.0)],
///     DEConfigBuilder::new().maxiter(300)?.strategy(Strategy::Rand1Exp).seed(7).build(),
/// )?;
///
/// assert!(result.fun < 1e-4);
/// # Ok::<(), optde::DEError>(())
/// ```
pub fn differential_evolution<F>(func: &F, bounds: &[(f64, f64)], config: DEConfig) -> Result<DEReport>
where
	F: Fn(&Array1<f64>) -> f64,
{
	let wrapped = |x: &Array1<f64>, _: &()| func(x);
	differential_evolution_with_args(&wrapped, bounds, &(), config)
}

/// Same as [`differential_evolution`] with an argument bag forwarded to every call
pub fn differential_evolution_with_args<F, A>(
	func: &F,
	bounds: &[(f64, f64)],
	args: &A,
	config: DEConfig,
) -> Result<DEReport>
where
	F: Fn(&Array1<f64>, &A) -> f64,
{
	let bounds = Bounds::new(bounds)?;
	let mut de = DifferentialEvolution::with_config(func, args, bounds, config)?;
	de.solve()
}

use ndarray::Array1;

/// Objective wrapper: forwards the argument bag and counts evaluations.
///
/// `A` is the opaque context handed unchanged to every call, `()` when the
/// objective needs none.
pub struct Fitness<'a, F, A> {
	func: &'a F,
	args: &'a A,
	nfev: usize,
}

impl<'a, F, A> Fitness<'a, F, A>
where
	F: Fn(&Array1<f64>, &A) -> f64,
{
	pub fn new(func: &'a F, args: &'a A) -> Self {
		Self { func, args, nfev: 0 }
	}

	/// Evaluate at a point in user coordinates
	pub fn evaluate(&mut self, x: &Array1<f64>) -> f64 {
		self.nfev += 1;
		(self.func)(x, self.args)
	}

	/// Number of objective calls so far
	pub fn nfev(&self) -> usize {
		self.nfev
	}
}

use ndarray::Array1;
use rand::Rng;

/// Redraw every component outside `[0, 1]` uniformly in `[0, 1)`.
///
/// NaN components are redrawn as well; nothing is clipped.
pub(crate) fn repair_inplace<R: Rng + ?Sized>(x: &mut Array1<f64>, rng: &mut R) {
	for v in x.iter_mut() {
		if !(0.0..=1.0).contains(v) {
			*v = rng.random::<f64>();
		}
	}
}

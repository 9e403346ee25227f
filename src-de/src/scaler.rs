//! Box bounds and the affine map between the normalized search space
//! `[0, 1]^n` and the user's bounded space.

use ndarray::{Array1, Zip};
use serde::Serialize;

use crate::error::{DEError, Result};

/// One validated `(lower, upper)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bound {
	lower: f64,
	upper: f64,
}

impl Bound {
	pub fn lower(&self) -> f64 {
		self.lower
	}

	pub fn upper(&self) -> f64 {
		self.upper
	}

	/// Whether `x` lies inside `[lower, upper]`
	pub fn contains(&self, x: f64) -> bool {
		(self.lower..=self.upper).contains(&x)
	}
}

/// Validated bounds, one per optimized variable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bounds(Vec<Bound>);

impl Bounds {
	/// Validate `(lower, upper)` pairs: at least one pair, every end finite, lower < upper.
	pub fn new(pairs: &[(f64, f64)]) -> Result<Self> {
		if pairs.is_empty() {
			return Err(DEError::EmptyBounds);
		}
		let mut bounds = Vec::with_capacity(pairs.len());
		for (index, &(lower, upper)) in pairs.iter().enumerate() {
			if !lower.is_finite() || !upper.is_finite() || lower >= upper {
				return Err(DEError::InvalidBounds { index, lower, upper });
			}
			bounds.push(Bound { lower, upper });
		}
		Ok(Self(bounds))
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Bound> {
		self.0.iter()
	}

	/// Whether every component of the scaled point `x` is inside its bound
	pub fn contains(&self, x: &Array1<f64>) -> bool {
		x.len() == self.len() && self.0.iter().zip(x.iter()).all(|(b, &xi)| b.contains(xi))
	}
}

impl std::ops::Index<usize> for Bounds {
	type Output = Bound;

	fn index(&self, i: usize) -> &Bound {
		&self.0[i]
	}
}

/// Per-variable `center` and `width`: `x = center + width * (v - 0.5)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Scaler {
	center: Array1<f64>,
	width: Array1<f64>,
	lower: Array1<f64>,
	upper: Array1<f64>,
}

impl Scaler {
	pub fn new(bounds: &Bounds) -> Self {
		let center = bounds.iter().map(|b| 0.5 * (b.lower + b.upper)).collect();
		let width = bounds.iter().map(|b| (b.upper - b.lower).abs()).collect();
		let lower = bounds.iter().map(|b| b.lower).collect();
		let upper = bounds.iter().map(|b| b.upper).collect();
		Self { center, width, lower, upper }
	}

	pub fn len(&self) -> usize {
		self.center.len()
	}

	pub fn is_empty(&self) -> bool {
		self.center.is_empty()
	}

	/// Map a normalized vector to the user's coordinates
	pub fn to_scaled(&self, normalized: &Array1<f64>) -> Array1<f64> {
		// the clamp only absorbs rounding at v == 0 or v == 1
		Zip::from(normalized)
			.and(&self.center)
			.and(&self.width)
			.and(&self.lower)
			.and(&self.upper)
			.map_collect(|&v, &c, &w, &lo, &hi| {
				let x = c + w * (v - 0.5);
				if (0.0..=1.0).contains(&v) { x.clamp(lo, hi) } else { x }
			})
	}

	/// Map a point in the user's coordinates back to `[0, 1]^n`
	pub fn to_normalized(&self, scaled: &Array1<f64>) -> Array1<f64> {
		Zip::from(scaled)
			.and(&self.center)
			.and(&self.width)
			.map_collect(|&x, &c, &w| (x - c) / w + 0.5)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use ndarray::array;

	#[test]
	fn test_bounds_validation() {
		assert!(Bounds::new(&[(-1.0, 1.0), (0.0, 10.0)]).is_ok());
		assert_eq!(Bounds::new(&[]), Err(DEError::EmptyBounds));
		assert_eq!(
			Bounds::new(&[(0.0, 1.0), (2.0, 2.0)]),
			Err(DEError::InvalidBounds { index: 1, lower: 2.0, upper: 2.0 })
		);
		assert!(Bounds::new(&[(3.0, -3.0)]).is_err());
		assert!(Bounds::new(&[(f64::NEG_INFINITY, 0.0)]).is_err());
		assert!(Bounds::new(&[(0.0, f64::NAN)]).is_err());
	}

	#[test]
	fn test_scaler_maps_corners_and_center() {
		let bounds = Bounds::new(&[(-5.0, 5.0), (-100.0, 50.0), (1.0, 34.0)]).unwrap();
		let scaler = Scaler::new(&bounds);

		assert_eq!(scaler.to_scaled(&array![0.0, 0.0, 0.0]), array![-5.0, -100.0, 1.0]);
		assert_eq!(scaler.to_scaled(&array![1.0, 1.0, 1.0]), array![5.0, 50.0, 34.0]);
		assert_eq!(scaler.to_scaled(&array![0.5, 0.5, 0.5]), array![0.0, -25.0, 17.5]);
	}

	#[test]
	fn test_scaler_inverse() {
		let bounds = Bounds::new(&[(0.0, 2.0), (-5.0, 5.0), (-100.0, 50.0), (1.0, 34.0)]).unwrap();
		let scaler = Scaler::new(&bounds);
		let x = array![1.0, 1.0, 1.0, 1.0];
		let v = scaler.to_normalized(&x);
		assert!(v.iter().all(|&vi| (0.0..=1.0).contains(&vi)));
		let back = scaler.to_scaled(&v);
		for (a, b) in back.iter().zip(x.iter()) {
			assert!((a - b).abs() < 1e-12);
		}
	}
}

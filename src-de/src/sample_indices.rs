use rand::Rng;
use rand::seq::SliceRandom;

/// Every population index except `exclude`, in random order.
///
/// Strategies read the first k entries, so the k samples are pairwise distinct
/// and never the candidate itself. When the pool holds fewer than `min_len`
/// indices the shuffled order is repeated; only Rand2 on a population of five
/// hits that case.
pub(crate) fn sample_indices<R: Rng + ?Sized>(
	exclude: usize,
	pool_size: usize,
	min_len: usize,
	rng: &mut R,
) -> Vec<usize> {
	let mut idxs: Vec<usize> = (0..pool_size).filter(|&i| i != exclude).collect();
	idxs.shuffle(rng);
	if idxs.len() < min_len && !idxs.is_empty() {
		let missing = min_len - idxs.len();
		let repeated: Vec<usize> = idxs.iter().copied().cycle().take(missing).collect();
		idxs.extend(repeated);
	}
	idxs
}

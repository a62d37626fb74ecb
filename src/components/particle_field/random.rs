//! Uniform random sources for particle seeding.

/// A source of uniform samples in `[0, 1)`.
pub trait RandomSource {
	fn next_f64(&mut self) -> f64;
}

/// `Math.random()` from the host page.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserRandom;

impl RandomSource for BrowserRandom {
	fn next_f64(&mut self) -> f64 {
		js_sys::Math::random()
	}
}

#[cfg(test)]
impl RandomSource for rand::rngs::SmallRng {
	fn next_f64(&mut self) -> f64 {
		rand::Rng::gen_range(self, 0.0..1.0)
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::*;

	#[test]
	fn seeded_samples_stay_in_unit_interval() {
		let mut rng = SmallRng::seed_from_u64(12345);
		for _ in 0..10_000 {
			let v = rng.next_f64();
			assert!((0.0..1.0).contains(&v), "{v} out of [0, 1)");
		}
	}

	#[test]
	fn same_seed_same_samples() {
		let (mut a, mut b) = (SmallRng::seed_from_u64(42), SmallRng::seed_from_u64(42));
		for i in 0..500 {
			assert_eq!(a.next_f64(), b.next_f64(), "diverged at {i}");
		}
	}
}

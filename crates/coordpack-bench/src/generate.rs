use coordpack_common::Coordinate;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// `count` coordinates with both fields uniform in `[0, upper_bound)`.
///
/// # Panics
///
/// Panics if `upper_bound <= 0`.
pub fn generate<R: Rng + ?Sized>(count: usize, upper_bound: i32, rng: &mut R) -> Vec<Coordinate> {
    let field = Uniform::new(0, upper_bound);
    (0..count)
        .map(|_| Coordinate::new(field.sample(rng), field.sample(rng)))
        .collect()
}

/// Like [`generate`], seeded from `seed` when given and from OS entropy
/// otherwise.
pub fn generate_seeded(count: usize, upper_bound: i32, seed: Option<u64>) -> Vec<Coordinate> {
    let mut rng = match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };
    generate(count, upper_bound, &mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_stay_below_bound() {
        let coords = generate_seeded(10_000, 1000, Some(1));
        assert_eq!(coords.len(), 10_000);
        assert!(
            coords
                .iter()
                .all(|c| (0..1000).contains(&c.x()) && (0..1000).contains(&c.y()))
        );
    }

    #[test]
    fn same_seed_same_output() {
        assert_eq!(
            generate_seeded(500, 1000, Some(42)),
            generate_seeded(500, 1000, Some(42))
        );
        assert_ne!(
            generate_seeded(500, 1000, Some(42)),
            generate_seeded(500, 1000, Some(43))
        );
    }

    #[test]
    fn bound_of_one_yields_origin() {
        let coords = generate_seeded(16, 1, None);
        assert!(coords.iter().all(|&c| c == Coordinate::ORIGIN));
    }
}

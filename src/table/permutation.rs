//! Doubled Fisher–Yates permutation table.

use super::lcg::Lcg;

/// Number of distinct lattice hashes. Integer coordinates are masked to this range.
pub const TABLE_SIZE: usize = 256;

/// A permutation of `0..256` stored twice back to back.
///
/// The duplicated upper half lets lookups of the form `perm[x + 1 + perm[y]]`
/// run without a modulo: any index below 512 is valid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PermutationTable {
    perm: [u8; TABLE_SIZE * 2],
}

impl PermutationTable {
    /// Builds a table by shuffling the identity permutation with `rng`.
    ///
    /// Walks `i` from 255 down to 1 and swaps `perm[i]` with
    /// `perm[rng.next_u32() % (i + 1)]`, then mirrors the result into the
    /// upper half.
    pub fn shuffled(rng: &mut Lcg) -> Self {
        let mut perm = [0u8; TABLE_SIZE * 2];
        for (i, value) in perm.iter_mut().take(TABLE_SIZE).enumerate() {
            *value = i as u8;
        }

        for i in (1..TABLE_SIZE).rev() {
            let r = rng.next_u32() % (i as u32 + 1);
            perm.swap(i, r as usize);
        }

        let (low, high) = perm.split_at_mut(TABLE_SIZE);
        high.copy_from_slice(low);

        Self { perm }
    }

    /// Looks up a hash. `index` must be below 512.
    #[inline(always)]
    pub fn get(&self, index: usize) -> usize {
        self.perm[index] as usize
    }

    /// Returns the full 512-entry table.
    pub fn as_slice(&self) -> &[u8; TABLE_SIZE * 2] {
        &self.perm
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(seed: u32) -> PermutationTable {
        PermutationTable::shuffled(&mut Lcg::new(seed))
    }

    #[test]
    fn test_first_half_is_permutation() {
        for seed in [0, 1, 42, 1337, 0xDEAD_BEEF, u32::MAX] {
            let perm = table(seed);
            let mut seen = [false; TABLE_SIZE];
            for &value in &perm.as_slice()[..TABLE_SIZE] {
                assert!(!seen[value as usize], "value {} repeated for seed {}", value, seed);
                seen[value as usize] = true;
            }
            assert!(seen.iter().all(|&s| s), "seed {} missing values", seed);
        }
    }

    #[test]
    fn test_second_half_mirrors_first() {
        let perm = table(1337);
        let (low, high) = perm.as_slice().split_at(TABLE_SIZE);
        assert_eq!(low, high);
    }

    #[test]
    fn test_known_prefixes() {
        assert_eq!(&table(0).as_slice()[..8], &[2, 8, 16, 168, 0, 59, 140, 241]);
        assert_eq!(&table(1337).as_slice()[..8], &[148, 192, 161, 242, 34, 130, 59, 71]);
    }

    #[test]
    fn test_consumes_255_draws() {
        let mut rng = Lcg::new(1337);
        let _ = PermutationTable::shuffled(&mut rng);
        assert_eq!(rng.state(), 1_414_191_554);
    }

    #[test]
    fn test_different_seeds_differ() {
        assert_ne!(table(1), table(2));
    }
}

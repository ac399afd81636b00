use legacy_keccak::{Keccak256, KeccakHasher, MiniDigest, Variant};
use proptest::prelude::*;
use sha3::Digest as _;

fn variant_strategy() -> impl Strategy<Value = Variant> {
    prop::sample::select(Variant::ALL.to_vec())
}

fn reference(variant: Variant, input: &[u8]) -> Vec<u8> {
    match variant {
        Variant::Keccak224 => sha3::Keccak224::digest(input).to_vec(),
        Variant::Keccak256 => sha3::Keccak256::digest(input).to_vec(),
        Variant::Keccak384 => sha3::Keccak384::digest(input).to_vec(),
        Variant::Keccak512 => sha3::Keccak512::digest(input).to_vec(),
    }
}

fn one_shot(variant: Variant, input: &[u8]) -> Vec<u8> {
    let mut hasher = KeccakHasher::new(variant);
    hasher.update(input);
    hasher.finalize().to_vec()
}

#[test]
fn every_split_of_a_block_boundary_message() {
    for variant in Variant::ALL {
        let len = 2 * variant.block_size() + 3;
        let message: Vec<u8> = (0..len).map(|i| (i as u8).wrapping_mul(13)).collect();
        let expected = one_shot(variant, &message);

        for split in 0..=len {
            let (a, b) = message.split_at(split);
            let mut hasher = KeccakHasher::new(variant);
            hasher.update(a);
            hasher.update(b);
            assert_eq!(hasher.finalize().to_vec(), expected, "{variant} split at {split}");
        }
    }
}

#[test]
fn matches_rustcrypto_at_rate_boundaries() {
    for variant in Variant::ALL {
        let rate = variant.block_size();
        for len in [rate - 1, rate, rate + 1, 2 * rate - 1, 2 * rate, 3 * rate + 7] {
            let input: Vec<u8> = (0..len).map(|i| (i % 251) as u8).collect();
            assert_eq!(one_shot(variant, &input), reference(variant, &input), "{variant} len {len}");
        }
    }
}

proptest! {
    #[test]
    fn streaming_equivalence(
        variant in variant_strategy(),
        message in prop::collection::vec(any::<u8>(), 0..600),
        cuts in prop::collection::vec(any::<prop::sample::Index>(), 0..8),
    ) {
        let mut points: Vec<usize> = cuts.iter().map(|c| c.index(message.len() + 1)).collect();
        points.sort_unstable();

        let mut hasher = KeccakHasher::new(variant);
        let mut start = 0;
        for point in points.into_iter().chain([message.len()]) {
            hasher.update(&message[start..point]);
            prop_assert!(hasher.buffered_len() < hasher.block_size());
            start = point;
        }
        prop_assert_eq!(hasher.finalize().to_vec(), one_shot(variant, &message));
    }

    #[test]
    fn agrees_with_rustcrypto(
        variant in variant_strategy(),
        message in prop::collection::vec(any::<u8>(), 0..1000),
    ) {
        prop_assert_eq!(one_shot(variant, &message), reference(variant, &message));
    }

    #[test]
    fn reset_does_not_leak(
        variant in variant_strategy(),
        first in prop::collection::vec(any::<u8>(), 0..400),
        second in prop::collection::vec(any::<u8>(), 0..400),
    ) {
        let mut reused = KeccakHasher::new(variant);
        reused.update(&first);
        let _ = reused.finalize_hex_reset();
        reused.update(&second);
        prop_assert_eq!(reused.finalize_reset().to_vec(), one_shot(variant, &second));
    }

    #[test]
    fn deterministic(message in prop::collection::vec(any::<u8>(), 0..300)) {
        let first = <Keccak256 as MiniDigest>::digest(&message);
        let second = <Keccak256 as MiniDigest>::digest(&message);
        prop_assert_eq!(first, second);
        prop_assert_eq!(one_shot(Variant::Keccak256, &message), first.to_vec());
    }
}

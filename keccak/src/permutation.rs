// Based on https://github.com/RustCrypto/sponges/blob/13e501fa4e9b7d23c550a53f75e27ec291afc32a/keccak/src/lib.rs implementation

//! Keccak-f\[1600\] permutation.

/// Number of 64-bit lanes in the 1600-bit state.
pub const PLEN: usize = 25;

/// Rounds per permutation call.
pub const KECCAK_F1600_ROUND_COUNT: usize = 24;

/// Rotation offsets in traversal order of [`PI`].
const RHO: [u32; 24] = [
    1, 3, 6, 10, 15, 21, 28, 36, 45, 55, 2, 14, 27, 41, 56, 8, 25, 43, 62, 18, 39, 61, 20, 44,
];

/// Lane visited at each step of the combined rho/pi cycle, starting after lane 1.
const PI: [usize; 24] = [
    10, 7, 11, 17, 18, 3, 5, 16, 8, 21, 24, 4, 15, 23, 19, 13, 12, 2, 20, 14, 22, 9, 6, 1,
];

const RC: [u64; KECCAK_F1600_ROUND_COUNT] = [
    0x0000000000000001,
    0x0000000000008082,
    0x800000000000808a,
    0x8000000080008000,
    0x000000000000808b,
    0x0000000080000001,
    0x8000000080008081,
    0x8000000000008009,
    0x000000000000008a,
    0x0000000000000088,
    0x0000000080008009,
    0x000000008000000a,
    0x000000008000808b,
    0x800000000000008b,
    0x8000000000008089,
    0x8000000000008003,
    0x8000000000008002,
    0x8000000000000080,
    0x000000000000800a,
    0x800000008000000a,
    0x8000000080008081,
    0x8000000000008080,
    0x0000000080000001,
    0x8000000080008008,
];

/// Keccak-f\[1600\] applied in place to 25 lanes indexed `x + 5 * y`.
///
/// ```
/// // Test vectors are from KeccakCodePackage
/// let mut lanes = [0u64; 25];
///
/// legacy_keccak::keccak_f1600(&mut lanes);
/// assert_eq!(lanes[0], 0xF1258F7940E1DDE7);
/// assert_eq!(lanes[24], 0xEAF1FF7B5CECA249);
/// ```
#[allow(unused_assignments)]
pub const fn keccak_f1600(state: &mut [u64; PLEN]) {
    let mut round = 0;
    while round < KECCAK_F1600_ROUND_COUNT {
        let mut array = [0u64; 5];

        // Theta
        unroll5!(x, {
            unroll5!(y, {
                array[x] ^= state[5 * y + x];
            });
        });

        unroll5!(x, {
            let d = array[(x + 4) % 5] ^ array[(x + 1) % 5].rotate_left(1);
            unroll5!(y, {
                state[5 * y + x] ^= d;
            });
        });

        // Rho and pi
        let mut last = state[1];
        unroll24!(x, {
            array[0] = state[PI[x]];
            state[PI[x]] = last.rotate_left(RHO[x]);
            last = array[0];
        });

        // Chi
        unroll5!(y_step, {
            let y = 5 * y_step;

            unroll5!(x, {
                array[x] = state[y + x];
            });

            unroll5!(x, {
                let t1 = !array[(x + 1) % 5];
                let t2 = array[(x + 2) % 5];
                state[y + x] = array[x] ^ (t1 & t2);
            });
        });

        // Iota
        state[0] ^= RC[round];

        round += 1;
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn zero_state_matches_reference_lanes() {
        let mut state = [0u64; PLEN];

        keccak_f1600(&mut state);
        assert_eq!(
            state,
            [
                0xF1258F7940E1DDE7, 0x84D5CCF933C0478A, 0xD598261EA65AA9EE, 0xBD1547306F80494D,
                0x8B284E056253D057, 0xFF97A42D7F8E6FD4, 0x90FEE5A0A44647C4, 0x8C5BDA0CD6192E76,
                0xAD30A6F71B19059C, 0x30935AB7D08FFC64, 0xEB5AA93F2317D635, 0xA9A6E6260D712103,
                0x81A57C16DBCF555F, 0x43B831CD0347C826, 0x01F22F1A11A5569F, 0x05E5635A21D9AE61,
                0x64BEFEF28CC970F2, 0x613670957BC46611, 0xB87C5A554FD00ECB, 0x8C3EE88A1CCF32C8,
                0x940C7922AE3A2614, 0x1841F924A2C509E4, 0x16F53526E70465C2, 0x75F644E97F30A13B,
                0xEAF1FF7B5CECA249,
            ]
        );

        keccak_f1600(&mut state);
        assert_eq!(
            state,
            [
                0x2D5C954DF96ECB3C, 0x6A332CD07057B56D, 0x093D8D1270D76B6C, 0x8A20D9B25569D094,
                0x4F9C4F99E5E7F156, 0xF957B9A2DA65FB38, 0x85773DAE1275AF0D, 0xFAF4F247C3D810F7,
                0x1F1B9EE6F79A8759, 0xE4FECC0FEE98B425, 0x68CE61B6B9CE68A1, 0xDEEA66C4BA8F974F,
                0x33C43D836EAFB1F5, 0xE00654042719DBD9, 0x7CF8A9F009831265, 0xFD5449A6BF174743,
                0x97DDAD33D8994B40, 0x48EAD5FC5D0BE774, 0xE3B8C8EE55B7B03C, 0x91A0226E649E42E9,
                0x900E3129E7BADD7B, 0x202A9EC5FAA3CCE8, 0x5B3402464E1C3DB6, 0x609F4E62A44C1059,
                0x20D06CD26A8FBF5C,
            ]
        );
    }

    #[test]
    fn usable_in_const_context() {
        const ONCE: [u64; PLEN] = {
            let mut state = [0u64; PLEN];
            keccak_f1600(&mut state);
            state
        };
        assert_eq!(ONCE[0], 0xF1258F7940E1DDE7);
    }

    #[test]
    fn rho_offsets_are_distinct_and_in_range() {
        let mut seen = [false; 64];
        for &r in RHO.iter() {
            assert!(r > 0 && r < 64);
            assert!(!seen[r as usize]);
            seen[r as usize] = true;
        }
    }

    #[test]
    fn pi_visits_every_lane_but_the_first_once() {
        let mut seen = [false; PLEN];
        for &lane in PI.iter() {
            assert_ne!(lane, 0);
            assert!(!seen[lane]);
            seen[lane] = true;
        }
    }
}

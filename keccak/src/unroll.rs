// Based on https://github.com/RustCrypto/sponges/blob/13e501fa4e9b7d23c550a53f75e27ec291afc32a/keccak/src/lib.rs implementation

/// Unroll the given for loop
///
/// Example:
///
/// ```ignore
/// unroll5!(i, {
///     state[i] ^= parity[i];
/// });
/// ```
///
/// expands to
///
/// ```ignore
/// { const i: usize = 0; { state[i] ^= parity[i]; } }
/// { const i: usize = 1; { state[i] ^= parity[i]; } }
/// ...
/// { const i: usize = 4; { state[i] ^= parity[i]; } }
/// ```
#[cfg(not(feature = "no_unroll"))]
macro_rules! unroll5 {
    ($var:ident, $body:block) => {
        { const $var: usize = 0; $body; }
        { const $var: usize = 1; $body; }
        { const $var: usize = 2; $body; }
        { const $var: usize = 3; $body; }
        { const $var: usize = 4; $body; }
    };
}

#[cfg(feature = "no_unroll")]
macro_rules! unroll5 {
    ($var:ident, $body:block) => {
        let mut $var = 0;
        while $var < 5 {
            $body;
            $var += 1;
        }
    };
}

/// Unroll the given for loop over the 24 steps of the rho/pi lane cycle
#[cfg(not(feature = "no_unroll"))]
macro_rules! unroll24 {
    ($var: ident, $body: block) => {
        { const $var: usize = 0; $body; }
        { const $var: usize = 1; $body; }
        { const $var: usize = 2; $body; }
        { const $var: usize = 3; $body; }
        { const $var: usize = 4; $body; }
        { const $var: usize = 5; $body; }
        { const $var: usize = 6; $body; }
        { const $var: usize = 7; $body; }
        { const $var: usize = 8; $body; }
        { const $var: usize = 9; $body; }
        { const $var: usize = 10; $body; }
        { const $var: usize = 11; $body; }
        { const $var: usize = 12; $body; }
        { const $var: usize = 13; $body; }
        { const $var: usize = 14; $body; }
        { const $var: usize = 15; $body; }
        { const $var: usize = 16; $body; }
        { const $var: usize = 17; $body; }
        { const $var: usize = 18; $body; }
        { const $var: usize = 19; $body; }
        { const $var: usize = 20; $body; }
        { const $var: usize = 21; $body; }
        { const $var: usize = 22; $body; }
        { const $var: usize = 23; $body; }
    };
}

#[cfg(feature = "no_unroll")]
macro_rules! unroll24 {
    ($var:ident, $body:block) => {
        let mut $var = 0;
        while $var < 24 {
            $body;
            $var += 1;
        }
    };
}

//! Sponge state: absorption of arbitrary input, pad10*1 padding and digest extraction.

use crate::permutation::{keccak_f1600, PLEN};
use crate::variant::{SpongeParams, Variant, MAX_BLOCK_SIZE, STATE_BYTES};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// First padding byte of the original Keccak submission. FIPS 202 uses 0x06 instead.
pub const PAD_FIRST: u8 = 0x01;
/// Set on the last byte of every padded block.
pub const PAD_LAST: u8 = 0x80;

#[derive(Clone)]
struct BlockBuffer {
    bytes: [u8; MAX_BLOCK_SIZE],
    filled: usize,
}

impl BlockBuffer {
    const fn new() -> Self {
        Self {
            bytes: [0u8; MAX_BLOCK_SIZE],
            filled: 0,
        }
    }

    fn append(&mut self, input: &[u8], block_size: usize) {
        debug_assert!(input.len() <= block_size - self.filled);
        self.bytes[self.filled..self.filled + input.len()].copy_from_slice(input);
        self.filled += input.len();
    }

    fn clear(&mut self) {
        self.zeroize();
    }
}

impl Zeroize for BlockBuffer {
    fn zeroize(&mut self) {
        self.bytes.zeroize();
        self.filled.zeroize();
    }
}

/// XOR one rate-sized block into the leading lanes and permute.
#[inline]
fn absorb_block(lanes: &mut [u64; PLEN], block: &[u8]) {
    debug_assert!(block.len() % 8 == 0);
    for (chunk, lane) in block.chunks_exact(8).zip(lanes.iter_mut()) {
        let mut word = [0u8; 8];
        word.copy_from_slice(chunk);
        *lane ^= u64::from_le_bytes(word);
    }
    keccak_f1600(lanes);
}

/// 1600-bit Keccak state together with the not yet absorbed tail of the input.
///
/// The lanes and the buffered tail are wiped when the state is reset or dropped.
#[derive(Clone)]
pub struct SpongeState {
    lanes: [u64; PLEN],
    params: SpongeParams,
    bytes_processed: u64,
    buffer: BlockBuffer,
}

impl SpongeState {
    /// Empty state for `variant`.
    pub const fn new(variant: Variant) -> Self {
        Self {
            lanes: [0u64; PLEN],
            params: variant.params(),
            bytes_processed: 0,
            buffer: BlockBuffer::new(),
        }
    }

    /// Rate and digest length of this state.
    pub const fn params(&self) -> SpongeParams {
        self.params
    }

    /// The 25 lanes, lane `x + 5 * y` at index `x + 5 * y`.
    pub const fn lanes(&self) -> &[u64; PLEN] {
        &self.lanes
    }

    /// Bytes consumed by full-block permutations so far.
    pub const fn bytes_processed(&self) -> u64 {
        self.bytes_processed
    }

    /// Bytes waiting in the block buffer. Always less than the block size between calls.
    pub const fn buffered_len(&self) -> usize {
        self.buffer.filled
    }

    /// Lanes serialized little-endian, lane 0 first.
    pub fn state_bytes(&self) -> [u8; STATE_BYTES] {
        let mut out = [0u8; STATE_BYTES];
        for (chunk, lane) in out.chunks_exact_mut(8).zip(self.lanes.iter()) {
            chunk.copy_from_slice(&lane.to_le_bytes());
        }
        out
    }

    /// Absorb bytes. Full blocks are permuted right away, the rest is buffered.
    pub fn absorb(&mut self, mut input: &[u8]) {
        let block_size = self.params.block_size;

        // Top up a partially filled buffer first
        if self.buffer.filled > 0 {
            let to_take = (block_size - self.buffer.filled).min(input.len());
            let (head, rest) = input.split_at(to_take);
            self.buffer.append(head, block_size);
            input = rest;

            if self.buffer.filled == block_size {
                absorb_block(&mut self.lanes, &self.buffer.bytes[..block_size]);
                self.bytes_processed += block_size as u64;
                self.buffer.clear();
            }
        }

        // Whole blocks straight from the input
        let mut blocks = input.chunks_exact(block_size);
        for block in &mut blocks {
            absorb_block(&mut self.lanes, block);
            self.bytes_processed += block_size as u64;
        }

        let tail = blocks.remainder();
        if !tail.is_empty() {
            self.buffer.append(tail, block_size);
        }
        debug_assert!(self.buffer.filled < block_size);
    }

    /// Apply pad10*1 to the buffered tail and run the final permutation.
    fn pad_and_permute(&mut self) {
        let block_size = self.params.block_size;
        let filled = self.buffer.filled;
        debug_assert!(filled < block_size);

        let block = &mut self.buffer.bytes[..block_size];
        block[filled] = PAD_FIRST;
        block[filled + 1..].fill(0);
        block[block_size - 1] |= PAD_LAST;

        absorb_block(&mut self.lanes, block);
        self.buffer.clear();
    }

    /// Copy the leading `out.len()` bytes of the little-endian lanes into `out`.
    ///
    /// Keccak-224 takes only the low half of its fourth lane.
    fn squeeze_into(&self, out: &mut [u8]) {
        debug_assert!(out.len() <= self.params.block_size);
        for (chunk, lane) in out.chunks_mut(8).zip(self.lanes.iter()) {
            let bytes = lane.to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    /// Pad, permute and write the digest into `out`, which must be exactly
    /// `digest_len` bytes. The state is left finalized; callers reset or drop it.
    pub fn finalize_into(&mut self, out: &mut [u8]) {
        debug_assert_eq!(out.len(), self.params.digest_len);
        self.pad_and_permute();
        self.squeeze_into(out);
    }

    /// Wipe the state back to the empty message.
    pub fn reset(&mut self) {
        self.zeroize();
    }
}

impl Zeroize for SpongeState {
    fn zeroize(&mut self) {
        self.lanes.zeroize();
        self.bytes_processed.zeroize();
        self.buffer.zeroize();
    }
}

impl Drop for SpongeState {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizeOnDrop for SpongeState {}

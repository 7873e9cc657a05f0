/*
 * SPDX-FileCopyrightText: 2025 Tommaso Fontana
 * SPDX-FileCopyrightText: 2025 Inria
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use core::error::Error;

/// Maximum number of bits accepted by a single
/// [`write_bits`](BitWrite::write_bits)/[`read_bits`](BitRead::read_bits)
/// call (the width of the value word).
pub const MAX_BITS: usize = 64;

/// The error returned when a read requires more bits than the buffer holds.
///
/// There is no recovery: the stream carries no length information, so once a
/// request overruns the buffer the out-of-band width agreement between
/// producer and consumer has already been broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferUnderrun {
    /// The bit position of the cursor when the failing read was issued.
    pub bit_pos: u64,
    /// The number of bits the failing read asked for.
    pub requested: usize,
    /// The number of bits that were actually left in the buffer.
    pub available: u64,
}

impl Error for BufferUnderrun {}
impl core::fmt::Display for BufferUnderrun {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Buffer underrun at bit position {}: {} bits requested, {} available",
            self.bit_pos, self.requested, self.available
        )
    }
}

/// Sequential, streaming bit-by-bit writes.
///
/// Bits enter the stream from the low end of each value, and within each
/// output byte they fill positions from the least-significant bit upward.
pub trait BitWrite {
    type Error: Error + Send + Sync + 'static;

    /// Write the lowest `n_bits` bits of `value` to the stream and return the
    /// number of bits written, that is, `n_bits`.
    ///
    /// Implementors should panic if `n_bits` is greater than [`MAX_BITS`].
    /// Moreover, if the feature `checks` is enabled they should check that
    /// the remaining bits of `value` are zero.
    fn write_bits(&mut self, value: u64, n_bits: usize) -> Result<usize, Self::Error>;

    /// Write a single bit to the stream and return the number of bits
    /// written, that is, 1.
    fn write_bit(&mut self, bit: bool) -> Result<usize, Self::Error> {
        self.write_bits(bit as u64, 1)
    }

    /// Flush the bit buffer, padding the unused high bits of the last byte
    /// with zeros.
    ///
    /// Returns the number of bits written from the bit buffer (not including
    /// padding).
    fn flush(&mut self) -> Result<usize, Self::Error>;
}

/// Sequential, streaming bit-by-bit reads.
///
/// The first bit read from a byte is its least-significant bit, and the first
/// bit read by a call lands in the least-significant position of the result,
/// mirroring the [`BitWrite`] convention.
pub trait BitRead {
    type Error: Error + Send + Sync + 'static;

    /// Read `n_bits` bits and return them in the lowest bits.
    ///
    /// Implementors should panic if `n_bits` is greater than [`MAX_BITS`].
    fn read_bits(&mut self, n_bits: usize) -> Result<u64, Self::Error>;

    /// Read a single bit.
    fn read_bit(&mut self) -> Result<bool, Self::Error> {
        Ok(self.read_bits(1)? != 0)
    }
}

/*
 * SPDX-FileCopyrightText: 2025 Tommaso Fontana
 * SPDX-FileCopyrightText: 2025 Inria
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use core::convert::Infallible;

#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};

use crate::traits::*;
use alloc::vec::Vec;

/// An implementation of [`BitWrite`] packing values into a [`Vec<u8>`].
///
/// Bits accumulate in a one-byte buffer, least-significant position first,
/// and every completed byte is flushed into the output vector, so after
/// [`flush`](BitWriter::flush) the output holds exactly
/// `ceil(bits_written / 8)` bytes. [`as_bytes`](BitWriter::as_bytes) never
/// flushes: a partial byte is not observable until [`flush`](BitWriter::flush)
/// pads it, which is why [`into_bytes`](BitWriter::into_bytes), which flushes
/// before returning the output, is the preferred way to end a session.
///
/// # Example
/// ```
/// use packed_bits::prelude::*;
///
/// let mut writer = BitWriter::new();
///
/// // 5 bits so far: nothing observable yet
/// writer.write(0b101, 3);
/// writer.write(0b11, 2);
/// assert_eq!(writer.bits_written(), 5);
/// assert_eq!(writer.as_bytes(), &[]);
///
/// // flushing pads the high bits of the partial byte with zeros
/// writer.flush();
/// assert_eq!(writer.as_bytes(), &[0b00011101]);
///
/// // a write may span several bytes
/// writer.write(u16::MAX as u64, 16);
/// assert_eq!(writer.into_bytes(), vec![0b00011101, 0xFF, 0xFF]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
pub struct BitWriter {
    /// Accumulator for the bits of the byte currently being filled,
    /// occupying positions from the least-significant bit upward.
    pending_byte: u8,
    /// Number of unoccupied bit positions in `pending_byte`, in `[1, 8]`.
    free_bits: usize,
    /// The finalized bytes, in write order.
    output: Vec<u8>,
    /// Total number of data bits accepted by `write`, padding excluded.
    bits_written: usize,
}

impl core::default::Default for BitWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl BitWriter {
    /// Create a new, empty [`BitWriter`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            pending_byte: 0,
            free_bits: 8,
            output: Vec::new(),
            bits_written: 0,
        }
    }

    /// Create a new [`BitWriter`] whose output vector has room for
    /// `n_bytes` bytes before reallocating.
    #[must_use]
    pub fn with_capacity(n_bytes: usize) -> Self {
        Self {
            pending_byte: 0,
            free_bits: 8,
            output: Vec::with_capacity(n_bytes),
            bits_written: 0,
        }
    }

    /// Append the lowest `n_bits` bits of `value` to the stream, low end
    /// first.
    ///
    /// Bits of `value` beyond position `n_bits - 1` are masked off, unless
    /// the feature `checks` is enabled, in which case they must be zero.
    /// If `n_bits` is zero this is a no-op. Depending on the cursor
    /// alignment, a single call may push zero, one, or many bytes into the
    /// output.
    ///
    /// # Panics
    /// If `n_bits` is greater than [`MAX_BITS`].
    pub fn write(&mut self, mut value: u64, n_bits: usize) {
        assert!(n_bits <= MAX_BITS);
        #[cfg(feature = "checks")]
        assert!(
            n_bits == MAX_BITS || value >> n_bits == 0,
            "value {} does not fit in {} bits",
            value,
            n_bits
        );
        self.bits_written += n_bits;
        let mut remaining = n_bits;
        while remaining != 0 {
            let n = remaining.min(self.free_bits);
            let mask = (1_u64 << n) - 1;
            self.pending_byte |= ((value & mask) as u8) << (8 - self.free_bits);
            self.free_bits -= n;
            remaining -= n;
            value >>= n;
            if self.free_bits == 0 {
                self.output.push(self.pending_byte);
                self.pending_byte = 0;
                self.free_bits = 8;
            }
        }
    }

    /// Push the partial byte into the output, padding its unused high bits
    /// with zeros.
    ///
    /// A no-op on a byte-aligned writer, so flushing is idempotent and the
    /// output length is always `ceil(bits written / 8)`.
    pub fn flush(&mut self) {
        debug_assert!((1..=8).contains(&self.free_bits));
        if self.free_bits != 8 {
            self.output.push(self.pending_byte);
            self.pending_byte = 0;
            self.free_bits = 8;
        }
    }

    /// The finalized bytes written so far.
    ///
    /// Does not flush: bits accumulated since the last byte boundary are not
    /// included. Call [`flush`](BitWriter::flush) first, or use
    /// [`into_bytes`](BitWriter::into_bytes), to observe a non-aligned tail.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.output
    }

    /// Flush and return the output, consuming the writer.
    #[must_use]
    pub fn into_bytes(mut self) -> Vec<u8> {
        self.flush();
        self.output
    }

    /// Total number of data bits accepted by [`write`](BitWriter::write)
    /// (flush padding excluded).
    #[must_use]
    pub fn bits_written(&self) -> usize {
        self.bits_written
    }
}

impl BitWrite for BitWriter {
    type Error = Infallible;

    #[inline]
    fn write_bits(&mut self, value: u64, n_bits: usize) -> Result<usize, Infallible> {
        self.write(value, n_bits);
        Ok(n_bits)
    }

    #[inline]
    fn flush(&mut self) -> Result<usize, Infallible> {
        let pending = 8 - self.free_bits;
        BitWriter::flush(self);
        Ok(pending)
    }
}

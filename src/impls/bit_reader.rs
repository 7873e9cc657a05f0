/*
 * SPDX-FileCopyrightText: 2025 Tommaso Fontana
 * SPDX-FileCopyrightText: 2025 Inria
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};

use crate::traits::*;

/// An implementation of [`BitRead`] for a byte slice.
///
/// The buffer is read-only for the life of the reader and can be any
/// `AsRef<[u8]>`, owned or borrowed. The cursor starts at the
/// least-significant bit of the first byte; the reader has no knowledge of
/// the widths that produced the buffer, so the caller must request them in
/// write order.
///
/// # Example
/// ```
/// use packed_bits::prelude::*;
///
/// let mut reader = BitReader::new([0b00011101_u8]);
///
/// assert_eq!(reader.read(3).unwrap(), 0b101);
/// assert_eq!(reader.read(2).unwrap(), 0b11);
/// assert_eq!(reader.remaining_bits(), 3);
///
/// // overrunning the buffer fails without moving the cursor
/// assert!(reader.read(4).is_err());
/// assert_eq!(reader.bit_pos(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
pub struct BitReader<B: AsRef<[u8]>> {
    data: B,
    /// Index of the byte under the cursor, at most `data.len()`.
    byte_index: usize,
    /// Bit offset within the byte under the cursor, in `[0, 8)`, counted
    /// from the least-significant bit.
    bit_index: usize,
}

impl<B: AsRef<[u8]>> BitReader<B> {
    /// Create a new [`BitReader`] positioned at the first bit of `data`.
    #[must_use]
    pub fn new(data: B) -> Self {
        Self {
            data,
            byte_index: 0,
            bit_index: 0,
        }
    }

    /// Return the underlying buffer, consuming the reader.
    pub fn into_inner(self) -> B {
        self.data
    }

    /// The current cursor position in bits from the start of the buffer.
    #[must_use]
    pub fn bit_pos(&self) -> u64 {
        (self.byte_index * 8 + self.bit_index) as u64
    }

    /// The number of bits between the cursor and the end of the buffer.
    #[must_use]
    pub fn remaining_bits(&self) -> u64 {
        (self.data.as_ref().len() * 8) as u64 - self.bit_pos()
    }

    /// Read `n_bits` consecutive bits starting at the cursor and return them
    /// in the lowest bits, first bit read in the least-significant position,
    /// advancing the cursor.
    ///
    /// `read(0)` returns 0 without moving the cursor. If fewer than `n_bits`
    /// bits remain, the call fails with [`BufferUnderrun`] before any cursor
    /// movement; it never zero-fills.
    ///
    /// # Panics
    /// If `n_bits` is greater than [`MAX_BITS`].
    pub fn read(&mut self, n_bits: usize) -> Result<u64, BufferUnderrun> {
        assert!(n_bits <= MAX_BITS);
        if n_bits as u64 > self.remaining_bits() {
            return Err(BufferUnderrun {
                bit_pos: self.bit_pos(),
                requested: n_bits,
                available: self.remaining_bits(),
            });
        }
        let data = self.data.as_ref();
        let mut value = 0;
        let mut bits_read = 0;
        while bits_read != n_bits {
            let n = (n_bits - bits_read).min(8 - self.bit_index);
            let mask = ((1_usize << n) - 1) as u8;
            let bits = (data[self.byte_index] >> self.bit_index) & mask;
            value |= (bits as u64) << bits_read;
            self.bit_index += n;
            if self.bit_index == 8 {
                self.bit_index = 0;
                self.byte_index += 1;
            }
            bits_read += n;
        }
        Ok(value)
    }
}

impl<B: AsRef<[u8]>> BitRead for BitReader<B> {
    type Error = BufferUnderrun;

    #[inline]
    fn read_bits(&mut self, n_bits: usize) -> Result<u64, BufferUnderrun> {
        self.read(n_bits)
    }
}

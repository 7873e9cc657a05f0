/*
 * SPDX-FileCopyrightText: 2025 Tommaso Fontana
 * SPDX-FileCopyrightText: 2025 Inria
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Implementations of bit streams.

[`BitWriter`] packs values into a growing byte buffer and [`BitReader`] reads
them back from any `AsRef<[u8]>`. Both fix the bit order to
least-significant-bit first within each byte; the byte order is the write
order. [`BitWriter`] requires the `alloc` feature.

*/

#[cfg(feature = "alloc")]
mod bit_writer;
#[cfg(feature = "alloc")]
pub use bit_writer::BitWriter;

mod bit_reader;
pub use bit_reader::BitReader;

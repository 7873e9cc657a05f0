/*
 * SPDX-FileCopyrightText: 2025 Tommaso Fontana
 * SPDX-FileCopyrightText: 2025 Inria
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{BitRead, BitWrite};

/// Structures that can write themselves to a bit stream.
///
/// The stream carries no self-description, so implementors own the field
/// order and the widths; [`UnpackBits`] must read them back identically.
pub trait PackBits {
    /// Write self to a bit stream.
    ///
    /// Return the number of bits written.
    fn pack<B: BitWrite>(&self, bitstream: &mut B) -> Result<usize, B::Error>;
}

/// Structures that can read themselves from a bit stream.
pub trait UnpackBits {
    /// The type returned by the unpacking.
    type UnpackType;
    /// Read a value of type [`UnpackBits::UnpackType`] from a bit stream,
    /// consuming exactly the bits that [`PackBits::pack`] wrote.
    fn unpack<B: BitRead>(bitstream: &mut B) -> Result<Self::UnpackType, B::Error>;
}

impl PackBits for bool {
    fn pack<B: BitWrite>(&self, bitstream: &mut B) -> Result<usize, B::Error> {
        bitstream.write_bit(*self)
    }
}

impl UnpackBits for bool {
    type UnpackType = bool;
    fn unpack<B: BitRead>(bitstream: &mut B) -> Result<bool, B::Error> {
        bitstream.read_bit()
    }
}

/*
 * SPDX-FileCopyrightText: 2025 Tommaso Fontana
 * SPDX-FileCopyrightText: 2025 Inria
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use packed_bits::prelude::*;

#[test]
fn test_two_fields_one_byte() {
    let mut writer = BitWriter::new();
    writer.write(0b101, 3);
    writer.write(0b11, 2);
    writer.flush();
    // LSB-first: bit layout low-to-high is 1,0,1,1,1
    assert_eq!(writer.as_bytes(), &[29]);

    let mut reader = BitReader::new(writer.into_bytes());
    assert_eq!(reader.read(3).unwrap(), 5);
    assert_eq!(reader.read(2).unwrap(), 3);
}

#[test]
fn test_full_bytes() {
    let mut writer = BitWriter::new();
    writer.write(0xFF, 8);
    writer.write(0xFF, 8);
    writer.flush();
    assert_eq!(writer.as_bytes(), &[255, 255]);

    let mut reader = BitReader::new(writer.into_bytes());
    assert_eq!(reader.read(8).unwrap(), 255);
    assert_eq!(reader.read(8).unwrap(), 255);
}

#[test]
fn test_padding_and_underrun() {
    let mut writer = BitWriter::new();
    for _ in 0..5 {
        writer.write(1, 1);
    }
    writer.flush();
    // 3 padding zeros in the high end
    assert_eq!(writer.as_bytes(), &[31]);

    let mut reader = BitReader::new(writer.into_bytes());
    for _ in 0..5 {
        assert_eq!(reader.read(1).unwrap(), 1);
    }
    // the padding is readable and zero
    assert_eq!(reader.read(1).unwrap(), 0);
    assert_eq!(reader.read(2).unwrap(), 0);
    // but no more bytes exist
    assert_eq!(
        reader.read(1),
        Err(BufferUnderrun {
            bit_pos: 8,
            requested: 1,
            available: 0,
        })
    );
}

#[test]
fn test_excess_bits_are_masked() {
    let mut writer = BitWriter::new();
    writer.write(u64::MAX, 4);
    writer.write(0x100, 8);
    let bytes = writer.into_bytes();
    assert_eq!(bytes, vec![0x0F, 0x0]);

    let mut reader = BitReader::new(bytes);
    assert_eq!(reader.read(4).unwrap(), 0xF);
    assert_eq!(reader.read(8).unwrap(), 0);
}

#[test]
fn test_zero_length_noops() {
    let mut writer = BitWriter::new();
    writer.write(u64::MAX, 0);
    assert_eq!(writer.bits_written(), 0);
    writer.flush();
    assert_eq!(writer.as_bytes(), &[]);

    let mut reader = BitReader::new([0xFF_u8]);
    assert_eq!(reader.read(0).unwrap(), 0);
    assert_eq!(reader.bit_pos(), 0);
    assert_eq!(reader.remaining_bits(), 8);
}

#[test]
fn test_as_bytes_is_idempotent() {
    let mut writer = BitWriter::new();
    writer.write(0b1011, 4);
    writer.flush();
    let first = writer.as_bytes().to_vec();
    assert_eq!(writer.as_bytes(), first);
    // more writes do change it
    writer.write(1, 1);
    writer.flush();
    assert_ne!(writer.as_bytes(), first);
}

#[test]
fn test_byte_count_law() {
    for total_bits in 0..100 {
        let mut writer = BitWriter::new();
        for _ in 0..total_bits {
            writer.write(1, 1);
        }
        assert_eq!(writer.bits_written(), total_bits);
        assert_eq!(writer.into_bytes().len(), total_bits.div_ceil(8));
    }
}

#[test]
fn test_underrun_reporting() {
    let mut reader = BitReader::new([0xAB_u8, 0xCD]);
    assert_eq!(reader.read(12).unwrap(), 0xDAB);
    let err = reader.read(8).unwrap_err();
    assert_eq!(
        err,
        BufferUnderrun {
            bit_pos: 12,
            requested: 8,
            available: 4,
        }
    );
    assert_eq!(
        err.to_string(),
        "Buffer underrun at bit position 12: 8 bits requested, 4 available"
    );
    // the reader is still usable at its previous position
    assert_eq!(reader.read(4).unwrap(), 0xC);
}

#[test]
fn test_trait_surface() {
    let mut writer = BitWriter::new();
    assert_eq!(BitWrite::write_bits(&mut writer, 0b10, 2).unwrap(), 2);
    assert_eq!(BitWrite::write_bit(&mut writer, true).unwrap(), 1);
    assert_eq!(BitWrite::flush(&mut writer).unwrap(), 3);

    let mut reader = BitReader::new(writer.into_bytes());
    assert_eq!(BitRead::read_bits(&mut reader, 2).unwrap(), 0b10);
    assert!(BitRead::read_bit(&mut reader).unwrap());
}

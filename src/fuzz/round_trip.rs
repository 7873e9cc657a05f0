/*
 * SPDX-FileCopyrightText: 2025 Inria
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::prelude::*;
use alloc::vec::Vec;
use arbitrary::Arbitrary;

#[derive(Arbitrary, Debug)]
pub struct FuzzCase {
    commands: Vec<RandomCommand>,
}

#[derive(Arbitrary, Debug)]
pub enum RandomCommand {
    WriteBits(u64, u8),
    WriteBit(bool),
    Flush,
}

enum ReadStep {
    Value(u64, usize),
    // a mid-stream flush padded the writer to a byte boundary
    Align,
}

pub fn harness(data: FuzzCase) {
    let mut writer = BitWriter::new();
    let mut steps = Vec::new();
    let mut data_bits = 0;
    let mut stream_bits = 0;
    for command in data.commands {
        match command {
            RandomCommand::WriteBits(value, n_bits) => {
                let n_bits = (n_bits % 65) as usize;
                let value = if n_bits == 64 {
                    value
                } else {
                    value & ((1_u64 << n_bits) - 1)
                };
                writer.write(value, n_bits);
                data_bits += n_bits;
                stream_bits += n_bits;
                steps.push(ReadStep::Value(value, n_bits));
            }
            RandomCommand::WriteBit(bit) => {
                let _ = BitWrite::write_bit(&mut writer, bit);
                data_bits += 1;
                stream_bits += 1;
                steps.push(ReadStep::Value(bit as u64, 1));
            }
            RandomCommand::Flush => {
                writer.flush();
                stream_bits += (8 - stream_bits % 8) % 8;
                steps.push(ReadStep::Align);
            }
        };
    }
    assert_eq!(writer.bits_written(), data_bits);

    let bytes = writer.into_bytes();
    stream_bits += (8 - stream_bits % 8) % 8;
    assert_eq!(bytes.len(), stream_bits / 8);

    let mut reader = BitReader::new(bytes.as_slice());
    for step in steps {
        match step {
            ReadStep::Value(value, n_bits) => {
                assert_eq!(reader.read(n_bits).unwrap(), value);
            }
            ReadStep::Align => {
                let padding = (8 - (reader.bit_pos() % 8) as usize) % 8;
                assert_eq!(reader.read(padding).unwrap(), 0);
            }
        }
    }

    // the final padding reads back as zeros, and nothing follows it
    let tail = reader.remaining_bits() as usize;
    assert!(tail < 8);
    assert_eq!(reader.read(tail).unwrap(), 0);
    assert_eq!(
        reader.read(1),
        Err(BufferUnderrun {
            bit_pos: stream_bits as u64,
            requested: 1,
            available: 0,
        })
    );
}

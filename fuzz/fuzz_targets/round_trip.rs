#![no_main]

use libfuzzer_sys::fuzz_target;
use packed_bits::fuzz::round_trip::{harness, FuzzCase};

fuzz_target!(|data: FuzzCase| harness(data));

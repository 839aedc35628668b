use std::env;

use tally_core::bits::{reverse_u16, reverse_u8};
use tally_core::{Crc16, CrcConfig, Variant};

const DEFAULT_ITERS: u64 = 500;
const DEFAULT_MAX_LEN: usize = 1024;
const DEFAULT_SEED: u64 = 0xA5A5_5A5A_1234_5678;

fn main() {
    let args: Vec<String> = env::args().collect();
    let iters = parse_arg(&args, "--iters")
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(DEFAULT_ITERS);
    let max_len = parse_arg(&args, "--max-len")
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(DEFAULT_MAX_LEN);
    let seed = env::var("TALLY_FUZZ_SEED")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(DEFAULT_SEED);

    let mut rng = XorShift64::new(seed);
    let mut stats = FuzzStats::default();

    for _ in 0..iters {
        let config = random_config(&mut rng);
        let data = random_bytes(&mut rng, max_len);
        run_case(&mut stats, config, &data, &mut rng);
    }

    println!(
        "fuzz-lite completed: {iters} iterations (reference ok: {}, split ok: {}, range ok: {})",
        stats.reference_ok, stats.split_ok, stats.range_ok
    );
}

fn parse_arg<'a>(args: &'a [String], name: &str) -> Option<&'a str> {
    args.iter()
        .position(|arg| arg == name)
        .and_then(|idx| args.get(idx + 1))
        .map(|s| s.as_str())
}

#[derive(Default)]
struct FuzzStats {
    reference_ok: u64,
    split_ok: u64,
    range_ok: u64,
}

fn random_config(rng: &mut XorShift64) -> CrcConfig {
    if rng.next_u64() % 2 == 0 {
        let variant = Variant::ALL[(rng.next_u64() as usize) % Variant::ALL.len()];
        variant.config()
    } else {
        CrcConfig {
            polynomial: rng.next_u64() as u16,
            initial_value: rng.next_u64() as u16,
            reflect_in: rng.next_u64() % 2 == 0,
            reflect_out: rng.next_u64() % 2 == 0,
            final_xor: rng.next_u64() as u16,
        }
    }
}

fn random_bytes(rng: &mut XorShift64, max_len: usize) -> Vec<u8> {
    let len = (rng.next_u64() as usize) % (max_len + 1);
    let mut bytes = vec![0u8; len];
    rng.fill_bytes(&mut bytes);
    bytes
}

fn run_case(stats: &mut FuzzStats, config: CrcConfig, data: &[u8], rng: &mut XorShift64) {
    let mut engine = Crc16::new(config);
    engine.update(data);
    let digest = engine.digest();

    let expected = reference_digest(config, data);
    if digest != expected {
        eprintln!("fuzz-lite: table digest {digest:04X} != reference {expected:04X} for {config:?}");
        std::process::exit(1);
    }
    stats.reference_ok += 1;

    let split = if data.is_empty() {
        0
    } else {
        (rng.next_u64() as usize) % (data.len() + 1)
    };
    let mut split_engine = Crc16::new(config);
    split_engine.update(&data[..split]);
    let running = split_engine.digest();
    if running != split_engine.digest() {
        eprintln!("fuzz-lite: digest read mutated state at split {split}");
        std::process::exit(1);
    }
    split_engine.update(&data[split..]);
    if split_engine.digest() != digest {
        eprintln!("fuzz-lite: split update diverged at {split} for {config:?}");
        std::process::exit(1);
    }
    stats.split_ok += 1;

    if !data.is_empty() {
        let offset = (rng.next_u64() as usize) % data.len();
        let length = (rng.next_u64() as usize) % (data.len() - offset + 1);

        let mut ranged = Crc16::new(config);
        if ranged.update_range(data, offset, length).is_err() {
            eprintln!("fuzz-lite: in-bounds range {offset}+{length} rejected");
            std::process::exit(1);
        }

        let mut sliced = Crc16::new(config);
        sliced.update(&data[offset..offset + length]);
        if ranged.digest() != sliced.digest() {
            eprintln!("fuzz-lite: ranged update diverged at {offset}+{length} for {config:?}");
            std::process::exit(1);
        }

        let before = ranged.digest();
        if ranged.update_range(data, data.len(), 1).is_ok() {
            eprintln!("fuzz-lite: out-of-bounds range accepted");
            std::process::exit(1);
        }
        if ranged.digest() != before {
            eprintln!("fuzz-lite: failed range mutated the register");
            std::process::exit(1);
        }
    }
    stats.range_ok += 1;
}

/// Bit-at-a-time digest with no lookup table, used as the independent
/// reference for the table-driven engine.
fn reference_digest(config: CrcConfig, data: &[u8]) -> u16 {
    let reflected = reverse_u16(config.polynomial);
    let mut state = config.initial_value;

    for &byte in data {
        let adjusted = if config.reflect_in {
            byte
        } else {
            reverse_u8(byte)
        };
        state ^= adjusted as u16;
        for _ in 0..8 {
            state = if state & 1 == 1 {
                (state >> 1) ^ reflected
            } else {
                state >> 1
            };
        }
    }

    if config.reflect_out {
        state ^ config.final_xor
    } else {
        reverse_u16(state) ^ config.final_xor
    }
}

struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    fn new(seed: u64) -> Self {
        Self { state: seed.max(1) }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    fn fill_bytes(&mut self, buf: &mut [u8]) {
        let mut offset = 0;
        while offset < buf.len() {
            let next = self.next_u64().to_le_bytes();
            let to_copy = std::cmp::min(next.len(), buf.len() - offset);
            buf[offset..offset + to_copy].copy_from_slice(&next[..to_copy]);
            offset += to_copy;
        }
    }
}

#![no_main]
use std::cell::RefCell;

use decimal_grammar::{Classification, Decimal, DecimalOptions};
use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use rand::rngs::SmallRng; // faster than StdRng
use rand::{Rng, RngCore, SeedableRng};

const HEADER: usize = 9; // 1 flag + two 4-byte bounds

thread_local! {
    // One SmallRng per thread, seeded once from the host OS
    static RNG: RefCell<SmallRng> =
        RefCell::new(SmallRng::from_os_rng());
}

/// Mostly characters a literal is typed from, plus a few that end it.
static CHAR_TABLE: &[u8] = b"0123456789012345678901234567890123456789.+-e, x";

/// Helper: borrow the thread-local RNG and run a closure with it.
fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    if size < HEADER || seed.is_multiple_of(10) {
        if max_size < HEADER {
            return fuzzer_mutate(data, size, max_size);
        }

        // 1) bound flags, 2) bounds
        data[0] = with_rng(|rng| rng.next_u32() as u8 & 0x3);
        data[1..5].copy_from_slice(&with_rng(|rng| rng.next_u32().to_le_bytes()));
        data[5..9].copy_from_slice(&with_rng(|rng| rng.next_u32().to_le_bytes()));

        HEADER + append_literal(&mut data[HEADER..], max_size - HEADER)
    } else {
        fuzzer_mutate(data, size, max_size)
    }
}

/// Append an optional sign and up to 24 literal-ish characters to `buf`,
/// never exceeding `limit`. Returns the number of bytes written.
fn append_literal(buf: &mut [u8], limit: usize) -> usize {
    with_rng(|rng| {
        let mut written = 0;
        if limit > 0 && rng.random_bool(0.3) {
            buf[0] = if rng.random_bool(0.5) { b'-' } else { b'+' };
            written += 1;
        }

        let n = rng.random_range(0..=24).min(limit - written);
        for _ in 0..n {
            buf[written] = CHAR_TABLE[rng.random_range(0..CHAR_TABLE.len())];
            written += 1;
        }
        written
    })
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

/// Decodes a bound as a hundredth-resolution value in roughly ±2e7.
fn bound(bytes: &[u8]) -> f64 {
    f64::from(i32::from_le_bytes(bytes.try_into().unwrap())) / 100.0
}

fn classify(data: &[u8]) {
    if data.len() < HEADER {
        return;
    }

    let flags = data[0];
    let mut min = (flags & 1 != 0).then(|| bound(&data[1..5]));
    let mut max = (flags & 2 != 0).then(|| bound(&data[5..9]));
    if let (Some(lo), Some(hi)) = (min, max) {
        if lo > hi {
            (min, max) = (Some(hi), Some(lo));
        }
    }

    let input = String::from_utf8_lossy(&data[HEADER..]).into_owned();
    let grammar = Decimal::new(DecimalOptions {
        min,
        max,
        ..Default::default()
    });

    let mut previous_rejected = false;
    for (prefix, verdict) in grammar.keystrokes(&input) {
        assert_eq!(verdict, grammar.classify(prefix), "{prefix:?}");

        if let Classification::Complete(value) = verdict {
            assert!(min.is_none_or(|min| min <= value), "{prefix:?} < {min:?}");
            assert!(max.is_none_or(|max| value <= max), "{prefix:?} > {max:?}");
        }

        // Digits typed after a rejection cannot revive the prefix.
        if previous_rejected && prefix.ends_with(|c: char| c.is_ascii_digit()) {
            assert!(verdict.is_rejected(), "{prefix:?} revived");
        }
        previous_rejected = verdict.is_rejected();
    }
}

fuzz_target!(|data: &[u8]| classify(data));

use alloc::{format, vec::Vec};
use std::thread;

use crate::{FixedTextBuffer, FormatFlags, Precision};

// Every thread formats through the same scratch digits; torn output would
// show up as a mismatch against `format!`.
#[test]
fn concurrent_formatting_never_tears_digits() {
    let workers: Vec<_> = (0..8_i64)
        .map(|worker| {
            thread::spawn(move || {
                let mut buf = FixedTextBuffer::with_capacity(64);
                for i in 0..2_000_i64 {
                    let value = (i * 7_919 + worker * 1_000_003) * if i % 2 == 0 { 1 } else { -1 };
                    buf.set_int(value, 0, FormatFlags::empty())
                        .append_char(' ')
                        .append_int(value.unsigned_abs(), 0, FormatFlags::HEX_UPPER)
                        .append_char(' ')
                        .append_float(0.25_f64, Precision::Fixed(2));
                    let expected = format!("{value} {:X} 0.25", value.unsigned_abs());
                    assert_eq!(buf, expected.as_str(), "worker {worker} iteration {i}");
                }
            })
        })
        .collect();

    for worker in workers {
        worker.join().unwrap();
    }
}

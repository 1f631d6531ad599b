#![no_main]
//! Drives a `FixedTextBuffer` with arbitrary edits and checks it against a
//! `Vec<char>` model that applies the same truncation rules.

use arbitrary::Arbitrary;
use fixedtext::{FixedTextBuffer, FormatFlags};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Op {
    Append(String),
    AppendInt(i64),
    AppendHex(u32),
    Remove(u8, u8),
    Substring(u8),
    Replace(String, String),
    PadLeft(u8),
    PadRight(u8),
    Trim,
    Truncate(u8),
    Clear,
}

#[derive(Debug, Arbitrary)]
struct Input {
    capacity: u8,
    ops: Vec<Op>,
}

fn push_all(model: &mut Vec<char>, capacity: usize, text: &str) {
    for c in text.chars() {
        if model.len() == capacity {
            break;
        }
        model.push(c);
    }
}

fn find(hay: &[char], needle: &[char], from: usize) -> Option<usize> {
    if needle.len() > hay.len() {
        return None;
    }
    (from..=hay.len() - needle.len()).find(|&i| hay[i..i + needle.len()] == *needle)
}

/// Model of `replace`, including the stop-on-overflow rule for growth.
fn replace(model: &mut Vec<char>, capacity: usize, old: &[char], new: &[char]) {
    if old.is_empty() || old == new {
        return;
    }
    let mut from = 0;
    while let Some(at) = find(model, old, from) {
        let overflow = new.len() > old.len() && model.len() + (new.len() - old.len()) > capacity;
        model.splice(at..at + old.len(), new.iter().copied());
        if overflow {
            model.truncate(capacity);
            return;
        }
        from = at + new.len();
    }
}

fuzz_target!(|input: Input| {
    let capacity = usize::from(input.capacity);
    let mut buf = FixedTextBuffer::with_capacity(capacity);
    let mut model: Vec<char> = Vec::new();

    for op in input.ops {
        match op {
            Op::Append(text) => {
                buf.append(text.as_str());
                push_all(&mut model, capacity, &text);
            }
            Op::AppendInt(v) => {
                buf.append(v);
                push_all(&mut model, capacity, &v.to_string());
            }
            Op::AppendHex(v) => {
                buf.append_int(v, 0, FormatFlags::HEX_LOWER);
                push_all(&mut model, capacity, &format!("{v:x}"));
            }
            Op::Remove(start, count) => {
                let (start, count) = (usize::from(start), usize::from(count));
                buf.remove(start, count);
                if start < model.len() && count > 0 {
                    let end = (start + count).min(model.len());
                    model.drain(start..end);
                }
            }
            Op::Substring(start) => {
                let start = usize::from(start);
                buf.substring(start);
                model.drain(..start.min(model.len()));
            }
            Op::Replace(old, new) => {
                buf.replace(old.as_str(), new.as_str());
                let old: Vec<char> = old.chars().collect();
                let new: Vec<char> = new.chars().collect();
                replace(&mut model, capacity, &old, &new);
            }
            Op::PadLeft(count) => {
                let count = usize::from(count);
                buf.pad_left(count, '<');
                let mut padded = vec!['<'; count];
                padded.extend_from_slice(&model);
                padded.truncate(capacity);
                model = padded;
            }
            Op::PadRight(count) => {
                buf.pad_right(usize::from(count), '>');
                let room = capacity - model.len();
                model.extend(std::iter::repeat_n('>', usize::from(count).min(room)));
            }
            Op::Trim => {
                buf.trim();
                let start = model.iter().take_while(|&&c| c == ' ').count();
                model.drain(..start);
                let end = model.len() - model.iter().rev().take_while(|&&c| c == ' ').count();
                model.truncate(end);
            }
            Op::Truncate(n) => {
                buf.truncate(usize::from(n));
                model.truncate(usize::from(n));
            }
            Op::Clear => {
                buf.clear();
                model.clear();
            }
        }

        assert!(buf.len() <= buf.capacity());
        assert_eq!(buf.as_chars(), model.as_slice(), "after {buf:?}");
        assert_ne!(buf.stable_hash(), 0);
        assert_ne!(buf.stable_hash(), -1);
    }
});

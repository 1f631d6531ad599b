#![expect(missing_docs)]

use core::fmt::Write as _;

use fixedtext::{Color32, FixedTextBuffer, FormatFlags, Precision, Rect2i, Vector2i};

fn hud_line(frame: u32, pos: Vector2i, fps: f32, tint: Color32) -> String {
    let mut buf = FixedTextBuffer::with_capacity(64);
    buf.append("#")
        .append_int(frame, 6, FormatFlags::ZERO_FILL)
        .append(" pos=")
        .append(pos)
        .append(" fps=")
        .append_float(fps, Precision::Fixed(1))
        .append(" tint=#")
        .append_color(tint, FormatFlags::HEX_UPPER);
    buf.to_string()
}

#[test]
fn snapshot_hud_lines() {
    let mut out = String::new();
    for (frame, x) in [(1_u32, -3), (42, 0), (123_456, 1_000)] {
        writeln!(
            out,
            "{}",
            hud_line(frame, Vector2i::new(x, x * 2), 59.5, Color32::new(0x12, 0xAB, 0x00, 0xFF))
        )
        .unwrap();
    }

    insta::assert_snapshot!(out, @r"
    #000001 pos=(-3, -6) fps=59.5 tint=#12AB00FF
    #000042 pos=(0, 0) fps=59.5 tint=#12AB00FF
    #123456 pos=(1000, 2000) fps=59.5 tint=#12AB00FF
    ");
}

#[test]
fn snapshot_template_editing() {
    let mut buf = FixedTextBuffer::with_capacity(64);
    let mut out = String::new();

    buf.set("  {name} gains experience! {name} levels up!  ");
    buf.trim();
    writeln!(out, "{buf}").unwrap();
    buf.replace("{name}", "Pete");
    writeln!(out, "{buf}").unwrap();
    buf.replace("Pete", "Pete the Brave");
    writeln!(out, "{buf}").unwrap();
    buf.to_upper_invariant();
    writeln!(out, "{buf}").unwrap();
    let at = buf.index_of("!").unwrap();
    buf.remove_from(at + 1).pad_left(2, '>').pad_right(2, '<');
    writeln!(out, "{buf}").unwrap();

    insta::assert_snapshot!(out, @r"
    {name} gains experience! {name} levels up!
    Pete gains experience! Pete levels up!
    Pete the Brave gains experience! Pete the Brave levels up!
    PETE THE BRAVE GAINS EXPERIENCE! PETE THE BRAVE LEVELS UP!
    >>PETE THE BRAVE GAINS EXPERIENCE!<<
    ");
}

#[test]
fn snapshot_overflowing_writes() {
    let mut out = String::new();
    for capacity in [0, 1, 4, 9, 16] {
        let mut buf = FixedTextBuffer::with_capacity(capacity);
        buf.append(Rect2i::new(10, 20, 300, 400)).append('!');
        writeln!(out, "cap {capacity:>2}: [{buf}]").unwrap();
    }

    insta::assert_snapshot!(out, @r"
    cap  0: []
    cap  1: [(]
    cap  4: [(10,]
    cap  9: [(10, 20, ]
    cap 16: [(10, 20, 300, 40]
    ");
}

#[test]
fn snapshot_numeric_edges() {
    let mut buf = FixedTextBuffer::with_capacity(128);
    buf.append(i64::MIN)
        .append(' ')
        .append(u64::MAX)
        .append(' ')
        .append_int(-1_i16, 0, FormatFlags::HEX_LOWER)
        .append(' ')
        .append(-0.5_f64)
        .append(' ')
        .append_float(1.0_f64 / 3.0, Precision::Fixed(4))
        .append(' ')
        .append(f32::NAN);

    insta::assert_snapshot!(buf.to_string(), @"-9223372036854775808 18446744073709551615 ffff -0.5 0.3333 NaN");
}

//! The text sink the demo writes to.

/// Somewhere to put text.  Output is best effort; there is nothing useful to
/// do about a failed write.
pub trait Emit {
    fn emit_text(&mut self, s: &str);

    /// Decimal, no leading zeros.
    fn emit_uint(&mut self, n: u32) {
        self.emit_text(crate::decimal::format_u32(n).as_str());
    }

    fn emit_int(&mut self, n: i32) {
        if n < 0 {
            self.emit_text("-");
        }
        self.emit_uint(n.unsigned_abs());
    }
}

impl<W: core::fmt::Write> Emit for W {
    fn emit_text(&mut self, s: &str) {
        let _ = self.write_str(s);
    }
}

#[test]
fn to_string() {
    let mut s = String::new();
    s.emit_text("n = ");
    s.emit_uint(0);
    s.emit_text(", ");
    s.emit_uint(4294967295);
    s.emit_text(", ");
    s.emit_int(-42);
    s.emit_text(", ");
    s.emit_int(i32::MIN);
    assert_eq!(s, "n = 0, 4294967295, -42, -2147483648");
}

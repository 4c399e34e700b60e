use std::io;

/// In-memory `io::Write` sink.
///
/// Hand it to code written against `&mut dyn Write` instead of a real
/// stdout, then assert on what was printed.
///
/// ```
/// use std::io::Write;
/// use hako_testkit::Capture;
///
/// let mut out = Capture::new();
/// writeln!(out, "abc").unwrap();
/// assert_eq!(out.contents(), "abc\n");
/// ```
#[derive(Debug, Default)]
pub struct Capture {
    buf: Vec<u8>,
}

impl Capture {
    pub fn new() -> Self { Self::default() }

    /// Everything written so far, lossily decoded.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buf).into_owned()
    }

    pub fn as_bytes(&self) -> &[u8] { &self.buf }

    /// Drain the buffer, returning what was written.
    pub fn take(&mut self) -> String {
        let out = self.contents();
        self.buf.clear();
        out
    }

    /// Discard everything written so far.
    pub fn reset(&mut self) { self.buf.clear(); }
}

impl io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> { Ok(()) }
}

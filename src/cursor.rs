/// Cursor over the comma-delimited fields of one sentence.
///
/// Construction strips the framing (`*hh` checksum tail and any trailing line
/// ending), so reads only ever see the sentence body. The cursor only moves
/// forward: every read consumes exactly one field, even when the field is
/// empty or fails to parse, which keeps required-then-optional field
/// sequences aligned.
pub struct FieldCursor<'a> {
    data: &'a str,
    pos: usize,
}

impl<'a> FieldCursor<'a> {
    pub fn new(line: &'a str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']);
        let data = match line.rsplit_once('*') {
            Some((body, _checksum)) => body,
            None => line,
        };

        Self { data, pos: 0 }
    }

    /// Returns the next field, or `""` once the field stream is exhausted.
    pub fn read(&mut self) -> &'a str {
        let Some(remaining) = self.data.get(self.pos..) else {
            return "";
        };

        match remaining.find(',') {
            Some(comma) => {
                self.pos += comma + 1;
                &remaining[..comma]
            }
            None => {
                // last field; park the cursor past the end so further reads
                // see an exhausted stream rather than a trailing empty field
                self.pos = self.data.len() + 1;
                remaining
            }
        }
    }

    /// Returns the first character of the next field, or `None` if the field
    /// is empty or the stream is exhausted.
    pub fn read_first_char(&mut self) -> Option<char> {
        self.read().chars().next()
    }

    /// Parses the next field as an integer. Absence, exhaustion and parse
    /// failure all yield `None`.
    pub fn read_i32(&mut self) -> Option<i32> {
        self.read().parse().ok()
    }

    /// Parses the next field as a float. Absence, exhaustion and parse
    /// failure all yield `None`.
    pub fn read_f64(&mut self) -> Option<f64> {
        self.read().parse().ok()
    }

    /// Discards the next `n` fields. A no-op past the end of the stream.
    pub fn skip(&mut self, n: usize) {
        for _ in 0..n {
            self.read();
        }
    }

    /// Returns everything not yet consumed, verbatim, including any embedded
    /// commas. The cursor is exhausted afterwards.
    pub fn rest(&mut self) -> &'a str {
        let rest = self.data.get(self.pos..).unwrap_or("");
        self.pos = self.data.len() + 1;
        rest
    }
}

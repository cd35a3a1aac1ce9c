use std::fs;
use std::path::Path;

use anyhow::Result;

/// Raw dictionary bytes plus the offset of every candidate line. The search
/// core only ever sees this buffer/offset view; line endings, lengths and
/// stray characters are all dealt with here.
pub struct Dictionary {
    buf: Vec<u8>,
    words: Vec<usize>,
}

impl Dictionary {
    pub fn load(path: &Path) -> Result<Self> {
        Ok(Self::from_bytes(fs::read(path)?))
    }

    /// Scan for lines that are exactly five lowercase letters; anything else
    /// is not a candidate word. Handles CRLF and a missing final newline.
    pub fn from_bytes(buf: Vec<u8>) -> Self {
        let mut words = Vec::new();
        let mut start = 0;
        while start < buf.len() {
            let end = buf[start..]
                .iter()
                .position(|&b| b == b'\n')
                .map_or(buf.len(), |n| start + n);
            let line = match &buf[start..end] {
                [line @ .., b'\r'] => line,
                line => line,
            };
            if line.len() == 5 && line.iter().all(u8::is_ascii_lowercase) {
                words.push(start);
            }
            start = end + 1;
        }
        Self { buf, words }
    }

    /// Offsets of candidate words, in file order.
    pub fn word_offsets(&self) -> &[usize] {
        &self.words
    }

    /// The 5-byte spelling starting at a candidate offset.
    pub fn spelling(&self, offset: usize) -> &[u8] {
        &self.buf[offset..offset + 5]
    }
}

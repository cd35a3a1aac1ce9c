use itertools::Itertools;

use crate::dict::Dictionary;
use crate::index::WordIndex;

/// Five 5-letter spellings at a stride of six, space filled, newline last.
pub const RECORD_LEN: usize = 31;

/// Expands solved mask quintuples back into spellings. One record is
/// written per combination of anagram spellings, into a record buffer that
/// is reused across emissions; records accumulate in memory so the search
/// itself never touches an output stream.
pub struct Expander<'a> {
    dict: &'a Dictionary,
    index: &'a WordIndex,
    record: [u8; RECORD_LEN],
    out: Vec<u8>,
}

impl<'a> Expander<'a> {
    pub fn new(dict: &'a Dictionary, index: &'a WordIndex) -> Self {
        let mut record = [b' '; RECORD_LEN];
        record[RECORD_LEN - 1] = b'\n';
        Self {
            dict,
            index,
            record,
            out: Vec::new(),
        }
    }

    /// Emit one record per spelling combination of the five letter sets,
    /// returning how many were written. The masks are the solver's
    /// responsibility; nothing is re-validated here.
    pub fn emit(&mut self, solution: &[u32; 5]) -> u64 {
        let (dict, index) = (self.dict, self.index);
        let mut count = 0;
        let combos = solution
            .iter()
            .map(|&mask| index.spellings(mask).iter().copied())
            .multi_cartesian_product();
        for combo in combos {
            for (slot, &offset) in combo.iter().enumerate() {
                let at = slot * 6;
                self.record[at..at + 5].copy_from_slice(dict.spelling(offset));
            }
            self.out.extend_from_slice(&self.record);
            count += 1;
        }
        count
    }

    pub fn into_output(self) -> Vec<u8> {
        self.out
    }
}

use rustc_hash::FxHashMap;

use crate::dict::Dictionary;
use crate::letters::{self, Ranking, BUCKETS};

/// Anagram groups plus the partition of all distinct letter masks into
/// (rarest letter, bucket) slots. Built once per dictionary, read-only
/// during the search.
pub struct WordIndex {
    anagrams: FxHashMap<u32, Vec<usize>>,
    lists: Vec<[Vec<u32>; BUCKETS]>,
}

impl WordIndex {
    pub fn build(dict: &Dictionary, ranking: &Ranking) -> Self {
        let mut anagrams: FxHashMap<u32, Vec<usize>> = FxHashMap::default();
        let mut lists: Vec<[Vec<u32>; BUCKETS]> =
            (0..26).map(|_| std::array::from_fn(|_| Vec::new())).collect();

        for &offset in dict.word_offsets() {
            let mask = match letters::letter_mask(dict.spelling(offset)) {
                Some(mask) => mask,
                None => continue, // repeated letter
            };
            let spellings = anagrams.entry(mask).or_default();
            if spellings.is_empty() {
                // First sighting of this letter set: it enters the partition
                // exactly once. Later anagrams only add a spelling.
                lists[ranking.rarest_letter(mask)][ranking.bucket_id(mask) as usize].push(mask);
            }
            spellings.push(offset);
        }

        for row in &mut lists {
            for slot in row.iter_mut() {
                slot.shrink_to_fit();
            }
        }

        Self { anagrams, lists }
    }

    /// Masks whose rarest letter is `letter`, restricted to one bucket.
    pub fn bucket(&self, letter: usize, bucket: usize) -> &[u32] {
        &self.lists[letter][bucket]
    }

    pub fn contains(&self, mask: u32) -> bool {
        self.anagrams.contains_key(&mask)
    }

    /// Word offsets spelling this mask, in first-seen order.
    pub fn spellings(&self, mask: u32) -> &[usize] {
        &self.anagrams[&mask]
    }

    pub fn distinct_masks(&self) -> usize {
        self.anagrams.len()
    }
}

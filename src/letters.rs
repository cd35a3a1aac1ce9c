use itertools::Itertools;

/// All 26 letter bits set.
pub const ALPHABET: u32 = (1 << 26) - 1;

/// How many of the most frequent letters drive the sub-bucket split.
pub const FREQUENT_LETTERS: usize = 6;

/// Number of sub-buckets per primary list.
pub const BUCKETS: usize = 1 << FREQUENT_LETTERS;

pub const BUCKET_MASK: u32 = BUCKETS as u32 - 1;

/// The 26 letters ordered from least to most frequent in an English word
/// list. Only the fact that this is a fixed total order matters for
/// correctness; this particular order is what makes the pruning effective.
const LETTER_ORDER: &[u8; 26] = b"qxjzvwfkbghcympduntliroase";

/// One bit per letter as bitset, or `None` if any letter repeats.
pub fn letter_mask(word: &[u8]) -> Option<u32> {
    let mask = word.iter().fold(0u32, |mask, &c| mask | 1 << (c - b'a'));
    (mask.count_ones() == 5).then_some(mask)
}

/// Fixed letter ranking plus the derived bit gather for the six most
/// frequent letters. Depends only on `LETTER_ORDER`, so one value can be
/// shared across any number of searches.
pub struct Ranking {
    by_rank: [u8; 26],
    shifts: [u32; FREQUENT_LETTERS],
}

impl Ranking {
    pub fn new() -> Self {
        let mut by_rank = [0u8; 26];
        for (slot, &letter) in by_rank.iter_mut().zip(LETTER_ORDER.iter()) {
            *slot = letter - b'a';
        }

        // The six most frequent letters sit anywhere in the alphabet, so the
        // bucket id is a gather, not a slice: sorting their positions lets
        // bucket bit k be extracted with a single right shift.
        let frequent: Vec<u32> = by_rank[26 - FREQUENT_LETTERS..]
            .iter()
            .map(|&letter| u32::from(letter))
            .sorted()
            .collect();
        let mut shifts = [0u32; FREQUENT_LETTERS];
        for (k, (shift, &position)) in shifts.iter_mut().zip(&frequent).enumerate() {
            *shift = position - k as u32;
        }

        Self { by_rank, shifts }
    }

    /// Letter (0=a..25=z) at the given frequency rank, rarest first.
    pub fn letter(&self, rank: usize) -> usize {
        usize::from(self.by_rank[rank])
    }

    /// 6-bit bucket id: bit k set iff the mask contains the k-th of the six
    /// most frequent letters.
    pub fn bucket_id(&self, mask: u32) -> u32 {
        self.shifts
            .iter()
            .enumerate()
            .fold(0, |id, (k, &shift)| id | ((mask >> shift) & (1 << k)))
    }

    /// The least frequent letter contained in `mask`; decides which primary
    /// list a mask belongs to.
    pub fn rarest_letter(&self, mask: u32) -> usize {
        self.by_rank
            .iter()
            .map(|&letter| usize::from(letter))
            .find(|&letter| mask & (1 << letter) != 0)
            .expect("empty letter mask")
    }
}

/// For every 6-bit pattern of still-available frequent letters, the bucket
/// ids whose words use none of the unavailable ones: exactly the subsets of
/// the pattern. Independent of the dictionary.
pub struct BucketTable {
    subsets: Vec<Vec<u8>>,
}

impl BucketTable {
    pub fn new() -> Self {
        let subsets = (0..BUCKETS as u32)
            .map(|available| {
                (0..BUCKETS as u32)
                    .filter(|bucket| bucket & !available == 0)
                    .map(|bucket| bucket as u8)
                    .collect()
            })
            .collect();
        Self { subsets }
    }

    pub fn compatible(&self, available: u32) -> &[u8] {
        &self.subsets[available as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_have_five_distinct_letters() {
        assert_eq!(letter_mask(b"abcde"), Some(0b11111));
        assert_eq!(letter_mask(b"vwxyz"), Some(0b11111 << 21));
        for word in [b"fjord", b"vibex", b"waltz"] {
            assert_eq!(letter_mask(word).unwrap().count_ones(), 5);
        }
    }

    #[test]
    fn repeated_letters_are_rejected() {
        assert_eq!(letter_mask(b"aabcd"), None);
        assert_eq!(letter_mask(b"abcda"), None);
        assert_eq!(letter_mask(b"aaaaa"), None);
    }

    #[test]
    fn ranking_runs_rarest_to_commonest() {
        let ranking = Ranking::new();
        assert_eq!(ranking.letter(0), usize::from(b'q' - b'a'));
        assert_eq!(ranking.letter(25), usize::from(b'e' - b'a'));
        // every letter appears exactly once
        let mut seen = 0u32;
        for rank in 0..26 {
            seen |= 1 << ranking.letter(rank);
        }
        assert_eq!(seen, ALPHABET);
    }

    #[test]
    fn bucket_id_gathers_the_six_frequent_letters() {
        let ranking = Ranking::new();
        // the last six of the order, by alphabet position: a e i o r s
        for (k, letter) in [b'a', b'e', b'i', b'o', b'r', b's'].into_iter().enumerate() {
            assert_eq!(ranking.bucket_id(1 << (letter - b'a')), 1 << k);
        }
        // infrequent letters contribute nothing
        assert_eq!(ranking.bucket_id(1 << (b'q' - b'a')), 0);
        assert_eq!(ranking.bucket_id(letter_mask(b"vwxyz").unwrap()), 0);
        let es = (1 << (b'e' - b'a')) | (1 << (b's' - b'a'));
        assert_eq!(ranking.bucket_id(es), 0b100010);
    }

    #[test]
    fn rarest_letter_follows_the_ranking() {
        let ranking = Ranking::new();
        assert_eq!(
            ranking.rarest_letter(letter_mask(b"abcde").unwrap()),
            usize::from(b'b' - b'a')
        );
        assert_eq!(
            ranking.rarest_letter(letter_mask(b"uvwxy").unwrap()),
            usize::from(b'x' - b'a')
        );
        assert_eq!(ranking.rarest_letter(1 << 16), usize::from(b'q' - b'a'));
    }

    #[test]
    fn bucket_table_lists_exactly_the_subsets() {
        let table = BucketTable::new();
        for pattern in 0..BUCKETS as u32 {
            let compatible = table.compatible(pattern);
            // the power set of the pattern's bits, each id at most once
            assert_eq!(compatible.len(), 1 << pattern.count_ones());
            for window in compatible.windows(2) {
                assert!(window[0] < window[1]);
            }
            for &bucket in compatible {
                assert_eq!(u32::from(bucket) & !pattern, 0);
            }
        }
    }
}

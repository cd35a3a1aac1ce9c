use crate::expand::Expander;
use crate::index::WordIndex;
use crate::letters::{BucketTable, Ranking, ALPHABET, BUCKET_MASK};

/// Rank of the last list worth walking: since exactly one letter may go
/// unused, skipping anything past this point can no longer be made up for
/// by the remaining lists.
const LAST_SKIPPABLE_RANK: usize = 21;

/// Recursive search over the rank-ordered primary lists. One word is taken
/// from every list whose letter is not already covered; at most one list
/// may be skipped outright, and that list's letter is the omitted one.
pub struct Solver<'a> {
    index: &'a WordIndex,
    ranking: &'a Ranking,
    buckets: &'a BucketTable,
}

impl<'a> Solver<'a> {
    pub fn new(index: &'a WordIndex, ranking: &'a Ranking, buckets: &'a BucketTable) -> Self {
        Self {
            index,
            ranking,
            buckets,
        }
    }

    /// Run the full search, returning the number of records emitted.
    pub fn run(&self, out: &mut Expander<'_>) -> u64 {
        let mut chosen = [0u32; 5];
        self.descend(0, 0, 0, 0, &mut chosen, out)
    }

    fn descend(
        &self,
        used: u32,
        words: usize,
        rank: usize,
        mut skipped: u32,
        chosen: &mut [u32; 5],
        out: &mut Expander<'_>,
    ) -> u64 {
        let letter = self.ranking.letter(rank);
        let letter_bit = 1u32 << letter;
        let mut found = 0;

        // A letter already covered by an earlier pick costs nothing: its
        // list was consumed implicitly.
        if used & letter_bit == 0 {
            let available = self.ranking.bucket_id(used) ^ BUCKET_MASK;
            for &bucket in self.buckets.compatible(available) {
                for &mask in self.index.bucket(letter, usize::from(bucket)) {
                    if used & mask != 0 {
                        continue;
                    }
                    chosen[words] = mask;
                    if words == 3 && skipped != 0 {
                        // Four words plus the skipped letter pin down the
                        // fifth: probe the index instead of recursing.
                        let missing = (used | mask | skipped) ^ ALPHABET;
                        if self.index.contains(missing) {
                            chosen[4] = missing;
                            found += out.emit(chosen);
                        }
                    } else if words == 4 {
                        found += out.emit(chosen);
                    } else {
                        found +=
                            self.descend(used | mask, words + 1, rank + 1, skipped, chosen, out);
                    }
                }
            }

            if skipped != 0 {
                // A second skipped list would leave two letters uncovered.
                return found;
            }
            skipped = letter_bit;
        }

        if rank < LAST_SKIPPABLE_RANK {
            found += self.descend(used, words, rank + 1, skipped, chosen, out);
        }
        found
    }
}

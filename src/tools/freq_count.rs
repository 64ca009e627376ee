use rayon::prelude::*;

use crate::error::{HufError, Result};

/// Returns a frequency count of the input data. Uses parallelism when data set is over 64k.
pub fn freqs(data: &[u8]) -> Vec<u64> {
    if data.len() > 64_000 {
        // 16k is pretty much the sweet spot for chunk size.
        data.par_chunks(16_000)
            .fold(
                || vec![0_u64; 256],
                |mut freqs, chunk| {
                    chunk.iter().for_each(|&el| freqs[el as usize] += 1);
                    freqs
                },
            )
            .reduce(
                || vec![0_u64; 256],
                |s, f| s.iter().zip(&f).map(|(a, b)| a + b).collect::<Vec<u64>>(),
            )
    } else {
        let mut freqs = vec![0_u64; 256];
        data.iter().for_each(|&el| freqs[el as usize] += 1);
        freqs
    }
}

/// Occurrence count of every byte value seen in an input. Only symbols with a
/// non-zero count are part of the table. Iteration is in ascending byte order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: Vec<u64>,
}

impl FrequencyTable {
    /// Count every byte of `data`.
    pub fn from_bytes(data: &[u8]) -> Self {
        Self {
            counts: freqs(data),
        }
    }

    /// Build a table from explicit (symbol, count) pairs, as read back from a
    /// container header. Zero counts and repeated symbols are rejected.
    pub fn from_counts<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (u8, u64)>,
    {
        let mut counts = vec![0_u64; 256];
        for (symbol, count) in pairs {
            if count == 0 {
                return Err(HufError::InvalidHeader(format!(
                    "symbol {:#04x} has a zero count",
                    symbol
                )));
            }
            if counts[symbol as usize] != 0 {
                return Err(HufError::InvalidHeader(format!(
                    "symbol {:#04x} listed twice",
                    symbol
                )));
            }
            counts[symbol as usize] = count;
        }
        Ok(Self { counts })
    }

    /// (symbol, count) for every symbol present, ascending by symbol.
    pub fn symbols(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, &count)| count > 0)
            .map(|(symbol, &count)| (symbol as u8, count))
    }

    /// Number of distinct symbols.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&count| count > 0).count()
    }

    /// Sum of all counts, or None if it does not fit in a u64.
    pub fn total(&self) -> Option<u64> {
        self.counts
            .iter()
            .try_fold(0_u64, |acc, &count| acc.checked_add(count))
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&count| count == 0)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn abracadabra_counts_test() {
        let table = FrequencyTable::from_bytes(b"abracadabra");
        assert_eq!(
            table.symbols().collect::<Vec<_>>(),
            vec![(b'a', 5), (b'b', 2), (b'c', 1), (b'd', 1), (b'r', 2)]
        );
        assert_eq!(table.distinct(), 5);
        assert_eq!(table.total(), Some(11));
    }

    #[test]
    fn symbols_in_byte_order_test() {
        let table = FrequencyTable::from_bytes(b"zyxzy");
        let symbols = table.symbols().collect::<Vec<_>>();
        assert_eq!(symbols, vec![(b'x', 1), (b'y', 2), (b'z', 2)]);
    }

    #[test]
    fn parallel_count_matches_sequential_test() {
        let data = (0..200_000_u32).map(|i| (i % 251) as u8).collect::<Vec<u8>>();
        let mut expected = vec![0_u64; 256];
        data.iter().for_each(|&b| expected[b as usize] += 1);
        assert_eq!(freqs(&data), expected);
        assert_eq!(FrequencyTable::from_bytes(&data).total(), Some(200_000));
    }

    #[test]
    fn empty_table_test() {
        let table = FrequencyTable::from_bytes(&[]);
        assert!(table.is_empty());
        assert_eq!(table.distinct(), 0);
        assert_eq!(table.total(), Some(0));
    }

    #[test]
    fn from_counts_rejects_bad_pairs_test() {
        assert!(FrequencyTable::from_counts(vec![(1, 3), (2, 0)]).is_err());
        assert!(FrequencyTable::from_counts(vec![(1, 3), (1, 4)]).is_err());
        let table = FrequencyTable::from_counts(vec![(7, 3), (2, 4)]).unwrap();
        assert_eq!(table.symbols().collect::<Vec<_>>(), vec![(2, 4), (7, 3)]);
    }

    #[test]
    fn total_overflow_test() {
        let table = FrequencyTable::from_counts(vec![(0, u64::MAX), (1, 1)]).unwrap();
        assert_eq!(table.total(), None);
    }
}

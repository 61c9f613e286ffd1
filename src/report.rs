use alloc::vec::Vec;

/// One recovered key with its decryption candidate and ranking score
#[derive(Clone, Debug, PartialEq)]
pub struct Candidate<K> {
    pub key: K,
    pub plaintext: Vec<u8>,
    pub score: f64,
}

/// Outcome of an attack: candidate keys paired with candidate plaintexts
///
/// Candidates are ordered by ascending key. Ties for the top score are kept
/// as separate entries rather than collapsed to an arbitrary winner.
#[derive(Clone, Debug, PartialEq)]
pub struct Report<K> {
    pub candidates: Vec<Candidate<K>>,
}

impl<K> Report<K> {
    /// Wrap an already-final candidate list
    pub fn from_candidates(candidates: Vec<Candidate<K>>) -> Self {
        Self { candidates }
    }

    /// Keep only the candidates tied for the maximum score
    ///
    /// Input order is preserved, so candidates scored in ascending key
    /// order stay in ascending key order.
    pub fn from_scored(scored: Vec<Candidate<K>>) -> Self {
        let mut best = f64::NEG_INFINITY;
        for candidate in scored.iter() {
            if candidate.score > best {
                best = candidate.score;
            }
        }

        Self {
            candidates: scored.into_iter().filter(|c| c.score == best).collect(),
        }
    }

    /// First candidate in key order among the ties, if any
    pub fn best(&self) -> Option<&Candidate<K>> {
        self.candidates.first()
    }

    /// Recovered keys in report order
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.candidates.iter().map(|c| &c.key)
    }
}

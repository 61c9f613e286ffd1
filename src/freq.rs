use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::ring::{self, MODULUS};

/// Unigram frequencies of English letters, indexed by residue (A = 0)
///
/// Frequencies from: https://en.wikipedia.org/wiki/Letter_frequency
pub const ENGLISH_FREQUENCIES: [f64; 26] = [
    0.08167, 0.01492, 0.02782, 0.04253, 0.12702, 0.02228, 0.02015, 0.06094,
    0.06966, 0.00153, 0.00772, 0.04025, 0.02406, 0.06749, 0.07507, 0.01929,
    0.00095, 0.05987, 0.06327, 0.09056, 0.02758, 0.00978, 0.02360, 0.00150,
    0.01974, 0.00074,
];

/// Expected index of coincidence for English text
pub const ENGLISH_IC: f64 = 0.065;

#[derive(Debug, PartialEq)]
pub enum Error {
    EmptyInput,
    Ring(ring::Error),
}

/// Count occurrences of each residue in a sequence
///
/// errors: returns Error on empty or out-of-alphabet input
pub fn observe_counts(residues: &[u8]) -> Result<HashMap<u8, u32>, Error> {
    if residues.is_empty() {
        return Err(Error::EmptyInput);
    }
    ring::check_residues(residues).map_err(|e| Error::Ring(e))?;

    let mut res: HashMap<u8, u32> = HashMap::with_capacity(MODULUS as usize);
    for &residue in residues.iter() {
        if let Some(entry) = res.get_mut(&residue) {
            *entry += 1;
        } else {
            res.insert(residue, 1);
        }
    }

    Ok(res)
}

/// Empirical frequency of each residue, indexed by residue
pub fn empirical_frequencies(residues: &[u8]) -> Result<[f64; 26], Error> {
    let counts = observe_counts(residues)?;
    let len = residues.len() as f64;

    let mut res = [0.0_f64; 26];
    for residue in 0..MODULUS {
        if let Some(&count) = counts.get(&residue) {
            res[residue as usize] = count as f64 / len;
        }
    }

    Ok(res)
}

/// Dot product of a sequence's empirical frequencies with the English table
///
/// Higher means more English-like; the ranking statistic for the
/// exhaustive attacks
pub fn dot_product_score(residues: &[u8]) -> Result<f64, Error> {
    let observed = empirical_frequencies(residues)?;

    let mut score = 0.0_f64;
    for residue in 0..MODULUS as usize {
        score += observed[residue] * ENGLISH_FREQUENCIES[residue];
    }

    Ok(score)
}

/// Index of coincidence: probability that two sampled positions match
///
/// sum of count*(count - 1) over n*(n - 1); zero for single-letter input
pub fn index_of_coincidence(residues: &[u8]) -> Result<f64, Error> {
    let counts = observe_counts(residues)?;
    if residues.len() < 2 {
        return Ok(0.0);
    }

    let mut sum = 0.0_f64;
    for (_, &count) in counts.iter() {
        sum += count as f64 * (count as f64 - 1.0);
    }

    let n = residues.len() as f64;
    Ok(sum / (n * (n - 1.0)))
}

/// Observed residues ranked by count: descending count, ascending residue
/// on ties
///
/// The ranking behind the frequency-peak attacks; only residues that
/// actually occur are listed
pub fn rank_by_count(residues: &[u8]) -> Result<Vec<u8>, Error> {
    let counts = observe_counts(residues)?;

    let mut ranked: Vec<u8> = counts.keys().copied().collect();
    ranked.sort_by(|x, y| counts[y].cmp(&counts[x]).then(x.cmp(y)));

    Ok(ranked)
}

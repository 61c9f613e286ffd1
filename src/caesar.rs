use alloc::vec;
use alloc::vec::Vec;

use crate::freq;
use crate::report::{Candidate, Report};
use crate::ring::{self, MODULUS};

/// Residue of 'E', the most frequent English letter
const PEAK_RESIDUE: u8 = 4;

#[derive(Debug, PartialEq)]
pub enum Error {
    EmptyCiphertext,
    InvalidKeyComponent(u8),
    Freq(freq::Error),
    Ring(ring::Error),
}

fn check_key(key: u8) -> Result<(), Error> {
    if key >= MODULUS {
        return Err(Error::InvalidKeyComponent(key));
    }
    Ok(())
}

/// Shift every residue up by the key
///
/// errors: returns Error on out-of-range key or out-of-alphabet input
pub fn encrypt(key: u8, plaintext: &[u8]) -> Result<Vec<u8>, Error> {
    check_key(key)?;
    ring::check_residues(plaintext).map_err(|e| Error::Ring(e))?;

    Ok(plaintext.iter().map(|&p| (p + key) % MODULUS).collect())
}

/// Shift every residue down by the key
pub fn decrypt(key: u8, ciphertext: &[u8]) -> Result<Vec<u8>, Error> {
    check_key(key)?;
    ring::check_residues(ciphertext).map_err(|e| Error::Ring(e))?;

    Ok(ciphertext
        .iter()
        .map(|&c| (c + MODULUS - key) % MODULUS)
        .collect())
}

/// Decrypt under all 26 shifts and keep every key tied for the best
/// English score
pub fn attack_exhaustive(ciphertext: &[u8], verbose: bool) -> Result<Report<u8>, Error> {
    if ciphertext.is_empty() {
        return Err(Error::EmptyCiphertext);
    }

    let mut scored = Vec::with_capacity(MODULUS as usize);
    for key in 0..MODULUS {
        let plaintext = decrypt(key, ciphertext)?;
        let score = freq::dot_product_score(&plaintext).map_err(|e| Error::Freq(e))?;

        if verbose {
            log::debug!("shift {:2} score {:.6}", key, score);
        }

        scored.push(Candidate {
            key,
            plaintext,
            score,
        });
    }

    Ok(Report::from_scored(scored))
}

/// Assume the most frequent ciphertext letter is the image of 'E' and
/// derive the shift directly
///
/// Single-candidate heuristic, O(1) beyond the frequency count. Can be
/// wrong when the sample is too short to reflect English statistics.
pub fn attack_frequency(ciphertext: &[u8], verbose: bool) -> Result<Report<u8>, Error> {
    if ciphertext.is_empty() {
        return Err(Error::EmptyCiphertext);
    }

    let ranked = freq::rank_by_count(ciphertext).map_err(|e| Error::Freq(e))?;
    let peak = ranked[0];
    let key = (peak + MODULUS - PEAK_RESIDUE) % MODULUS;

    if verbose {
        log::debug!("peak residue {} gives shift {}", peak, key);
    }

    let plaintext = decrypt(key, ciphertext)?;
    let score = freq::dot_product_score(&plaintext).map_err(|e| Error::Freq(e))?;

    Ok(Report::from_candidates(vec![Candidate {
        key,
        plaintext,
        score,
    }]))
}

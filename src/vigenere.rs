use alloc::vec;
use alloc::vec::Vec;

use libm::fabs;

use crate::caesar;
use crate::freq;
use crate::report::{Candidate, Report};
use crate::ring::{self, MODULUS};

#[derive(Debug, PartialEq)]
pub enum Error {
    EmptyCiphertext,
    EmptyKeyword,
    InsufficientData,
    Caesar(caesar::Error),
    Freq(freq::Error),
    Ring(ring::Error),
}

fn check_keyword(keyword: &[u8]) -> Result<(), Error> {
    if keyword.is_empty() {
        return Err(Error::EmptyKeyword);
    }
    ring::check_residues(keyword).map_err(|e| Error::Ring(e))
}

/// Add the repeating keyword to the plaintext position-wise
///
/// A keyword as long as the plaintext is a one-time pad over the alphabet:
/// encryption still works, but there is no repetition left for the
/// statistical attacks to exploit.
pub fn encrypt(keyword: &[u8], plaintext: &[u8]) -> Result<Vec<u8>, Error> {
    check_keyword(keyword)?;
    ring::check_residues(plaintext).map_err(|e| Error::Ring(e))?;

    let key_len = keyword.len();
    Ok(plaintext
        .iter()
        .enumerate()
        .map(|(i, &p)| (p + keyword[i % key_len]) % MODULUS)
        .collect())
}

/// Subtract the repeating keyword from the ciphertext position-wise
pub fn decrypt(keyword: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>, Error> {
    check_keyword(keyword)?;
    ring::check_residues(ciphertext).map_err(|e| Error::Ring(e))?;

    let key_len = keyword.len();
    Ok(ciphertext
        .iter()
        .enumerate()
        .map(|(i, &c)| (c + MODULUS - keyword[i % key_len]) % MODULUS)
        .collect())
}

/// Partition ciphertext positions into key-length residue classes
///
/// Class j holds every position congruent to j mod key_len; unlike a block
/// split, trailing positions are kept. Each class is a single-shift
/// ciphertext of the same underlying letter distribution. key_len must be
/// nonzero; the attack entry points guard this.
pub fn columns(ciphertext: &[u8], key_len: usize) -> Vec<Vec<u8>> {
    let mut res: Vec<Vec<u8>> = vec![Vec::with_capacity(ciphertext.len() / key_len + 1); key_len];

    for (i, &c) in ciphertext.iter().enumerate() {
        res[i % key_len].push(c);
    }

    res
}

fn check_attack_input(ciphertext: &[u8], key_len: usize) -> Result<(), Error> {
    if ciphertext.is_empty() {
        return Err(Error::EmptyCiphertext);
    }
    // a key length beyond the ciphertext leaves empty residue classes
    if key_len == 0 || key_len > ciphertext.len() {
        return Err(Error::InsufficientData);
    }
    Ok(())
}

/// Recover each keyword letter independently with the Caesar peak
/// heuristic, then decrypt under the assembled keyword
///
/// Assumes the caller supplies (or estimated) the key length. Wrong on
/// one-time-pad-length keywords by construction; still returns a
/// well-formed single-candidate report.
pub fn attack_frequency(
    ciphertext: &[u8],
    key_len: usize,
    verbose: bool,
) -> Result<Report<Vec<u8>>, Error> {
    check_attack_input(ciphertext, key_len)?;

    let mut keyword = Vec::with_capacity(key_len);
    for (i, column) in columns(ciphertext, key_len).iter().enumerate() {
        let report = caesar::attack_frequency(column, verbose).map_err(|e| Error::Caesar(e))?;
        let shift = report.best().ok_or(Error::InsufficientData)?.key;

        if verbose {
            log::debug!("column {:2} shift {:2}", i, shift);
        }

        keyword.push(shift);
    }

    let plaintext = decrypt(&keyword, ciphertext)?;
    let score = freq::dot_product_score(&plaintext).map_err(|e| Error::Freq(e))?;

    Ok(Report::from_candidates(vec![Candidate {
        key: keyword,
        plaintext,
        score,
    }]))
}

/// Exhaustive shift search per column (26 * key_len decryptions)
///
/// Each column's shift is its best-scoring of 26 candidates, smallest
/// shift on ties, so the assembled keyword is a single candidate.
pub fn attack_exhaustive(
    ciphertext: &[u8],
    key_len: usize,
    verbose: bool,
) -> Result<Report<Vec<u8>>, Error> {
    check_attack_input(ciphertext, key_len)?;

    let mut keyword = Vec::with_capacity(key_len);
    for (i, column) in columns(ciphertext, key_len).iter().enumerate() {
        let report = caesar::attack_exhaustive(column, verbose).map_err(|e| Error::Caesar(e))?;
        let shift = report.best().ok_or(Error::InsufficientData)?.key;

        if verbose {
            log::debug!("column {:2} shift {:2}", i, shift);
        }

        keyword.push(shift);
    }

    let plaintext = decrypt(&keyword, ciphertext)?;
    let score = freq::dot_product_score(&plaintext).map_err(|e| Error::Freq(e))?;

    Ok(Report::from_candidates(vec![Candidate {
        key: keyword,
        plaintext,
        score,
    }]))
}

/// Guess the key length whose columns look most like English
///
/// Tries every length in [1, max_len], scoring each by how close the
/// average per-column index of coincidence comes to the English value
/// (~0.065). Ties break toward the smallest length.
pub fn estimate_key_length(ciphertext: &[u8], max_len: usize) -> Result<usize, Error> {
    check_attack_input(ciphertext, max_len)?;

    let mut best_len = 0;
    let mut best_dist = 0.0_f64;

    for len in 1..=max_len {
        let mut sum = 0.0_f64;
        for column in columns(ciphertext, len).iter() {
            sum += freq::index_of_coincidence(column).map_err(|e| Error::Freq(e))?;
        }

        let dist = fabs(sum / len as f64 - freq::ENGLISH_IC);
        if best_len == 0 || dist < best_dist {
            best_len = len;
            best_dist = dist;
        }
    }

    Ok(best_len)
}

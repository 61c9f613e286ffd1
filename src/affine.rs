use alloc::vec::Vec;

use crate::freq;
use crate::report::{Candidate, Report};
use crate::ring::{self, MODULUS, UNITS};

/// Residues of 'E' and 'T', the two most frequent English letters
const PEAK_RESIDUES: [u8; 2] = [4, 19];

#[derive(Debug, PartialEq)]
pub enum Error {
    EmptyCiphertext,
    InsufficientData,
    InvalidKeyComponent(u8),
    Freq(freq::Error),
    Ring(ring::Error),
}

/// Affine key pair: c = alpha*p + beta (mod 26)
///
/// alpha must be a unit of Z/26Z or the map is not a bijection; the
/// constructor rejects anything else. 12 alphas x 26 betas = 312 valid keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Key {
    alpha: u8,
    beta: u8,
}

impl Key {
    pub fn new(alpha: u8, beta: u8) -> Result<Self, Error> {
        validate_alpha(alpha)?;
        validate_beta(beta)?;
        Ok(Self { alpha, beta })
    }

    pub fn alpha(&self) -> u8 {
        self.alpha
    }

    pub fn beta(&self) -> u8 {
        self.beta
    }
}

/// errors: returns Error unless alpha is in [1, 26) and invertible mod 26
pub fn validate_alpha(alpha: u8) -> Result<(), Error> {
    if alpha == 0 || alpha >= MODULUS || !ring::is_invertible(alpha) {
        return Err(Error::InvalidKeyComponent(alpha));
    }
    Ok(())
}

/// errors: returns Error unless beta is in [0, 26)
pub fn validate_beta(beta: u8) -> Result<(), Error> {
    if beta >= MODULUS {
        return Err(Error::InvalidKeyComponent(beta));
    }
    Ok(())
}

/// Apply alpha*p + beta (mod 26) to every residue
pub fn encrypt(key: Key, plaintext: &[u8]) -> Result<Vec<u8>, Error> {
    ring::check_residues(plaintext).map_err(|e| Error::Ring(e))?;

    Ok(plaintext
        .iter()
        .map(|&p| ((key.alpha as u16 * p as u16 + key.beta as u16) % MODULUS as u16) as u8)
        .collect())
}

/// Apply alpha^-1 * (c - beta) (mod 26) to every residue
pub fn decrypt(key: Key, ciphertext: &[u8]) -> Result<Vec<u8>, Error> {
    ring::check_residues(ciphertext).map_err(|e| Error::Ring(e))?;
    let inverse = ring::mod_inverse(key.alpha).map_err(|e| Error::Ring(e))?;

    Ok(ciphertext
        .iter()
        .map(|&c| {
            let shifted = (c + MODULUS - key.beta) % MODULUS;
            ((inverse as u16 * shifted as u16) % MODULUS as u16) as u8
        })
        .collect())
}

/// Solve the key from two letter correspondences c = alpha*p + beta (mod 26)
///
/// The plaintext difference need not be a unit: the generalized linear
/// solver can yield zero, one, or several alpha values, and non-unit
/// alphas are discarded afterwards. Returns keys ascending by
/// (alpha, beta); an empty vector (not an error) when no valid alpha exists.
pub fn recover_from_known_pairs(c0: u8, p0: u8, c1: u8, p1: u8) -> Result<Vec<Key>, Error> {
    ring::check_residues(&[c0, p0, c1, p1]).map_err(|e| Error::Ring(e))?;

    let pdiff = (p0 + MODULUS - p1) % MODULUS;
    let cdiff = (c0 + MODULUS - c1) % MODULUS;

    let mut res = Vec::new();
    for alpha in ring::solve_linear(pdiff, cdiff) {
        if !ring::is_invertible(alpha) {
            continue;
        }

        // beta follows from the first pair; offset keeps the subtraction
        // in unsigned range
        let beta = ((c0 as u16 + MODULUS as u16 * MODULUS as u16 - alpha as u16 * p0 as u16)
            % MODULUS as u16) as u8;
        res.push(Key { alpha, beta });
    }

    Ok(res)
}

/// Decrypt under all 312 valid keys and keep every key tied for the best
/// English score, ascending by (alpha, beta)
pub fn attack_exhaustive(ciphertext: &[u8], verbose: bool) -> Result<Report<Key>, Error> {
    if ciphertext.is_empty() {
        return Err(Error::EmptyCiphertext);
    }

    let mut scored = Vec::with_capacity(UNITS.len() * MODULUS as usize);
    for &alpha in UNITS.iter() {
        for beta in 0..MODULUS {
            let key = Key { alpha, beta };
            let plaintext = decrypt(key, ciphertext)?;
            let score = freq::dot_product_score(&plaintext).map_err(|e| Error::Freq(e))?;

            if verbose {
                log::debug!("alpha {:2} beta {:2} score {:.6}", alpha, beta, score);
            }

            scored.push(Candidate {
                key,
                plaintext,
                score,
            });
        }
    }

    Ok(Report::from_scored(scored))
}

/// Assume the two most frequent ciphertext letters are the images of 'E'
/// and 'T' and solve the resulting linear system
///
/// Every algebraically consistent key is reported, not just the best
/// scorer: the system can legitimately have several solutions (or none,
/// giving an empty report). Needs at least two distinct ciphertext letters.
pub fn attack_frequency(ciphertext: &[u8], verbose: bool) -> Result<Report<Key>, Error> {
    if ciphertext.is_empty() {
        return Err(Error::EmptyCiphertext);
    }

    let ranked = freq::rank_by_count(ciphertext).map_err(|e| Error::Freq(e))?;
    if ranked.len() < 2 {
        return Err(Error::InsufficientData);
    }

    let keys = recover_from_known_pairs(ranked[0], PEAK_RESIDUES[0], ranked[1], PEAK_RESIDUES[1])?;

    let mut candidates = Vec::with_capacity(keys.len());
    for key in keys {
        let plaintext = decrypt(key, ciphertext)?;
        let score = freq::dot_product_score(&plaintext).map_err(|e| Error::Freq(e))?;

        if verbose {
            log::debug!(
                "candidate alpha {:2} beta {:2} score {:.6}",
                key.alpha,
                key.beta,
                score
            );
        }

        candidates.push(Candidate {
            key,
            plaintext,
            score,
        });
    }

    Ok(Report::from_candidates(candidates))
}

/// Exhaustive search over beta with alpha fixed (26 candidates)
pub fn attack_known_alpha(
    ciphertext: &[u8],
    alpha: u8,
    verbose: bool,
) -> Result<Report<Key>, Error> {
    validate_alpha(alpha)?;
    if ciphertext.is_empty() {
        return Err(Error::EmptyCiphertext);
    }

    let mut scored = Vec::with_capacity(MODULUS as usize);
    for beta in 0..MODULUS {
        let key = Key { alpha, beta };
        let plaintext = decrypt(key, ciphertext)?;
        let score = freq::dot_product_score(&plaintext).map_err(|e| Error::Freq(e))?;

        if verbose {
            log::debug!("beta {:2} score {:.6}", beta, score);
        }

        scored.push(Candidate {
            key,
            plaintext,
            score,
        });
    }

    Ok(Report::from_scored(scored))
}

/// Exhaustive search over alpha with beta fixed (12 candidates)
pub fn attack_known_beta(
    ciphertext: &[u8],
    beta: u8,
    verbose: bool,
) -> Result<Report<Key>, Error> {
    validate_beta(beta)?;
    if ciphertext.is_empty() {
        return Err(Error::EmptyCiphertext);
    }

    let mut scored = Vec::with_capacity(UNITS.len());
    for &alpha in UNITS.iter() {
        let key = Key { alpha, beta };
        let plaintext = decrypt(key, ciphertext)?;
        let score = freq::dot_product_score(&plaintext).map_err(|e| Error::Freq(e))?;

        if verbose {
            log::debug!("alpha {:2} score {:.6}", alpha, score);
        }

        scored.push(Candidate {
            key,
            plaintext,
            score,
        });
    }

    Ok(Report::from_scored(scored))
}

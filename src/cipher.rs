use alloc::vec::Vec;

use crate::report::{Candidate, Report};
use crate::{affine, caesar, vigenere};

#[derive(Debug, PartialEq)]
pub enum Error {
    Caesar(caesar::Error),
    Affine(affine::Error),
    Vigenere(vigenere::Error),
}

/// Key material for any of the supported ciphers
#[derive(Clone, Debug, PartialEq)]
pub enum Key {
    Caesar(u8),
    Affine(affine::Key),
    Vigenere(Vec<u8>),
}

impl Key {
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>, Error> {
        match self {
            Key::Caesar(key) => caesar::encrypt(*key, plaintext).map_err(|e| Error::Caesar(e)),
            Key::Affine(key) => affine::encrypt(*key, plaintext).map_err(|e| Error::Affine(e)),
            Key::Vigenere(keyword) => {
                vigenere::encrypt(keyword, plaintext).map_err(|e| Error::Vigenere(e))
            }
        }
    }

    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>, Error> {
        match self {
            Key::Caesar(key) => caesar::decrypt(*key, ciphertext).map_err(|e| Error::Caesar(e)),
            Key::Affine(key) => affine::decrypt(*key, ciphertext).map_err(|e| Error::Affine(e)),
            Key::Vigenere(keyword) => {
                vigenere::decrypt(keyword, ciphertext).map_err(|e| Error::Vigenere(e))
            }
        }
    }
}

/// Cipher selector for uniform attack dispatch over the three variants
///
/// Vigenere carries the assumed (or estimated) key length; see
/// `vigenere::estimate_key_length` when the caller has no assumption.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Cipher {
    Caesar,
    Affine,
    Vigenere { key_len: usize },
}

impl Cipher {
    /// Brute-force search over the cipher's bounded key space
    pub fn attack_exhaustive(&self, ciphertext: &[u8], verbose: bool) -> Result<Report<Key>, Error> {
        match self {
            Cipher::Caesar => caesar::attack_exhaustive(ciphertext, verbose)
                .map(|r| map_report(r, Key::Caesar))
                .map_err(|e| Error::Caesar(e)),
            Cipher::Affine => affine::attack_exhaustive(ciphertext, verbose)
                .map(|r| map_report(r, Key::Affine))
                .map_err(|e| Error::Affine(e)),
            Cipher::Vigenere { key_len } => {
                vigenere::attack_exhaustive(ciphertext, *key_len, verbose)
                    .map(|r| map_report(r, Key::Vigenere))
                    .map_err(|e| Error::Vigenere(e))
            }
        }
    }

    /// Structural frequency attack exploiting the cipher's shape
    pub fn attack_frequency(&self, ciphertext: &[u8], verbose: bool) -> Result<Report<Key>, Error> {
        match self {
            Cipher::Caesar => caesar::attack_frequency(ciphertext, verbose)
                .map(|r| map_report(r, Key::Caesar))
                .map_err(|e| Error::Caesar(e)),
            Cipher::Affine => affine::attack_frequency(ciphertext, verbose)
                .map(|r| map_report(r, Key::Affine))
                .map_err(|e| Error::Affine(e)),
            Cipher::Vigenere { key_len } => {
                vigenere::attack_frequency(ciphertext, *key_len, verbose)
                    .map(|r| map_report(r, Key::Vigenere))
                    .map_err(|e| Error::Vigenere(e))
            }
        }
    }
}

fn map_report<K, F: Fn(K) -> Key>(report: Report<K>, wrap: F) -> Report<Key> {
    Report::from_candidates(
        report
            .candidates
            .into_iter()
            .map(|c| Candidate {
                key: wrap(c.key),
                plaintext: c.plaintext,
                score: c.score,
            })
            .collect(),
    )
}

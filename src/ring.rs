use alloc::vec::Vec;

use num::Integer;

/// Size of the cipher alphabet (and modulus of all key arithmetic)
pub const MODULUS: u8 = 26;

/// The 12 units of Z/26Z, ascending
pub const UNITS: [u8; 12] = [1, 3, 5, 7, 9, 11, 15, 17, 19, 21, 23, 25];

#[derive(Debug, PartialEq)]
pub enum Error {
    InvalidSymbol(u8),
    NotInvertible(u8),
}

/// Map an uppercase ASCII letter to its residue in [0, 26)
///
/// errors: returns Error for bytes outside A-Z
pub fn to_residue(symbol: u8) -> Result<u8, Error> {
    match symbol {
        b'A'..=b'Z' => Ok(symbol - b'A'),
        _ => Err(Error::InvalidSymbol(symbol)),
    }
}

/// Map a residue in [0, 26) back to its uppercase ASCII letter
pub fn to_symbol(residue: u8) -> Result<u8, Error> {
    if residue < MODULUS {
        Ok(residue + b'A')
    } else {
        Err(Error::InvalidSymbol(residue))
    }
}

/// Convert a whole letter sequence to residues
pub fn to_residues(symbols: &[u8]) -> Result<Vec<u8>, Error> {
    symbols.iter().map(|&s| to_residue(s)).collect()
}

/// Convert a whole residue sequence back to letters
pub fn to_symbols(residues: &[u8]) -> Result<Vec<u8>, Error> {
    residues.iter().map(|&r| to_symbol(r)).collect()
}

/// Reject any byte that is not a residue in [0, 26)
pub(crate) fn check_residues(residues: &[u8]) -> Result<(), Error> {
    for &r in residues.iter() {
        if r >= MODULUS {
            return Err(Error::InvalidSymbol(r));
        }
    }
    Ok(())
}

/// True iff a is a unit of Z/26Z, i.e. gcd(a, 26) == 1
pub fn is_invertible(a: u8) -> bool {
    (a as i32).gcd(&(MODULUS as i32)) == 1
}

/// Multiplicative inverse of a unit mod 26
///
/// errors: returns Error for non-units
pub fn mod_inverse(a: u8) -> Result<u8, Error> {
    let egcd = (a as i32).extended_gcd(&(MODULUS as i32));
    if egcd.gcd != 1 {
        return Err(Error::NotInvertible(a));
    }
    Ok(egcd.x.rem_euclid(MODULUS as i32) as u8)
}

/// The units of Z/26Z in ascending order
///
/// Bounds exhaustive searches over multiplicative key parts
pub fn invertible_residues() -> [u8; 12] {
    UNITS
}

/// Every residue d satisfying a*d = b (mod 26), ascending
///
/// 26 is not prime, so there can be zero, one, or gcd(a, 26) solutions:
/// none when gcd(a, 26) does not divide b, otherwise one per multiple of
/// 26 / gcd(a, 26) above the base solution from the extended gcd.
pub fn solve_linear(a: u8, b: u8) -> Vec<u8> {
    let m = MODULUS as i32;
    let egcd = (a as i32).extended_gcd(&m);

    if (b as i32) % egcd.gcd != 0 {
        return Vec::new();
    }

    let step = m / egcd.gcd;
    let base = (egcd.x * (b as i32 / egcd.gcd)).rem_euclid(step);

    let mut res = Vec::with_capacity(egcd.gcd as usize);
    for k in 0..egcd.gcd {
        res.push((base + k * step) as u8);
    }

    res
}

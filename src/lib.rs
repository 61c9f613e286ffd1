#![no_std]

extern crate alloc;

pub mod affine;
pub mod caesar;
pub mod cipher;
pub mod freq;
pub mod report;
pub mod ring;
pub mod vigenere;

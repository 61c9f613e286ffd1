use cipherbreak::{affine, freq, ring};

use crate::common::{clean, to_text, DICKENS, KASISKI};

// worked example: alpha = 9, beta = 10
const EXERCISE_CIPHERTEXT: &str = "edsgickxhuklzveqzvkxwkzukcvuh";
const EXERCISE_PLAINTEXT: &str = "ifyoucanreadthisthankateacher";

#[test]
fn worked_vector_decrypts() {
    let ciphertext = clean(EXERCISE_CIPHERTEXT);
    let key = affine::Key::new(9, 10).unwrap();

    let plaintext = affine::decrypt(key, &ciphertext).unwrap();
    assert_eq!(to_text(&plaintext).to_lowercase(), EXERCISE_PLAINTEXT);
}

#[test]
fn known_pair_recovery_unique() {
    // crib "if" against the first two ciphertext letters; plaintext
    // difference 8 - 5 = 3 is a unit, so the key is unique
    let c0 = ring::to_residue(b'E').unwrap();
    let c1 = ring::to_residue(b'D').unwrap();
    let p0 = ring::to_residue(b'I').unwrap();
    let p1 = ring::to_residue(b'F').unwrap();

    let keys = affine::recover_from_known_pairs(c0, p0, c1, p1).unwrap();
    assert_eq!(keys, vec![affine::Key::new(9, 10).unwrap()]);
}

#[test]
fn known_pair_recovery_degenerate() {
    // crib "an" at positions 6..8 ("...canr..." -> ciphertext "...kx...");
    // plaintext difference 13 shares a factor with 26, so every unit alpha
    // solves the system and 12 candidate keys come back
    let ciphertext = clean(EXERCISE_CIPHERTEXT);
    let plaintext = clean(EXERCISE_PLAINTEXT);

    let keys =
        affine::recover_from_known_pairs(ciphertext[6], plaintext[6], ciphertext[7], plaintext[7])
            .unwrap();

    assert!(keys.len() > 1);
    assert_eq!(keys.len(), 12);
    assert!(keys.contains(&affine::Key::new(9, 10).unwrap()));

    // ascending (alpha, beta)
    for pair in keys.windows(2) {
        assert!(pair[0] < pair[1]);
    }
}

#[test]
fn exhaustive_recovers_known_key() {
    let plaintext = clean(KASISKI);
    assert!(plaintext.len() >= 200);

    let key = affine::Key::new(5, 8).unwrap();
    let ciphertext = affine::encrypt(key, &plaintext).unwrap();

    let report = affine::attack_exhaustive(&ciphertext, false).unwrap();
    let keys: Vec<affine::Key> = report.keys().copied().collect();
    assert!(keys.contains(&key));
    assert_eq!(report.best().unwrap().plaintext, plaintext);
}

#[test]
fn frequency_attack_recovers_key() {
    // sample chosen so its two most frequent letters are E then T
    let plaintext = clean(DICKENS);
    let key = affine::Key::new(7, 3).unwrap();
    let ciphertext = affine::encrypt(key, &plaintext).unwrap();

    let report = affine::attack_frequency(&ciphertext, false).unwrap();
    let keys: Vec<affine::Key> = report.keys().copied().collect();
    assert_eq!(keys, vec![key]);
    assert_eq!(report.best().unwrap().plaintext, plaintext);
}

#[test]
fn restricted_searches_recover_key() {
    let plaintext = clean(KASISKI);
    let key = affine::Key::new(5, 8).unwrap();
    let ciphertext = affine::encrypt(key, &plaintext).unwrap();

    let by_beta = affine::attack_known_alpha(&ciphertext, 5, false).unwrap();
    assert_eq!(by_beta.best().unwrap().key, key);

    let by_alpha = affine::attack_known_beta(&ciphertext, 8, false).unwrap();
    assert_eq!(by_alpha.best().unwrap().key, key);
}

#[test]
fn true_plaintext_outscores_wrong_keys() {
    let plaintext = clean(KASISKI);
    let key = affine::Key::new(5, 8).unwrap();
    let ciphertext = affine::encrypt(key, &plaintext).unwrap();

    let true_score = freq::dot_product_score(&plaintext).unwrap();
    let mut beaten = 0;
    let mut total = 0;
    for &alpha in ring::UNITS.iter() {
        for beta in 0..26 {
            let wrong_key = affine::Key::new(alpha, beta).unwrap();
            if wrong_key == key {
                continue;
            }
            total += 1;
            let wrong = affine::decrypt(wrong_key, &ciphertext).unwrap();
            if true_score >= freq::dot_product_score(&wrong).unwrap() {
                beaten += 1;
            }
        }
    }

    // at least 90% of the 311 wrong candidates
    assert_eq!(total, 311);
    assert!(beaten * 10 >= total * 9);
}

#[test]
fn attacks_are_deterministic() {
    let key = affine::Key::new(11, 21).unwrap();
    let ciphertext = affine::encrypt(key, &clean(KASISKI)).unwrap();

    assert_eq!(
        affine::attack_exhaustive(&ciphertext, false).unwrap(),
        affine::attack_exhaustive(&ciphertext, false).unwrap()
    );
    assert_eq!(
        affine::attack_frequency(&ciphertext, false).unwrap(),
        affine::attack_frequency(&ciphertext, false).unwrap()
    );
}

#[test]
fn random_key_round_trip() {
    use rand::Rng;

    let plaintext = clean(DICKENS);
    let mut rng = rand::thread_rng();

    for _ in 0..16 {
        let alpha = ring::UNITS[rng.gen_range(0, ring::UNITS.len())];
        let beta: u8 = rng.gen_range(0, 26);
        let key = affine::Key::new(alpha, beta).unwrap();

        let ciphertext = affine::encrypt(key, &plaintext).unwrap();
        assert_eq!(affine::decrypt(key, &ciphertext).unwrap(), plaintext);
    }
}

//! Sign compatibility scoring

use crate::model::{Element, Modality, ZodiacSign};

use super::database::record;

const BASE_SCORE: i32 = 50;

/// Element component of the score; symmetric in its arguments
pub fn element_affinity(a: Element, b: Element) -> i32 {
    use Element::{Air, Earth, Fire, Water};

    if a == b {
        return 30;
    }
    match (a, b) {
        (Fire, Air) | (Air, Fire) | (Earth, Water) | (Water, Earth) => 20,
        (Fire, Water) | (Water, Fire) | (Earth, Air) | (Air, Earth) => -10,
        _ => 0,
    }
}

/// Modality component of the score; symmetric in its arguments
pub fn modality_affinity(a: Modality, b: Modality) -> i32 {
    if a == b { 10 } else { 0 }
}

/// Best/challenging-match component. Each direction counts on its own,
/// so the result is not guaranteed to be symmetric.
pub fn relationship_affinity(a: ZodiacSign, b: ZodiacSign) -> i32 {
    let (ra, rb) = (&record(a).relationships, &record(b).relationships);
    let mut score = 0;

    if ra.best_matches.contains(&b) {
        score += 15;
    }
    if rb.best_matches.contains(&a) {
        score += 15;
    }
    if ra.challenging_matches.contains(&b) {
        score -= 15;
    }
    if rb.challenging_matches.contains(&a) {
        score -= 15;
    }
    score
}

/// Compatibility between two signs, clamped to 0..=100
pub fn compatibility(a: ZodiacSign, b: ZodiacSign) -> u8 {
    let raw = BASE_SCORE
        + element_affinity(a.element(), b.element())
        + modality_affinity(a.modality(), b.modality())
        + relationship_affinity(a, b);

    // clamp keeps the value inside u8 range
    raw.clamp(0, 100) as u8
}

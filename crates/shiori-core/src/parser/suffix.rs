//! Sub-chapter suffixes: `.5`, `a`, `.b`, `extra`, `omake`, `special`.

/// Fraction for "extra" releases, sorted after every other sub-chapter.
pub const EXTRA_FRACTION: f64 = 0.99;
/// Fraction for "omake" releases.
pub const OMAKE_FRACTION: f64 = 0.98;
/// Fraction for "special" releases.
pub const SPECIAL_FRACTION: f64 = 0.97;

/// Returns the fractional part encoded by a matched number suffix.
///
/// `decimal` is the dotted decimal capture (".5"), `alpha` the letter run
/// that may follow the integer ("a", ".b", "extra"). A decimal always wins.
/// Unrecognized suffixes add nothing.
#[must_use]
pub fn resolve_suffix(decimal: Option<&str>, alpha: Option<&str>) -> f64 {
    if let Some(decimal) = decimal.filter(|d| !d.is_empty()) {
        return decimal.parse().unwrap_or(0.0);
    }

    let Some(alpha) = alpha.filter(|a| !a.is_empty()) else {
        return 0.0;
    };

    if alpha.contains("extra") {
        return EXTRA_FRACTION;
    }
    if alpha.contains("omake") {
        return OMAKE_FRACTION;
    }
    if alpha.contains("special") {
        return SPECIAL_FRACTION;
    }

    let trimmed = alpha.strip_prefix('.').unwrap_or(alpha);
    let mut chars = trimmed.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) => letter_fraction(letter),
        _ => 0.0,
    }
}

/// `a` → 0.1, `b` → 0.2, … `i` → 0.9; anything past `i` adds nothing.
fn letter_fraction(letter: char) -> f64 {
    let position = u32::from(letter).wrapping_sub(u32::from('a')).wrapping_add(1);
    if (1..10).contains(&position) {
        f64::from(position) / 10.0
    } else {
        0.0
    }
}

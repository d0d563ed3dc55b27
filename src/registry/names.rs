//! Fuzzy name matching across registry dialects.
//!
//! Registry names, legacy WKT1 names and pipeline vocabularies disagree on
//! case, punctuation, diacritics and underscores-vs-spaces. For matching
//! purposes all of that is noise: "Position Vector transformation (geog2D
//! domain)", "Position_Vector_Transformation" and "position vector
//! transformation geog2d domain" identify the same method.

/// Reduce a name to its matching skeleton: lowercase, diacritics folded to
/// ASCII, anything non-alphanumeric dropped.
pub fn canonicalize(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    for c in name.chars() {
        let c = fold_diacritic(c);
        if c.is_ascii_alphanumeric() {
            result.push(c.to_ascii_lowercase());
        }
    }
    result
}

/// Case/punctuation/diacritic-insensitive name comparison
pub fn is_equivalent_name(a: &str, b: &str) -> bool {
    canonicalize(a) == canonicalize(b)
}

// The diacritics that actually occur in registry names ("Krovák",
// "Laborde Grid Européen", ...). Anything else passes through untouched.
fn fold_diacritic(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ä' | 'å' | 'Á' | 'À' | 'Â' | 'Ä' | 'Å' => 'a',
        'é' | 'è' | 'ê' | 'ë' | 'É' | 'È' | 'Ê' | 'Ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' | 'Í' | 'Ì' | 'Î' | 'Ï' => 'i',
        'ó' | 'ò' | 'ô' | 'ö' | 'Ó' | 'Ò' | 'Ô' | 'Ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' | 'Ú' | 'Ù' | 'Û' | 'Ü' => 'u',
        'ç' | 'Ç' => 'c',
        'ñ' | 'Ñ' => 'n',
        _ => c,
    }
}

// ----- T E S T S ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dialects() {
        assert!(is_equivalent_name(
            "Position Vector transformation (geog2D domain)",
            "Position_Vector_transformation_geog2D_domain"
        ));
        assert!(is_equivalent_name("Krovák", "Krovak"));
        assert!(is_equivalent_name("NTv2", "ntv2"));
        assert!(!is_equivalent_name("NTv2", "NTv1"));
    }

    #[test]
    fn skeletons() {
        assert_eq!(canonicalize("Lambert Conic Conformal (2SP)"), "lambertconicconformal2sp");
        assert_eq!(canonicalize("Grid Européen"), "grideuropeen");
    }
}

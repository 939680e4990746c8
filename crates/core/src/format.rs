//! Plain-text helpers for presenting equation symbols.
//!
//! Symbols carry exponents in caret form (`V^2`). Renderers that draw a real
//! superscript split the symbol with [`split_exponent`]; text output can use
//! [`superscript`] instead.

/// Split a symbol on its first caret: `"V^2"` -> `("V", Some("2"))`, `"R"` -> `("R", None)`
pub fn split_exponent(symbol: &str) -> (&str, Option<&str>) {
    match symbol.split_once('^') {
        Some((base, exponent)) => (base, Some(exponent)),
        None => (symbol, None),
    }
}

/// Render caret exponents with Unicode superscript characters: `"V^2"` -> `"V²"`.
///
/// Characters without a superscript form are kept after the caret unchanged.
pub fn superscript(symbol: &str) -> String {
    let (base, exponent) = split_exponent(symbol);
    let Some(exponent) = exponent else {
        return base.to_string();
    };

    let mut out = String::with_capacity(symbol.len() + exponent.len());
    out.push_str(base);
    if exponent.chars().all(|c| superscript_char(c).is_some()) {
        out.extend(exponent.chars().filter_map(superscript_char));
    } else {
        out.push('^');
        out.push_str(exponent);
    }
    out
}

fn superscript_char(c: char) -> Option<char> {
    Some(match c {
        '0' => '⁰',
        '1' => '¹',
        '2' => '²',
        '3' => '³',
        '4' => '⁴',
        '5' => '⁵',
        '6' => '⁶',
        '7' => '⁷',
        '8' => '⁸',
        '9' => '⁹',
        '-' => '⁻',
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_exponent() {
        assert_eq!(split_exponent("V^2"), ("V", Some("2")));
        assert_eq!(split_exponent("R"), ("R", None));
        assert_eq!(split_exponent("m^2"), ("m", Some("2")));
        assert_eq!(split_exponent("^"), ("", Some("")));
    }

    #[test]
    fn test_superscript() {
        assert_eq!(superscript("V^2"), "V²");
        assert_eq!(superscript("m^-1"), "m⁻¹");
        assert_eq!(superscript("Ω"), "Ω");
        assert_eq!(superscript("x^n"), "x^n");
    }
}

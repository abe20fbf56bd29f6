//! GSM 03.38 default alphabet membership.
//!
//! The tables below reproduce the standard repertoires exactly. The basic
//! set notably includes `É è é ù ì ò à Ç` but not the other Portuguese
//! accented letters (`á ã ç í ó õ ú …`) — a message containing those must
//! fall back to UCS-2, which is what real carriers bill for.

/// Basic (1-septet) characters of the GSM 03.38 default alphabet.
pub(crate) fn is_basic(c: char) -> bool {
    matches!(c,
        'A'..='Z' | 'a'..='z' | '0'..='9'
        | '@' | '£' | '$' | '¥'
        | 'è' | 'é' | 'ù' | 'ì' | 'ò' | 'Ç'
        | '\n' | '\r'
        | 'Ø' | 'ø' | 'Å' | 'å'
        | 'Δ' | 'Φ' | 'Γ' | 'Λ' | 'Ω' | 'Π' | 'Ψ' | 'Σ' | 'Θ' | 'Ξ'
        | '_' | 'Æ' | 'æ' | 'ß' | 'É'
        | ' ' | '!' | '"' | '#' | '¤' | '%' | '&' | '\'' | '(' | ')'
        | '*' | '+' | ',' | '-' | '.' | '/'
        | ':' | ';' | '<' | '=' | '>' | '?'
        | '¡' | 'Ä' | 'Ö' | 'Ñ' | 'Ü' | '§'
        | '¿' | 'ä' | 'ö' | 'ñ' | 'ü' | 'à'
    )
}

/// Extended (escape-prefixed, 2-septet) characters of GSM 03.38.
pub(crate) fn is_extended(c: char) -> bool {
    matches!(
        c,
        '\u{000C}' | '^' | '{' | '}' | '\\' | '[' | ']' | '~' | '|' | '€'
    )
}

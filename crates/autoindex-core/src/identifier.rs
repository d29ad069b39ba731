//! Module identifier derivation
//!
//! A sibling module is imported under a name derived from its file stem.
//! Stems containing `-` or `_` are camel-cased; anything else is used as is.

/// Derive the namespace identifier a sibling module is imported as.
///
/// Collisions (`foo-bar` and `fooBar` both give `fooBar`) and stems that are
/// not valid identifiers (`2fa-codes`) pass through unchanged.
pub fn derive_identifier(stem: &str) -> String {
    if stem.contains('-') || stem.contains('_') {
        camel_case(stem)
    } else {
        stem.to_string()
    }
}

/// Lower-camel-case `input`, splitting on separators and case boundaries.
pub fn camel_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());

    for (index, word) in split_words(input).iter().enumerate() {
        let lower = word.to_lowercase();
        if index == 0 {
            out.push_str(&lower);
            continue;
        }

        let mut chars = lower.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }

    out
}

fn split_words(input: &str) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if let Some(&prev) = i.checked_sub(1).and_then(|p| chars.get(p)) {
            let next = chars.get(i + 1).copied();
            // fooBar -> foo|Bar, XMLParser -> XML|Parser, web3auth -> web|3|auth
            let lower_to_upper = prev.is_lowercase() && c.is_uppercase();
            let acronym_end = prev.is_uppercase()
                && c.is_uppercase()
                && next.is_some_and(char::is_lowercase);
            let digit_edge = prev.is_ascii_digit() != c.is_ascii_digit();
            if !current.is_empty() && (lower_to_upper || acronym_end || digit_edge) {
                words.push(std::mem::take(&mut current));
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

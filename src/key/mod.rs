//! Composite keys - several string attributes packed into one store key.
//!
//! A key is laid out as `namespace~attr1~attr2~...~`. The trailing separator
//! makes `namespace~` a strict prefix of every key in the namespace, so a
//! range scan over one namespace never picks up a sibling namespace that
//! merely shares a textual prefix (`Bet` vs `BetIndex`).
//!
//! ## Example
//!
//! ```
//! use bet_ledger::key::{build_composite_key, decode_composite_key};
//!
//! let key = build_composite_key("BetIndex", &["4D", "324636"]).unwrap();
//! assert_eq!(key, "BetIndex~4D~324636~");
//!
//! let (namespace, attributes) = decode_composite_key(&key).unwrap();
//! assert_eq!(namespace, "BetIndex");
//! assert_eq!(attributes, vec!["4D", "324636"]);
//! ```

mod schema;

use crate::error::{LedgerError, LedgerResult};

pub use schema::{KeySchema, SchemaRegistry, BET_INDEX_ATTRIBUTES, DEFAULT_BET_NAMESPACE};

/// Reserved separator between key segments.
pub const COMPOSITE_KEY_SEPARATOR: char = '~';

/// Join a namespace and its attributes into a single composite key.
///
/// Fails with `InvalidAttribute` if the namespace is empty or if any segment
/// contains the separator, since such a key could not be decoded back.
pub fn build_composite_key<S: AsRef<str>>(
    namespace: &str,
    attributes: &[S],
) -> LedgerResult<String> {
    validate_namespace(namespace)?;

    let mut key = String::with_capacity(
        namespace.len() + 1 + attributes.iter().map(|a| a.as_ref().len() + 1).sum::<usize>(),
    );
    key.push_str(namespace);
    key.push(COMPOSITE_KEY_SEPARATOR);

    for attribute in attributes {
        let attribute = attribute.as_ref();
        validate_attribute(attribute)?;
        key.push_str(attribute);
        key.push(COMPOSITE_KEY_SEPARATOR);
    }

    Ok(key)
}

/// Split a composite key back into its namespace and attributes.
///
/// Keys under a namespace known to [`SchemaRegistry::default`] must carry
/// exactly that schema's attribute count, otherwise `MalformedKey`.
pub fn decode_composite_key(key: &str) -> LedgerResult<(String, Vec<String>)> {
    SchemaRegistry::default().decode(key)
}

/// Layout-only split: trailing separator and a non-empty namespace.
pub(crate) fn split_composite_key(key: &str) -> LedgerResult<(String, Vec<String>)> {
    let body = key
        .strip_suffix(COMPOSITE_KEY_SEPARATOR)
        .ok_or_else(|| LedgerError::malformed_key(key, "missing trailing separator"))?;

    let mut segments = body.split(COMPOSITE_KEY_SEPARATOR);
    let namespace = match segments.next() {
        Some(ns) if !ns.is_empty() => ns.to_string(),
        _ => return Err(LedgerError::malformed_key(key, "missing namespace")),
    };

    Ok((namespace, segments.map(str::to_string).collect()))
}

/// Prefix shared by every key in `namespace` whose leading attributes equal
/// `leading`. With no leading attributes this is just `namespace~`.
pub fn partial_key<S: AsRef<str>>(namespace: &str, leading: &[S]) -> LedgerResult<String> {
    build_composite_key(namespace, leading)
}

/// Exclusive upper bound for a prefix scan: the smallest string that sorts
/// after every string starting with `prefix`. `None` means unbounded.
pub fn prefix_end(prefix: &str) -> Option<String> {
    let mut chars: Vec<char> = prefix.chars().collect();
    while let Some(last) = chars.pop() {
        if let Some(next) = next_char(last) {
            chars.push(next);
            return Some(chars.into_iter().collect());
        }
    }
    None
}

fn next_char(c: char) -> Option<char> {
    match c {
        char::MAX => None,
        // skip the surrogate gap
        '\u{D7FF}' => Some('\u{E000}'),
        _ => char::from_u32(c as u32 + 1),
    }
}

pub(crate) fn validate_namespace(namespace: &str) -> LedgerResult<()> {
    if namespace.is_empty() {
        return Err(LedgerError::invalid_attribute(namespace, "namespace must not be empty"));
    }
    if namespace.contains(COMPOSITE_KEY_SEPARATOR) {
        return Err(LedgerError::invalid_attribute(
            namespace,
            "namespace contains the key separator",
        ));
    }
    Ok(())
}

fn validate_attribute(attribute: &str) -> LedgerResult<()> {
    if attribute.contains(COMPOSITE_KEY_SEPARATOR) {
        return Err(LedgerError::invalid_attribute(
            attribute,
            "attribute contains the key separator",
        ));
    }
    Ok(())
}

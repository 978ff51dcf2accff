//! Static estimate of the number of possible passwords.

/// Label for the number of possible passwords with the given
/// number of components, `None` outside the known range.
pub fn label(components: usize) -> Option<&'static str> {
    match components {
        2 => Some("60 million"),
        3 => Some("470 billion"),
        4 => Some("3 quadrillion"),
        5 => Some("28 quintillion"),
        6 => Some("221 sextillion"),
        7 => Some("1 octillion"),
        8 => Some("13 nonillion"),
        _ => None,
    }
}

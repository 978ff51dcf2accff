//! Bounded retry for generation passes.

/// Outcome of a bounded retry.
#[derive(Debug, PartialEq, Eq)]
pub enum Retry<T> {
    /// A pass produced an acceptable value.
    Accepted {
        /// Accepted value.
        value: T,
        /// Number of passes run, including the accepted one.
        attempts: usize,
    },
    /// Every pass was rejected.
    Exhausted {
        /// Value from the final rejected pass.
        last: Option<T>,
        /// Number of passes run.
        attempts: usize,
    },
}

/// Run `pass` until `accept` holds for its output or
/// `max_attempts` passes have been made.
///
/// The pass receives the one-based attempt number. An error from
/// a pass stops the loop immediately and is returned as is.
pub fn bounded<T, E, F, P>(
    max_attempts: usize,
    mut pass: F,
    mut accept: P,
) -> std::result::Result<Retry<T>, E>
where
    F: FnMut(usize) -> std::result::Result<T, E>,
    P: FnMut(&T) -> bool,
{
    let mut last = None;
    for attempt in 1..=max_attempts {
        let value = pass(attempt)?;
        if accept(&value) {
            return Ok(Retry::Accepted {
                value,
                attempts: attempt,
            });
        }
        last = Some(value);
    }
    Ok(Retry::Exhausted {
        last,
        attempts: max_attempts,
    })
}

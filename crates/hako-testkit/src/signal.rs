/// Folded outcome of a fallible operation.
///
/// Completing cleanly is reported as its own distinguished case, so a
/// test can assert "nothing went wrong" through the same `matches!`
/// idiom it uses for the failure cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signal<E> {
    /// The operation completed without failing.
    NoFailure,
    /// The operation failed; the error is carried unchanged.
    Failed(E),
}

impl<E> Signal<E> {
    pub fn is_no_failure(&self) -> bool { matches!(self, Signal::NoFailure) }

    /// The carried error, if any.
    pub fn failure(self) -> Option<E> {
        match self {
            Signal::NoFailure => None,
            Signal::Failed(e) => Some(e),
        }
    }
}

/// Run `op` and fold its result into a [`Signal`], discarding the
/// success value.
pub fn outcome<T, E>(op: impl FnOnce() -> Result<T, E>) -> Signal<E> {
    match op() {
        Ok(_) => Signal::NoFailure,
        Err(e) => Signal::Failed(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_becomes_the_distinguished_signal() {
        let sig = outcome(|| Ok::<_, String>(42));
        assert!(sig.is_no_failure());
        assert_eq!(sig.failure(), None);
    }

    #[test]
    fn errors_pass_through_unchanged() {
        let sig = outcome(|| Err::<(), _>("boom".to_string()));
        assert_eq!(sig, Signal::Failed("boom".to_string()));
    }
}

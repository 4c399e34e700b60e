#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheckError {
    /// The call itself was malformed: bad index, element constraint on a
    /// non-iterable value, size constraint on an unsized value. A caller
    /// bug, never a data problem.
    #[error("invalid validate() call: {0}")]
    InvalidUsage(String),

    /// The value's category was not in the allowed set.
    #[error("{name}: {types} expected")]
    Expected { name: String, types: String },

    /// The value's category was in the denied set.
    #[error("{name}: {types} not allowed")]
    NotAllowed { name: String, types: String },

    /// Some element's category was not in the allowed set.
    #[error("in {name}: {types} expected")]
    ElementExpected { name: String, types: String },

    /// Some element's category was in the denied set.
    #[error("in {name}: {types} not allowed")]
    ElementNotAllowed { name: String, types: String },

    /// The size predicate rejected the value's length.
    #[error("{name}: wrong length")]
    WrongLength { name: String },
}

impl CheckError {
    pub fn is_invalid_usage(&self) -> bool { matches!(self, CheckError::InvalidUsage(_)) }

    /// True for the four category-constraint failures.
    pub fn is_type_mismatch(&self) -> bool {
        matches!(
            self,
            CheckError::Expected { .. }
                | CheckError::NotAllowed { .. }
                | CheckError::ElementExpected { .. }
                | CheckError::ElementNotAllowed { .. }
        )
    }

    /// True for a size-predicate failure.
    pub fn is_size_mismatch(&self) -> bool { matches!(self, CheckError::WrongLength { .. }) }
}

pub type Result<T> = std::result::Result<T, CheckError>;

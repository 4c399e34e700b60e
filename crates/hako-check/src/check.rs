//! The constraint bundle and its evaluation.

use std::fmt;

use crate::error::{CheckError, Result};
use crate::value::{Category, Value};

/// Ordered collection of categories attached to one constraint.
///
/// Built from a single category or any ordered collection of them. Order
/// and duplicates are preserved so error messages list the categories
/// exactly as the caller wrote them. An empty set detaches the constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorySet(Vec<Category>);

impl CategorySet {
    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    pub fn contains(&self, category: &Category) -> bool { self.0.contains(category) }

    pub fn iter(&self) -> impl Iterator<Item = &Category> { self.0.iter() }

    /// Comma-and-space joined short names, in listed order.
    fn names(&self) -> String {
        self.0
            .iter()
            .map(Category::name)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl From<Category> for CategorySet {
    fn from(category: Category) -> Self { CategorySet(vec![category]) }
}

impl From<Vec<Category>> for CategorySet {
    fn from(categories: Vec<Category>) -> Self { CategorySet(categories) }
}

impl<const N: usize> From<[Category; N]> for CategorySet {
    fn from(categories: [Category; N]) -> Self { CategorySet(categories.to_vec()) }
}

impl From<&[Category]> for CategorySet {
    fn from(categories: &[Category]) -> Self { CategorySet(categories.to_vec()) }
}

/// One level of nested access into the checked value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Index {
    /// Position into a `Seq`.
    Pos(usize),
    /// Key into a `Map`.
    Key(String),
}

impl From<usize> for Index {
    fn from(i: usize) -> Self { Index::Pos(i) }
}

impl From<&str> for Index {
    fn from(key: &str) -> Self { Index::Key(key.to_string()) }
}

impl From<String> for Index {
    fn from(key: String) -> Self { Index::Key(key) }
}

impl fmt::Display for Index {
    // rendered unquoted for both positions and keys
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Index::Pos(i) => write!(f, "{}", i),
            Index::Key(k) => f.write_str(k),
        }
    }
}

type SizePredicate = Box<dyn Fn(usize) -> bool + Send + Sync>;

/// Immutable bundle of optional, independent constraints evaluated against
/// one named value.
///
/// Checks run in a fixed order and stop at the first violation, so error
/// messages are deterministic: `allow`, `deny`, `element_allow`,
/// `element_deny`, `size`. Element constraints are vacuously satisfied on
/// empty iterables. Success is silent.
///
/// ```
/// use hako_check::{Category, Check, Value};
///
/// let count = Value::Int(3);
/// Check::new().allow(Category::Int).validate("count", &count)?;
///
/// let err = Check::new()
///     .allow(Category::Float)
///     .validate("count", &count)
///     .unwrap_err();
/// assert_eq!(err.to_string(), "count: float expected");
/// # Ok::<(), hako_check::CheckError>(())
/// ```
#[derive(Default)]
pub struct Check {
    allow: CategorySet,
    deny: CategorySet,
    element_allow: CategorySet,
    element_deny: CategorySet,
    size: Option<SizePredicate>,
}

impl fmt::Debug for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Check")
            .field("allow", &self.allow)
            .field("deny", &self.deny)
            .field("element_allow", &self.element_allow)
            .field("element_deny", &self.element_deny)
            .field("size", &self.size.is_some())
            .finish()
    }
}

impl Check {
    pub fn new() -> Self { Self::default() }

    /// The value's category must be one of these.
    pub fn allow(mut self, categories: impl Into<CategorySet>) -> Self {
        self.allow = categories.into();
        self
    }

    /// The value's category must not be any of these.
    pub fn deny(mut self, categories: impl Into<CategorySet>) -> Self {
        self.deny = categories.into();
        self
    }

    /// Every element's category must be one of these. Requires an
    /// iterable value.
    pub fn element_allow(mut self, categories: impl Into<CategorySet>) -> Self {
        self.element_allow = categories.into();
        self
    }

    /// No element's category may be any of these. Requires an iterable
    /// value.
    pub fn element_deny(mut self, categories: impl Into<CategorySet>) -> Self {
        self.element_deny = categories.into();
        self
    }

    /// Predicate over the value's length. Requires a sized value. A
    /// violation reports as a size mismatch, distinct from the category
    /// checks.
    pub fn size(mut self, predicate: impl Fn(usize) -> bool + Send + Sync + 'static) -> Self {
        self.size = Some(Box::new(predicate));
        self
    }

    /// Validate `value`, using `name` as the display name in messages.
    pub fn validate(&self, name: &str, value: &Value) -> Result<()> {
        self.run(name, value)
    }

    /// Validate one element of `value`: a `Seq` position or a `Map` key.
    /// The display name becomes `name[index]`. A bad index or a
    /// non-indexable value is an invalid call, not a validation failure.
    pub fn validate_at(&self, name: &str, value: &Value, index: impl Into<Index>) -> Result<()> {
        let index = index.into();
        let target = value.get(&index).ok_or_else(|| {
            CheckError::InvalidUsage(format!(
                "index {} cannot be resolved in {}",
                index, name
            ))
        })?;
        self.run(&format!("{}[{}]", name, index), target)
    }

    fn run(&self, name: &str, value: &Value) -> Result<()> {
        // Preconditions first: a constraint that cannot apply to this
        // value shape is a caller bug regardless of what the other
        // checks would have said.
        if (!self.element_allow.is_empty() || !self.element_deny.is_empty())
            && value.elements().is_none()
        {
            return Err(CheckError::InvalidUsage(format!(
                "element constraint on non-iterable {}",
                name
            )));
        }
        if self.size.is_some() && value.len().is_none() {
            return Err(CheckError::InvalidUsage(format!(
                "size constraint on unsized {}",
                name
            )));
        }

        let category = value.category();

        if !self.allow.is_empty() && !self.allow.contains(&category) {
            return Err(CheckError::Expected {
                name: name.to_string(),
                types: self.allow.names(),
            });
        }

        if !self.deny.is_empty() && self.deny.contains(&category) {
            return Err(CheckError::NotAllowed {
                name: name.to_string(),
                types: self.deny.names(),
            });
        }

        if !self.element_allow.is_empty()
            && let Some(mut elements) = value.elements()
            && elements.any(|el| !self.element_allow.contains(&el.category()))
        {
            return Err(CheckError::ElementExpected {
                name: name.to_string(),
                types: self.element_allow.names(),
            });
        }

        if !self.element_deny.is_empty()
            && let Some(mut elements) = value.elements()
            && elements.any(|el| self.element_deny.contains(&el.category()))
        {
            return Err(CheckError::ElementNotAllowed {
                name: name.to_string(),
                types: self.element_deny.names(),
            });
        }

        if let Some(predicate) = &self.size {
            let len = value.len().unwrap_or(0);
            if !predicate(len) {
                return Err(CheckError::WrongLength {
                    name: name.to_string(),
                });
            }
        }

        Ok(())
    }
}

//! Read access to assertion attribute statements

use crate::error::Result;
use crate::types::AttributeStatement;
use std::borrow::Cow;

/// Read access to the attribute statements of a validated assertion
///
/// Implemented by [`crate::types::Assertion`]; token layers with their own
/// in-memory representation can implement it directly instead of converting.
pub trait AttributeSource: Send + Sync {
    /// Attribute statements in document order
    ///
    /// # Errors
    ///
    /// Returns an [`crate::AssertionReadError`] when the token cannot be
    /// interpreted. Callers must not treat this as "no attributes".
    fn attribute_statements(&self) -> Result<Cow<'_, [AttributeStatement]>>;
}

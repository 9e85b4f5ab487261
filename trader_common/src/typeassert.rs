//! Error for failed dynamic type conversions.

use std::any::type_name;

use thiserror::Error;

/// A value did not have the type the caller required.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("type assert failure from {from} to {to}{}", field_suffix(.field))]
pub struct TypeAssertError {
    /// Type actually received.
    pub from: String,
    /// Type that was required.
    pub to: String,
    /// Field the value came from, if known.
    pub field: Option<String>,
}

fn field_suffix(field: &Option<String>) -> String {
    field
        .as_deref()
        .map(|f| format!(" for: {f}"))
        .unwrap_or_default()
}

/// Build a [`TypeAssertError`] for `received`, which was meant to be `required`.
pub fn type_assert_error<T: ?Sized>(required: &str, _received: &T, field: Option<&str>) -> TypeAssertError {
    TypeAssertError {
        from: type_name::<T>().to_string(),
        to: required.to_string(),
        field: field.map(str::to_string),
    }
}

use thiserror::Error;

/// Errors raised when a host addresses the form with names it does not know.
///
/// Field validation failures are not errors in this sense; they live in an
/// [`ErrorSet`](crate::form::ErrorSet).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("unknown recipe field '{0}'")]
    UnknownField(String),

    #[error("unknown form section '{0}'; expected one of: all, basic, colors")]
    UnknownSection(String),
}

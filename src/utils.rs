use std::fmt;

use miette::{Context, IntoDiagnostic};

/// Attaches a description of the failed action to an error
pub trait Describe<T, E>: miette::IntoDiagnostic<T, E> {
    fn describe<S: fmt::Display + Send + Sync + 'static>(self, s: S) -> miette::Result<T>;

    /// Like [`Describe::describe`] but only builds the description on failure
    fn with_describe<F: FnOnce() -> S, S: fmt::Display + Send + Sync + 'static>(
        self,
        f: F,
    ) -> miette::Result<T>;
}

impl<T, E: std::error::Error + Send + Sync + 'static> Describe<T, E> for Result<T, E> {
    fn describe<S: fmt::Display + Send + Sync + 'static>(self, s: S) -> miette::Result<T> {
        self.into_diagnostic().context(s)
    }

    fn with_describe<F: FnOnce() -> S, S: fmt::Display + Send + Sync + 'static>(
        self,
        f: F,
    ) -> miette::Result<T> {
        self.into_diagnostic().with_context(f)
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn describes_failures() {
        let res: Result<(), io::Error> = Err(io::ErrorKind::NotFound.into());
        let report = res.describe("opening output file").unwrap_err();

        assert_eq!(report.to_string(), "opening output file");
        assert_eq!(report.root_cause().to_string(), "entity not found");
    }

    #[test]
    fn builds_description_lazily() {
        let res: Result<u8, io::Error> = Ok(3);
        let value = res.with_describe(|| -> String { unreachable!() }).unwrap();

        assert_eq!(value, 3);
    }
}

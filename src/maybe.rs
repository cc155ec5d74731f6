//! Bind chains for fallible steps.
//!
//! `Maybe` carries a value or an error message; `Either` carries an error
//! (`Left`) or a value (`Right`). Both short-circuit on the failure side.
//! `>>` binds on both types, `|` also binds on `Either`.

use std::fmt;
use std::ops::{BitOr, Shr};

/// A value, or the message explaining why there is none.
///
/// `Display` renders `Just(v)` / `Nothing`; `Debug` keeps the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Maybe<T> {
    Just(T),
    Nothing(String),
}

impl<T> Maybe<T> {
    pub fn nothing(message: impl Into<String>) -> Self {
        Maybe::Nothing(message.into())
    }

    pub fn is_just(&self) -> bool {
        matches!(self, Maybe::Just(_))
    }

    pub fn is_nothing(&self) -> bool {
        matches!(self, Maybe::Nothing(_))
    }

    /// Feed the value to `f`; a `Nothing` passes through unchanged.
    pub fn bind<S, F>(self, f: F) -> Maybe<S>
    where
        F: FnOnce(T) -> Maybe<S>,
    {
        match self {
            Maybe::Just(value) => f(value),
            Maybe::Nothing(message) => Maybe::Nothing(message),
        }
    }

    /// The error message of a `Nothing`.
    pub fn error(&self) -> Option<&str> {
        match self {
            Maybe::Just(_) => None,
            Maybe::Nothing(message) => Some(message),
        }
    }
}

impl<T, S, F> Shr<F> for Maybe<T>
where
    F: FnOnce(T) -> Maybe<S>,
{
    type Output = Maybe<S>;

    fn shr(self, f: F) -> Maybe<S> {
        self.bind(f)
    }
}

impl<T: fmt::Debug> fmt::Display for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Maybe::Just(value) => write!(f, "Just({:?})", value),
            Maybe::Nothing(_) => write!(f, "Nothing"),
        }
    }
}

impl<T> From<Maybe<T>> for Result<T, String> {
    fn from(m: Maybe<T>) -> Self {
        match m {
            Maybe::Just(value) => Ok(value),
            Maybe::Nothing(message) => Err(message),
        }
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(value) => Maybe::Just(value),
            None => Maybe::nothing("no value"),
        }
    }
}

/// `Left` holds the error, `Right` the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Either<L, R> {
    Left(L),
    Right(R),
}

impl<L, R> Either<L, R> {
    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    pub fn bind<S, F>(self, f: F) -> Either<L, S>
    where
        F: FnOnce(R) -> Either<L, S>,
    {
        match self {
            Either::Right(value) => f(value),
            Either::Left(err) => Either::Left(err),
        }
    }

    pub fn error(&self) -> Option<&L> {
        match self {
            Either::Left(err) => Some(err),
            Either::Right(_) => None,
        }
    }
}

impl<L, R, S, F> Shr<F> for Either<L, R>
where
    F: FnOnce(R) -> Either<L, S>,
{
    type Output = Either<L, S>;

    fn shr(self, f: F) -> Either<L, S> {
        self.bind(f)
    }
}

impl<L, R, S, F> BitOr<F> for Either<L, R>
where
    F: FnOnce(R) -> Either<L, S>,
{
    type Output = Either<L, S>;

    fn bitor(self, f: F) -> Either<L, S> {
        self.bind(f)
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Either::Right(value),
            Err(err) => Either::Left(err),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    fn from(e: Either<L, R>) -> Self {
        match e {
            Either::Right(value) => Ok(value),
            Either::Left(err) => Err(err),
        }
    }
}

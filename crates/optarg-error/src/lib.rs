//! Argument error type for use with optarg
//!
//! Scanning a command line can fail in only a handful of ways, each described by an
//! [`ErrorKind`]. Everything else is carried as a free-form message.
//!
//! ## Example
//! ```no_run
//! use optarg_error::Error;
//! use optarg_error::ErrorKind;
//! use optarg_error::Result;
//!
//! fn check(name: &str) -> Result<()> {
//!     if name.len() != 1 {
//!         return Err(Error::msg(format!("`{name}` is not a short name")));
//!     }
//!     Ok(())
//! }
//!
//! fn main() -> Result<()> {
//!     let err = Error::unknown_option("frobnicate", true, "--");
//!     assert_eq!(
//!         err.kind(),
//!         &ErrorKind::UnknownOption {
//!             name: "frobnicate".to_owned(),
//!             long: true,
//!         }
//!     );
//!     check("n")?;
//!     Ok(())
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(clippy::print_stderr)]
#![warn(clippy::print_stdout)]

/// `Result<T, Error>`
///
/// `optarg_error::Result` may be used with one *or* two type parameters.
///
/// ```rust
/// use optarg_error::Result;
///
/// # const IGNORE: &str = stringify! {
/// fn demo1() -> Result<T> {...}
///            // ^ equivalent to std::result::Result<T, optarg_error::Error>
///
/// fn demo2() -> Result<T, OtherError> {...}
///            // ^ equivalent to std::result::Result<T, OtherError>
/// # };
/// ```
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// What went wrong while scanning or reading an option
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A token used the switch syntax but names no registered option
    UnknownOption {
        /// The name with its switch marker stripped
        name: String,
        /// `true` for the long form, `false` for a letter of a short cluster
        long: bool,
    },
    /// A value option was never given its value
    ///
    /// Only reported when strict scanning is enabled.
    MissingValue {
        /// Long name of the option left without a value
        name: String,
    },
    /// A typed accessor was used on an option whose default is of another kind
    TypeMismatch {
        /// Long name of the option
        name: String,
        /// Kind the accessor asked for
        expected: &'static str,
        /// Kind of the registered default
        found: &'static str,
    },
    /// Anything else, see the message
    Custom,
}

/// Argument error type for use with optarg
#[derive(Clone, Debug)]
pub struct Error {
    kind: ErrorKind,
    msg: String,
}

impl Error {
    /// Create a new error object from a printable error message.
    #[cold]
    pub fn msg<M>(message: M) -> Self
    where
        M: std::fmt::Display,
    {
        Error {
            kind: ErrorKind::Custom,
            msg: message.to_string(),
        }
    }

    /// A switch token did not resolve to any registered option
    ///
    /// `marker` is only used for the message so it shows the token the way the user typed it.
    #[cold]
    pub fn unknown_option(name: impl Into<String>, long: bool, marker: &str) -> Self {
        let name = name.into();
        let msg = format!("unknown option `{marker}{name}` specified");
        Error {
            kind: ErrorKind::UnknownOption { name, long },
            msg,
        }
    }

    /// A value option was superseded or the input ended before its value
    #[cold]
    pub fn missing_value(name: impl Into<String>) -> Self {
        let name = name.into();
        let msg = format!("option `{name}` requires a value");
        Error {
            kind: ErrorKind::MissingValue { name },
            msg,
        }
    }

    /// An accessor and the registered default disagree on the value's kind
    #[cold]
    pub fn type_mismatch(
        name: impl Into<String>,
        expected: &'static str,
        found: &'static str,
    ) -> Self {
        let name = name.into();
        let msg = format!("option `{name}` has a {found} default, cannot read it as {expected}");
        Error {
            kind: ErrorKind::TypeMismatch {
                name,
                expected,
                found,
            },
            msg,
        }
    }

    /// The category of this error
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl<E> From<E> for Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    #[cold]
    fn from(error: E) -> Self {
        Error::msg(error)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.msg.fmt(formatter)
    }
}

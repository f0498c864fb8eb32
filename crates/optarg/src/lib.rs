//! Minimal getopt-style CLI parser with word-wrapped usage output
//!
//! Options are declared on a [`Registry`] with a short name, a long name, a description and a
//! default. A `bool` default makes the option a flag; any other default makes it take the next
//! plain token as its value. Short flags may be combined (`-nps`). Tokens that are neither
//! switches nor values end up in the remainder.
//!
//! ## Example
//!
//! ```no_run
#![doc = include_str!("../examples/builder.rs")]
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(clippy::print_stderr)]
#![warn(clippy::print_stdout)]

#[doc = include_str!("../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;

mod usage;

pub use optarg_error::Error;
pub use optarg_error::ErrorKind;
pub use optarg_error::Result;
pub use optarg_layout::wrap;
pub use optarg_layout::Align;
pub use optarg_layout::Layout;
pub use optarg_layout::DEFAULT_WIDTH;
pub use optarg_parser::parse_bool;
pub use optarg_parser::Markers;
pub use optarg_parser::Match;
pub use optarg_parser::Opt;
pub use optarg_parser::Parsed;
pub use optarg_parser::Registry;
pub use optarg_parser::Scanner;
pub use optarg_parser::Value;
pub use optarg_parser::FLAG_VALUE;
pub use usage::Usage;

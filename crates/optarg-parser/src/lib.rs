//! Option registry and argument scanner for optarg
//!
//! Declare options on a [`Registry`], then either walk the command line lazily with a
//! [`Scanner`] or let [`Registry::parse`] collect everything at once.
//!
//! ```
//! let mut registry = optarg_parser::Registry::new();
//! registry
//!     .register("o", "output", "Where to write", "out.txt")
//!     .register("v", "verbose", "Talk more", false);
//!
//! let parsed = registry.parse(&["prog", "-v", "--output", "log.txt", "input"]).unwrap();
//! assert!(parsed.get("verbose").unwrap().to_bool());
//! assert_eq!(parsed.get("o").unwrap().as_str(), "log.txt");
//! assert_eq!(parsed.remainder(), ["input"]);
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(clippy::print_stderr)]
#![warn(clippy::print_stdout)]

mod registry;
mod scanner;
mod value;

pub use registry::*;
pub use scanner::*;
pub use value::*;

use optarg_error::Error;
use optarg_error::Result;

use crate::Opt;
use crate::Registry;

/// Value reported for a flag that is present
pub const FLAG_VALUE: &str = "true";

/// An option found on the command line, with the value given at that occurrence
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Match<'a> {
    #[cfg_attr(feature = "serde", serde(skip))]
    index: usize,
    option: &'a Opt,
    value: &'a str,
}

impl<'a> Match<'a> {
    /// The registered option that matched
    pub fn option(&self) -> &'a Opt {
        self.option
    }

    /// [`FLAG_VALUE`] for flags, otherwise the token following the switch
    pub fn value(&self) -> &'a str {
        self.value
    }

    /// Whether the match is for the option named `token`, in either form
    pub fn is(&self, token: &str) -> bool {
        self.option.is_named(token)
    }

    /// See [`parse_bool`][crate::parse_bool]
    pub fn to_bool(&self) -> bool {
        crate::parse_bool(self.value)
    }

    pub(crate) fn index(&self) -> usize {
        self.index
    }
}

/// Lazily match command-line tokens against a [`Registry`]
///
/// The first token is taken as the program name, see [`Scanner::bin`]. Every later token is
/// trimmed and then, empty ones aside, classified as:
/// - a long switch (`--name`), naming one option
/// - a short cluster (`-nps`), each letter naming one option
/// - a bare marker (`--` or `-`), kept as a plain token
/// - a plain token, which is either the value of the last value option or part of the
///   remainder
///
/// Flags match immediately. A value option waits for the next plain token; if another switch or
/// the end of input comes first it is dropped, or reported as
/// [`ErrorKind::MissingValue`][optarg_error::ErrorKind::MissingValue] when the registry is
/// [strict][Registry::strict].
///
/// In strict mode an unknown switch that supersedes a pending value option is reported after
/// the `MissingValue` error for that option.
///
/// Only the last value option of a short cluster can receive a value: `-sb dir` gives `dir` to
/// `b` and nothing to `s`.
#[derive(Clone, Debug)]
pub struct Scanner<'a> {
    registry: &'a Registry,
    raw: std::vec::IntoIter<&'a str>,
    bin: Option<&'a str>,
    cluster: Option<&'a str>,
    pending: Option<usize>,
    deferred: Option<Result<Match<'a>>>,
    remainder: Vec<&'a str>,
}

impl<'a> Scanner<'a> {
    /// Scan `raw` against the options of `registry`
    pub fn new<S: AsRef<str>>(registry: &'a Registry, raw: &'a [S]) -> Self {
        let mut raw = raw
            .iter()
            .map(|s| s.as_ref())
            .collect::<Vec<&'a str>>()
            .into_iter();
        let bin = raw.next();
        Self {
            registry,
            raw,
            bin,
            cluster: None,
            pending: None,
            deferred: None,
            remainder: Vec::new(),
        }
    }

    /// Advance to the next matched option
    ///
    /// Returns `None` once the input is exhausted. After an error, scanning may continue with
    /// the next token.
    pub fn next_match(&mut self) -> Option<Result<Match<'a>>> {
        let registry = self.registry;
        loop {
            if let Some(found) = self.deferred.take() {
                return Some(found);
            }

            if let Some(cluster) = self.cluster.take() {
                let mut chars = cluster.chars();
                if let Some(c) = chars.next() {
                    let rest = chars.as_str();
                    if !rest.is_empty() {
                        self.cluster = Some(rest);
                    }
                    match self.lookup(&cluster[..c.len_utf8()], false) {
                        Ok(Some(found)) => return Some(Ok(found)),
                        Ok(None) => continue,
                        Err(err) => return Some(Err(err)),
                    }
                }
            }

            let Some(token) = self.raw.next() else {
                return self.abandon().map(Err);
            };
            let token = token.trim();
            if token.is_empty() {
                continue;
            }

            let markers = registry.markers();
            if let Some(name) = token.strip_prefix(markers.long()) {
                let name = name.trim();
                if name.is_empty() {
                    self.push_remainder(token);
                    continue;
                }
                match self.lookup(name, true) {
                    Ok(Some(found)) => return Some(Ok(found)),
                    Ok(None) => continue,
                    Err(err) => return Some(Err(err)),
                }
            } else if let Some(cluster) = token.strip_prefix(markers.short()) {
                let cluster = cluster.trim();
                if cluster.is_empty() {
                    self.push_remainder(token);
                } else {
                    tracing::trace!(cluster, "short switches");
                    self.cluster = Some(cluster);
                }
            } else if let Some(index) = self.pending.take() {
                tracing::trace!(token, "option value");
                return Some(Ok(Match {
                    index,
                    option: &registry.options()[index],
                    value: token,
                }));
            } else {
                self.push_remainder(token);
            }
        }
    }

    /// The first token, conventionally the program name
    pub fn bin(&self) -> Option<&'a str> {
        self.bin
    }

    /// Tokens not consumed so far
    ///
    /// Only complete once [`Scanner::next_match`] has returned `None`.
    pub fn remainder(&self) -> &[&'a str] {
        &self.remainder
    }

    /// Take ownership of [`Scanner::remainder`]
    pub fn into_remainder(self) -> Vec<&'a str> {
        self.remainder
    }

    fn lookup(&mut self, name: &'a str, long: bool) -> Result<Option<Match<'a>>> {
        let registry = self.registry;
        let abandoned = self.abandon();
        let Some(index) = registry.position(name) else {
            let markers = registry.markers();
            let marker = if long { markers.long() } else { markers.short() };
            let unknown = Error::unknown_option(name, long, marker);
            return match abandoned {
                Some(err) => {
                    self.deferred = Some(Err(unknown));
                    Err(err)
                }
                None => Err(unknown),
            };
        };

        let option = &registry.options()[index];
        let found = if option.is_flag() {
            tracing::trace!(option = option.long(), "flag");
            Some(Match {
                index,
                option,
                value: FLAG_VALUE,
            })
        } else {
            tracing::trace!(option = option.long(), "awaiting value");
            self.pending = Some(index);
            None
        };

        match abandoned {
            Some(err) => {
                self.deferred = found.map(Ok);
                Err(err)
            }
            None => Ok(found),
        }
    }

    /// Drop the option waiting for a value, if any
    fn abandon(&mut self) -> Option<Error> {
        let index = self.pending.take()?;
        let option = &self.registry.options()[index];
        tracing::trace!(option = option.long(), "no value given");
        self.registry
            .is_strict()
            .then(|| Error::missing_value(option.long()))
    }

    fn push_remainder(&mut self, token: &'a str) {
        tracing::trace!(token, "remainder");
        self.remainder.push(token);
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Result<Match<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_match()
    }
}

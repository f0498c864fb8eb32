use optarg_error::Error;
use optarg_error::Result;

use crate::parse_bool;
use crate::Scanner;
use crate::Value;

/// A declared command-line option
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Opt {
    long: String,
    short: String,
    description: String,
    default: Value,
    value: Option<String>,
}

impl Opt {
    fn new(short: String, long: String, description: String, default: Value) -> Self {
        Self {
            long,
            short,
            description,
            default,
            value: None,
        }
    }

    /// Name used after the long marker
    pub fn long(&self) -> &str {
        &self.long
    }

    /// Name used after the short marker
    pub fn short(&self) -> &str {
        &self.short
    }

    /// Help text shown by the usage listing
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Default given at registration, also deciding whether the option is a flag
    pub fn default_value(&self) -> &Value {
        &self.default
    }

    /// Flags are present-or-absent and never consume a following token
    pub fn is_flag(&self) -> bool {
        self.default.is_bool()
    }

    /// Whether `token` names this option, in either form
    pub fn is_named(&self, token: &str) -> bool {
        self.long == token || self.short == token
    }

    /// Value assigned by the last [`Registry::parse`], if the option was present
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Assigned value, or the empty string
    pub fn as_str(&self) -> &str {
        self.value().unwrap_or_default()
    }

    /// Lenient truthiness of the assigned value, see [`parse_bool`]
    pub fn to_bool(&self) -> bool {
        parse_bool(self.as_str())
    }

    /// Assigned value as an `i32`, falling back to the `Int` default when it does not parse
    ///
    /// # Panics
    ///
    /// If the fallback is needed and the default is not a [`Value::Int`]
    pub fn int(&self) -> i32 {
        self.try_int().unwrap_or_else(|e| panic!("{e}"))
    }

    /// Assigned value as an `i64`, falling back to the `Int64` default when it does not parse
    ///
    /// # Panics
    ///
    /// If the fallback is needed and the default is not a [`Value::Int64`]
    pub fn int64(&self) -> i64 {
        self.try_int64().unwrap_or_else(|e| panic!("{e}"))
    }

    /// Assigned value as an `f32`, falling back to the `Float32` default when it does not parse
    ///
    /// # Panics
    ///
    /// If the fallback is needed and the default is not a [`Value::Float32`]
    pub fn float32(&self) -> f32 {
        self.try_float32().unwrap_or_else(|e| panic!("{e}"))
    }

    /// Assigned value as an `f64`, falling back to the `Float64` default when it does not parse
    ///
    /// # Panics
    ///
    /// If the fallback is needed and the default is not a [`Value::Float64`]
    pub fn float64(&self) -> f64 {
        self.try_float64().unwrap_or_else(|e| panic!("{e}"))
    }

    /// Like [`Opt::int`], returning [`ErrorKind::TypeMismatch`] instead of panicking
    ///
    /// [`ErrorKind::TypeMismatch`]: optarg_error::ErrorKind::TypeMismatch
    pub fn try_int(&self) -> Result<i32> {
        match (self.as_str().parse(), &self.default) {
            (Ok(v), _) => Ok(v),
            (Err(_), Value::Int(v)) => Ok(*v),
            (Err(_), other) => Err(self.mismatch("int", other)),
        }
    }

    /// Like [`Opt::int64`], without panicking
    pub fn try_int64(&self) -> Result<i64> {
        match (self.as_str().parse(), &self.default) {
            (Ok(v), _) => Ok(v),
            (Err(_), Value::Int64(v)) => Ok(*v),
            (Err(_), other) => Err(self.mismatch("int64", other)),
        }
    }

    /// Like [`Opt::float32`], without panicking
    pub fn try_float32(&self) -> Result<f32> {
        match (self.as_str().parse(), &self.default) {
            (Ok(v), _) => Ok(v),
            (Err(_), Value::Float32(v)) => Ok(*v),
            (Err(_), other) => Err(self.mismatch("float32", other)),
        }
    }

    /// Like [`Opt::float64`], without panicking
    pub fn try_float64(&self) -> Result<f64> {
        match (self.as_str().parse(), &self.default) {
            (Ok(v), _) => Ok(v),
            (Err(_), Value::Float64(v)) => Ok(*v),
            (Err(_), other) => Err(self.mismatch("float64", other)),
        }
    }

    #[cold]
    fn mismatch(&self, expected: &'static str, found: &Value) -> Error {
        Error::type_mismatch(&self.long, expected, found.kind_name())
    }
}

impl std::fmt::Display for Opt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.as_str().fmt(f)
    }
}

/// Prefixes that mark a token as a switch
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Markers {
    short: String,
    long: String,
}

impl Markers {
    /// Use `short` before short names and clusters, `long` before long names
    ///
    /// # Panics
    ///
    /// If either marker is empty
    pub fn new(short: impl Into<String>, long: impl Into<String>) -> Self {
        let short = short.into();
        let long = long.into();
        assert!(!short.is_empty(), "short marker must not be empty");
        assert!(!long.is_empty(), "long marker must not be empty");
        Self { short, long }
    }

    /// Prefix of a short switch, `-` by default
    pub fn short(&self) -> &str {
        &self.short
    }

    /// Prefix of a long switch, `--` by default
    pub fn long(&self) -> &str {
        &self.long
    }
}

impl Default for Markers {
    fn default() -> Self {
        Self::new("-", "--")
    }
}

/// The set of declared options
///
/// Options are looked up in registration order and the first match wins. Names are not checked
/// for uniqueness: registering a second option with an existing long or short name leaves that
/// name pointing at the first one.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    options: Vec<Opt>,
    markers: Markers,
    strict: bool,
}

impl Registry {
    /// An empty registry with the default markers
    pub fn new() -> Self {
        Default::default()
    }

    /// Declare an option
    ///
    /// A `bool` default makes it a flag.
    pub fn register(
        &mut self,
        short: impl Into<String>,
        long: impl Into<String>,
        description: impl Into<String>,
        default: impl Into<Value>,
    ) -> &mut Self {
        let opt = Opt::new(short.into(), long.into(), description.into(), default.into());
        if let Some(shadow) = self
            .options
            .iter()
            .find(|o| o.is_named(&opt.long) || o.is_named(&opt.short))
        {
            tracing::warn!(
                long = %opt.long,
                short = %opt.short,
                existing = %shadow.long,
                "option name already registered, lookups resolve to the earlier option"
            );
        }
        self.options.push(opt);
        self
    }

    /// First option whose long or short name equals `token`
    pub fn find(&self, token: &str) -> Option<&Opt> {
        self.position(token).map(|i| &self.options[i])
    }

    pub(crate) fn position(&self, token: &str) -> Option<usize> {
        self.options.iter().position(|o| o.is_named(token))
    }

    /// Options in registration order
    pub fn options(&self) -> &[Opt] {
        &self.options
    }

    /// Number of registered options
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Whether no option is registered
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Current switch prefixes
    pub fn markers(&self) -> &Markers {
        &self.markers
    }

    /// Change the switch prefixes for later scans
    pub fn set_markers(&mut self, markers: Markers) -> &mut Self {
        self.markers = markers;
        self
    }

    /// Report value options that never receive a value as [`ErrorKind::MissingValue`]
    ///
    /// Off by default: such options are dropped without a match. When an unknown switch
    /// supersedes the option, `MissingValue` is reported before `UnknownOption`.
    ///
    /// [`ErrorKind::MissingValue`]: optarg_error::ErrorKind::MissingValue
    pub fn strict(&mut self, yes: bool) -> &mut Self {
        self.strict = yes;
        self
    }

    /// See [`Registry::strict`]
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Forget values assigned by an earlier parse
    pub fn reset(&mut self) {
        for opt in &mut self.options {
            opt.value = None;
        }
    }

    /// Remove every registered option
    pub fn clear(&mut self) {
        self.options.clear();
    }

    /// Lazily scan `raw`, see [`Scanner`]
    ///
    /// Matches are not recorded on the registry; use [`Registry::parse`] for that.
    pub fn scanner<'a, S: AsRef<str>>(&'a self, raw: &'a [S]) -> Scanner<'a> {
        Scanner::new(self, raw)
    }

    /// Scan all of `raw`, recording the value of each matched option
    ///
    /// The first element of `raw` is the program name and is skipped. Values from a previous
    /// parse are cleared first. Scanning stops at the first error.
    pub fn parse<S: AsRef<str>>(&mut self, raw: &[S]) -> Result<Parsed<'_>> {
        self.reset();

        let mut events = Vec::new();
        let (bin, remainder) = {
            let mut scanner = Scanner::new(self, raw);
            while let Some(found) = scanner.next_match() {
                let found = found?;
                events.push(Event {
                    index: found.index(),
                    value: found.value().to_owned(),
                });
            }
            let bin = scanner.bin().map(ToOwned::to_owned);
            let remainder = scanner
                .into_remainder()
                .into_iter()
                .map(ToOwned::to_owned)
                .collect::<Vec<_>>();
            (bin, remainder)
        };

        for event in &events {
            self.options[event.index].value = Some(event.value.clone());
        }
        tracing::debug!(
            matches = events.len(),
            remainder = remainder.len(),
            "parsed arguments"
        );

        Ok(Parsed {
            options: &self.options,
            bin,
            events,
            remainder,
        })
    }
}

#[derive(Clone, Debug)]
struct Event {
    index: usize,
    value: String,
}

/// Outcome of [`Registry::parse`]
#[derive(Clone, Debug)]
pub struct Parsed<'r> {
    options: &'r [Opt],
    bin: Option<String>,
    events: Vec<Event>,
    remainder: Vec<String>,
}

impl<'r> Parsed<'r> {
    /// Every match in the order it was found, with the value given at that occurrence
    pub fn matches(&self) -> impl Iterator<Item = (&'r Opt, &str)> + '_ {
        let options = self.options;
        self.events
            .iter()
            .map(move |e| (&options[e.index], e.value.as_str()))
    }

    /// Number of matches
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether no option matched
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Look up an option with the values recorded by this parse
    pub fn get(&self, token: &str) -> Option<&'r Opt> {
        self.options.iter().find(|o| o.is_named(token))
    }

    /// Whether `token` names an option that was present
    pub fn contains(&self, token: &str) -> bool {
        self.get(token).is_some_and(|o| o.value().is_some())
    }

    /// The skipped first token, conventionally the program name
    pub fn bin(&self) -> Option<&str> {
        self.bin.as_deref()
    }

    /// Tokens not consumed by any option, in order
    pub fn remainder(&self) -> &[String] {
        &self.remainder
    }

    /// Take ownership of [`Parsed::remainder`]
    pub fn into_remainder(self) -> Vec<String> {
        self.remainder
    }
}

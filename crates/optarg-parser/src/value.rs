/// Default value of a registered option
///
/// The kind of the default decides how the option is scanned: a [`Value::Bool`] default makes
/// the option a flag, anything else makes it take the next plain token as its value.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    /// No default
    #[default]
    Absent,
    /// Makes the option a flag
    Bool(bool),
    /// 32-bit integer
    Int(i32),
    /// 64-bit integer
    Int64(i64),
    /// Single precision float
    Float32(f32),
    /// Double precision float
    Float64(f64),
    /// Text
    Str(String),
}

impl Value {
    /// Whether an option with this default is a flag
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Bool(_))
    }

    /// Name of the variant, for diagnostics
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Absent => "absent",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Int64(_) => "int64",
            Self::Float32(_) => "float32",
            Self::Float64(_) => "float64",
            Self::Str(_) => "string",
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Absent => Ok(()),
            Self::Bool(v) => v.fmt(f),
            Self::Int(v) => v.fmt(f),
            Self::Int64(v) => v.fmt(f),
            Self::Float32(v) => v.fmt(f),
            Self::Float64(v) => v.fmt(f),
            Self::Str(v) => v.fmt(f),
        }
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Self::Absent
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int64(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Float32(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float64(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or_default()
    }
}

/// Text accepted as `true` by [`parse_bool`], compared case-insensitively
const TRUTHY: [&str; 5] = ["1", "y", "yes", "true", "on"];

/// Lenient boolean parsing; anything unrecognized is `false`
pub fn parse_bool(text: &str) -> bool {
    TRUTHY.iter().any(|t| t.eq_ignore_ascii_case(text))
}

/// A scalar value that can be sent as a path, query, header or form parameter.
///
/// The set is closed on purpose: the wire only carries text, and every
/// variant has exactly one textual form.
///
/// | variant | text |
/// |---------|------|
/// | `Str`   | the string verbatim |
/// | `Int`   | decimal, e.g. `42`, `-7` |
/// | `Float` | shortest round-trip decimal, e.g. `1.2`, `86400` |
/// | `Bool`  | `true` / `false` |
/// | `Absent`| nothing, the parameter is omitted |
///
/// # Examples
///
/// ```rust
/// use magnet_client_core::ParamValue;
///
/// assert_eq!(ParamValue::from(42).to_text().as_deref(), Some("42"));
/// assert_eq!(ParamValue::from(true).to_text().as_deref(), Some("true"));
/// assert_eq!(ParamValue::from(None::<i64>).to_text(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ParamValue {
    /// A string value.
    Str(String),
    /// An integer value.
    Int(i64),
    /// A floating point value.
    Float(f64),
    /// A boolean value.
    Bool(bool),
    /// No value: the parameter is not sent.
    #[default]
    Absent,
}

impl ParamValue {
    /// Whether the value will be sent.
    pub fn is_present(&self) -> bool {
        !matches!(self, Self::Absent)
    }

    /// Returns the textual form, or `None` when absent.
    pub fn to_text(&self) -> Option<String> {
        let text = match self {
            Self::Str(value) => value.clone(),
            Self::Int(value) => value.to_string(),
            Self::Float(value) => value.to_string(),
            Self::Bool(value) => value.to_string(),
            Self::Absent => return None,
        };
        Some(text)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<f32> for ParamValue {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

macro_rules! int_param_value {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ParamValue {
                fn from(value: $ty) -> Self {
                    Self::Int(i64::from(value))
                }
            }
        )*
    };
}

int_param_value!(i8, i16, i32, i64, u8, u16, u32);

impl<T> From<Option<T>> for ParamValue
where
    T: Into<ParamValue>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

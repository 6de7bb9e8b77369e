//! Numeric values with their kind attached.
//!
//! Every representation reports numbers as a [`Number`], so the conversion engine
//! can keep a byte a byte and a double a double when the target representation
//! distinguishes them. Reading a number as a different kind uses the usual
//! narrowing casts: integers truncate, floats saturate toward the target range.

use std::fmt;

/// A number tagged with its concrete kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// 8-bit signed integer
    Byte(i8),
    /// 16-bit signed integer
    Short(i16),
    /// 32-bit signed integer
    Int(i32),
    /// 64-bit signed integer
    Long(i64),
    /// 32-bit float
    Float(f32),
    /// 64-bit float
    Double(f64),
}

impl Number {
    /// Returns the narrowest integral kind that holds `value` exactly.
    ///
    /// ```
    /// # use dataops::Number;
    /// assert_eq!(Number::narrow_integral(12), Number::Byte(12));
    /// assert_eq!(Number::narrow_integral(300), Number::Short(300));
    /// assert_eq!(Number::narrow_integral(70_000), Number::Int(70_000));
    /// assert_eq!(Number::narrow_integral(5_000_000_000), Number::Long(5_000_000_000));
    /// ```
    pub fn narrow_integral(value: i64) -> Self {
        if let Ok(v) = i8::try_from(value) {
            Number::Byte(v)
        } else if let Ok(v) = i16::try_from(value) {
            Number::Short(v)
        } else if let Ok(v) = i32::try_from(value) {
            Number::Int(v)
        } else {
            Number::Long(value)
        }
    }

    /// Returns `Float` when `value` survives a round trip through `f32`, otherwise `Double`.
    pub fn narrow_floating(value: f64) -> Self {
        let narrowed = value as f32;
        if f64::from(narrowed) == value {
            Number::Float(narrowed)
        } else {
            Number::Double(value)
        }
    }

    /// Returns true for the integer kinds.
    pub fn is_integral(&self) -> bool {
        matches!(
            self,
            Number::Byte(_) | Number::Short(_) | Number::Int(_) | Number::Long(_)
        )
    }

    /// Returns the kind name as a string
    pub fn kind_name(&self) -> &'static str {
        match self {
            Number::Byte(_) => "byte",
            Number::Short(_) => "short",
            Number::Int(_) => "int",
            Number::Long(_) => "long",
            Number::Float(_) => "float",
            Number::Double(_) => "double",
        }
    }

    pub fn as_i8(&self) -> i8 {
        match *self {
            Number::Byte(v) => v,
            Number::Short(v) => v as i8,
            Number::Int(v) => v as i8,
            Number::Long(v) => v as i8,
            Number::Float(v) => v as i8,
            Number::Double(v) => v as i8,
        }
    }

    pub fn as_i16(&self) -> i16 {
        match *self {
            Number::Byte(v) => v.into(),
            Number::Short(v) => v,
            Number::Int(v) => v as i16,
            Number::Long(v) => v as i16,
            Number::Float(v) => v as i16,
            Number::Double(v) => v as i16,
        }
    }

    pub fn as_i32(&self) -> i32 {
        match *self {
            Number::Byte(v) => v.into(),
            Number::Short(v) => v.into(),
            Number::Int(v) => v,
            Number::Long(v) => v as i32,
            Number::Float(v) => v as i32,
            Number::Double(v) => v as i32,
        }
    }

    pub fn as_i64(&self) -> i64 {
        match *self {
            Number::Byte(v) => v.into(),
            Number::Short(v) => v.into(),
            Number::Int(v) => v.into(),
            Number::Long(v) => v,
            Number::Float(v) => v as i64,
            Number::Double(v) => v as i64,
        }
    }

    pub fn as_f32(&self) -> f32 {
        match *self {
            Number::Byte(v) => v.into(),
            Number::Short(v) => v.into(),
            Number::Int(v) => v as f32,
            Number::Long(v) => v as f32,
            Number::Float(v) => v,
            Number::Double(v) => v as f32,
        }
    }

    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::Byte(v) => v.into(),
            Number::Short(v) => v.into(),
            Number::Int(v) => v.into(),
            Number::Long(v) => v as f64,
            Number::Float(v) => v.into(),
            Number::Double(v) => v,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Byte(v) => write!(f, "{v}"),
            Number::Short(v) => write!(f, "{v}"),
            Number::Int(v) => write!(f, "{v}"),
            Number::Long(v) => write!(f, "{v}"),
            Number::Float(v) => write!(f, "{v}"),
            Number::Double(v) => write!(f, "{v}"),
        }
    }
}

impl From<i8> for Number {
    fn from(value: i8) -> Self {
        Number::Byte(value)
    }
}

impl From<i16> for Number {
    fn from(value: i16) -> Self {
        Number::Short(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Int(value)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Long(value)
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Float(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Double(value)
    }
}

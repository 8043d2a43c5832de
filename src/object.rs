//! PDF object types.
//!
//! The subset of the PDF object model needed to describe annotations and
//! their appearance resources.

use crate::error::{Error, Result};
use std::collections::HashMap;

/// PDF object representation.
#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    /// Integer value
    Integer(i64),
    /// Real (floating-point) value
    Real(f64),
    /// Name (starting with /)
    Name(String),
    /// Array of objects
    Array(Vec<Object>),
    /// Dictionary (key-value pairs)
    Dictionary(HashMap<String, Object>),
    /// Stream (dictionary + data)
    Stream {
        /// Stream dictionary
        dict: HashMap<String, Object>,
        /// Stream data
        data: bytes::Bytes,
    },
}

impl Object {
    /// Get the type name of this object (without data).
    pub fn type_name(&self) -> &'static str {
        match self {
            Object::Integer(_) => "Integer",
            Object::Real(_) => "Real",
            Object::Name(_) => "Name",
            Object::Array(_) => "Array",
            Object::Dictionary(_) => "Dictionary",
            Object::Stream { .. } => "Stream",
        }
    }

    /// Numeric value of an Integer or Real object.
    ///
    /// PDF writers use both forms interchangeably for coordinates, widths
    /// and color components.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Object::Integer(i) => Some(*i as f64),
            Object::Real(r) => Some(*r),
            _ => None,
        }
    }

    /// Try to cast to name.
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Object::Name(s) => Some(s),
            _ => None,
        }
    }

    /// Try to cast to dictionary. Works for both Dictionary and Stream objects.
    pub fn as_dict(&self) -> Option<&HashMap<String, Object>> {
        match self {
            Object::Dictionary(d) => Some(d),
            Object::Stream { dict, .. } => Some(dict),
            _ => None,
        }
    }

    /// Try to cast to array.
    pub fn as_array(&self) -> Option<&Vec<Object>> {
        match self {
            Object::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// Try to cast to stream data.
    pub fn as_stream_data(&self) -> Option<&[u8]> {
        match self {
            Object::Stream { data, .. } => Some(data),
            _ => None,
        }
    }

    /// Read an array of numbers, as used by /Rect, /QuadPoints, /C and /Border.
    ///
    /// Fails with [`Error::InvalidObjectType`] if this is not an array or if
    /// any element is not numeric.
    pub fn to_number_array(&self) -> Result<Vec<f32>> {
        let arr = self.as_array().ok_or_else(|| Error::InvalidObjectType {
            expected: "Array".to_string(),
            found: self.type_name().to_string(),
        })?;

        arr.iter()
            .map(|item| {
                item.as_number()
                    .map(|n| n as f32)
                    .ok_or_else(|| Error::InvalidObjectType {
                        expected: "Number".to_string(),
                        found: item.type_name().to_string(),
                    })
            })
            .collect()
    }

    /// Build an array of Real objects.
    pub fn real_array(values: &[f32]) -> Object {
        Object::Array(values.iter().map(|&v| Object::Real(v as f64)).collect())
    }
}

//! Core annotation types and enums per PDF spec ISO 32000-1:2008, Section 12.5.
//!
//! Only the text markup family (Section 12.5.6.10) is modelled here.

use crate::object::Object;

/// Text markup annotation subtype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnnotationSubtype {
    /// Highlight annotation
    Highlight,
    /// Underline annotation
    Underline,
    /// Squiggly underline annotation
    Squiggly,
    /// Strikeout annotation
    StrikeOut,
}

impl AnnotationSubtype {
    /// Get the PDF name for this annotation subtype.
    pub fn pdf_name(&self) -> &'static str {
        match self {
            Self::Highlight => "Highlight",
            Self::Underline => "Underline",
            Self::Squiggly => "Squiggly",
            Self::StrikeOut => "StrikeOut",
        }
    }

    /// Parse from PDF name. Returns `None` for non text markup subtypes.
    pub fn from_pdf_name(name: &str) -> Option<Self> {
        match name {
            "Highlight" => Some(Self::Highlight),
            "Underline" => Some(Self::Underline),
            "Squiggly" => Some(Self::Squiggly),
            "StrikeOut" => Some(Self::StrikeOut),
            _ => None,
        }
    }
}

/// Border style type per PDF spec Table 166.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderStyleType {
    /// Solid border (S)
    #[default]
    Solid,
    /// Dashed border (D)
    Dashed,
    /// Beveled border (B)
    Beveled,
    /// Inset border (I)
    Inset,
    /// Underline border (U)
    Underline,
}

impl BorderStyleType {
    /// Get PDF name for this border style.
    pub fn pdf_name(&self) -> &'static str {
        match self {
            Self::Solid => "S",
            Self::Dashed => "D",
            Self::Beveled => "B",
            Self::Inset => "I",
            Self::Underline => "U",
        }
    }

    /// Parse from PDF name.
    pub fn from_pdf_name(name: &str) -> Self {
        match name {
            "D" => Self::Dashed,
            "B" => Self::Beveled,
            "I" => Self::Inset,
            "U" => Self::Underline,
            _ => Self::Solid,
        }
    }
}

/// Border style dictionary (/BS) per PDF spec Table 166.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationBorderStyle {
    /// Border width in points.
    pub width: f32,
    /// Border style type.
    pub style: BorderStyleType,
    /// Dash pattern for dashed borders [dash, gap, dash, gap, ...].
    pub dash_pattern: Option<Vec<f32>>,
}

impl Default for AnnotationBorderStyle {
    /// PDF default: solid, one point wide.
    fn default() -> Self {
        Self::solid(1.0)
    }
}

impl AnnotationBorderStyle {
    /// Create a solid border with given width.
    pub fn solid(width: f32) -> Self {
        Self {
            width,
            style: BorderStyleType::Solid,
            dash_pattern: None,
        }
    }

    /// Create a dashed border.
    pub fn dashed(width: f32, dash: f32, gap: f32) -> Self {
        Self {
            width,
            style: BorderStyleType::Dashed,
            dash_pattern: Some(vec![dash, gap]),
        }
    }

    /// Parse a /BS dictionary. Missing entries take their PDF defaults.
    pub fn from_object(obj: &Object) -> Option<Self> {
        let dict = obj.as_dict()?;
        let width = dict
            .get("W")
            .and_then(Object::as_number)
            .map(|w| w as f32)
            .unwrap_or(1.0);
        let style = dict
            .get("S")
            .and_then(Object::as_name)
            .map(BorderStyleType::from_pdf_name)
            .unwrap_or_default();
        let dash_pattern = match dict.get("D") {
            Some(d) => d.to_number_array().ok(),
            None if style == BorderStyleType::Dashed => Some(vec![3.0]),
            None => None,
        };
        Some(Self {
            width,
            style,
            dash_pattern,
        })
    }

    /// Build the /BS dictionary.
    pub fn to_object(&self) -> Object {
        let mut dict = std::collections::HashMap::new();
        dict.insert("Type".to_string(), Object::Name("Border".to_string()));
        dict.insert("W".to_string(), Object::Real(self.width as f64));
        dict.insert("S".to_string(), Object::Name(self.style.pdf_name().to_string()));
        if let Some(ref dash) = self.dash_pattern {
            dict.insert("D".to_string(), Object::real_array(dash));
        }
        Object::Dictionary(dict)
    }
}

/// Legacy /Border array `[h v w dash?]` per PDF spec Table 164.
///
/// Superseded by /BS when both are present.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationBorderArray {
    /// Horizontal corner radius
    pub horizontal_radius: f32,
    /// Vertical corner radius
    pub vertical_radius: f32,
    /// Border width
    pub width: f32,
    /// Optional dash array
    pub dash: Option<Vec<f32>>,
}

impl Default for AnnotationBorderArray {
    /// PDF default: `[0 0 1]`.
    fn default() -> Self {
        Self {
            horizontal_radius: 0.0,
            vertical_radius: 0.0,
            width: 1.0,
            dash: None,
        }
    }
}

impl AnnotationBorderArray {
    /// Parse a /Border array.
    ///
    /// A short array is padded with zeros the way viewers read it, so
    /// `[0 0]` is a zero width border rather than the `[0 0 1]` default.
    /// Non-numeric entries read as 0. A fourth element that is not a
    /// number array is ignored. Only a non-array yields `None`.
    pub fn from_object(obj: &Object) -> Option<Self> {
        let arr = obj.as_array()?;
        let number = |i: usize| match arr.get(i).and_then(Object::as_number) {
            Some(n) => n as f32,
            None => 0.0,
        };
        Some(Self {
            horizontal_radius: number(0),
            vertical_radius: number(1),
            width: number(2),
            dash: arr.get(3).and_then(|d| d.to_number_array().ok()),
        })
    }

    /// Build the /Border array.
    pub fn to_object(&self) -> Object {
        let mut arr = vec![
            Object::Real(self.horizontal_radius as f64),
            Object::Real(self.vertical_radius as f64),
            Object::Real(self.width as f64),
        ];
        if let Some(ref dash) = self.dash {
            arr.push(Object::real_array(dash));
        }
        Object::Array(arr)
    }
}

/// Annotation color representation.
///
/// Colors are specified as values in the range 0.0 to 1.0. The number of
/// components selects the device color space, per the /C entry.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AnnotationColor {
    /// No color (transparent)
    #[default]
    None,
    /// Grayscale (1 component)
    Gray(f32),
    /// RGB color (3 components)
    Rgb(f32, f32, f32),
    /// CMYK color (4 components)
    Cmyk(f32, f32, f32, f32),
}

impl AnnotationColor {
    /// Create red color.
    pub fn red() -> Self {
        Self::Rgb(1.0, 0.0, 0.0)
    }

    /// Create black color.
    pub fn black() -> Self {
        Self::Gray(0.0)
    }

    /// Color components; empty for [`AnnotationColor::None`].
    pub fn components(&self) -> Vec<f32> {
        match self {
            Self::None => Vec::new(),
            Self::Gray(g) => vec![*g],
            Self::Rgb(r, g, b) => vec![*r, *g, *b],
            Self::Cmyk(c, m, y, k) => vec![*c, *m, *y, *k],
        }
    }

    /// True when the color has no components.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Name of the device color space the components live in.
    pub fn device_color_space(&self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Gray(_) => Some("DeviceGray"),
            Self::Rgb(..) => Some("DeviceRGB"),
            Self::Cmyk(..) => Some("DeviceCMYK"),
        }
    }

    /// Parse from PDF array components.
    ///
    /// Component counts other than 1, 3 or 4 are not a valid /C entry and
    /// yield [`AnnotationColor::None`].
    pub fn from_array(arr: &[f32]) -> Self {
        match arr {
            [g] => Self::Gray(*g),
            [r, g, b] => Self::Rgb(*r, *g, *b),
            [c, m, y, k] => Self::Cmyk(*c, *m, *y, *k),
            _ => Self::None,
        }
    }
}

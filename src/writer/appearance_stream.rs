//! Appearance stream objects for PDF annotations.
//!
//! PDF Spec: ISO 32000-1:2008, Section 12.5.5 (Appearance Streams)
//!
//! # Appearance Stream Structure
//!
//! An appearance stream is a Form XObject that defines the visual appearance
//! of an annotation. The AP dictionary can contain:
//! - /N - Normal appearance
//! - /R - Rollover appearance (optional)
//! - /D - Down appearance (optional)
//!
//! # Example
//!
//! ```
//! use pdf_markup::geometry::{Matrix, Rect};
//! use pdf_markup::writer::{ExtGStateBuilder, FormXObject, Resources};
//!
//! let mut resources = Resources::new();
//! let gs = resources.add_ext_gstate(ExtGStateBuilder::new().alpha(0.5).build());
//! assert_eq!(gs, "GS1");
//!
//! let form = FormXObject::new(Rect::new(0.0, 0.0, 100.0, 20.0), b"/GS1 gs\n".to_vec())
//!     .with_matrix(Matrix::translate(-10.0, -5.0))
//!     .with_resources(resources);
//! assert!(form.to_object().as_dict().unwrap().contains_key("Resources"));
//! ```

use crate::geometry::{Matrix, Rect};
use crate::object::Object;
use bytes::Bytes;
use indexmap::IndexMap;
use std::collections::HashMap;

/// Resource dictionary of a form.
///
/// Each `add_*` call registers an entry under a fresh name made of the
/// category prefix and a 1-based counter (`GS1`, `Cs1`, `P1`, `Fm1`).
/// Entries keep their insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resources {
    ext_gstates: IndexMap<String, Object>,
    color_spaces: IndexMap<String, Object>,
    patterns: IndexMap<String, Object>,
    forms: IndexMap<String, FormXObject>,
}

fn next_name<V>(prefix: &str, map: &IndexMap<String, V>) -> String {
    format!("{}{}", prefix, map.len() + 1)
}

impl Resources {
    /// Create an empty resource dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an ExtGState dictionary, returning its name.
    pub fn add_ext_gstate(&mut self, gs: Object) -> String {
        let name = next_name("GS", &self.ext_gstates);
        self.ext_gstates.insert(name.clone(), gs);
        name
    }

    /// Register a color space, returning its name.
    pub fn add_color_space(&mut self, cs: Object) -> String {
        let name = next_name("Cs", &self.color_spaces);
        self.color_spaces.insert(name.clone(), cs);
        name
    }

    /// Register a pattern, returning its name.
    pub fn add_pattern(&mut self, pattern: Object) -> String {
        let name = next_name("P", &self.patterns);
        self.patterns.insert(name.clone(), pattern);
        name
    }

    /// Register a form XObject, returning its name.
    pub fn add_form(&mut self, form: FormXObject) -> String {
        let name = next_name("Fm", &self.forms);
        self.forms.insert(name.clone(), form);
        name
    }

    /// Look up an ExtGState by name.
    pub fn ext_gstate(&self, name: &str) -> Option<&Object> {
        self.ext_gstates.get(name)
    }

    /// Look up a color space by name.
    pub fn color_space(&self, name: &str) -> Option<&Object> {
        self.color_spaces.get(name)
    }

    /// Look up a pattern by name.
    pub fn pattern(&self, name: &str) -> Option<&Object> {
        self.patterns.get(name)
    }

    /// Look up a form XObject by name.
    pub fn form(&self, name: &str) -> Option<&FormXObject> {
        self.forms.get(name)
    }

    /// Registered forms in insertion order.
    pub fn forms(&self) -> impl Iterator<Item = (&str, &FormXObject)> {
        self.forms.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of registered ExtGStates.
    pub fn ext_gstate_count(&self) -> usize {
        self.ext_gstates.len()
    }

    /// Number of registered patterns.
    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    /// Number of registered forms.
    pub fn form_count(&self) -> usize {
        self.forms.len()
    }

    /// True if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.ext_gstates.is_empty()
            && self.color_spaces.is_empty()
            && self.patterns.is_empty()
            && self.forms.is_empty()
    }

    /// Build the /Resources dictionary. Empty categories are omitted.
    pub fn to_object(&self) -> Object {
        fn category<'a>(entries: impl Iterator<Item = (&'a String, Object)>) -> Object {
            Object::Dictionary(entries.map(|(k, v)| (k.clone(), v)).collect())
        }

        let mut dict = HashMap::new();
        if !self.ext_gstates.is_empty() {
            dict.insert(
                "ExtGState".to_string(),
                category(self.ext_gstates.iter().map(|(k, v)| (k, v.clone()))),
            );
        }
        if !self.color_spaces.is_empty() {
            dict.insert(
                "ColorSpace".to_string(),
                category(self.color_spaces.iter().map(|(k, v)| (k, v.clone()))),
            );
        }
        if !self.patterns.is_empty() {
            dict.insert(
                "Pattern".to_string(),
                category(self.patterns.iter().map(|(k, v)| (k, v.clone()))),
            );
        }
        if !self.forms.is_empty() {
            dict.insert(
                "XObject".to_string(),
                category(self.forms.iter().map(|(k, v)| (k, v.to_object()))),
            );
        }
        Object::Dictionary(dict)
    }
}

/// A Form XObject (Subtype /Form) with its content stream.
#[derive(Debug, Clone, PartialEq)]
pub struct FormXObject {
    /// Bounding box in form space
    pub bbox: Rect,
    /// Form space to user space transform; identity when absent
    pub matrix: Option<Matrix>,
    /// Resources referenced by the content
    pub resources: Resources,
    /// Encoded content stream
    pub content: Bytes,
}

impl FormXObject {
    /// Create a form with the given bounding box and content.
    pub fn new(bbox: Rect, content: impl Into<Bytes>) -> Self {
        Self {
            bbox,
            matrix: None,
            resources: Resources::new(),
            content: content.into(),
        }
    }

    /// Set the form matrix.
    pub fn with_matrix(mut self, matrix: Matrix) -> Self {
        self.matrix = Some(matrix);
        self
    }

    /// Set the form resources.
    pub fn with_resources(mut self, resources: Resources) -> Self {
        self.resources = resources;
        self
    }

    /// Content stream as text, for inspection.
    pub fn content_str(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.content)
    }

    /// Build the stream object.
    pub fn to_object(&self) -> Object {
        let mut dict = HashMap::new();

        dict.insert("Type".to_string(), Object::Name("XObject".to_string()));
        dict.insert("Subtype".to_string(), Object::Name("Form".to_string()));
        dict.insert("FormType".to_string(), Object::Integer(1));
        dict.insert("BBox".to_string(), self.bbox.to_object());

        if let Some(m) = &self.matrix {
            dict.insert("Matrix".to_string(), m.to_object());
        }

        if !self.resources.is_empty() {
            dict.insert("Resources".to_string(), self.resources.to_object());
        }

        Object::Stream {
            dict,
            data: self.content.clone(),
        }
    }
}

/// Appearance dictionary (/AP) of an annotation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppearanceDictionary {
    /// Normal appearance (/N)
    pub normal: Option<FormXObject>,
    /// Rollover appearance (/R)
    pub rollover: Option<FormXObject>,
    /// Down appearance (/D)
    pub down: Option<FormXObject>,
}

impl AppearanceDictionary {
    /// Create an empty appearance dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the /AP dictionary.
    pub fn to_object(&self) -> Object {
        let mut dict = HashMap::new();
        for (key, form) in [("N", &self.normal), ("R", &self.rollover), ("D", &self.down)] {
            if let Some(form) = form {
                dict.insert(key.to_string(), form.to_object());
            }
        }
        Object::Dictionary(dict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_names_are_sequential_per_category() {
        let mut res = Resources::new();
        assert_eq!(res.add_ext_gstate(Object::Integer(0)), "GS1");
        assert_eq!(res.add_color_space(Object::Integer(0)), "Cs1");
        assert_eq!(res.add_pattern(Object::Integer(0)), "P1");
        assert_eq!(res.add_pattern(Object::Integer(0)), "P2");
        let form = FormXObject::new(Rect::new(0.0, 0.0, 1.0, 1.0), Vec::new());
        assert_eq!(res.add_form(form.clone()), "Fm1");
        assert_eq!(res.add_form(form), "Fm2");
        assert_eq!(res.pattern_count(), 2);
        assert_eq!(res.form_count(), 2);
    }

    #[test]
    fn test_forms_keep_insertion_order() {
        let mut res = Resources::new();
        for i in 0..3 {
            let bbox = Rect::new(0.0, 0.0, i as f32 + 1.0, 1.0);
            res.add_form(FormXObject::new(bbox, Vec::new()));
        }
        let names: Vec<&str> = res.forms().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["Fm1", "Fm2", "Fm3"]);
        assert_eq!(res.form("Fm3").unwrap().bbox.urx, 3.0);
    }

    #[test]
    fn test_empty_resources_object() {
        let res = Resources::new();
        assert!(res.is_empty());
        assert_eq!(res.to_object(), Object::Dictionary(HashMap::new()));
    }

    #[test]
    fn test_resources_object_layout() {
        let mut res = Resources::new();
        res.add_ext_gstate(Object::Dictionary(HashMap::new()));
        res.add_form(FormXObject::new(Rect::new(0.0, 0.0, 1.0, 1.0), b"n\n".to_vec()));

        let obj = res.to_object();
        let dict = obj.as_dict().unwrap();
        assert!(dict.get("ExtGState").unwrap().as_dict().unwrap().contains_key("GS1"));
        let fm1 = dict.get("XObject").unwrap().as_dict().unwrap().get("Fm1").unwrap();
        assert_eq!(fm1.as_stream_data(), Some(&b"n\n"[..]));
        assert!(!dict.contains_key("Pattern"));
    }

    #[test]
    fn test_form_object() {
        let form = FormXObject::new(Rect::new(-0.5, -0.5, 10.5, 13.0), b"f\n".to_vec())
            .with_matrix(Matrix::translate(0.5, 0.5));
        let obj = form.to_object();
        let dict = obj.as_dict().unwrap();

        assert_eq!(dict.get("Subtype"), Some(&Object::Name("Form".to_string())));
        assert_eq!(dict.get("FormType"), Some(&Object::Integer(1)));
        assert_eq!(
            dict.get("BBox").and_then(Rect::from_object),
            Some(Rect::new(-0.5, -0.5, 10.5, 13.0))
        );
        assert_eq!(dict.get("Matrix"), Some(&Matrix::translate(0.5, 0.5).to_object()));
        assert!(!dict.contains_key("Resources"));
        assert_eq!(form.content_str(), "f\n");
    }

    #[test]
    fn test_appearance_dictionary_only_lists_present_states() {
        let mut ap = AppearanceDictionary::new();
        assert_eq!(ap.to_object(), Object::Dictionary(HashMap::new()));

        ap.normal = Some(FormXObject::new(Rect::new(0.0, 0.0, 1.0, 1.0), Vec::new()));
        let obj = ap.to_object();
        let dict = obj.as_dict().unwrap();
        assert!(dict.contains_key("N"));
        assert!(!dict.contains_key("R"));
        assert!(!dict.contains_key("D"));
    }
}

//! PDF syntax for annotation objects.
//!
//! Writes the objects an annotation dictionary carries: numbers, names,
//! arrays, dictionaries and content streams. Dictionary keys are sorted so
//! the same annotation always produces the same bytes.

use crate::error::Result;
use crate::object::Object;
use std::collections::HashMap;
use std::io::Write;

/// Writes [`Object`] trees in PDF syntax.
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjectSerializer {
    /// One dictionary entry per line when false
    compact: bool,
}

impl ObjectSerializer {
    /// Serializer writing one dictionary entry per line.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serializer without layout whitespace.
    pub fn compact() -> Self {
        Self { compact: true }
    }

    /// Serialize an object to bytes.
    pub fn serialize(&self, obj: &Object) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        self.emit(&mut out, obj)?;
        Ok(out)
    }

    /// Serialize an object to text. Stream data is decoded lossily.
    pub fn serialize_to_string(&self, obj: &Object) -> Result<String> {
        Ok(String::from_utf8_lossy(&self.serialize(obj)?).into_owned())
    }

    fn emit<W: Write>(&self, w: &mut W, obj: &Object) -> std::io::Result<()> {
        match obj {
            Object::Integer(i) => write!(w, "{}", i),
            Object::Real(r) => w.write_all(format_real(*r).as_bytes()),
            Object::Name(name) => w.write_all(escape_name(name).as_bytes()),
            Object::Array(items) => {
                w.write_all(b"[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        w.write_all(b" ")?;
                    }
                    self.emit(w, item)?;
                }
                w.write_all(b"]")
            },
            Object::Dictionary(dict) => self.emit_dict(w, dict, None),
            Object::Stream { dict, data } => {
                self.emit_dict(w, dict, Some(data.len()))?;
                w.write_all(b"\nstream\n")?;
                w.write_all(data)?;
                w.write_all(b"\nendstream")
            },
        }
    }

    /// `stream_len` adds /Length unless the dictionary already has one.
    fn emit_dict<W: Write>(
        &self,
        w: &mut W,
        dict: &HashMap<String, Object>,
        stream_len: Option<usize>,
    ) -> std::io::Result<()> {
        let length = stream_len
            .filter(|_| !dict.contains_key("Length"))
            .map(|n| Object::Integer(n as i64));

        let mut entries: Vec<(&str, &Object)> = dict
            .iter()
            .map(|(k, v)| (k.as_str(), v))
            .chain(length.as_ref().map(|len| ("Length", len)))
            .collect();
        entries.sort_unstable_by_key(|(key, _)| *key);

        w.write_all(b"<<")?;
        for (key, value) in &entries {
            if !self.compact {
                w.write_all(b"\n  ")?;
            }
            w.write_all(escape_name(key).as_bytes())?;
            w.write_all(b" ")?;
            self.emit(w, value)?;
        }
        if !self.compact && !entries.is_empty() {
            w.write_all(b"\n")?;
        }
        w.write_all(b">>")
    }
}

/// At most five decimals, without trailing zeros or a bare point.
fn format_real(value: f64) -> String {
    let mut text = format!("{:.5}", value);
    if text.contains('.') {
        let kept = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(kept);
    }
    if text == "-0" {
        text.remove(0);
    }
    text
}

/// `/name` with delimiters, `#`, whitespace and non-ASCII bytes as `#xx`.
fn escape_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 1);
    out.push('/');
    for byte in name.bytes() {
        let delimiter = matches!(
            byte,
            b'(' | b')' | b'<' | b'>' | b'[' | b']' | b'{' | b'}' | b'/' | b'%' | b'#'
        );
        if byte.is_ascii_graphic() && !delimiter {
            out.push(byte as char);
        } else {
            out.push_str(&format!("#{:02X}", byte));
        }
    }
    out
}

//! Per-value encoding between the store's strings and JSON values.
//!
//! DESIGN
//! ======
//! The page's store only holds strings. A stored string that parses as JSON is
//! shown and edited as JSON; anything else stays an opaque string and must be
//! written back byte-for-byte. The `is_json` flag travels with the value so the
//! two cases never get confused on the way back.
//!
//! Every JSON text produced here writes numbers the way JavaScript's
//! `String(n)` does (`1e5` → `100000`, `1.0` → `1`, `-0` → `0`), so the view,
//! the copy payload and the size counter agree with what the page itself would
//! produce.

#[cfg(test)]
#[path = "coder_test.rs"]
mod coder_test;

use std::io;

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{CompactFormatter, Formatter, PrettyFormatter, Serializer};

/// A decoded store value together with how it was decoded.
#[derive(Clone, Debug, PartialEq)]
pub struct StoredValue {
    pub value: Value,
    pub is_json: bool,
}

impl StoredValue {
    /// A raw, non-JSON string value.
    pub fn raw(text: impl Into<String>) -> Self {
        Self {
            value: Value::String(text.into()),
            is_json: false,
        }
    }

    /// A JSON-typed value.
    #[must_use]
    pub fn json(value: Value) -> Self {
        Self { value, is_json: true }
    }
}

/// Decode a raw stored string.
///
/// `""` fails to parse and therefore decodes as the empty raw string, not as
/// `null`.
#[must_use]
pub fn decode(raw: &str) -> StoredValue {
    match serde_json::from_str::<Value>(raw) {
        Ok(value) => StoredValue::json(value),
        Err(_) => StoredValue::raw(raw),
    }
}

/// Encode a value for storage.
///
/// JSON-typed values are serialized compactly. Raw strings come back unchanged.
/// A non-string value flagged as raw is serialized too, since the store could
/// not hold it any other way.
#[must_use]
pub fn encode(value: &Value, is_json: bool) -> String {
    match value {
        Value::String(text) if !is_json => text.clone(),
        other => compact_json(other),
    }
}

/// Encode an entry of a bulk write: strings verbatim, everything else as JSON.
#[must_use]
pub fn encode_for_store(value: &Value) -> String {
    encode(value, !value.is_string())
}

/// Text placed in the editor for a stored value.
///
/// JSON-typed values are pretty-printed with two-space indentation; raw strings
/// are shown as-is.
#[must_use]
pub fn edit_text(stored: &StoredValue) -> String {
    match &stored.value {
        Value::String(text) if !stored.is_json => text.clone(),
        other => pretty_json(other),
    }
}

/// Text shown for a value in the entry list.
///
/// Objects and arrays are JSON-encoded; strings are shown without quotes;
/// numbers, booleans and `null` use their plain textual form.
#[must_use]
pub fn display_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => compact_json(other),
    }
}

/// Compact JSON text with JavaScript number formatting.
#[must_use]
pub fn compact_json(value: &Value) -> String {
    write_json(value, CompactFormatter)
}

/// Two-space indented JSON text with JavaScript number formatting.
#[must_use]
pub fn pretty_json(value: &Value) -> String {
    write_json(value, PrettyFormatter::new())
}

fn write_json<F: Formatter>(value: &Value, layout: F) -> String {
    let mut out = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut out, JsNumbers(layout));
    if let Err(err) = value.serialize(&mut serializer) {
        log::error!("json serialization failed: {err}");
        return value.to_string();
    }
    String::from_utf8(out)
        .unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned())
}

/// Layout from the wrapped formatter, floats from `ryu-js`.
struct JsNumbers<F>(F);

impl<F: Formatter> Formatter for JsNumbers<F> {
    fn write_f64<W: ?Sized + io::Write>(&mut self, writer: &mut W, value: f64) -> io::Result<()> {
        let mut buffer = ryu_js::Buffer::new();
        writer.write_all(buffer.format(value).as_bytes())
    }

    fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.begin_array(writer)
    }

    fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.0.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.begin_object(writer)
    }

    fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.0.begin_object_key(writer, first)
    }

    fn end_object_key<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_object_key(writer)
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_object_value(writer)
    }
}

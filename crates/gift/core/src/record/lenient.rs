//! Tolerant field decoding for hand-edited fixture rows.
//!
//! Fixture files are maintained by hand, so a numeric field may arrive as a
//! number, a numeric string, `null`, or be missing entirely. Every decoder in
//! this module is total: shapes it does not understand collapse to the neutral
//! value (`0`, `""`, `None`, or an empty list) instead of failing the row.

use core::fmt;

use serde::Deserialize;
use serde::de::{Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};

use super::ModifierKind;

/// Decodes an integer field.
///
/// Accepts integers, floats (truncated toward zero), numeric strings and
/// booleans. Everything else decodes as `0`.
pub fn int<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(IntVisitor)
}

/// Decodes a string field. Numbers are stringified, everything else is `""`.
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(TextVisitor)
}

/// Decodes an optional string field. Blank values become `None`.
pub fn opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = deserializer.deserialize_any(TextVisitor)?;
    Ok(if value.trim().is_empty() {
        None
    } else {
        Some(value)
    })
}

/// Decodes a list of strings, dropping blank and non-text entries.
///
/// A value that is not an array decodes as an empty list.
pub fn text_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(TextListVisitor)
}

/// Decodes a modifier kind from its tag string.
pub fn kind<'de, D>(deserializer: D) -> Result<ModifierKind, D::Error>
where
    D: Deserializer<'de>,
{
    let tag = deserializer.deserialize_any(TextVisitor)?;
    Ok(ModifierKind::from_tag(&tag))
}

/// Parses a numeric string the way the fixture data expects.
///
/// Surrounding whitespace is ignored, a blank string is `0`, and fractional or
/// exponent forms are truncated toward zero.
pub(crate) fn parse_int(raw: &str) -> i64 {
    let raw = raw.trim();
    if raw.is_empty() {
        return 0;
    }
    if let Ok(value) = raw.parse::<i64>() {
        return value;
    }
    raw.parse::<f64>().map(float_to_int).unwrap_or(0)
}

fn float_to_int(value: f64) -> i64 {
    if value.is_finite() {
        // `as` saturates at the i64 bounds.
        value.trunc() as i64
    } else {
        0
    }
}

fn drain_seq<'de, A>(mut seq: A) -> Result<(), A::Error>
where
    A: SeqAccess<'de>,
{
    while seq.next_element::<IgnoredAny>()?.is_some() {}
    Ok(())
}

fn drain_map<'de, A>(mut map: A) -> Result<(), A::Error>
where
    A: MapAccess<'de>,
{
    while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
    Ok(())
}

struct IntVisitor;

impl<'de> Visitor<'de> for IntVisitor {
    type Value = i64;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an integer, a numeric string, or null")
    }

    fn visit_bool<E>(self, v: bool) -> Result<i64, E> {
        Ok(i64::from(v))
    }

    fn visit_i64<E>(self, v: i64) -> Result<i64, E> {
        Ok(v)
    }

    fn visit_u64<E>(self, v: u64) -> Result<i64, E> {
        Ok(i64::try_from(v).unwrap_or(i64::MAX))
    }

    fn visit_f64<E>(self, v: f64) -> Result<i64, E> {
        Ok(float_to_int(v))
    }

    fn visit_str<E>(self, v: &str) -> Result<i64, E> {
        Ok(parse_int(v))
    }

    fn visit_none<E>(self) -> Result<i64, E> {
        Ok(0)
    }

    fn visit_unit<E>(self) -> Result<i64, E> {
        Ok(0)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }

    fn visit_seq<A>(self, seq: A) -> Result<i64, A::Error>
    where
        A: SeqAccess<'de>,
    {
        drain_seq(seq).map(|_| 0)
    }

    fn visit_map<A>(self, map: A) -> Result<i64, A::Error>
    where
        A: MapAccess<'de>,
    {
        drain_map(map).map(|_| 0)
    }
}

struct TextVisitor;

impl<'de> Visitor<'de> for TextVisitor {
    type Value = String;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a string, a number, or null")
    }

    fn visit_bool<E>(self, _v: bool) -> Result<String, E> {
        Ok(String::new())
    }

    fn visit_i64<E>(self, v: i64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_u64<E>(self, v: u64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_f64<E>(self, v: f64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_str<E>(self, v: &str) -> Result<String, E> {
        Ok(v.to_owned())
    }

    fn visit_string<E>(self, v: String) -> Result<String, E> {
        Ok(v)
    }

    fn visit_none<E>(self) -> Result<String, E> {
        Ok(String::new())
    }

    fn visit_unit<E>(self) -> Result<String, E> {
        Ok(String::new())
    }

    fn visit_some<D>(self, deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }

    fn visit_seq<A>(self, seq: A) -> Result<String, A::Error>
    where
        A: SeqAccess<'de>,
    {
        drain_seq(seq).map(|_| String::new())
    }

    fn visit_map<A>(self, map: A) -> Result<String, A::Error>
    where
        A: MapAccess<'de>,
    {
        drain_map(map).map(|_| String::new())
    }
}

/// One element of a text list; blank and non-text values decode as `""`.
struct LenientText(String);

impl<'de> Deserialize<'de> for LenientText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(TextVisitor).map(LenientText)
    }
}

struct TextListVisitor;

impl<'de> Visitor<'de> for TextListVisitor {
    type Value = Vec<String>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a list of strings")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Vec<String>, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut values = Vec::new();
        while let Some(LenientText(value)) = seq.next_element()? {
            if !value.trim().is_empty() {
                values.push(value);
            }
        }
        Ok(values)
    }

    fn visit_map<A>(self, map: A) -> Result<Vec<String>, A::Error>
    where
        A: MapAccess<'de>,
    {
        drain_map(map).map(|_| Vec::new())
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }

    fn visit_none<E>(self) -> Result<Vec<String>, E> {
        Ok(Vec::new())
    }

    fn visit_unit<E>(self) -> Result<Vec<String>, E> {
        Ok(Vec::new())
    }

    fn visit_bool<E>(self, _v: bool) -> Result<Vec<String>, E> {
        Ok(Vec::new())
    }

    fn visit_i64<E>(self, _v: i64) -> Result<Vec<String>, E> {
        Ok(Vec::new())
    }

    fn visit_u64<E>(self, _v: u64) -> Result<Vec<String>, E> {
        Ok(Vec::new())
    }

    fn visit_f64<E>(self, _v: f64) -> Result<Vec<String>, E> {
        Ok(Vec::new())
    }

    fn visit_str<E>(self, _v: &str) -> Result<Vec<String>, E> {
        Ok(Vec::new())
    }
}

//! Field values driving a render

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::borrow::Cow;

/// Key of the installment list read by `{{parcelas_rows}}`
pub const INSTALLMENTS_KEY: &str = "parcelas";

/// Key of the numeric field holding the installment count
pub const INSTALLMENT_COUNT_KEY: &str = "qtd_parcelas";

/// Upper bound for [`ValueMap::sync_installments`]
pub const MAX_INSTALLMENTS: usize = 1000;

/// One installment row
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Installment {
    /// Due date, `YYYY-MM-DD` or empty
    #[serde(default)]
    pub venc: String,
    /// Amount as typed (digits or masked BRL)
    #[serde(default)]
    pub valor: String,
}

impl Installment {
    pub fn new(venc: impl Into<String>, valor: impl Into<String>) -> Self {
        Self {
            venc: venc.into(),
            valor: valor.into(),
        }
    }

    /// Build from loose JSON; non-objects become an empty record
    fn from_json(value: &Value) -> Self {
        match value {
            Value::Object(map) => Self {
                venc: scalar_text(map.get("venc")),
                valor: scalar_text(map.get("valor")),
            },
            _ => Self::default(),
        }
    }
}

/// Text of a JSON scalar; falsy values (null, `false`, zero) and
/// non-scalars read as empty
fn scalar_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) if !is_zero(n) => number_text(n),
        Some(Value::Bool(true)) => "true".to_string(),
        _ => String::new(),
    }
}

fn is_zero(n: &Number) -> bool {
    n.as_f64().is_some_and(|f| f == 0.0)
}

/// Shortest decimal form of a number; whole floats drop the fraction
/// (`2.0` reads as `2`)
fn number_text(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f == 0.0 => "0".to_string(),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

/// A single entry of a [`ValueMap`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Number(Number),
    Text(String),
    Installments(Vec<Installment>),
}

impl FieldValue {
    /// Convert loose JSON; `null` and nested objects have no field value
    pub fn from_json(value: Value) -> Option<Self> {
        match value {
            Value::Null | Value::Object(_) => None,
            Value::Bool(b) => Some(Self::Flag(b)),
            Value::Number(n) => Some(Self::Number(n)),
            Value::String(s) => Some(Self::Text(s)),
            Value::Array(items) => Some(Self::Installments(
                items.iter().map(Installment::from_json).collect(),
            )),
        }
    }

    /// String form used for comparisons and formatting
    ///
    /// Installment lists have no text form and read as empty.
    pub fn to_text(&self) -> Cow<'_, str> {
        match self {
            Self::Flag(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
            Self::Number(n) => Cow::Owned(number_text(n)),
            Self::Text(s) => Cow::Borrowed(s),
            Self::Installments(_) => Cow::Borrowed(""),
        }
    }

    /// Whether a checkbox bound to this value is ticked
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Flag(b) => *b,
            Self::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
            Self::Text(s) => !s.is_empty(),
            Self::Installments(_) => true,
        }
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<Vec<Installment>> for FieldValue {
    fn from(value: Vec<Installment>) -> Self {
        Self::Installments(value)
    }
}

/// Field id → value, as entered in the form
///
/// Keeps insertion order, so values built from a template list in field
/// declaration order. Deserializes from any JSON object; `null` entries are
/// dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "serde_json::Map<String, Value>")]
pub struct ValueMap(IndexMap<String, FieldValue>);

impl ValueMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        self.0.insert(key.into(), value.into());
    }

    /// Builder form of [`insert`](Self::insert)
    pub fn with(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn remove(&mut self, key: &str) -> Option<FieldValue> {
        self.0.shift_remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.0.iter()
    }

    /// Installments stored under `key`; anything else reads as none
    pub fn installments(&self, key: &str) -> &[Installment] {
        match self.0.get(key) {
            Some(FieldValue::Installments(items)) => items,
            _ => &[],
        }
    }

    /// Resize `parcelas` to the count in `qtd_parcelas`
    ///
    /// The count is the leading integer of the field's text (`"3 parcelas"`
    /// reads as 3); anything unparsable or negative reads as 0. New rows are
    /// empty, extra rows are dropped.
    pub fn sync_installments(&mut self) {
        let wanted = self
            .get(INSTALLMENT_COUNT_KEY)
            .map(|v| leading_count(&v.to_text()))
            .unwrap_or(0);

        let entry = self
            .0
            .entry(INSTALLMENTS_KEY.to_string())
            .or_insert_with(|| FieldValue::Installments(Vec::new()));
        if !matches!(entry, FieldValue::Installments(_)) {
            *entry = FieldValue::Installments(Vec::new());
        }
        if let FieldValue::Installments(items) = entry {
            items.resize_with(wanted, Installment::default);
        }
    }
}

/// Leading decimal integer of `text`, clamped to `0..=MAX_INSTALLMENTS`
fn leading_count(text: &str) -> usize {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    let digits = &digits[..end];

    if negative || digits.is_empty() {
        return 0;
    }
    digits
        .parse::<usize>()
        .map_or(MAX_INSTALLMENTS, |n| n.min(MAX_INSTALLMENTS))
}

impl From<serde_json::Map<String, Value>> for ValueMap {
    fn from(map: serde_json::Map<String, Value>) -> Self {
        Self(
            map.into_iter()
                .filter_map(|(key, value)| FieldValue::from_json(value).map(|v| (key, v)))
                .collect(),
        )
    }
}

impl Extend<(String, FieldValue)> for ValueMap {
    fn extend<I: IntoIterator<Item = (String, FieldValue)>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for ValueMap {
    type Item = (String, FieldValue);
    type IntoIter = indexmap::map::IntoIter<String, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<(String, FieldValue)> for ValueMap {
    fn from_iter<I: IntoIterator<Item = (String, FieldValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

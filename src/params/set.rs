use std::collections::BTreeMap;

use crate::{
    foundation::error::{SlidemorphError, SlidemorphResult},
    params::registry::ParamId,
};

/// Sparse map of committed numeric parameter values.
///
/// Absent ids are a valid state: [`crate::resolve`] falls back to the registry default.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ParameterSet(BTreeMap<ParamId, f64>);

impl ParameterSet {
    /// Empty set: every id resolves to its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Committed value for `id`, if one was ever committed.
    pub fn get(&self, id: ParamId) -> Option<f64> {
        self.0.get(&id).copied()
    }

    /// Commit `value` for `id`.
    pub fn set(&mut self, id: ParamId, value: f64) {
        self.0.insert(id, value);
    }

    /// Builder-style [`ParameterSet::set`].
    pub fn with(mut self, id: ParamId, value: f64) -> Self {
        self.set(id, value);
        self
    }

    /// Iterate committed `(id, value)` pairs in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (ParamId, f64)> + '_ {
        self.0.iter().map(|(id, v)| (*id, *v))
    }

    /// Number of committed ids.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return `true` when nothing has been committed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(ParamId, f64)> for ParameterSet {
    fn from_iter<I: IntoIterator<Item = (ParamId, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Last-typed text for each parameter, allowed to hold values that do not parse.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct RawTextSet(BTreeMap<ParamId, String>);

impl RawTextSet {
    /// Raw text for `id`, if the field was ever edited.
    pub fn get(&self, id: ParamId) -> Option<&str> {
        self.0.get(&id).map(String::as_str)
    }

    /// Iterate `(id, text)` pairs in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (ParamId, &str)> + '_ {
        self.0.iter().map(|(id, t)| (*id, t.as_str()))
    }

    fn set(&mut self, id: ParamId, text: String) {
        self.0.insert(id, text);
    }
}

/// Result of editing one parameter field.
#[derive(Debug)]
pub enum EditOutcome {
    /// The text parsed and the numeric value was committed.
    Committed(f64),
    /// The text was stored but did not parse; the previous committed value is kept.
    Held(SlidemorphError),
}

impl EditOutcome {
    /// Committed value, if the edit parsed.
    pub fn committed(&self) -> Option<f64> {
        match self {
            Self::Committed(v) => Some(*v),
            Self::Held(_) => None,
        }
    }
}

/// Dual text/numeric state of one slide's parameters.
///
/// `text` and `values` are only mutated together through [`SlideParams::edit`].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SlideParams {
    values: ParameterSet,
    text: RawTextSet,
}

impl SlideParams {
    /// Start from committed values with no raw text.
    pub fn from_values(values: ParameterSet) -> Self {
        Self {
            values,
            text: RawTextSet::default(),
        }
    }

    /// Committed numeric values.
    pub fn values(&self) -> &ParameterSet {
        &self.values
    }

    /// Raw text as typed.
    pub fn text(&self) -> &RawTextSet {
        &self.text
    }

    /// Store `raw` as the text for `id` and commit it when it parses as a finite number.
    pub fn edit(&mut self, id: ParamId, raw: impl Into<String>) -> EditOutcome {
        let raw = raw.into();
        let parsed = parse_finite(&raw);
        self.text.set(id, raw);
        match parsed {
            Ok(v) => {
                self.values.set(id, v);
                EditOutcome::Committed(v)
            }
            Err(e) => EditOutcome::Held(e),
        }
    }
}

/// Parse user-typed text as a finite `f64`.
///
/// Surrounding whitespace is ignored; empty input, `NaN` and infinities are rejected.
pub fn parse_finite(raw: &str) -> SlidemorphResult<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(SlidemorphError::parse("empty input"));
    }
    let v: f64 = trimmed
        .parse()
        .map_err(|_| SlidemorphError::parse(format!("'{raw}' is not a number")))?;
    if !v.is_finite() {
        return Err(SlidemorphError::parse(format!("'{raw}' is not finite")));
    }
    Ok(v)
}

#[cfg(test)]
#[path = "../../tests/unit/params/set.rs"]
mod tests;

//! Casing conventions and string conversion.

use std::{fmt, str::FromStr};

use heck::{
    ToKebabCase, ToLowerCamelCase, ToShoutySnakeCase, ToSnakeCase, ToTrainCase, ToUpperCamelCase,
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A key casing convention.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyCase {
    /// `my_key`
    Snake,
    /// `MY_KEY`
    Constant,
    /// `myKey`
    #[default]
    Camel,
    /// `my-key`
    #[serde(alias = "kebab")]
    Param,
    /// `My-Key`
    #[serde(alias = "train")]
    Header,
    /// `MyKey`
    Pascal,
    /// `my.key`
    Dot,
    /// Leaves the input untouched.
    #[serde(rename = "notransform")]
    NoTransform,
}

impl KeyCase {
    pub const ALL: [KeyCase; 8] = [
        KeyCase::Snake,
        KeyCase::Constant,
        KeyCase::Camel,
        KeyCase::Param,
        KeyCase::Header,
        KeyCase::Pascal,
        KeyCase::Dot,
        KeyCase::NoTransform,
    ];

    /// Canonical identifier of this casing.
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyCase::Snake => "snake",
            KeyCase::Constant => "constant",
            KeyCase::Camel => "camel",
            KeyCase::Param => "param",
            KeyCase::Header => "header",
            KeyCase::Pascal => "pascal",
            KeyCase::Dot => "dot",
            KeyCase::NoTransform => "notransform",
        }
    }

    /// Rewrite `value` into this casing.
    ///
    /// Digit runs are words of their own, so `page10Size` is `page_10_size` in snake case.
    pub fn convert(&self, value: &str) -> String {
        match self {
            KeyCase::NoTransform => value.to_string(),
            KeyCase::Snake => split_digits(value).to_snake_case(),
            KeyCase::Constant => split_digits(value).to_shouty_snake_case(),
            KeyCase::Camel => split_digits(value).to_lower_camel_case(),
            KeyCase::Param => split_digits(value).to_kebab_case(),
            KeyCase::Header => split_digits(value).to_train_case(),
            KeyCase::Pascal => split_digits(value).to_upper_camel_case(),
            KeyCase::Dot => to_dot_case(&split_digits(value)),
        }
    }
}

impl fmt::Display for KeyCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KeyCase {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "kebab" => Ok(KeyCase::Param),
            "train" => Ok(KeyCase::Header),
            _ => KeyCase::ALL
                .into_iter()
                .find(|case| case.as_str() == s)
                .ok_or_else(|| Box::new(Error::UnknownCase(s.to_string()))),
        }
    }
}

/// Put a word break wherever a digit meets a letter.
fn split_digits(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 4);
    let mut prev: Option<char> = None;
    for c in value.chars() {
        let boundary = prev.is_some_and(|p| {
            (p.is_ascii_digit() && c.is_alphabetic()) || (p.is_alphabetic() && c.is_ascii_digit())
        });
        if boundary {
            out.push(' ');
        }
        out.push(c);
        prev = Some(c);
    }
    out
}

/// Lowercase words joined by `.`; apostrophes are dropped rather than split on.
fn to_dot_case(value: &str) -> String {
    let stripped = value.replace('\'', "");
    stripped
        .to_snake_case()
        .split('_')
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(".")
}

/// Literal replacements consulted before any casing rule.
///
/// Entries with an empty replacement are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Overrides(IndexMap<String, String>);

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a flat TOML table such as `user_id = "userID"`.
    pub fn from_toml_str(src: &str) -> Result<Self> {
        toml::from_str(src).map_err(|e| Box::new(Error::Overrides(e)))
    }

    pub fn insert(&mut self, key: impl Into<String>, replacement: impl Into<String>) {
        self.0.insert(key.into(), replacement.into());
    }

    /// Replacement for `key`, if one is set and non-empty.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .map(String::as_str)
            .filter(|replacement| !replacement.is_empty())
    }

    /// Merge `other` into `self`; entries of `other` win.
    pub fn extend(&mut self, other: Overrides) {
        self.0.extend(other.0);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Overrides {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Convert `value` into `expected_case`.
///
/// `NoTransform` returns the input as is, without looking at `overrides`.
/// Otherwise a non-empty override for the exact input wins over the casing rule.
pub fn to_expected_case(
    value: &str,
    expected_case: KeyCase,
    overrides: Option<&Overrides>,
) -> String {
    if expected_case == KeyCase::NoTransform {
        return value.to_string();
    }
    if let Some(replacement) = overrides.and_then(|o| o.get(value)) {
        return replacement.to_string();
    }
    expected_case.convert(value)
}

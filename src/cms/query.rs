//! Bracket-style query strings understood by the CMS REST API.
//!
//! Nested maps flatten to `a[b][c]=v`, lists to `a[0]=v&a[1]=w`. Keys stay
//! literal and only values are percent-encoded, which keeps URLs readable in
//! logs while still being accepted by the server's parser.

use std::fmt::Write as _;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Param {
    Value(String),
    List(Vec<Param>),
    Map(Vec<(String, Param)>),
}

impl From<&str> for Param {
    fn from(value: &str) -> Self {
        Param::Value(value.to_owned())
    }
}

impl From<String> for Param {
    fn from(value: String) -> Self {
        Param::Value(value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CmsQuery {
    params: Vec<(String, Param)>,
}

impl CmsQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn param(mut self, key: impl Into<String>, value: impl Into<Param>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Expands every first-level relation (`populate=*`).
    pub fn populate_all(self) -> Self {
        self.param("populate", "*")
    }

    /// Expands the listed relations; dotted paths reach nested ones.
    pub fn populate<I, S>(self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.param("populate", list(fields))
    }

    /// Sort directives such as `fechaCampana:desc`.
    pub fn sort<I, S>(self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.param("sort", list(fields))
    }

    pub fn filter_eq(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        let condition = Param::Map(vec![("$eq".to_owned(), Param::Value(value.into()))]);
        let entry = (field.into(), condition);

        match self
            .params
            .iter_mut()
            .find(|(key, param)| key == "filters" && matches!(param, Param::Map(_)))
        {
            Some((_, Param::Map(filters))) => filters.push(entry),
            _ => self
                .params
                .push(("filters".to_owned(), Param::Map(vec![entry]))),
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.to_query_string().is_empty()
    }

    pub fn to_query_string(&self) -> String {
        let mut pairs = Vec::new();
        for (key, param) in &self.params {
            flatten(key, param, &mut pairs);
        }
        pairs.join("&")
    }
}

fn list<I, S>(items: I) -> Param
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Param::List(items.into_iter().map(|s| Param::Value(s.into())).collect())
}

fn flatten(prefix: &str, param: &Param, out: &mut Vec<String>) {
    match param {
        Param::Value(value) => out.push(format!("{prefix}={}", encode_value(value))),
        Param::List(items) => {
            for (idx, item) in items.iter().enumerate() {
                flatten(&format!("{prefix}[{idx}]"), item, out);
            }
        }
        Param::Map(entries) => {
            for (key, value) in entries {
                flatten(&format!("{prefix}[{key}]"), value, out);
            }
        }
    }
}

/// RFC 3986 percent-encoding: unreserved characters pass through.
pub fn encode_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(byte as char)
            }
            _ => {
                let _ = write!(out, "%{byte:02X}");
            }
        }
    }
    out
}

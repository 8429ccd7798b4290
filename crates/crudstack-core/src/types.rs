//! Method and operator vocabulary shared across the adapter.

use std::fmt;

/// The four CRUD operations the adapter can dispatch.
///
/// Resolved once from the raw HTTP method string by the router; everything
/// past the router works with this closed enum rather than method strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Insert or replace an item (`POST`).
    Create,
    /// Query items by primary key (`GET`).
    Read,
    /// Update non-key attributes of an item (`PUT`).
    Update,
    /// Remove an item by primary key (`DELETE`).
    Delete,
}

impl Method {
    /// Resolve an HTTP method string into an operation.
    ///
    /// Returns `None` for any method outside the CRUD mapping; the router
    /// reports those as "not supported".
    #[must_use]
    pub fn from_http_method(method: &str) -> Option<Self> {
        match method {
            "POST" => Some(Self::Create),
            "GET" => Some(Self::Read),
            "PUT" => Some(Self::Update),
            "DELETE" => Some(Self::Delete),
            _ => None,
        }
    }

    /// Returns the HTTP method string this operation maps to.
    #[must_use]
    pub fn http_method(&self) -> &'static str {
        match self {
            Self::Create => "POST",
            Self::Read => "GET",
            Self::Update => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.http_method())
    }
}

/// Comparison operator attached to a declared key field.
///
/// Only [`Operator::Eq`] is valid when composing a composite primary-key
/// condition; the remaining operators are meaningful in filter templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Operator {
    /// `=`
    #[default]
    Eq,
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `>=`
    Ge,
    /// `begins_with(#field, :field)`
    BeginsWith,
}

impl Operator {
    /// Parse an operator from its configuration symbol.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "=" | "==" => Some(Self::Eq),
            "<" => Some(Self::Lt),
            "<=" => Some(Self::Le),
            ">" => Some(Self::Gt),
            ">=" => Some(Self::Ge),
            "begins_with" => Some(Self::BeginsWith),
            _ => None,
        }
    }

    /// Returns the symbol used in condition clause text.
    #[must_use]
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Ge => ">=",
            Self::BeginsWith => "begins_with",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl<'de> serde::Deserialize<'de> for Operator {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let symbol = String::deserialize(deserializer)?;
        Self::from_symbol(&symbol).ok_or_else(|| {
            serde::de::Error::custom(format!("unknown key operator symbol: {symbol}"))
        })
    }
}

impl serde::Serialize for Operator {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.symbol())
    }
}

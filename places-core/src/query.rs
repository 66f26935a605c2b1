use std::{fmt, str::FromStr};

use crate::usecases::Error;

/// A non-empty, trimmed free-text search query.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Query(String);

impl Query {
    pub fn parse(text: &str) -> Result<Self, Error> {
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::EmptyQuery);
        }
        Ok(Self(text.to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl FromStr for Query {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Query {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Query> for String {
    fn from(from: Query) -> Self {
        from.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trim_query() {
        let q = Query::parse("  24h cafe in Depok  ").unwrap();
        assert_eq!(q.as_str(), "24h cafe in Depok");
    }

    #[test]
    fn reject_blank_queries() {
        for text in ["", " ", "\t\n", "   \r\n  "] {
            assert!(matches!(Query::parse(text), Err(Error::EmptyQuery)));
        }
    }

    #[test]
    fn keep_inner_whitespace() {
        let q: Query = "\tcoffee   shops ".parse().unwrap();
        assert_eq!(q.to_string(), "coffee   shops");
    }
}

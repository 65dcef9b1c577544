//! Equality-predicate filters for document queries.
//!
//! A [`Filter`] is a list of `field = value` clauses. A document matches when
//! every clause holds; the empty filter matches every document. This is the
//! whole query surface of the system - there are no range, substring, or
//! logical operators at this boundary.

use bson::{Bson, Document as BsonDocument};

/// A structured equality filter over document fields.
///
/// # Example
///
/// ```ignore
/// use saaz_store::filter::Filter;
///
/// let filter = Filter::new().eq("category", "Electronics");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Filter {
    clauses: Vec<(String, Bson)>,
}

impl Filter {
    /// Creates an empty filter that matches all documents.
    pub fn new() -> Self {
        Filter::default()
    }

    /// Adds an equality clause for the given field.
    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Bson>) -> Self {
        self.clauses.push((field.into(), value.into()));
        self
    }

    /// Returns `true` if this filter has no clauses.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Returns the `(field, value)` clauses of this filter.
    pub fn clauses(&self) -> &[(String, Bson)] {
        &self.clauses
    }

    /// Evaluates this filter against a document.
    ///
    /// Equality is exact BSON equality; backends that can push the predicate
    /// down to the store (e.g. MongoDB) translate the clauses instead of
    /// calling this.
    pub fn matches(&self, document: &BsonDocument) -> bool {
        self.clauses
            .iter()
            .all(|(field, value)| document.get(field) == Some(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;

    #[test]
    fn empty_filter_matches_everything() {
        let filter = Filter::new();
        assert!(filter.is_empty());
        assert!(filter.matches(&doc! { "name": "Shoes" }));
        assert!(filter.matches(&doc! {}));
    }

    #[test]
    fn all_clauses_must_hold() {
        let filter = Filter::new()
            .eq("category", "Electronics")
            .eq("name", "Headphones");

        assert!(filter.matches(&doc! { "name": "Headphones", "category": "Electronics", "price": 49.9 }));
        assert!(!filter.matches(&doc! { "name": "Headphones", "category": "Audio" }));
        assert!(!filter.matches(&doc! { "name": "Headphones" }));
    }
}

//! Equality predicates for scans and queries.
//!
//! A [`Filter`] is a conjunction of `attribute = value` conditions. The SDK
//! backend renders it into an expression with placeholder names and values;
//! the in-memory backend evaluates it directly with [`Filter::matches`].

use std::collections::HashMap;
use std::fmt;

use aws_sdk_dynamodb::types::AttributeValue;

use super::Item;

/// Conjunction of attribute equality conditions.
///
/// An empty filter matches every item.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    conditions: Vec<(String, AttributeValue)>,
}

/// A filter rendered for the DynamoDB API.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterExpression {
    pub expression: String,
    pub names: HashMap<String, String>,
    pub values: HashMap<String, AttributeValue>,
}

impl Filter {
    /// A filter that matches everything.
    pub fn all() -> Self {
        Self::default()
    }

    /// Single string equality condition.
    pub fn equals(attribute: impl Into<String>, value: impl Into<String>) -> Self {
        Self::all().and(attribute, value)
    }

    /// Add a string equality condition.
    pub fn and(self, attribute: impl Into<String>, value: impl Into<String>) -> Self {
        self.and_value(attribute, AttributeValue::S(value.into()))
    }

    /// Add an equality condition on an arbitrary attribute value.
    pub fn and_value(mut self, attribute: impl Into<String>, value: AttributeValue) -> Self {
        self.conditions.push((attribute.into(), value));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn conditions(&self) -> &[(String, AttributeValue)] {
        &self.conditions
    }

    /// Whether every condition holds for `item`. Missing attributes never match.
    pub fn matches(&self, item: &Item) -> bool {
        self.conditions
            .iter()
            .all(|(attribute, value)| item.get(attribute) == Some(value))
    }

    /// Render as `#f0 = :v0 AND #f1 = :v1`, or `None` for an empty filter.
    pub fn expression(&self) -> Option<FilterExpression> {
        if self.is_empty() {
            return None;
        }

        let mut clauses = Vec::with_capacity(self.conditions.len());
        let mut names = HashMap::new();
        let mut values = HashMap::new();

        for (i, (attribute, value)) in self.conditions.iter().enumerate() {
            let name = format!("#f{i}");
            let placeholder = format!(":v{i}");
            clauses.push(format!("{name} = {placeholder}"));
            names.insert(name, attribute.clone());
            values.insert(placeholder, value.clone());
        }

        Some(FilterExpression {
            expression: clauses.join(" AND "),
            names,
            values,
        })
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "<all>");
        }
        for (i, (attribute, value)) in self.conditions.iter().enumerate() {
            if i > 0 {
                write!(f, " AND ")?;
            }
            match value {
                AttributeValue::S(s) => write!(f, "{attribute} = {s}")?,
                AttributeValue::Bool(b) => write!(f, "{attribute} = {b}")?,
                AttributeValue::N(n) => write!(f, "{attribute} = {n}")?,
                other => write!(f, "{attribute} = {other:?}")?,
            }
        }
        Ok(())
    }
}

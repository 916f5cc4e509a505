use super::Operand;

use cartograph_core::{Error, Result};

/// A boolean tree used by WHERE and HAVING.
///
/// The tree is a flat sequence of predicates and nested groups separated by
/// connectives, rendered in order. A well-formed tree with N operands has
/// exactly N-1 connectives, one between each adjacent pair. Nested groups
/// render in parentheses.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Condition {
    entries: Vec<Entry>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    Predicate(Predicate),
    Connective(Connective),
    Group(Condition),
}

/// A `lhs op rhs` comparison. The operator is rendered verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    pub lhs: String,
    pub op: String,
    pub rhs: Operand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connective {
    And,
    Or,
}

impl Connective {
    pub fn keyword(self) -> &'static str {
        match self {
            Connective::And => "AND",
            Connective::Or => "OR",
        }
    }
}

impl Predicate {
    pub fn new(lhs: impl Into<String>, op: impl Into<String>, rhs: impl Into<Operand>) -> Predicate {
        Predicate {
            lhs: lhs.into(),
            op: op.into(),
            rhs: rhs.into(),
        }
    }
}

impl Condition {
    /// A tree holding a single predicate.
    pub fn new(lhs: impl Into<String>, op: impl Into<String>, rhs: impl Into<Operand>) -> Condition {
        Condition {
            entries: vec![Entry::Predicate(Predicate::new(lhs, op, rhs))],
        }
    }

    /// A tree holding `condition` as a single parenthesized group.
    pub fn group(condition: Condition) -> Condition {
        Condition {
            entries: vec![Entry::Group(condition)],
        }
    }

    /// Builds a tree from raw entries. Shape is checked when the statement
    /// is rendered.
    pub fn from_entries(entries: Vec<Entry>) -> Condition {
        Condition { entries }
    }

    #[must_use]
    pub fn and(self, lhs: impl Into<String>, op: impl Into<String>, rhs: impl Into<Operand>) -> Condition {
        self.push(Connective::And, Entry::Predicate(Predicate::new(lhs, op, rhs)))
    }

    #[must_use]
    pub fn or(self, lhs: impl Into<String>, op: impl Into<String>, rhs: impl Into<Operand>) -> Condition {
        self.push(Connective::Or, Entry::Predicate(Predicate::new(lhs, op, rhs)))
    }

    #[must_use]
    pub fn and_group(self, condition: Condition) -> Condition {
        self.push(Connective::And, Entry::Group(condition))
    }

    #[must_use]
    pub fn or_group(self, condition: Condition) -> Condition {
        self.push(Connective::Or, Entry::Group(condition))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub(crate) fn push(mut self, connective: Connective, entry: Entry) -> Condition {
        self.entries.push(Entry::Connective(connective));
        self.entries.push(entry);
        self
    }

    /// Appends `other`'s entries as they are. No connective is inserted.
    pub(crate) fn append(mut self, other: Condition) -> Condition {
        self.entries.extend(other.entries);
        self
    }

    /// Checks that operands and connectives alternate, starting and ending
    /// with an operand, and that nested groups and subqueries are valid.
    pub(crate) fn validate(&self, clause: &str) -> Result<()> {
        let mut expect_operand = true;

        for entry in &self.entries {
            match entry {
                Entry::Connective(connective) if expect_operand => {
                    return Err(Error::invalid_clause(format!(
                        "{} in {clause} has no preceding condition",
                        connective.keyword()
                    )));
                }
                Entry::Connective(_) => expect_operand = true,
                Entry::Predicate(_) | Entry::Group(_) if !expect_operand => {
                    return Err(Error::invalid_clause(format!(
                        "conditions in {clause} must be separated by AND or OR"
                    )));
                }
                Entry::Predicate(predicate) => {
                    if let Some(subquery) = predicate.rhs.as_subquery() {
                        subquery.validate()?;
                    }
                    expect_operand = false;
                }
                Entry::Group(group) => {
                    if group.is_empty() {
                        return Err(Error::invalid_clause(format!(
                            "empty condition group in {clause}"
                        )));
                    }
                    group.validate(clause)?;
                    expect_operand = false;
                }
            }
        }

        if expect_operand && !self.entries.is_empty() {
            return Err(Error::invalid_clause(format!(
                "{clause} ends with a connective"
            )));
        }

        Ok(())
    }
}

impl From<Predicate> for Condition {
    fn from(value: Predicate) -> Self {
        Condition {
            entries: vec![Entry::Predicate(value)],
        }
    }
}

impl<L, O, R> From<(L, O, R)> for Condition
where
    L: Into<String>,
    O: Into<String>,
    R: Into<Operand>,
{
    fn from((lhs, op, rhs): (L, O, R)) -> Self {
        Condition::new(lhs, op, rhs)
    }
}

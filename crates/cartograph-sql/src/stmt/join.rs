/// The join keyword.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
    /// Plain `JOIN`
    #[default]
    Join,
    Inner,
    Left,
    Right,
    Full,
}

impl JoinKind {
    pub fn keyword(self) -> &'static str {
        match self {
            JoinKind::Join => "JOIN",
            JoinKind::Inner => "INNER JOIN",
            JoinKind::Left => "LEFT JOIN",
            JoinKind::Right => "RIGHT JOIN",
            JoinKind::Full => "FULL JOIN",
        }
    }
}

/// A join onto another table by column equality.
///
/// A join alias renders without `AS` (`addresses a`), unlike the FROM
/// target (`users AS u`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Join {
    pub kind: JoinKind,
    pub table: String,
    pub alias: Option<String>,
    /// `(left, right)` rendered as `ON left = right`.
    pub on: Option<(String, String)>,
}

impl Join {
    pub fn new(table: impl Into<String>) -> Join {
        Join {
            kind: JoinKind::Join,
            table: table.into(),
            alias: None,
            on: None,
        }
    }

    pub fn inner(table: impl Into<String>) -> Join {
        Join::new(table).kind(JoinKind::Inner)
    }

    pub fn left(table: impl Into<String>) -> Join {
        Join::new(table).kind(JoinKind::Left)
    }

    #[must_use]
    pub fn kind(mut self, kind: JoinKind) -> Join {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn alias(mut self, alias: impl Into<String>) -> Join {
        self.alias = Some(alias.into());
        self
    }

    #[must_use]
    pub fn on(mut self, left: impl Into<String>, right: impl Into<String>) -> Join {
        self.on = Some((left.into(), right.into()));
        self
    }
}

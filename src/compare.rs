use std::cmp::Ordering;

/// The comparison kinds a helper can evaluate, paired with the symbol that
/// shows up in the printed description line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Equal,
    NotEqual,
    LessThan,
    LessOrEqual,
    GreaterThan,
    GreaterOrEqual,
    Contains,
}

impl Comparison {
    pub fn symbol(self) -> &'static str {
        match self {
            Comparison::Equal => "==",
            Comparison::NotEqual => "!=",
            Comparison::LessThan => "<",
            Comparison::LessOrEqual => "<=",
            Comparison::GreaterThan => ">",
            Comparison::GreaterOrEqual => ">=",
            Comparison::Contains => "contains",
        }
    }

    /// Decide the comparison from the sign of a three-way ordering result.
    /// Ordered helpers go through here rather than the built-in operators.
    pub fn holds(self, ord: Ordering) -> bool {
        match self {
            Comparison::Equal => ord == Ordering::Equal,
            Comparison::NotEqual => ord != Ordering::Equal,
            Comparison::LessThan => ord == Ordering::Less,
            Comparison::LessOrEqual => ord != Ordering::Greater,
            Comparison::GreaterThan => ord == Ordering::Greater,
            Comparison::GreaterOrEqual => ord != Ordering::Less,
            // Membership has no ordering; callers evaluate it directly.
            Comparison::Contains => false,
        }
    }
}

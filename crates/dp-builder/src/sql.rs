//! SQL query builder (translates the `SQLQueryBuilder` of the C++
//! catalogue).
//!
//! `build()` requires a `FROM` table: the C++ version happily rendered a
//! query with no table at all, which is exactly the silent nonsense a
//! builder exists to prevent.

use std::fmt;

use dp_core::{ensure, errors::Result};

/// Sort direction for `ORDER BY` clauses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Ascending.
    Asc,
    /// Descending.
    Desc,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        })
    }
}

/// A finished query. `Display` renders the SQL text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SqlQuery {
    select: Vec<String>,
    from: String,
    joins: Vec<String>,
    conditions: Vec<String>,
    group_by: Vec<String>,
    having: Vec<String>,
    order_by: Vec<String>,
    limit: Option<u64>,
    offset: Option<u64>,
}

impl fmt::Display for SqlQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.select.is_empty() {
            write!(f, "SELECT *")?;
        } else {
            write!(f, "SELECT {}", self.select.join(", "))?;
        }
        write!(f, " FROM {}", self.from)?;
        for join in &self.joins {
            write!(f, " {join}")?;
        }
        if !self.conditions.is_empty() {
            write!(f, " WHERE {}", self.conditions.join(" AND "))?;
        }
        if !self.group_by.is_empty() {
            write!(f, " GROUP BY {}", self.group_by.join(", "))?;
        }
        if !self.having.is_empty() {
            write!(f, " HAVING {}", self.having.join(" AND "))?;
        }
        if !self.order_by.is_empty() {
            write!(f, " ORDER BY {}", self.order_by.join(", "))?;
        }
        if let Some(limit) = self.limit {
            write!(f, " LIMIT {limit}")?;
        }
        if let Some(offset) = self.offset {
            write!(f, " OFFSET {offset}")?;
        }
        Ok(())
    }
}

/// Fluent builder for [`SqlQuery`].
///
/// ```
/// use dp_builder::{SortOrder, SqlQueryBuilder};
///
/// let query = SqlQueryBuilder::new()
///     .select(&["id", "name"])
///     .from("users")
///     .and_where("active = 1")
///     .order_by("name", SortOrder::Asc)
///     .limit(10)
///     .build()
///     .unwrap();
/// assert_eq!(
///     query.to_string(),
///     "SELECT id, name FROM users WHERE active = 1 ORDER BY name ASC LIMIT 10"
/// );
/// ```
#[derive(Debug, Default)]
pub struct SqlQueryBuilder {
    query: SqlQuery,
}

impl SqlQueryBuilder {
    /// Start an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the selected columns. An empty selection renders as `SELECT *`.
    pub fn select(mut self, columns: &[&str]) -> Self {
        self.query.select = columns.iter().map(|c| c.to_string()).collect();
        self
    }

    /// Set the table to select from. Required.
    pub fn from(mut self, table: &str) -> Self {
        self.query.from = table.to_string();
        self
    }

    /// Add an inner join.
    pub fn join(mut self, table: &str, condition: &str) -> Self {
        self.query.joins.push(format!("JOIN {table} ON {condition}"));
        self
    }

    /// Add a left join.
    pub fn left_join(mut self, table: &str, condition: &str) -> Self {
        self.query
            .joins
            .push(format!("LEFT JOIN {table} ON {condition}"));
        self
    }

    /// Add a `WHERE` condition. Multiple conditions are `AND`-joined.
    pub fn and_where(mut self, condition: &str) -> Self {
        self.query.conditions.push(condition.to_string());
        self
    }

    /// Set the `GROUP BY` columns.
    pub fn group_by(mut self, columns: &[&str]) -> Self {
        self.query.group_by = columns.iter().map(|c| c.to_string()).collect();
        self
    }

    /// Add a `HAVING` condition. Multiple conditions are `AND`-joined.
    pub fn having(mut self, condition: &str) -> Self {
        self.query.having.push(condition.to_string());
        self
    }

    /// Add an `ORDER BY` column.
    pub fn order_by(mut self, column: &str, order: SortOrder) -> Self {
        self.query.order_by.push(format!("{column} {order}"));
        self
    }

    /// Set the row limit.
    pub fn limit(mut self, count: u64) -> Self {
        self.query.limit = Some(count);
        self
    }

    /// Set the row offset.
    pub fn offset(mut self, count: u64) -> Self {
        self.query.offset = Some(count);
        self
    }

    /// Finish. Fails with a precondition error if no table was given.
    pub fn build(self) -> Result<SqlQuery> {
        ensure!(!self.query.from.is_empty(), "query has no FROM table");
        Ok(self.query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_clause_order() {
        let query = SqlQueryBuilder::new()
            .select(&["u.id", "count(o.id)"])
            .from("users u")
            .left_join("orders o", "o.user_id = u.id")
            .and_where("u.active = 1")
            .and_where("u.age >= 18")
            .group_by(&["u.id"])
            .having("count(o.id) > 0")
            .order_by("u.id", SortOrder::Desc)
            .limit(50)
            .offset(100)
            .build()
            .unwrap();

        assert_eq!(
            query.to_string(),
            "SELECT u.id, count(o.id) FROM users u \
             LEFT JOIN orders o ON o.user_id = u.id \
             WHERE u.active = 1 AND u.age >= 18 \
             GROUP BY u.id HAVING count(o.id) > 0 \
             ORDER BY u.id DESC LIMIT 50 OFFSET 100"
        );
    }

    #[test]
    fn empty_select_renders_star() {
        let query = SqlQueryBuilder::new().from("logs").build().unwrap();
        assert_eq!(query.to_string(), "SELECT * FROM logs");
    }

    #[test]
    fn missing_table_is_an_error() {
        let err = SqlQueryBuilder::new().select(&["x"]).build().unwrap_err();
        assert_eq!(
            err.to_string(),
            "precondition not satisfied: query has no FROM table"
        );
    }

    #[test]
    fn zero_limit_still_renders() {
        let query = SqlQueryBuilder::new().from("t").limit(0).build().unwrap();
        assert_eq!(query.to_string(), "SELECT * FROM t LIMIT 0");
    }
}

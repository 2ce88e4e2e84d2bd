//! Dynamic WHERE clause construction for order listing
//!
//! Filter values never enter the SQL text. The builder only decides which
//! conditions exist and numbers their placeholders; the values travel
//! separately and are bound positionally by the repository.

/// Optional constraints narrowing an order listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderFilter {
    customer_name: Option<String>,
    status: Option<String>,
}

impl OrderFilter {
    /// Empty strings are treated the same as an absent filter.
    pub fn new(customer_name: Option<String>, status: Option<String>) -> Self {
        Self {
            customer_name: customer_name.filter(|s| !s.is_empty()),
            status: status.filter(|s| !s.is_empty()),
        }
    }

    /// Case-insensitive substring to match against the customer name
    pub fn customer_name(&self) -> Option<&str> {
        self.customer_name.as_deref()
    }

    /// Exact status to match
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Build the WHERE clause for this filter.
    pub fn to_clause(&self) -> FilterClause {
        let mut clause = FilterClause::default();
        if let Some(name) = self.customer_name() {
            clause.push("customer_name ILIKE", format!("%{}%", escape_like(name)));
        }
        if let Some(status) = self.status() {
            clause.push("status =", status.to_string());
        }
        clause
    }
}

/// Accumulated `(condition, bound value)` pairs
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FilterClause {
    conditions: Vec<String>,
    params: Vec<String>,
}

impl FilterClause {
    /// Add `<lhs> $n`, where `n` is the position of `value` among the bound
    /// parameters.
    pub fn push(&mut self, lhs: &str, value: String) {
        self.params.push(value);
        self.conditions.push(format!("{} ${}", lhs, self.params.len()));
    }

    /// `" WHERE a AND b"`, or an empty string when nothing was pushed
    pub fn where_sql(&self) -> String {
        if self.conditions.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", self.conditions.join(" AND "))
        }
    }

    pub fn params(&self) -> &[String] {
        &self.params
    }
}

/// Escape LIKE metacharacters so the filter matches literally.
/// PostgreSQL's default LIKE escape character is the backslash.
pub fn escape_like(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

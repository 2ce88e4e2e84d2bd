//! PostgreSQL order store

use async_trait::async_trait;
use sqlx::PgPool;

use super::filter::OrderFilter;
use super::models::{NewOrder, Order};
use super::store::OrderStore;

/// Columns returned by every read. The casts let NUMERIC amounts decode as
/// f64 and plain TIMESTAMP dates decode as `DateTime<Utc>` (sqlx sessions
/// run with `TimeZone=UTC`).
const ORDER_COLUMNS: &str = "order_id, customer_name, order_amount::float8 AS order_amount, \
     order_date::timestamptz AS order_date, status";

/// Build the listing query for `filter`: the SQL text plus the values to bind
/// to `$1..$n`, in order.
pub fn list_orders_query(filter: &OrderFilter) -> (String, Vec<String>) {
    let clause = filter.to_clause();
    let sql = format!(
        "SELECT {} FROM orders{} ORDER BY created_at DESC",
        ORDER_COLUMNS,
        clause.where_sql()
    );
    (sql, clause.params().to_vec())
}

fn insert_order_query() -> String {
    format!(
        r#"INSERT INTO orders (order_id, customer_name, order_amount, order_date, status)
           VALUES ($1, $2, $3, $4, $5)
           RETURNING {}"#,
        ORDER_COLUMNS
    )
}

/// `OrderStore` backed by a sqlx PostgreSQL pool
pub struct PgOrderStore {
    pool: PgPool,
}

impl PgOrderStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderStore for PgOrderStore {
    async fn fetch_orders(&self, filter: &OrderFilter) -> Result<Vec<Order>, sqlx::Error> {
        let (sql, params) = list_orders_query(filter);

        // Returned to the pool when dropped, on every exit path
        let mut conn = self.pool.acquire().await?;

        let mut query = sqlx::query_as::<_, Order>(&sql);
        for param in params {
            query = query.bind(param);
        }
        let rows = query.fetch_all(&mut *conn).await?;

        tracing::debug!(count = rows.len(), "Fetched orders");
        Ok(rows)
    }

    async fn insert_order(&self, order: &NewOrder) -> Result<Option<Order>, sqlx::Error> {
        let sql = insert_order_query();
        let mut conn = self.pool.acquire().await?;

        let row = sqlx::query_as::<_, Order>(&sql)
            .bind(&order.order_id)
            .bind(&order.customer_name)
            .bind(order.order_amount)
            .bind(order.order_date)
            .bind(&order.status)
            .fetch_optional(&mut *conn)
            .await?;

        Ok(row)
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        let mut conn = self.pool.acquire().await?;
        sqlx::query("SELECT 1").execute(&mut *conn).await?;
        Ok(())
    }
}

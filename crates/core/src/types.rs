/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Boxed error used as the `source` of wrapped infrastructure failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Note identifiers are MySQL `AUTO_INCREMENT` keys.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

use sea_orm::DbErr;

/// Parses a Discord snowflake stored as a string column.
///
/// Discord IDs are stored as strings since SQLite integers are signed. A value that
/// does not parse indicates a corrupt row.
///
/// # Arguments
/// - `value` - The stored string to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed ID
/// - `Err(DbErr::Type)` - The stored value is not an unsigned integer
pub fn parse_stored_id(value: &str) -> Result<u64, DbErr> {
    value
        .parse::<u64>()
        .map_err(|e| DbErr::Type(format!("Failed to parse ID from String '{}': {}", value, e)))
}

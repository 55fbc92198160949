//! Decoding helpers for the TEXT/INTEGER column encodings used by the
//! schema (UUIDs as TEXT, timestamps as Unix seconds).

use crate::{DbError, Result};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

#[track_caller]
pub(crate) fn get_uuid(row: &SqliteRow, column: &'static str) -> Result<Uuid> {
    let value: String = row.try_get(column)?;
    Uuid::parse_str(&value).map_err(|e| DbError::Decode {
        column,
        message: format!("invalid UUID: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
pub(crate) fn get_uuid_opt(row: &SqliteRow, column: &'static str) -> Result<Option<Uuid>> {
    let value: Option<String> = row.try_get(column)?;
    value
        .map(|v| {
            Uuid::parse_str(&v).map_err(|e| DbError::Decode {
                column,
                message: format!("invalid UUID: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })
        })
        .transpose()
}

#[track_caller]
pub(crate) fn get_timestamp(row: &SqliteRow, column: &'static str) -> Result<DateTime<Utc>> {
    let secs: i64 = row.try_get(column)?;
    DateTime::from_timestamp(secs, 0).ok_or_else(|| DbError::Decode {
        column,
        message: format!("invalid timestamp: {}", secs),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
pub(crate) fn get_timestamp_opt(
    row: &SqliteRow,
    column: &'static str,
) -> Result<Option<DateTime<Utc>>> {
    let secs: Option<i64> = row.try_get(column)?;
    secs.map(|s| {
        DateTime::from_timestamp(s, 0).ok_or_else(|| DbError::Decode {
            column,
            message: format!("invalid timestamp: {}", s),
            location: ErrorLocation::from(Location::caller()),
        })
    })
    .transpose()
}

/// User record domain type
use crate::error::{CoreError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// `chrono` format of every date field (`YYYY-MM-DD`)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A password older than this many days is considered stale
pub const PASSWORD_STALE_AFTER_DAYS: i64 = 365;

/// One user's account metadata, as shown on the activity dashboard
///
/// Dates are kept as the strings they are entered as and only parsed on
/// demand, so the wire format is exactly what was declared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserRecord {
    /// Display name
    pub name: String,

    /// Account creation date (`YYYY-MM-DD`)
    pub create_date: String,

    /// Date of the last password change (`YYYY-MM-DD`)
    pub password_changed_date: String,

    /// Date of the last access (`YYYY-MM-DD`)
    pub last_access_date: String,

    /// Whether multi-factor authentication is active
    pub mfa_enabled: bool,
}

impl UserRecord {
    /// Create a new record
    pub fn new(
        name: impl Into<String>,
        create_date: impl Into<String>,
        password_changed_date: impl Into<String>,
        last_access_date: impl Into<String>,
        mfa_enabled: bool,
    ) -> Self {
        Self {
            name: name.into(),
            create_date: create_date.into(),
            password_changed_date: password_changed_date.into(),
            last_access_date: last_access_date.into(),
            mfa_enabled,
        }
    }

    /// Parsed account creation date
    pub fn created_on(&self) -> Result<NaiveDate> {
        self.parse_date("create_date", &self.create_date)
    }

    /// Parsed password change date
    pub fn password_changed_on(&self) -> Result<NaiveDate> {
        self.parse_date("password_changed_date", &self.password_changed_date)
    }

    /// Parsed last access date
    pub fn last_accessed_on(&self) -> Result<NaiveDate> {
        self.parse_date("last_access_date", &self.last_access_date)
    }

    /// Whole days between the last password change and `today`
    ///
    /// Negative when the change date lies after `today`.
    pub fn days_since_password_change(&self, today: NaiveDate) -> Result<i64> {
        Ok(today
            .signed_duration_since(self.password_changed_on()?)
            .num_days())
    }

    /// Whole days between the last access and `today`
    pub fn days_since_last_access(&self, today: NaiveDate) -> Result<i64> {
        Ok(today
            .signed_duration_since(self.last_accessed_on()?)
            .num_days())
    }

    /// True when the password is older than [`PASSWORD_STALE_AFTER_DAYS`]
    pub fn is_password_stale(&self, today: NaiveDate) -> Result<bool> {
        Ok(self.days_since_password_change(today)? > PASSWORD_STALE_AFTER_DAYS)
    }

    /// Check that every date field parses
    pub fn validate_dates(&self) -> Result<()> {
        self.created_on()?;
        self.password_changed_on()?;
        self.last_accessed_on()?;
        Ok(())
    }

    fn parse_date(&self, field: &'static str, value: &str) -> Result<NaiveDate> {
        // chrono accepts unpadded components, the wire contract does not
        let well_formed = value.len() == 10
            && value.char_indices().all(|(i, c)| match i {
                4 | 7 => c == '-',
                _ => c.is_ascii_digit(),
            });

        well_formed
            .then(|| NaiveDate::parse_from_str(value, DATE_FORMAT).ok())
            .flatten()
            .ok_or_else(|| CoreError::InvalidDate {
                field,
                user: self.name.clone(),
                value: value.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> UserRecord {
        UserRecord::new("Foo Bar1", "2020-10-01", "2021-10-01", "2025-01-04", true)
    }

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, DATE_FORMAT).unwrap()
    }

    #[test]
    fn parses_date_fields() {
        let user = record();
        assert_eq!(user.created_on().unwrap(), day("2020-10-01"));
        assert_eq!(user.password_changed_on().unwrap(), day("2021-10-01"));
        assert_eq!(user.last_accessed_on().unwrap(), day("2025-01-04"));
    }

    #[test]
    fn day_counts() {
        let user = record();
        let today = day("2025-01-14");

        assert_eq!(user.days_since_last_access(today).unwrap(), 10);
        assert_eq!(user.days_since_password_change(today).unwrap(), 1201);
        assert_eq!(
            user.days_since_last_access(day("2025-01-01")).unwrap(),
            -3
        );
    }

    #[test]
    fn password_staleness_boundary() {
        let user = record();

        // 2021-10-01 + 365 days
        assert!(!user.is_password_stale(day("2022-10-01")).unwrap());
        assert!(user.is_password_stale(day("2022-10-02")).unwrap());
    }

    #[test]
    fn rejects_malformed_dates() {
        let mut user = record();
        user.last_access_date = "2025-1-4".to_string();

        let err = user.last_accessed_on().unwrap_err();
        assert_eq!(
            err,
            CoreError::InvalidDate {
                field: "last_access_date",
                user: "Foo Bar1".to_string(),
                value: "2025-1-4".to_string(),
            }
        );
        assert!(user.validate_dates().is_err());

        user.last_access_date = "2025-02-30".to_string();
        assert!(user.last_accessed_on().is_err());
    }

    #[test]
    fn serializes_snake_case_keys() {
        let json = serde_json::to_string(&record()).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Foo Bar1","create_date":"2020-10-01","password_changed_date":"2021-10-01","last_access_date":"2025-01-04","mfa_enabled":true}"#
        );
    }

    #[test]
    fn rejects_unknown_keys() {
        let json = r#"{"name":"A","create_date":"2020-01-01","password_changed_date":"2020-01-01","last_access_date":"2020-01-01","mfa_enabled":false,"role":"admin"}"#;
        assert!(serde_json::from_str::<UserRecord>(json).is_err());
    }
}

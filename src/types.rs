//! Boundary types for the HTTP surface.

use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;

/// Form payload for `POST /add`.
///
/// A missing field fails extraction outright; field shape is checked by
/// [`NewMeeting::validate`] before insert.
#[derive(Debug, Clone, Deserialize)]
pub struct NewMeeting {
    pub title: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub link: String,
    pub participants: String,
    pub owner: String,
}

impl NewMeeting {
    /// Shape-only validation: empty titles and unparseable dates/times are
    /// rejected. Lengths and duplicates are not checked, and `link` may be
    /// empty.
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("title must not be empty".to_string());
        }
        if NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").is_err() {
            return Err(format!("date '{}' is not in YYYY-MM-DD form", self.date));
        }
        if NaiveTime::parse_from_str(&self.time, "%H:%M").is_err() {
            return Err(format!("time '{}' is not in HH:MM form", self.time));
        }
        Ok(())
    }
}

/// Allow-listed sort keys for the pending list.
///
/// Anything outside this set parses to `None`, which leaves the list in
/// insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Title,
    Date,
    Time,
    Participants,
    Owner,
}

impl SortKey {
    pub fn from_param(param: &str) -> Option<Self> {
        match param {
            "title" => Some(Self::Title),
            "date" => Some(Self::Date),
            "time" => Some(Self::Time),
            "participants" => Some(Self::Participants),
            "owner" => Some(Self::Owner),
            _ => None,
        }
    }

    /// Column used in ORDER BY. A fixed mapping, never caller input.
    pub fn column(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Date => "date",
            Self::Time => "time",
            Self::Participants => "participants",
            Self::Owner => "owner",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_meeting() -> NewMeeting {
        NewMeeting {
            title: "Sync".to_string(),
            date: "2025-07-02".to_string(),
            time: "14:30".to_string(),
            location: "Zoom".to_string(),
            link: String::new(),
            participants: "A,B".to_string(),
            owner: "Alice".to_string(),
        }
    }

    #[test]
    fn test_sort_key_allow_list() {
        assert_eq!(SortKey::from_param("title"), Some(SortKey::Title));
        assert_eq!(SortKey::from_param("date"), Some(SortKey::Date));
        assert_eq!(SortKey::from_param("time"), Some(SortKey::Time));
        assert_eq!(
            SortKey::from_param("participants"),
            Some(SortKey::Participants)
        );
        assert_eq!(SortKey::from_param("owner"), Some(SortKey::Owner));
    }

    #[test]
    fn test_sort_key_rejects_unknown_values() {
        assert_eq!(SortKey::from_param("id"), None);
        assert_eq!(SortKey::from_param("location"), None);
        assert_eq!(SortKey::from_param("Title"), None);
        assert_eq!(SortKey::from_param("title; DROP TABLE meetings"), None);
        assert_eq!(SortKey::from_param(""), None);
    }

    #[test]
    fn test_validate_accepts_valid_fields() {
        assert!(valid_meeting().validate().is_ok());
    }

    #[test]
    fn test_validate_accepts_empty_link() {
        let mut m = valid_meeting();
        m.link = String::new();
        assert!(m.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_title() {
        let mut m = valid_meeting();
        m.title = "   ".to_string();
        assert!(m.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_malformed_date() {
        let mut m = valid_meeting();
        m.date = "02/07/2025".to_string();
        assert!(m.validate().is_err());

        m.date = "2025-13-40".to_string();
        assert!(m.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_malformed_time() {
        let mut m = valid_meeting();
        m.time = "2pm".to_string();
        assert!(m.validate().is_err());

        m.time = "25:61".to_string();
        assert!(m.validate().is_err());
    }
}

//! Shareable read-only view links.
//!
//! A link token packs an agent name and an inclusive date range into a single
//! URL-safe path segment: the fields are joined with `|` and the result is
//! base64 encoded without padding.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::DateRange;

const FIELD_SEPARATOR: char = '|';
const DATE_FORMAT: &str = "%Y-%m-%d";

/// What a share link grants a view of.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedView {
    /// The agent whose payroll is shared.
    pub agent_name: String,
    /// First day of the shared range.
    pub start_date: NaiveDate,
    /// Last day of the shared range.
    pub end_date: NaiveDate,
}

impl SharedView {
    /// The shared dates as a validated range.
    pub fn range(&self) -> EngineResult<DateRange> {
        DateRange::new(self.start_date, self.end_date)
    }
}

/// Encodes an agent and date range into a link token.
///
/// # Examples
///
/// ```
/// use payroll_engine::share_link::{decode_share_link, encode_share_link};
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
/// let token = encode_share_link("Ana Cruz", start, end);
///
/// let view = decode_share_link(&token).unwrap();
/// assert_eq!(view.agent_name, "Ana Cruz");
/// assert_eq!(view.end_date, end);
/// ```
pub fn encode_share_link(agent_name: &str, start_date: NaiveDate, end_date: NaiveDate) -> String {
    let payload = format!(
        "{agent_name}{FIELD_SEPARATOR}{}{FIELD_SEPARATOR}{}",
        start_date.format(DATE_FORMAT),
        end_date.format(DATE_FORMAT)
    );
    URL_SAFE_NO_PAD.encode(payload.as_bytes())
}

/// Decodes a link token back into the view it grants.
///
/// The dates are taken from the last two fields, so agent names containing
/// the separator still decode. Any malformed token is an
/// [`EngineError::InvalidShareLink`]; callers redirect to a safe default.
pub fn decode_share_link(token: &str) -> EngineResult<SharedView> {
    let bytes = URL_SAFE_NO_PAD
        .decode(token.trim())
        .map_err(|e| invalid(format!("base64 decode failed: {e}")))?;
    let payload = String::from_utf8(bytes).map_err(|e| invalid(format!("not UTF-8: {e}")))?;

    let mut fields = payload.rsplitn(3, FIELD_SEPARATOR);
    let (Some(end), Some(start), Some(agent_name)) = (fields.next(), fields.next(), fields.next())
    else {
        return Err(invalid("expected agent, start date and end date".to_string()));
    };

    if agent_name.trim().is_empty() {
        return Err(invalid("agent name is empty".to_string()));
    }

    Ok(SharedView {
        agent_name: agent_name.to_string(),
        start_date: parse_date(start)?,
        end_date: parse_date(end)?,
    })
}

fn parse_date(field: &str) -> EngineResult<NaiveDate> {
    NaiveDate::parse_from_str(field, DATE_FORMAT)
        .map_err(|e| invalid(format!("bad date '{field}': {e}")))
}

fn invalid(message: String) -> EngineError {
    EngineError::InvalidShareLink { message }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_round_trip() {
        let token = encode_share_link("Jose Reyes", d(2025, 2, 16), d(2025, 2, 28));
        let view = decode_share_link(&token).unwrap();

        assert_eq!(
            view,
            SharedView {
                agent_name: "Jose Reyes".to_string(),
                start_date: d(2025, 2, 16),
                end_date: d(2025, 2, 28),
            }
        );
        assert_eq!(view.range().unwrap().start_date, d(2025, 2, 16));
    }

    #[test]
    fn test_token_is_url_safe() {
        let token = encode_share_link("Zoë ~~ O'Brien??>>", d(2025, 1, 1), d(2025, 1, 31));
        assert!(token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn test_name_with_separator_round_trips() {
        let token = encode_share_link("Team A | Night", d(2025, 1, 1), d(2025, 1, 15));
        assert_eq!(decode_share_link(&token).unwrap().agent_name, "Team A | Night");
    }

    #[test]
    fn test_garbage_token_is_error() {
        match decode_share_link("!!not base64!!") {
            Err(EngineError::InvalidShareLink { .. }) => {}
            other => panic!("Expected InvalidShareLink, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_fields_is_error() {
        let token = URL_SAFE_NO_PAD.encode("Ana Cruz|2025-01-01");
        assert!(decode_share_link(&token).is_err());
    }

    #[test]
    fn test_bad_date_is_error() {
        let token = URL_SAFE_NO_PAD.encode("Ana Cruz|2025-02-30|2025-03-15");
        assert!(matches!(
            decode_share_link(&token),
            Err(EngineError::InvalidShareLink { .. })
        ));
    }

    #[test]
    fn test_empty_agent_is_error() {
        let token = URL_SAFE_NO_PAD.encode("|2025-01-01|2025-01-15");
        assert!(decode_share_link(&token).is_err());
    }

    #[test]
    fn test_reversed_range_decodes_but_range_rejects() {
        let token = encode_share_link("Ana Cruz", d(2025, 3, 15), d(2025, 3, 1));
        let view = decode_share_link(&token).unwrap();
        assert!(matches!(view.range(), Err(EngineError::InvalidDateRange { .. })));
    }

    proptest! {
        #[test]
        fn prop_round_trip(
            name in "[A-Za-z][A-Za-z .'|-]{0,40}",
            start in 0i64..20_000,
            len in 0i64..366,
        ) {
            let base = d(1990, 1, 1);
            let start_date = base + chrono::Duration::days(start);
            let end_date = start_date + chrono::Duration::days(len);

            let view = decode_share_link(&encode_share_link(&name, start_date, end_date)).unwrap();
            prop_assert_eq!(view.agent_name, name);
            prop_assert_eq!(view.start_date, start_date);
            prop_assert_eq!(view.end_date, end_date);
        }
    }
}

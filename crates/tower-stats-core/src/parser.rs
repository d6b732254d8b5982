//! Parser for the game's copy-paste statistics export

use chrono::{Local, NaiveDateTime};
use regex::Regex;
use std::sync::OnceLock;

use crate::schema::{self, FieldKind, FieldValue, Record};

static SEPARATOR_RE: OnceLock<Regex> = OnceLock::new();

/// What the parser did with each line of its input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    /// Lines mapped onto a record field
    pub recognized: usize,
    /// Labels with no entry in the label table, in input order
    pub unrecognized: Vec<String>,
    /// Non-blank lines without a label/value separator
    pub malformed: usize,
    /// Counter labels whose value was not a number and were stored as 0
    pub zeroed_counters: Vec<String>,
}

/// Turns exported statistics text into a `Record`
///
/// Every line is expected to hold a label and a value separated by two or
/// more whitespace characters. Parsing never fails: anything that cannot be
/// used is skipped and the record keeps its defaults.
#[derive(Debug, Clone, Default)]
pub struct Parser;

impl Parser {
    pub fn new() -> Self {
        Self
    }

    /// Parse and stamp the record with the current local time
    pub fn parse(&self, text: &str) -> Record {
        self.parse_at(text, Local::now().naive_local())
    }

    /// Parse and stamp the record with a given instant
    pub fn parse_at(&self, text: &str, at: NaiveDateTime) -> Record {
        self.parse_with_report_at(text, at).0
    }

    pub fn parse_with_report(&self, text: &str) -> (Record, ParseReport) {
        self.parse_with_report_at(text, Local::now().naive_local())
    }

    pub fn parse_with_report_at(&self, text: &str, at: NaiveDateTime) -> (Record, ParseReport) {
        let mut record = Record::default();
        let mut report = ParseReport::default();

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let Some((label, value)) = split_line(line) else {
                tracing::trace!(line, "skipping line without separator");
                report.malformed += 1;
                continue;
            };

            let Some(spec) = schema::field_by_label(label) else {
                tracing::trace!(label, "skipping unrecognized label");
                report.unrecognized.push(label.to_string());
                continue;
            };

            let stored = match spec.kind {
                FieldKind::Counter => {
                    let count = parse_counter(value).unwrap_or_else(|| {
                        tracing::debug!(label, value, "counter is not a number, storing 0");
                        report.zeroed_counters.push(label.to_string());
                        0
                    });
                    record.set(spec.name, FieldValue::Counter(count))
                }
                FieldKind::Magnitude | FieldKind::Label => {
                    record.set(spec.name, FieldValue::Text(value))
                }
            };
            debug_assert!(stored, "label table out of sync for {}", spec.name);
            report.recognized += 1;
        }

        record.stamp(at);
        (record, report)
    }
}

/// Split on the first run of two or more whitespace characters
fn split_line(line: &str) -> Option<(&str, &str)> {
    let re = SEPARATOR_RE.get_or_init(|| Regex::new(r"\s{2,}").unwrap());
    let mut parts = re.splitn(line, 2);
    let label = parts.next()?.trim();
    let value = parts.next()?.trim();
    Some((label, value))
}

fn parse_counter(raw: &str) -> Option<u64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();
    cleaned.parse().ok()
}

/// Coerce a counter value the way the parser does: thousands separators and
/// whitespace are dropped, anything that is still not a number becomes 0
pub fn coerce_counter(raw: &str) -> u64 {
    parse_counter(raw).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn fixed_instant() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(14, 3, 9)
            .unwrap()
    }

    #[test]
    fn test_parse_basic_block() {
        let text = "Tier               5\nWave               1024\nKilled By          Boss\nCoins Earned       12.3M";
        let record = Parser::new().parse(text);

        assert_eq!(record.tier(), 5);
        assert_eq!(record.wave(), 1024);
        assert_eq!(record.killed_by(), "Boss");
        assert_eq!(record.coins_earned(), "12.3M");
        assert_eq!(record.cash_earned(), "");
        assert_eq!(record.lifesteal(), 0);

        let id = record.session_id();
        let digits = id.strip_prefix("session_").unwrap();
        assert_eq!(digits.len(), 15);
        assert_eq!(digits.as_bytes()[8], b'_');
        assert!(digits
            .chars()
            .enumerate()
            .all(|(i, c)| i == 8 || c.is_ascii_digit()));
    }

    #[test]
    fn test_thousands_separator_stripped() {
        let record = Parser::new().parse("Lifesteal          1,234");
        assert_eq!(record.lifesteal(), 1234);
    }

    #[test]
    fn test_unknown_label_ignored() {
        let parser = Parser::new();
        let record = parser.parse_at("UnknownStat        999", fixed_instant());
        let mut expected = Record::default();
        expected.stamp(fixed_instant());
        assert_eq!(record, expected);
    }

    #[test]
    fn test_empty_input_still_stamped() {
        let record = Parser::new().parse_at("   \n\n  \t ", fixed_instant());
        assert_eq!(record.wave(), 0);
        assert_eq!(record.timestamp(), "2025-06-01T14:03:09.000000");
        assert_eq!(record.session_id(), "session_20250601_140309");
    }

    #[test]
    fn test_magnitudes_kept_verbatim() {
        let text = "Game Time          2d 8h 12m 19s\n\
                    Coins from Golden Tower     110,82T\n\
                    Damage Dealt    4.51q";
        let record = Parser::new().parse(text);
        assert_eq!(record.game_time(), "2d 8h 12m 19s");
        assert_eq!(record.coins_from_golden_tower(), "110,82T");
        assert_eq!(record.damage_dealt(), "4.51q");
    }

    #[test]
    fn test_bad_counter_becomes_zero() {
        let (record, report) = Parser::new().parse_with_report("Wave     lots\nTier    7");
        assert_eq!(record.wave(), 0);
        assert_eq!(record.tier(), 7);
        assert_eq!(report.zeroed_counters, vec!["Wave".to_string()]);
        assert_eq!(report.recognized, 2);
    }

    #[test]
    fn test_single_space_is_not_a_separator() {
        let (record, report) = Parser::new().parse_with_report("Tier 5\nWave");
        assert_eq!(record.tier(), 0);
        assert_eq!(report.malformed, 2);
        assert_eq!(report.recognized, 0);
    }

    #[test]
    fn test_tabs_and_crlf() {
        let record = Parser::new().parse("Tier\t\t9\r\nKilled By \t Ranged\r\n");
        assert_eq!(record.tier(), 9);
        assert_eq!(record.killed_by(), "Ranged");
    }

    #[test]
    fn test_labels_are_case_sensitive() {
        let (record, report) = Parser::new().parse_with_report("tier     5\nDestroyed by Death Ray   3");
        assert_eq!(record.tier(), 0);
        assert_eq!(record.destroyed_by_death_ray(), 0);
        assert_eq!(report.unrecognized.len(), 2);
    }

    #[test]
    fn test_value_keeps_inner_double_spaces() {
        let record = Parser::new().parse("Killed By    Vampire  Elite");
        assert_eq!(record.killed_by(), "Vampire  Elite");
    }

    #[test]
    fn test_last_line_wins() {
        let record = Parser::new().parse("Wave    10\nWave    20");
        assert_eq!(record.wave(), 20);
    }

    #[test]
    fn test_counter_coercion_idempotent() {
        for raw in ["1,234", " 56 ", "0", "18,446,744,073", "nope", "-4", "+12"] {
            let once = coerce_counter(raw);
            assert_eq!(coerce_counter(&once.to_string()), once, "raw {raw:?}");
        }
        assert_eq!(coerce_counter("-4"), 0);
        assert_eq!(coerce_counter("+12"), 12);
        assert_eq!(coerce_counter("1 234 567"), 1_234_567);
    }

    #[test]
    fn test_every_label_maps_to_its_field() {
        for spec in schema::fields() {
            let value = match spec.kind {
                FieldKind::Counter => "7",
                FieldKind::Magnitude | FieldKind::Label => "1.5K",
            };
            let record = Parser::new().parse(&format!("{}    {}", spec.label, value));
            let expected = match spec.kind {
                FieldKind::Counter => FieldValue::Counter(7),
                FieldKind::Magnitude | FieldKind::Label => FieldValue::Text("1.5K"),
            };
            assert_eq!(record.get(spec.name), Some(expected), "label {}", spec.label);
        }
    }
}

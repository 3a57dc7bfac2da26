use chrono::{DateTime, Local, Utc};
use unicode_width::UnicodeWidthChar;

const DATE_FORMAT_TODAY: &str = "Today %H:%M";
const DATE_FORMAT_YESTERDAY: &str = "Yesterday %H:%M";
const DATE_FORMAT_OTHER: &str = "%Y-%m-%d %H:%M";

/// Truncates to at most `max_width` display columns, ending with "..." when cut.
pub fn truncate_string(s: &str, max_width: usize) -> String {
    let total: usize = s.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return s.to_string();
    }

    let budget = max_width.saturating_sub(3);
    let mut out = String::new();
    let mut width = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > budget {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push_str("...");
    out
}

/// Display letter for an option position: 0 → 'A'.
pub fn option_letter(index: usize) -> char {
    char::from_u32('A' as u32 + (index % 26) as u32).unwrap_or('?')
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    High,
    Medium,
    Low,
}

pub fn score_band(score: u32, total: u32) -> ScoreBand {
    if total == 0 {
        return ScoreBand::Low;
    }
    let percentage = score as f64 / total as f64 * 100.0;
    if percentage >= 80.0 {
        ScoreBand::High
    } else if percentage >= 50.0 {
        ScoreBand::Medium
    } else {
        ScoreBand::Low
    }
}

pub fn format_attempt_date(completed_at: Option<&DateTime<Utc>>) -> String {
    match completed_at {
        Some(ts) => format_attempt_date_at(&ts.with_timezone(&Local), &Local::now()),
        None => "In progress".to_string(),
    }
}

pub fn format_attempt_date_at(datetime: &DateTime<Local>, now: &DateTime<Local>) -> String {
    let today = now.date_naive();
    let date = datetime.date_naive();

    if date == today {
        datetime.format(DATE_FORMAT_TODAY).to_string()
    } else if Some(date) == today.pred_opt() {
        datetime.format(DATE_FORMAT_YESTERDAY).to_string()
    } else {
        datetime.format(DATE_FORMAT_OTHER).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_truncate_string_no_truncation() {
        assert_eq!(truncate_string("Short string", 20), "Short string");
    }

    #[test]
    fn test_truncate_string_with_truncation() {
        let result = truncate_string("This is a very long string that should be truncated", 20);
        assert_eq!(result, "This is a very lo...");
        assert!(result.len() <= 20);
    }

    #[test]
    fn test_truncate_string_multibyte() {
        let result = truncate_string("Qu'est-ce que c'était déjà ?", 12);
        assert_eq!(result, "Qu'est-ce...");
    }

    #[test]
    fn test_truncate_string_empty() {
        assert_eq!(truncate_string("", 20), "");
    }

    #[test]
    fn test_option_letters() {
        assert_eq!(option_letter(0), 'A');
        assert_eq!(option_letter(3), 'D');
        assert_eq!(option_letter(25), 'Z');
    }

    #[test]
    fn test_score_bands() {
        assert_eq!(score_band(4, 5), ScoreBand::High);
        assert_eq!(score_band(5, 5), ScoreBand::High);
        assert_eq!(score_band(3, 5), ScoreBand::Medium);
        assert_eq!(score_band(1, 2), ScoreBand::Medium);
        assert_eq!(score_band(2, 5), ScoreBand::Low);
        assert_eq!(score_band(0, 0), ScoreBand::Low);
    }

    #[test]
    fn test_format_attempt_date_relative() {
        let now = Local.with_ymd_and_hms(2024, 5, 10, 18, 0, 0).unwrap();
        let today = Local.with_ymd_and_hms(2024, 5, 10, 9, 5, 0).unwrap();
        let yesterday = Local.with_ymd_and_hms(2024, 5, 9, 22, 30, 0).unwrap();
        let older = Local.with_ymd_and_hms(2024, 4, 1, 8, 0, 0).unwrap();

        assert_eq!(format_attempt_date_at(&today, &now), "Today 09:05");
        assert_eq!(format_attempt_date_at(&yesterday, &now), "Yesterday 22:30");
        assert_eq!(format_attempt_date_at(&older, &now), "2024-04-01 08:00");
    }

    #[test]
    fn test_format_missing_date() {
        assert_eq!(format_attempt_date(None), "In progress");
    }
}

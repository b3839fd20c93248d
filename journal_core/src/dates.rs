use chrono::Datelike;
use chrono::Days;
use chrono::NaiveDate;
use chrono::Weekday;
use once_cell::sync::Lazy;
use regex::Regex;

static OFFSET_EXPRESSION: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"^[+-]\d{1,3}$").expect("offset pattern is valid"));

static ISO_DATE: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"^(\d{4})-(\d{1,2})-(\d{1,2})$").expect("iso date pattern is valid"));

static DAY_MONTH: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"^(\d{1,2})\.(\d{1,2})\.(\d{4})?$").expect("day-month pattern is valid"));

/// The kinds of user input addressing journal content. Closed variant set;
/// callers match exhaustively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JournalInput {
	/// A day relative to today, in days.
	DateOffset(i64),
	/// An explicitly selected calendar date.
	ExplicitSelection(NaiveDate),
	/// Free text naming a note rather than a date.
	NoteRequest { title: String },
}

impl JournalInput {
	/// The calendar date this input addresses, when it addresses one.
	/// Offsets that leave the supported calendar range return `None`.
	pub fn date(&self, today: NaiveDate) -> Option<NaiveDate> {
		match self {
			Self::DateOffset(offset) => apply_offset(today, *offset),
			Self::ExplicitSelection(date) => Some(*date),
			Self::NoteRequest { .. } => None,
		}
	}
}

fn apply_offset(today: NaiveDate, offset: i64) -> Option<NaiveDate> {
	if offset >= 0 {
		today.checked_add_days(Days::new(offset.unsigned_abs()))
	} else {
		today.checked_sub_days(Days::new(offset.unsigned_abs()))
	}
}

/// Parse a natural-language date expression.
///
/// Recognized shapes: empty input and `today`/`tomorrow`/`yesterday` (with
/// `tod`/`tom`/`yes` short forms), signed day offsets (`+1`, `-2`), weekday
/// names with an optional `next`/`last` qualifier, ISO dates
/// (`2025-12-24`), and day-month forms (`24.12.`, `24.12.2025`). Anything
/// else becomes a note request carrying the raw text.
pub fn parse_input(raw: &str, today: NaiveDate) -> JournalInput {
	let trimmed = raw.trim();

	match trimmed.to_ascii_lowercase().as_str() {
		"" | "today" | "tod" => return JournalInput::DateOffset(0),
		"tomorrow" | "tom" => return JournalInput::DateOffset(1),
		"yesterday" | "yes" => return JournalInput::DateOffset(-1),
		_ => {}
	}

	if OFFSET_EXPRESSION.is_match(trimmed) {
		if let Ok(offset) = trimmed.parse::<i64>() {
			return JournalInput::DateOffset(offset);
		}
	}

	if let Some(offset) = parse_weekday_expression(trimmed, today) {
		return JournalInput::DateOffset(offset);
	}

	if let Some(date) = parse_explicit_date(trimmed, today) {
		return JournalInput::ExplicitSelection(date);
	}

	JournalInput::NoteRequest {
		title: trimmed.to_string(),
	}
}

/// Offset to the nearest matching weekday: strictly ahead for bare names
/// and `next`, strictly in the past for `last`.
fn parse_weekday_expression(input: &str, today: NaiveDate) -> Option<i64> {
	let lower = input.to_ascii_lowercase();
	let (backwards, name) = if let Some(rest) = lower.strip_prefix("next ") {
		(false, rest.trim())
	} else if let Some(rest) = lower.strip_prefix("last ") {
		(true, rest.trim())
	} else {
		(false, lower.as_str())
	};

	let weekday = parse_weekday_name(name)?;
	let today_index = i64::from(today.weekday().num_days_from_monday());
	let target_index = i64::from(weekday.num_days_from_monday());
	let mut offset = target_index - today_index;

	if backwards {
		while offset >= 0 {
			offset -= 7;
		}
	} else {
		while offset <= 0 {
			offset += 7;
		}
	}

	Some(offset)
}

fn parse_weekday_name(name: &str) -> Option<Weekday> {
	match name {
		"monday" | "mon" => Some(Weekday::Mon),
		"tuesday" | "tue" => Some(Weekday::Tue),
		"wednesday" | "wed" => Some(Weekday::Wed),
		"thursday" | "thu" => Some(Weekday::Thu),
		"friday" | "fri" => Some(Weekday::Fri),
		"saturday" | "sat" => Some(Weekday::Sat),
		"sunday" | "sun" => Some(Weekday::Sun),
		_ => None,
	}
}

fn parse_explicit_date(input: &str, today: NaiveDate) -> Option<NaiveDate> {
	if let Some(captures) = ISO_DATE.captures(input) {
		let year = captures[1].parse().ok()?;
		let month = captures[2].parse().ok()?;
		let day = captures[3].parse().ok()?;
		return NaiveDate::from_ymd_opt(year, month, day);
	}

	if let Some(captures) = DAY_MONTH.captures(input) {
		let day = captures[1].parse().ok()?;
		let month = captures[2].parse().ok()?;
		let year = match captures.get(3) {
			Some(year) => year.as_str().parse().ok()?,
			None => today.year(),
		};
		return NaiveDate::from_ymd_opt(year, month, day);
	}

	None
}

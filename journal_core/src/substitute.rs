use std::fmt::Write;

use chrono::Locale;
use chrono::NaiveDateTime;
use chrono::format::DelayedFormat;
use chrono::format::StrftimeItems;
use once_cell::sync::Lazy;
use regex::Captures;
use regex::Regex;

/// The recognized date tokens. Everything else, including unknown `${...}`
/// placeholders, is left untouched.
static DATE_TOKEN: Lazy<Regex> = Lazy::new(|| {
	Regex::new(r"\$\{(year|month|day|weekday|localTime|localDate|d:[^}]*)\}")
		.expect("date token pattern is valid")
});

/// Replace the first occurrence of `${key}` with `value`.
///
/// Only the first occurrence is touched; callers invoke this once per
/// variable they care about, so repeated variables beyond the first stay
/// unresolved. Date tokens go through [`replace_date_formats`] instead,
/// which replaces globally.
pub fn replace_variable(template: &str, key: &str, value: &str) -> String {
	template.replacen(&format!("${{{key}}}"), value, 1)
}

/// Replace every occurrence of a recognized date token using the given
/// moment and locale.
///
/// Fixed tokens map to fixed format codes: `${year}` `${month}` `${day}`
/// `${weekday}` `${localTime}` `${localDate}`. The custom `${d:<spec>}`
/// form passes its format spec to chrono verbatim. Tokens the formatter
/// rejects are left unchanged; a template without date tokens comes back
/// as-is.
pub fn replace_date_formats(template: &str, moment: NaiveDateTime, locale: Locale) -> String {
	if !template.contains("${") {
		return template.to_string();
	}

	DATE_TOKEN
		.replace_all(template, |captures: &Captures<'_>| {
			let token = &captures[1];
			let spec = match token {
				"year" => "%Y",
				"month" => "%m",
				"day" => "%d",
				"weekday" => "%A",
				"localTime" => "%X",
				"localDate" => "%x",
				custom => &custom["d:".len()..],
			};

			format_moment(moment, spec, locale).unwrap_or_else(|| captures[0].to_string())
		})
		.into_owned()
}

/// Format a moment through chrono. Bad format specs surface as
/// `fmt::Error` at display time, so write into a buffer and return `None`
/// instead of letting `to_string` panic.
fn format_moment(moment: NaiveDateTime, spec: &str, locale: Locale) -> Option<String> {
	let mut out = String::new();
	let formatted = DelayedFormat::new_with_locale(
		Some(moment.date()),
		Some(moment.time()),
		StrftimeItems::new_with_locale(spec, locale),
		locale,
	);
	write!(out, "{formatted}").ok()?;

	Some(out)
}

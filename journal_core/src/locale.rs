use chrono::Locale;

/// Locale tags recognized in configuration, mapped to the chrono locale
/// used for `${weekday}`, `${localDate}`, and `${localTime}` tokens.
const LOCALES: &[(&str, Locale)] = &[
	("cs", Locale::cs_CZ),
	("da", Locale::da_DK),
	("de", Locale::de_DE),
	("de-AT", Locale::de_AT),
	("de-CH", Locale::de_CH),
	("de-DE", Locale::de_DE),
	("en", Locale::en_US),
	("en-GB", Locale::en_GB),
	("en-US", Locale::en_US),
	("es", Locale::es_ES),
	("fi", Locale::fi_FI),
	("fr", Locale::fr_FR),
	("fr-BE", Locale::fr_BE),
	("fr-FR", Locale::fr_FR),
	("it", Locale::it_IT),
	("ja", Locale::ja_JP),
	("ko", Locale::ko_KR),
	("nb", Locale::nb_NO),
	("nl", Locale::nl_NL),
	("pl", Locale::pl_PL),
	("pt", Locale::pt_PT),
	("pt-BR", Locale::pt_BR),
	("ru", Locale::ru_RU),
	("sv", Locale::sv_SE),
	("tr", Locale::tr_TR),
	("zh-CN", Locale::zh_CN),
	("zh-TW", Locale::zh_TW),
];

/// Map a configured locale tag to a chrono locale: exact tag first, then
/// the bare language, then `en_US` for anything unrecognized.
pub fn lookup_locale(tag: &str) -> Locale {
	let exact = LOCALES
		.iter()
		.find(|(candidate, _)| candidate.eq_ignore_ascii_case(tag));
	if let Some((_, locale)) = exact {
		return *locale;
	}

	let language = tag.split(['-', '_']).next().unwrap_or(tag);
	LOCALES
		.iter()
		.find(|(candidate, _)| candidate.eq_ignore_ascii_case(language))
		.map_or(Locale::en_US, |(_, locale)| *locale)
}

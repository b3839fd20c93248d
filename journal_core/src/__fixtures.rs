use chrono::NaiveDate;
use chrono::NaiveDateTime;

use crate::ConfigSource;
use crate::InlineTemplate;
use crate::JournalConfig;
use crate::JournalError;
use crate::JournalResult;
use crate::PatternPair;
use crate::PatternsConfig;
use crate::ScopeDefinition;
use crate::ScopedTemplate;
use crate::TextDocument;

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
	NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

/// 2021-03-07 (a Sunday) at 13:45:10.
pub fn sample_moment() -> NaiveDateTime {
	date(2021, 3, 7).and_hms_opt(13, 45, 10).expect("valid time")
}

pub fn sample_date() -> NaiveDate {
	date(2021, 3, 7)
}

/// Configuration with a fixed base so resolved paths are deterministic.
pub fn sample_config() -> JournalConfig {
	JournalConfig {
		base: "/tmp/journal".to_string(),
		..JournalConfig::default()
	}
}

/// [`sample_config`] plus a `work` scope with its own base and entry
/// patterns.
pub fn scoped_config() -> JournalConfig {
	let mut config = sample_config();
	config.scopes.push(ScopeDefinition {
		name: "work".to_string(),
		base: "/tmp/work".to_string(),
		patterns: PatternsConfig {
			notes: PatternPair::default(),
			entries: PatternPair {
				path: "${base}/log".to_string(),
				file: "${year}${month}${day}.${ext}".to_string(),
			},
		},
		templates: vec![],
	});
	config
}

/// An already-resolved inline template, as the injection engine receives
/// it.
pub fn inline_template(value: &str, after: &str) -> InlineTemplate {
	InlineTemplate {
		scoped: ScopedTemplate {
			name: None,
			scope: "default".to_string(),
			template: value.to_string(),
			value: Some(value.to_string()),
		},
		after: after.to_string(),
	}
}

pub fn entry_document() -> TextDocument {
	TextDocument::new("# 03/07/2021\n\n## Tasks\n\n## Notes\n")
}

/// A config source whose snapshot always fails, for propagation tests.
pub struct FailingConfig;

impl ConfigSource for FailingConfig {
	async fn snapshot(&self) -> JournalResult<JournalConfig> {
		Err(JournalError::ConfigAccess(
			"settings store unavailable".to_string(),
		))
	}
}

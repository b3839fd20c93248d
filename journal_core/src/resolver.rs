use chrono::NaiveDateTime;

use crate::ConfigSource;
use crate::InlineTemplate;
use crate::JournalConfig;
use crate::JournalResult;
use crate::PatternKind;
use crate::SCOPE_DEFAULT;
use crate::ScopedTemplate;
use crate::config::TemplateDefinition;
use crate::lookup_locale;
use crate::replace_date_formats;
use crate::replace_variable;
use crate::resolve_scope;
use crate::template::DEFAULT_ENTRY_TEMPLATE;
use crate::template::DEFAULT_NOTE_TEMPLATE;

/// Name of the entry content template.
pub const TEMPLATE_ENTRY: &str = "entry";
/// Name of the note content template.
pub const TEMPLATE_NOTE: &str = "note";

/// Resolves path, filename, and content templates against a live
/// configuration source.
///
/// Every operation takes a fresh configuration snapshot; resolved templates
/// are never cached across calls. Failures from the source propagate
/// verbatim — no retry, no partial result.
#[derive(Debug)]
pub struct TemplateResolver<C> {
	config: C,
}

impl<C: ConfigSource> TemplateResolver<C> {
	pub fn new(config: C) -> Self {
		Self { config }
	}

	/// Resolve the notes directory pattern for a scope.
	///
	/// The result is not normalized; separator quirks in user templates are
	/// preserved here, unlike entry paths.
	pub async fn resolve_note_path(
		&self,
		moment: NaiveDateTime,
		scope: Option<&str>,
	) -> JournalResult<ScopedTemplate> {
		let config = self.config.snapshot().await?;
		let scope = resolve_scope(scope);
		let mut pattern = lookup_pattern(&config, PatternKind::NotePath, &scope);
		let value = substitute_path(&pattern.template, &config, &scope, moment);
		tracing::debug!(scope = %pattern.scope, value = %value, "resolved note path");
		pattern.value = Some(value);

		Ok(pattern)
	}

	/// Resolve the note filename pattern for a scope, with the user's input
	/// feeding `${input}`.
	pub async fn resolve_note_file(
		&self,
		moment: NaiveDateTime,
		input: &str,
		scope: Option<&str>,
	) -> JournalResult<ScopedTemplate> {
		let config = self.config.snapshot().await?;
		let scope = resolve_scope(scope);
		let mut pattern = lookup_pattern(&config, PatternKind::NoteFile, &scope);
		let locale = lookup_locale(&config.locale);
		let value = replace_variable(&pattern.template, "ext", &config.ext);
		let value = replace_variable(&value, "input", input);
		let value = replace_date_formats(&value, moment, locale);
		tracing::debug!(scope = %pattern.scope, value = %value, "resolved note file");
		pattern.value = Some(value);

		Ok(pattern)
	}

	/// Resolve the entries directory pattern for a scope. The result is
	/// normalized: redundant separators are collapsed.
	pub async fn resolve_entry_path(
		&self,
		moment: NaiveDateTime,
		scope: Option<&str>,
	) -> JournalResult<ScopedTemplate> {
		let config = self.config.snapshot().await?;
		let scope = resolve_scope(scope);
		let mut pattern = lookup_pattern(&config, PatternKind::EntryPath, &scope);
		let value = normalize_path_string(&substitute_path(&pattern.template, &config, &scope, moment));
		tracing::debug!(scope = %pattern.scope, value = %value, "resolved entry path");
		pattern.value = Some(value);

		Ok(pattern)
	}

	/// Resolve the entry filename pattern for a scope.
	pub async fn resolve_entry_file(
		&self,
		moment: NaiveDateTime,
		scope: Option<&str>,
	) -> JournalResult<ScopedTemplate> {
		let config = self.config.snapshot().await?;
		let scope = resolve_scope(scope);
		let mut pattern = lookup_pattern(&config, PatternKind::EntryFile, &scope);
		let locale = lookup_locale(&config.locale);
		let value = replace_variable(&pattern.template, "ext", &config.ext);
		let value = replace_date_formats(&value, moment, locale);
		tracing::debug!(scope = %pattern.scope, value = %value, "resolved entry file");
		pattern.value = Some(value);

		Ok(pattern)
	}

	/// Resolve the content template for a journal entry.
	///
	/// Date tokens are substituted; the legacy `{content}` spelling is
	/// rewritten to `${localDate}` first.
	pub async fn resolve_entry_template(
		&self,
		moment: NaiveDateTime,
		scope: Option<&str>,
	) -> JournalResult<InlineTemplate> {
		let config = self.config.snapshot().await?;
		let scope = resolve_scope(scope);
		let mut template =
			lookup_inline_template(&config, TEMPLATE_ENTRY, &scope, DEFAULT_ENTRY_TEMPLATE);
		let body = template.template.replace("{content}", "${localDate}");
		let locale = lookup_locale(&config.locale);
		template.value = Some(replace_date_formats(&body, moment, locale));

		Ok(template)
	}

	/// Resolve the content template for a note.
	///
	/// Date tokens are substituted; `${input}` and `${tags}` stay in place
	/// for the injection step. The legacy `{content}` spelling is rewritten
	/// to `${input}` first.
	pub async fn resolve_notes_template(
		&self,
		moment: NaiveDateTime,
		scope: Option<&str>,
	) -> JournalResult<InlineTemplate> {
		let config = self.config.snapshot().await?;
		let scope = resolve_scope(scope);
		let mut template =
			lookup_inline_template(&config, TEMPLATE_NOTE, &scope, DEFAULT_NOTE_TEMPLATE);
		let body = template.template.replace("{content}", "${input}");
		let locale = lookup_locale(&config.locale);
		template.value = Some(replace_date_formats(&body, moment, locale));

		Ok(template)
	}
}

/// Scope → configured pattern → built-in default.
///
/// Unknown scopes and empty configured strings fall through to the default
/// for the kind, never to an empty template. The tolerant fallthrough for
/// unknown scopes is deliberate; callers do not pre-validate scope names.
pub fn lookup_pattern(config: &JournalConfig, kind: PatternKind, scope: &str) -> ScopedTemplate {
	let configured = configured_pattern(config, kind, scope);
	let template = match configured {
		Some(pattern) if !pattern.is_empty() => pattern.to_string(),
		_ => kind.default_pattern().to_string(),
	};
	tracing::trace!(%kind, %scope, %template, "pattern lookup");

	ScopedTemplate {
		name: None,
		scope: scope.to_string(),
		template,
		value: None,
	}
}

fn configured_pattern<'a>(
	config: &'a JournalConfig,
	kind: PatternKind,
	scope: &str,
) -> Option<&'a str> {
	let patterns = if scope == SCOPE_DEFAULT {
		&config.patterns
	} else {
		&config.scope(scope)?.patterns
	};
	let pair = match kind {
		PatternKind::NotePath | PatternKind::NoteFile => &patterns.notes,
		PatternKind::EntryPath | PatternKind::EntryFile => &patterns.entries,
	};
	let value = match kind {
		PatternKind::NotePath | PatternKind::EntryPath => &pair.path,
		PatternKind::NoteFile | PatternKind::EntryFile => &pair.file,
	};

	Some(value.as_str())
}

/// Three-tier fallback for named content templates: legacy single-string
/// key, then the scope's template list, then the built-in default body.
fn lookup_inline_template(
	config: &JournalConfig,
	name: &str,
	scope: &str,
	default_body: &str,
) -> InlineTemplate {
	let (template, after) = if let Some(body) = config.legacy_template(name) {
		let after = config.legacy_after(name).unwrap_or("").to_string();
		(body.to_string(), after)
	} else if let Some(definition) = configured_template(config, name, scope) {
		(definition.template.clone(), definition.after.clone())
	} else {
		(default_body.to_string(), String::new())
	};

	InlineTemplate {
		scoped: ScopedTemplate {
			name: Some(name.to_string()),
			scope: scope.to_string(),
			template,
			value: None,
		},
		after,
	}
}

fn configured_template<'a>(
	config: &'a JournalConfig,
	name: &str,
	scope: &str,
) -> Option<&'a TemplateDefinition> {
	let templates = if scope == SCOPE_DEFAULT {
		&config.templates
	} else {
		&config.scope(scope)?.templates
	};

	templates.iter().find(|definition| definition.name == name)
}

/// Substitute a path pattern: `${homeDir}`, then `${base}`, then date
/// tokens. The base is pre-resolved so a `${homeDir}` inside it cannot
/// survive the `${base}` substitution unresolved.
fn substitute_path(
	template: &str,
	config: &JournalConfig,
	scope: &str,
	moment: NaiveDateTime,
) -> String {
	let locale = lookup_locale(&config.locale);
	let value = replace_variable(template, "homeDir", &home_dir());
	let value = replace_variable(&value, "base", &scope_base(config, scope));

	replace_date_formats(&value, moment, locale)
}

/// The base directory for a scope, with `${homeDir}` already resolved. An
/// unknown scope or an empty scope base falls back to the top-level base.
fn scope_base(config: &JournalConfig, scope: &str) -> String {
	let base = config
		.scope(scope)
		.map(|definition| definition.base.as_str())
		.filter(|base| !base.is_empty())
		.unwrap_or(&config.base);

	replace_variable(base, "homeDir", &home_dir())
}

/// The user's home directory as a path string.
fn home_dir() -> String {
	directories::UserDirs::new()
		.map(|dirs| dirs.home_dir().to_string_lossy().into_owned())
		.unwrap_or_default()
}

/// Collapse redundant separators left behind by empty variables or user
/// templates.
fn normalize_path_string(path: &str) -> String {
	let mut normalized = String::with_capacity(path.len());
	let mut previous_separator = false;
	for ch in path.chars() {
		if ch == '/' {
			if !previous_separator {
				normalized.push(ch);
			}
			previous_separator = true;
		} else {
			previous_separator = false;
			normalized.push(ch);
		}
	}
	normalized
}

use std::collections::HashMap;
use std::collections::HashSet;
use std::future::Future;
use std::path::Path;

use serde::Deserialize;

use crate::JournalError;
use crate::JournalResult;

/// The reserved scope selecting the top-level pattern set. Always present,
/// even when absent from user configuration.
pub const SCOPE_DEFAULT: &str = "default";

/// Default base directory pattern.
pub const DEFAULT_BASE: &str = "${homeDir}/Journal";

/// Canonicalize an optional scope identifier. Absent or empty input selects
/// the default scope; anything else passes through unchanged. Unknown
/// scopes are not rejected here — pattern lookup falls back to defaults
/// for them.
pub fn resolve_scope(id: Option<&str>) -> String {
	match id {
		Some(id) if !id.is_empty() => id.to_string(),
		_ => SCOPE_DEFAULT.to_string(),
	}
}

/// A `{path, file}` pattern pair for one artifact kind. Empty strings mean
/// "not configured".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PatternPair {
	#[serde(default)]
	pub path: String,
	#[serde(default)]
	pub file: String,
}

/// Configured patterns for notes and entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PatternsConfig {
	#[serde(default)]
	pub notes: PatternPair,
	#[serde(default)]
	pub entries: PatternPair,
}

/// A named content template, optionally anchored below a literal substring
/// of the target document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TemplateDefinition {
	pub name: String,
	pub template: String,
	#[serde(default)]
	pub after: String,
}

/// A named configuration profile selecting an alternate base directory and
/// pattern set (e.g. `work` vs. `personal`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScopeDefinition {
	pub name: String,
	#[serde(default)]
	pub base: String,
	#[serde(default)]
	pub patterns: PatternsConfig,
	#[serde(default)]
	pub templates: Vec<TemplateDefinition>,
}

/// Configuration snapshot consumed by the resolution engine, loaded from a
/// `journal.toml` file.
///
/// ```toml
/// base = "${homeDir}/Journal"
/// ext = "md"
/// locale = "en"
///
/// [[scopes]]
/// name = "work"
/// base = "${homeDir}/work-journal"
///
/// [scopes.patterns.entries]
/// path = "${base}/${year}"
/// file = "${month}-${day}.${ext}"
///
/// [[templates]]
/// name = "entry"
/// template = "# ${localDate}\n\n## Tasks\n\n## Notes\n"
///
/// [legacy]
/// tpl-note = "# ${input}\n"
/// note-after = ""
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct JournalConfig {
	/// Base directory pattern; may reference `${homeDir}`.
	pub base: String,
	/// File extension for generated names, without the leading dot.
	pub ext: String,
	/// Locale tag used for date tokens.
	pub locale: String,
	/// Top-level patterns for the default scope.
	pub patterns: PatternsConfig,
	/// Additional configuration profiles.
	pub scopes: Vec<ScopeDefinition>,
	/// Named content templates for the default scope.
	pub templates: Vec<TemplateDefinition>,
	/// Legacy single-string keys: `tpl-<name>` template bodies and
	/// `<name>-after` anchors.
	pub legacy: HashMap<String, String>,
	/// Development-mode flag consumed by the hosting layer.
	pub dev_mode: bool,
	/// Whether the hosting layer opens resolved documents in a new editor
	/// group.
	pub open_in_new_group: bool,
}

impl Default for JournalConfig {
	fn default() -> Self {
		Self {
			base: DEFAULT_BASE.to_string(),
			ext: "md".to_string(),
			locale: "en".to_string(),
			patterns: PatternsConfig::default(),
			scopes: Vec::new(),
			templates: Vec::new(),
			legacy: HashMap::new(),
			dev_mode: false,
			open_in_new_group: false,
		}
	}
}

impl JournalConfig {
	/// Load the config from `journal.toml` at the given root directory.
	/// Returns `None` if the file does not exist.
	pub fn load(root: &Path) -> JournalResult<Option<JournalConfig>> {
		let config_path = root.join("journal.toml");

		if !config_path.exists() {
			return Ok(None);
		}

		let content = std::fs::read_to_string(&config_path)?;
		let config: JournalConfig =
			toml::from_str(&content).map_err(|e| JournalError::ConfigParse(e.to_string()))?;
		config.validate()?;

		Ok(Some(config))
	}

	/// Reject duplicate scope names and the reserved `default` name.
	pub fn validate(&self) -> JournalResult<()> {
		let mut seen = HashSet::new();
		for scope in &self.scopes {
			if scope.name == SCOPE_DEFAULT {
				return Err(JournalError::ReservedScope(scope.name.clone()));
			}
			if !seen.insert(scope.name.as_str()) {
				return Err(JournalError::DuplicateScope(scope.name.clone()));
			}
		}

		Ok(())
	}

	/// Find a configured scope by name.
	pub fn scope(&self, name: &str) -> Option<&ScopeDefinition> {
		self.scopes.iter().find(|scope| scope.name == name)
	}

	/// Legacy `tpl-<name>` template body. Empty strings count as unset.
	pub fn legacy_template(&self, name: &str) -> Option<&str> {
		self.legacy
			.get(&format!("tpl-{name}"))
			.map(String::as_str)
			.filter(|body| !body.is_empty())
	}

	/// Legacy `<name>-after` anchor.
	pub fn legacy_after(&self, name: &str) -> Option<&str> {
		self.legacy.get(&format!("{name}-after")).map(String::as_str)
	}
}

/// Source of live configuration snapshots.
///
/// Reading is a suspension point; templates are resolved against a fresh
/// snapshot per call so configuration changes between calls are picked up.
/// A failure here fails the whole operation — no retry, no partial result.
pub trait ConfigSource {
	fn snapshot(&self) -> impl Future<Output = JournalResult<JournalConfig>> + Send;
}

impl ConfigSource for JournalConfig {
	async fn snapshot(&self) -> JournalResult<JournalConfig> {
		Ok(self.clone())
	}
}

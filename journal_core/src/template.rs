use derive_more::Deref;
use derive_more::DerefMut;

/// Default pattern for the notes directory.
pub const DEFAULT_NOTE_PATH: &str = "${base}/notes";
/// Default pattern for note filenames.
pub const DEFAULT_NOTE_FILE: &str = "N${year}${month}${day}_${input}.${ext}";
/// Default pattern for the entries directory.
pub const DEFAULT_ENTRY_PATH: &str = "${base}/entries";
/// Default pattern for entry filenames.
pub const DEFAULT_ENTRY_FILE: &str = "${year}-${month}-${day} ${weekday}.${ext}";
/// Default body for a new journal entry.
pub const DEFAULT_ENTRY_TEMPLATE: &str = "# ${localDate}\n\n";
/// Default body for a new note.
pub const DEFAULT_NOTE_TEMPLATE: &str = "# ${input}\n${tags}\n";

/// The four path/file pattern kinds backed by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
	/// Directory notes are stored in.
	NotePath,
	/// Filename for a note.
	NoteFile,
	/// Directory journal entries are stored in.
	EntryPath,
	/// Filename for a journal entry.
	EntryFile,
}

impl PatternKind {
	/// The hard-coded pattern used when no configured value exists.
	pub fn default_pattern(self) -> &'static str {
		match self {
			Self::NotePath => DEFAULT_NOTE_PATH,
			Self::NoteFile => DEFAULT_NOTE_FILE,
			Self::EntryPath => DEFAULT_ENTRY_PATH,
			Self::EntryFile => DEFAULT_ENTRY_FILE,
		}
	}
}

impl std::fmt::Display for PatternKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::NotePath => write!(f, "notePath"),
			Self::NoteFile => write!(f, "noteFile"),
			Self::EntryPath => write!(f, "entryPath"),
			Self::EntryFile => write!(f, "entryFile"),
		}
	}
}

/// A pattern bound to a scope.
///
/// `template` is the raw configured string and is never mutated after
/// lookup; `value` is only meaningful once resolution has substituted its
/// variables. Templates are built fresh per resolution call — live
/// configuration may change between calls — and discarded once the final
/// string is consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopedTemplate {
	/// Name of the template, for named content templates (`entry`, `note`).
	pub name: Option<String>,
	/// The scope the pattern was resolved against.
	pub scope: String,
	/// The raw pattern with unresolved variables.
	pub template: String,
	/// The pattern after substitution.
	pub value: Option<String>,
}

impl ScopedTemplate {
	/// The substituted value, falling back to the raw template before
	/// resolution has run.
	pub fn resolved(&self) -> &str {
		self.value.as_deref().unwrap_or(&self.template)
	}
}

/// A content template with an anchor controlling where injected text lands.
/// An empty `after` means no anchor: the injection engine uses its default
/// position.
#[derive(Debug, Clone, PartialEq, Eq, Deref, DerefMut)]
pub struct InlineTemplate {
	#[deref]
	#[deref_mut]
	pub scoped: ScopedTemplate,
	/// Literal substring the injection engine positions content below.
	pub after: String,
}

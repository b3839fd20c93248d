use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
pub enum JournalError {
	#[error(transparent)]
	#[diagnostic(code(journal::io_error))]
	Io(#[from] std::io::Error),

	/// Reading the live configuration failed. Fatal to the current
	/// operation; never retried.
	#[error("failure to access configuration: {0}")]
	#[diagnostic(code(journal::config_access))]
	ConfigAccess(String),
	#[error("failure to parse configuration: {0}")]
	#[diagnostic(code(journal::config_parse))]
	ConfigParse(String),
	#[error("scope `{0}` is defined more than once")]
	#[diagnostic(code(journal::duplicate_scope))]
	DuplicateScope(String),
	#[error("scope name `{0}` is reserved")]
	#[diagnostic(code(journal::reserved_scope))]
	ReservedScope(String),
	/// An injection batch contained no edits.
	#[error("No edits included")]
	#[diagnostic(code(journal::no_edits))]
	NoEdits,
	/// The buffer rejected an edit.
	#[error("Failed to applied edit")]
	#[diagnostic(code(journal::edit_failed))]
	EditFailed,
	/// Sentinel for a user-aborted input prompt. Upstream callers
	/// special-case this instead of surfacing a user-visible error, and
	/// [`report_error`] skips it.
	#[error("input cancelled")]
	#[diagnostic(code(journal::cancelled))]
	Cancelled,
}

pub type JournalResult<T> = Result<T, JournalError>;

impl JournalError {
	/// True for the cancellation sentinel.
	pub fn is_cancelled(&self) -> bool {
		matches!(self, Self::Cancelled)
	}
}

/// Log an error with context, unless it is the cancellation sentinel.
pub fn report_error(error: &JournalError) {
	if error.is_cancelled() {
		return;
	}

	tracing::error!(%error, "journal operation failed");
}

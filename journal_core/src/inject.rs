use once_cell::sync::Lazy;
use regex::Regex;

use crate::InlineTemplate;
use crate::JournalError;
use crate::JournalResult;
use crate::Position;
use crate::TextDocument;
use crate::replace_variable;
use crate::report_error;

/// A markdown header at the start of a line.
static HEADER_LINE: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"^#+\s").expect("header pattern is valid"));

/// The fully computed edit: where to insert and what to insert. Created per
/// injection call and consumed by [`apply_insertions`]; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineString {
	pub position: Position,
	pub value: String,
}

/// Compute the insertion for a resolved template against a document.
///
/// The caller's key/value pairs are substituted into the template value
/// first, one occurrence each like any literal variable. The position
/// defaults to line 1 column 0 — the line below an assumed single-line
/// header. A non-empty anchor moves it to the line below the anchor's first
/// occurrence; an anchor starting with `#` gets a leading line break so the
/// header keeps its blank separator. A missing anchor keeps the default
/// silently, and so does an anchor at the very start of the document.
pub fn compute_insertion(
	document: &TextDocument,
	template: &InlineTemplate,
	values: &[(&str, &str)],
) -> InlineString {
	let mut content = template.resolved().to_string();
	for (key, value) in values {
		content = replace_variable(&content, key, value);
	}

	let mut position = Position::new(1, 0);

	if template.after.is_empty() {
		// First line after the header by convention.
		content.insert(0, '\n');
	} else {
		if template.after.starts_with('#') {
			content.insert(0, '\n');
		}
		match document.text().find(&template.after) {
			Some(offset) if offset > 0 => {
				let anchor = document.position_at(offset);
				position = document.validate_position(anchor.next_line());
			}
			// Anchor missing or at the document start: keep the default.
			_ => {}
		}
	}

	InlineString { position, value: content }
}

/// Apply one or more insertions against a document as a single transaction.
///
/// Character 0 is a structural "own line" request: existing content on the
/// target line is shifted down rather than concatenated, and a header on
/// the following line keeps a blank-line separator. All offsets are
/// computed against the incoming document and applied in descending order,
/// so earlier inserts cannot shift later positions.
///
/// An empty batch and a rejected buffer edit both log and return named
/// errors; they are never silently dropped.
pub async fn apply_insertions(
	document: &mut TextDocument,
	inserts: &[InlineString],
) -> JournalResult<()> {
	if inserts.is_empty() {
		let error = JournalError::NoEdits;
		report_error(&error);
		return Err(error);
	}

	let mut edits = Vec::with_capacity(inserts.len());
	for insert in inserts {
		let position = document.validate_position(insert.position);
		let mut value = insert.value.clone();

		if position.character == 0 {
			let line_text = document.line(position.line).unwrap_or("");
			if !line_text.trim().is_empty() {
				if position.line + 1 >= document.line_count() {
					value.insert(0, '\n');
				}
				value.push('\n');
			}
		}

		if let Some(next_line) = document.line(position.line + 1) {
			if HEADER_LINE.is_match(next_line) {
				value.push('\n');
			}
		}

		edits.push((document.offset_at(position), value));
	}

	// Descending offset order keeps earlier inserts from invalidating the
	// offsets of later ones.
	edits.sort_by(|a, b| b.0.cmp(&a.0));

	for (offset, value) in edits {
		if let Err(error) = document.insert(offset, &value) {
			report_error(&error);
			return Err(error);
		}
	}

	Ok(())
}

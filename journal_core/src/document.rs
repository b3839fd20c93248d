use crate::JournalError;
use crate::JournalResult;
use crate::Position;

/// An in-memory text buffer standing in for the editor's document. Line
/// endings are normalized to LF on construction; positions address bytes,
/// so an edit can only land on a character boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDocument {
	content: String,
	/// Byte offsets of the start of each line. `line_starts[0]` is always 0.
	line_starts: Vec<usize>,
}

impl TextDocument {
	pub fn new(content: impl Into<String>) -> Self {
		let content = normalize_line_endings(&content.into());
		let line_starts = build_line_starts(&content);

		Self {
			content,
			line_starts,
		}
	}

	/// The full document text.
	pub fn text(&self) -> &str {
		&self.content
	}

	/// Number of lines. A trailing newline starts a final empty line, the
	/// way editor buffers count.
	pub fn line_count(&self) -> usize {
		self.line_starts.len()
	}

	/// The text of a line without its terminator.
	pub fn line(&self, index: usize) -> Option<&str> {
		let start = *self.line_starts.get(index)?;
		let end = self
			.line_starts
			.get(index + 1)
			.map_or(self.content.len(), |next| next - 1);

		Some(&self.content[start..end])
	}

	/// Byte offset of a position. The position is clamped first.
	pub fn offset_at(&self, position: Position) -> usize {
		let position = self.validate_position(position);
		self.line_starts[position.line] + position.character
	}

	/// Position of a byte offset. Offsets past the end map to the document
	/// end. Binary search over the line table.
	pub fn position_at(&self, offset: usize) -> Position {
		let offset = offset.min(self.content.len());
		let line = match self.line_starts.binary_search(&offset) {
			Ok(exact) => exact,
			Err(insert) => insert.saturating_sub(1),
		};

		Position::new(line, offset - self.line_starts[line])
	}

	/// Clamp a position into the valid range of the document: the line into
	/// the existing lines, the character into the line's byte length.
	pub fn validate_position(&self, position: Position) -> Position {
		let line = position.line.min(self.line_count().saturating_sub(1));
		let max_character = self.line(line).map_or(0, str::len);

		Position::new(line, position.character.min(max_character))
	}

	/// Insert text at a byte offset. Offsets outside the content or inside
	/// a multi-byte character are rejected.
	pub(crate) fn insert(&mut self, offset: usize, value: &str) -> JournalResult<()> {
		if offset > self.content.len() || !self.content.is_char_boundary(offset) {
			return Err(JournalError::EditFailed);
		}

		self.content.insert_str(offset, value);
		self.line_starts = build_line_starts(&self.content);

		Ok(())
	}
}

fn build_line_starts(content: &str) -> Vec<usize> {
	let mut line_starts = vec![0];
	for (index, byte) in content.bytes().enumerate() {
		if byte == b'\n' {
			line_starts.push(index + 1);
		}
	}
	line_starts
}

/// Normalize CRLF line endings to LF.
pub fn normalize_line_endings(content: &str) -> String {
	if content.contains('\r') {
		content.replace("\r\n", "\n").replace('\r', "\n")
	} else {
		content.to_string()
	}
}

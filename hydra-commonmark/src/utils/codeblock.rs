//! Line-level state machine for fenced code blocks.
//!
//! Fences are naive: any line containing three backticks opens or closes a
//! block, there is no distinction between fence lengths or `~~~` fences.

/// Marker that opens and closes a fenced code block.
pub const FENCE_MARKER: &str = "```";

/// Code captured between an opening and a closing fence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CodeBlock {
  /// Language tag found after the opening marker, may be empty.
  pub language: String,

  /// Column (in characters) of the opening marker.
  pub indent: usize,

  /// Captured lines, already de-indented.
  pub lines: Vec<String>,

  /// 1-based line number of the opening fence.
  pub opened_at: usize,
}

impl CodeBlock {
  /// Whether the block should be rendered without syntax highlighting.
  #[must_use]
  pub fn is_plain(&self) -> bool {
    self.language.is_empty() || self.language == "none"
  }

  /// Captured lines joined with newlines.
  #[must_use]
  pub fn code(&self) -> String {
    self.lines.join("\n")
  }

  /// Capture a line, stripping up to `indent` leading characters.
  fn capture(&mut self, line: &str) {
    let stripped = line
      .char_indices()
      .nth(self.indent)
      .map_or("", |(offset, _)| &line[offset..]);
    self.lines.push(stripped.to_string());
  }
}

/// State of the fence scanner.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FenceState {
  /// Regular Markdown, lines pass through.
  #[default]
  Outside,

  /// Inside a fenced block, lines are captured.
  Inside(CodeBlock),
}

/// What the scanner did with a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step<'a> {
  /// Line is regular Markdown and goes to the output as is.
  Emit(&'a str),

  /// Line opened a fenced block.
  Open,

  /// Line was captured into the current block.
  Capture,

  /// Line closed a fenced block, which is now ready to be rendered.
  Close(CodeBlock),
}

impl FenceState {
  /// Create a scanner in the initial state.
  #[must_use]
  pub const fn new() -> Self {
    Self::Outside
  }

  /// Feed one line (without its line ending) into the scanner.
  ///
  /// `line_number` is 1-based and only used to report where an unterminated
  /// block was opened.
  #[must_use]
  pub fn advance<'a>(self, line: &'a str, line_number: usize) -> (Self, Step<'a>) {
    let marker = line.find(FENCE_MARKER);

    match (self, marker) {
      (Self::Outside, None) => (Self::Outside, Step::Emit(line)),
      (Self::Outside, Some(offset)) => {
        let block = CodeBlock {
          language: line[offset + FENCE_MARKER.len()..].trim().to_string(),
          indent: line[..offset].chars().count(),
          lines: Vec::new(),
          opened_at: line_number,
        };
        (Self::Inside(block), Step::Open)
      },
      (Self::Inside(mut block), None) => {
        block.capture(line);
        (Self::Inside(block), Step::Capture)
      },
      (Self::Inside(block), Some(_)) => (Self::Outside, Step::Close(block)),
    }
  }

  /// Consume the scanner at end of input, returning the block that was never
  /// closed, if any.
  #[must_use]
  pub fn finish(self) -> Option<CodeBlock> {
    match self {
      Self::Outside => None,
      Self::Inside(block) => Some(block),
    }
  }
}

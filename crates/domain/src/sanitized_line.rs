/// One logical zone-file line: comment stripped, continuations joined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizedLine {
    pub text: String,

    pub trailing_comment: String,

    /// 1-based source line where the logical line begins.
    pub line: usize,
}

impl SanitizedLine {
    pub fn new(text: impl Into<String>, trailing_comment: impl Into<String>, line: usize) -> Self {
        Self {
            text: text.into(),
            trailing_comment: trailing_comment.into(),
            line,
        }
    }

    pub fn is_directive(&self) -> bool {
        self.text.starts_with('$')
    }
}

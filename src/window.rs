//! Overlapping sentence windows.
//!
//! Window *i* starts at sentence *i* and covers up to `size` sentences, so
//! every sentence starts exactly one window and the last few windows are
//! shorter than `size`.

/// A contiguous span of sentences, `[start, end]` inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    pub start: usize,
    pub end: usize,
    /// Member sentences joined with single spaces.
    pub text: String,
}

impl Window {
    pub fn sentence_count(&self) -> usize {
        self.end - self.start + 1
    }

    /// The member sentences, borrowed from the full sentence list.
    pub fn sentences<'a>(&self, all: &'a [String]) -> Vec<&'a str> {
        all[self.start..=self.end].iter().map(String::as_str).collect()
    }
}

/// Build one window per sentence.
///
/// # Examples
///
/// ```
/// use docanswer::window::build_windows;
///
/// let sentences: Vec<String> = ["one.", "two.", "three.", "four."]
///     .iter()
///     .map(|s| s.to_string())
///     .collect();
/// let windows = build_windows(&sentences, 3);
/// assert_eq!(windows.len(), 4);
/// assert_eq!(windows[0].text, "one. two. three.");
/// assert_eq!(windows[3].text, "four.");
/// ```
pub fn build_windows(sentences: &[String], size: usize) -> Vec<Window> {
    let size = size.max(1);
    let n = sentences.len();
    (0..n)
        .map(|start| {
            let end = (start + size).min(n) - 1;
            Window {
                start,
                end,
                text: sentences[start..=end].join(" "),
            }
        })
        .collect()
}

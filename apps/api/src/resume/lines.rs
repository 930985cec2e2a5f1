//! Line classifier: turns raw resume text into renderable lines.
//!
//! Rules, applied to each `\n`-separated line after trimming:
//! - starts with `-`, `*` or `•` → `Bullet`, marker and following whitespace stripped
//! - empty → `Blank`
//! - equal to its own upper-cased form → `Header`
//! - anything else → `PlainText`, raw line kept
//!
//! Pure and deterministic; no markdown parsing beyond this.

use serde::Serialize;

const BULLET_MARKERS: &[char] = &['-', '*', '•'];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Line {
    Bullet(String),
    Header(String),
    PlainText(String),
    Blank,
}

impl Line {
    pub fn is_bullet(&self) -> bool {
        matches!(self, Line::Bullet(_))
    }

    /// The text shown for this line. Bullets return their cleaned selection key.
    pub fn text(&self) -> &str {
        match self {
            Line::Bullet(t) | Line::Header(t) | Line::PlainText(t) => t,
            Line::Blank => "",
        }
    }
}

/// Returns the bullet's selection key, or `None` if the line is not a bullet.
pub fn clean_bullet(line: &str) -> Option<String> {
    line.trim()
        .strip_prefix(BULLET_MARKERS)
        .map(|rest| rest.trim_start().to_string())
}

pub fn classify_line(line: &str) -> Line {
    if let Some(text) = clean_bullet(line) {
        return Line::Bullet(text);
    }

    let trimmed = line.trim();
    if trimmed.is_empty() {
        Line::Blank
    } else if trimmed.to_uppercase() == trimmed {
        Line::Header(trimmed.to_string())
    } else {
        Line::PlainText(line.to_string())
    }
}

/// Classifies every line of `content`, 1:1 with its `\n`-separated lines.
pub fn classify(content: &str) -> Vec<Line> {
    content.split('\n').map(classify_line).collect()
}

/// Number of selectable bullets in `content`.
pub fn count_bullets(content: &str) -> usize {
    content
        .split('\n')
        .filter(|line| clean_bullet(line).is_some())
        .count()
}

// ────────────────────────────────────────────────────────────────────────────
// Presentation
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct LineView {
    pub index: usize,
    #[serde(flatten)]
    pub line: Line,
    pub selected: bool,
}

/// What the resume panel renders: classified lines plus the footer counter.
#[derive(Debug, Clone, Serialize)]
pub struct ResumeView {
    /// True when there is no content at all; clients show the "paste your resume" prompt.
    pub is_empty: bool,
    pub bullet_count: usize,
    pub selected_bullet: Option<String>,
    pub lines: Vec<LineView>,
}

impl ResumeView {
    pub fn build(content: &str, selected: Option<&str>) -> Self {
        let lines: Vec<LineView> = classify(content)
            .into_iter()
            .enumerate()
            .map(|(index, line)| {
                let selected = line.is_bullet() && selected == Some(line.text());
                LineView {
                    index,
                    line,
                    selected,
                }
            })
            .collect();

        Self {
            is_empty: content.is_empty(),
            bullet_count: lines.iter().filter(|l| l.line.is_bullet()).count(),
            selected_bullet: selected.map(String::from),
            lines,
        }
    }
}

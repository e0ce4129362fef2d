//! Structured comment extraction.
//!
//! The structured block is the file's leading comment: only blank lines, the
//! `SPDX-License-Identifier` line, `pragma` lines and `import` statements may
//! come before it. Any other code line ends the search, so comments inside a
//! helper function or a contract body are never picked up. The block may be a
//! `/* ... */` block or a run of consecutive `//` / `///` lines.
//!
//! Inside the block:
//! - `@title X` sets the title
//! - `@notice X` and `@dev X` add description text
//! - any other `@tag value` or `key: value` line (lowercase key) is a tag
//! - without `@title`, the first plain line is the title
//! - remaining plain lines are description; blank lines separate paragraphs

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Result, ScaffoldError};

static KEY_VALUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-z][a-z0-9_-]*):\s+(\S.*)$").expect("tag pattern is valid")
});

/// Parsed contents of a structured comment block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentBlock {
    pub title: Option<String>,
    pub description: String,
    pub tags: Vec<(String, String)>,
}

/// Documentation extracted from a contract source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentationUnit {
    pub source: PathBuf,
    pub title: String,
    pub description: String,
    pub tags: Vec<(String, String)>,
}

impl DocumentationUnit {
    /// Extract a unit from contract source. The block and its title are required.
    pub fn from_contract(path: &Path, source: &str) -> Result<Self> {
        let block = CommentBlock::parse(source).ok_or_else(|| ScaffoldError::MalformedSource {
            path: path.to_path_buf(),
            reason: "no leading comment block".into(),
        })?;
        let title = block.title.ok_or_else(|| ScaffoldError::MalformedSource {
            path: path.to_path_buf(),
            reason: "comment block has no title".into(),
        })?;
        Ok(Self {
            source: path.to_path_buf(),
            title,
            description: block.description,
            tags: block.tags,
        })
    }
}

impl CommentBlock {
    /// Parse the leading structured block of `source`, if there is one.
    pub fn parse(source: &str) -> Option<Self> {
        let lines = leading_block(source)?;
        Some(Self::from_lines(&lines))
    }

    fn from_lines(lines: &[String]) -> Self {
        let mut explicit_title = None;
        let mut first_plain = None;
        let mut body: Vec<String> = Vec::new();
        let mut tags = Vec::new();

        for line in lines {
            let line = line.trim();
            if let Some(rest) = line.strip_prefix('@') {
                let (tag, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                let value = value.trim();
                match tag {
                    "title" => explicit_title = Some(value.to_string()),
                    "notice" | "dev" => body.push(value.to_string()),
                    _ => tags.push((tag.to_string(), value.to_string())),
                }
            } else if let Some(caps) = KEY_VALUE.captures(line) {
                tags.push((caps[1].to_string(), caps[2].trim().to_string()));
            } else {
                if !line.is_empty() && first_plain.is_none() {
                    first_plain = Some(body.len());
                }
                body.push(line.to_string());
            }
        }

        let title = match explicit_title {
            Some(title) => Some(title),
            None => first_plain.map(|i| body.remove(i)),
        };

        Self {
            title: title.filter(|t| !t.is_empty()),
            description: paragraphs(&body),
            tags,
        }
    }
}

/// Join lines into paragraphs: lines in a paragraph keep their line breaks,
/// runs of blank lines become one empty line.
fn paragraphs(lines: &[String]) -> String {
    let mut out = String::new();
    let mut blank = false;
    for line in lines {
        if line.is_empty() {
            blank = !out.is_empty();
            continue;
        }
        if !out.is_empty() {
            out.push_str(if blank { "\n\n" } else { "\n" });
        }
        out.push_str(line);
        blank = false;
    }
    out
}

/// `pragma` and `import` lines, plus the `"use strict"` directive.
fn is_preamble(trimmed: &str) -> bool {
    trimmed.starts_with("pragma ")
        || trimmed.starts_with("import ")
        || trimmed.starts_with("import{")
        || trimmed.starts_with("\"use strict\"")
        || trimmed.starts_with("'use strict'")
}

/// Whether the `import` statement containing this line ends on it.
fn import_ends(trimmed: &str) -> bool {
    trimmed.ends_with(';')
        || trimmed.contains(" from ")
        || trimmed
            .trim_start_matches("import")
            .trim_start()
            .starts_with(['"', '\''])
}

/// Locate the leading comment block and return its lines with comment
/// markers removed.
fn leading_block(source: &str) -> Option<Vec<String>> {
    let mut lines = source.lines().peekable();
    let mut in_import = false;

    while let Some(raw) = lines.next() {
        let trimmed = raw.trim();
        if in_import {
            in_import = !import_ends(trimmed);
            continue;
        }
        if trimmed.is_empty() {
            continue;
        }

        if trimmed.starts_with("/*") {
            let mut block = Vec::new();
            let mut current = trimmed;
            let mut first = true;
            loop {
                let mut text = current;
                if first {
                    text = text.trim_start_matches("/**").trim_start_matches("/*");
                }
                let closed = text.contains("*/");
                if let Some(end) = text.find("*/") {
                    text = &text[..end];
                }
                let text = text.trim();
                let text = text.strip_prefix('*').unwrap_or(text);
                block.push(text.trim().to_string());
                if closed {
                    break;
                }
                first = false;
                current = lines.next()?.trim();
            }
            return Some(trim_blank(block));
        }

        if trimmed.starts_with("//") {
            if trimmed.contains("SPDX-License-Identifier") {
                continue;
            }
            let mut block = vec![strip_line_comment(trimmed)];
            while let Some(next) = lines.peek() {
                let next = next.trim();
                if !next.starts_with("//") {
                    break;
                }
                block.push(strip_line_comment(next));
                lines.next();
            }
            return Some(trim_blank(block));
        }

        if !is_preamble(trimmed) {
            return None;
        }
        in_import = trimmed.starts_with("import") && !import_ends(trimmed);
    }
    None
}

fn strip_line_comment(line: &str) -> String {
    line.trim_start_matches('/').trim().to_string()
}

fn trim_blank(mut block: Vec<String>) -> Vec<String> {
    while block.last().is_some_and(|l| l.is_empty()) {
        block.pop();
    }
    let leading = block.iter().take_while(|l| l.is_empty()).count();
    block.drain(..leading);
    block
}

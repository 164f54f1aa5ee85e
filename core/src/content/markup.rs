// vantablack/src/content/markup.rs

//! Minimal line-oriented markup used in article bodies.
//!
//! Paragraphs are separated by blank lines. A paragraph wrapped in `**`
//! is a heading, one whose lines start with `- ` is a bullet list and one
//! whose lines start with `<number>.` is a numbered list. Anything else is
//! plain text. `**` bold markers are dropped from all rendered text.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Block {
  Heading { text: String },
  Paragraph { text: String },
  Bullets { items: Vec<String> },
  Numbered { items: Vec<String> },
}

const BOLD: &str = "**";

pub fn parse(body: &str) -> Vec<Block> {
  let normalized = body.replace("\r\n", "\n");
  split_paragraphs(&normalized).filter_map(parse_paragraph).collect()
}

fn split_paragraphs(body: &str) -> impl Iterator<Item = &str> {
  body.split("\n\n").map(|p| p.trim_matches('\n'))
}

fn parse_paragraph(paragraph: &str) -> Option<Block> {
  if paragraph.trim().is_empty() {
    return None;
  }

  let block = if is_heading(paragraph) {
    Block::Heading {
      text: strip_bold(paragraph).trim().to_string(),
    }
  } else if paragraph.starts_with("- ") {
    Block::Bullets {
      items: collect_items(paragraph, bullet_item),
    }
  } else if numbered_item(paragraph).is_some() {
    Block::Numbered {
      items: collect_items(paragraph, numbered_item),
    }
  } else {
    Block::Paragraph {
      text: strip_bold(paragraph),
    }
  };
  Some(block)
}

/// A lone `**` counts too and renders as an empty heading.
fn is_heading(paragraph: &str) -> bool {
  paragraph.starts_with(BOLD) && paragraph.ends_with(BOLD)
}

fn strip_bold(text: &str) -> String {
  text.replace(BOLD, "")
}

fn bullet_item(line: &str) -> Option<&str> {
  line.strip_prefix("- ")
}

/// Returns the text after a leading `<digits>.` marker.
fn numbered_item(line: &str) -> Option<&str> {
  let digits = line.bytes().take_while(u8::is_ascii_digit).count();
  if digits == 0 {
    return None;
  }
  line[digits..].strip_prefix('.')
}

/// Lines matching `marker` start a new item; other lines continue the
/// previous one.
fn collect_items(paragraph: &str, marker: fn(&str) -> Option<&str>) -> Vec<String> {
  let mut items: Vec<String> = Vec::new();
  for line in paragraph.lines() {
    match (marker(line), items.last_mut()) {
      (Some(text), _) => items.push(strip_bold(text.trim())),
      (None, Some(current)) => {
        let continuation = strip_bold(line.trim());
        if !continuation.is_empty() {
          current.push(' ');
          current.push_str(&continuation);
        }
      }
      (None, None) => items.push(strip_bold(line.trim())),
    }
  }
  items
}

use crate::error::{PostError, Result};
use crate::model::PostInput;
use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;
use uuid::Uuid;

const TITLE_HEADER: &str = "Title:";
const AUTHOR_HEADER: &str = "Author:";

/// A post draft as laid out in an editor buffer:
///
/// ```text
/// Title: My title
/// Author: Amy
///
/// Content starts after the first blank line.
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorContent {
    pub input: PostInput,
}

impl EditorContent {
    pub fn new(input: PostInput) -> Self {
        Self { input }
    }

    pub fn to_buffer(&self) -> String {
        format!(
            "{} {}\n{} {}\n\n{}",
            TITLE_HEADER, self.input.title, AUTHOR_HEADER, self.input.author, self.input.content
        )
    }

    /// Parses a buffer back into a draft. Header keys are case-insensitive
    /// and may appear in any order; unknown header lines are ignored. If the
    /// buffer has no blank line, everything after the headers is content.
    pub fn from_buffer(buffer: &str) -> Self {
        let mut input = PostInput::default();
        let mut lines = buffer.lines();
        let mut body: Vec<&str> = Vec::new();

        for line in lines.by_ref() {
            if line.trim().is_empty() {
                break;
            }
            if let Some(value) = strip_header(line, TITLE_HEADER) {
                input.title = value.to_string();
            } else if let Some(value) = strip_header(line, AUTHOR_HEADER) {
                input.author = value.to_string();
            } else {
                body.push(line);
                break;
            }
        }
        body.extend(lines);

        input.content = body.join("\n").trim_end().to_string();
        Self { input }
    }
}

/// Returns the header value with only the single separator space after the
/// colon removed; anything else is part of the value.
fn strip_header<'a>(line: &'a str, header: &str) -> Option<&'a str> {
    let head = line.get(..header.len())?;
    if head.eq_ignore_ascii_case(header) {
        let value = &line[header.len()..];
        Some(value.strip_prefix(' ').unwrap_or(value))
    } else {
        None
    }
}

/// Gets the editor command from environment.
/// Checks $EDITOR, then $VISUAL, then falls back to common editors.
pub fn get_editor() -> Result<String> {
    for var in ["EDITOR", "VISUAL"] {
        if let Ok(editor) = env::var(var) {
            if !editor.is_empty() {
                return Ok(editor);
            }
        }
    }

    for fallback in &["vim", "vi", "nano"] {
        if Command::new("which")
            .arg(fallback)
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
        {
            return Ok((*fallback).to_string());
        }
    }

    Err(PostError::Api(
        "No editor found. Set $EDITOR environment variable.".to_string(),
    ))
}

/// Opens a file in the user's editor and waits for it to close.
/// Returns the contents of the file after editing.
pub fn open_in_editor<P: AsRef<Path>>(file_path: P) -> Result<String> {
    let editor = get_editor()?;
    let path = file_path.as_ref();

    // $EDITOR may carry arguments, e.g. "code --wait"
    let mut parts = editor.split_whitespace();
    let program = parts
        .next()
        .ok_or_else(|| PostError::Api("Editor command is empty".to_string()))?;

    let status = Command::new(program)
        .args(parts)
        .arg(path)
        .status()
        .map_err(|e| PostError::Api(format!("Failed to launch editor '{}': {}", editor, e)))?;

    if !status.success() {
        return Err(PostError::Api(format!(
            "Editor '{}' exited with non-zero status",
            editor
        )));
    }

    fs::read_to_string(path).map_err(PostError::Io)
}

/// Opens an editor pre-filled with `initial` and returns the edited draft.
pub fn edit_content(initial: &EditorContent) -> Result<EditorContent> {
    let temp_file = env::temp_dir().join(format!("postboard-{}.txt", Uuid::new_v4()));

    fs::write(&temp_file, initial.to_buffer()).map_err(PostError::Io)?;
    let result = open_in_editor(&temp_file);
    let _ = fs::remove_file(&temp_file);

    Ok(EditorContent::from_buffer(&result?))
}

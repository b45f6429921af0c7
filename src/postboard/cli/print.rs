use chrono::{DateTime, Utc};
use colored::Colorize;
use postboard::api::{CmdMessage, MessageLevel};
use postboard::config::MAX_LIST_WIDTH;
use postboard::index::DisplayPost;
use postboard::model::Post;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const TIME_WIDTH: usize = 14;
const AUTHOR_WIDTH: usize = 16;
const SEPARATOR: &str = "--------------------------------";

/// Turns colors off when stdout is not a color-capable terminal.
pub(super) fn configure_colors() {
    let supported = console::Term::stdout().features().colors_supported();
    colored::control::set_override(supported);
}

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_full_posts(posts: &[DisplayPost]) {
    for (i, dp) in posts.iter().enumerate() {
        if i > 0 {
            println!("\n================================\n");
        }
        println!(
            "{} {}",
            dp.index.to_string().yellow(),
            dp.post.title.bold()
        );
        println!(
            "{} {}",
            format!("by {}", dp.post.author).cyan(),
            format!("· {}", format_date(dp.post.created_at)).dimmed()
        );
        println!("{}", SEPARATOR);
        println!("{}", dp.post.content);
    }
}

pub(super) fn print_posts(posts: &[DisplayPost], line_width: usize) {
    for dp in posts {
        println!("{}", format_row(dp, line_width, Utc::now()));
    }
}

pub(super) fn print_staged_delete(post: &Post) {
    println!(
        "{} {} {}",
        "Delete".red().bold(),
        post.title.bold(),
        format!("by {}", post.author).dimmed()
    );
}

fn format_row(dp: &DisplayPost, line_width: usize, now: DateTime<Utc>) -> String {
    let idx_str = format!("{:>3}. ", dp.index.0);
    let author = truncate_to_width(&dp.post.author, AUTHOR_WIDTH);
    let author_padded = pad_to_width(&author, AUTHOR_WIDTH);
    let time_ago = format_time_ago(dp.post.created_at, now);

    let content_preview: String = dp
        .post
        .content
        .chars()
        .take(80)
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect();
    let title_content = format!("{} {}", dp.post.title, content_preview);

    let fixed_width = idx_str.width() + AUTHOR_WIDTH + 2 + TIME_WIDTH;
    // config.json may be edited by hand
    let line_width = line_width.min(MAX_LIST_WIDTH);
    let available = line_width.saturating_sub(fixed_width);
    let title_display = truncate_to_width(&title_content, available);
    let padding = available.saturating_sub(title_display.width());

    // Title in bold, preview dimmed
    let (title_part, preview_part) = split_at_width(&title_display, dp.post.title.width());

    format!(
        "{}{}{}{}  {}{}",
        idx_str.yellow(),
        title_part.bold(),
        preview_part.dimmed(),
        " ".repeat(padding),
        author_padded.cyan(),
        time_ago.dimmed()
    )
}

fn split_at_width(s: &str, width: usize) -> (String, String) {
    let mut head = String::new();
    let mut current = 0;
    let mut chars = s.chars();
    for c in chars.by_ref() {
        let w = c.width().unwrap_or(0);
        if current + w > width {
            let mut tail = c.to_string();
            tail.extend(chars);
            return (head, tail);
        }
        head.push(c);
        current += w;
    }
    (head, String::new())
}

fn pad_to_width(s: &str, width: usize) -> String {
    format!("{}{}", s, " ".repeat(width.saturating_sub(s.width())))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(timestamp);
    let time_str = Formatter::new().convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}

fn format_date(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%b %-d, %Y").to_string()
}

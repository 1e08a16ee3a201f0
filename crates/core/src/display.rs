//! Formatting helpers for terminal output.
//!
//! All helpers are pure: width, border and colour are passed in by the caller.

use console::measure_text_width;
use crossterm::style::{style, Color, Stylize};

/// Suffix appended by [`shorten`]
pub const DEFAULT_ELLIPSIS: &str = "...";

/// Colour of banner borders
pub const BANNER_BORDER_COLOR: Color = Color::DarkGrey;
/// Colour of banner titles
pub const BANNER_TITLE_COLOR: Color = Color::DarkCyan;

/// Cuts `input` to `max_length` characters and appends `...` when it is longer.
///
/// # Examples
///
/// ```
/// use ppcheck_core::display::shorten;
///
/// assert_eq!(shorten("Hello", 5), "Hello");
/// assert_eq!(shorten("Hello World", 5), "Hello...");
/// ```
pub fn shorten(input: &str, max_length: usize) -> String {
    shorten_with(input, max_length, DEFAULT_ELLIPSIS)
}

/// Like [`shorten`], with a custom suffix.
pub fn shorten_with(input: &str, max_length: usize, ends: &str) -> String {
    if input.chars().count() > max_length {
        let kept: String = input.chars().take(max_length).collect();
        format!("{kept}{ends}")
    } else {
        input.to_string()
    }
}

/// Wraps `text` in the ANSI sequences for `color`.
pub fn paint(text: &str, color: Color) -> String {
    style(text).with(color).to_string()
}

/// Terminal columns taken by `text`, ignoring ANSI escape sequences and
/// counting wide characters (CJK, emoji) as two columns.
pub fn visible_width(text: &str) -> usize {
    measure_text_width(text)
}

/// The three lines of a banner: border, title, border.
///
/// The border is as long as the title, but never shorter than `width`.
pub fn banner_lines(title: &str, width: usize, border: char) -> [String; 3] {
    let length = visible_width(title).max(width);
    let line = border.to_string().repeat(length);
    [line.clone(), title.to_string(), line]
}

/// Renders a coloured banner, one line per row.
pub fn banner(title: &str, width: usize, border: char) -> String {
    let [top, title, bottom] = banner_lines(title, width, border);
    format!(
        "{}\n{}\n{}",
        paint(&top, BANNER_BORDER_COLOR),
        paint(&title, BANNER_TITLE_COLOR),
        paint(&bottom, BANNER_BORDER_COLOR)
    )
}

/// Prints a banner to stdout.
pub fn print_banner(title: &str, width: usize, border: char) {
    println!("{}", banner(title, width, border));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorten_long_string() {
        assert_eq!(shorten("Hello, this is a long string.", 10), "Hello, thi...");
    }

    #[test]
    fn test_shorten_exact_length() {
        assert_eq!(shorten("Hello", 5), "Hello");
        assert_eq!(shorten("Hello, world!", 13), "Hello, world!");
    }

    #[test]
    fn test_shorten_just_over_length() {
        assert_eq!(shorten("Hello, world!", 12), "Hello, world...");
        assert_eq!(shorten("Hello World", 5), "Hello...");
    }

    #[test]
    fn test_shorten_short_and_empty() {
        assert_eq!(shorten("Hi", 10), "Hi");
        assert_eq!(shorten("", 10), "");
    }

    #[test]
    fn test_shorten_custom_ends() {
        assert_eq!(
            shorten_with("Hello, this is a long string.", 10, "!!"),
            "Hello, thi!!"
        );
    }

    #[test]
    fn test_shorten_counts_characters() {
        assert_eq!(shorten("äöüß", 2), "äö...");
    }

    #[test]
    fn test_visible_width_ignores_ansi() {
        assert_eq!(visible_width("plain"), 5);
        assert_eq!(visible_width("\u{1b}[38;5;2mgreen\u{1b}[39m"), 5);
        assert_eq!(visible_width(&paint("dep1", Color::Green)), 4);
    }

    #[test]
    fn test_visible_width_counts_wide_characters() {
        assert_eq!(visible_width("张三"), 4);
        assert_eq!(visible_width(&paint("张三", Color::Blue)), 4);
    }

    #[test]
    fn test_banner_lines_use_minimum_width() {
        let [top, title, bottom] = banner_lines("exec", 10, '~');
        assert_eq!(top, "~~~~~~~~~~");
        assert_eq!(title, "exec");
        assert_eq!(bottom, top);
    }

    #[test]
    fn test_banner_lines_grow_with_title() {
        let [top, _, _] = banner_lines("a rather long title", 5, '-');
        assert_eq!(top, "-".repeat(19));
    }

    #[test]
    fn test_banner_has_three_lines() {
        let rendered = banner("title", 8, '~');
        assert_eq!(rendered.lines().count(), 3);
        assert!(rendered.contains("title"));
    }
}

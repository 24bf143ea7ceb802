use unicode_width::UnicodeWidthStr;

/// Wraps at word boundaries where possible; words wider than `width` are
/// split per character, which also covers scripts without spaces.
pub fn wrap_text(s: &str, width: usize) -> String {
    if width == 0 {
        return String::from("");
    }

    let mut lines: Vec<String> = Vec::new();
    for word in s.split(' ') {
        let candidate = match lines.last() {
            Some(line) if !line.is_empty() => format!("{line} {word}"),
            _ => word.to_string(),
        };
        if candidate.width() <= width && !lines.is_empty() {
            if let Some(line) = lines.last_mut() {
                *line = candidate;
            }
        } else if word.width() <= width {
            lines.push(word.to_string());
        } else {
            for line in split_chars(word, width).lines() {
                lines.push(line.to_string());
            }
        }
    }

    lines.join("\n")
}

/// Per-character fallback used for words (or scripts) wider than the line.
fn split_chars(s: &str, width: usize) -> String {
    s.chars().fold(String::from(""), |acc: String, c: char| {
        let last_line = acc.lines().last().unwrap_or(&acc);
        if last_line.width() + c.to_string().width() > width {
            format!("{acc}\n{c}")
        } else {
            format!("{acc}{c}")
        }
    })
}

pub fn truncate_text(s: &str, height: usize) -> String {
    if height == 0 {
        return String::from("");
    }

    let lines: Vec<&str> = s.lines().collect();
    if lines.len() > height {
        if height == 1 {
            String::from("...")
        } else {
            format!("{}\n...", lines[..height - 1].join("\n"))
        }
    } else {
        s.to_string()
    }
}

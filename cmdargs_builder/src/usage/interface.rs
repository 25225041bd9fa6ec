use crate::model::ArgError;

/// Word wrap a paragraph into lines of at most `width` characters.
/// Words longer than the width are hyphenated across lines.
pub(crate) fn chunk(paragraph: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::default();
    let mut current = String::default();

    for word in paragraph.split(' ') {
        if !word.is_empty() {
            let word_width = word.chars().count();

            if current.is_empty() {
                hyphenate(width, &mut lines, &mut current, word);
            } else if current.chars().count() + word_width + 1 <= width {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(current);
                current = String::default();
                hyphenate(width, &mut lines, &mut current, word);
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

fn hyphenate(width: usize, lines: &mut Vec<String>, current: &mut String, word: &str) {
    let chars: Vec<char> = word.chars().collect();
    let increment = width.saturating_sub(1).max(1);
    let mut left = 0;

    while left + width < chars.len() {
        let mut line: String = chars[left..left + increment].iter().collect();
        line.push('-');
        lines.push(line);
        left += increment;
    }

    current.extend(&chars[left..]);
}

pub(crate) trait UserInterface {
    fn print(&self, message: String);
    fn print_error(&self, error: &ArgError);
    fn print_error_context(&self, usage: String);
}

#[derive(Default)]
pub(crate) struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print(&self, message: String) {
        print!("{message}");
    }

    fn print_error(&self, error: &ArgError) {
        eprintln!("{error}");
    }

    fn print_error_context(&self, usage: String) {
        eprint!("{usage}");
    }
}

use terminal_size::{terminal_size, Width};

use crate::constant::*;
use crate::model::parameter_name;
use crate::usage::chunk;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum UsageEntry {
    Option { label: String, description: String },
    Separator { title: String },
}

/// Records the declared options (in declaration order) for the usage message.
#[derive(Debug)]
pub(crate) struct UsageRecorder {
    intro: String,
    outro: String,
    entries: Vec<UsageEntry>,
}

impl UsageRecorder {
    pub(crate) fn new(intro: impl Into<String>) -> Self {
        Self {
            intro: intro.into(),
            outro: String::default(),
            entries: Vec::default(),
        }
    }

    /// Record an option, ex: `    --nb (-n) (default: 0)`.
    pub(crate) fn option(
        &mut self,
        long: &str,
        short: Option<char>,
        default: Option<String>,
        description: impl Into<String>,
    ) {
        let mut label = format!("{:USAGE_INDENT$}{}", "", parameter_name(long, short));

        if let Some(default) = default.filter(|d| !d.is_empty()) {
            label.push_str(format!(" (default: {default})").as_str());
        }

        self.entries.push(UsageEntry::Option {
            label,
            description: description.into(),
        });
    }

    pub(crate) fn separator(&mut self, title: impl Into<String>) {
        self.entries.push(UsageEntry::Separator {
            title: title.into(),
        });
    }

    pub(crate) fn outro(&mut self, text: &str) {
        self.outro.push_str(text);
    }

    #[cfg(test)]
    pub(crate) fn entries(&self) -> &[UsageEntry] {
        &self.entries
    }

    /// Render the usage message.
    ///
    /// Without a `total_width`, descriptions are printed as-is (embedded line breaks are aligned to the description column).
    /// With a `total_width`, descriptions are additionally word wrapped to fit.
    pub(crate) fn render(&self, total_width: Option<usize>) -> String {
        let left_column_width = self
            .entries
            .iter()
            .filter_map(|entry| match entry {
                UsageEntry::Option { label, .. } => Some(label.chars().count()),
                UsageEntry::Separator { .. } => None,
            })
            .max()
            .unwrap_or(0)
            + USAGE_MARGIN;
        let description_width = total_width.map(|tw| {
            std::cmp::max(
                tw.saturating_sub(left_column_width),
                MINIMUM_DESCRIPTION_WIDTH,
            )
        });
        let continuation = format!("\n{:left_column_width$}", "");
        let mut out = format!("{}\n{OPTIONS_HEADING}\n", self.intro);

        for entry in &self.entries {
            match entry {
                UsageEntry::Separator { title } => {
                    out.push_str(title);
                }
                UsageEntry::Option { label, description } => {
                    let lines: Vec<String> = match description_width {
                        Some(width) => description
                            .split('\n')
                            .flat_map(|line| {
                                let chunks = chunk(line, width);

                                if chunks.is_empty() {
                                    vec![String::default()]
                                } else {
                                    chunks
                                }
                            })
                            .collect(),
                        None => description.split('\n').map(str::to_string).collect(),
                    };
                    out.push_str(format!("{label:left_column_width$}").as_str());
                    out.push_str(lines.join(continuation.as_str()).as_str());
                }
            }

            out.push('\n');
        }

        out.push_str(&self.outro);
        out
    }
}

/// The width of the attached terminal, if there is one.
pub(crate) fn terminal_width() -> Option<usize> {
    if let Some((Width(terminal_width), _)) = terminal_size() {
        Some(terminal_width as usize)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder() -> UsageRecorder {
        let mut recorder = UsageRecorder::new("Test of command line arguments");
        recorder.option("help", Some('h'), None, "Getting usage");
        recorder.option(
            "nb",
            Some('n'),
            Some("0".to_string()),
            "The number of frames\nanother line",
        );
        recorder.separator("  == Advanced options:");
        recorder.option("ratio", None, Some("0.2".to_string()), "The frame ratio");
        recorder
    }

    #[test]
    fn option_labels() {
        let recorder = recorder();
        assert_eq!(
            recorder.entries()[0],
            UsageEntry::Option {
                label: "    --help (-h)".to_string(),
                description: "Getting usage".to_string(),
            }
        );
        assert_eq!(
            recorder.entries()[1],
            UsageEntry::Option {
                label: "    --nb (-n) (default: 0)".to_string(),
                description: "The number of frames\nanother line".to_string(),
            }
        );
        assert_eq!(
            recorder.entries()[2],
            UsageEntry::Separator {
                title: "  == Advanced options:".to_string(),
            }
        );
    }

    #[test]
    fn option_empty_default() {
        let mut recorder = UsageRecorder::new("intro");
        recorder.option("numbers", None, Some("".to_string()), "");
        assert_eq!(
            recorder.entries(),
            &[UsageEntry::Option {
                label: "    --numbers".to_string(),
                description: "".to_string(),
            }]
        );
    }

    #[test]
    fn render_empty() {
        let mut recorder = UsageRecorder::new("intro");
        assert_eq!(recorder.render(None), "intro\nOptions are:\n");

        recorder.outro("outro");
        assert_eq!(recorder.render(None), "intro\nOptions are:\noutro");
    }

    #[test]
    fn render() {
        let mut recorder = recorder();
        recorder.outro("See the manual.\n");

        // The widest label is 26 wide, and the margin is 5.
        assert_eq!(
            recorder.render(None),
            r#"Test of command line arguments
Options are:
    --help (-h)                Getting usage
    --nb (-n) (default: 0)     The number of frames
                               another line
  == Advanced options:
    --ratio (default: 0.2)     The frame ratio
See the manual.
"#
        );
    }

    #[test]
    fn render_idempotent() {
        let recorder = recorder();
        assert_eq!(recorder.render(None), recorder.render(None));
        assert_eq!(recorder.render(Some(40)), recorder.render(Some(40)));
    }

    #[test]
    fn render_wrapped() {
        let mut recorder = UsageRecorder::new("intro");
        recorder.option(
            "name",
            None,
            None,
            "The name of the frame, as it appears on disk",
        );

        // Left column: 10 + 5.  Description column: 40 - 15 = 25.
        assert_eq!(
            recorder.render(Some(40)),
            r#"intro
Options are:
    --name     The name of the frame, as
               it appears on disk
"#
        );
    }

    #[test]
    fn render_wrapped_minimum() {
        let mut recorder = UsageRecorder::new("intro");
        recorder.option("name", None, None, "aaaa bbbb cccc dddd eeee");

        // The description column never shrinks below 17.
        assert_eq!(
            recorder.render(Some(10)),
            r#"intro
Options are:
    --name     aaaa bbbb cccc
               dddd eeee
"#
        );
    }

    #[test]
    fn render_wrapped_line_breaks() {
        let mut recorder = UsageRecorder::new("intro");
        recorder.option("name", None, None, "first\n\nthird");

        assert_eq!(
            recorder.render(Some(80)),
            "intro\nOptions are:\n    --name     first\n               \n               third\n"
        );
    }
}

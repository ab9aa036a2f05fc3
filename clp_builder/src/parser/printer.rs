use terminal_size::{terminal_size, Width};

use crate::parser::chunk;

// Below this many columns, a description is left on its original line rather than squeezed.
const MINIMUM_DESCRIPTION_WIDTH: usize = 10;

/// Lays out the full help message: usage header, about text and the parser rendering.
pub(crate) struct Printer {
    program: String,
    about: Option<String>,
    terminal_width: Option<usize>,
}

impl Printer {
    pub(crate) fn terminal(program: String, about: Option<String>) -> Self {
        let terminal_width = terminal_size().map(|(Width(width), _)| width as usize);
        Self::new(program, about, terminal_width)
    }

    pub(crate) fn new(program: String, about: Option<String>, terminal_width: Option<usize>) -> Self {
        Self {
            program,
            about,
            terminal_width,
        }
    }

    #[cfg(test)]
    pub(crate) fn details(&self) -> (String, Option<String>) {
        (self.program.clone(), self.about.clone())
    }

    pub(crate) fn help(&self, rendering: &str) -> String {
        let mut lines = vec![format!("usage: {}", self.program)];

        if let Some(about) = &self.about {
            lines.push(String::default());

            for paragraph in about.lines() {
                match self.terminal_width {
                    Some(width) => lines.extend(chunk(paragraph, width)),
                    None => lines.push(paragraph.to_string()),
                }
            }
        }

        if !rendering.trim().is_empty() {
            lines.push(String::default());

            for line in rendering.lines() {
                self.wrap(line, &mut lines);
            }
        }

        lines.join("\n")
    }

    fn wrap(&self, line: &str, lines: &mut Vec<String>) {
        let line = line.trim_end();
        let width = match self.terminal_width {
            Some(width) if line.chars().count() > width => width,
            _ => {
                lines.push(line.to_string());
                return;
            }
        };

        match hanging_column(line) {
            Some(column) if column + MINIMUM_DESCRIPTION_WIDTH <= width => {
                let split = line
                    .char_indices()
                    .nth(column)
                    .map_or(line.len(), |(index, _)| index);
                let (head, description) = line.split_at(split);

                for (i, piece) in chunk(description, width - column).into_iter().enumerate() {
                    if i == 0 {
                        lines.push(format!("{head}{piece}"));
                    } else {
                        lines.push(format!("{:column$}{piece}", ""));
                    }
                }
            }
            _ => lines.push(line.to_string()),
        }
    }
}

/// The column (in characters) where the description of a help line starts: just after the last run of two or more spaces.
///
/// A line whose only such run is its indentation has no description.
fn hanging_column(line: &str) -> Option<usize> {
    let indent = line.len() - line.trim_start_matches(' ').len();
    let index = line.rfind("  ").filter(|index| *index >= indent)?;
    Some(line[..index].chars().count() + 2)
}

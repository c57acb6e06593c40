//! A [`FormDialog`] that asks for each field on the terminal.

use std::io::{self, BufRead, BufReader, Write};
use std::sync::Mutex;

use async_trait::async_trait;
use colored::Colorize;

use bitd_mechanics::roll::fields;
use bitd_mechanics::{FieldKind, FormDialog, FormField, FormSpec, FormValues, MechError, MechResult};

/// Reads answers line by line. An empty line keeps the default; end of
/// input cancels the form.
pub struct PromptDialog {
    input: Mutex<Box<dyn BufRead + Send>>,
}

impl PromptDialog {
    /// Prompt on standard input.
    pub fn stdin() -> Self {
        Self::new(Box::new(BufReader::new(io::stdin())))
    }

    /// Prompt on any line source.
    pub fn new(input: Box<dyn BufRead + Send>) -> Self {
        Self {
            input: Mutex::new(input),
        }
    }

    fn read_line(&self) -> MechResult<Option<String>> {
        io::stdout()
            .flush()
            .map_err(|e| MechError::Dialog(e.to_string()))?;

        let mut input = self
            .input
            .lock()
            .map_err(|_| MechError::Dialog("input lock poisoned".to_string()))?;
        let mut line = String::new();
        match input.read_line(&mut line) {
            Ok(0) => Ok(None), // EOF
            Ok(_) => Ok(Some(line.trim().to_string())),
            Err(e) => Err(MechError::Dialog(e.to_string())),
        }
    }

    /// Ask for one field until the answer is valid. `None` means the
    /// input ran out.
    fn ask(&self, field: &FormField) -> MechResult<Option<String>> {
        let options = field.kind.options();
        let default = field.kind.default_value();

        if let FieldKind::Choice { .. } = field.kind {
            println!("  {}:", field.label.bold());
            for (i, option) in options.iter().enumerate() {
                let marker = if option.value == default { "*" } else { " " };
                println!("   {marker}{}) {}", i + 1, option.label);
            }
        } else if !options.is_empty() {
            let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
            println!("  {} [{}]", field.label.bold(), labels.join(", "));
        }

        loop {
            if default.is_empty() {
                print!("  {}> ", field.label);
            } else {
                print!("  {} ({default})> ", field.label);
            }

            let Some(answer) = self.read_line()? else {
                return Ok(None);
            };
            if answer.is_empty() {
                return Ok(Some(default.to_string()));
            }
            if options.is_empty() {
                return Ok(Some(answer));
            }

            let by_index = answer
                .parse::<usize>()
                .ok()
                .filter(|_| matches!(field.kind, FieldKind::Choice { .. }))
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| options.get(i));
            let chosen = by_index.or_else(|| {
                options.iter().find(|o| {
                    o.value.eq_ignore_ascii_case(&answer) || o.label.eq_ignore_ascii_case(&answer)
                })
            });

            match chosen {
                Some(option) => return Ok(Some(option.value.clone())),
                None => println!("  {}", format!("'{answer}' is not an option").yellow()),
            }
        }
    }
}

#[async_trait]
impl FormDialog for PromptDialog {
    async fn present(&self, spec: &FormSpec) -> MechResult<Option<FormValues>> {
        println!("  {}", spec.title.bold());
        let mut values = spec.defaults();

        // The roll type decides which other fields are asked.
        let roll_type = match spec.field(fields::ROLL_TYPE) {
            Some(field) => match self.ask(field)? {
                Some(value) => {
                    values.insert(fields::ROLL_TYPE, value.clone());
                    Some(value)
                }
                None => return Ok(None),
            },
            None => None,
        };

        for field in &spec.fields {
            if field.name == fields::ROLL_TYPE {
                continue;
            }
            if roll_type.as_deref().is_some_and(|rt| !field.applies(rt)) {
                continue;
            }
            match self.ask(field)? {
                Some(value) => values.insert(field.name.clone(), value),
                None => return Ok(None),
            }
        }

        Ok(Some(values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitd_mechanics::FieldOption;

    fn dialog(input: &str) -> PromptDialog {
        PromptDialog::new(Box::new(io::Cursor::new(input.to_string())))
    }

    fn spec() -> FormSpec {
        FormSpec {
            title: "Roll hunt".to_string(),
            fields: vec![
                FormField::new(
                    fields::MODIFIER,
                    "Modifier",
                    FieldKind::Select {
                        options: vec![
                            FieldOption::new("-1", "-1d"),
                            FieldOption::new("0", "+0d"),
                            FieldOption::new("1", "+1d"),
                        ],
                        default: "0".to_string(),
                    },
                ),
                FormField::new(
                    fields::ROLL_TYPE,
                    "Roll Type",
                    FieldKind::Choice {
                        options: vec![
                            FieldOption::new("actionRoll", "Action Roll"),
                            FieldOption::new("fortune", "Fortune"),
                        ],
                        default: "actionRoll".to_string(),
                    },
                ),
                FormField::new(
                    fields::POSITION,
                    "Position",
                    FieldKind::Select {
                        options: vec![
                            FieldOption::new("risky", "Risky"),
                            FieldOption::new("desperate", "Desperate"),
                        ],
                        default: "risky".to_string(),
                    },
                )
                .for_roll_type("actionRoll"),
                FormField::new(
                    fields::NOTE,
                    "Notes",
                    FieldKind::Text {
                        default: String::new(),
                    },
                ),
            ],
        }
    }

    #[tokio::test]
    async fn empty_lines_keep_defaults() {
        let values = dialog("\n\n\n\n").present(&spec()).await.unwrap().unwrap();
        assert_eq!(values.get(fields::ROLL_TYPE), Some("actionRoll"));
        assert_eq!(values.get(fields::MODIFIER), Some("0"));
        assert_eq!(values.get(fields::POSITION), Some("risky"));
    }

    #[tokio::test]
    async fn skips_fields_of_other_roll_types() {
        // roll type, modifier, note; position is never asked
        let values = dialog("2\n1\nquietly\n")
            .present(&spec())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(values.get(fields::ROLL_TYPE), Some("fortune"));
        assert_eq!(values.get(fields::MODIFIER), Some("1"));
        assert_eq!(values.get(fields::NOTE), Some("quietly"));
    }

    #[tokio::test]
    async fn accepts_labels_and_retries_bad_answers() {
        let values = dialog("action roll\n+1d\nsideways\nDesperate\n\n")
            .present(&spec())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(values.get(fields::MODIFIER), Some("1"));
        assert_eq!(values.get(fields::POSITION), Some("desperate"));
    }

    #[tokio::test]
    async fn end_of_input_cancels() {
        assert_eq!(dialog("").present(&spec()).await.unwrap(), None);
        assert_eq!(dialog("fortune\n").present(&spec()).await.unwrap(), None);
    }
}

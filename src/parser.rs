use tracing::debug;

use crate::{error::NotifierError, models::stack_event::StackEvent};

/// Decodes a CloudFormation notification body (`Key='value'` words separated by
/// whitespace) into a [`StackEvent`]. Each word is split on its first `=`.
pub fn parse_stack_message(message: &str) -> Result<StackEvent, NotifierError> {
    let words = split_words(message)?;

    let event = words
        .into_iter()
        .map(|word| match word.split_once('=') {
            Some((key, value)) => Ok((key.to_string(), value.to_string())),
            None => Err(NotifierError::MalformedMessage(format!(
                "token '{}' is not a key=value pair",
                word
            ))),
        })
        .collect::<Result<StackEvent, NotifierError>>()?;

    debug!(field_count = event.len(), "Parsed stack message");

    Ok(event)
}

#[derive(Clone, Copy, PartialEq)]
enum Quote {
    None,
    Single,
    Double,
}

/// Splits text into words using POSIX shell quoting rules, without comments or
/// expansions. Only space, tab, CR and LF separate words.
pub fn split_words(input: &str) -> Result<Vec<String>, NotifierError> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote = Quote::None;
    let mut chars = input.chars();

    while let Some(c) = chars.next() {
        match quote {
            Quote::Single => {
                if c == '\'' {
                    quote = Quote::None;
                } else {
                    current.push(c);
                }
            }
            Quote::Double => match c {
                '"' => quote = Quote::None,
                '\\' => match chars.next() {
                    Some(next @ ('"' | '\\')) => current.push(next),
                    Some(next) => {
                        current.push('\\');
                        current.push(next);
                    }
                    None => return Err(unterminated('"')),
                },
                _ => current.push(c),
            },
            Quote::None => match c {
                '\'' => {
                    quote = Quote::Single;
                    in_word = true;
                }
                '"' => {
                    quote = Quote::Double;
                    in_word = true;
                }
                '\\' => {
                    let escaped = chars.next().ok_or_else(|| {
                        NotifierError::MalformedMessage("no escaped character".to_string())
                    })?;
                    current.push(escaped);
                    in_word = true;
                }
                ' ' | '\t' | '\r' | '\n' => {
                    if in_word {
                        words.push(std::mem::take(&mut current));
                        in_word = false;
                    }
                }
                _ => {
                    current.push(c);
                    in_word = true;
                }
            },
        }
    }

    match quote {
        Quote::Single => return Err(unterminated('\'')),
        Quote::Double => return Err(unterminated('"')),
        Quote::None => {}
    }

    if in_word {
        words.push(current);
    }

    Ok(words)
}

fn unterminated(quote: char) -> NotifierError {
    NotifierError::MalformedMessage(format!("no closing quotation ({})", quote))
}

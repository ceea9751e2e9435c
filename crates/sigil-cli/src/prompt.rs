//! The four-question interview on stdin/stdout.

use std::io::{self, BufRead, Write};

/// Answers collected from the user, raw apart from trimming.
#[derive(Debug, Clone, PartialEq)]
pub struct Answers {
    pub shape: String,
    pub text: String,
    pub text_color: String,
    pub shape_color: String,
}

const QUESTIONS: [&str; 4] = [
    "What shape would you like the logo to be? (circle, square, rectangle, triangle)",
    "What letters would you like on your logo?",
    "What color would you like the text to be?",
    "What color would you like the background to be?",
];

/// Run the interview, one line per question.
///
/// Each answer is trimmed of surrounding whitespace. Input ending before
/// all four questions are answered is an error.
pub fn interview(input: &mut impl BufRead, output: &mut impl Write) -> io::Result<Answers> {
    let shape = ask(input, output, QUESTIONS[0])?;
    let text = ask(input, output, QUESTIONS[1])?;
    let text_color = ask(input, output, QUESTIONS[2])?;
    let shape_color = ask(input, output, QUESTIONS[3])?;
    Ok(Answers {
        shape,
        text,
        text_color,
        shape_color,
    })
}

fn ask(input: &mut impl BufRead, output: &mut impl Write, question: &str) -> io::Result<String> {
    writeln!(output, "{question}")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("input ended before answering: {question}"),
        ));
    }
    Ok(line.trim().to_string())
}

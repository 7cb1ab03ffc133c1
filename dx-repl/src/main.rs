use dx_compute::{differentiate, simplify_full};
use dx_parser::{parser::preprocess, validate::validate, Parser, Token};
use rustyline::{error::ReadlineError, DefaultEditor};
use std::io::{self, IsTerminal, Read};

/// Validates and parses the given input string into an expression tree.
///
/// Validation runs against the raw input, so its reports highlight the characters the user
/// actually typed. Parse errors carry spans into the preprocessed text instead, which is why a
/// failed parse is reported against [`preprocess`]'s output.
fn parse(input: &str) -> Option<Token> {
    if let Err(err) = validate(input) {
        err.build_report("input")
            .eprint(("input", ariadne::Source::from(input)))
            .unwrap();
        return None;
    }

    match Parser::new(input).parse() {
        Ok(tree) => Some(tree),
        Err(err) => {
            let scrubbed = preprocess(input);
            err.build_report("input")
                .eprint(("input", ariadne::Source::from(scrubbed)))
                .unwrap();
            None
        },
    }
}

/// Parses and differentiates the given input string, printing the function, its derivative, and
/// the steps taken to reach it.
fn differentiate_line(input: &str) {
    let Some(tree) = parse(input) else {
        return;
    };

    let function = simplify_full(&tree);
    println!("f(x) = {}", function);

    let (derivative, steps) = differentiate(&function);
    println!("f'(x) = {}", simplify_full(&derivative));

    for (i, step) in steps.iter().enumerate() {
        println!("{}. {}: {}", i + 1, step.title, step.description);
    }
}

fn main() {
    if !io::stdin().is_terminal() {
        // read expressions from stdin, one per line
        let mut input = String::new();
        io::stdin().read_to_string(&mut input).unwrap();

        for line in input.lines().filter(|line| !line.trim().is_empty()) {
            differentiate_line(line);
        }
    } else {
        // run the repl / interactive mode
        let mut rl = DefaultEditor::new().unwrap();

        fn process_line(rl: &mut DefaultEditor) -> Result<(), ReadlineError> {
            let input = rl.readline("> ")?;
            if input.trim().is_empty() {
                return Ok(());
            }

            rl.add_history_entry(&input)?;

            differentiate_line(&input);
            Ok(())
        }

        loop {
            if let Err(err) = process_line(&mut rl) {
                match err {
                    ReadlineError::Eof | ReadlineError::Interrupted => (),
                    _ => eprintln!("{}", err),
                }
                break;
            }
        }
    }
}

use clap::{Arg, Command};

const HELP_INTRO: &str = r#"Quickly create a CSV file called "generated.csv" filled with random values.

Arguments set the number of rows and the type of each column; for example
`5 NUMBER DATE` writes 5 rows, each holding a random number and a date
separated by ", ".

The number of rows is optional. When omitted it is randomized between 1 and 30.

Available types (case insensitive):"#;

const TYPES: &[(&str, &str)] = &[
    ("STRING", "a random-length sequence of alphanumeric characters"),
    ("NUMBER", "a random number between 1 and 99"),
    ("DATE", "the current date and time (ex. 2006-01-02 15:04:05)"),
    ("DATET", "like DATE but date and time are separated by a 'T'"),
    ("HEXA", "a random 128-bit hexadecimal value"),
    ("COLOR", "a random 6-digit hexadecimal value preceded by '#'"),
];

const PICK_LIST_NOTE: &str = "Any other token is written as-is; use ':' to list alternatives \
(ex. yes:no) and one is picked at random for each row.";

/// Command description used for the usage line. Tokens are read raw from the
/// process arguments, so this is never used to parse them.
fn command() -> Command {
    Command::new("randcsv")
        .about("Generate a CSV file of random values")
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new("tokens")
                .value_name("TOKENS")
                .help("Optional row count followed by column type tokens")
                .num_args(0..),
        )
}

pub fn help_text() -> String {
    let mut cmd = command();
    let mut text = match cmd.get_about() {
        Some(about) => format!("{about}\n\n"),
        None => String::new(),
    };
    text.push_str(&format!("{}\n\n", cmd.render_usage()));
    text.push_str(HELP_INTRO);
    text.push('\n');
    for (name, description) in TYPES {
        text.push_str(&format!("  {name:<8} - {description}\n"));
    }
    text.push('\n');
    text.push_str(PICK_LIST_NOTE);
    text
}

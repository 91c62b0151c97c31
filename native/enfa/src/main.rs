use anyhow::{Context, Result, bail};
use clap::Parser;
use enfa::formlang::{AdjacencyListing, Labels, Summary, TableView, format_postfix};
use enfa::{build_automaton, convert_to_postfix, export_table};
use std::io::{self, BufRead, Write};

/// Compile a regular expression into an ε-NFA and print its transition table.
///
/// Operators: `.` concatenation, `|` union, `*` zero or more, `+` one or more,
/// with `(` `)` for grouping. Symbols are ASCII letters.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Regular expression; read from stdin when omitted.
    regex: Option<String>,

    /// Text printed for absent table cells.
    #[arg(long, default_value = "-")]
    placeholder: String,

    /// Label of the epsilon column and edges.
    #[arg(long, default_value = "ε")]
    epsilon: String,

    /// Also print the postfix form of the expression.
    #[arg(long)]
    postfix: bool,
}

fn read_regex() -> Result<String> {
    print!("Enter a regular expression: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    match line.split_whitespace().next() {
        Some(token) => Ok(token.to_string()),
        None => bail!("no regular expression given"),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let regex = match args.regex {
        Some(regex) => regex,
        None => read_regex()?,
    };
    let labels = Labels {
        epsilon: args.epsilon,
        placeholder: args.placeholder,
    };

    let postfix =
        convert_to_postfix(&regex).with_context(|| format!("cannot parse {regex:?}"))?;
    if args.postfix {
        println!("Postfix: {}\n", format_postfix(&postfix));
    }
    let nfa = build_automaton(&postfix).with_context(|| format!("cannot compile {regex:?}"))?;

    println!("Adjacency listing of the ε-NFA\n");
    print!("{}", AdjacencyListing::new(&nfa, &labels));

    println!("\nDetails of the ε-NFA\n");
    print!("{}", Summary::of(&nfa));

    println!("\nTransition table\n");
    print!("{}", TableView::new(&export_table(&nfa), &labels));

    Ok(())
}

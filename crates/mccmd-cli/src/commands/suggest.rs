use crate::cli::SourceArgs;
use crate::source::{build_parser, load_lines};

pub struct SuggestArgs {
    pub source: SourceArgs,
    pub line: u32,
    pub column: usize,
}

pub fn run(args: SuggestArgs) {
    let parser = build_parser(&args.source).unwrap_or_else(|msg| {
        eprintln!("error: {msg}");
        std::process::exit(1);
    });
    let source = load_lines(&args.source).unwrap_or_else(|msg| {
        eprintln!("error: {msg}");
        std::process::exit(1);
    });

    let idx = (args.line.max(1) - 1) as usize;
    let Some(line) = source.lines.get(idx) else {
        eprintln!("error: {} has no line {}", source.label, args.line);
        std::process::exit(1);
    };

    let outcome = parser.parse_line(line);
    let suggestions = outcome.suggestions_at(&parser, args.column);
    if suggestions.is_empty() {
        eprintln!("(no suggestions at column {})", args.column);
        return;
    }
    for s in &suggestions {
        match &s.note_key {
            Some(note) => println!("{}\t{} ({})", s.inserts, s.label_key, note),
            None => println!("{}\t{}", s.inserts, s.label_key),
        }
    }
}

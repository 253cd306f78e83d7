use crate::cli::SourceArgs;
use crate::source::{build_parser, load_lines};

pub struct HighlightArgs {
    pub source: SourceArgs,
    pub json: bool,
}

pub fn run(args: HighlightArgs) {
    let parser = build_parser(&args.source).unwrap_or_else(|msg| {
        eprintln!("error: {msg}");
        std::process::exit(1);
    });
    let source = load_lines(&args.source).unwrap_or_else(|msg| {
        eprintln!("error: {msg}");
        std::process::exit(1);
    });

    for (idx, line) in source.lines.iter().enumerate() {
        let outcome = parser.parse_line(line);
        if args.json {
            let spans: Vec<_> = outcome
                .font_marks
                .iter()
                .map(|m| {
                    serde_json::json!({
                        "begin": m.span.begin.column,
                        "end": m.span.end.column,
                        "font": format!("{:?}", m.font),
                    })
                })
                .collect();
            println!("{}", serde_json::json!({"line": idx + 1, "spans": spans}));
        } else {
            println!("{}:{}: {}", source.label, idx + 1, line);
            for m in &outcome.font_marks {
                println!("  [{:>3},{:>3}) {:?}", m.span.begin.column, m.span.end.column, m.font);
            }
        }
    }
}

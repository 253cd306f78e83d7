use mccmd_core::DiagnosticKind;

use crate::cli::{ColorChoice, SourceArgs};
use crate::source::{build_parser, load_lines};

pub struct CheckArgs {
    pub source: SourceArgs,
    pub color: ColorChoice,
    pub strict: bool,
}

pub fn run(args: CheckArgs) {
    let parser = build_parser(&args.source).unwrap_or_else(|msg| {
        eprintln!("error: {msg}");
        std::process::exit(1);
    });
    let source = load_lines(&args.source).unwrap_or_else(|msg| {
        eprintln!("error: {msg}");
        std::process::exit(1);
    });

    let colorize = args.color.should_colorize();
    let mut error_count = 0usize;
    let mut warning_count = 0usize;

    for (idx, line) in source.lines.iter().enumerate() {
        let outcome = parser.parse_line(line);
        for diag in &outcome.diagnostics {
            let is_error = matches!(diag.kind, DiagnosticKind::ArgParse | DiagnosticKind::Expectation);
            if is_error {
                error_count += 1;
            } else {
                warning_count += 1;
            }
            render_diagnostic(&source.label, idx + 1, line, diag, colorize);
        }
    }

    let failed = error_count > 0 || (args.strict && warning_count > 0);
    if failed {
        eprintln!("{}: {error_count} error(s), {warning_count} warning(s)", source.label);
        std::process::exit(1);
    }
    // Silent on success (like cargo check).
}

fn render_diagnostic(label: &str, line_no: usize, line: &str, diag: &mccmd_core::Diagnostic, colorize: bool) {
    let col = diag.span.begin.column + 1;
    let tag = match diag.kind {
        DiagnosticKind::ArgParse | DiagnosticKind::Expectation => "error",
        DiagnosticKind::Semantic => "warning",
        DiagnosticKind::UnreachableBranch => "note",
    };
    if colorize {
        let code = match tag {
            "error" => "\x1b[31merror\x1b[0m",
            "warning" => "\x1b[33mwarning\x1b[0m",
            _ => "\x1b[36mnote\x1b[0m",
        };
        eprintln!("{label}:{line_no}:{col}: {code}: {} ({})", diag.message_key, line.trim_end());
    } else {
        eprintln!("{label}:{line_no}:{col}: {tag}: {}", diag.message_key);
    }
}

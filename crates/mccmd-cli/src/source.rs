//! Turns a `SourceArgs` group into parser inputs: the lines to walk plus a
//! configured `MCCmdParser`. Shared by every subcommand.

use std::fs;
use std::io::Read;

use mccmd_core::{MCCmdParser, Version};
use mccmd_idtable::IdTable;

use crate::cli::SourceArgs;

pub struct Source {
    pub lines: Vec<String>,
    pub label: String,
}

pub fn load_lines(args: &SourceArgs) -> Result<Source, String> {
    if let Some(text) = &args.text {
        return Ok(Source { lines: vec![text.clone()], label: "<text>".to_owned() });
    }
    let path = args.path.as_ref().expect("clap enforces path or --text");
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).map_err(|e| format!("reading stdin: {e}"))?;
        return Ok(Source { lines: buf.lines().map(str::to_owned).collect(), label: "<stdin>".to_owned() });
    }
    let text = fs::read_to_string(path).map_err(|e| format!("reading {}: {e}", path.display()))?;
    let lines: Vec<String> = text.lines().map(str::to_owned).collect();
    log::debug!("loaded {} line(s) from {}", lines.len(), path.display());
    Ok(Source { lines, label: path.display().to_string() })
}

pub fn build_parser(args: &SourceArgs) -> Result<MCCmdParser, String> {
    let version = match &args.game_version {
        Some(raw) => parse_version(raw)?,
        None => Version::default(),
    };
    let mut parser = MCCmdParser::new(version);
    if let Some(path) = &args.id_table {
        let text = fs::read_to_string(path).map_err(|e| format!("reading {}: {e}", path.display()))?;
        let table = IdTable::load(&text, false).map_err(|e| format!("parsing {}: {e}", path.display()))?;
        log::info!("loaded id table from {}", path.display());
        parser = parser.with_id_table(table);
    }
    Ok(parser)
}

fn parse_version(raw: &str) -> Result<Version, String> {
    let parts: Vec<&str> = raw.split('.').collect();
    let [major, minor, patch] = parts.as_slice() else {
        return Err(format!("invalid version {raw:?}, expected MAJOR.MINOR.PATCH"));
    };
    let major = major.parse().map_err(|_| format!("invalid major version in {raw:?}"))?;
    let minor = minor.parse().map_err(|_| format!("invalid minor version in {raw:?}"))?;
    let patch = patch.parse().map_err(|_| format!("invalid patch version in {raw:?}"))?;
    Ok(Version::new(major, minor, patch))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_a_full_triple() {
        assert_eq!(parse_version("1.19.80").unwrap(), Version::new(1, 19, 80));
    }

    #[test]
    fn rejects_missing_components() {
        assert!(parse_version("1.19").is_err());
        assert!(parse_version("1.19.80.1").is_err());
    }

    #[test]
    fn rejects_non_numeric_components() {
        assert!(parse_version("1.x.0").is_err());
    }
}

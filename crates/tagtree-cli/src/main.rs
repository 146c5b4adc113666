//! TagTree CLI - Outline, validate, and export template block structure
//!
//! Usage:
//!   ttcli [OPTIONS] <FILE>
//!
//! Commands:
//!   parse     Parse and display the block tree (default)
//!   diagram   Emit the forest as Mermaid flowchart text
//!   validate  Check the template for structural notices
//!   stats     Show structure statistics

use std::env;
use std::fs;
use std::process;

use serde::Serialize;
use tagtree_core::{outline, BlockKind, Forest, NodeId, ParseResult, Parser};

fn main() {
    let args: Vec<String> = env::args().collect();

    match run(&args) {
        Ok(()) => {}
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}

fn run(args: &[String]) -> Result<(), String> {
    let config = parse_args(args)?;

    let input = fs::read_to_string(&config.file)
        .map_err(|e| format!("failed to read '{}': {}", config.file, e))?;

    let parser = Parser::new().with_preview_lines(config.preview_lines);
    let result = parser.parse(&input);

    match config.command {
        Command::Parse => cmd_parse(&result, &config),
        Command::Diagram => cmd_diagram(&result),
        Command::Validate => cmd_validate(&result, &config),
        Command::Stats => cmd_stats(&result, &input),
    }
}

#[derive(Debug)]
struct Config {
    command: Command,
    file: String,
    format: OutputFormat,
    verbose: bool,
    preview_lines: usize,
}

#[derive(Debug, Clone, Copy)]
enum Command {
    Parse,
    Diagram,
    Validate,
    Stats,
}

#[derive(Debug, Clone, Copy)]
enum OutputFormat {
    Text,
    Json,
}

fn parse_args(args: &[String]) -> Result<Config, String> {
    let mut command = Command::Parse;
    let mut format = OutputFormat::Text;
    let mut verbose = false;
    let mut preview_lines = 3;
    let mut file = None;

    let mut i = 1;
    while i < args.len() {
        let arg = &args[i];
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                process::exit(0);
            }
            "-V" | "--version" => {
                println!("ttcli {}", env!("CARGO_PKG_VERSION"));
                process::exit(0);
            }
            "-v" | "--verbose" => verbose = true,
            "-j" | "--json" => format = OutputFormat::Json,
            "-p" | "--preview-lines" => {
                i += 1;
                let value = args
                    .get(i)
                    .ok_or_else(|| format!("{} requires a value", arg))?;
                preview_lines = value
                    .parse()
                    .map_err(|_| format!("invalid preview line count: {}", value))?;
            }
            "parse" => command = Command::Parse,
            "diagram" => command = Command::Diagram,
            "validate" => command = Command::Validate,
            "stats" => command = Command::Stats,
            _ if arg.starts_with('-') => {
                return Err(format!("unknown option: {}", arg));
            }
            _ => {
                if file.is_some() {
                    return Err("multiple files specified".to_string());
                }
                file = Some(arg.clone());
            }
        }
        i += 1;
    }

    let file = file.ok_or_else(|| "no input file specified".to_string())?;

    Ok(Config {
        command,
        file,
        format,
        verbose,
        preview_lines,
    })
}

fn print_help() {
    eprintln!(
        r#"ttcli - template block-structure outliner

USAGE:
    ttcli [OPTIONS] [COMMAND] <FILE>

COMMANDS:
    parse       Parse and display the block tree (default)
    diagram     Emit the forest as Mermaid flowchart text
    validate    Check the template for structural notices
    stats       Show structure statistics

OPTIONS:
    -v, --verbose            Show line ranges and body previews
    -j, --json               Output in JSON format
    -p, --preview-lines <N>  Body lines collected per preview (default 3)
    -h, --help               Print help information
    -V, --version            Print version information

EXAMPLES:
    ttcli page.html.j2           Outline a template
    ttcli -v page.html.j2        Outline with previews
    ttcli -j page.html.j2        Outline as JSON records
    ttcli diagram page.html.j2   Mermaid flowchart on stdout
    ttcli validate page.html.j2  Check block nesting
    ttcli stats page.html.j2     Show structure statistics
"#
    );
}

// =============================================================================
// Parse Command
// =============================================================================

fn cmd_parse(result: &ParseResult, config: &Config) -> Result<(), String> {
    for notice in result.notices.iter() {
        eprintln!("warning: {}", notice);
    }

    match config.format {
        OutputFormat::Json => print_json(&result.forest),
        OutputFormat::Text => {
            print_forest(&result.forest, config.verbose);
            Ok(())
        }
    }
}

fn print_json(forest: &Forest) -> Result<(), String> {
    let records = outline::outline(forest);
    let text = serde_json::to_string_pretty(&records)
        .map_err(|e| format!("serialization failed: {}", e))?;
    println!("{}", text);
    Ok(())
}

// =============================================================================
// Diagram Command
// =============================================================================

fn cmd_diagram(result: &ParseResult) -> Result<(), String> {
    for notice in result.notices.iter() {
        eprintln!("warning: {}", notice);
    }
    print!("{}", tagtree_core::diagram::diagram(&result.forest));
    Ok(())
}

// =============================================================================
// Validate Command
// =============================================================================

#[derive(Serialize)]
struct JsonNotice<'a> {
    message: &'a str,
    line: u32,
    kind: &'static str,
}

fn cmd_validate(result: &ParseResult, config: &Config) -> Result<(), String> {
    if result.is_clean() {
        match config.format {
            OutputFormat::Json => println!(r#"{{"clean": true, "notices": []}}"#),
            OutputFormat::Text => println!("Clean: no notices"),
        }
        Ok(())
    } else {
        match config.format {
            OutputFormat::Json => {
                let notices: Vec<JsonNotice> = result
                    .notices
                    .iter()
                    .map(|n| JsonNotice {
                        message: &n.message,
                        line: n.line + 1,
                        kind: kind_str(n),
                    })
                    .collect();
                let body = serde_json::json!({"clean": false, "notices": notices});
                println!("{}", body);
            }
            OutputFormat::Text => {
                eprintln!("Found {} notice(s)", result.notices.len());
                for notice in result.notices.iter() {
                    eprintln!("  - {}", notice);
                }
            }
        }
        Err(format!("{} notice(s) found", result.notices.len()))
    }
}

fn kind_str(notice: &tagtree_core::ParseNotice) -> &'static str {
    use tagtree_core::NoticeKind;
    match notice.kind {
        NoticeKind::StrayTag => "stray-tag",
        NoticeKind::MismatchedTag => "mismatched-tag",
        NoticeKind::Unterminated => "unterminated",
        NoticeKind::EmptyCondition => "empty-condition",
    }
}

// =============================================================================
// Stats Command
// =============================================================================

fn cmd_stats(result: &ParseResult, input: &str) -> Result<(), String> {
    let stats = ForestStats::from_forest(&result.forest);

    println!("Structure Statistics");
    println!("--------------------");
    println!("Blocks:");
    println!("  Total:        {}", stats.total);
    println!("  Conditionals: {}", stats.ifs);
    println!("  Alternates:   {}", stats.elifs);
    println!("  Defaults:     {}", stats.elses);
    println!("  Loops:        {}", stats.fors);
    println!();
    println!("Shape:");
    println!("  Roots:        {}", result.forest.roots().len());
    println!("  Max depth:    {}", stats.max_depth);
    println!("  Unterminated: {}", stats.unterminated);
    println!();
    println!("Size:");
    println!("  Characters:   {}", input.len());
    println!("  Lines:        {}", result.lines.len());
    println!();
    println!("Notices:        {}", result.notices.len());

    Ok(())
}

#[derive(Default)]
struct ForestStats {
    total: usize,
    ifs: usize,
    elifs: usize,
    elses: usize,
    fors: usize,
    max_depth: u32,
    unterminated: usize,
}

impl ForestStats {
    fn from_forest(forest: &Forest) -> Self {
        let mut stats = Self::default();

        for id in forest.iter() {
            let node = forest.get(id);
            stats.total += 1;
            match node.kind {
                BlockKind::If => stats.ifs += 1,
                BlockKind::Elif => stats.elifs += 1,
                BlockKind::Else => stats.elses += 1,
                BlockKind::For => stats.fors += 1,
            }
            stats.max_depth = stats.max_depth.max(node.depth);
            if node.end_line.is_none() {
                stats.unterminated += 1;
            }
        }

        stats
    }
}

// =============================================================================
// Text Output
// =============================================================================

fn print_forest(forest: &Forest, verbose: bool) {
    if forest.is_empty() {
        println!("No blocks found");
        return;
    }

    for &root in forest.roots() {
        print_root(forest, root, verbose);
    }
}

fn print_root(forest: &Forest, id: NodeId, verbose: bool) {
    let node = forest.get(id);
    println!("{}{}", describe_node(forest, id), range_suffix(forest, id));
    if verbose {
        print_preview(forest, id, "  ");
    }

    let count = node.children.len();
    for (i, &child) in node.children.iter().enumerate() {
        print_child(forest, child, "", i == count - 1, verbose);
    }
}

fn print_child(forest: &Forest, id: NodeId, prefix: &str, is_last: bool, verbose: bool) {
    let node = forest.get(id);
    let connector = if is_last { "└─" } else { "├─" };

    println!(
        "{}{} {}{}",
        prefix,
        connector,
        describe_node(forest, id),
        range_suffix(forest, id)
    );

    let child_prefix = format!("{}{}", prefix, if is_last { "   " } else { "│  " });
    if verbose {
        print_preview(forest, id, &child_prefix);
    }

    let count = node.children.len();
    for (i, &child) in node.children.iter().enumerate() {
        print_child(forest, child, &child_prefix, i == count - 1, verbose);
    }
}

fn describe_node(forest: &Forest, id: NodeId) -> String {
    let node = forest.get(id);
    if node.condition.is_empty() {
        node.kind.keyword().to_string()
    } else {
        format!("{} {}", node.kind.keyword(), truncate(node.condition, 48))
    }
}

fn range_suffix(forest: &Forest, id: NodeId) -> String {
    let node = forest.get(id);
    match node.end_line {
        Some(end) => format!("  (lines {}-{})", node.source_line + 1, end + 1),
        None => format!("  (line {}-, unterminated)", node.source_line + 1),
    }
}

fn print_preview(forest: &Forest, id: NodeId, prefix: &str) {
    let node = forest.get(id);
    for line in node.preview.lines() {
        println!("{}| {}", prefix, truncate(line, 72));
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated: String = s.chars().take(max_chars).collect();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

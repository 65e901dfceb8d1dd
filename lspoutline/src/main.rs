//! lspoutline — print the section/defun outline of AutoLISP source files.
//!
//! Supports two modes:
//!
//! - **stdin mode**: `lspoutline < file.lsp`
//! - **file mode**: `lspoutline -o outlines -f markdown src/*.lsp`

mod model;
mod render;
mod toc;

use anyhow::{Context, Result};
use clap::Parser;
use lisp_outline::{query, SymbolKind};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "lspoutline",
    about = "Print the outline (sections, functions, commands) of AutoLISP source files"
)]
struct Cli {
    /// Input files, directories or glob patterns. If omitted, reads from stdin.
    files: Vec<String>,

    /// Output directory (required when files are given)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Output format: tree (default), markdown, json
    #[arg(short = 'f', long, default_value = "tree")]
    format: String,

    /// Keep only symbols of this kind: section, function, command.
    /// Can be specified multiple times.
    #[arg(long = "kind")]
    kinds: Vec<String>,

    /// Skip documents longer than this many lines
    #[arg(long)]
    max_lines: Option<usize>,

    /// Print the symbols enclosing this 1-based line instead of the outline (stdin only)
    #[arg(long)]
    at: Option<usize>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let kinds = parse_kinds(&cli.kinds)?;

    if cli.files.is_empty() {
        return stdin_mode(&cli, &kinds);
    }

    file_mode(&cli, &kinds)
}

/// stdin mode: read one document from stdin, write the rendered outline to stdout.
fn stdin_mode(cli: &Cli, kinds: &[SymbolKind]) -> Result<()> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let Some(doc) = load_document("<stdin>", &input, cli.max_lines, kinds) else {
        return Ok(());
    };

    if let Some(line) = cli.at {
        let path = query::enclosing(&doc.outline, line.saturating_sub(1));
        let names: Vec<&str> = path.iter().map(|n| n.name.as_str()).collect();
        println!("{}", names.join(" > "));
        return Ok(());
    }

    let renderer = render::create_renderer(&cli.format)?;
    print!("{}", renderer.render(&doc)?);
    Ok(())
}

/// file mode: outline every input file into its own file under the output directory.
fn file_mode(cli: &Cli, kinds: &[SymbolKind]) -> Result<()> {
    if cli.at.is_some() {
        anyhow::bail!("--at is only supported when reading from stdin");
    }

    let output_dir = cli
        .output
        .as_deref()
        .context("--output is required when files are given")?;

    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory: {}", output_dir.display()))?;

    let renderer = render::create_renderer(&cli.format)?;
    let ext = renderer.file_extension();

    let input_files = expand_globs(&cli.files)?;

    for path in &input_files {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("warning: skipping {}: {}", path.display(), e);
                continue;
            }
        };

        let source = path.to_string_lossy().to_string();
        let Some(doc) = load_document(&source, &content, cli.max_lines, kinds) else {
            continue;
        };

        let name = derive_output_name(&source);
        let out_path = output_dir.join(format!("{}.{}", name, ext));
        fs::write(&out_path, renderer.render(&doc)?)
            .with_context(|| format!("failed to write {}", out_path.display()))?;
    }

    Ok(())
}

/// Outline one document, applying the size cap and kind filter.
///
/// Returns `None` (after a warning) when the document exceeds `max_lines`.
fn load_document(
    source: &str,
    content: &str,
    max_lines: Option<usize>,
    kinds: &[SymbolKind],
) -> Option<model::Document> {
    let lines: Vec<&str> = content.lines().collect();

    if let Some(max) = max_lines {
        if lines.len() > max {
            eprintln!(
                "warning: skipping {}: {} lines exceeds --max-lines {}",
                source,
                lines.len(),
                max
            );
            return None;
        }
    }

    let mut outline = lisp_outline::build(&lines);
    if !kinds.is_empty() {
        outline = query::retain_kinds(&outline, kinds);
    }

    Some(model::Document {
        source: source.to_string(),
        line_count: lines.len(),
        outline,
    })
}

/// Parse `--kind` values.
fn parse_kinds(names: &[String]) -> Result<Vec<SymbolKind>> {
    names
        .iter()
        .map(|name| {
            SymbolKind::from_name(name).with_context(|| {
                format!("unknown kind: {}. Use section, function, or command", name)
            })
        })
        .collect()
}

/// File extensions recognized as AutoLISP sources.
const SUPPORTED_EXTENSIONS: &[&str] = &["lsp", "lisp", "mnl"];

/// Expand glob patterns into a list of real file paths.
/// Also handles bare directory paths by scanning for supported file types.
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        // Directory: scan for supported extensions (non-recursive)
        if path.is_dir() {
            let entries = fs::read_dir(path)
                .with_context(|| format!("failed to read directory: {}", path.display()))?;
            for entry in entries.flatten() {
                let p = entry.path();
                if p.is_file() && has_supported_extension(&p) {
                    files.push(p);
                }
            }
            continue;
        }
        let matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            eprintln!("warning: no files matched: {}", pattern);
        }
        files.extend(matches);
    }
    // Sort for deterministic output
    files.sort();
    files.dedup();
    Ok(files)
}

fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|s| s.eq_ignore_ascii_case(ext))
        })
}

/// Derive the output file name (without extension) from a source path.
/// "src/geometry.lsp" → "geometry", "acad.mnl" → "acad"
fn derive_output_name(source: &str) -> String {
    let path = Path::new(source);
    let filename = path
        .file_name()
        .and_then(|f| f.to_str())
        .unwrap_or(source);
    if has_supported_extension(path) {
        path.file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(filename)
            .to_string()
    } else {
        filename.to_string()
    }
}

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use bnansi_core::converter::{ExplainResult, ExplainStep};
use bnansi_core::{legacy, settings, Converter, MappingTables};
use unicode_width::UnicodeWidthStr;

use super::{die, CliError};

/// Options shared by `convert` and `explain`.
#[derive(Debug, Default, Clone)]
pub struct ConvertOptions {
    /// Custom tables TOML; the embedded tables when `None`.
    pub tables: Option<String>,
    /// Force normalization on; settings decide otherwise.
    pub normalize: bool,
    /// Emit legacy code page bytes instead of UTF-8.
    pub bytes: bool,
}

/// Load custom tables from a TOML file.
pub fn load_tables(path: &Path) -> Result<MappingTables, CliError> {
    let content = fs::read_to_string(path)?;
    Ok(MappingTables::from_toml(&content)?)
}

/// Text argument, else `--input` file, else stdin.
pub fn read_source(text: Option<&str>, input: Option<&Path>) -> Result<String, CliError> {
    if let Some(text) = text {
        return Ok(text.to_string());
    }
    match input {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Final output bytes: UTF-8 as-is, or the legacy code page.
pub fn render_output(converted: &str, bytes: bool) -> Result<Vec<u8>, CliError> {
    if bytes {
        Ok(legacy::encode(converted)?)
    } else {
        Ok(converted.as_bytes().to_vec())
    }
}

/// Convert `input` file into `output` file. Returns bytes written.
pub fn convert_file(
    converter: &Converter<'_>,
    input: &Path,
    output: &Path,
    bytes: bool,
) -> Result<usize, CliError> {
    let source = fs::read_to_string(input)?;
    let rendered = render_output(&converter.convert(&source), bytes)?;
    fs::write(output, &rendered)?;
    Ok(rendered.len())
}

/// Read a legacy byte file back as the glyph characters it addresses.
pub fn decode_file(input: &Path) -> Result<String, CliError> {
    Ok(legacy::decode(&fs::read(input)?))
}

pub fn decode_cmd(input: &str) {
    let text = die!(decode_file(Path::new(input)), "Error reading {input}: {}");
    println!("{text}");
}

fn with_converter<R>(opts: &ConvertOptions, f: impl FnOnce(&Converter<'_>) -> R) -> R {
    let custom = opts
        .tables
        .as_deref()
        .map(|p| die!(load_tables(Path::new(p)), "Error loading tables: {}"));
    let tables = custom.as_ref().unwrap_or_else(|| MappingTables::global());
    let normalize = opts.normalize || settings::settings().normalize.enabled;
    f(&Converter::new(tables).with_normalize(normalize))
}

pub fn convert_cmd(
    text: Option<&str>,
    input: Option<&str>,
    output: Option<&str>,
    opts: &ConvertOptions,
) {
    with_converter(opts, |converter| {
        if let (None, Some(input), Some(output)) = (text, input, output) {
            let written = die!(
                convert_file(converter, Path::new(input), Path::new(output), opts.bytes),
                "Error converting file: {}"
            );
            eprintln!("Wrote {written} bytes to {output}");
            return;
        }

        let source = die!(
            read_source(text, input.map(Path::new)),
            "Error reading input: {}"
        );
        let rendered = die!(
            render_output(&converter.convert(&source), opts.bytes),
            "Error: {}"
        );
        match output {
            Some(path) => die!(fs::write(path, &rendered), "Error writing {path}: {}"),
            None => {
                let mut stdout = io::stdout().lock();
                die!(stdout.write_all(&rendered), "Error writing output: {}");
                if text.is_some() && !opts.bytes {
                    die!(writeln!(stdout), "Error writing output: {}");
                }
            }
        }
    });
}

pub fn explain_cmd(text: &str, json: bool, opts: &ConvertOptions) {
    with_converter(opts, |converter| {
        let result = converter.explain(text);
        if json {
            let out = die!(
                serde_json::to_string_pretty(&result).map_err(CliError::from),
                "Error: {}"
            );
            println!("{out}");
        } else {
            print!("{}", format_explain(&result));
        }
    });
}

fn pad(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{s}{}", " ".repeat(width.saturating_sub(w)))
}

fn format_step(step: &ExplainStep) -> String {
    let table = step.table.map_or("-", |t| t.section());
    format!(
        "{:>4}  {}  {}  {}  {}  {}{}\n",
        step.start,
        pad(&format!("{:?}", step.pattern), 12),
        pad(table, 20),
        pad(step.action.as_str(), 12),
        pad(&step.glyphs, 4),
        step.output,
        if step.reph_pending { "  [reph pending]" } else { "" },
    )
}

/// Human-readable step table.
pub fn format_explain(result: &ExplainResult) -> String {
    let mut out = String::new();
    out.push_str(&format!("input:  {}\n", result.input));
    if let Some(normalized) = &result.normalized {
        out.push_str(&format!("normalized: {normalized}\n"));
    }
    for step in &result.steps {
        out.push_str(&format_step(step));
    }
    out.push_str(&format!("output: {}\n", result.output));
    for u in &result.unmapped {
        out.push_str(&format!(
            "unmapped: U+{:04X} at {}\n",
            u32::from(u.ch),
            u.index
        ));
    }
    out
}

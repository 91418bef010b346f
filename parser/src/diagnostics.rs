//! Help and diagnostic message formatting.
//!
//! Messages are laid out as `<message>\n\n<description>\n`, each part only
//! present when there is something to show. Explicit help requests also get
//! a usage section when a schema is configured.

use wordlist_core::{CommandInfo, DEFAULT_CONTEXT, Schema, SchemaEntry};

const RESIDUAL_PREFIX: &str = "invalid arguments format: ";

/// Formats a diagnostic message followed by the command description.
///
/// # Examples
///
/// ```
/// use wordlist_args::diagnostics::help_message;
/// use wordlist_core::CommandInfo;
///
/// let info = CommandInfo::new("words", "create a word list structure from files");
/// assert_eq!(
///     help_message(Some("invalid argument \"x\""), Some(&info)),
///     "invalid argument \"x\"\n\ncreate a word list structure from files\n"
/// );
/// assert_eq!(help_message(None, None), "");
/// ```
pub fn help_message(message: Option<&str>, info: Option<&CommandInfo>) -> String {
    let mut out = String::new();

    if let Some(message) = message.filter(|m| !m.is_empty()) {
        out.push_str(message);
        out.push_str("\n\n");
    }

    if let Some(info) = info {
        out.push_str(&info.description);
        out.push('\n');
    }

    out
}

/// Formats leftover input with a caret under the first unmatched character.
///
/// `offset` is a byte offset into `input`; the caret is placed by character
/// count so non-ASCII input lines up.
///
/// # Examples
///
/// ```
/// use wordlist_args::diagnostics::residual_message;
///
/// let msg = residual_message("a --b-c", 1);
/// assert_eq!(msg, "invalid arguments format: a --b-c\n---------------------------^");
/// ```
pub fn residual_message(input: &str, offset: usize) -> String {
    let column = RESIDUAL_PREFIX.chars().count() + input[..offset].chars().count();
    format!("{RESIDUAL_PREFIX}{input}\n{}^", "-".repeat(column))
}

/// Full text for an explicit help request.
pub fn help_text(info: Option<&CommandInfo>, schema: Option<&Schema>) -> String {
    let mut out = help_message(None, info);

    if let Some(schema) = schema {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&usage(info, schema));
    }

    out
}

/// Renders a usage line and an options table for a schema.
///
/// Aliases are listed next to the entry they point at; the positional
/// slot appears in the usage line only.
pub fn usage(info: Option<&CommandInfo>, schema: &Schema) -> String {
    let command = info
        .map(|info| info.command.as_str())
        .filter(|command| !command.is_empty())
        .unwrap_or("command");

    let rows: Vec<(String, String)> = schema
        .iter()
        .filter(|(name, entry)| *name != DEFAULT_CONTEXT && !entry.is_alias())
        .map(|(name, entry)| {
            let forms: Vec<String> = std::iter::once(name)
                .chain(schema.aliases_of(name))
                .map(flag_form)
                .collect();
            (forms.join(", "), describe(entry))
        })
        .collect();

    let mut out = format!("usage: {command}");
    if let Some(positional) = schema.get(DEFAULT_CONTEXT) {
        let label = positional.name.as_deref().unwrap_or("arg");
        let repeat = if positional.is_scalar() { "" } else { "..." };
        if positional.required {
            out.push_str(&format!(" {label}{repeat}"));
        } else {
            out.push_str(&format!(" [{label}{repeat}]"));
        }
    }
    if !rows.is_empty() {
        out.push_str(" [options]\n\noptions:\n");
        let width = rows.iter().map(|(forms, _)| forms.len()).max().unwrap_or(0);
        for (forms, desc) in &rows {
            let line = format!("  {forms:<width$}  {desc}");
            out.push_str(line.trim_end());
            out.push('\n');
        }
    } else {
        out.push('\n');
    }

    out
}

fn flag_form(name: &str) -> String {
    if name.chars().count() == 1 {
        format!("-{name}")
    } else {
        format!("--{name}")
    }
}

fn describe(entry: &SchemaEntry) -> String {
    let mut parts: Vec<String> = entry.description.iter().cloned().collect();
    if entry.is_scalar() {
        parts.push("(single value)".to_string());
    }
    if let Some(default) = &entry.default {
        let shown = match default {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        parts.push(format!("(default: {shown})"));
    }
    parts.join(" ")
}

// ABOUTME: Rendering of call requests for CLI output.
// ABOUTME: Supports a Lua call expression (text) and JSON.

use serde_json::Value;

use crate::doer::CallRequest;
use crate::error::Result;

/// How requests are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputMode {
    /// Lua call expression, as typed into an admin console
    #[default]
    Text,
    /// Pretty-printed JSON object with function and args
    Json,
}

pub fn render(call: &CallRequest, mode: OutputMode) -> Result<String> {
    match mode {
        OutputMode::Text => Ok(render_lua(call)),
        OutputMode::Json => Ok(serde_json::to_string_pretty(call)?),
    }
}

/// Render as `function(arg, ...)` using Lua literal syntax.
pub fn render_lua(call: &CallRequest) -> String {
    let args: Vec<String> = call.args.iter().map(lua_literal).collect();
    format!("{}({})", call.function, args.join(", "))
}

fn lua_literal(value: &Value) -> String {
    match value {
        Value::Null => "nil".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => lua_string(s),
        Value::Array(items) => {
            let items: Vec<String> = items.iter().map(lua_literal).collect();
            format!("{{{}}}", items.join(", "))
        }
        Value::Object(map) => {
            let fields: Vec<String> = map
                .iter()
                .map(|(k, v)| {
                    if is_lua_identifier(k) {
                        format!("{k} = {}", lua_literal(v))
                    } else {
                        format!("[{}] = {}", lua_string(k), lua_literal(v))
                    }
                })
                .collect();
            format!("{{{}}}", fields.join(", "))
        }
    }
}

fn lua_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                // Fixed-width byte escapes, so a following digit is not absorbed.
                let mut buf = [0u8; 4];
                for b in c.encode_utf8(&mut buf).bytes() {
                    out.push_str(&format!("\\{b:03}"));
                }
            }
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

fn is_lua_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

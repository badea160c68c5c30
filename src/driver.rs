//! One left-to-right pass over the header: scan, register tags, classify
//! struct bodies, then render everything between the fixed prologue and
//! epilogue.

use tracing::{debug, info};

use crate::classify::classify;
use crate::codegen::Codegen;
use crate::config::GeneratorConfig;
use crate::error::{GenerateError, Result};
use crate::ir::{Bindings, StructBody};
use crate::patterns::{BodyLine, Enumerant, Patterns, TopLevelLine};
use crate::registry::TypeRegistry;
use crate::scanner::LineScanner;
use crate::template;

/// Read the header and build the model, without rendering.
pub fn collect(source: &str, config: &GeneratorConfig) -> Result<Bindings> {
    let patterns = Patterns::new(config)?;
    let mut registry = TypeRegistry::new();
    let mut bindings = Bindings::default();
    let mut lines = LineScanner::new(source);

    while let Some(line) = lines.next_line() {
        match patterns.top_level(line.text) {
            Some(TopLevelLine::StructOpen(name)) => {
                let hand_authored = template::hand_authored(name);
                let body = read_body(name, line.number, &mut lines, &patterns, &mut registry)?;
                if let Some(entry) = hand_authored {
                    debug!(name, ?entry, "hand-authored struct, not generating");
                    continue;
                }
                bindings.structs.push(classify(body, &registry)?);
            }
            Some(TopLevelLine::TypedefAlias(name)) => {
                bindings.aliases.push(name.to_string());
            }
            Some(TopLevelLine::Enumerant(enumerant)) => {
                register(&mut registry, enumerant);
            }
            None => {}
        }
    }

    info!(
        lines = lines.consumed(),
        aliases = bindings.aliases.len(),
        structs = bindings.structs.len(),
        tags = registry.len(),
        "header scanned"
    );
    Ok(bindings)
}

/// Prologue, generated aliases and classes, epilogue.
pub fn render(bindings: &Bindings, config: &GeneratorConfig) -> Result<String> {
    let mut cg = Codegen::new(config);
    cg.emit_all(bindings)?;

    let mut out = template::prologue(config);
    out.push_str(&cg.into_string());
    out.push_str(&template::epilogue(config));
    Ok(out)
}

/// Header text in, generated header text out.
pub fn generate(source: &str, config: &GeneratorConfig) -> Result<String> {
    let bindings = collect(source, config)?;
    render(&bindings, config)
}

// Consumes lines up to and including the first one holding a `}`.
fn read_body(
    name: &str,
    open_line: usize,
    lines: &mut LineScanner<'_>,
    patterns: &Patterns,
    registry: &mut TypeRegistry,
) -> Result<StructBody> {
    let mut body = StructBody {
        name: name.to_string(),
        line: open_line,
        ..StructBody::default()
    };
    loop {
        let Some(line) = lines.next_line() else {
            return Err(GenerateError::UnterminatedStruct {
                name: body.name,
                line: open_line,
            });
        };
        if let Some(enumerant) = patterns.enumerant(line.text) {
            register(registry, enumerant);
        }
        match patterns.body(line.text) {
            BodyLine::Close => return Ok(body),
            BodyLine::ChainLink => body.saw_chain_link = true,
            BodyLine::Field(field) => body.fields.push(field.to_string()),
            BodyLine::Other => {}
        }
    }
}

fn register(registry: &mut TypeRegistry, enumerant: Enumerant<'_>) {
    if registry.register(enumerant.name, enumerant.token) {
        debug!(name = enumerant.name, token = enumerant.token, "registered tag");
    }
}

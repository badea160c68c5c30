//! Minimal CLI: C header → C++ builder header
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser};
use tracing::info;

use crate::config::GeneratorConfig;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// generate fluent C++ builder wrappers for the structs declared in a C header
///
/// example: wgpu-hpp-gen webgpu-headers/webgpu.h include/wgpu.hpp
#[derive(Parser, Debug)]
#[command(name = "wgpu-hpp-gen")]
pub struct CommandLineInterface {
    /// input C header (e.g. webgpu.h)
    input: PathBuf,

    /// output header (stdout if omitted)
    output: Option<PathBuf>,

    #[command(flatten)]
    naming: NamingSettings,

    /// also write the classified model (aliases and structs) as JSON
    #[arg(long)]
    dump_model: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
struct NamingSettings {
    /// prefix of native struct and typedef names
    #[arg(long, default_value = "WGPU")]
    type_prefix: String,

    /// enumerant family that tags chained-struct subtypes
    #[arg(long, default_value = "WGPUSType")]
    stype_prefix: String,

    /// type of the `nextInChain` field that marks extensible structs
    #[arg(long, default_value = "WGPUChainedStruct")]
    chain_struct: String,

    /// namespace of the generated header
    #[arg(long, default_value = "wgpu")]
    namespace: String,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl NamingSettings {
    fn to_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            type_prefix: self.type_prefix.clone(),
            stype_prefix: self.stype_prefix.clone(),
            chain_struct: self.chain_struct.clone(),
            namespace: self.namespace.clone(),
        }
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }
    pub fn run(&self) -> Result<()> {
        let config = self.naming.to_config();
        let source = std::fs::read_to_string(&self.input)
            .with_context(|| format!("failed to read {}", self.input.display()))?;

        // 1) scan + classify
        let bindings = crate::driver::collect(&source, &config)
            .with_context(|| format!("failed to process {}", self.input.display()))?;

        // 2) render everything before touching the filesystem
        let header = crate::driver::render(&bindings, &config)?;
        let model = match self.dump_model.as_ref() {
            Some(_) => Some(serde_json::to_string_pretty(&bindings)?),
            None => None,
        };

        // 3) write
        if let Some(out) = self.output.as_ref() {
            write_file(out, &header)?;
            info!(path = %out.display(), bytes = header.len(), "wrote bindings");
        } else {
            print!("{header}");
        }
        if let (Some(path), Some(model)) = (self.dump_model.as_ref(), model) {
            write_file(path, &model)?;
            info!(path = %path.display(), "wrote model");
        }
        Ok(())
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))
}

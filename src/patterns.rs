//! Line-shape recognizers.
//!
//! Every test looks at one line in isolation. The only state is the compiled
//! regex set, which depends on the configured prefixes.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::GeneratorConfig;
use crate::error::Result;

static STRUCT_CLOSE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\}").unwrap());
static FIELD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\w+);").unwrap());

/// A line seen outside of any struct body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopLevelLine<'a> {
    /// `struct WGPUName {`
    StructOpen(&'a str),
    /// `typedef struct ... WGPUName;`
    TypedefAlias(&'a str),
    /// A line mentioning `WGPUSType_Name`.
    Enumerant(Enumerant<'a>),
}

/// `WGPUSType_Name` found somewhere on a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Enumerant<'a> {
    /// `Name`
    pub name: &'a str,
    /// `WGPUSType_Name`
    pub token: &'a str,
}

/// A line seen inside a struct body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyLine<'a> {
    Close,
    ChainLink,
    Field(&'a str),
    Other,
}

#[derive(Debug, Clone)]
pub struct Patterns {
    struct_open: Regex,
    chain_link: Regex,
    typedef_alias: Regex,
    enumerant: Regex,
}

impl Patterns {
    pub fn new(config: &GeneratorConfig) -> Result<Self> {
        let prefix = regex::escape(&config.type_prefix);
        let stype = regex::escape(&config.stype_prefix);
        let chain = regex::escape(&config.chain_struct);
        Ok(Self {
            struct_open: Regex::new(&format!(r"struct *{prefix}(\w+) *\{{"))?,
            chain_link: Regex::new(&format!(r"{chain} .* nextInChain;"))?,
            typedef_alias: Regex::new(&format!(r"typedef struct .*{prefix}(\w+);"))?,
            enumerant: Regex::new(&format!(r"{stype}_(\w+)"))?,
        })
    }

    /// Recognize a line outside any struct. Struct-open wins over
    /// typedef-alias, which wins over enumerant.
    pub fn top_level<'a>(&self, line: &'a str) -> Option<TopLevelLine<'a>> {
        if let Some(name) = self.struct_open(line) {
            return Some(TopLevelLine::StructOpen(name));
        }
        if let Some(name) = self.typedef_alias(line) {
            return Some(TopLevelLine::TypedefAlias(name));
        }
        self.enumerant(line).map(TopLevelLine::Enumerant)
    }

    /// Recognize a line inside a struct body. Any closing brace ends the body.
    pub fn body<'a>(&self, line: &'a str) -> BodyLine<'a> {
        if STRUCT_CLOSE.is_match(line) {
            BodyLine::Close
        } else if self.chain_link.is_match(line) {
            BodyLine::ChainLink
        } else if let Some(name) = field_name(line) {
            BodyLine::Field(name)
        } else {
            BodyLine::Other
        }
    }

    pub fn struct_open<'a>(&self, line: &'a str) -> Option<&'a str> {
        capture(&self.struct_open, line)
    }

    pub fn typedef_alias<'a>(&self, line: &'a str) -> Option<&'a str> {
        capture(&self.typedef_alias, line)
    }

    pub fn enumerant<'a>(&self, line: &'a str) -> Option<Enumerant<'a>> {
        let caps = self.enumerant.captures(line)?;
        Some(Enumerant {
            name: caps.get(1)?.as_str(),
            token: caps.get(0)?.as_str(),
        })
    }
}

/// First `identifier;` on the line. Only one declarator per line is supported.
pub fn field_name(line: &str) -> Option<&str> {
    capture(&FIELD, line)
}

fn capture<'a>(rx: &Regex, line: &'a str) -> Option<&'a str> {
    rx.captures(line).and_then(|c| c.get(1)).map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wgpu() -> Patterns {
        Patterns::new(&GeneratorConfig::default()).unwrap()
    }

    #[test]
    fn struct_open_yields_base_name() {
        let p = wgpu();
        assert_eq!(p.struct_open("typedef struct WGPUBufferDescriptor {"), Some("BufferDescriptor"));
        assert_eq!(p.struct_open("struct WGPUColor{"), Some("Color"));
        assert_eq!(p.struct_open("struct Foo {"), None);
        assert_eq!(p.struct_open("struct WGPUBufferDescriptor;"), None);
    }

    #[test]
    fn typedef_alias_takes_last_prefixed_name() {
        let p = wgpu();
        assert_eq!(
            p.typedef_alias("typedef struct WGPUAdapterImpl* WGPUAdapter;"),
            Some("Adapter")
        );
        assert_eq!(p.typedef_alias("typedef uint32_t WGPUFlags;"), None);
    }

    #[test]
    fn top_level_priority() {
        let p = wgpu();
        // struct-open wins even if an enumerant is present on the line
        assert_eq!(
            p.top_level("struct WGPUFoo { // WGPUSType_Foo"),
            Some(TopLevelLine::StructOpen("Foo"))
        );
        assert_eq!(
            p.top_level("    WGPUSType_ShaderModuleWGSLDescriptor = 0x00000006,"),
            Some(TopLevelLine::Enumerant(Enumerant {
                name: "ShaderModuleWGSLDescriptor",
                token: "WGPUSType_ShaderModuleWGSLDescriptor",
            }))
        );
        assert_eq!(p.top_level("#include <stdint.h>"), None);
    }

    #[test]
    fn body_lines() {
        let p = wgpu();
        assert_eq!(p.body("} WGPUFoo;"), BodyLine::Close);
        assert_eq!(p.body("    WGPUChainedStruct const * nextInChain;"), BodyLine::ChainLink);
        assert_eq!(p.body("    WGPUChainedStruct * nextInChain;"), BodyLine::ChainLink);
        // the Out variant is a plain field
        assert_eq!(
            p.body("    WGPUChainedStructOut * nextInChain;"),
            BodyLine::Field("nextInChain")
        );
        assert_eq!(p.body("    uint32_t entryCount;"), BodyLine::Field("entryCount"));
        assert_eq!(p.body("    // comment"), BodyLine::Other);
    }

    #[test]
    fn field_name_is_first_terminated_word() {
        assert_eq!(field_name("    WGPUTextureView const * view;"), Some("view"));
        assert_eq!(field_name("    int a; int b;"), Some("a"));
        assert_eq!(field_name("    int a, b"), None);
    }

    #[test]
    fn prefixes_are_escaped() {
        let cfg = GeneratorConfig {
            type_prefix: "W.".to_string(),
            ..GeneratorConfig::default()
        };
        let p = Patterns::new(&cfg).unwrap();
        assert_eq!(p.struct_open("struct W.Thing {"), Some("Thing"));
        assert_eq!(p.struct_open("struct WxThing {"), None);
    }
}

//! Render classified structs as builder declarations.
//!
//! Output is a list of macro invocations (`CLASS`, `SUBCLASS`, `DESCRIPTOR`,
//! `PROP`, `LIST`, `END`) whose definitions live in the template prologue.

use std::fmt::Write as FmtWrite;

use crate::config::GeneratorConfig;
use crate::ir::{Bindings, ClassifiedStruct, DeclShape};

pub struct Codegen<'a> {
    config: &'a GeneratorConfig,
    aliases: String,
    classes: String,
}

impl<'a> Codegen<'a> {
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config, aliases: String::new(), classes: String::new() }
    }

    /// `typedef WGPUName Name;`
    pub fn emit_alias(&mut self, name: &str) -> std::fmt::Result {
        writeln!(&mut self.aliases, "    typedef {}{name} {name};", self.config.type_prefix)
    }

    pub fn emit_class(&mut self, class: &ClassifiedStruct) -> std::fmt::Result {
        render_class(&mut self.classes, class)
    }

    pub fn emit_all(&mut self, bindings: &Bindings) -> std::fmt::Result {
        for alias in &bindings.aliases {
            self.emit_alias(alias)?;
        }
        for class in &bindings.structs {
            self.emit_class(class)?;
        }
        Ok(())
    }

    /// Alias block, a blank line, then the class blocks.
    pub fn into_string(self) -> String {
        let mut out = self.aliases;
        out.push('\n');
        out.push_str(&self.classes);
        out
    }
}

/// One class block, terminated by `END` and a blank line.
pub fn render_class(out: &mut String, class: &ClassifiedStruct) -> std::fmt::Result {
    let name = &class.name;
    match class.shape() {
        DeclShape::Descriptor => writeln!(out, "    DESCRIPTOR({name})")?,
        DeclShape::Subclass(tag) => writeln!(out, "    SUBCLASS({name}, {tag})")?,
        DeclShape::Class => writeln!(out, "    CLASS({name})")?,
    }
    // pointer and count are only ever set together
    for (list, count) in &class.list_properties {
        writeln!(out, "        LIST({list},{count})")?;
    }
    for prop in &class.regular_properties {
        writeln!(out, "        PROP({prop})")?;
    }
    writeln!(out, "    END")?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    fn class(name: &str, tag: Option<&str>, ext: bool, lists: &[(&str, &str)], props: &[&str]) -> ClassifiedStruct {
        ClassifiedStruct {
            name: name.to_string(),
            line: 1,
            is_extensible: ext,
            tag: tag.map(str::to_string),
            regular_properties: props.iter().map(|p| p.to_string()).collect(),
            list_properties: lists
                .iter()
                .map(|(l, c)| (l.to_string(), c.to_string()))
                .collect::<IndexMap<_, _>>(),
            dropped_counts: Vec::new(),
        }
    }

    #[test]
    fn plain_class_block() {
        let mut out = String::new();
        render_class(&mut out, &class("BlendComponent", None, false, &[], &["operation", "srcFactor"])).unwrap();
        assert_eq!(
            out,
            "    CLASS(BlendComponent)\n        PROP(operation)\n        PROP(srcFactor)\n    END\n\n"
        );
    }

    #[test]
    fn subclass_block_carries_enumerant() {
        let mut out = String::new();
        let c = class("ShaderModuleWGSLDescriptor", Some("WGPUSType_ShaderModuleWGSLDescriptor"), false, &[], &["code"]);
        render_class(&mut out, &c).unwrap();
        assert!(out.starts_with(
            "    SUBCLASS(ShaderModuleWGSLDescriptor, WGPUSType_ShaderModuleWGSLDescriptor)\n"
        ));
    }

    #[test]
    fn descriptor_lists_before_props() {
        let mut out = String::new();
        let c = class("BindGroupDescriptor", None, true, &[("entries", "entryCount")], &["label", "layout"]);
        render_class(&mut out, &c).unwrap();
        assert_eq!(
            out,
            "    DESCRIPTOR(BindGroupDescriptor)\n        LIST(entries,entryCount)\n        PROP(label)\n        PROP(layout)\n    END\n\n"
        );
    }

    #[test]
    fn aliases_precede_classes() {
        let cfg = GeneratorConfig::default();
        let bindings = Bindings {
            aliases: vec!["Adapter".to_string(), "Buffer".to_string()],
            structs: vec![class("Extent3D", None, false, &[], &["width"])],
        };
        let mut cg = Codegen::new(&cfg);
        cg.emit_all(&bindings).unwrap();
        assert_eq!(
            cg.into_string(),
            "    typedef WGPUAdapter Adapter;\n    typedef WGPUBuffer Buffer;\n\n    CLASS(Extent3D)\n        PROP(width)\n    END\n\n"
        );
    }
}

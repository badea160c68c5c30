// Strongly-typed model of the header for codegen. No raw lines past this point.

use indexmap::IndexMap;
use serde::Serialize;

/// Field names gathered from one struct body, before any role is assigned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructBody {
    pub name: String,
    pub line: usize,             // 1-based line of the opening declaration
    pub fields: Vec<String>,     // declaration order, chain link excluded
    pub saw_chain_link: bool,
}

/// Which builder declaration a struct gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclShape<'a> {
    /// `CLASS(Name)`
    Class,
    /// `SUBCLASS(Name, WGPUSType_Name)`
    Subclass(&'a str),
    /// `DESCRIPTOR(Name)`
    Descriptor,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedStruct {
    pub name: String,
    pub line: usize,
    pub is_extensible: bool,
    pub tag: Option<String>,                        // registered enumerant, if any
    pub regular_properties: Vec<String>,            // declaration order
    pub list_properties: IndexMap<String, String>,  // list field → count field
    pub dropped_counts: Vec<String>,                // count fields nothing paired with
}

impl ClassifiedStruct {
    pub fn is_tagged(&self) -> bool {
        self.tag.is_some()
    }

    /// Descriptor beats subclass beats plain class.
    pub fn shape(&self) -> DeclShape<'_> {
        match (&self.tag, self.is_extensible) {
            (_, true) => DeclShape::Descriptor,
            (Some(tag), false) => DeclShape::Subclass(tag),
            (None, false) => DeclShape::Class,
        }
    }
}

/// Everything gathered in one pass, in encounter order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Bindings {
    pub aliases: Vec<String>,
    pub structs: Vec<ClassifiedStruct>,
}

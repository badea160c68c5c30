//! Naming conventions of the header being wrapped.

/// Knobs that describe the input header's naming scheme.
///
/// The defaults match `webgpu.h`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Prefix stripped from native struct and typedef names (`WGPUBufferDescriptor` → `BufferDescriptor`).
    pub type_prefix: String,
    /// Enumerant family marking chained-struct subtypes (`WGPUSType_Foo`).
    pub stype_prefix: String,
    /// Type of the `nextInChain` field that makes a struct extensible.
    pub chain_struct: String,
    /// Namespace the generated header lives in.
    pub namespace: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            type_prefix: "WGPU".to_string(),
            stype_prefix: "WGPUSType".to_string(),
            chain_struct: "WGPUChainedStruct".to_string(),
            namespace: "wgpu".to_string(),
        }
    }
}

//! Fixed text framing the generated body, and the structs that are written by
//! hand instead of derived from the header.

use crate::config::GeneratorConfig;

// Shape macros. `@PREFIX@`, `@CHAIN@` and `@NAMESPACE@` are filled from the config.
const PROLOGUE_HEAD: &str = r#"
//-----------------------------------
// https://github.com/pplux/wgpu.hpp
//-----------------------------------
#pragma once

#ifndef WEBGPU_H_
#error "You must include the WEBGPU header before this one"
#endif

#include <type_traits>

namespace @NAMESPACE@ {

    #define BASIC_CLASS(Type) \
        struct Type : public @PREFIX@ ## Type{ \
            typedef Type S; /* S == Self */ \
            typedef @PREFIX@ ## Type W; /* W == @PREFIX@ Type */ \
            operator const W*() const { return this; } \
    
    #define CLASS(Type) \
        BASIC_CLASS(Type) \
        Type() : W() {} \

    #define SUBCLASS(Type, WGPUSType_value) \
        BASIC_CLASS(Type) \
        Type() : W({nullptr, WGPUSType_value}) {} \

    #define DESCRIPTOR(Type) \
        BASIC_CLASS(Type) \
        Type() : W() {} \
        template<class T> \
        S& nextInChain(const T *obj) \
        { \
            W::nextInChain = (const @CHAIN@*) &(obj->chain); \
            return *this; \
        }\
        template<class T> \
        S& nextInChain(const T &obj) { return nextInChain(&obj); }


    #define PROP(Name) \
        S& Name(decltype(W::Name) arg) { W::Name = arg; return *this; }\

    #define LIST(List, Count) \
        template<size_t N> \
        S& List(std::remove_cv_t<std::remove_pointer_t<decltype(W::List)>> const (&args)[N]) { \
            W::Count = (decltype(W::Count)) N; \
            W::List = args; \
            return *this; \
        } \

    #define END };

"#;

const EPILOGUE: &str = r#"
    #undef CLASS
    #undef SUBCLASS
    #undef DESCRIPTOR
    #undef END
    #undef PROP
} // end @NAMESPACE@ namespace
"#;

const COLOR: &str = "    CLASS(Color)
        PROP(r)
        PROP(g)
        PROP(b)
        PROP(a)
        Color(double r, double g, double b, double a = 1.0) : \n            W({r,g,b,a}){}
    END

";

const ORIGIN_3D: &str = "    CLASS(Origin3D)
        PROP(x)
        PROP(y)
        PROP(z)
        Origin3D(uint32_t x = 0.0, uint32_t y = 0.0, uint32_t z = 0.0) : \n            W({x,y,z}){}
    END

";

/// What to do with a struct instead of classifying it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandAuthored {
    /// Emit this fixed declaration in the prologue.
    Manual(&'static str),
    /// Emit nothing.
    Skip,
}

/// Consulted before any struct is classified. Order is prologue order.
pub const HAND_AUTHORED: &[(&str, HandAuthored)] = &[
    ("Color", HandAuthored::Manual(COLOR)),
    ("Origin3D", HandAuthored::Manual(ORIGIN_3D)),
];

pub fn hand_authored(name: &str) -> Option<HandAuthored> {
    HAND_AUTHORED
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, entry)| *entry)
}

pub fn prologue(config: &GeneratorConfig) -> String {
    let mut out = fill(PROLOGUE_HEAD, config);
    out.push_str("    // Manually Generated\n");
    for (_, entry) in HAND_AUTHORED {
        if let HandAuthored::Manual(text) = entry {
            out.push_str(text);
        }
    }
    out.push_str("    // Automatically generated\n");
    out
}

pub fn epilogue(config: &GeneratorConfig) -> String {
    fill(EPILOGUE, config)
}

fn fill(text: &str, config: &GeneratorConfig) -> String {
    text.replace("@PREFIX@", &config.type_prefix)
        .replace("@CHAIN@", &config.chain_struct)
        .replace("@NAMESPACE@", &config.namespace)
}

//! CSS engine: stylesheet tokenizer and parser, value tokenizer, unit
//! normalization, property expansion, rule merging.

pub mod tokenizer;
pub mod model;
pub mod parser;
pub mod values;
pub mod scalar;
pub mod color;
pub mod naming;
pub mod style;
pub mod properties;
pub mod stylesheet;

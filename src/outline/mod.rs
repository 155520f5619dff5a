// Official topic outline: line classification and hierarchy parsing.

pub mod model;
pub mod parser;
pub mod rules;

pub use model::{GradeLevel, GradeOutline, Outline, Section, Topic};
pub use parser::{parse, OutlineParser};

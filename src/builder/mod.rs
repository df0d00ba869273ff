/// Per-call SQL assembly from the fragments of a buildable statement.
pub mod assembler;
/// Quoted identifier interpolation into SQL text.
pub mod identifiers;

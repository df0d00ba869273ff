/// Call-time arguments and execution results.
pub mod call;
/// Database cursor interface and bound value types.
pub mod cursor;
/// Per-kind execution strategies.
pub mod executor;
/// Named registry of prepared statements.
pub mod registry;

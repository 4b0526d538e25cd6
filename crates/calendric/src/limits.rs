//! Hard limits applied during format compilation.
//!
//! Composite symbols expand by recursively compiling a fixed equivalent
//! sub-format. The depth guard bounds that recursion so a pathological
//! symbol table cannot loop forever.

/// Maximum nesting depth of composite-symbol sub-format expansion.
pub const MAX_SUBFORMAT_DEPTH: usize = 8;

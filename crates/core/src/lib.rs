pub mod combined;
pub mod dictionary;
pub mod matcher;
pub mod merge;
pub mod normalize;
pub mod options;
pub mod output;
pub mod rules;
pub mod shorthand;
pub mod types;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use dictionary::{DictionaryLookup, CLASS_NAMESPACE};
pub use matcher::{translate, try_match_classes};
pub use merge::merge_declarations;
pub use options::{MatchOptions, ResidualPolicy};
pub use output::{format_classes, format_residual, render_slot, OutputSlot};
pub use types::{
    Declaration, DeclarationSet, Diagnostic, DiagnosticLevel, MatchResult, RuleSet, RuleSetEntry,
};

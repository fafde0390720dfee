mod identifier;
mod rules;

pub use identifier::{Identifier, Registry};
pub use rules::{IdentifierKind, IdentifierRule, IdentifierRules};

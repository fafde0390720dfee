//! Identifier classification
//!
//! An incoming identifier string is classified by an ordered list of
//! (pattern, kind) rules. The first matching rule decides the kind; strings
//! no rule matches belong to the fallback registry.

use super::Registry;
use regex::Regex;
use std::sync::LazyLock;

/// What an identifier string denotes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentifierKind {
    /// Already a canonical entity ID
    EntityId,
    /// A value to look up in the given registry
    Registry(Registry),
}

/// One classification rule
#[derive(Debug, Clone)]
pub struct IdentifierRule {
    pattern: Regex,
    kind: IdentifierKind,
}

impl IdentifierRule {
    pub fn new(pattern: Regex, kind: IdentifierKind) -> Self {
        Self { pattern, kind }
    }

    pub fn matches(&self, id: &str) -> bool {
        self.pattern.is_match(id)
    }

    pub fn kind(&self) -> IdentifierKind {
        self.kind
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

/// Ordered rule list, evaluated in priority order
#[derive(Debug, Clone)]
pub struct IdentifierRules {
    rules: Vec<IdentifierRule>,
    fallback: Registry,
}

static STANDARD_RULES: LazyLock<IdentifierRules> = LazyLock::new(|| {
    let rule = |pattern: &str, kind| {
        IdentifierRule::new(
            Regex::new(pattern).expect("identifier pattern is valid"),
            kind,
        )
    };
    IdentifierRules::new(
        vec![
            rule(
                r"^[a-f0-9]{8}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{12}$",
                IdentifierKind::EntityId,
            ),
            rule(
                r"^0[a-z0-9]{6}[0-9]{2}$",
                IdentifierKind::Registry(Registry::Ror),
            ),
            rule(r"^Q[0-9]+$", IdentifierKind::Registry(Registry::Wikidata)),
        ],
        Registry::Custom,
    )
});

impl IdentifierRules {
    pub fn new(rules: Vec<IdentifierRule>, fallback: Registry) -> Self {
        Self { rules, fallback }
    }

    /// UUID, then ROR, then Wikidata; everything else is a custom identifier.
    pub fn standard() -> &'static IdentifierRules {
        &STANDARD_RULES
    }

    /// Kind of the first rule matching `id`, or the fallback registry.
    pub fn classify(&self, id: &str) -> IdentifierKind {
        self.rules
            .iter()
            .find(|rule| rule.matches(id))
            .map(IdentifierRule::kind)
            .unwrap_or(IdentifierKind::Registry(self.fallback))
    }

    pub fn rules(&self) -> &[IdentifierRule] {
        &self.rules
    }

    pub fn fallback(&self) -> Registry {
        self.fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_classification() {
        let rules = IdentifierRules::standard();
        assert_eq!(
            rules.classify("6f1c2b8e-0a57-4d43-9a4b-3c0e5b3f1a22"),
            IdentifierKind::EntityId
        );
        assert_eq!(
            rules.classify("012abc345"),
            IdentifierKind::Registry(Registry::Ror)
        );
        assert_eq!(
            rules.classify("Q1065"),
            IdentifierKind::Registry(Registry::Wikidata)
        );
        assert_eq!(
            rules.classify("not-a-known-id"),
            IdentifierKind::Registry(Registry::Custom)
        );
    }

    #[test]
    fn test_near_misses_fall_back_to_custom() {
        let rules = IdentifierRules::standard();
        // Uppercase UUIDs are not canonical entity IDs
        assert_eq!(
            rules.classify("6F1C2B8E-0A57-4D43-9A4B-3C0E5B3F1A22"),
            IdentifierKind::Registry(Registry::Custom)
        );
        // ROR IDs start with 0 and end with two digits
        assert_eq!(
            rules.classify("112abc345"),
            IdentifierKind::Registry(Registry::Custom)
        );
        assert_eq!(
            rules.classify("012abc34x"),
            IdentifierKind::Registry(Registry::Custom)
        );
        assert_eq!(
            rules.classify("q1065"),
            IdentifierKind::Registry(Registry::Custom)
        );
    }

    #[test]
    fn test_first_match_wins() {
        let rules = IdentifierRules::new(
            vec![
                IdentifierRule::new(
                    Regex::new("^Q").unwrap(),
                    IdentifierKind::Registry(Registry::Custom),
                ),
                IdentifierRule::new(
                    Regex::new(r"^Q[0-9]+$").unwrap(),
                    IdentifierKind::Registry(Registry::Wikidata),
                ),
            ],
            Registry::Ror,
        );
        assert_eq!(
            rules.classify("Q42"),
            IdentifierKind::Registry(Registry::Custom)
        );
        assert_eq!(rules.classify("abc"), IdentifierKind::Registry(Registry::Ror));
    }

    #[test]
    fn test_standard_rule_order() {
        let kinds: Vec<_> = IdentifierRules::standard()
            .rules()
            .iter()
            .map(IdentifierRule::kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                IdentifierKind::EntityId,
                IdentifierKind::Registry(Registry::Ror),
                IdentifierKind::Registry(Registry::Wikidata),
            ]
        );
        assert_eq!(IdentifierRules::standard().fallback(), Registry::Custom);

        let ror = &IdentifierRules::standard().rules()[1];
        assert_eq!(ror.pattern(), "^0[a-z0-9]{6}[0-9]{2}$");
        assert!(ror.matches("012abc345"));
    }
}

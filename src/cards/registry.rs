//! Card registry for template lookup.
//!
//! The battle never reaches for a global card table. It is handed a
//! `&dyn CardCatalog` and resolves templates (including the mirror effect's
//! "last played card") through it.

use rustc_hash::FxHashMap;

use super::definition::{CardCategory, CardId, CardTemplate};
use super::instance::CardInstance;
use crate::core::{CatalogError, InstanceId};

/// Read-only template lookup.
pub trait CardCatalog {
    /// Template by id.
    fn template(&self, id: CardId) -> Option<&CardTemplate>;

    /// Template by content key.
    fn template_by_key(&self, key: &str) -> Option<&CardTemplate>;
}

/// Registry of card templates.
///
/// ## Example
///
/// ```
/// use quiz_battle::cards::{CardCatalog, CardCategory, CardRegistry, CardTemplate};
///
/// let mut registry = CardRegistry::new();
/// let id = registry
///     .register(CardTemplate::new("slash", "Slash", CardCategory::Attack, 1).with_damage(6))
///     .unwrap();
///
/// assert_eq!(registry.template(id).unwrap().name, "Slash");
/// assert!(registry.lookup("fireball").is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, CardTemplate>,
    by_key: FxHashMap<String, CardId>,
    next_id: u32,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: 1,
            ..Self::default()
        }
    }

    /// Register a template and assign it a fresh id.
    pub fn register(&mut self, mut template: CardTemplate) -> Result<CardId, CatalogError> {
        if self.by_key.contains_key(&template.key) {
            return Err(CatalogError::DuplicateCard(template.key));
        }

        let id = CardId::new(self.next_id.max(1));
        self.next_id = id.raw() + 1;
        template.id = id;

        self.by_key.insert(template.key.clone(), id);
        self.cards.insert(id, template);
        Ok(id)
    }

    /// Template by key, failing loudly on a miss.
    pub fn lookup(&self, key: &str) -> Result<&CardTemplate, CatalogError> {
        self.template_by_key(key)
            .ok_or_else(|| CatalogError::UnknownCard(key.to_string()))
    }

    /// Instantiate a template into a deck copy.
    pub fn instantiate(&self, key: &str, id: InstanceId) -> Result<CardInstance, CatalogError> {
        self.lookup(key).map(|template| CardInstance::new(id, template))
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.by_key.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all templates in id order.
    pub fn iter(&self) -> impl Iterator<Item = &CardTemplate> {
        let mut cards: Vec<_> = self.cards.values().collect();
        cards.sort_by_key(|c| c.id);
        cards.into_iter()
    }

    /// Find templates by category.
    pub fn find_by_category(&self, category: CardCategory) -> impl Iterator<Item = &CardTemplate> {
        self.iter().filter(move |c| c.category == category)
    }
}

impl CardCatalog for CardRegistry {
    fn template(&self, id: CardId) -> Option<&CardTemplate> {
        self.cards.get(&id)
    }

    fn template_by_key(&self, key: &str) -> Option<&CardTemplate> {
        self.by_key.get(key).and_then(|id| self.cards.get(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> CardRegistry {
        let mut registry = CardRegistry::new();
        registry
            .register(CardTemplate::new("slash", "Slash", CardCategory::Attack, 1).with_damage(6))
            .unwrap();
        registry
            .register(CardTemplate::new("shield", "Shield", CardCategory::Defense, 1).with_block(5))
            .unwrap();
        registry
    }

    #[test]
    fn test_register_assigns_ids() {
        let registry = registry();
        let slash = registry.lookup("slash").unwrap();
        let shield = registry.lookup("shield").unwrap();

        assert_eq!(slash.id, CardId::new(1));
        assert_eq!(shield.id, CardId::new(2));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let mut registry = registry();
        let err = registry
            .register(CardTemplate::new("slash", "Other Slash", CardCategory::Attack, 0))
            .unwrap_err();
        assert_eq!(err, CatalogError::DuplicateCard("slash".into()));
    }

    #[test]
    fn test_unknown_key_is_error() {
        let registry = registry();
        assert_eq!(
            registry.instantiate("meteor", InstanceId(1)).unwrap_err(),
            CatalogError::UnknownCard("meteor".into())
        );
    }

    #[test]
    fn test_instantiate() {
        let registry = registry();
        let card = registry.instantiate("shield", InstanceId(9)).unwrap();
        assert_eq!(card.id, InstanceId(9));
        assert_eq!(card.stats().block, 5);
    }

    #[test]
    fn test_find_by_category() {
        let registry = registry();
        let defense: Vec<_> = registry.find_by_category(CardCategory::Defense).collect();
        assert_eq!(defense.len(), 1);
        assert_eq!(defense[0].key, "shield");
    }

    #[test]
    fn test_catalog_trait_object() {
        let registry = registry();
        let catalog: &dyn CardCatalog = &registry;
        assert!(catalog.template(CardId::new(1)).is_some());
        assert!(catalog.template(CardId::new(99)).is_none());
    }
}

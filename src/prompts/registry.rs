use std::collections::HashMap;
use std::sync::Arc;

use crate::core::prompt::{PromptArgumentSpec, PromptTemplate};

/// Immutable name → prompt map, mirroring the tool registry.
#[derive(Clone)]
pub struct PromptRegistry {
    by_name: Arc<HashMap<&'static str, Arc<dyn PromptTemplate>>>,
}

impl PromptRegistry {
    pub fn with_prompts<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn PromptTemplate>>,
    {
        let mut map: HashMap<&'static str, Arc<dyn PromptTemplate>> = HashMap::new();
        for p in iter {
            map.insert(p.name(), p);
        }
        Self { by_name: Arc::new(map) }
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn PromptTemplate>> {
        self.by_name.get(name)
    }

    pub fn list(&self) -> Vec<PromptMeta> {
        self.by_name
            .values()
            .map(|p| PromptMeta {
                name: p.name(),
                description: p.description(),
                arguments: p.arguments(),
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptMeta {
    pub name: &'static str,
    pub description: &'static str,
    pub arguments: Vec<PromptArgumentSpec>,
}

use std::collections::HashMap;
use std::sync::Arc;

use crate::core::tool::Tool;

/// Immutable name → tool map, built once in bootstrap and passed by value.
#[derive(Clone)]
pub struct ToolRegistry {
    by_name: Arc<HashMap<&'static str, Arc<dyn Tool>>>,
}

impl ToolRegistry {
    pub fn with_tools<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn Tool>>,
    {
        let mut map: HashMap<&'static str, Arc<dyn Tool>> = HashMap::new();
        for t in iter {
            map.insert(t.name(), t);
        }
        Self { by_name: Arc::new(map) }
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.by_name.get(name)
    }

    pub fn list(&self) -> Vec<ToolMeta> {
        self.by_name
            .values()
            .map(|t| ToolMeta {
                name: t.name(),
                description: t.description(),
                input_schema: t.input_schema(),
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolMeta {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::CannedWeather;
    use crate::tools::weather::GetWeatherTool;

    fn registry() -> ToolRegistry {
        let tool: Arc<dyn Tool> = Arc::new(GetWeatherTool::new(Arc::new(CannedWeather)));
        ToolRegistry::with_tools([tool])
    }

    #[test]
    fn registry_lists_get_weather() {
        let metas = registry().list();
        assert_eq!(metas.len(), 1);
        assert_eq!(metas[0].name, "get_weather");
        assert!(metas[0].input_schema["properties"]["city"].is_object());
    }

    #[test]
    fn registry_lookup_by_name() {
        let reg = registry();
        assert!(reg.get("get_weather").is_some());
        assert!(reg.get("does.not.exist").is_none());
    }
}

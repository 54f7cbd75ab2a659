use crate::types::Model;
use once_cell::sync::Lazy;

static BUILT_IN_MODELS: Lazy<Vec<Model>> = Lazy::new(|| {
    vec![
        Model::built_in("gemini-pro", "Gemini Pro"),
        Model::built_in("gemini-pro-vision", "Gemini Pro Vision"),
        Model::built_in("gemini-ultra", "Gemini Ultra"),
    ]
});

/// Release label shown beside a built-in model's name.
pub fn model_version(id: &str) -> Option<&'static str> {
    match id {
        "gemini-pro" => Some("1.5 Flash"),
        "gemini-pro-vision" => Some("1.5 Vision"),
        "gemini-ultra" => Some("2.0 Ultra"),
        _ => None,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ModelRegistry {
    models: Vec<Model>,
    selected: Model,
}

impl Default for ModelRegistry {
    fn default() -> Self {
        let models = BUILT_IN_MODELS.clone();
        let selected = models[0].clone();
        Self { models, selected }
    }
}

impl ModelRegistry {
    pub fn models(&self) -> &[Model] {
        &self.models
    }

    pub fn selected(&self) -> &Model {
        &self.selected
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.id == id
    }

    /// Unknown ids leave the current selection in place.
    pub fn select(&mut self, id: &str) -> bool {
        match self.models.iter().find(|model| model.id == id) {
            Some(model) => {
                self.selected = model.clone();
                true
            }
            None => {
                tracing::debug!(id, "ignoring selection of unknown model");
                false
            }
        }
    }

    pub fn add_custom(&mut self, mut model: Model) {
        model.is_custom = true;
        self.models.push(model);
    }

    pub fn search(&self, query: &str) -> Vec<&Model> {
        let needle = query.trim().to_lowercase();
        self.models
            .iter()
            .filter(|model| needle.is_empty() || model.name.to_lowercase().contains(&needle))
            .collect()
    }
}

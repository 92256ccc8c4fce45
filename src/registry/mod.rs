use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

/// One named direction of translation a finetuned model supports. The tag is
/// what the prompt engine appends after the input text.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TranslationDirection {
    pub id: &'static str,
    pub label: &'static str,
    pub lang_tag: &'static str,
}

/// How a model may be driven by the caller. Defined once at process start and
/// only ever read; unknown model ids resolve to [`DEFAULT_BEHAVIOR`].
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ModelBehavior {
    /// Caller picks the task freely.
    pub task_selector: bool,
    /// Forced task; overrides whatever the caller selected.
    pub pinned_task: Option<&'static str>,
    /// Caller picks a target language.
    pub language_selector: bool,
    /// Fixed translation directions instead of a free language choice.
    pub directions: Option<&'static [TranslationDirection]>,
    /// Model consumes raw text with no control tokens at all.
    pub passthrough: bool,
}

pub static DEFAULT_BEHAVIOR: ModelBehavior = ModelBehavior {
    task_selector: true,
    pinned_task: None,
    language_selector: true,
    directions: None,
    passthrough: false,
};

const PINNED: ModelBehavior = ModelBehavior {
    task_selector: false,
    pinned_task: None,
    language_selector: false,
    directions: None,
    passthrough: false,
};

static IGBO_DIRECTIONS: &[TranslationDirection] = &[
    TranslationDirection {
        id: "english-to-igbo",
        label: "English → Igbo",
        lang_tag: "<ibo>",
    },
    TranslationDirection {
        id: "igbo-to-english",
        label: "Igbo → English",
        lang_tag: "<eng>",
    },
];

static YORUBA_DIRECTIONS: &[TranslationDirection] = &[
    TranslationDirection {
        id: "english-to-yoruba",
        label: "English → Yoruba",
        lang_tag: "<yor>",
    },
    TranslationDirection {
        id: "yoruba-to-english",
        label: "Yoruba → English",
        lang_tag: "<eng>",
    },
];

static BEHAVIORS: Lazy<HashMap<&'static str, ModelBehavior>> = Lazy::new(build_behaviors);

fn build_behaviors() -> HashMap<&'static str, ModelBehavior> {
    let mut map = HashMap::new();

    map.insert(
        "sabiyarn-translate",
        ModelBehavior {
            pinned_task: Some("Translation"),
            language_selector: true,
            ..PINNED
        },
    );
    map.insert(
        "sabiyarn-sentiment",
        ModelBehavior {
            pinned_task: Some("Sentiment Classification"),
            ..PINNED
        },
    );
    map.insert(
        "sabiyarn-topic",
        ModelBehavior {
            pinned_task: Some("Topic Classification"),
            ..PINNED
        },
    );
    map.insert(
        "sabiyarn-diacritize",
        ModelBehavior {
            pinned_task: Some("Text Diacritization"),
            language_selector: true,
            ..PINNED
        },
    );
    map.insert(
        "sabiyarn-igbo-translate",
        ModelBehavior {
            pinned_task: Some("Translation"),
            directions: Some(IGBO_DIRECTIONS),
            ..PINNED
        },
    );
    map.insert(
        "sabiyarn-yoruba-translate",
        ModelBehavior {
            pinned_task: Some("Translation"),
            directions: Some(YORUBA_DIRECTIONS),
            ..PINNED
        },
    );
    map.insert(
        "sabiyarn-language-detection",
        ModelBehavior {
            passthrough: true,
            ..PINNED
        },
    );

    map
}

/// Look up how a model wants to be driven. Unrecognized ids get the permissive
/// default so new deployments work without a registry edit.
pub fn behavior_for(model_id: &str) -> &'static ModelBehavior {
    BEHAVIORS.get(model_id).unwrap_or(&DEFAULT_BEHAVIOR)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelTier {
    Pretrained,
    Finetuned,
    Capable,
}

/// Catalog entry: public id, display name and the HuggingFace repo the replicas
/// serve it from.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ModelEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub repo: &'static str,
    pub tier: ModelTier,
}

pub const MODELS: &[ModelEntry] = &[
    ModelEntry {
        id: "sabiyarn-125m",
        name: "SabiYarn 125M",
        repo: "BeardedMonster/SabiYarn-125M",
        tier: ModelTier::Pretrained,
    },
    ModelEntry {
        id: "sabiyarn-finetune",
        name: "SabiYarn Finetune",
        repo: "BeardedMonster/SabiYarn-125M-finetune",
        tier: ModelTier::Finetuned,
    },
    ModelEntry {
        id: "sabiyarn-translate",
        name: "SabiYarn Translate",
        repo: "BeardedMonster/SabiYarn-125M-translate",
        tier: ModelTier::Finetuned,
    },
    ModelEntry {
        id: "sabiyarn-sentiment",
        name: "SabiYarn Sentiment",
        repo: "BeardedMonster/SabiYarn-125M-sentiment",
        tier: ModelTier::Finetuned,
    },
    ModelEntry {
        id: "sabiyarn-topic",
        name: "SabiYarn Topic",
        repo: "BeardedMonster/SabiYarn-125M-topic",
        tier: ModelTier::Finetuned,
    },
    ModelEntry {
        id: "sabiyarn-diacritize",
        name: "SabiYarn Diacritics Cleaner",
        repo: "BeardedMonster/SabiYarn-diacritics-cleaner",
        tier: ModelTier::Finetuned,
    },
    ModelEntry {
        id: "sabiyarn-igbo-translate",
        name: "SabiYarn Igbo Translate",
        repo: "BeardedMonster/SabiYarn-125M-Igbo-translate",
        tier: ModelTier::Finetuned,
    },
    ModelEntry {
        id: "sabiyarn-yoruba-translate",
        name: "SabiYarn Yoruba Translate",
        repo: "BeardedMonster/SabiYarn-125M-Yoruba-translate",
        tier: ModelTier::Finetuned,
    },
    ModelEntry {
        id: "sabiyarn-language-detection",
        name: "SabiYarn Language Detection",
        repo: "BeardedMonster/Sabiyarn_language_detection",
        tier: ModelTier::Finetuned,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_model_gets_default_behavior() {
        let behavior = behavior_for("sabiyarn-brand-new");
        assert!(behavior.task_selector);
        assert!(behavior.language_selector);
        assert!(behavior.pinned_task.is_none());
        assert!(behavior.directions.is_none());
        assert!(!behavior.passthrough);
    }

    #[test]
    fn translate_model_pins_translation() {
        let behavior = behavior_for("sabiyarn-translate");
        assert_eq!(behavior.pinned_task, Some("Translation"));
        assert!(!behavior.task_selector);
        assert!(behavior.language_selector);
    }

    #[test]
    fn sentiment_model_hides_language_selector() {
        let behavior = behavior_for("sabiyarn-sentiment");
        assert_eq!(behavior.pinned_task, Some("Sentiment Classification"));
        assert!(!behavior.language_selector);
    }

    #[test]
    fn direction_models_expose_both_directions() {
        let behavior = behavior_for("sabiyarn-igbo-translate");
        let directions = behavior.directions.expect("igbo model has directions");
        assert_eq!(directions.len(), 2);
        assert_eq!(directions[0].lang_tag, "<ibo>");
        assert_eq!(directions[1].lang_tag, "<eng>");
    }

    #[test]
    fn detection_model_is_passthrough() {
        assert!(behavior_for("sabiyarn-language-detection").passthrough);
    }

    #[test]
    fn every_cataloged_model_resolves_to_a_behavior() {
        for entry in MODELS {
            // Must not panic, and pinned models must pin a real task name.
            let behavior = behavior_for(entry.id);
            if let Some(task) = behavior.pinned_task {
                assert!(!task.is_empty());
            }
        }
    }
}

use crate::registry;

/// Sentinel the frontend sends while a dropdown is untouched. Treated as "no
/// constraint": the text goes out unwrapped rather than being rejected.
pub const UNSET: &str = "select";

const PLACEHOLDER: &str = "{}";

/// Task name → wire template. Each template carries exactly one `{}` insertion
/// point; the control tokens around it are what the SabiYarn checkpoints were
/// trained on.
const TASK_TEMPLATES: &[(&str, &str)] = &[
    ("select", "{}"),
    ("Text Generation", "{}"),
    ("Translation", "<translate> {} "),
    ("Sentiment Classification", "<classify> {} <sentiment>:"),
    ("Topic Classification", "<classify> {} <topic>"),
    ("Simple Instruction Following", "<prompt> {} <response>:"),
    ("Headline Generation", "<title> {} <headline>"),
    ("Question Generation", "<prompt> {} <response>:"),
    ("Question-Answering", "<prompt> {} <response>:"),
    ("Text Summarization", "<summarize> {} <summary>:"),
    ("Text Cleaning", "<clean> {} "),
    ("Text Diacritization", "<diacritize> {} "),
];

const LANGUAGE_TAGS: &[(&str, &str)] = &[
    ("select", ""),
    ("Yoruba", "<yor>"),
    ("Hausa", "<hau>"),
    ("Ibo", "<ibo>"),
    ("Pidgin", "<pcm>"),
    ("English", "<eng>"),
    ("Efik", "<efi>"),
    ("Urhobo", "<urh>"),
    ("Fulah", "<ful>"),
];

/// Tasks whose template wants the target-language tag appended after the text.
const LANGUAGE_TASKS: &[&str] = &["Translation", "Text Diacritization", "Text Cleaning"];

fn template_for(task: &str) -> &'static str {
    TASK_TEMPLATES
        .iter()
        .find(|(name, _)| *name == task)
        .map(|(_, template)| *template)
        .unwrap_or(PLACEHOLDER)
}

fn language_tag(language: &str) -> &'static str {
    LANGUAGE_TAGS
        .iter()
        .find(|(name, _)| *name == language)
        .map(|(_, tag)| *tag)
        .unwrap_or("")
}

fn is_language_task(task: &str) -> bool {
    LANGUAGE_TASKS.contains(&task)
}

fn apply(template: &str, insertion: &str) -> String {
    template.replacen(PLACEHOLDER, insertion, 1)
}

/// Wrap raw input text into the wire-format prompt for one model.
///
/// Resolution order: the model's pinned task beats the caller's selection; an
/// explicit translation-direction table beats a free language choice; language
/// tasks get the tag appended after the text inside the template; and task-less
/// models (pure detection) receive the text untouched. Missing selections are
/// never an error here — they resolve to the empty tag or bare template, and the
/// caller decides whether that is submittable.
pub fn build_prompt(
    model_id: &str,
    task: &str,
    language: &str,
    direction: Option<&str>,
    text: &str,
) -> String {
    let behavior = registry::behavior_for(model_id);

    if behavior.passthrough {
        return text.to_string();
    }

    let task = behavior.pinned_task.unwrap_or(task);

    if let Some(directions) = behavior.directions {
        let tag = direction
            .and_then(|id| directions.iter().find(|d| d.id == id))
            .map(|d| d.lang_tag)
            .unwrap_or("");
        return apply(template_for("Translation"), &format!("{text} {tag}"));
    }

    if is_language_task(task) {
        let tag = language_tag(language);
        apply(template_for(task), &format!("{text} {tag}"))
    } else {
        apply(template_for(task), text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_with_language_appends_tag() {
        let prompt = build_prompt("sabiyarn-translate", UNSET, "Yoruba", None, "how are you");
        assert_eq!(prompt, "<translate> how are you <yor> ");
    }

    #[test]
    fn sentiment_pin_overrides_caller_task() {
        let prompt = build_prompt(
            "sabiyarn-sentiment",
            "Text Generation",
            UNSET,
            None,
            "Anyi na-echefu oke ike.",
        );
        assert_eq!(prompt, "<classify> Anyi na-echefu oke ike. <sentiment>:");
    }

    #[test]
    fn free_model_uses_caller_task() {
        let prompt = build_prompt(
            "sabiyarn-125m",
            "Text Summarization",
            UNSET,
            None,
            "a long story",
        );
        assert_eq!(prompt, "<summarize> a long story <summary>:");
    }

    #[test]
    fn direction_model_resolves_direction_tag() {
        let prompt = build_prompt(
            "sabiyarn-igbo-translate",
            UNSET,
            "Hausa",
            Some("english-to-igbo"),
            "good morning",
        );
        // Free language choice is ignored when directions are declared.
        assert_eq!(prompt, "<translate> good morning <ibo> ");
    }

    #[test]
    fn reverse_direction_uses_english_tag() {
        let prompt = build_prompt(
            "sabiyarn-yoruba-translate",
            UNSET,
            UNSET,
            Some("yoruba-to-english"),
            "bawo ni",
        );
        assert_eq!(prompt, "<translate> bawo ni <eng> ");
    }

    #[test]
    fn detection_model_passes_text_through() {
        let prompt = build_prompt(
            "sabiyarn-language-detection",
            "Translation",
            "Yoruba",
            None,
            "wetin dey happen",
        );
        assert_eq!(prompt, "wetin dey happen");
    }

    #[test]
    fn unset_task_and_language_leave_text_unwrapped() {
        assert_eq!(
            build_prompt("sabiyarn-125m", UNSET, UNSET, None, "plain text"),
            "plain text"
        );
    }

    #[test]
    fn unset_language_yields_empty_tag() {
        assert_eq!(
            build_prompt("sabiyarn-125m", "Translation", UNSET, None, "hello"),
            "<translate> hello  "
        );
    }

    #[test]
    fn no_template_leaves_residual_placeholder() {
        for (task, _) in TASK_TEMPLATES {
            let prompt = build_prompt("sabiyarn-125m", task, "Yoruba", None, "text");
            assert!(
                !prompt.contains(PLACEHOLDER),
                "task {task} left a placeholder in {prompt:?}"
            );
        }
    }

    #[test]
    fn unknown_task_falls_back_to_bare_text() {
        assert_eq!(
            build_prompt("sabiyarn-125m", "Juggling", UNSET, None, "hello"),
            "hello"
        );
    }
}

//! Instruction-string assembly for translation requests

use beonyeok_store::Glossary;

/// Substituted for the glossary block when the table has no usable entries.
pub const NO_TERMS_PLACEHOLDER: &str = "No specific terms provided.";

/// Serialize the glossary for prompt inclusion: one `- source: target` line
/// per valid entry. Half-filled rows are skipped.
pub fn glossary_block(glossary: &Glossary) -> String {
    let lines: Vec<String> = glossary
        .entries()
        .iter()
        .filter(|e| e.is_valid())
        .map(|e| format!("- {}: {}", e.source, e.target))
        .collect();

    if lines.is_empty() {
        NO_TERMS_PLACEHOLDER.to_string()
    } else {
        lines.join("\n")
    }
}

/// Assemble the system instruction sent with every translation request.
///
/// The style guide and the serialized glossary are embedded verbatim between
/// their section delimiters; the surrounding directive pins the model to
/// translation only, with paragraph structure preserved.
pub fn build_instruction(style_guide: &str, glossary: &Glossary) -> String {
    format!(
        r#"You are an expert translator. Your only job is to translate the given English text into natural Korean.
Your output must be ONLY the translated text itself, without any additional phrases, explanations, or greetings.

Follow these rules strictly:
1. **Structure Preservation**: Preserve the original paragraph structure. If the input text has multiple paragraphs (separated by blank lines), the translated output MUST also have the same number of paragraphs.
2. **Translation Style**: Adhere to the following style guide.
--- STYLE GUIDE ---
{style_guide}
--- END STYLE GUIDE ---

3. **Glossary**: You MUST use the translations provided in this glossary for the specified terms.
--- GLOSSARY ---
{glossary}
--- END GLOSSARY ---"#,
        style_guide = style_guide,
        glossary = glossary_block(glossary),
    )
}

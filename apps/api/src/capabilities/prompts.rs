// Prompts for the model-backed translation and sentiment capabilities.

pub const DETECT_AND_TRANSLATE_PROMPT: &str = r#"Detect the language of the text below and translate it to English.

Return a JSON object with exactly these fields:
{"language": "<ISO 639-1 code of the original text, e.g. \"en\", \"es\", \"de\">", "english": "<the text in English; unchanged if it is already English>"}

TEXT:
{text}"#;

pub const TRANSLATE_FROM_ENGLISH_SYSTEM: &str = "You are a professional translator. \
    Reply with the translation only. Preserve markdown, numbering and line breaks.";

pub const TRANSLATE_FROM_ENGLISH_PROMPT: &str =
    "Translate the following English text to the language with ISO 639-1 code \"{language}\".\n\n{text}";

pub const SENTIMENT_PROMPT: &str = r#"Classify the sentiment of the candidate message below.

Return a JSON object with exactly these fields:
{"label": "POSITIVE" | "NEGATIVE" | "NEUTRAL", "confidence": <number between 0 and 1>}

MESSAGE:
{text}"#;

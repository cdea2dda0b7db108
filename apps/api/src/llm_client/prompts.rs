// Shared prompt fragments used by more than one caller of the LLM client.
// Feature prompts live in a prompts.rs next to the code that sends them.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Temperature used for structured (JSON) helper calls.
pub const STRUCTURED_TEMPERATURE: f32 = 0.0;

// Prompts and fixed replies for the candidate intake conversation.

pub const SYSTEM_PROMPT: &str = "\
You are TalentScout, an automated hiring assistant for a tech recruitment agency.
Your responsibilities:
- Collect candidate info (Full Name, Email, Phone, Years of Experience, Desired Position(s), Current Location, Tech Stack).
- When a tech stack is provided, generate 3-5 targeted technical questions per technology listed.
- Keep conversation context across turns.
- Provide clear, professional, concise messages.
- Use a friendly tone.
- Exit on keywords: quit, exit, stop, bye, end.";

pub const GREETING_PROMPT: &str = "Greet the user briefly and explain that you will gather \
    their details and ask technical questions based on their tech stack. \
    Ask for the candidate's full name to begin.";

/// Question-generation instruction. `{tech_stack}` is replaced with the
/// comma-joined technology list.
pub const TECH_STACK_QUESTION_TEMPLATE: &str = "\
The candidate listed these technologies: {tech_stack}

For each technology listed, generate 3-5 technical interview questions. Aim for a mix of:
- Fundamental / conceptual question
- Practical / coding / example-based question
- Intermediate reasoning or troubleshooting question

Format the output with headings per technology, and 3-5 numbered questions beneath each heading.";

pub const CLOSING_REPLY: &str = "Thank you for your time! We'll review your responses and get \
    back to you about next steps.";

/// Returned whenever the model cannot be reached.
pub const MODEL_UNAVAILABLE_REPLY: &str =
    "Sorry, I'm unable to reach the model right now. Please try again later.";

/// Builds the question-generation instruction for a normalized technology list.
pub fn tech_stack_question_prompt(techs: &[String]) -> String {
    TECH_STACK_QUESTION_TEMPLATE.replace("{tech_stack}", &techs.join(", "))
}

pub mod exit;
pub mod fields;
pub mod handlers;
pub mod model_caller;
pub mod orchestrator;
pub mod prompts;
pub mod tech_stack;

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct AiModel {
    pub id: &'static str,
    pub name: &'static str,
    pub provider: &'static str,
    pub context: u32,
    pub pricing: &'static str,
}

const fn model(
    id: &'static str,
    name: &'static str,
    provider: &'static str,
    context: u32,
    pricing: &'static str
) -> AiModel {
    AiModel { id, name, provider, context, pricing }
}

/// Models offered to API consumers. Pricing is input/output per million tokens.
pub const AVAILABLE_MODELS: &[AiModel] = &[
    model("anthropic/claude-3.5-sonnet", "Claude 3.5 Sonnet", "Anthropic", 200_000, "$3/$15"),
    model("anthropic/claude-3-opus", "Claude 3 Opus", "Anthropic", 200_000, "$15/$75"),
    model("anthropic/claude-3-haiku", "Claude 3 Haiku", "Anthropic", 200_000, "$0.25/$1.25"),
    model("openai/gpt-4o", "GPT-4o", "OpenAI", 128_000, "$5/$15"),
    model("openai/gpt-4o-mini", "GPT-4o Mini", "OpenAI", 128_000, "$0.15/$0.60"),
    model("google/gemini-pro-1.5", "Gemini Pro 1.5", "Google", 2_800_000, "$1.25/$5"),
    model("meta-llama/llama-3.1-405b-instruct", "Llama 3.1 405B", "Meta", 131_072, "$3/$3"),
    model("meta-llama/llama-3.1-70b-instruct", "Llama 3.1 70B", "Meta", 131_072, "$0.52/$0.75"),
    model("mistralai/mistral-large", "Mistral Large", "Mistral", 128_000, "$2/$6"),
    model("deepseek/deepseek-chat", "DeepSeek Chat", "DeepSeek", 128_000, "$0.14/$0.28"),
];

pub fn find_model(id: &str) -> Option<&'static AiModel> {
    AVAILABLE_MODELS.iter().find(|m| m.id == id)
}

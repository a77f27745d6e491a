use crate::core::error::ArgumentError;

/// Speaker of a prompt turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
    System,
}

/// One message inside a built prompt.
#[derive(Debug, Clone)]
pub struct PromptTurn {
    pub role: Role,
    pub text: String,
}

/// Result of rendering a prompt template for one request.
#[derive(Debug, Clone)]
pub struct PromptOutput {
    pub title: String,
    pub turns: Vec<PromptTurn>,
}

/// Declared argument of a prompt template, in advertised order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptArgumentSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
}

/// A named, parameterized generator of instruction messages. Building is
/// pure: same arguments, same output.
pub trait PromptTemplate: Send + Sync {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn arguments(&self) -> Vec<PromptArgumentSpec>;
    fn build(&self, arguments: &serde_json::Value) -> Result<PromptOutput, ArgumentError>;
}

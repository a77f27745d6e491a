//! MCP server integration (stdio) for weather-mcp-server.
//!
//! - Advertises one tool (`get_weather`) and two prompt templates
//! - Speaks JSON-RPC over stdin/stdout via rmcp's io transport
//!
//! This file is the only place that touches rmcp wire types. The tool and
//! prompt contracts in `core` stay plain-JSON so the dispatch surface can be
//! tested without a transport.

use std::sync::Arc;

use rmcp::model::{
    CallToolRequestParam, CallToolResult, Content, GetPromptRequestParam, GetPromptResult,
    Implementation, ListPromptsResult, ListToolsResult, PaginatedRequestParam, Prompt,
    PromptArgument, PromptMessage, PromptMessageRole, ServerCapabilities, ServerInfo,
    Tool as ToolDescriptor,
};
use rmcp::service::{RequestContext, RoleServer};
use rmcp::{serve_server, ErrorData as McpError, ServerHandler};
use serde_json::Value as JsonValue;

use crate::core::prompt::{PromptTemplate, Role};
use crate::core::tool::Tool;
use crate::infra::config::Config;
use crate::prompts::registry::PromptRegistry;
use crate::prompts::weather::{TravelAdvicePrompt, WeatherInquiryPrompt};
use crate::source::CannedWeather;
use crate::tools::registry::ToolRegistry;
use crate::tools::weather::GetWeatherTool;

/// The MCP server handler. Holds the registries it is handed from bootstrap;
/// requests are stateless, so the whole thing is cheap to clone.
#[derive(Clone)]
pub struct WeatherService {
    server_name: String,
    tools: ToolRegistry,
    prompts: PromptRegistry,
}

impl WeatherService {
    pub fn new(server_name: String, tools: ToolRegistry, prompts: PromptRegistry) -> Self {
        Self { server_name, tools, prompts }
    }

    pub fn tool_names(&self) -> Vec<&'static str> {
        self.tools.list().into_iter().map(|m| m.name).collect()
    }

    pub fn prompt_names(&self) -> Vec<&'static str> {
        self.prompts.list().into_iter().map(|m| m.name).collect()
    }

    fn tool_descriptors(&self) -> Vec<ToolDescriptor> {
        self.tools
            .list()
            .into_iter()
            .map(|m| {
                let schema = m.input_schema.as_object().cloned().unwrap_or_default();
                ToolDescriptor::new(m.name, m.description, Arc::new(schema))
            })
            .collect()
    }

    fn prompt_descriptors(&self) -> Vec<Prompt> {
        self.prompts
            .list()
            .into_iter()
            .map(|m| {
                let args: Vec<PromptArgument> = m
                    .arguments
                    .iter()
                    .map(|a| PromptArgument {
                        name: a.name.into(),
                        description: Some(a.description.into()),
                        required: Some(a.required),
                    })
                    .collect();
                Prompt::new(m.name, Some(m.description), Some(args))
            })
            .collect()
    }

    /// Run a tool call. Argument and data-source failures become
    /// error-flagged results; only an unknown tool name is a protocol error.
    async fn dispatch_tool(&self, name: &str, args: &JsonValue) -> Result<CallToolResult, McpError> {
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| McpError::invalid_params(format!("unknown tool: {name}"), None))?;
        match tool.call(args).await {
            Ok(text) => Ok(CallToolResult::success(vec![Content::text(text)])),
            Err(e) => {
                tracing::warn!(tool = name, error = %e, "tool call failed");
                Ok(CallToolResult::error(vec![Content::text(e.to_string())]))
            }
        }
    }

    fn dispatch_prompt(&self, name: &str, args: &JsonValue) -> Result<GetPromptResult, McpError> {
        let template = self
            .prompts
            .get(name)
            .ok_or_else(|| McpError::invalid_params(format!("unknown prompt: {name}"), None))?;
        let output = template
            .build(args)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
        Ok(GetPromptResult {
            description: Some(output.title),
            messages: output
                .turns
                .into_iter()
                .map(|t| PromptMessage::new_text(wire_role(t.role), t.text))
                .collect(),
        })
    }
}

fn wire_role(role: Role) -> PromptMessageRole {
    match role {
        Role::User => PromptMessageRole::User,
        // MCP prompt messages only carry user/assistant speakers on the wire.
        Role::Assistant | Role::System => PromptMessageRole::Assistant,
    }
}

impl ServerHandler for WeatherService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: self.server_name.clone(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            instructions: Some(
                "Weather MCP server: call get_weather with a city name, or use the \
                 weather_inquiry / weather_travel_advice prompt templates."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_prompts()
                .build(),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult { tools: self.tool_descriptors(), next_cursor: None })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let args = request
            .arguments
            .map(JsonValue::Object)
            .unwrap_or_else(|| JsonValue::Object(Default::default()));
        self.dispatch_tool(request.name.as_ref(), &args).await
    }

    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        Ok(ListPromptsResult { prompts: self.prompt_descriptors(), next_cursor: None })
    }

    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        let args = request
            .arguments
            .map(JsonValue::Object)
            .unwrap_or_else(|| JsonValue::Object(Default::default()));
        self.dispatch_prompt(&request.name, &args)
    }
}

/// Build the handler with the registries wired explicitly; no process-wide
/// registry, bootstrap owns the value and hands it to the transport binder.
pub fn build_service(cfg: &Config) -> WeatherService {
    let source = Arc::new(CannedWeather);
    let tools = ToolRegistry::with_tools([
        Arc::new(GetWeatherTool::new(source)) as Arc<dyn Tool>,
    ]);
    let prompts = PromptRegistry::with_prompts([
        Arc::new(WeatherInquiryPrompt) as Arc<dyn PromptTemplate>,
        Arc::new(TravelAdvicePrompt) as Arc<dyn PromptTemplate>,
    ]);
    WeatherService::new(cfg.server_name.clone(), tools, prompts)
}

/// Serve MCP over stdio and block until the peer disconnects.
pub async fn serve_stdio(
    service: WeatherService,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();
    let running = serve_server(service, (stdin, stdout)).await?;
    running.waiting().await?;
    Ok(())
}

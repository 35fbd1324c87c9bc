use serde::{Deserialize, Serialize};

/// Sampling and context options for a prompt, in the service's snake_case
/// wire form. Unset fields take the documented defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptOptions {
    pub mirostat: i32,
    pub mirostat_eta: f64,
    pub mirostat_tau: i32,
    pub num_ctx: u32,
    pub num_gqa: u32,
    pub num_gpu: u32,
    pub num_thread: u32,
    pub repeat_last_n: i32,
    pub repeat_penalty: f64,
    pub temperature: f64,
    pub seed: i64,
    pub stop: Option<String>,
    pub tfs_z: i32,
    pub num_predict: i32,
    pub top_k: i32,
    pub top_p: f64,
}

impl Default for PromptOptions {
    fn default() -> Self {
        Self {
            mirostat: 0,
            mirostat_eta: 0.1,
            mirostat_tau: 5,
            num_ctx: 4096,
            num_gqa: 8,
            num_gpu: 0,
            num_thread: 0,
            repeat_last_n: 64,
            repeat_penalty: 1.1,
            temperature: 0.8,
            seed: 0,
            stop: None,
            tfs_z: 1,
            num_predict: 2048,
            top_k: 40,
            top_p: 0.9,
        }
    }
}

/// The prompt record itself, camelCase on the wire. `options`, and
/// `attachments` when present, are injected next to these fields during
/// assembly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Prompt {
    pub prompt: String,
    pub model_tag_id: i64,
    pub raw: bool,
    pub stream: bool,
    pub context: String,
    pub project_id: i64,
    pub project_tab_id: i64,
    pub user_id: i64,
    pub verbose: bool,
    pub keep_context: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datasource_id: Option<i64>,
}

impl Default for Prompt {
    fn default() -> Self {
        Self {
            prompt: String::new(),
            model_tag_id: 0,
            raw: false,
            stream: false,
            context: String::new(),
            project_id: 1,
            project_tab_id: 1,
            user_id: 1,
            verbose: true,
            keep_context: false,
            datasource_id: None,
        }
    }
}

/// A document attached to a prompt as retrieval context, base64-encoded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub name: String,
    pub base64: String,
}

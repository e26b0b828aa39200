//! Scripted gateway used by use case and controller tests.

use crate::ports::llm_gateway::{GatewayError, LlmGateway, LlmSession};
use analyzer_domain::{Credential, Model};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Shared counters and captured prompts
#[derive(Default)]
pub(crate) struct Calls {
    pub initialize: AtomicUsize,
    pub complete: AtomicUsize,
    pub prompts: Mutex<Vec<String>>,
    pub temperatures: Mutex<Vec<f32>>,
    pub keys: Mutex<Vec<String>>,
}

impl Calls {
    pub fn initialize_count(&self) -> usize {
        self.initialize.load(Ordering::SeqCst)
    }

    pub fn complete_count(&self) -> usize {
        self.complete.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

/// Gateway that answers every `complete` with the same scripted reply
pub(crate) struct StubGateway {
    pub calls: Arc<Calls>,
    reply: Result<String, GatewayError>,
    rejected_key: Option<String>,
}

impl StubGateway {
    pub fn replying(text: &str) -> Self {
        Self {
            calls: Arc::new(Calls::default()),
            reply: Ok(text.to_string()),
            rejected_key: None,
        }
    }

    pub fn failing(error: GatewayError) -> Self {
        Self {
            calls: Arc::new(Calls::default()),
            reply: Err(error),
            rejected_key: None,
        }
    }

    /// Refuse to initialize with this exact key
    pub fn rejecting_key(mut self, key: &str) -> Self {
        self.rejected_key = Some(key.to_string());
        self
    }
}

#[async_trait]
impl LlmGateway for StubGateway {
    async fn initialize(
        &self,
        credential: &Credential,
        model: &Model,
    ) -> Result<Box<dyn LlmSession>, GatewayError> {
        self.calls.initialize.fetch_add(1, Ordering::SeqCst);
        self.calls
            .keys
            .lock()
            .unwrap()
            .push(credential.expose().to_string());

        if self.rejected_key.as_deref() == Some(credential.expose()) {
            return Err(GatewayError::InitializationFailed(
                "API key format is not valid".to_string(),
            ));
        }

        Ok(Box::new(StubSession {
            calls: Arc::clone(&self.calls),
            model: model.clone(),
            reply: self.reply.clone(),
        }))
    }
}

pub(crate) struct StubSession {
    calls: Arc<Calls>,
    model: Model,
    reply: Result<String, GatewayError>,
}

impl StubSession {
    pub fn new(calls: Arc<Calls>, reply: Result<String, GatewayError>) -> Self {
        Self {
            calls,
            model: Model::default(),
            reply,
        }
    }
}

#[async_trait]
impl LlmSession for StubSession {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn complete(&self, prompt: &str, temperature: f32) -> Result<String, GatewayError> {
        self.calls.complete.fetch_add(1, Ordering::SeqCst);
        self.calls.prompts.lock().unwrap().push(prompt.to_string());
        self.calls.temperatures.lock().unwrap().push(temperature);
        self.reply.clone()
    }
}

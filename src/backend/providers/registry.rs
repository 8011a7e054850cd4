/**
 * Provider Registry
 *
 * Maps a `model` selector ("wenxin", "deepseek", "tongyi") to the provider
 * that serves it. Providers without credentials in the configuration are not
 * registered, so selecting them is rejected as unsupported.
 */

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use reqwest::Client;

use crate::backend::providers::{ChatProvider, CompletionProvider, WenxinProvider};
use crate::backend::server::config::ProviderSettings;

#[derive(Clone, Default)]
pub struct ProviderRegistry {
    providers: HashMap<String, Arc<dyn ChatProvider>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the registry from configured credentials
    pub fn from_settings(settings: &ProviderSettings, client: Client) -> Self {
        let mut registry = Self::new();

        if let Some(wenxin) = &settings.wenxin {
            registry.register(Arc::new(WenxinProvider::new(
                client.clone(),
                wenxin.api_url.clone(),
                wenxin.api_key.clone(),
            )));
        }
        if let Some(deepseek) = &settings.deepseek {
            registry.register(Arc::new(CompletionProvider::new(
                "deepseek",
                client.clone(),
                &deepseek.base_url,
                deepseek.api_key.clone(),
                deepseek.model.clone(),
            )));
        }
        if let Some(tongyi) = &settings.tongyi {
            registry.register(Arc::new(CompletionProvider::new(
                "tongyi",
                client,
                &tongyi.base_url,
                tongyi.api_key.clone(),
                tongyi.model.clone(),
            )));
        }

        registry
    }

    /// Register a provider under its own name, replacing any previous one
    pub fn register(&mut self, provider: Arc<dyn ChatProvider>) {
        self.providers.insert(provider.name().to_string(), provider);
    }

    pub fn with(mut self, provider: Arc<dyn ChatProvider>) -> Self {
        self.register(provider);
        self
    }

    /// Look up a provider by selector; selectors are case-sensitive
    pub fn get(&self, selector: &str) -> Option<Arc<dyn ChatProvider>> {
        self.providers.get(selector).cloned()
    }

    /// Registered selectors, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.providers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("providers", &self.names())
            .finish()
    }
}

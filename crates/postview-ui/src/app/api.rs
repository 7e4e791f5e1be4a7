//! Context carrying the one `ApiClient` built at boot.

use crate::core::config::UiConfig;
use crate::services::api::ApiClient;
use std::rc::Rc;

/// Shared handle to the posts API for components and request helpers.
#[derive(Clone)]
pub(crate) struct ApiCtx {
    pub client: Rc<ApiClient>,
}

impl ApiCtx {
    /// Point the client at the configured API base URL.
    pub(crate) fn from_config(config: &UiConfig) -> Self {
        Self {
            client: Rc::new(ApiClient::new(config.api_base_url.as_str())),
        }
    }
}

// Contexts compare by client identity; consumers re-render only on a new client.
impl PartialEq for ApiCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.client, &other.client)
    }
}

//! Provider callback paths.

/// Redirect endpoint template used by the admin panel.
pub const CALLBACK_URL_TEMPLATE: &str = "/admin/connect/{{provider}}/callback";

const PROVIDER_PLACEHOLDER: &str = "{{provider}}";

/// Render the callback path for `provider_name` from [`CALLBACK_URL_TEMPLATE`].
///
/// The name is substituted literally. No escaping is performed.
#[must_use]
pub fn get_provider_callback_url(provider_name: &str) -> String {
    render(CALLBACK_URL_TEMPLATE, provider_name)
}

fn render(template: &str, provider_name: &str) -> String {
    template.replacen(PROVIDER_PLACEHOLDER, provider_name, 1)
}

/// Callback path renderer with a configurable template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallbackUrlBuilder {
    template: String,
}

impl Default for CallbackUrlBuilder {
    fn default() -> Self {
        Self {
            template: CALLBACK_URL_TEMPLATE.to_owned(),
        }
    }
}

impl CallbackUrlBuilder {
    #[must_use]
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    #[must_use]
    pub fn build(&self, provider_name: &str) -> String {
        render(&self.template, provider_name)
    }
}

use serde::{Deserialize, Serialize};
use tera::{Context, Tera};
use tracing::warn;

/// Name the message templates are registered under; no extension, so tera does not autoescape.
const TEMPLATE_NAME: &str = "message";

/// User-facing text produced by the engine.
///
/// Every field has an English default, so a JSON override only needs the strings it changes.
/// `title` and `confirmation` are tera templates; `title` sees `name`, `confirmation` sees
/// `name`, `location`, `checkin` and `checkout`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    /// Summary shown when a property has no windows
    pub no_availability:      String,
    /// Lead-in before the list of windows
    pub availability_prefix:  String,
    /// Word placed between the two dates of a window
    pub period_joiner:        String,
    /// Booking dialog title
    pub title:                String,
    pub missing_dates:        String,
    pub inverted_range:       String,
    pub outside_availability: String,
    /// Confirmation for an accepted request
    pub confirmation:         String,
}

/// Error type for message configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid messages configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid messages configuration: expected a JSON object")]
    NotAnObject,

    /// A template does not parse or uses a variable it is not given.
    #[error("Invalid message template: {0}")]
    Template(#[from] tera::Error),
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            no_availability:      "No dates available at the moment.".to_owned(),
            availability_prefix:  "Available periods: ".to_owned(),
            period_joiner:        "to".to_owned(),
            title:                "Availability - {{ name }}".to_owned(),
            missing_dates:        "Select both dates.".to_owned(),
            inverted_range:       "Check-out cannot be before check-in.".to_owned(),
            outside_availability: "Dates fall outside this property's available periods.".to_owned(),
            confirmation:         "Request sent for {{ name }} ({{ location }}) from {{ checkin }} to {{ checkout }}."
                .to_owned(),
        }
    }
}

impl Messages {
    /// Loads messages from a JSON object, keeping defaults for absent keys.
    ///
    /// # Errors
    /// Returns `ConfigError::NotAnObject` if the document is not a JSON object,
    /// `ConfigError::Json` if a value is not a string, and `ConfigError::Template`
    /// if `title` or `confirmation` does not render.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let value: serde_json::Value = serde_json::from_str(raw)?;
        if !value.is_object() {
            return Err(ConfigError::NotAnObject);
        }

        let messages: Self = serde_json::from_value(value)?;
        messages.check_templates()?;
        Ok(messages)
    }

    /// Renders both templates against sample values.
    ///
    /// # Errors
    /// Returns `ConfigError::Template` for the first template that fails.
    pub fn check_templates(&self) -> Result<(), ConfigError> {
        let sample = confirmation_context("name", "location", "2024-01-01", "2024-01-02");
        try_render(&self.title, &sample)?;
        try_render(&self.confirmation, &sample)?;
        Ok(())
    }
}

pub(crate) fn title_context(name: &str) -> Context {
    let mut context = Context::new();
    context.insert("name", name);
    context
}

pub(crate) fn confirmation_context(name: &str, location: &str, checkin: &str, checkout: &str) -> Context {
    let mut context = title_context(name);
    context.insert("location", location);
    context.insert("checkin", checkin);
    context.insert("checkout", checkout);
    context
}

fn try_render(template: &str, context: &Context) -> Result<String, tera::Error> {
    let mut tera = Tera::default();
    tera.add_raw_template(TEMPLATE_NAME, template)?;
    tera.render(TEMPLATE_NAME, context)
}

/// Renders a message template; a template that fails is shown as written.
pub(crate) fn render(template: &str, context: &Context) -> String {
    try_render(template, context).unwrap_or_else(|err| {
        warn!(error = %err, template, "message template failed to render");
        template.to_owned()
    })
}

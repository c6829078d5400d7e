// Supplier enquiry email template generator
use crate::application::registry::CustomComponent;
use crate::domain::config::AppConfig;
use crate::domain::fragment::Fragment;
use async_trait::async_trait;

/// The `emailTemplate` tab override: produces the standard supplier enquiry
/// text on demand. Stateless apart from the generated text the host keeps in
/// its render state.
pub struct EmailTemplate;

impl EmailTemplate {
    pub fn new() -> Self {
        Self
    }

    /// The enquiry template, signed with the tenant's company name.
    pub fn generate(&self, config: &AppConfig) -> String {
        format!(
            "Dear [Supplier],\n\
             \n\
             We are looking for a fully furnished apartment on behalf of our client with the following requirements:\n\
             \n\
             - Location: [Postcode]\n\
             - Dates: [Start Date] to [End Date]\n\
             - Number of people: [Number]\n\
             - Pets: [Yes/No]\n\
             - Bedrooms required: [Number]\n\
             - Special requirements: [List any special requirements]\n\
             \n\
             If you have availability, please share the following information with us within the next 2 hours:\n\
             \n\
             1. Property address\n\
             2. Number of bedrooms and bathrooms\n\
             3. Floor level (if applicable)\n\
             4. Parking availability\n\
             5. Pet policy\n\
             6. Pricing for the requested dates\n\
             7. High-quality images or video of the property\n\
             \n\
             Thank you for your prompt attention to this matter.\n\
             \n\
             Best regards,\n\
             [Your Name]\n\
             {}",
            config.company_name
        )
    }

    /// View after the user pressed "Generate Template".
    pub fn render_generated(&self, config: &AppConfig) -> Fragment {
        Fragment::section(
            "Email Template Generator",
            vec![
                Fragment::Button {
                    label: "Generate Template".to_string(),
                    enabled: true,
                },
                Fragment::text(self.generate(config)),
            ],
        )
    }
}

impl Default for EmailTemplate {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CustomComponent for EmailTemplate {
    async fn render(&self, _config: &AppConfig) -> Fragment {
        Fragment::section(
            "Email Template Generator",
            vec![Fragment::Button {
                label: "Generate Template".to_string(),
                enabled: true,
            }],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_is_signed_with_company_name() {
        let config = crate::tenant::app_config();
        let template = EmailTemplate::new().generate(&config);

        assert!(template.starts_with("Dear [Supplier],"));
        assert!(template.contains("- Bedrooms required: [Number]"));
        assert!(template.contains("within the next 2 hours"));
        assert!(template.ends_with("Bonjour Investments"));
    }

    #[tokio::test]
    async fn test_idle_render_has_only_the_button() {
        let config = crate::tenant::app_config();
        let widget = EmailTemplate::new();

        let idle = widget.render(&config).await;
        assert!(idle.contains_text("Generate Template"));
        assert!(!idle.contains_text("Dear [Supplier]"));

        let generated = widget.render_generated(&config);
        assert!(generated.contains_text("Dear [Supplier]"));
    }
}

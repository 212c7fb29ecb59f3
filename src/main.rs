use anyhow::Result;
use landing_page_kit::config::Config;
use landing_page_kit::i18n::{DictionaryLoader, TranslationMetrics, Translator};
use landing_page_kit::mailer::{EmailClient, EmailJsClient, TemplateParams};
use landing_page_kit::prefs::FileStore;
use landing_page_kit::view::{InMemoryPage, PageNode};
use tracing::{info, warn};

/// The landing page's translatable elements, as found in the markup.
fn landing_page() -> InMemoryPage {
    InMemoryPage::with_nodes(vec![
        PageNode::text("nav.home"),
        PageNode::text("nav.pricing"),
        PageNode::text("nav.contact"),
        PageNode::text("hero.headline"),
        PageNode::text("hero.subtitle"),
        PageNode::text("contact.heading"),
        PageNode::input("contact.name_placeholder"),
        PageNode::input("contact.email_placeholder"),
        PageNode::input("contact.subject_placeholder"),
        PageNode::input("contact.message_placeholder"),
        PageNode::text("contact.submit_label"),
        PageNode::text("footer.copyright"),
    ])
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("landing_page_kit=info".parse()?),
        )
        .init();

    info!("Starting landing page runtime");

    // Load configuration from environment
    let config = Config::from_env();

    // Page load: detect the language and translate the page
    let store = FileStore::open(&config.language_file);
    let loader = DictionaryLoader::new(&config.translations_base_url);
    let translator = Translator::init(loader, Box::new(store), config.locale.as_deref()).await;

    let mut page = landing_page();
    translator.apply(&mut page);

    info!(
        "Page translated: lang={}, title={:?}",
        page.document_lang, page.title
    );
    for node in &page.nodes {
        if node.accepts_placeholder {
            info!("  [{}] placeholder: {}", node.key, node.placeholder);
        } else {
            info!("  [{}] text: {}", node.key, node.text);
        }
    }

    let report = TranslationMetrics::global().report();
    info!("Translation metrics: {}", serde_json::to_string(&report)?);

    // Optional contact form smoke test against the real email service
    if std::env::var("SEND_TEST_MESSAGE").is_ok() {
        if config.email_configured() {
            info!("Sending test contact message to {}", config.contact_recipient);
            let client = EmailJsClient::new(config.emailjs_public_key.clone());
            let params = TemplateParams {
                from_name: "Smoke Test".to_string(),
                from_email: "smoke@example.com".to_string(),
                subject: "Contact form smoke test".to_string(),
                message: translator.translate("contact.success_message"),
                to_email: config.contact_recipient.clone(),
            };
            client
                .send(
                    &config.emailjs_service_id,
                    &config.emailjs_template_id,
                    &params,
                )
                .await?;
            info!("Test message sent");
        } else {
            warn!("SEND_TEST_MESSAGE set but the email service is not configured");
        }
    }

    Ok(())
}

//! Discord webhook notifications for posting outcomes. Optional: without a
//! configured webhook URL every call is a silent no-op. Delivery failures
//! are logged and swallowed — a lost notification never fails a job.

use chrono::Utc;
use reqwest::Client;
use serde_json::{json, Value};
use tracing::{debug, warn};

const WEBHOOK_TIMEOUT_SECS: u64 = 10;
const BOT_USERNAME: &str = "Cappocas Bot";
const FOOTER: &str = "Cappocas - Automatisation d'annonces";

// Discord embed accent colors.
const COLOR_SUCCESS: u32 = 0x22c55e;
const COLOR_ERROR: u32 = 0xef4444;
const COLOR_INFO: u32 = 0x6366f1;

const MAX_ERROR_CHARS: usize = 500;

#[derive(Clone)]
pub struct Notifier {
    client: Client,
    webhook_url: Option<String>,
}

impl Notifier {
    pub fn new(webhook_url: Option<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(WEBHOOK_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            webhook_url,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.webhook_url.is_some()
    }

    pub async fn notify_app_start(&self) {
        let embed = embed(
            "🚀 Cappocas démarré",
            "L'application est prête à automatiser vos annonces !",
            COLOR_INFO,
            vec![json!({"name": "Statut", "value": "✅ En ligne", "inline": true})],
        );
        self.send(embed).await;
    }

    pub async fn notify_success(&self, listing_title: &str, platform: &str, url: Option<&str>) {
        let mut fields = vec![
            json!({"name": "📦 Article", "value": listing_title, "inline": false}),
            json!({"name": "🌐 Plateforme", "value": platform, "inline": true}),
        ];
        if let Some(url) = url {
            fields.push(json!({"name": "🔗 Lien", "value": url, "inline": true}));
        }

        let embed = embed(
            "✅ Annonce publiée avec succès !",
            "Votre annonce a été postée automatiquement.",
            COLOR_SUCCESS,
            fields,
        );
        self.send(embed).await;
    }

    pub async fn notify_failure(&self, listing_title: &str, platform: &str, error: &str) {
        let error_text: String = if error.chars().count() > MAX_ERROR_CHARS {
            let truncated: String = error.chars().take(MAX_ERROR_CHARS).collect();
            format!("{truncated}...")
        } else {
            error.to_string()
        };

        let embed = embed(
            "❌ Échec du postage",
            "Une erreur s'est produite lors de la publication.",
            COLOR_ERROR,
            vec![
                json!({"name": "📦 Article", "value": listing_title, "inline": false}),
                json!({"name": "🌐 Plateforme", "value": platform, "inline": true}),
                json!({"name": "⚠️ Erreur", "value": format!("```{error_text}```"), "inline": false}),
            ],
        );
        self.send(embed).await;
    }

    async fn send(&self, embed: Value) {
        let Some(url) = &self.webhook_url else {
            debug!("Discord webhook not configured, skipping notification");
            return;
        };

        let payload = json!({
            "username": BOT_USERNAME,
            "embeds": [embed],
        });

        match self.client.post(url).json(&payload).send().await {
            // Discord answers 204 No Content on success.
            Ok(response) if response.status().is_success() => {}
            Ok(response) => {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                warn!("Discord webhook returned {status}: {body}");
            }
            Err(e) => warn!("Discord webhook send failed: {e}"),
        }
    }
}

fn embed(title: &str, description: &str, color: u32, fields: Vec<Value>) -> Value {
    json!({
        "title": title,
        "description": description,
        "color": color,
        "timestamp": Utc::now().to_rfc3339(),
        "fields": fields,
        "footer": {"text": FOOTER},
    })
}

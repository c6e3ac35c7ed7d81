use std::sync::Arc;

use logger::TracingLogger;
use mailer::{NoOpMailSender, SmtpMailSender, TeraMailRenderer};

use business::application::email::send_order_confirmation::SendOrderConfirmationUseCaseImpl;
use business::application::recommendation::list::ListRecommendationsUseCaseImpl;
use business::domain::email::services::MailSender;
use business::domain::logger::Logger;
use business::domain::recommendation::engine::RecommendationEngine;
use business::domain::recommendation::services::{
    CandidateShuffler, SeededShuffler, ThreadRngShuffler,
};

use crate::api::email::routes::EmailApi;
use crate::api::recommendation::routes::RecommendationApi;
use crate::config::mail_config::{MailConfig, MailSenderKind};
use crate::config::recommendation_config::RecommendationConfig;

/// Wiring of the recommendation service.
pub struct RecommendationContainer {
    pub recommendation_api: RecommendationApi,
}

impl RecommendationContainer {
    pub fn new(config: &RecommendationConfig) -> anyhow::Result<Self> {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);

        // Configuration faults stop start-up here
        let table = config.load_affinity_table()?;
        let unknown = table.unknown_references();
        if !unknown.is_empty() {
            let ids: Vec<&str> = unknown.iter().map(|id| id.as_str()).collect();
            logger.warn(&format!(
                "Affinity table references products missing from the catalog: {}",
                ids.join(", ")
            ));
        }
        logger.info(&format!(
            "Loaded affinity table with {} entries and {} catalog products",
            table.len(),
            table.catalog().len()
        ));

        let shuffler: Arc<dyn CandidateShuffler> = match config.seed {
            Some(seed) => {
                logger.info(&format!("Using seeded shuffler (seed {})", seed));
                Arc::new(SeededShuffler::new(seed))
            }
            None => Arc::new(ThreadRngShuffler),
        };

        let engine = Arc::new(RecommendationEngine::new(Arc::new(table), shuffler));

        let list_use_case = Arc::new(ListRecommendationsUseCaseImpl { engine, logger });

        Ok(Self {
            recommendation_api: RecommendationApi::new(list_use_case),
        })
    }
}

/// Wiring of the email service.
pub struct EmailContainer {
    pub email_api: EmailApi,
}

impl EmailContainer {
    pub fn new(config: &MailConfig) -> anyhow::Result<Self> {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);

        let renderer = Arc::new(TeraMailRenderer::new()?);
        let sender: Arc<dyn MailSender> = match config.sender {
            MailSenderKind::NoOp => {
                logger.info("Using no-op mail sender, emails are only logged");
                Arc::new(NoOpMailSender::new(logger.clone()))
            }
            MailSenderKind::Smtp => {
                logger.info(&format!(
                    "Using SMTP mail sender via {}:{}",
                    config.smtp.server, config.smtp.port
                ));
                Arc::new(SmtpMailSender::new(&config.smtp)?)
            }
        };

        let send_use_case = Arc::new(SendOrderConfirmationUseCaseImpl {
            renderer,
            sender,
            from_address: config.from_email.clone(),
            logger,
        });

        Ok(Self {
            email_api: EmailApi::new(send_use_case),
        })
    }
}

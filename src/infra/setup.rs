use crate::{
    adapters::{
        email::{resend::ResendEmailSender, smtp::SmtpEmailSender},
        http::app_state::AppState,
        persistence::{FirestorePersistence, firestore::FIRESTORE_BASE_URL},
    },
    infra::{
        config::{AppConfig, EmailConfig, StoreConfig},
        error::InfraError,
        google_auth::ServiceAccountTokenProvider,
        http_client,
    },
    use_cases::waitlist::{EmailSender, WaitlistRepo, WaitlistUseCases},
};
use secrecy::{ExposeSecret, SecretString};
use std::fs::File;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub async fn init_app_state() -> anyhow::Result<AppState> {
    let config = AppConfig::from_env()?;

    let repo = waitlist_repo(&config.store)?;
    let email = email_sender(&config.email)?;

    let waitlist_use_cases = WaitlistUseCases::new(repo, email);

    Ok(AppState {
        config: Arc::new(config),
        waitlist_use_cases: Arc::new(waitlist_use_cases),
    })
}

fn waitlist_repo(store: &StoreConfig) -> Result<Arc<dyn WaitlistRepo>, InfraError> {
    let client = http_client::build_client()?;

    let persistence = match (&store.emulator_host, &store.credentials) {
        (Some(host), _) => {
            tracing::warn!(emulator_host = %host, "Using Firestore emulator");
            FirestorePersistence::new(
                client,
                &FirestorePersistence::emulator_base_url(host),
                &store.project_id,
                None,
            )?
        }
        (None, Some(key)) => {
            let auth = ServiceAccountTokenProvider::new(client.clone(), key)?;
            FirestorePersistence::new(client, FIRESTORE_BASE_URL, &store.project_id, Some(auth))?
        }
        (None, None) => {
            return Err(InfraError::ConfigMissing {
                var: "FIREBASE_KEY_PATH",
            });
        }
    };

    Ok(Arc::new(persistence))
}

fn email_sender(email: &EmailConfig) -> Result<Arc<dyn EmailSender>, InfraError> {
    match email {
        EmailConfig::Smtp {
            host,
            username,
            password,
        } => {
            tracing::info!(smtp_host = %host, "Using SMTP email relay");
            Ok(Arc::new(SmtpEmailSender::new(host, username, password)?))
        }
        EmailConfig::Resend { api_key, from } => {
            tracing::info!("Using Resend email relay");
            Ok(Arc::new(ResendEmailSender::new(
                http_client::build_client()?,
                SecretString::new(api_key.expose_secret().into()),
                from.clone(),
            )))
        }
    }
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "worksphere_waitlist=debug,tower_http=debug".into());

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false) // don’t show target (module path)
        .with_level(true) // show log level
        .pretty(); // human-friendly, with colors

    // File (structured JSON logs), only when LOG_FILE is set
    let json_layer = std::env::var("LOG_FILE")
        .ok()
        .and_then(|path| match File::create(&path) {
            Ok(file) => Some(file),
            Err(err) => {
                eprintln!("cannot create log file {path}: {err}");
                None
            }
        })
        .map(|file| {
            fmt::layer()
                .json()
                .with_writer(file)
                .with_current_span(true)
                .with_span_list(true)
        });

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();
}

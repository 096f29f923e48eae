use std::sync::{Arc, Mutex};

use lettre::{
    address::AddressError,
    message::{header::ContentType, Mailbox, MultiPart, SinglePart},
    transport::smtp::{
        authentication::{Credentials, Mechanism},
        PoolConfig,
    },
    Message, SmtpTransport, Transport,
};

use crate::settings::types::{EmailBackend, EmailSettings};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub html_body: String,
    pub text_body: String,
}

#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("invalid mailbox: {0}")]
    Address(#[from] AddressError),
    #[error("failed to build message: {0}")]
    Message(#[from] lettre::error::Error),
    #[error("failed to set up SMTP transport: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
    #[error("outbox lock poisoned")]
    Poisoned,
}

/// Delivers outgoing emails with the backend chosen in settings.
#[derive(Clone)]
pub enum Mailer {
    Smtp {
        transport: SmtpTransport,
        sender: Mailbox,
    },
    /// Writes messages to the log instead of sending them.
    Console,
    /// Collects messages in memory.
    Memory(Arc<Mutex<Vec<OutgoingEmail>>>),
}

impl Mailer {
    pub fn from_settings(settings: &EmailSettings) -> Result<Self, MailError> {
        match settings.backend {
            EmailBackend::Smtp => {
                let credentials = Credentials::new(
                    settings.host_user.clone(),
                    settings.host_user_password.clone(),
                );
                let transport = SmtpTransport::starttls_relay(&settings.host)?
                    .credentials(credentials)
                    .authentication(vec![Mechanism::Plain])
                    .pool_config(PoolConfig::new().max_size(20))
                    .build();
                Ok(Self::Smtp {
                    transport,
                    sender: settings.sender.parse()?,
                })
            }
            EmailBackend::Console => Ok(Self::Console),
            EmailBackend::Memory => Ok(Self::memory()),
        }
    }

    pub fn memory() -> Self {
        Self::Memory(Arc::new(Mutex::new(Vec::new())))
    }

    /// Messages delivered so far by a memory mailer. Empty for other backends.
    pub fn outbox(&self) -> Vec<OutgoingEmail> {
        match self {
            Self::Memory(outbox) => outbox
                .lock()
                .map(|outbox| outbox.clone())
                .unwrap_or_default(),
            _ => Vec::new(),
        }
    }

    #[tracing::instrument(
        name = "Delivering an email",
        skip(self, email),
        fields(recipient_email = %email.to, subject = %email.subject)
    )]
    pub fn deliver(&self, email: OutgoingEmail) -> Result<(), MailError> {
        match self {
            Self::Smtp { transport, sender } => {
                let message = build_message(sender.clone(), &email)?;
                let transport = transport.clone();
                actix_web::rt::spawn(async move {
                    match transport.send(&message) {
                        Ok(_) => {
                            tracing::event!(target: "backend", tracing::Level::INFO, "Email successfully sent!")
                        }
                        Err(e) => {
                            tracing::event!(target: "backend", tracing::Level::ERROR, "Could not send email: {:#?}", e)
                        }
                    }
                });
                Ok(())
            }
            Self::Console => {
                tracing::event!(
                    target: "backend",
                    tracing::Level::INFO,
                    to = %email.to,
                    subject = %email.subject,
                    "Email not sent (console backend):\n{}",
                    email.text_body
                );
                Ok(())
            }
            Self::Memory(outbox) => {
                outbox.lock().map_err(|_| MailError::Poisoned)?.push(email);
                Ok(())
            }
        }
    }
}

fn build_message(sender: Mailbox, email: &OutgoingEmail) -> Result<Message, MailError> {
    Ok(Message::builder()
        .from(sender)
        .to(email.to.parse()?)
        .subject(email.subject.clone())
        .multipart(
            MultiPart::alternative()
                .singlepart(
                    SinglePart::builder()
                        .header(ContentType::TEXT_PLAIN)
                        .body(email.text_body.clone()),
                )
                .singlepart(
                    SinglePart::builder()
                        .header(ContentType::TEXT_HTML)
                        .body(email.html_body.clone()),
                ),
        )?)
}

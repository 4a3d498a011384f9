//! Email notifications for customer submissions.
//!
//! Every contact-form or job-application submission produces two messages:
//! an internal notification to the school inbox and an acknowledgment back
//! to the submitter, each with a plaintext and an HTML body. The
//! acknowledgment is localized to the language the visitor submitted in.
//!
//! Configuration is loaded from environment variables; if `SMTP_HOST` is
//! not set, [`MailConfig::from_env`] returns `None` and delivery is
//! skipped by the caller.

mod templates;

use lettre::message::MultiPart;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use lindholm_core::lang::Lang;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for email delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    /// SMTP transport-level failure (authentication, connection, etc.).
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// The recipient or sender address could not be parsed.
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The MIME message could not be assembled.
    #[error("Email build error: {0}")]
    Build(String),
}

// ---------------------------------------------------------------------------
// MailConfig
// ---------------------------------------------------------------------------

/// Default SMTP port (STARTTLS).
const DEFAULT_SMTP_PORT: u16 = 587;

/// Default sender address when `SMTP_FROM` is not set.
const DEFAULT_FROM_ADDRESS: &str = "noreply@lindholmkoereskole.dk";

/// Configuration for the SMTP delivery service.
#[derive(Debug, Clone)]
pub struct MailConfig {
    /// SMTP server hostname.
    pub smtp_host: String,
    /// SMTP server port (defaults to 587).
    pub smtp_port: u16,
    /// RFC 5322 "From" address.
    pub from_address: String,
    /// School inbox that receives submission notifications.
    pub admin_address: String,
    /// Optional SMTP username.
    pub smtp_user: Option<String>,
    /// Optional SMTP password.
    pub smtp_password: Option<String>,
}

impl MailConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` if `SMTP_HOST` is not set, signalling that email
    /// delivery is not configured and should be skipped.
    ///
    /// | Variable        | Required | Default                          |
    /// |-----------------|----------|----------------------------------|
    /// | `SMTP_HOST`     | yes      | --                               |
    /// | `SMTP_PORT`     | no       | `587`                            |
    /// | `SMTP_FROM`     | no       | `noreply@lindholmkoereskole.dk`  |
    /// | `SMTP_ADMIN`    | no       | same as `SMTP_FROM`              |
    /// | `SMTP_USER`     | no       | --                               |
    /// | `SMTP_PASSWORD` | no       | --                               |
    pub fn from_env() -> Option<Self> {
        let smtp_host = std::env::var("SMTP_HOST").ok()?;
        let from_address =
            std::env::var("SMTP_FROM").unwrap_or_else(|_| DEFAULT_FROM_ADDRESS.to_string());
        Some(Self {
            smtp_host,
            smtp_port: std::env::var("SMTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_SMTP_PORT),
            admin_address: std::env::var("SMTP_ADMIN").unwrap_or_else(|_| from_address.clone()),
            from_address,
            smtp_user: std::env::var("SMTP_USER").ok(),
            smtp_password: std::env::var("SMTP_PASSWORD").ok(),
        })
    }
}

// ---------------------------------------------------------------------------
// Submission payload
// ---------------------------------------------------------------------------

/// What kind of form was submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionKind {
    Contact,
    Application,
}

/// The fields both email bodies are rendered from.
#[derive(Debug)]
pub struct Submission<'a> {
    pub kind: SubmissionKind,
    pub name: &'a str,
    pub email: &'a str,
    pub phone: Option<&'a str>,
    pub message: &'a str,
    /// Position applied for; only set for applications.
    pub position: Option<&'a str>,
}

// ---------------------------------------------------------------------------
// Mailer
// ---------------------------------------------------------------------------

/// Sends submission emails via SMTP.
pub struct Mailer {
    config: MailConfig,
}

impl Mailer {
    /// Create a new mailer with the given configuration.
    pub fn new(config: MailConfig) -> Self {
        Self { config }
    }

    /// Send the internal notification to the school inbox.
    pub async fn notify_admin(&self, submission: &Submission<'_>) -> Result<(), MailError> {
        let rendered = templates::admin_notification(submission);
        self.send(&self.config.admin_address, rendered).await?;
        tracing::info!(
            kind = ?submission.kind,
            from = submission.email,
            "Admin notification email sent"
        );
        Ok(())
    }

    /// Send the acknowledgment back to the submitter, in their language.
    pub async fn acknowledge(
        &self,
        submission: &Submission<'_>,
        lang: Lang,
    ) -> Result<(), MailError> {
        let rendered = templates::acknowledgment(submission, lang);
        self.send(submission.email, rendered).await?;
        tracing::info!(
            kind = ?submission.kind,
            to = submission.email,
            lang = %lang,
            "Acknowledgment email sent"
        );
        Ok(())
    }

    async fn send(&self, to: &str, rendered: templates::Rendered) -> Result<(), MailError> {
        let email = Message::builder()
            .from(self.config.from_address.parse()?)
            .to(to.parse()?)
            .subject(rendered.subject)
            .multipart(MultiPart::alternative_plain_html(
                rendered.plain,
                rendered.html,
            ))
            .map_err(|e| MailError::Build(e.to_string()))?;

        let mut transport_builder =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.smtp_host)?
                .port(self.config.smtp_port);

        if let (Some(user), Some(pass)) = (&self.config.smtp_user, &self.config.smtp_password) {
            transport_builder =
                transport_builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        let mailer = transport_builder.build();
        mailer.send(email).await?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_env_returns_none_without_smtp_host() {
        std::env::remove_var("SMTP_HOST");
        assert!(MailConfig::from_env().is_none());
    }

    #[test]
    fn mail_error_display_build() {
        let err = MailError::Build("missing body".to_string());
        assert_eq!(err.to_string(), "Email build error: missing body");
    }

    #[test]
    fn mail_error_display_address() {
        let addr_err: Result<lettre::Address, _> = "not-an-email".parse();
        let err = MailError::Address(addr_err.unwrap_err());
        assert!(err.to_string().contains("Email address parse error"));
    }
}

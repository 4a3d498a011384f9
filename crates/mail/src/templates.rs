//! Message rendering for submission emails.
//!
//! Pure string assembly so the bodies can be unit-tested without a
//! transport.

use lindholm_core::lang::Lang;

use crate::{Submission, SubmissionKind};

/// A fully rendered message: subject plus both body variants.
pub struct Rendered {
    pub subject: String,
    pub plain: String,
    pub html: String,
}

/// Internal notification sent to the school inbox. Always Danish; the
/// staff reads Danish.
pub fn admin_notification(submission: &Submission<'_>) -> Rendered {
    let subject = match submission.kind {
        SubmissionKind::Contact => format!("Ny henvendelse fra {}", submission.name),
        SubmissionKind::Application => format!("Ny ansøgning fra {}", submission.name),
    };

    let phone = submission.phone.unwrap_or("-");
    let mut plain = format!(
        "Navn: {}\nEmail: {}\nTelefon: {}\n",
        submission.name, submission.email, phone
    );
    if let Some(position) = submission.position {
        plain.push_str(&format!("Stilling: {position}\n"));
    }
    plain.push_str(&format!("\n{}\n", submission.message));

    let mut html = format!(
        "<p><strong>Navn:</strong> {}<br>\
         <strong>Email:</strong> {}<br>\
         <strong>Telefon:</strong> {}</p>",
        escape(submission.name),
        escape(submission.email),
        escape(phone)
    );
    if let Some(position) = submission.position {
        html.push_str(&format!("<p><strong>Stilling:</strong> {}</p>", escape(position)));
    }
    html.push_str(&format!("<p>{}</p>", escape(submission.message)));

    Rendered {
        subject,
        plain,
        html,
    }
}

/// Acknowledgment sent back to the submitter, localized.
pub fn acknowledgment(submission: &Submission<'_>, lang: Lang) -> Rendered {
    let (subject, greeting, body_line) = match (submission.kind, lang) {
        (SubmissionKind::Contact, Lang::Da) => (
            "Vi har modtaget din henvendelse".to_string(),
            format!("Hej {}", submission.name),
            "Tak for din besked. Vi vender tilbage hurtigst muligt.",
        ),
        (SubmissionKind::Contact, Lang::En) => (
            "We have received your message".to_string(),
            format!("Hi {}", submission.name),
            "Thank you for reaching out. We will get back to you as soon as possible.",
        ),
        (SubmissionKind::Application, Lang::Da) => (
            "Vi har modtaget din ansøgning".to_string(),
            format!("Hej {}", submission.name),
            "Tak for din ansøgning. Vi læser den og vender tilbage.",
        ),
        (SubmissionKind::Application, Lang::En) => (
            "We have received your application".to_string(),
            format!("Hi {}", submission.name),
            "Thank you for your application. We will review it and get back to you.",
        ),
    };

    let signature = match lang {
        Lang::Da => "Venlig hilsen\nLindholm Køreskole",
        Lang::En => "Best regards\nLindholm Køreskole",
    };

    let plain = format!("{greeting}\n\n{body_line}\n\n{signature}");
    let html = format!(
        "<p>{}</p><p>{}</p><p>{}</p>",
        escape(&greeting),
        escape(body_line),
        escape(signature).replace('\n', "<br>")
    );

    Rendered {
        subject,
        plain,
        html,
    }
}

/// Minimal HTML escaping for user-supplied text.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact() -> Submission<'static> {
        Submission {
            kind: SubmissionKind::Contact,
            name: "Mette Jensen",
            email: "mette@example.dk",
            phone: Some("12345678"),
            message: "Hvornår starter næste hold?",
            position: None,
        }
    }

    #[test]
    fn admin_notification_carries_all_fields() {
        let rendered = admin_notification(&contact());
        assert!(rendered.subject.contains("Mette Jensen"));
        assert!(rendered.plain.contains("mette@example.dk"));
        assert!(rendered.plain.contains("12345678"));
        assert!(rendered.plain.contains("Hvornår starter næste hold?"));
        assert!(rendered.html.contains("mette@example.dk"));
    }

    #[test]
    fn application_notification_includes_position() {
        let submission = Submission {
            kind: SubmissionKind::Application,
            position: Some("Kørelærer"),
            ..contact()
        };
        let rendered = admin_notification(&submission);
        assert!(rendered.subject.contains("ansøgning"));
        assert!(rendered.plain.contains("Kørelærer"));
    }

    #[test]
    fn acknowledgment_is_localized() {
        let da = acknowledgment(&contact(), Lang::Da);
        assert!(da.subject.contains("henvendelse"));
        assert!(da.plain.contains("Hej Mette Jensen"));

        let en = acknowledgment(&contact(), Lang::En);
        assert!(en.subject.contains("received your message"));
        assert!(en.plain.contains("Hi Mette Jensen"));
    }

    #[test]
    fn html_bodies_escape_user_input() {
        let submission = Submission {
            message: "<script>alert(1)</script>",
            ..contact()
        };
        let rendered = admin_notification(&submission);
        assert!(!rendered.html.contains("<script>"));
        assert!(rendered.html.contains("&lt;script&gt;"));
    }
}

use crate::ContactForm;

/// Builds the mail-compose link offered when forwarding fails, pre-filled
/// with the values the user already typed.
///
/// Building the link cannot fail; whether anything opens it is entirely up
/// to the user agent.
pub fn mailto_fallback(form: &ContactForm, support_address: &str) -> String {
    let body = format!(
        "Name: {}\nEmail: {}\n\nMessage:\n{}",
        form.name, form.email, form.message
    );

    format!(
        "mailto:{}?subject={}&body={}",
        support_address,
        urlencoding::encode(&form.subject),
        urlencoding::encode(&body)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ContactForm {
        ContactForm {
            name: "Ada Lovelace".to_owned(),
            email: "ada@example.com".to_owned(),
            subject: "Bug Report".to_owned(),
            message: "Receiver drops out\nevery few minutes.".to_owned(),
        }
    }

    #[test]
    fn addresses_the_support_mailbox() {
        let link = mailto_fallback(&form(), "support@beamcast.app");

        assert!(link.starts_with("mailto:support@beamcast.app?subject="));
    }

    #[test]
    fn encodes_subject_and_body() {
        let link = mailto_fallback(&form(), "support@beamcast.app");

        assert!(link.contains("subject=Bug%20Report"));
        assert!(link.contains("body=Name%3A%20Ada%20Lovelace%0A"));
        assert!(link.contains("Email%3A%20ada%40example.com"));
        assert!(link.contains("%0A%0AMessage%3A%0A"));
        assert!(link.contains("Receiver%20drops%20out%0Aevery%20few%20minutes."));
    }

    #[test]
    fn carries_every_collected_field() {
        let link = mailto_fallback(&form(), "support@beamcast.app");
        let decoded = urlencoding::decode(&link).unwrap();

        assert!(decoded.contains("Ada Lovelace"));
        assert!(decoded.contains("ada@example.com"));
        assert!(decoded.contains("Receiver drops out"));
    }
}

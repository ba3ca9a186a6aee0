//! Static question/answer table consulted before any completion request.

use std::collections::HashMap;

use phf::phf_map;

/// Built-in entries, keyed by normalized question text.
pub static DEFAULT_FAQ: phf::Map<&'static str, &'static str> = phf_map! {
    "how to register an account?" => "To register an account, please go to the registration page and fill out the form.",
    "how to track my order?" => "You can track your order by logging into your account and navigating to the 'My Orders' section.",
    "what is your return policy?" => "Our return policy allows returns within 30 days of purchase with a valid receipt.",
    "how to contact support?" => "You can contact support by emailing support@yourcompany.com or calling 1-800-123-4567.",
    "what payment methods do you accept?" => "We accept Visa, MasterCard, American Express, and PayPal.",
    "how do i reset my password?" => "To reset your password, click on 'Forgot Password' on the login page and follow the instructions.",
};

/// Trims surrounding whitespace and case-folds `message`.
pub fn normalize(message: &str) -> String {
    message.trim().to_lowercase()
}

/// Immutable FAQ table. Built once at startup and shared behind an `Arc`.
#[derive(Debug, Clone)]
pub struct FaqTable {
    entries: HashMap<String, String>,
}

impl FaqTable {
    /// Builds a table from question/answer pairs, normalizing each question.
    /// Questions must be distinct after normalization; `Config::validate` checks this.
    pub fn from_entries<I, Q, A>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Q, A)>,
        Q: AsRef<str>,
        A: Into<String>,
    {
        let entries = entries
            .into_iter()
            .map(|(question, answer)| (normalize(question.as_ref()), answer.into()))
            .collect();
        Self { entries }
    }

    /// Exact lookup on the normalized form of `message`.
    pub fn lookup(&self, message: &str) -> Option<&str> {
        self.entries.get(&normalize(message)).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(question, answer)| (question.as_str(), answer.as_str()))
    }
}

impl Default for FaqTable {
    fn default() -> Self {
        Self::from_entries(DEFAULT_FAQ.entries().map(|(q, a)| (*q, *a)))
    }
}

//! Contact-information detection and header/contact placement risk.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::layout::analyzer::RiskLevel;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").expect("valid email pattern")
});

static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\+?\d{1,3}[\s.-]?)?\(?\d{3}\)?[\s.-]?\d{3}[\s.-]?\d{4}")
        .expect("valid phone pattern")
});

static PROFILE_URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:linkedin\.com/in|github\.com|gitlab\.com|behance\.net|dribbble\.com)/[\w-]+")
        .expect("valid profile url pattern")
});

/// Which kinds of contact details were found in the extracted text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSignals {
    pub has_email: bool,
    pub has_phone: bool,
    pub has_profile_url: bool,
}

impl ContactSignals {
    pub fn any(&self) -> bool {
        self.has_email || self.has_phone || self.has_profile_url
    }
}

/// Scans extracted text for an email address, a phone number, or a
/// professional-network profile URL.
pub fn detect_contact_info(text: &str) -> ContactSignals {
    ContactSignals {
        has_email: EMAIL_PATTERN.is_match(text),
        has_phone: PHONE_PATTERN.is_match(text),
        has_profile_url: PROFILE_URL_PATTERN.is_match(text),
    }
}

/// Classifies header/contact placement risk.
///
/// Both branches read `Low`: absent contact details are not a placement risk.
#[allow(clippy::if_same_then_else)]
pub fn classify_header_risk(contact: &ContactSignals) -> RiskLevel {
    if contact.any() {
        RiskLevel::Low
    } else {
        RiskLevel::Low
    }
}

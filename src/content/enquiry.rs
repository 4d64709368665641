//! Admission enquiry form and its local validation rules.
//!
//! Validation runs synchronously before any network call; an invalid form
//! never reaches the API.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::ContentError;

static MOBILE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{10}$").expect("valid regex"));

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("valid regex"));

/// Admission enquiry submission.
///
/// Field names match the API payload; the HTML form posts the same names.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EnquiryForm {
    pub name: String,
    pub email: String,
    #[serde(rename = "mobileNumber")]
    pub mobile_number: String,
}

/// Response payload from a submitted enquiry
#[derive(Debug, Clone, Deserialize)]
pub struct EnquiryReceipt {
    pub message: String,
    pub success: bool,
}

impl EnquiryForm {
    /// Check every field, in order: all fields non-empty, mobile number is
    /// exactly ten digits, email has a user@host.tld shape.
    pub fn validate(&self) -> Result<(), ContentError> {
        let fields: [(&'static str, &str); 3] = [
            ("name", &self.name),
            ("email", &self.email),
            ("mobileNumber", &self.mobile_number),
        ];
        for (field, value) in fields {
            if value.is_empty() {
                return Err(ContentError::InvalidField {
                    field,
                    message: "All fields are required",
                });
            }
        }

        if !MOBILE_RE.is_match(&self.mobile_number) {
            return Err(ContentError::InvalidField {
                field: "mobileNumber",
                message: "Please enter a valid 10-digit mobile number",
            });
        }

        if !EMAIL_RE.is_match(&self.email) {
            return Err(ContentError::InvalidField {
                field: "email",
                message: "Please enter a valid email address",
            });
        }

        Ok(())
    }
}

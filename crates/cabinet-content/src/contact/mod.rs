//! # Contact Form
//!
//! Validation of appointment requests and the hand-off to an external
//! message relay. Delivery itself is the relay's business: this module only
//! builds the template payload and reports success or failure.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// Shown to the visitor when the relay could not deliver the message.
pub const RELAY_FAILURE_NOTICE: &str =
    "Une erreur est survenue. Veuillez réessayer ou nous contacter par téléphone.";

const PHONE_FALLBACK: &str = "Non renseigné";
const MESSAGE_FALLBACK: &str = "Demande de rendez-vous";

/// Reason for the appointment, as offered by the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Motive {
    GeneralConsultation,
    ConservativeCare,
    Implantology,
    CosmeticDentistry,
    Orthodontics,
    DentalEmergency,
    Other,
}

impl Motive {
    pub const ALL: [Motive; 7] = [
        Motive::GeneralConsultation,
        Motive::ConservativeCare,
        Motive::Implantology,
        Motive::CosmeticDentistry,
        Motive::Orthodontics,
        Motive::DentalEmergency,
        Motive::Other,
    ];

    /// Label used in the form and in the relayed message.
    pub fn label(self) -> &'static str {
        match self {
            Motive::GeneralConsultation => "Consultation générale",
            Motive::ConservativeCare => "Soins conservateurs",
            Motive::Implantology => "Implantologie",
            Motive::CosmeticDentistry => "Esthétique dentaire",
            Motive::Orthodontics => "Orthodontie",
            Motive::DentalEmergency => "Urgence dentaire",
            Motive::Other => "Autre",
        }
    }
}

impl fmt::Display for Motive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown consultation motive: {0:?}")]
pub struct UnknownMotive(pub String);

impl FromStr for Motive {
    type Err = UnknownMotive;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Motive::ALL
            .into_iter()
            .find(|motive| motive.label() == s)
            .ok_or_else(|| UnknownMotive(s.to_string()))
    }
}

/// What the visitor typed into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub motive: Option<Motive>,
    pub message: Option<String>,
}

/// Template parameters expected by the message relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub from_name: String,
    pub from_email: String,
    pub phone: String,
    pub service: String,
    pub message: String,
}

#[derive(Debug, Error)]
#[error("message relay failed: {reason}")]
pub struct RelayError {
    pub reason: String,
}

impl RelayError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("required field is empty: {0}")]
    MissingField(&'static str),
    #[error("invalid email address: {0:?}")]
    InvalidEmail(String),
    #[error(transparent)]
    Relay(#[from] RelayError),
}

impl ContactError {
    /// Message to display next to the form.
    pub fn user_message(&self) -> String {
        match self {
            ContactError::MissingField(field) => format!("Le champ « {field} » est obligatoire."),
            ContactError::InvalidEmail(_) => "Veuillez saisir une adresse email valide.".to_string(),
            ContactError::Relay(_) => RELAY_FAILURE_NOTICE.to_string(),
        }
    }
}

/// Capability to deliver a contact payload somewhere a human will read it.
pub trait MessageRelay {
    fn send(&self, payload: &ContactPayload) -> Result<(), RelayError>;
}

impl ContactRequest {
    /// Checks required fields and builds the relay payload.
    pub fn to_payload(&self) -> Result<ContactPayload, ContactError> {
        let first_name = required(&self.first_name, "Prénom")?;
        let last_name = required(&self.last_name, "Nom")?;
        let email = required(&self.email, "Email")?;
        if !is_plausible_email(email) {
            return Err(ContactError::InvalidEmail(email.to_string()));
        }
        let motive = self
            .motive
            .ok_or(ContactError::MissingField("Motif de consultation"))?;

        Ok(ContactPayload {
            from_name: format!("{first_name} {last_name}"),
            from_email: email.to_string(),
            phone: non_empty(self.phone.as_deref()).unwrap_or(PHONE_FALLBACK).to_string(),
            service: motive.label().to_string(),
            message: non_empty(self.message.as_deref())
                .unwrap_or(MESSAGE_FALLBACK)
                .to_string(),
        })
    }
}

/// Validates `request` and hands it to `relay`. No retry on failure.
pub fn submit(request: &ContactRequest, relay: &dyn MessageRelay) -> Result<(), ContactError> {
    let payload = request.to_payload()?;

    relay.send(&payload).map_err(|err| {
        log::error!("contact relay failed for {}: {err}", payload.from_email);
        ContactError::Relay(err)
    })?;

    log::info!("contact request relayed for {}", payload.from_email);
    Ok(())
}

fn required<'a>(value: &'a str, field: &'static str) -> Result<&'a str, ContactError> {
    non_empty(Some(value)).ok_or(ContactError::MissingField(field))
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Non-empty local part, `@`, and a dotted domain with no empty labels.
fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !email.contains(char::is_whitespace)
                && domain.contains('.')
                && domain.split('.').all(|label| !label.is_empty())
        }
        None => false,
    }
}

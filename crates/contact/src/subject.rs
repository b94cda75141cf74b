use serde::Deserialize;
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// The subjects offered by the contact form's select control.
///
/// The form still submits the subject as plain text; this enum exists so the
/// page can render its options from one place.
#[derive(
    EnumString, Display, VariantArray, Default, Clone, Copy, Debug, PartialEq, Deserialize, AsRefStr,
)]
pub enum Subject {
    #[default]
    #[serde(rename = "General Inquiry")]
    #[strum(serialize = "General Inquiry")]
    GeneralInquiry,
    #[serde(rename = "Technical Support")]
    #[strum(serialize = "Technical Support")]
    TechnicalSupport,
    #[serde(rename = "Bug Report")]
    #[strum(serialize = "Bug Report")]
    BugReport,
    #[serde(rename = "Feature Request")]
    #[strum(serialize = "Feature Request")]
    FeatureRequest,
    Other,
}

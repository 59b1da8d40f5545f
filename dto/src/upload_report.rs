use derive_getters::Getters;
use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportStatus {
    #[serde(rename = "sucesso")]
    Success,
    #[serde(rename = "erro")]
    Error,
    #[serde(other)]
    Unknown,
}

/// One line of an upload report.
/// `line` is `None` when the message concerns the whole file.
#[derive(Debug, Getters, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportDetail {
    #[serde(rename = "linha", default)]
    line: Option<u32>,
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    status: Option<ReportStatus>,
    #[serde(rename = "mensagem", default)]
    message: Option<String>,
}

impl ReportDetail {
    pub fn new(
        line: Option<u32>,
        id: Option<String>,
        status: Option<ReportStatus>,
        message: Option<String>,
    ) -> Self {
        Self {
            line,
            id,
            status,
            message,
        }
    }
}

#[derive(Debug, Getters, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedRow {
    #[serde(rename = "sucesso", default)]
    success: bool,
}

impl ProcessedRow {
    pub fn new(success: bool) -> Self {
        Self { success }
    }
}

/// `detail` of a backend error: a message for errors raised on purpose,
/// anything else (such as a list of validation errors) otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged, from = "RawDetail")]
pub enum Detail {
    Message(String),
    Other,
}

impl Detail {
    pub fn message(&self) -> Option<&str> {
        match self {
            Detail::Message(message) => Some(message),
            Detail::Other => None,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDetail {
    Message(String),
    Other(IgnoredAny),
}

impl From<RawDetail> for Detail {
    fn from(detail: RawDetail) -> Self {
        match detail {
            RawDetail::Message(message) => Detail::Message(message),
            RawDetail::Other(_) => Detail::Other,
        }
    }
}

/// Body returned by `POST /patrimonio/upload`.
/// Every field is optional: a validation report, a processing report
/// and a bare backend error (`detail`) all deserialize into this shape.
#[derive(Debug, Getters, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadReport {
    #[serde(default)]
    status: Option<ReportStatus>,
    #[serde(rename = "detalhes", default)]
    details: Option<Vec<ReportDetail>>,
    #[serde(rename = "processados", default)]
    processed: Option<Vec<ProcessedRow>>,
    #[serde(default)]
    detail: Option<Detail>,
}

impl UploadReport {
    pub fn new(
        status: Option<ReportStatus>,
        details: Option<Vec<ReportDetail>>,
        processed: Option<Vec<ProcessedRow>>,
        detail: Option<Detail>,
    ) -> Self {
        Self {
            status,
            details,
            processed,
            detail,
        }
    }
}

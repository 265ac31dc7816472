//! The CMCI response envelope.
//!
//! Every CMCI reply is `<response><resultsummary .../><records>...</records></response>`.
//! The result summary carries string-typed status codes; `api_response1`
//! equal to "1024" is the one success value. The records section is absent
//! on mutating calls that return nothing.

use serde::Serialize;

use crate::error::CmciError;
use crate::xml::{self, XmlNode};

/// The `api_response1` value that marks a successful request.
pub const API_RESPONSE_SUCCESS: &str = "1024";

/// Status block present on every CMCI response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultSummary {
    /// Primary response code; "1024" on success.
    pub api_response1: String,
    /// Secondary response code.
    pub api_response2: String,
    /// Symbolic name of the primary code, e.g. "OK", "NODATA", "INVALIDPARM".
    pub api_response1_alt: Option<String>,
    /// Symbolic name of the secondary code.
    pub api_response2_alt: Option<String>,
    /// Number of records matched by the request.
    pub record_count: Option<String>,
    /// Number of records included in this response.
    pub displayed_record_count: Option<String>,
}

/// A parsed CMCI response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmciResponse {
    result_summary: ResultSummary,
    records: Option<XmlNode>,
}

impl CmciResponse {
    /// Parses a response body and extracts the envelope.
    ///
    /// Malformed XML and envelopes without a result summary both surface as
    /// request errors; callers never see a separate parse-error category.
    pub fn from_xml(body: &str) -> Result<Self, CmciError> {
        let document = xml::parse(body).map_err(|e| CmciError::request(e.to_string()))?;
        let response = document
            .get("response")
            .ok_or_else(|| CmciError::request("response body has no <response> envelope"))?;
        let summary = response
            .get("resultsummary")
            .ok_or_else(|| CmciError::request("response envelope has no resultsummary"))?;
        let api_response1 = required_code(summary, "api_response1")?;
        let api_response2 = required_code(summary, "api_response2")?;
        let result_summary = ResultSummary {
            api_response1,
            api_response2,
            api_response1_alt: summary.attribute("api_response1_alt").map(str::to_string),
            api_response2_alt: summary.attribute("api_response2_alt").map(str::to_string),
            record_count: summary.attribute("recordcount").map(str::to_string),
            displayed_record_count: summary
                .attribute("displayedrecordcount")
                .map(str::to_string),
        };
        Ok(Self {
            result_summary,
            records: response.get("records").cloned(),
        })
    }

    /// The status block of this response.
    pub fn result_summary(&self) -> &ResultSummary {
        &self.result_summary
    }

    /// The records section, if the server returned one.
    pub fn records(&self) -> Option<&XmlNode> {
        self.records.as_ref()
    }

    /// Records of the given resource type as a flat sequence, whether the
    /// server returned one record or many. Record tags are the lowercased
    /// resource-type name.
    pub fn records_of(&self, resource_type: &str) -> &[XmlNode] {
        self.records
            .as_ref()
            .and_then(|records| records.get(&resource_type.to_ascii_lowercase()))
            .map(XmlNode::as_items)
            .unwrap_or(&[])
    }

    /// Whether `api_response1` is the success code.
    pub fn is_success(&self) -> bool {
        self.result_summary.api_response1 == API_RESPONSE_SUCCESS
    }

    /// Converts a non-success response into a request error carrying the
    /// numeric codes and their symbolic names.
    pub fn expect_success(self) -> Result<Self, CmciError> {
        if self.is_success() {
            return Ok(self);
        }
        let summary = &self.result_summary;
        Err(CmciError::request(format!(
            "request failed with api_response1 {}{} and api_response2 {}{}",
            summary.api_response1,
            symbolic(&summary.api_response1_alt),
            summary.api_response2,
            symbolic(&summary.api_response2_alt),
        )))
    }
}

fn required_code(summary: &XmlNode, name: &str) -> Result<String, CmciError> {
    summary
        .attribute(name)
        .map(str::to_string)
        .ok_or_else(|| CmciError::request(format!("resultsummary has no {} attribute", name)))
}

fn symbolic(alt: &Option<String>) -> String {
    match alt {
        Some(name) => format!(" ({})", name),
        None => String::new(),
    }
}

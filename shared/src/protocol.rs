//! Endpoint catalogue of the backend REST surface.
//!
//! An [`Endpoint`] holds raw (unencoded) path segments and query pairs; the
//! client resolves it against its base URL and does the percent-encoding, so
//! a patient id containing `/` or `?` can never escape its path segment.

use crate::PatientQuery;
use serde::{Deserialize, Serialize};
use std::fmt;

/// HTTP methods used by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =========================================================
// Endpoint
// =========================================================

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Endpoint {
    segments: Vec<String>,
    trailing_slash: bool,
    query: Vec<(String, String)>,
}

impl Endpoint {
    /// Builds an endpoint from a static path such as `/api/patients/`.
    ///
    /// A trailing `/` is preserved: the backend routes `/api/patients/` and
    /// `/api/patients` differently for `POST`.
    pub fn new(path: &str) -> Self {
        let segments = path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        Self {
            segments,
            trailing_slash: path.len() > 1 && path.ends_with('/'),
            query: Vec::new(),
        }
    }

    /// Appends one dynamic path segment (encoded later, never split).
    pub fn segment(mut self, segment: impl Into<String>) -> Self {
        self.segments.push(segment.into());
        self
    }

    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    pub fn query_opt(self, key: &str, value: Option<&str>) -> Self {
        match value {
            Some(v) if !v.trim().is_empty() => self.query(key, v.trim()),
            _ => self,
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn has_trailing_slash(&self) -> bool {
        self.trailing_slash
    }

    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    /// Path without the query string. Login credentials travel in the query,
    /// so this is what gets logged.
    pub fn path(&self) -> String {
        let mut out: String = self.segments.iter().map(|s| format!("/{s}")).collect();
        if self.trailing_slash || self.segments.is_empty() {
            out.push('/');
        }
        out
    }
}

/// Unencoded form, for logs and error messages.
impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())?;
        for (i, (k, v)) in self.query.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(f, "{sep}{k}={v}")?;
        }
        Ok(())
    }
}

// =========================================================
// Endpoint catalogue
// =========================================================

pub mod endpoints {
    use super::*;

    pub fn login(username: &str, password: &str) -> Endpoint {
        Endpoint::new("/api/auth/login")
            .query("username", username)
            .query("password", password)
    }

    pub fn patients(query: &PatientQuery) -> Endpoint {
        Endpoint::new("/api/patients")
            .query("skip", query.skip)
            .query("limit", query.limit)
            .query_opt("search", query.search.as_deref())
            .query_opt("status", query.status.as_deref())
            .query_opt("risk_level", query.risk_level.as_deref())
    }

    pub fn patient(patient_id: &str) -> Endpoint {
        Endpoint::new("/api/patients").segment(patient_id)
    }

    pub fn create_patient() -> Endpoint {
        Endpoint::new("/api/patients/")
    }

    pub fn patient_vitals(patient_id: &str, limit: u32) -> Endpoint {
        patient(patient_id).segment("vitals").query("limit", limit)
    }

    pub fn patient_labs(patient_id: &str, limit: u32) -> Endpoint {
        patient(patient_id).segment("labs").query("limit", limit)
    }

    pub fn patient_medications(patient_id: &str, active_only: bool) -> Endpoint {
        patient(patient_id)
            .segment("medications")
            .query("active_only", active_only)
    }

    pub fn patient_notes(patient_id: &str, limit: u32) -> Endpoint {
        patient(patient_id).segment("notes").query("limit", limit)
    }

    pub fn prediction(patient_id: &str) -> Endpoint {
        Endpoint::new("/api/predictions/predict").segment(patient_id)
    }

    pub fn analytics_overview() -> Endpoint {
        Endpoint::new("/api/analytics/overview")
    }

    pub fn patient_volume(months: u32) -> Endpoint {
        Endpoint::new("/api/analytics/patient-volume").query("months", months)
    }

    pub fn condition_distribution() -> Endpoint {
        Endpoint::new("/api/analytics/condition-distribution")
    }

    pub fn risk_distribution() -> Endpoint {
        Endpoint::new("/api/analytics/risk-distribution")
    }

    pub fn ai_insights() -> Endpoint {
        Endpoint::new("/api/explainability/insights")
    }

    pub fn model_performance() -> Endpoint {
        Endpoint::new("/api/explainability/model-performance")
    }

    pub fn ai_metrics() -> Endpoint {
        Endpoint::new("/api/explainability/metrics")
    }

    pub fn user_profile() -> Endpoint {
        Endpoint::new("/api/user/profile")
    }

    pub fn user_settings() -> Endpoint {
        Endpoint::new("/api/user/settings")
    }

    pub fn data_entry_submit() -> Endpoint {
        Endpoint::new("/api/data-entry/submit")
    }

    pub fn health() -> Endpoint {
        Endpoint::new("/health")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_display_matches_backend_paths() {
        assert_eq!(
            endpoints::patients(&PatientQuery::page(0, 100)).to_string(),
            "/api/patients?skip=0&limit=100"
        );
        assert_eq!(endpoints::create_patient().to_string(), "/api/patients/");
        assert_eq!(
            endpoints::patient_medications("P001", true).to_string(),
            "/api/patients/P001/medications?active_only=true"
        );
        assert_eq!(
            endpoints::prediction("P002").to_string(),
            "/api/predictions/predict/P002"
        );
        assert_eq!(endpoints::health().to_string(), "/health");
    }

    #[test]
    fn test_path_omits_query() {
        assert_eq!(endpoints::login("demo_doctor", "demo123").path(), "/api/auth/login");
        assert_eq!(endpoints::create_patient().path(), "/api/patients/");
    }

    #[test]
    fn test_dynamic_segment_is_not_split() {
        let ep = endpoints::patient("a/b");
        assert_eq!(ep.segments(), ["api", "patients", "a/b"]);
    }

    #[test]
    fn test_blank_filters_are_dropped() {
        let query = PatientQuery {
            search: Some("  ".to_string()),
            status: Some("critical".to_string()),
            ..PatientQuery::page(0, 20)
        };
        let ep = endpoints::patients(&query);
        let keys: Vec<&str> = ep.query_pairs().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["skip", "limit", "status"]);
    }
}

//! Wire types for the Hackwell REST backend.
//!
//! Every payload the dashboard reads or writes has an explicit schema here,
//! so a backend contract change surfaces as a decode error at the client
//! boundary instead of an `undefined` deep inside a view.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub mod date;
pub mod protocol;

pub use date::Timestamp;

// =========================================================
// Constants
// =========================================================

pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";
pub const CONTENT_TYPE_JSON: &str = "application/json";

// =========================================================
// Authentication
// =========================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
}

/// Body of every non-2xx response produced by the backend.
///
/// `detail` is kept as a raw JSON value: validation failures carry a list
/// of issues there rather than a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub detail: serde_json::Value,
}

impl ApiErrorBody {
    /// The human-readable detail, if the backend sent a non-empty string.
    pub fn message(&self) -> Option<&str> {
        self.detail.as_str().filter(|s| !s.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub environment: Option<String>,
}

// =========================================================
// Patients
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub id: i64,
    pub patient_id: String,
    pub name: String,
    pub age: u32,
    pub gender: String,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub emergency_contact: Option<String>,
    #[serde(default)]
    pub medical_history: Option<String>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub chronic_conditions: Vec<String>,
    #[serde(default)]
    pub family_history: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub risk_level: Option<String>,
    pub created_at: Timestamp,
    #[serde(default)]
    pub updated_at: Option<Timestamp>,
}

impl Patient {
    /// Initials shown in list avatars ("John Smith" -> "JS").
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }

    /// Most recent activity: `updated_at` when present, otherwise `created_at`.
    pub fn last_activity(&self) -> Timestamp {
        self.updated_at.unwrap_or(self.created_at)
    }
}

/// Payload of `POST /api/patients/`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NewPatient {
    pub patient_id: String,
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub date_of_birth: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emergency_contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medical_history: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default)]
    pub chronic_conditions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_history: Option<String>,
}

/// Payload of `PUT /api/patients/{id}`. Only set fields are sent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PatientUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chronic_conditions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_history: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<String>,
}

/// Server-side filters for the patient list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PatientQuery {
    pub skip: u32,
    pub limit: u32,
    pub search: Option<String>,
    pub status: Option<String>,
    pub risk_level: Option<String>,
}

impl PatientQuery {
    pub fn page(skip: u32, limit: u32) -> Self {
        Self {
            skip,
            limit,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VitalSigns {
    pub id: i64,
    pub patient_id: i64,
    #[serde(default)]
    pub systolic_bp: Option<f64>,
    #[serde(default)]
    pub diastolic_bp: Option<f64>,
    #[serde(default)]
    pub heart_rate: Option<f64>,
    #[serde(default)]
    pub blood_oxygen: Option<f64>,
    #[serde(default)]
    pub body_temperature: Option<f64>,
    #[serde(default)]
    pub respiratory_rate: Option<f64>,
    #[serde(default)]
    pub weight: Option<f64>,
    pub recorded_at: Timestamp,
}

impl VitalSigns {
    /// "120/80" when both pressures were recorded.
    pub fn blood_pressure(&self) -> Option<String> {
        match (self.systolic_bp, self.diastolic_bp) {
            (Some(sys), Some(dia)) => Some(format!("{sys:.0}/{dia:.0}")),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabResult {
    pub id: i64,
    pub patient_id: i64,
    #[serde(default)]
    pub fasting_glucose: Option<f64>,
    #[serde(default)]
    pub hba1c: Option<f64>,
    #[serde(default)]
    pub ldl_cholesterol: Option<f64>,
    #[serde(default)]
    pub hdl_cholesterol: Option<f64>,
    #[serde(default)]
    pub triglycerides: Option<f64>,
    #[serde(default)]
    pub creatinine: Option<f64>,
    #[serde(default)]
    pub egfr: Option<f64>,
    #[serde(default)]
    pub hemoglobin: Option<f64>,
    #[serde(default)]
    pub bnp: Option<f64>,
    pub test_date: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Medication {
    pub id: i64,
    pub patient_id: i64,
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    pub start_date: Timestamp,
    #[serde(default)]
    pub end_date: Option<Timestamp>,
    #[serde(default)]
    pub adherence_rate: Option<f64>,
    #[serde(default)]
    pub missed_doses_per_week: Option<u32>,
    #[serde(default)]
    pub side_effects: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClinicalNote {
    pub id: i64,
    pub patient_id: i64,
    pub provider_id: i64,
    pub note_type: String,
    pub content: String,
    pub visit_date: Timestamp,
}

// =========================================================
// Predictions
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

/// Result of `GET /api/predictions/predict/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskPrediction {
    #[serde(default)]
    pub prediction_id: Option<i64>,
    pub risk_score: f64,
    pub risk_level: RiskLevel,
    pub confidence: f64,
    pub prediction_type: String,
    pub prediction_window: u32,
    #[serde(default)]
    pub feature_importance: BTreeMap<String, f64>,
}

impl RiskPrediction {
    /// Features sorted by descending importance.
    pub fn top_features(&self, n: usize) -> Vec<(&str, f64)> {
        let mut features: Vec<(&str, f64)> = self
            .feature_importance
            .iter()
            .map(|(name, weight)| (name.as_str(), *weight))
            .collect();
        features.sort_by(|a, b| b.1.total_cmp(&a.1));
        features.truncate(n);
        features
    }
}

// =========================================================
// Analytics
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsOverview {
    pub total_patients: u64,
    pub active_cases: u64,
    pub critical_alerts: u64,
    pub recovery_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientVolume {
    pub month: String,
    pub patients: u32,
    pub new_patients: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionShare {
    pub name: String,
    pub value: u32,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskShare {
    pub risk: String,
    pub count: u32,
    pub percentage: f64,
}

// =========================================================
// Explainability
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightStatus {
    Urgent,
    Pending,
    Active,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiInsight {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub patient: String,
    pub confidence: f64,
    pub prediction: String,
    #[serde(default)]
    pub factors: Vec<String>,
    pub recommendation: String,
    pub status: InsightStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightsEnvelope {
    pub insights: Vec<AiInsight>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelPerformance {
    pub model_name: String,
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
    pub auc_roc: f64,
    #[serde(default)]
    pub last_updated: Option<Timestamp>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelsEnvelope {
    pub models: Vec<ModelPerformance>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceDistribution {
    pub high: u32,
    pub medium: u32,
    pub low: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiMetrics {
    pub total_predictions: u64,
    pub successful_predictions: u64,
    pub accuracy_rate: f64,
    pub models_deployed: u32,
    pub active_alerts: u32,
    pub processed_this_week: u32,
    pub improvement_over_last_month: f64,
    pub confidence_distribution: ConfidenceDistribution,
    #[serde(default)]
    pub prediction_types: BTreeMap<String, u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsEnvelope {
    pub metrics: AiMetrics,
}

// =========================================================
// User profile & settings
// =========================================================

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserProfile {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub license: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    pub email: bool,
    pub push: bool,
    pub sms: bool,
    pub critical_alerts: bool,
    pub weekly_reports: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub theme: String,
    pub language: String,
    pub timezone: String,
    pub date_format: String,
    pub default_view: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecuritySettings {
    pub two_factor: bool,
    pub session_timeout: String,
    pub password_expiry: String,
    pub login_alerts: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSettings {
    pub notifications: NotificationSettings,
    pub preferences: Preferences,
    pub security: SecuritySettings,
}

/// Partial settings update: the settings page saves one group at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserSettingsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notifications: Option<NotificationSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences: Option<Preferences>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<SecuritySettings>,
}

// =========================================================
// Data entry
// =========================================================

/// Combined intake form posted to `POST /api/data-entry/submit`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PatientDataEntry {
    pub patient_id: String,
    pub age: u32,
    pub gender: String,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    #[serde(default)]
    pub chronic_conditions: Vec<String>,
    pub family_history: Option<String>,

    pub systolic_bp: Option<f64>,
    pub diastolic_bp: Option<f64>,
    pub heart_rate: Option<f64>,
    pub blood_oxygen: Option<f64>,
    pub body_temp: Option<f64>,
    pub respiratory_rate: Option<f64>,

    pub fasting_glucose: Option<f64>,
    pub hba1c: Option<f64>,
    pub ldl_cholesterol: Option<f64>,
    pub hdl_cholesterol: Option<f64>,
    pub triglycerides: Option<f64>,
    pub creatinine: Option<f64>,
    pub hemoglobin: Option<f64>,

    pub current_medications: Option<String>,
    pub missed_doses: Option<u32>,
    pub side_effects: Option<String>,

    pub exercise_minutes: Option<f64>,
    pub sleep_duration: Option<f64>,
    pub stress_level: Option<f64>,
    pub smoking_status: Option<String>,
    pub alcohol_usage: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    Success,
    PartialSuccess,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataEntryReceipt {
    pub message: String,
    pub patient_id: String,
    pub status: SubmissionStatus,
    #[serde(default)]
    pub prediction: Option<RiskPrediction>,
    #[serde(default)]
    pub error: Option<String>,
}

// =========================================================
// serde helpers
// =========================================================

fn default_true() -> bool {
    true
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn patient_json() -> serde_json::Value {
        json!({
            "id": 1,
            "patient_id": "P001",
            "name": "John Smith",
            "age": 67,
            "gender": "male",
            "date_of_birth": "1957-03-02",
            "chronic_conditions": null,
            "status": "active",
            "risk_level": "high",
            "created_at": "2024-01-10T08:00:00",
            "updated_at": null
        })
    }

    #[test]
    fn test_patient_tolerates_nulls_and_missing_optionals() {
        let patient: Patient = serde_json::from_value(patient_json()).unwrap();
        assert_eq!(patient.patient_id, "P001");
        assert!(patient.chronic_conditions.is_empty());
        assert!(patient.phone.is_none());
        assert_eq!(patient.last_activity(), patient.created_at);
        assert_eq!(patient.initials(), "JS");
    }

    #[test]
    fn test_error_body_message_requires_non_empty_string() {
        let body: ApiErrorBody = serde_json::from_value(json!({"detail": "Invalid credentials"})).unwrap();
        assert_eq!(body.message(), Some("Invalid credentials"));

        let empty: ApiErrorBody = serde_json::from_value(json!({"detail": ""})).unwrap();
        assert_eq!(empty.message(), None);

        let validation: ApiErrorBody =
            serde_json::from_value(json!({"detail": [{"loc": ["query", "username"]}]})).unwrap();
        assert_eq!(validation.message(), None);
    }

    #[test]
    fn test_settings_use_camel_case_keys() {
        let settings: UserSettings = serde_json::from_value(json!({
            "notifications": {"email": true, "push": false, "sms": true, "criticalAlerts": true, "weeklyReports": false},
            "preferences": {"theme": "light", "language": "en", "timezone": "America/New_York", "dateFormat": "MM/DD/YYYY", "defaultView": "dashboard"},
            "security": {"twoFactor": true, "sessionTimeout": "30", "passwordExpiry": "90", "loginAlerts": true}
        }))
        .unwrap();
        assert!(settings.notifications.critical_alerts);
        assert_eq!(settings.preferences.date_format, "MM/DD/YYYY");

        let update = UserSettingsUpdate {
            security: Some(settings.security.clone()),
            ..Default::default()
        };
        let value = serde_json::to_value(&update).unwrap();
        assert!(value.get("notifications").is_none());
        assert_eq!(value["security"]["twoFactor"], json!(true));
    }

    #[test]
    fn test_insight_status_unknown_maps_to_other() {
        let insight: AiInsight = serde_json::from_value(json!({
            "id": 9,
            "type": "Readmission Risk",
            "patient": "Sarah Johnson (P002)",
            "confidence": 87.3,
            "prediction": "Medium risk of readmission",
            "recommendation": "Enhanced discharge planning",
            "status": "archived"
        }))
        .unwrap();
        assert_eq!(insight.status, InsightStatus::Other);
        assert!(insight.factors.is_empty());
    }

    #[test]
    fn test_prediction_top_features_sorted() {
        let prediction: RiskPrediction = serde_json::from_value(json!({
            "prediction_id": 4,
            "risk_score": 0.72,
            "risk_level": "high",
            "confidence": 0.88,
            "prediction_type": "deterioration",
            "prediction_window": 90,
            "feature_importance": {"age": 0.1, "hba1c": 0.4, "heart_rate": 0.25}
        }))
        .unwrap();
        let top = prediction.top_features(2);
        assert_eq!(top, vec![("hba1c", 0.4), ("heart_rate", 0.25)]);
    }
}

//! Data transfer objects for the consultation HTTP endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::coaching::{Consultation, ConsultationStatus, Framework, ImpactChart};

// ═══════════════════════════════════════════════════════════════════════════
// Request DTOs
// ═══════════════════════════════════════════════════════════════════════════

/// Request to generate a consultation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateConsultationRequest {
    /// Framework selected at submit time
    pub framework: Framework,
    /// Free-text management challenge description
    pub challenge: String,
}

// ═══════════════════════════════════════════════════════════════════════════
// Response DTOs
// ═══════════════════════════════════════════════════════════════════════════

/// Response carrying the generated consultation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsultationResponse {
    /// Correlation id stamped on this consultation (UUID string)
    pub consultation_id: String,
    /// Framework the consultation was generated for
    pub framework: Framework,
    /// How the body was produced
    pub status: ConsultationStatus,
    /// Markdown consultation body
    pub body: String,
    /// The fixed illustrative chart, rendered beneath every response
    pub chart: ImpactChart,
}

impl ConsultationResponse {
    /// Assembles the response; the chart is always the fixed projection.
    pub fn from_consultation(framework: Framework, consultation: Consultation) -> Self {
        Self {
            consultation_id: uuid::Uuid::new_v4().to_string(),
            framework,
            status: consultation.status,
            body: consultation.body,
            chart: ImpactChart::projected(),
        }
    }
}

/// Inline warning for recoverable input problems.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarningResponse {
    /// User-facing warning text
    pub warning: String,
}

impl WarningResponse {
    /// The empty-input warning.
    pub fn empty_challenge() -> Self {
        Self {
            warning: "Please describe your challenge first.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_deserializes_from_json() {
        let json = r#"{"framework":"blue_ocean_strategy","challenge":"Clearance is slow."}"#;
        let request: CreateConsultationRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.framework, Framework::BlueOceanStrategy);
        assert_eq!(request.challenge, "Clearance is slow.");
    }

    #[test]
    fn response_carries_fixed_chart() {
        let response = ConsultationResponse::from_consultation(
            Framework::GlobisKokorozashi,
            Consultation::live("T"),
        );

        assert_eq!(response.chart, ImpactChart::projected());
        assert_eq!(response.body, "T");
        assert_eq!(response.status, ConsultationStatus::Live);
        assert!(!response.consultation_id.is_empty());
    }

    #[test]
    fn response_chart_is_independent_of_body_and_status() {
        let live = ConsultationResponse::from_consultation(
            Framework::ScenarioPlanning,
            Consultation::live("anything at all"),
        );
        let error = ConsultationResponse::from_consultation(
            Framework::ScenarioPlanning,
            Consultation::error_placeholder(),
        );

        assert_eq!(live.chart, error.chart);
    }

    #[test]
    fn response_serializes_expected_shape() {
        let response = ConsultationResponse::from_consultation(
            Framework::EmotionalIntelligence,
            Consultation::demo("demo body"),
        );
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["framework"], "emotional_intelligence");
        assert_eq!(json["status"], "demo");
        assert_eq!(json["body"], "demo body");
        assert_eq!(json["chart"]["points"][1]["value"], 35);
    }

    #[test]
    fn warning_has_fixed_text() {
        let warning = WarningResponse::empty_challenge();
        assert_eq!(warning.warning, "Please describe your challenge first.");
    }
}

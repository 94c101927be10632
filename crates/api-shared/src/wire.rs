//! Wire request/response types.
//!
//! Enumerated fields travel as strings so callers may send either the stable identifier
//! (`upper_lip_central`, `full`) or the display label (`Upper lip – central`,
//! `Full thickness (cartilage / bone exposed)`). Conversion into core types happens in
//! [`RecommendReq::to_case`], which is also where boundary validation runs.

use flap_core::{
    classify, validate_diameter, AnatomicalSubunit, CaseInput, DefectType, DepthCategory,
    FlapResult, Recommendation, RiskFactors, SizeCategory,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// One entry of the subunit catalog with its size cutoffs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SubunitEntry {
    pub id: String,
    pub label: String,
    pub low_cm: f64,
    pub mid_cm: f64,
    /// `central` or `lateral` for lip subunits.
    pub zone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SubunitsRes {
    pub subunits: Vec<SubunitEntry>,
}

impl SubunitsRes {
    /// Builds the catalog listing.
    ///
    /// # Errors
    ///
    /// Returns [`flap_core::FlapError::UnknownSubunit`] if a subunit has no size threshold.
    pub fn from_catalog() -> FlapResult<Self> {
        let subunits = AnatomicalSubunit::all()
            .map(|subunit| {
                let threshold = flap_core::size::threshold_for(subunit)?;
                Ok(SubunitEntry {
                    id: subunit.id().to_owned(),
                    label: subunit.label().to_owned(),
                    low_cm: threshold.low,
                    mid_cm: threshold.mid,
                    zone: subunit.zone().map(|z| match z {
                        flap_core::LipZone::Central => "central".to_owned(),
                        flap_core::LipZone::Lateral => "lateral".to_owned(),
                    }),
                })
            })
            .collect::<FlapResult<Vec<_>>>()?;
        Ok(Self { subunits })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ClassifyReq {
    pub subunit: String,
    pub diameter_cm: f64,
}

impl ClassifyReq {
    /// Parses and validates the request, then classifies the diameter.
    ///
    /// # Errors
    ///
    /// Returns [`flap_core::FlapError::InvalidInput`] for an unrecognised subunit or an
    /// out-of-range diameter.
    pub fn classify(&self) -> FlapResult<SizeCategory> {
        let subunit: AnatomicalSubunit = self.subunit.parse()?;
        validate_diameter(self.diameter_cm)?;
        classify(subunit, self.diameter_cm)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ClassifyRes {
    pub size: String,
}

/// A case as submitted by a caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecommendReq {
    pub subunit: String,
    pub defect_type: String,
    pub diameter_cm: f64,
    pub depth: String,
    #[serde(default)]
    pub hair_bearing: bool,
    pub age: u32,
    #[serde(default)]
    pub diabetic: bool,
    #[serde(default)]
    pub active_smoker: bool,
    #[serde(default)]
    pub previously_irradiated: bool,
}

impl RecommendReq {
    /// Converts the request into a validated [`CaseInput`].
    ///
    /// # Errors
    ///
    /// Returns [`flap_core::FlapError::InvalidInput`] if any enumerated field is unrecognised
    /// or a numeric field is out of range.
    pub fn to_case(&self) -> FlapResult<CaseInput> {
        let subunit: AnatomicalSubunit = self.subunit.parse()?;
        let defect_type: DefectType = self.defect_type.parse()?;
        let depth: DepthCategory = self.depth.parse()?;
        CaseInput::new(
            subunit,
            defect_type,
            self.diameter_cm,
            depth,
            RiskFactors {
                hair_bearing: self.hair_bearing,
                age: self.age,
                diabetic: self.diabetic,
                active_smoker: self.active_smoker,
                previously_irradiated: self.previously_irradiated,
            },
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecommendRes {
    pub size: String,
    pub flap: String,
    pub rationale: String,
    pub notes: Vec<String>,
    /// The recommendation rendered for display.
    pub markdown: String,
}

impl From<Recommendation> for RecommendRes {
    fn from(rec: Recommendation) -> Self {
        let markdown = rec.to_markdown();
        Self {
            size: rec.size.as_str().to_owned(),
            flap: rec.flap,
            rationale: rec.rationale,
            notes: rec.notes,
            markdown,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FeedbackReq {
    pub case: RecommendReq,
    pub used_recommended: bool,
    /// Required when `used_recommended` is false.
    #[serde(default)]
    pub alternative_flap: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FeedbackRes {
    pub logged: bool,
    pub timestamp_utc: String,
    pub recommended_flap: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UsageCountRes {
    pub logged_cases: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use flap_core::FlapError;

    fn request() -> RecommendReq {
        RecommendReq {
            subunit: "Nasal tip".into(),
            defect_type: "oncologic".into(),
            diameter_cm: 1.0,
            depth: "Superficial (skin only)".into(),
            hair_bearing: false,
            age: 60,
            diabetic: false,
            active_smoker: false,
            previously_irradiated: false,
        }
    }

    #[test]
    fn converts_labels_into_case() {
        let case = request().to_case().unwrap();
        assert_eq!(case.subunit, AnatomicalSubunit::NasalTip);
        assert_eq!(case.defect_type, DefectType::Oncologic);
        assert_eq!(case.depth, DepthCategory::Superficial);
    }

    #[test]
    fn rejects_unknown_enumerations() {
        let mut req = request();
        req.defect_type = "Burn".into();
        assert!(matches!(req.to_case(), Err(FlapError::InvalidInput(_))));

        let mut req = request();
        req.subunit = "Knee".into();
        assert!(matches!(req.to_case(), Err(FlapError::InvalidInput(_))));
    }

    #[test]
    fn rejects_non_positive_diameter() {
        let mut req = request();
        req.diameter_cm = 0.0;
        assert!(matches!(req.to_case(), Err(FlapError::InvalidInput(_))));
    }

    #[test]
    fn optional_flags_default_to_false() {
        let json = r#"{"subunit":"scalp","defect_type":"Traumatic","diameter_cm":3.0,"depth":"partial","age":40}"#;
        let req: RecommendReq = serde_json::from_str(json).unwrap();
        assert!(!req.hair_bearing && !req.diabetic && !req.active_smoker);
        assert!(req.to_case().is_ok());
    }

    #[test]
    fn catalog_listing_covers_all_subunits() {
        let res = SubunitsRes::from_catalog().unwrap();
        assert_eq!(res.subunits.len(), 24);
        assert_eq!(res.subunits[0].id, "scalp");
        let lip = res
            .subunits
            .iter()
            .find(|s| s.id == "lower_lip_lateral")
            .unwrap();
        assert_eq!(lip.zone.as_deref(), Some("lateral"));
    }

    #[test]
    fn classify_request_validates_diameter() {
        let req = ClassifyReq {
            subunit: "scalp".into(),
            diameter_cm: -2.0,
        };
        assert!(req.classify().is_err());

        let req = ClassifyReq {
            subunit: "scalp".into(),
            diameter_cm: 2.0,
        };
        assert_eq!(req.classify().unwrap(), SizeCategory::Small);
    }
}

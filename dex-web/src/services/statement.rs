//! Identity statement construction
//!
//! Builds the declarative predicate submitted with a verifiable presentation
//! request: "a credential from one of the accepted identity providers has a
//! date of birth inside the given range". The serialized shape matches what
//! the Concordium browser wallet expects, so the built statement can be
//! handed across the JS boundary as-is.

use chrono::{Datelike, Duration, NaiveDate, Utc};
use serde::Serialize;

use crate::utils::constants::IDENTITY_PROVIDERS;

/// Lower bound used for "at least N years old" range statements.
pub const MIN_DATE: &str = "18000101";

/// Attribute tag for date of birth.
pub const ATTRIBUTE_DOB: &str = "dob";

/// One credential statement: which issuers qualify plus the atomic
/// predicates their credential must satisfy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CredentialStatement {
    #[serde(rename = "idQualifier")]
    pub id_qualifier: IdQualifier,
    pub statement: Vec<AtomicStatement>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct IdQualifier {
    #[serde(rename = "type")]
    pub kind: String,
    pub issuers: Vec<u32>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum AtomicStatement {
    AttributeInRange {
        #[serde(rename = "attributeTag")]
        attribute_tag: String,
        lower: String,
        upper: String,
    },
}

/// Builder over credential statements, one `for_identity_credentials` call
/// per accepted issuer set.
#[derive(Default)]
pub struct StatementBuilder {
    statements: Vec<CredentialStatement>,
}

impl StatementBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_identity_credentials(
        mut self,
        issuers: &[u32],
        build: impl FnOnce(AtomicBuilder) -> AtomicBuilder,
    ) -> Self {
        let atomic = build(AtomicBuilder::default()).finish();
        self.statements.push(CredentialStatement {
            id_qualifier: IdQualifier {
                kind: "cred".to_string(),
                issuers: issuers.to_vec(),
            },
            statement: atomic,
        });
        self
    }

    pub fn build(self) -> Vec<CredentialStatement> {
        self.statements
    }
}

/// Builder for the atomic predicates inside one credential statement.
#[derive(Default)]
pub struct AtomicBuilder {
    statements: Vec<AtomicStatement>,
}

impl AtomicBuilder {
    pub fn in_range(mut self, attribute_tag: &str, lower: String, upper: String) -> Self {
        self.statements.push(AtomicStatement::AttributeInRange {
            attribute_tag: attribute_tag.to_string(),
            lower,
            upper,
        });
        self
    }

    fn finish(self) -> Vec<AtomicStatement> {
        self.statements
    }
}

/// The age statement used by the verification flow: dob at least
/// `min_age_years` (and a day) before today, credential issued by one of
/// the accepted identity providers.
pub fn age_statement(min_age_years: i32) -> Vec<CredentialStatement> {
    StatementBuilder::new()
        .for_identity_credentials(&IDENTITY_PROVIDERS, |b| {
            b.in_range(
                ATTRIBUTE_DOB,
                MIN_DATE.to_string(),
                past_date(min_age_years, 1),
            )
        })
        .build()
}

/// `YYYYMMDD` date `years_back` years and `days_offset` days before today.
pub fn past_date(years_back: i32, days_offset: i64) -> String {
    past_date_from(Utc::now().date_naive(), years_back, days_offset)
}

fn past_date_from(today: NaiveDate, years_back: i32, days_offset: i64) -> String {
    let target_year = today.year() - years_back;
    // Feb 29 shifted into a non-leap year clamps to Feb 28.
    let shifted = NaiveDate::from_ymd_opt(target_year, today.month(), today.day())
        .or_else(|| NaiveDate::from_ymd_opt(target_year, today.month(), 28))
        .unwrap_or(today);
    (shifted - Duration::days(days_offset))
        .format("%Y%m%d")
        .to_string()
}

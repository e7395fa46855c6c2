use std::collections::BTreeMap;
use std::fmt;

use log::debug;
use serde::Serialize;
use serde_json::{Map, Value};
use url::Url;

use crate::choices::{AnalysisType, Category, Country, ListChoice, Status};
use crate::defs::Document;
use crate::error::SchemaError;
use crate::schema::{Constraint, CustomRule, FieldDescriptor, FieldValue, SchemaType, join_path};

/// Schemes accepted by URL fields.
pub const HTTP_SCHEMES: &[&str] = &["http", "https"];

/// Accepts absent values and links to a YouTube watch page or short link.
pub const YOUTUBE_URL: CustomRule = CustomRule {
    name: "youtubeUrl",
    check: check_youtube_url,
};

/// Why a single field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum FailureKind {
    MissingField,
    InvalidUri,
    InvalidYoutubeUrl,
    InvalidEnumValue,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::MissingField => write!(f, "required"),
            FailureKind::InvalidUri => write!(f, "must be an http or https URL"),
            FailureKind::InvalidYoutubeUrl => write!(f, "Por favor, insira uma URL válida do YouTube"),
            FailureKind::InvalidEnumValue => write!(f, "value is not one of the listed options"),
        }
    }
}

impl std::error::Error for FailureKind {}

/// Complete outcome of validating one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub status: Status,
    /// Failures keyed by dotted field path. Fields that passed are absent.
    pub failures: BTreeMap<String, Vec<FailureKind>>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    /// True when the host must refuse to persist the document.
    ///
    /// Drafts never block: editors may save incomplete work.
    pub fn blocks_save(&self) -> bool {
        !self.status.is_draft() && !self.is_valid()
    }

    pub fn failures_for(&self, path: &str) -> &[FailureKind] {
        self.failures.get(path).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn has_failure(&self, path: &str, kind: FailureKind) -> bool {
        self.failures_for(path).contains(&kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, FailureKind)> {
        self.failures
            .iter()
            .flat_map(|(path, kinds)| kinds.iter().map(move |kind| (path.as_str(), *kind)))
    }
}

/// Validate every declared field of `doc` against its constraints.
///
/// Each field is checked independently and every failure is reported.
/// `required` is not enforced while the document is a draft.
///
/// ```
/// use news_schema::{FailureKind, LocalizedText, NewsArticle, validate_document};
///
/// let article = NewsArticle {
///     title: LocalizedText::new("BRICS Anuncia Nova Moeda", ""),
///     ..NewsArticle::default()
/// };
/// let report = validate_document(&article);
/// assert!(report.has_failure("title.en", FailureKind::MissingField));
/// assert!(report.blocks_save());
/// ```
pub fn validate_document<D: SchemaType>(doc: &D) -> ValidationReport {
    let status = doc.status();
    let mut failures = BTreeMap::new();

    for field in &D::schema().fields {
        check_field(doc, field, "", status, &mut failures);
    }

    debug!(
        "validated {} ({}): {} field(s) failing",
        D::TYPE_NAME,
        status,
        failures.len()
    );
    ValidationReport { status, failures }
}

impl Document {
    pub fn validate(&self) -> ValidationReport {
        match self {
            Document::NewsArticle(doc) => validate_document(doc),
            Document::AnalysisArticle(doc) => validate_document(doc),
        }
    }
}

/// Parse and validate one raw JSON document.
///
/// An option token outside its list is reported as [`FailureKind::InvalidEnumValue`] on
/// that field instead of failing the parse; the field then reads as absent. A rejected
/// `status` falls back to `published`, so the document is held to the published rules.
///
/// # Errors
/// Returns [`SchemaError::UnknownType`] when `_type` is missing or unregistered and
/// [`SchemaError::Malformed`] when the value does not otherwise fit the document model.
pub fn validate_value(raw: &Value) -> Result<(Document, ValidationReport), SchemaError> {
    let Value::Object(original) = raw else {
        return Err(SchemaError::Malformed("expected a JSON object".to_string()));
    };
    let mut fields = original.clone();
    let mut rejected = Vec::new();

    match original.get("_type").and_then(Value::as_str).unwrap_or_default() {
        Document::NEWS_ARTICLE => {
            take_unlisted::<Country>(&mut fields, &mut rejected);
            take_unlisted::<Category>(&mut fields, &mut rejected);
        },
        Document::ANALYSIS_ARTICLE => take_unlisted::<AnalysisType>(&mut fields, &mut rejected),
        other => return Err(SchemaError::UnknownType(other.to_string())),
    }
    take_unlisted::<Status>(&mut fields, &mut rejected);

    let doc: Document =
        serde_json::from_value(Value::Object(fields)).map_err(|err| SchemaError::Malformed(err.to_string()))?;
    let mut report = doc.validate();
    for err in &rejected {
        if let (SchemaError::InvalidEnumValue { field, .. }, Some(kind)) = (err, err.failure_kind()) {
            report.failures.insert((*field).to_string(), vec![kind]);
        }
    }
    Ok((doc, report))
}


fn take_unlisted<C: ListChoice>(fields: &mut Map<String, Value>, rejected: &mut Vec<SchemaError>) {
    let Some(Value::String(raw)) = fields.get(C::FIELD) else {
        return;
    };
    if raw.trim().is_empty() {
        fields.remove(C::FIELD);
    } else if let Err(err) = C::parse_value(raw) {
        debug!("{err}");
        fields.remove(C::FIELD);
        rejected.push(err);
    }
}

fn check_field<D>(
    doc: &D,
    field: &FieldDescriptor<D>,
    prefix: &str,
    status: Status,
    failures: &mut BTreeMap<String, Vec<FailureKind>>,
) {
    let path = join_path(prefix, field.name);
    let value = (field.read)(doc);

    for constraint in &field.constraints {
        if let Some(kind) = evaluate(constraint, &value, status) {
            failures.entry(path.clone()).or_default().push(kind);
        }
    }

    for child in &field.fields {
        check_field(doc, child, &path, status, failures);
    }
}

fn evaluate(constraint: &Constraint, value: &FieldValue<'_>, status: Status) -> Option<FailureKind> {
    match constraint {
        Constraint::Required => (!status.is_draft() && value.is_empty()).then_some(FailureKind::MissingField),
        Constraint::Uri { scheme } => match value.as_text() {
            Some(text) if !text.trim().is_empty() => check_uri(text, scheme).err(),
            _ => None,
        },
        Constraint::Custom(rule) => (rule.check)(value).err(),
    }
}

fn check_uri(text: &str, schemes: &[&str]) -> Result<(), FailureKind> {
    let url = Url::parse(text.trim()).map_err(|_| FailureKind::InvalidUri)?;
    if schemes.iter().any(|allowed| *allowed == url.scheme()) {
        Ok(())
    } else {
        Err(FailureKind::InvalidUri)
    }
}

fn check_youtube_url(value: &FieldValue<'_>) -> Result<(), FailureKind> {
    let Some(url) = value.as_text().filter(|text| !text.is_empty()) else {
        return Ok(());
    };
    if url.contains("youtube.com/watch") || url.contains("youtu.be/") {
        Ok(())
    } else {
        Err(FailureKind::InvalidYoutubeUrl)
    }
}

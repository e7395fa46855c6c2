use news_schema::schema::schema_json;
use news_schema::{
    AnalysisType, Country, Document, FailureKind, Preview, Status, ValidationReport, schema_types, slugify,
    validate_value,
};

const NEWS_PUBLISHED: &str = include_str!("fixtures/news_published.json");
const ANALYSIS_BATCH: &str = include_str!("fixtures/analysis_batch.json");
const NEWS_UNKNOWN_COUNTRY: &str = include_str!("fixtures/news_unknown_country.json");

fn analysis_batch() -> Vec<Document> {
    serde_json::from_str(ANALYSIS_BATCH).expect("analysis batch parses")
}

#[test]
fn published_news_fixture_is_valid() {
    let doc: Document = serde_json::from_str(NEWS_PUBLISHED).expect("news fixture parses");
    assert_eq!(doc.type_name(), "newsArticle");
    assert_eq!(doc.id(), Some("news-001"));

    let report = doc.validate();
    assert!(report.is_valid(), "unexpected failures: {:?}", report.failures);
    assert!(!report.blocks_save());

    let Document::NewsArticle(article) = &doc else {
        panic!("expected news article");
    };
    assert_eq!(article.country, Some(Country::Brics));
    assert_eq!(article.content.pt[0].plain_text(), "A proposta foi aprovada");
    assert_eq!(article.image.as_ref().and_then(|image| image.hotspot).map(|h| h.x), Some(0.5));
}

#[test]
fn published_news_fixture_previews_country_and_path() {
    let doc: Document = serde_json::from_str(NEWS_PUBLISHED).expect("news fixture parses");
    let preview = doc.preview();
    assert_eq!(preview.title, "BRICS Anuncia Nova Moeda");
    assert_eq!(preview.subtitle, "BRICS • /brics-anuncia-nova-moeda");
    assert_eq!(preview.media.map(|m| m.asset_ref().to_string()).as_deref(), Some("image-3f2a-1200x800-jpg"));
}

#[test]
fn stored_slug_matches_normalized_title() {
    let doc: Document = serde_json::from_str(NEWS_PUBLISHED).expect("news fixture parses");
    let article = doc.article();
    assert_eq!(article.slug().map(|s| s.as_str()), Some(slugify(&article.title().pt).as_str()));
}

#[test]
fn draft_in_batch_saves_despite_empty_required_fields() {
    let batch = analysis_batch();
    let draft = &batch[0];
    assert_eq!(draft.article().status(), Status::Draft);

    let report = draft.validate();
    assert!(report.is_valid());
    assert!(!report.blocks_save());
}

#[test]
fn archived_analysis_without_author_blocks_save() {
    let batch = analysis_batch();
    let report: ValidationReport = batch[1].validate();

    assert_eq!(report.status, Status::Archived);
    assert_eq!(report.failures_for("author"), [FailureKind::MissingField]);
    assert_eq!(report.failures.len(), 1);
    assert!(report.blocks_save());
}

#[test]
fn batch_reports_are_independent() {
    let blocking: Vec<_> = analysis_batch()
        .iter()
        .filter(|doc| doc.validate().blocks_save())
        .filter_map(|doc| doc.id().map(str::to_string))
        .collect();
    assert_eq!(blocking, ["analysis-002"]);
}

#[test]
fn draft_slug_regenerates_from_portuguese_title() {
    let mut batch = analysis_batch();
    let draft = batch[0].article_mut();
    assert!(draft.slug().is_none());
    assert_eq!(draft.regenerate_slug().as_str(), "relacoes-nao-oficiais");
}

#[test]
fn analysis_preview_uses_type_and_author() {
    let batch = analysis_batch();
    let Document::AnalysisArticle(article) = &batch[0] else {
        panic!("expected analysis article");
    };
    assert_eq!(article.analysis_type, Some(AnalysisType::Geopolitical));
    assert_eq!(
        batch[0].preview().subtitle,
        "Análise Geopolítica • Dr. João Silva, Analista Econômico"
    );
    assert_eq!(batch[1].preview().subtitle, "Análise de Mercado • ");
}

#[test]
fn unlisted_country_is_rejected_at_parse_time() {
    let err = serde_json::from_str::<Document>(NEWS_UNKNOWN_COUNTRY).unwrap_err();
    assert!(err.to_string().contains("invalid value 'Marte' for country"), "{err}");
}

#[test]
fn unlisted_country_is_a_field_failure_when_validating_raw_json() {
    let raw: serde_json::Value = serde_json::from_str(NEWS_UNKNOWN_COUNTRY).expect("fixture is JSON");
    let (doc, report) = validate_value(&raw).expect("document fits the model apart from its country");
    assert_eq!(doc.preview().title, "Missão a Marte");
    assert_eq!(report.failures_for("country"), [FailureKind::InvalidEnumValue]);
    assert!(report.blocks_save());
}

#[test]
fn raw_batch_validates_like_parsed_documents() {
    let raw: Vec<serde_json::Value> = serde_json::from_str(ANALYSIS_BATCH).expect("fixture is JSON");
    for (entry, parsed) in raw.iter().zip(analysis_batch()) {
        let (doc, report) = validate_value(entry).expect("batch entries fit the model");
        assert_eq!(doc, parsed);
        assert_eq!(report, parsed.validate());
    }
}

#[test]
fn reserialized_document_parses_back_unchanged() {
    let doc: Document = serde_json::from_str(NEWS_PUBLISHED).expect("news fixture parses");
    let json = serde_json::to_string(&doc).expect("document serializes");
    let reparsed: Document = serde_json::from_str(&json).expect("reserialized document parses");
    assert_eq!(reparsed, doc);
}

#[test]
fn every_registered_type_exports_its_schema() {
    for info in schema_types() {
        let json = schema_json(info.name).expect("registered type has a schema");
        assert_eq!(json["name"], info.name);
        assert_eq!(json["title"], info.title);
        assert!(json["fields"].as_array().is_some_and(|fields| !fields.is_empty()));
    }
}

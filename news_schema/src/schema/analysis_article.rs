//! `analysisArticle` document type.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::choices::AnalysisType;
use crate::defs::{AnalysisArticle, Document};
use crate::preview::PreviewSelect;
use crate::schema::{DocumentSchema, FieldDescriptor, FieldOptions, FieldType, FieldValue, SchemaType, fields};

static SCHEMA: LazyLock<DocumentSchema<AnalysisArticle>> = LazyLock::new(build_schema);

impl SchemaType for AnalysisArticle {
    const TYPE_NAME: &'static str = Document::ANALYSIS_ARTICLE;

    fn schema() -> &'static DocumentSchema<Self> {
        &SCHEMA
    }
}

fn build_schema() -> DocumentSchema<AnalysisArticle> {
    let fields = vec![
        fields::title(),
        fields::slug("URL amigável para a análise"),
        fields::summary(),
        fields::content(),
        fields::image("thumbnail", "Thumbnail Image", |doc: &AnalysisArticle| {
            doc.thumbnail.as_ref().map_or(FieldValue::Absent, FieldValue::Image)
        })
        .description("Imagem pequena para a seção de análises"),
        FieldDescriptor::new("author", "Author/Analyst", FieldType::String, |doc: &AnalysisArticle| {
            FieldValue::Text(&doc.author)
        })
        .placeholder("ex: Dr. João Silva, Analista Econômico")
        .required(),
        FieldDescriptor::new("analysisType", "Analysis Type", FieldType::String, |doc: &AnalysisArticle| {
            FieldValue::choice(doc.analysis_type)
        })
        .list::<AnalysisType>()
        .required(),
        fields::published_at(),
        fields::read_time("e.g., 8 min"),
        FieldDescriptor::new("tags", "Tags", FieldType::Array, |doc: &AnalysisArticle| {
            FieldValue::Tags(&doc.tags)
        })
        .of(FieldType::String)
        .options(FieldOptions {
            layout: Some("tags"),
            ..FieldOptions::default()
        })
        .description("Tags para categorizar a análise (ex: economia, geopolítica, comércio)"),
        fields::featured("Featured Analysis", "Destacar esta análise na seção principal"),
        fields::status(),
    ];

    let select = BTreeMap::from([
        ("title", "title.pt"),
        ("subtitle", "analysisType"),
        ("media", "thumbnail"),
        ("author", "author"),
    ]);

    DocumentSchema::new(Document::ANALYSIS_ARTICLE, "Analysis Article", fields, PreviewSelect { select })
}

//! `newsArticle` document type.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::choices::{Category, Country};
use crate::defs::{Document, NewsArticle};
use crate::preview::PreviewSelect;
use crate::schema::{Constraint, DocumentSchema, FieldDescriptor, FieldType, FieldValue, SchemaType, fields};
use crate::validate::{HTTP_SCHEMES, YOUTUBE_URL};

static SCHEMA: LazyLock<DocumentSchema<NewsArticle>> = LazyLock::new(build_schema);

impl SchemaType for NewsArticle {
    const TYPE_NAME: &'static str = Document::NEWS_ARTICLE;

    fn schema() -> &'static DocumentSchema<Self> {
        &SCHEMA
    }
}

fn build_schema() -> DocumentSchema<NewsArticle> {
    let fields = vec![
        fields::title(),
        fields::slug("URL amigável gerada automaticamente do título (ex: brics-anuncia-nova-moeda)"),
        fields::summary(),
        fields::content(),
        fields::image("image", "Featured Image", |doc: &NewsArticle| {
            doc.image.as_ref().map_or(FieldValue::Absent, FieldValue::Image)
        }),
        FieldDescriptor::new("youtubeUrl", "YouTube Video URL", FieldType::Url, |doc: &NewsArticle| {
            FieldValue::optional_text(doc.youtube_url.as_ref())
        })
        .description("Cole o link completo do YouTube (ex: https://www.youtube.com/watch?v=VIDEO_ID)")
        .constraint(Constraint::Uri { scheme: HTTP_SCHEMES })
        .constraint(Constraint::Custom(YOUTUBE_URL)),
        FieldDescriptor::new("country", "Country", FieldType::String, |doc: &NewsArticle| {
            FieldValue::choice(doc.country)
        })
        .list::<Country>()
        .required(),
        FieldDescriptor::new("category", "Category", FieldType::String, |doc: &NewsArticle| {
            FieldValue::choice(doc.category)
        })
        .list::<Category>()
        .required(),
        fields::published_at(),
        fields::read_time("e.g., 5 min"),
        FieldDescriptor::new("source", "Source", FieldType::String, |doc: &NewsArticle| {
            FieldValue::Text(&doc.source)
        })
        .placeholder("ex: Reuters BRICS, Agência Brasil, BRICS News")
        .description("Fonte da notícia (obrigatório)")
        .required(),
        fields::featured("Featured Article", "Marque para destacar este artigo na página inicial"),
        fields::status().description("Status de publicação do artigo"),
    ];

    let select = BTreeMap::from([
        ("title", "title.pt"),
        ("subtitle", "country"),
        ("media", "image"),
        ("slug", "slug.current"),
    ]);

    DocumentSchema::new(Document::NEWS_ARTICLE, "News Article", fields, PreviewSelect { select })
}

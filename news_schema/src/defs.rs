//! Bilingual document model shared by every article type.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::choices::{AnalysisType, Category, Country, Status};
use crate::error::SchemaError;
use crate::slug::Slug;

/// Parallel Portuguese / English plain text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LocalizedText {
    #[serde(default)]
    pub pt: String,
    #[serde(default)]
    pub en: String,
}

impl LocalizedText {
    pub fn new(pt: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            pt: pt.into(),
            en: en.into(),
        }
    }
}

/// Parallel Portuguese / English rich text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LocalizedBlocks {
    #[serde(default)]
    pub pt: Vec<Block>,
    #[serde(default)]
    pub en: Vec<Block>,
}

/// A portable-text block: one paragraph or heading made of styled spans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    #[serde(default = "default_block_style")]
    pub style: String,
    #[serde(default)]
    pub children: Vec<Span>,
}

impl Block {
    /// Single unstyled paragraph.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self {
            style: default_block_style(),
            children: vec![Span {
                text: text.into(),
                marks: Vec::new(),
            }],
        }
    }

    /// Concatenated text of every span, marks ignored.
    pub fn plain_text(&self) -> String {
        self.children.iter().map(|span| span.text.as_str()).collect()
    }
}

fn default_block_style() -> String {
    "normal".to_string()
}

/// Run of text inside a block carrying zero or more marks (`strong`, `em`, link keys).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub marks: Vec<String>,
}

/// Reference to an image held by the external asset store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRef {
    pub asset: AssetRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotspot: Option<Hotspot>,
}

impl ImageRef {
    pub fn new(asset_ref: impl Into<String>) -> Self {
        Self {
            asset: AssetRef {
                reference: asset_ref.into(),
            },
            hotspot: None,
        }
    }

    pub fn asset_ref(&self) -> &str {
        &self.asset.reference
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRef {
    #[serde(rename = "_ref")]
    pub reference: String,
}

/// Focal area chosen by the editor, in fractions of the image size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hotspot {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// A short news item filed under a country and category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewsArticle {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: LocalizedText,
    pub slug: Option<Slug>,
    pub summary: LocalizedText,
    pub content: LocalizedBlocks,
    pub image: Option<ImageRef>,
    pub youtube_url: Option<String>,
    pub country: Option<Country>,
    pub category: Option<Category>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub published_at: Option<OffsetDateTime>,
    pub read_time: String,
    pub source: String,
    pub featured: bool,
    pub status: Status,
}

impl Default for NewsArticle {
    fn default() -> Self {
        Self {
            id: None,
            title: LocalizedText::default(),
            slug: None,
            summary: LocalizedText::default(),
            content: LocalizedBlocks::default(),
            image: None,
            youtube_url: None,
            country: None,
            category: None,
            published_at: None,
            read_time: String::new(),
            source: String::new(),
            featured: false,
            status: Status::default(),
        }
    }
}

/// A long-form analysis piece signed by an analyst.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalysisArticle {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: LocalizedText,
    pub slug: Option<Slug>,
    pub summary: LocalizedText,
    pub content: LocalizedBlocks,
    pub thumbnail: Option<ImageRef>,
    pub author: String,
    pub analysis_type: Option<AnalysisType>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub published_at: Option<OffsetDateTime>,
    pub read_time: String,
    pub tags: Vec<String>,
    pub featured: bool,
    pub status: Status,
}

impl Default for AnalysisArticle {
    fn default() -> Self {
        Self {
            id: None,
            title: LocalizedText::default(),
            slug: None,
            summary: LocalizedText::default(),
            content: LocalizedBlocks::default(),
            thumbnail: None,
            author: String::new(),
            analysis_type: None,
            published_at: None,
            read_time: String::new(),
            tags: Vec::new(),
            featured: false,
            status: Status::default(),
        }
    }
}

/// Fields every document type shares.
pub trait Article {
    fn title(&self) -> &LocalizedText;
    fn slug(&self) -> Option<&Slug>;
    fn slug_mut(&mut self) -> &mut Option<Slug>;
    fn summary(&self) -> &LocalizedText;
    fn content(&self) -> &LocalizedBlocks;
    fn published_at(&self) -> Option<&OffsetDateTime>;
    fn read_time(&self) -> &str;
    fn featured(&self) -> bool;
    fn status(&self) -> Status;

    /// Regenerate the slug from the Portuguese title, replacing any previous value.
    fn regenerate_slug(&mut self) -> &Slug {
        let slug = Slug::from_source(&self.title().pt);
        self.slug_mut().insert(slug)
    }
}

macro_rules! impl_article {
    ($ty:ty) => {
        impl Article for $ty {
            fn title(&self) -> &LocalizedText {
                &self.title
            }

            fn slug(&self) -> Option<&Slug> {
                self.slug.as_ref()
            }

            fn slug_mut(&mut self) -> &mut Option<Slug> {
                &mut self.slug
            }

            fn summary(&self) -> &LocalizedText {
                &self.summary
            }

            fn content(&self) -> &LocalizedBlocks {
                &self.content
            }

            fn published_at(&self) -> Option<&OffsetDateTime> {
                self.published_at.as_ref()
            }

            fn read_time(&self) -> &str {
                &self.read_time
            }

            fn featured(&self) -> bool {
                self.featured
            }

            fn status(&self) -> Status {
                self.status
            }
        }
    };
}

impl_article!(NewsArticle);
impl_article!(AnalysisArticle);

/// Any document the studio manages, tagged by `_type` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "_type", rename_all = "camelCase")]
pub enum Document {
    NewsArticle(NewsArticle),
    AnalysisArticle(AnalysisArticle),
}

impl Document {
    pub const NEWS_ARTICLE: &'static str = "newsArticle";
    pub const ANALYSIS_ARTICLE: &'static str = "analysisArticle";

    /// Fresh document of the named type with every initial value applied.
    pub fn new(type_name: &str) -> Result<Self, SchemaError> {
        match type_name {
            Self::NEWS_ARTICLE => Ok(Document::NewsArticle(NewsArticle::default())),
            Self::ANALYSIS_ARTICLE => Ok(Document::AnalysisArticle(AnalysisArticle::default())),
            other => Err(SchemaError::UnknownType(other.to_string())),
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Document::NewsArticle(_) => Self::NEWS_ARTICLE,
            Document::AnalysisArticle(_) => Self::ANALYSIS_ARTICLE,
        }
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            Document::NewsArticle(doc) => doc.id.as_deref(),
            Document::AnalysisArticle(doc) => doc.id.as_deref(),
        }
    }

    pub fn article(&self) -> &dyn Article {
        match self {
            Document::NewsArticle(doc) => doc,
            Document::AnalysisArticle(doc) => doc,
        }
    }

    pub fn article_mut(&mut self) -> &mut dyn Article {
        match self {
            Document::NewsArticle(doc) => doc,
            Document::AnalysisArticle(doc) => doc,
        }
    }
}

//! Compact list-row summaries of documents.
//!
//! The host declares which paths it selects for a preview ([`PreviewSelect`]);
//! the projection itself is typed so a renamed field fails to compile instead
//! of silently rendering nothing.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::choices::ListChoice;
use crate::defs::{AnalysisArticle, Document, ImageRef, NewsArticle};

/// Paths selected from a document for its preview, keyed by preview slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewSelect {
    pub select: BTreeMap<&'static str, &'static str>,
}

/// What the studio shows for a document in lists and references.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewModel {
    pub title: String,
    pub subtitle: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<ImageRef>,
}

pub trait Preview {
    fn preview(&self) -> PreviewModel;
}

impl Preview for NewsArticle {
    /// Subtitle reads `{country} • /{slug}`.
    fn preview(&self) -> PreviewModel {
        let country = self.country.map_or("", ListChoice::value);
        let slug = self.slug.as_ref().map_or("", |slug| slug.as_str());
        PreviewModel {
            title: self.title.pt.clone(),
            subtitle: format!("{country} • /{slug}"),
            media: self.image.clone(),
        }
    }
}

impl Preview for AnalysisArticle {
    /// Subtitle reads `{analysisType} • {author}`.
    fn preview(&self) -> PreviewModel {
        let analysis_type = self.analysis_type.map_or("", ListChoice::value);
        PreviewModel {
            title: self.title.pt.clone(),
            subtitle: format!("{analysis_type} • {}", self.author),
            media: self.thumbnail.clone(),
        }
    }
}

impl Preview for Document {
    fn preview(&self) -> PreviewModel {
        match self {
            Document::NewsArticle(doc) => doc.preview(),
            Document::AnalysisArticle(doc) => doc.preview(),
        }
    }
}

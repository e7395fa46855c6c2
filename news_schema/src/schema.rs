//! Declarative field descriptors handed to the host studio.
//!
//! Every document type declares an ordered list of [`FieldDescriptor`]s once.
//! A descriptor names the field, tells the studio how to render it, lists the
//! constraints checked at save time, and carries a typed reader that pulls the
//! field's current value out of a document. The validator walks these readers
//! instead of looking values up by string path.

pub mod analysis_article;
pub mod fields;
pub mod news_article;

use serde::{Serialize, Serializer};
use time::OffsetDateTime;

use crate::choices::{ListChoice, ListOption, list_options};
use crate::defs::{Article, Block, Document, ImageRef};
use crate::preview::PreviewSelect;
use crate::slug::{Slug, SlugOptions};
use crate::validate::FailureKind;

/// Reads one field's value out of a document of type `D`.
pub type FieldReader<D> = for<'a> fn(&'a D) -> FieldValue<'a>;

/// Borrowed view of a field's current value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Absent,
    Text(&'a str),
    Bool(bool),
    Choice(&'static str),
    Timestamp(&'a OffsetDateTime),
    Slug(&'a Slug),
    Image(&'a ImageRef),
    Blocks(&'a [Block]),
    Tags(&'a [String]),
    /// Container whose value lives in its nested fields.
    Object,
}

impl<'a> FieldValue<'a> {
    /// Optional free text; `None` reads as absent.
    pub fn optional_text(value: Option<&'a String>) -> Self {
        value.map_or(FieldValue::Absent, |text| FieldValue::Text(text))
    }

    /// Optional list choice; `None` reads as absent.
    pub fn choice<C: ListChoice>(value: Option<C>) -> Self {
        value.map_or(FieldValue::Absent, |choice| FieldValue::Choice(choice.value()))
    }

    /// True when a `required` constraint should reject the value.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Absent => true,
            FieldValue::Text(text) => text.trim().is_empty(),
            FieldValue::Slug(slug) => slug.is_empty(),
            FieldValue::Blocks(blocks) => blocks.is_empty(),
            FieldValue::Tags(tags) => tags.is_empty(),
            FieldValue::Bool(_)
            | FieldValue::Choice(_)
            | FieldValue::Timestamp(_)
            | FieldValue::Image(_)
            | FieldValue::Object => false,
        }
    }

    pub fn as_text(&self) -> Option<&'a str> {
        match self {
            FieldValue::Text(text) => Some(text),
            FieldValue::Choice(token) => Some(token),
            FieldValue::Slug(slug) => Some(slug.as_str()),
            _ => None,
        }
    }
}

/// Studio input type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldType {
    Object,
    String,
    Text,
    Slug,
    Array,
    Block,
    Image,
    Url,
    Datetime,
    Boolean,
}

/// A save-time check declared on a field.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(tag = "rule", rename_all = "camelCase")]
pub enum Constraint {
    /// Value must be present and non-blank.
    Required,
    /// Value, when present, must be an absolute URI using one of `scheme`.
    Uri { scheme: &'static [&'static str] },
    /// Arbitrary predicate over the value.
    Custom(CustomRule),
}

/// Named predicate evaluated by [`Constraint::Custom`].
#[derive(Clone, Copy)]
pub struct CustomRule {
    pub name: &'static str,
    pub check: for<'a> fn(&FieldValue<'a>) -> Result<(), FailureKind>,
}

impl std::fmt::Debug for CustomRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CustomRule").field("name", &self.name).finish_non_exhaustive()
    }
}

impl Serialize for CustomRule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("CustomRule", 1)?;
        state.serialize_field("name", self.name)?;
        state.end()
    }
}

/// Value pre-filled when the studio creates a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum InitialValue {
    Bool(bool),
    Text(&'static str),
}

/// Rendering options for a field.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldOptions {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub list: Vec<ListOption>,
    #[serde(flatten)]
    pub slug: Option<SlugOptions>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub hotspot: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<&'static str>,
}

impl FieldOptions {
    pub fn is_empty(&self) -> bool {
        self.list.is_empty() && self.slug.is_none() && !self.hotspot && self.layout.is_none()
    }
}

/// One field of a document type, possibly with nested fields.
#[derive(Serialize)]
#[serde(bound = "", rename_all = "camelCase")]
pub struct FieldDescriptor<D> {
    pub name: &'static str,
    pub title: &'static str,
    #[serde(rename = "type")]
    pub kind: FieldType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub of: Option<FieldType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
    #[serde(skip_serializing_if = "FieldOptions::is_empty")]
    pub options: FieldOptions,
    #[serde(rename = "validation", skip_serializing_if = "Vec::is_empty")]
    pub constraints: Vec<Constraint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_value: Option<InitialValue>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldDescriptor<D>>,
    #[serde(skip)]
    pub read: FieldReader<D>,
}

impl<D> FieldDescriptor<D> {
    pub fn new(name: &'static str, title: &'static str, kind: FieldType, read: FieldReader<D>) -> Self {
        Self {
            name,
            title,
            kind,
            of: None,
            description: None,
            placeholder: None,
            options: FieldOptions::default(),
            constraints: Vec::new(),
            initial_value: None,
            fields: Vec::new(),
            read,
        }
    }

    /// Object field grouping `fields`.
    pub fn object(name: &'static str, title: &'static str, fields: Vec<FieldDescriptor<D>>) -> Self {
        let mut field = Self::new(name, title, FieldType::Object, |_| FieldValue::Object);
        field.fields = fields;
        field
    }

    pub fn required(self) -> Self {
        self.constraint(Constraint::Required)
    }

    pub fn constraint(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    pub fn description(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    pub fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn of(mut self, kind: FieldType) -> Self {
        self.of = Some(kind);
        self
    }

    pub fn initial(mut self, value: InitialValue) -> Self {
        self.initial_value = Some(value);
        self
    }

    pub fn options(mut self, options: FieldOptions) -> Self {
        self.options = options;
        self
    }

    /// Restrict the field to the options of `C`.
    pub fn list<C: ListChoice>(mut self) -> Self {
        self.options.list = list_options::<C>();
        self
    }

    pub fn is_required(&self) -> bool {
        self.constraints.iter().any(|c| matches!(c, Constraint::Required))
    }
}

/// A named document type and its ordered fields.
#[derive(Serialize)]
#[serde(bound = "")]
pub struct DocumentSchema<D> {
    pub name: &'static str,
    pub title: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub fields: Vec<FieldDescriptor<D>>,
    pub preview: PreviewSelect,
}

impl<D> DocumentSchema<D> {
    pub fn new(name: &'static str, title: &'static str, fields: Vec<FieldDescriptor<D>>, preview: PreviewSelect) -> Self {
        Self {
            name,
            title,
            kind: "document",
            fields,
            preview,
        }
    }

    /// Look up a field by dotted path, e.g. `title.pt`.
    pub fn field(&self, path: &str) -> Option<&FieldDescriptor<D>> {
        let mut segments = path.split('.');
        let first = segments.next()?;
        let mut current = self.fields.iter().find(|f| f.name == first)?;
        for segment in segments {
            current = current.fields.iter().find(|f| f.name == segment)?;
        }
        Some(current)
    }

    /// Dotted paths of every declared field, depth-first in declaration order.
    pub fn field_paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        collect_paths(&self.fields, "", &mut paths);
        paths
    }
}

fn collect_paths<D>(fields: &[FieldDescriptor<D>], prefix: &str, paths: &mut Vec<String>) {
    for field in fields {
        let path = join_path(prefix, field.name);
        collect_paths(&field.fields, &path, paths);
        paths.push(path);
    }
}

pub(crate) fn join_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}.{name}")
    }
}

/// A document type with a declared schema.
pub trait SchemaType: Article + Sized + 'static {
    const TYPE_NAME: &'static str;

    fn schema() -> &'static DocumentSchema<Self>;
}

/// Name and title of a registered document type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SchemaTypeInfo {
    pub name: &'static str,
    pub title: &'static str,
}

/// Every document type registered with the studio.
pub fn schema_types() -> Vec<SchemaTypeInfo> {
    vec![info::<crate::NewsArticle>(), info::<crate::AnalysisArticle>()]
}

fn info<D: SchemaType>() -> SchemaTypeInfo {
    let schema = D::schema();
    SchemaTypeInfo {
        name: schema.name,
        title: schema.title,
    }
}

/// Serialize the schema of the named document type for the host.
pub fn schema_json(type_name: &str) -> Result<serde_json::Value, crate::SchemaError> {
    let value = match type_name {
        Document::NEWS_ARTICLE => serde_json::to_value(crate::NewsArticle::schema()),
        Document::ANALYSIS_ARTICLE => serde_json::to_value(crate::AnalysisArticle::schema()),
        other => return Err(crate::SchemaError::UnknownType(other.to_string())),
    };
    value.map_err(|err| crate::SchemaError::Serialize(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AnalysisArticle, NewsArticle};

    #[test]
    fn registered_types_are_listed_in_order() {
        let names: Vec<_> = schema_types().iter().map(|t| t.name).collect();
        assert_eq!(names, ["newsArticle", "analysisArticle"]);
        assert_eq!(schema_types()[1].title, "Analysis Article");
    }

    #[test]
    fn news_article_declares_fields_in_studio_order() {
        let names: Vec<_> = NewsArticle::schema().fields.iter().map(|f| f.name).collect();
        assert_eq!(
            names,
            [
                "title",
                "slug",
                "summary",
                "content",
                "image",
                "youtubeUrl",
                "country",
                "category",
                "publishedAt",
                "readTime",
                "source",
                "featured",
                "status"
            ]
        );
    }

    #[test]
    fn nested_fields_resolve_by_dotted_path() {
        let schema = AnalysisArticle::schema();
        let field = schema.field("title.en").unwrap();
        assert_eq!(field.title, "English");
        assert!(field.is_required());
        assert!(schema.field("title.fr").is_none());
        assert!(schema.field("content.pt").is_some_and(|f| !f.is_required()));
        assert!(schema.field_paths().contains(&"summary.pt".to_string()));
    }

    #[test]
    fn readers_borrow_from_the_document() {
        let article = NewsArticle {
            source: "Agência Brasil".into(),
            ..NewsArticle::default()
        };
        let schema = NewsArticle::schema();
        let source = schema.field("source").unwrap();
        assert_eq!((source.read)(&article), FieldValue::Text("Agência Brasil"));
        let status = schema.field("status").unwrap();
        assert_eq!((status.read)(&article), FieldValue::Choice("published"));
    }

    #[test]
    fn schema_json_matches_host_declaration_shape() {
        let json = schema_json("newsArticle").unwrap();
        assert_eq!(json["name"], "newsArticle");
        assert_eq!(json["type"], "document");

        let slug = &json["fields"][1];
        assert_eq!(slug["type"], "slug");
        assert_eq!(slug["options"]["source"], "title.pt");
        assert_eq!(slug["options"]["maxLength"], 96);
        assert_eq!(slug["validation"][0]["rule"], "required");

        let youtube = &json["fields"][5];
        assert_eq!(youtube["validation"][0]["rule"], "uri");
        assert_eq!(youtube["validation"][0]["scheme"][1], "https");
        assert_eq!(youtube["validation"][1]["name"], "youtubeUrl");

        let status = &json["fields"][12];
        assert_eq!(status["initialValue"], "published");
        assert_eq!(status["options"]["list"][0]["value"], "draft");
        assert!(status.get("read").is_none());

        assert_eq!(json["preview"]["select"]["subtitle"], "country");
        assert!(matches!(schema_json("pressRelease"), Err(crate::SchemaError::UnknownType(_))));
    }
}

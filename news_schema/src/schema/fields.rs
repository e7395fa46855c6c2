//! Field declarations shared by every article type.

use crate::choices::{ListChoice, Status};
use crate::defs::Article;
use crate::schema::{FieldDescriptor, FieldOptions, FieldReader, FieldType, FieldValue, InitialValue};
use crate::slug::SlugOptions;

/// Bilingual title; both languages required.
pub fn title<D: Article>() -> FieldDescriptor<D> {
    FieldDescriptor::object(
        "title",
        "Title",
        vec![
            FieldDescriptor::new("pt", "Portuguese", FieldType::String, |doc: &D| {
                FieldValue::Text(&doc.title().pt)
            })
            .required(),
            FieldDescriptor::new("en", "English", FieldType::String, |doc: &D| {
                FieldValue::Text(&doc.title().en)
            })
            .required(),
        ],
    )
}

/// Slug generated from `title.pt`.
pub fn slug<D: Article>(description: &'static str) -> FieldDescriptor<D> {
    FieldDescriptor::new("slug", "Slug", FieldType::Slug, |doc: &D| {
        doc.slug().map_or(FieldValue::Absent, FieldValue::Slug)
    })
    .options(FieldOptions {
        slug: Some(SlugOptions::default()),
        ..FieldOptions::default()
    })
    .description(description)
    .required()
}

/// Bilingual summary; both languages required.
pub fn summary<D: Article>() -> FieldDescriptor<D> {
    FieldDescriptor::object(
        "summary",
        "Summary",
        vec![
            FieldDescriptor::new("pt", "Portuguese", FieldType::Text, |doc: &D| {
                FieldValue::Text(&doc.summary().pt)
            })
            .required(),
            FieldDescriptor::new("en", "English", FieldType::Text, |doc: &D| {
                FieldValue::Text(&doc.summary().en)
            })
            .required(),
        ],
    )
}

/// Bilingual rich-text body; optional in both languages.
pub fn content<D: Article>() -> FieldDescriptor<D> {
    FieldDescriptor::object(
        "content",
        "Content",
        vec![
            FieldDescriptor::new("pt", "Portuguese", FieldType::Array, |doc: &D| {
                FieldValue::Blocks(&doc.content().pt)
            })
            .of(FieldType::Block),
            FieldDescriptor::new("en", "English", FieldType::Array, |doc: &D| {
                FieldValue::Blocks(&doc.content().en)
            })
            .of(FieldType::Block),
        ],
    )
}

/// Image with editor-selected hotspot.
pub fn image<D>(name: &'static str, title: &'static str, read: FieldReader<D>) -> FieldDescriptor<D> {
    FieldDescriptor::new(name, title, FieldType::Image, read).options(FieldOptions {
        hotspot: true,
        ..FieldOptions::default()
    })
}

pub fn published_at<D: Article>() -> FieldDescriptor<D> {
    FieldDescriptor::new("publishedAt", "Published At", FieldType::Datetime, |doc: &D| {
        doc.published_at().map_or(FieldValue::Absent, FieldValue::Timestamp)
    })
    .required()
}

pub fn read_time<D: Article>(placeholder: &'static str) -> FieldDescriptor<D> {
    FieldDescriptor::new("readTime", "Read Time", FieldType::String, |doc: &D| {
        FieldValue::Text(doc.read_time())
    })
    .placeholder(placeholder)
    .required()
}

pub fn featured<D: Article>(title: &'static str, description: &'static str) -> FieldDescriptor<D> {
    FieldDescriptor::new("featured", title, FieldType::Boolean, |doc: &D| FieldValue::Bool(doc.featured()))
        .initial(InitialValue::Bool(false))
        .description(description)
}

pub fn status<D: Article>() -> FieldDescriptor<D> {
    FieldDescriptor::new("status", "Status", FieldType::String, |doc: &D| {
        FieldValue::Choice(doc.status().value())
    })
    .list::<Status>()
    .initial(InitialValue::Text(Status::default().value()))
}

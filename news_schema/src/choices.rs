//! Closed option lists used by enumerated string fields.
//!
//! Each list stores the Portuguese token the host persists and pairs it with
//! the English title shown in the studio dropdown. Parsing anything outside
//! the list fails with [`SchemaError::InvalidEnumValue`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::SchemaError;

/// A closed list of stored tokens, each paired with its display title.
pub trait ListChoice: Copy + Sized + 'static {
    /// Name of the schema field the list belongs to.
    const FIELD: &'static str;
    /// Every option, in studio display order.
    const ALL: &'static [Self];

    /// Token stored on the document.
    fn value(self) -> &'static str;
    /// Title shown to editors.
    fn title(self) -> &'static str;

    fn parse_value(raw: &str) -> Result<Self, SchemaError> {
        Self::ALL
            .iter()
            .copied()
            .find(|choice| choice.value() == raw)
            .ok_or_else(|| SchemaError::InvalidEnumValue {
                field: Self::FIELD,
                value: raw.to_string(),
            })
    }
}

macro_rules! list_choice {
    (
        $(#[$meta:meta])*
        $name:ident for $field:literal {
            $($variant:ident => ($value:literal, $title:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $($variant),+
        }

        impl ListChoice for $name {
            const FIELD: &'static str = $field;
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn value(self) -> &'static str {
                match self {
                    $(Self::$variant => $value),+
                }
            }

            fn title(self) -> &'static str {
                match self {
                    $(Self::$variant => $title),+
                }
            }
        }

        impl FromStr for $name {
            type Err = SchemaError;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                Self::parse_value(raw)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.value())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.value())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                Self::parse_value(&raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

list_choice! {
    /// Country or bloc a news article is filed under.
    Country for "country" {
        Brics => ("BRICS", "BRICS"),
        Brazil => ("Brasil", "Brazil"),
        Russia => ("Rússia", "Russia"),
        India => ("Índia", "India"),
        China => ("China", "China"),
        SouthAfrica => ("África do Sul", "South Africa"),
        Iran => ("Irã", "Iran"),
        Egypt => ("Egito", "Egypt"),
        Ethiopia => ("Etiópia", "Ethiopia"),
        Uae => ("Emirados Árabes Unidos", "UAE"),
        SaudiArabia => ("Arábia Saudita", "Saudi Arabia"),
    }
}

list_choice! {
    /// Editorial section of a news article.
    Category for "category" {
        Economy => ("Economia", "Economy"),
        Technology => ("Tecnologia", "Technology"),
        Health => ("Saúde", "Health"),
        Energy => ("Energia", "Energy"),
        Investments => ("Investimentos", "Investments"),
        Agriculture => ("Agricultura", "Agriculture"),
        Education => ("Educação", "Education"),
        Environment => ("Meio Ambiente", "Environment"),
        Politics => ("Política", "Politics"),
    }
}

list_choice! {
    AnalysisType for "analysisType" {
        Economic => ("Análise Econômica", "Economic Analysis"),
        Geopolitical => ("Análise Geopolítica", "Geopolitical Analysis"),
        Technology => ("Análise Tecnológica", "Technology Analysis"),
        Market => ("Análise de Mercado", "Market Analysis"),
        Strategic => ("Análise Estratégica", "Strategic Analysis"),
    }
}

list_choice! {
    /// Publication state. Drafts may be saved with required fields still empty.
    Status for "status" {
        Draft => ("draft", "Draft"),
        Published => ("published", "Published"),
        Archived => ("archived", "Archived"),
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::Published
    }
}

impl Status {
    pub fn is_draft(self) -> bool {
        self == Status::Draft
    }
}

/// `{ title, value }` pair as declared in a field's `options.list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ListOption {
    pub title: &'static str,
    pub value: &'static str,
}

/// Option list for `C`, in display order.
pub fn list_options<C: ListChoice>() -> Vec<ListOption> {
    C::ALL
        .iter()
        .map(|choice| ListOption {
            title: choice.title(),
            value: choice.value(),
        })
        .collect()
}

//! Field Normalizer — total mapping from any candidate JSON shape to a `ResumeRecord`.
//!
//! List fields go through two steps:
//! 1. `ListShape` resolves how the field arrived (absent, JSON-encoded string,
//!    native list, or a single bare value) into a plain list of items.
//! 2. `FromItem` coerces each item into the field's element type, dropping
//!    items that cannot represent one.
//!
//! Scalar fields keep strings and replace anything else with `""`.

use serde_json::{Map, Value};

use crate::resume::models::{Certification, Education, Position, Project, ResumeRecord};

/// How a list field arrived from the model.
#[derive(Debug, PartialEq)]
enum ListShape<'a> {
    Absent,
    Encoded(&'a str),
    List(&'a [Value]),
    Single(&'a Value),
}

impl<'a> ListShape<'a> {
    fn of(value: Option<&'a Value>) -> Self {
        match value {
            None | Some(Value::Null) => ListShape::Absent,
            Some(Value::String(s)) => ListShape::Encoded(s),
            Some(Value::Array(items)) => ListShape::List(items),
            Some(other) => ListShape::Single(other),
        }
    }

    fn into_items(self) -> Vec<Value> {
        match self {
            ListShape::Absent => Vec::new(),
            ListShape::Encoded(s) => match serde_json::from_str::<Value>(s) {
                Ok(Value::Array(items)) => items,
                Ok(value) => vec![value],
                Err(_) => Vec::new(),
            },
            ListShape::List(items) => items.to_vec(),
            ListShape::Single(value) => vec![value.clone()],
        }
    }
}

/// Coercion of one list item into a list element type.
trait FromItem: Sized {
    fn from_item(item: &Value) -> Option<Self>;
}

impl FromItem for String {
    fn from_item(item: &Value) -> Option<Self> {
        scalar_text(item)
    }
}

impl FromItem for Education {
    fn from_item(item: &Value) -> Option<Self> {
        match item {
            Value::Object(obj) => Some(Education {
                institution: text(obj, "institution"),
                degree: text(obj, "degree"),
                location: text(obj, "location"),
                dates: text(obj, "dates"),
                gpa: text(obj, "gpa"),
            }),
            Value::String(s) => Some(Education {
                institution: s.clone(),
                ..Default::default()
            }),
            _ => None,
        }
    }
}

impl FromItem for Position {
    fn from_item(item: &Value) -> Option<Self> {
        match item {
            Value::Object(obj) => Some(Position {
                company: text(obj, "company"),
                role: text(obj, "role"),
                location: text(obj, "location"),
                dates: text(obj, "dates"),
                description: text(obj, "description"),
            }),
            Value::String(s) => Some(Position {
                company: s.clone(),
                ..Default::default()
            }),
            _ => None,
        }
    }
}

impl FromItem for Project {
    fn from_item(item: &Value) -> Option<Self> {
        match item {
            Value::Object(obj) => Some(Project {
                title: text(obj, "title"),
                dates: text(obj, "dates"),
                description: text(obj, "description"),
            }),
            Value::String(s) => Some(Project {
                title: s.clone(),
                ..Default::default()
            }),
            _ => None,
        }
    }
}

impl FromItem for Certification {
    fn from_item(item: &Value) -> Option<Self> {
        match item {
            Value::Object(obj) => Some(Certification {
                name: text(obj, "name"),
                issuer: text(obj, "issuer"),
                year: obj.get("year").and_then(year),
            }),
            Value::String(s) => Some(Certification {
                name: s.clone(),
                ..Default::default()
            }),
            _ => None,
        }
    }
}

/// Normalizes any candidate value into a fully populated `ResumeRecord`.
///
/// Total and idempotent: a non-object candidate yields the empty record, and
/// normalizing the JSON form of a normalized record returns the same record.
pub fn normalize_fields(candidate: &Value) -> ResumeRecord {
    let empty = Map::new();
    let obj = candidate.as_object().unwrap_or(&empty);

    ResumeRecord {
        name: string_field(obj, "name"),
        title: string_field(obj, "title"),
        email: string_field(obj, "email"),
        phone: string_field(obj, "phone"),
        linkedin: string_field(obj, "linkedin"),
        github: string_field(obj, "github"),
        summary: string_field(obj, "summary"),
        education: list_field(obj, "education"),
        experience: list_field(obj, "experience"),
        internships: list_field(obj, "internships"),
        technical_skills: list_field(obj, "technicalSkills"),
        soft_skills: list_field(obj, "softSkills"),
        languages: list_field(obj, "languages"),
        certifications: list_field(obj, "certifications"),
        areas_of_interest: list_field(obj, "areasOfInterest"),
        projects: list_field(obj, "projects"),
    }
}

fn string_field(obj: &Map<String, Value>, key: &str) -> String {
    match obj.get(key) {
        Some(Value::String(s)) => s.clone(),
        _ => String::new(),
    }
}

fn list_field<T: FromItem>(obj: &Map<String, Value>, key: &str) -> Vec<T> {
    ListShape::of(obj.get(key))
        .into_items()
        .iter()
        .filter_map(T::from_item)
        .collect()
}

/// Sub-record text field: strings pass, numbers are rendered.
fn text(obj: &Map<String, Value>, key: &str) -> String {
    obj.get(key).and_then(scalar_text).unwrap_or_default()
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn year(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

//! Resume description as read from the YAML input.
//!
//! Every section is optional and every entry field is lenient: YAML scalars of any
//! kind are accepted as text, a single scalar counts as a one-line list, `null`
//! reads as empty, and unknown keys or wrongly shaped values are dropped here
//! (they are reported by `models::validation`). Only `name` is required, and
//! that requirement is enforced at render time, not at parse time. The one
//! structural failure is a document whose root is not a mapping.

use std::path::Path;

use serde::de::{DeserializeOwned, Error as _, IgnoredAny};
use serde::{Deserialize, Deserializer};
use serde_yaml::{Mapping, Value};
use tracing::{debug, warn};

use crate::errors::{InputError, ValidationWarning};
use crate::models::validation::validate_document;

// ────────────────────────────────────────────────────────────────────────────
// Data model
// ────────────────────────────────────────────────────────────────────────────

/// Immutable resume description handed to the renderer.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ResumeData {
    #[serde(default, deserialize_with = "optional_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_mapping")]
    pub contact: Contact,
    #[serde(default, deserialize_with = "lenient_list")]
    pub education: Vec<EducationEntry>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub projects: Vec<ProjectEntry>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub skills: Vec<SkillGroup>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub achievements: Vec<Achievement>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub publications: Vec<Publication>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub certifications: Vec<Certification>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Contact {
    #[serde(default, deserialize_with = "optional_text")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub email: Option<String>,
    /// Full profile URL or bare handle.
    #[serde(default, deserialize_with = "optional_text")]
    pub linkedin: Option<String>,
    /// Full profile URL or bare handle.
    #[serde(default, deserialize_with = "optional_text")]
    pub github: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EducationEntry {
    #[serde(default, deserialize_with = "text")]
    pub school: String,
    #[serde(default, deserialize_with = "text")]
    pub location: String,
    #[serde(default, deserialize_with = "text")]
    pub degree: String,
    #[serde(default, deserialize_with = "text")]
    pub dates: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ExperienceEntry {
    #[serde(default, deserialize_with = "text")]
    pub company: String,
    #[serde(default, deserialize_with = "text")]
    pub role: String,
    #[serde(default, deserialize_with = "text")]
    pub location: String,
    #[serde(default, deserialize_with = "text")]
    pub dates: String,
    #[serde(default, deserialize_with = "optional_text_list")]
    description: Option<Vec<String>>,
    /// Older input files used `bullets`; `description` wins when both are present.
    #[serde(default, deserialize_with = "optional_text_list")]
    bullets: Option<Vec<String>>,
}

impl ExperienceEntry {
    #[cfg(test)]
    pub fn new(company: &str, role: &str, location: &str, dates: &str, lines: &[&str]) -> Self {
        Self {
            company: company.to_string(),
            role: role.to_string(),
            location: location.to_string(),
            dates: dates.to_string(),
            description: Some(lines.iter().map(|l| l.to_string()).collect()),
            bullets: None,
        }
    }

    /// Ordered description lines.
    pub fn description(&self) -> &[String] {
        self.description
            .as_deref()
            .or(self.bullets.as_deref())
            .unwrap_or(&[])
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProjectEntry {
    #[serde(default, deserialize_with = "text")]
    pub name: String,
    #[serde(default, deserialize_with = "optional_text")]
    pub technologies: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub link: Option<String>,
    #[serde(default, deserialize_with = "optional_text_list")]
    description: Option<Vec<String>>,
    #[serde(default, deserialize_with = "optional_text_list")]
    bullets: Option<Vec<String>>,
}

impl ProjectEntry {
    pub fn description(&self) -> &[String] {
        self.description
            .as_deref()
            .or(self.bullets.as_deref())
            .unwrap_or(&[])
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SkillGroup {
    #[serde(default, deserialize_with = "text")]
    pub category: String,
    #[serde(default, deserialize_with = "text_list")]
    pub list: Vec<String>,
}

/// An achievement line: a plain string, or the older structured record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Achievement {
    Text(#[serde(deserialize_with = "scalar_text")] String),
    Record(#[serde(deserialize_with = "mapping_only")] AchievementRecord),
    /// Anything else; reported by validation and rendered as nothing.
    Unsupported(Value),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AchievementRecord {
    #[serde(default, deserialize_with = "optional_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub issuer: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub date: Option<String>,
}

/// A publication line: a plain string, or the older structured record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Publication {
    Text(#[serde(deserialize_with = "scalar_text")] String),
    Record(#[serde(deserialize_with = "mapping_only")] PublicationRecord),
    Unsupported(Value),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PublicationRecord {
    #[serde(default, deserialize_with = "optional_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub journal: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub link: Option<String>,
}

/// A certification: a bare label, or a label with an optional link.
///
/// `Plain("AWS SAA")` and a record `{ name: "AWS SAA" }` render identically.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Certification {
    Plain(#[serde(deserialize_with = "scalar_text")] String),
    Linked(#[serde(deserialize_with = "mapping_only")] CertificationRecord),
    Unsupported(Value),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CertificationRecord {
    #[serde(deserialize_with = "text")]
    pub name: String,
    #[serde(default, deserialize_with = "optional_text")]
    pub link: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Loading
// ────────────────────────────────────────────────────────────────────────────

/// A parsed input document together with the non-fatal findings about it.
#[derive(Debug, Clone)]
pub struct LoadedResume {
    pub data: ResumeData,
    pub warnings: Vec<ValidationWarning>,
}

/// Reads and parses a resume description from disk.
pub fn load_resume(path: &Path) -> Result<LoadedResume, InputError> {
    let content = std::fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_resume(&content, path)
}

/// Parses YAML text. `origin` is only used in error messages.
///
/// An empty document is an empty mapping. Unknown keys are logged at `warn` and
/// returned alongside the data; they never fail the parse.
pub fn parse_resume(content: &str, origin: &Path) -> Result<LoadedResume, InputError> {
    let parse_err = |source| InputError::Parse {
        path: origin.to_path_buf(),
        source,
    };

    let document: Value = if content.trim().is_empty() {
        Value::Mapping(Default::default())
    } else {
        serde_yaml::from_str(content).map_err(parse_err)?
    };
    let document = match document {
        Value::Null => Value::Mapping(Default::default()),
        other => other,
    };

    let warnings = validate_document(&document);
    for w in &warnings {
        warn!("{w}");
    }

    // Derived struct visitors would read a sequence root positionally.
    let root: Mapping = serde_yaml::from_value(document).map_err(parse_err)?;
    let data: ResumeData = serde_yaml::from_value(Value::Mapping(root)).map_err(parse_err)?;
    debug!(
        education = data.education.len(),
        experience = data.experience.len(),
        projects = data.projects.len(),
        skills = data.skills.len(),
        "Parsed resume input"
    );

    Ok(LoadedResume { data, warnings })
}

// ────────────────────────────────────────────────────────────────────────────
// Lenient scalar helpers
// ────────────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl From<Scalar> for String {
    fn from(s: Scalar) -> Self {
        match s {
            Scalar::Text(t) => t,
            Scalar::Int(i) => i.to_string(),
            Scalar::Float(f) => f.to_string(),
            Scalar::Bool(b) => b.to_string(),
        }
    }
}

/// Derived struct visitors also accept sequences; records must be written as mappings.
fn mapping_only<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let mapping = Mapping::deserialize(deserializer)?;
    serde_yaml::from_value(Value::Mapping(mapping)).map_err(D::Error::custom)
}

/// Sections must be sequences; anything else reads as empty. Entries that cannot
/// be read are skipped. `models::validation` reports both cases.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Sequence(items)) => items
            .into_iter()
            .filter_map(|item| serde_yaml::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

fn lenient_mapping<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(value @ Value::Mapping(_)) => serde_yaml::from_value(value).unwrap_or_default(),
        _ => T::default(),
    })
}

/// A text field holding a mapping or a sequence is ignored rather than failing the load.
#[derive(Deserialize)]
#[serde(untagged)]
enum TextField {
    Scalar(Scalar),
    Other(IgnoredAny),
}

/// A single scalar counts as a one-line list.
#[derive(Deserialize)]
#[serde(untagged)]
enum TextListField {
    One(Scalar),
    Many(Vec<Scalar>),
    Other(IgnoredAny),
}

fn scalar_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Scalar::deserialize(deserializer).map(String::from)
}

fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<TextField>::deserialize(deserializer)? {
        Some(TextField::Scalar(s)) => Some(s.into()),
        Some(TextField::Other(_)) | None => None,
    })
}

fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_text(deserializer)?.unwrap_or_default())
}

fn optional_text_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<TextListField>::deserialize(deserializer)? {
        Some(TextListField::One(item)) => Some(vec![item.into()]),
        Some(TextListField::Many(items)) => Some(items.into_iter().map(String::from).collect()),
        Some(TextListField::Other(_)) | None => None,
    })
}

fn text_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_text_list(deserializer)?.unwrap_or_default())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn parse(yaml: &str) -> LoadedResume {
        parse_resume(yaml, Path::new("test.yml")).unwrap()
    }

    #[test]
    fn test_empty_document_is_empty_resume() {
        let loaded = parse("");
        assert_eq!(loaded.data, ResumeData::default());
        assert!(loaded.warnings.is_empty());

        let loaded = parse("# only a comment\n");
        assert_eq!(loaded.data.name, None);
    }

    #[test]
    fn test_numeric_scalars_read_as_text() {
        let loaded = parse(
            "name: Test User\n\
             contact:\n  phone: 5551234567\n\
             education:\n  - school: Test University\n    dates: 2024\n    degree: BSc\n    location: TX\n",
        );
        assert_eq!(loaded.data.contact.phone.as_deref(), Some("5551234567"));
        assert_eq!(loaded.data.education[0].dates, "2024");
    }

    #[test]
    fn test_null_sections_read_as_empty() {
        let loaded = parse("name: Test User\ncontact:\neducation:\nskills: ~\n");
        assert_eq!(loaded.data.contact, Contact::default());
        assert!(loaded.data.education.is_empty());
        assert!(loaded.data.skills.is_empty());
    }

    #[test]
    fn test_experience_bullets_alias() {
        let loaded = parse(
            "name: T\nexperience:\n  - company: A\n    role: R\n    bullets: [one, two]\n  - company: B\n    role: R\n    description: [new]\n    bullets: [old]\n",
        );
        assert_eq!(loaded.data.experience[0].description(), ["one", "two"]);
        assert_eq!(loaded.data.experience[1].description(), ["new"]);
    }

    #[test]
    fn test_certification_variants() {
        let loaded = parse(
            "name: T\ncertifications:\n  - AWS Solutions Architect\n  - name: CKA\n  - name: Terraform Associate\n    link: https://example.com/cert\n  - [Not, A, Record]\n  - link: https://example.com/nameless\n",
        );
        let certs = &loaded.data.certifications;
        assert_eq!(certs[0], Certification::Plain("AWS Solutions Architect".into()));
        assert_eq!(
            certs[1],
            Certification::Linked(CertificationRecord {
                name: "CKA".into(),
                link: None
            })
        );
        assert!(matches!(
            &certs[2],
            Certification::Linked(CertificationRecord { link: Some(l), .. }) if l == "https://example.com/cert"
        ));
        assert!(matches!(&certs[3], Certification::Unsupported(_)));
        assert!(matches!(&certs[4], Certification::Unsupported(_)));
    }

    #[test]
    fn test_achievement_and_publication_formats() {
        let loaded = parse(
            "name: T\nachievements:\n  - Won a hackathon\n  - title: Best Paper\n    issuer: ConfX\n    date: 2023\npublications:\n  - title: Paper\n    journal: J\n  - [not, valid]\n",
        );
        assert_eq!(loaded.data.achievements[0], Achievement::Text("Won a hackathon".into()));
        assert!(matches!(
            &loaded.data.achievements[1],
            Achievement::Record(r) if r.date.as_deref() == Some("2023")
        ));
        assert!(matches!(&loaded.data.publications[0], Publication::Record(_)));
        assert!(matches!(&loaded.data.publications[1], Publication::Unsupported(_)));
    }

    #[test]
    fn test_scalar_list_entries_read_as_text() {
        let loaded = parse(
            "name: T\nachievements: [2023, true]\npublications: [1.5]\ncertifications: [101]\n",
        );
        assert!(loaded.warnings.is_empty(), "{:?}", loaded.warnings);
        assert_eq!(
            loaded.data.achievements,
            vec![Achievement::Text("2023".into()), Achievement::Text("true".into())]
        );
        assert_eq!(loaded.data.publications, vec![Publication::Text("1.5".into())]);
        assert_eq!(loaded.data.certifications, vec![Certification::Plain("101".into())]);
    }

    #[test]
    fn test_single_scalar_reads_as_one_line_list() {
        let loaded = parse(
            "name: T\nexperience:\n  - company: A\n    description: Did one thing\nprojects:\n  - name: P\n    bullets: 42\nskills:\n  - category: Languages\n    list: Rust, Python\n",
        );
        assert!(loaded.warnings.is_empty(), "{:?}", loaded.warnings);
        assert_eq!(loaded.data.experience[0].description(), ["Did one thing"]);
        assert_eq!(loaded.data.projects[0].description(), ["42"]);
        assert_eq!(loaded.data.skills[0].list, vec!["Rust, Python"]);
    }

    #[test]
    fn test_wrongly_shaped_values_are_dropped_not_fatal() {
        let loaded = parse(
            "name: T\ncontact: [x]\neducation: not a list\nexperience:\n  - just text\n  - company: {nested: map}\n    role: R\n    description: [ok, {bad: item}]\n",
        );
        assert_eq!(loaded.data.name.as_deref(), Some("T"));
        assert_eq!(loaded.data.contact, Contact::default());
        assert!(loaded.data.education.is_empty());
        assert_eq!(loaded.data.experience.len(), 1);
        assert_eq!(loaded.data.experience[0].company, "");
        assert_eq!(loaded.data.experience[0].role, "R");
        assert!(loaded.data.experience[0].description().is_empty());
        assert_eq!(loaded.warnings.len(), 5);
    }

    #[test]
    fn test_unknown_fields_are_tolerated_and_reported() {
        let loaded = parse("name: Test User\nage: 30\n");
        assert_eq!(loaded.data.name.as_deref(), Some("Test User"));
        assert_eq!(loaded.warnings.len(), 1);
        assert_eq!(loaded.warnings[0].location, "root");
    }

    #[test]
    fn test_invalid_yaml_is_parse_error() {
        let err = parse_resume("name: Test User\nage: 30\n  invalid_indent: :", Path::new("x.yml"))
            .unwrap_err();
        assert!(matches!(err, InputError::Parse { .. }));
    }

    #[test]
    fn test_non_mapping_root_is_parse_error() {
        let err = parse_resume("- a\n- b\n", Path::new("x.yml")).unwrap_err();
        assert!(matches!(err, InputError::Parse { .. }));
    }

    #[test]
    fn test_load_missing_file_is_read_error() {
        let err = load_resume(Path::new("non_existent_file.yml")).unwrap_err();
        assert!(matches!(err, InputError::Read { .. }));
    }

    #[test]
    fn test_load_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "name: Disk User").unwrap();
        let loaded = load_resume(file.path()).unwrap();
        assert_eq!(loaded.data.name.as_deref(), Some("Disk User"));
    }
}

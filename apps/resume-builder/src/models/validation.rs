//! Unknown-field scan over the raw YAML document.
//!
//! Runs before typed deserialization so that keys and values the lenient model
//! drops are still reported. Findings are warnings only; nothing here can fail a
//! build.

use serde_yaml::{Mapping, Value};

use crate::errors::ValidationWarning;

const KNOWN_ROOT_FIELDS: &[&str] = &[
    "name",
    "contact",
    "education",
    "experience",
    "projects",
    "skills",
    "achievements",
    "publications",
    "certifications",
];

const LIST_SECTIONS: &[&str] = &[
    "education",
    "experience",
    "projects",
    "skills",
    "achievements",
    "publications",
    "certifications",
];

const KNOWN_CONTACT_FIELDS: &[&str] = &["phone", "email", "linkedin", "github"];

const KNOWN_EDUCATION_FIELDS: &[&str] = &["school", "location", "degree", "dates"];

const KNOWN_EXPERIENCE_FIELDS: &[&str] = &[
    "company",
    "role",
    "location",
    "dates",
    "description",
    "bullets",
];

const KNOWN_PROJECT_FIELDS: &[&str] = &[
    "name",
    "technologies",
    "date",
    "link",
    "description",
    "bullets",
];

const KNOWN_SKILLS_FIELDS: &[&str] = &["category", "list"];

const KNOWN_ACHIEVEMENT_FIELDS: &[&str] = &["title", "issuer", "date", "description", "bullets"];

const KNOWN_PUBLICATION_FIELDS: &[&str] = &["title", "authors", "journal", "date", "link", "bullets"];

const KNOWN_CERTIFICATION_FIELDS: &[&str] = &["name", "link"];

/// Fields read as a list of lines. A single scalar is also accepted.
const LIST_FIELDS: &[&str] = &["description", "bullets", "list"];

/// Known fields that are accepted but never read.
const UNREAD_FIELDS: &[&str] = &["authors"];

/// Returns every finding for the document, in document order.
pub fn validate_document(document: &Value) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    let Some(root) = document.as_mapping() else {
        warnings.push(ValidationWarning::new(
            "root",
            "Resume document should be a mapping of section names to values",
        ));
        return warnings;
    };

    check_keys(root, KNOWN_ROOT_FIELDS, "root", &mut warnings);

    if root.get("name").is_some_and(|name| !name.is_null() && !is_scalar(name)) {
        warnings.push(ValidationWarning::new(
            "root",
            "Field 'name' should be text",
        ));
    }

    match root.get("contact") {
        None | Some(Value::Null) => {}
        Some(Value::Mapping(contact)) => {
            check_keys(contact, KNOWN_CONTACT_FIELDS, "contact", &mut warnings);
            check_shapes(contact, KNOWN_CONTACT_FIELDS, "contact", &mut warnings);
        }
        Some(_) => warnings.push(ValidationWarning::new(
            "contact",
            "Contact should be a mapping; ignored",
        )),
    }

    for section in LIST_SECTIONS {
        match root.get(*section) {
            None | Some(Value::Null) | Some(Value::Sequence(_)) => {}
            Some(_) => warnings.push(ValidationWarning::new(
                *section,
                "Section should be a list; ignored",
            )),
        }
    }

    for (section, known) in [
        ("education", KNOWN_EDUCATION_FIELDS),
        ("experience", KNOWN_EXPERIENCE_FIELDS),
        ("projects", KNOWN_PROJECT_FIELDS),
        ("skills", KNOWN_SKILLS_FIELDS),
    ] {
        for (i, entry) in section_entries(root, section) {
            let location = format!("{section}[{i}]");
            match entry.as_mapping() {
                Some(map) => {
                    check_keys(map, known, &location, &mut warnings);
                    check_shapes(map, known, &location, &mut warnings);
                }
                None => warnings.push(ValidationWarning::new(
                    location,
                    "Entry should be a mapping; ignored",
                )),
            }
        }
    }

    validate_text_or_record(
        root,
        "achievements",
        KNOWN_ACHIEVEMENT_FIELDS,
        "Achievement should be text or a mapping",
        &mut warnings,
    );
    validate_text_or_record(
        root,
        "publications",
        KNOWN_PUBLICATION_FIELDS,
        "Publication should be text or a mapping",
        &mut warnings,
    );
    validate_certifications(root, &mut warnings);

    warnings
}

fn section_entries<'a>(root: &'a Mapping, section: &str) -> impl Iterator<Item = (usize, &'a Value)> {
    root.get(section)
        .and_then(Value::as_sequence)
        .into_iter()
        .flatten()
        .enumerate()
}

fn check_keys(map: &Mapping, known: &[&str], location: &str, warnings: &mut Vec<ValidationWarning>) {
    for key in map.keys() {
        let name = match key {
            Value::String(s) => s.clone(),
            other => serde_yaml::to_string(other)
                .map(|s| s.trim().to_string())
                .unwrap_or_else(|_| "<non-string key>".to_string()),
        };
        if !known.contains(&name.as_str()) {
            warnings.push(ValidationWarning::new(
                location,
                format!("Unknown field '{name}'"),
            ));
        }
    }
}

/// Reports known fields whose values the model cannot read as text or as lines.
fn check_shapes(map: &Mapping, known: &[&str], location: &str, warnings: &mut Vec<ValidationWarning>) {
    for (key, value) in map {
        let Some(name) = key.as_str() else { continue };
        if !known.contains(&name) || UNREAD_FIELDS.contains(&name) || value.is_null() {
            continue;
        }
        let readable = if LIST_FIELDS.contains(&name) {
            is_scalar(value) || value.as_sequence().is_some_and(|items| items.iter().all(is_scalar))
        } else {
            is_scalar(value)
        };
        if !readable {
            let expected = if LIST_FIELDS.contains(&name) { "text or a list of text" } else { "text" };
            warnings.push(ValidationWarning::new(
                location,
                format!("Field '{name}' should be {expected}; ignored"),
            ));
        }
    }
}

fn is_scalar(value: &Value) -> bool {
    matches!(value, Value::String(_) | Value::Number(_) | Value::Bool(_))
}

fn validate_text_or_record(
    root: &Mapping,
    section: &str,
    known: &[&str],
    wrong_type: &str,
    warnings: &mut Vec<ValidationWarning>,
) {
    for (i, entry) in section_entries(root, section) {
        let location = format!("{section}[{i}]");
        match entry {
            Value::Mapping(map) => {
                check_keys(map, known, &location, warnings);
                check_shapes(map, known, &location, warnings);
            }
            scalar if is_scalar(scalar) => {}
            _ => warnings.push(ValidationWarning::new(location, wrong_type)),
        }
    }
}

fn validate_certifications(root: &Mapping, warnings: &mut Vec<ValidationWarning>) {
    for (i, entry) in section_entries(root, "certifications") {
        let location = format!("certifications[{i}]");
        match entry {
            scalar if is_scalar(scalar) => {}
            Value::Mapping(map) if map.contains_key("name") => {
                check_keys(map, KNOWN_CERTIFICATION_FIELDS, &location, warnings);
                check_shapes(map, KNOWN_CERTIFICATION_FIELDS, &location, warnings);
            }
            _ => warnings.push(ValidationWarning::new(
                location,
                "Certification should be text or a mapping with 'name' and optional 'link'",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn warnings_for(yaml: &str) -> Vec<ValidationWarning> {
        let doc: Value = serde_yaml::from_str(yaml).unwrap();
        validate_document(&doc)
    }

    #[test]
    fn test_known_fields_produce_no_warnings() {
        let w = warnings_for(
            "name: A\ncontact: {phone: '1', email: a@b.c, linkedin: a, github: a}\n\
             education: [{school: S, location: L, degree: D, dates: '2020'}]\n\
             experience: [{company: C, role: R, location: L, dates: D, description: [x]}]\n\
             projects: [{name: P, technologies: T, date: D, link: L, bullets: [y]}]\n\
             skills: [{category: C, list: [a, b]}]\n\
             achievements: [text, {title: T, issuer: I}]\n\
             publications: [{title: T, authors: A, journal: J}]\n\
             certifications: [plain, {name: N, link: L}]\n",
        );
        assert!(w.is_empty(), "unexpected warnings: {w:?}");
    }

    #[test]
    fn test_unknown_root_field() {
        let w = warnings_for("name: A\nhobbies: [chess]\n");
        assert_eq!(w, vec![ValidationWarning::new("root", "Unknown field 'hobbies'")]);
    }

    #[test]
    fn test_unknown_contact_and_entry_fields() {
        let w = warnings_for(
            "name: A\ncontact: {fax: '1'}\nexperience:\n  - company: C\n  - company: D\n    manager: M\n",
        );
        assert_eq!(w.len(), 2);
        assert_eq!(w[0].location, "contact");
        assert_eq!(w[1].location, "experience[1]");
        assert!(w[1].message.contains("manager"));
    }

    #[test]
    fn test_wrongly_typed_list_items() {
        let w = warnings_for(
            "name: A\nachievements: [[1, 2]]\npublications: [[a]]\ncertifications: [{link: x}]\n",
        );
        let locations: Vec<&str> = w.iter().map(|w| w.location.as_str()).collect();
        assert_eq!(
            locations,
            vec!["achievements[0]", "publications[0]", "certifications[0]"]
        );
    }

    #[test]
    fn test_scalar_entries_are_accepted() {
        let w = warnings_for(
            "name: A\nachievements: [2023, 4.5, true]\npublications: [7]\ncertifications: [101]\n",
        );
        assert!(w.is_empty(), "unexpected warnings: {w:?}");
    }

    #[test]
    fn test_single_line_lists_are_accepted() {
        let w = warnings_for(
            "name: A\nexperience:\n  - company: C\n    description: Did one thing\nskills:\n  - category: Languages\n    list: Rust, Python\n",
        );
        assert!(w.is_empty(), "unexpected warnings: {w:?}");
    }

    #[test]
    fn test_unreadable_shapes_are_reported() {
        let w = warnings_for(
            "name: A\ncontact: [x]\neducation: not a list\nexperience:\n  - just text\n  - company: {nested: map}\n    description: [ok, {bad: item}]\n",
        );
        let found: Vec<String> = w.iter().map(ToString::to_string).collect();
        assert_eq!(
            found,
            vec![
                "contact: Contact should be a mapping; ignored",
                "education: Section should be a list; ignored",
                "experience[0]: Entry should be a mapping; ignored",
                "experience[1]: Field 'company' should be text; ignored",
                "experience[1]: Field 'description' should be text or a list of text; ignored",
            ]
        );
    }

    #[test]
    fn test_non_mapping_document() {
        let w = warnings_for("- just\n- a list\n");
        assert_eq!(w.len(), 1);
        assert_eq!(w[0].location, "root");
    }
}

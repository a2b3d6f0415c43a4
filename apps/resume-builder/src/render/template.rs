//! Template renderer: turns `ResumeData` + `StyleConfiguration` into LaTeX source.
//!
//! Pure: no I/O, no shared state. Every user-supplied string goes through
//! `escape_latex` (or `escape_url` for link targets). Sections whose entries are
//! all empty are left out entirely, heading included.

use crate::errors::RenderError;
use crate::layout::style::StyleConfiguration;
use crate::models::resume::{
    Achievement, Certification, Contact, ProjectEntry, Publication, ResumeData,
};
use crate::render::escape::{escape_latex, escape_url};
use crate::render::latex::{
    ACHIEVEMENTS_HEADER, BEGIN_DOCUMENT, CERTIFICATIONS_HEADER, CONTACT_SEPARATOR,
    EDUCATION_HEADER, END_DOCUMENT, EXPERIENCE_HEADER, PREAMBLE_TEMPLATE, PROJECTS_HEADER,
    SKILLS_HEADER,
};

const LINKEDIN_BASE: &str = "https://linkedin.com/in/";
const GITHUB_BASE: &str = "https://github.com/";

/// Complete LaTeX document text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSource(String);

impl DocumentSource {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Everything from `\begin{document}` on. Identical across styles for the same data.
    #[cfg(test)]
    pub fn body(&self) -> &str {
        let start = self.0.find(BEGIN_DOCUMENT).unwrap_or(0);
        &self.0[start..]
    }

    /// Everything before `\begin{document}`.
    #[cfg(test)]
    pub fn preamble(&self) -> &str {
        let end = self.0.find(BEGIN_DOCUMENT).unwrap_or(self.0.len());
        &self.0[..end]
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Entry point
// ────────────────────────────────────────────────────────────────────────────

/// Renders the full document.
///
/// Fails only when `name` is absent or blank.
pub fn render(data: &ResumeData, style: &StyleConfiguration) -> Result<DocumentSource, RenderError> {
    let name = data
        .name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .ok_or(RenderError::MissingName)?;

    let mut doc = render_preamble(style);
    doc.push('\n');
    doc.push_str(BEGIN_DOCUMENT);
    doc.push('\n');
    doc.push_str(&render_heading(name, &data.contact));

    let sections = [
        education_section(data),
        experience_section(data),
        projects_section(data),
        skills_section(data),
        achievements_publications_section(data),
        certifications_section(data),
    ];
    for section in sections.into_iter().flatten() {
        doc.push('\n');
        doc.push_str(&section);
    }

    doc.push('\n');
    doc.push_str(END_DOCUMENT);
    Ok(DocumentSource(doc))
}

/// Substitutes every style knob into the preamble template.
pub fn render_preamble(style: &StyleConfiguration) -> String {
    let spacing = &style.spacing;
    let margins = &style.margins;
    PREAMBLE_TEMPLATE
        .replace("{font_size_pt}", &style.font_size_pt.to_string())
        .replace("{margin_top}", &margins.top.to_string())
        .replace("{margin_bottom}", &margins.bottom.to_string())
        .replace("{margin_left}", &margins.left.to_string())
        .replace("{margin_right}", &margins.right.to_string())
        .replace("{font_packages}", style.font.preamble())
        .replace("{line_stretch}", &spacing.line_stretch.to_string())
        .replace("{section_before}", &spacing.section_before.to_string())
        .replace("{section_after}", &spacing.section_after.to_string())
        .replace("{item_gap}", &spacing.item_gap.to_string())
        .replace("{subheading_gap}", &spacing.subheading_gap.to_string())
        .replace("{list_gap}", &spacing.list_gap.to_string())
}

// ────────────────────────────────────────────────────────────────────────────
// Heading
// ────────────────────────────────────────────────────────────────────────────

fn render_heading(name: &str, contact: &Contact) -> String {
    let mut items = Vec::new();
    if let Some(phone) = non_blank(&contact.phone) {
        items.push(escape_latex(phone));
    }
    if let Some(email) = non_blank(&contact.email) {
        items.push(link(&format!("mailto:{email}"), &underline(email)));
    }
    if let Some(linkedin) = non_blank(&contact.linkedin) {
        items.push(link(
            &profile_url(linkedin, "linkedin.com", LINKEDIN_BASE),
            &underline(linkedin),
        ));
    }
    if let Some(github) = non_blank(&contact.github) {
        items.push(link(
            &profile_url(github, "github.com", GITHUB_BASE),
            &underline(github),
        ));
    }

    let mut heading = String::from("\\begin{center}\n");
    heading.push_str(&format!("    \\textbf{{\\Huge \\scshape {}}}", escape_latex(name)));
    if items.is_empty() {
        heading.push('\n');
    } else {
        heading.push_str(" \\\\ \\vspace{1pt}\n");
        heading.push_str(&format!("    \\small {}\n", items.join(CONTACT_SEPARATOR)));
    }
    heading.push_str("\\end{center}\n");
    heading
}

/// Expands a bare handle to a profile URL; full URLs pass through.
fn profile_url(value: &str, host: &str, base: &str) -> String {
    let value = value.trim();
    if value.contains("://") {
        value.to_string()
    } else if value.starts_with(host) || value.starts_with(&format!("www.{host}")) {
        format!("https://{value}")
    } else {
        format!("{base}{}", value.trim_start_matches('@'))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Sections
// ────────────────────────────────────────────────────────────────────────────

fn education_section(data: &ResumeData) -> Option<String> {
    if data.education.is_empty() {
        return None;
    }
    let mut s = String::from(EDUCATION_HEADER);
    s.push_str("  \\resumeSubHeadingListStart\n");
    for edu in &data.education {
        s.push_str("    \\resumeSubheading\n");
        s.push_str(&format!(
            "      {{{}}}{{{}}}\n",
            escape_latex(&edu.school),
            escape_latex(&edu.location)
        ));
        s.push_str(&format!(
            "      {{{}}}{{{}}}\n",
            escape_latex(&edu.degree),
            escape_latex(&edu.dates)
        ));
    }
    s.push_str("  \\resumeSubHeadingListEnd\n");
    Some(s)
}

fn experience_section(data: &ResumeData) -> Option<String> {
    if data.experience.is_empty() {
        return None;
    }
    let mut s = String::from(EXPERIENCE_HEADER);
    s.push_str("  \\resumeSubHeadingListStart\n");
    for exp in &data.experience {
        s.push_str("    \\resumeSubheading\n");
        s.push_str(&format!(
            "      {{{}}}{{{}}}\n",
            escape_latex(&exp.role),
            escape_latex(&exp.dates)
        ));
        s.push_str(&format!(
            "      {{{}}}{{{}}}\n",
            escape_latex(&exp.company),
            escape_latex(&exp.location)
        ));
        s.push_str(&item_list(exp.description().iter().map(|d| escape_latex(d)), 6));
    }
    s.push_str("  \\resumeSubHeadingListEnd\n");
    Some(s)
}

fn projects_section(data: &ResumeData) -> Option<String> {
    if data.projects.is_empty() {
        return None;
    }
    let mut s = String::from(PROJECTS_HEADER);
    s.push_str("  \\resumeSubHeadingListStart\n");
    for project in &data.projects {
        s.push_str("    \\resumeProjectHeading\n");
        s.push_str(&format!(
            "      {{{}}}{{{}}}\n",
            project_title(project),
            non_blank(&project.date).map(escape_latex).unwrap_or_default()
        ));
        s.push_str(&item_list(
            project.description().iter().map(|d| escape_latex(d)),
            6,
        ));
    }
    s.push_str("  \\resumeSubHeadingListEnd\n");
    Some(s)
}

/// `\textbf{name}`, followed by the technologies, or the link when there are none.
fn project_title(project: &ProjectEntry) -> String {
    let mut title = format!("\\textbf{{{}}}", escape_latex(&project.name));
    if let Some(tech) = non_blank(&project.technologies) {
        title.push_str(&format!(" $|$ \\emph{{{}}}", escape_latex(tech)));
    } else if let Some(url) = non_blank(&project.link) {
        title.push_str(&format!(
            " $|$ {}",
            link(url, &format!("\\emph{{{}}}", escape_latex(url)))
        ));
    }
    title
}

fn skills_section(data: &ResumeData) -> Option<String> {
    if data.skills.is_empty() {
        return None;
    }
    let mut s = String::from(SKILLS_HEADER);
    s.push_str(" \\begin{itemize}[leftmargin=0.15in, label={}]\n");
    s.push_str("    \\small{\\item{\n");
    for group in &data.skills {
        s.push_str(&format!(
            "     \\textbf{{{}}}{{: {}}} \\\\\n",
            escape_latex(&group.category),
            escape_latex(&group.list.join(", "))
        ));
    }
    s.push_str("    }}\n");
    s.push_str(" \\end{itemize}\n");
    Some(s)
}

/// One combined list: achievements first, then publications.
///
/// Shown when either sequence has a renderable entry; entries of unsupported
/// shape contribute nothing.
fn achievements_publications_section(data: &ResumeData) -> Option<String> {
    let items: Vec<String> = data
        .achievements
        .iter()
        .filter_map(format_achievement)
        .chain(data.publications.iter().filter_map(format_publication))
        .collect();
    if items.is_empty() {
        return None;
    }
    let mut s = String::from(ACHIEVEMENTS_HEADER);
    s.push_str(&item_list(items.into_iter(), 2));
    Some(s)
}

fn format_achievement(achievement: &Achievement) -> Option<String> {
    match achievement {
        Achievement::Text(text) => Some(escape_latex(text)),
        Achievement::Record(record) => {
            let mut text = record.title.as_deref().map(escape_latex).unwrap_or_default();
            if let Some(issuer) = non_blank(&record.issuer) {
                text.push_str(&format!(" at {}", escape_latex(issuer)));
            }
            if let Some(date) = non_blank(&record.date) {
                text.push_str(&format!(" ({})", escape_latex(date)));
            }
            Some(text)
        }
        Achievement::Unsupported(_) => None,
    }
}

fn format_publication(publication: &Publication) -> Option<String> {
    match publication {
        Publication::Text(text) => Some(escape_latex(text)),
        Publication::Record(record) => {
            let mut text = String::new();
            if let Some(title) = &record.title {
                let quoted = format!("``{}''", escape_latex(title));
                match non_blank(&record.link) {
                    Some(url) => text.push_str(&link(url, &quoted)),
                    None => text.push_str(&quoted),
                }
            }
            if let Some(journal) = non_blank(&record.journal) {
                text.push_str(&format!(" in {}", escape_latex(journal)));
            }
            if let Some(date) = non_blank(&record.date) {
                text.push_str(&format!(" ({})", escape_latex(date)));
            }
            Some(text)
        }
        Publication::Unsupported(_) => None,
    }
}

fn certifications_section(data: &ResumeData) -> Option<String> {
    let items: Vec<String> = data
        .certifications
        .iter()
        .filter_map(format_certification)
        .collect();
    if items.is_empty() {
        return None;
    }
    let mut s = String::from(CERTIFICATIONS_HEADER);
    s.push_str(&item_list(items.into_iter(), 2));
    Some(s)
}

/// The label is escaped the same way for both variants; only a link wraps it.
fn format_certification(certification: &Certification) -> Option<String> {
    match certification {
        Certification::Plain(name) => Some(escape_latex(name)),
        Certification::Linked(record) if record.name.trim().is_empty() => None,
        Certification::Linked(record) => {
            let label = escape_latex(&record.name);
            Some(match non_blank(&record.link) {
                Some(url) => link(url, &label),
                None => label,
            })
        }
        Certification::Unsupported(_) => None,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

/// `\resumeItemListStart ... \resumeItemListEnd`, or nothing for an empty list
/// (an empty itemize is a LaTeX error).
fn item_list(items: impl Iterator<Item = String>, indent: usize) -> String {
    let pad = " ".repeat(indent);
    let body: String = items
        .map(|item| format!("{pad}  \\resumeItem{{{item}}}\n"))
        .collect();
    if body.is_empty() {
        return String::new();
    }
    format!("{pad}\\resumeItemListStart\n{body}{pad}\\resumeItemListEnd\n")
}

/// `label` must already be escaped.
fn link(url: &str, label: &str) -> String {
    format!("\\href{{{}}}{{{}}}", escape_url(url), label)
}

fn underline(text: &str) -> String {
    format!("\\underline{{{}}}", escape_latex(text))
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

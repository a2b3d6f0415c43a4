//! LaTeX template constants.
//!
//! Placeholders are `{name}` tokens substituted with `str::replace` by
//! `render::template`. Every style-dependent value lives in the preamble; the
//! body only refers to the macros defined here.

// ────────────────────────────────────────────────────────────────────────────
// Preamble
// ────────────────────────────────────────────────────────────────────────────

pub const PREAMBLE_TEMPLATE: &str = r"%-------------------------
% Resume in LaTeX, generated by resume-builder
%-------------------------

\documentclass[letterpaper,{font_size_pt}pt]{article}

\usepackage[top={margin_top},bottom={margin_bottom},left={margin_left},right={margin_right}]{geometry}
\usepackage{latexsym}
\usepackage{titlesec}
\usepackage{marvosym}
\usepackage[usenames,dvipsnames]{color}
\usepackage{enumitem}
\usepackage[hidelinks]{hyperref}
\usepackage{fancyhdr}
\usepackage[english]{babel}
\usepackage{tabularx}
\usepackage{setspace}
{font_packages}\input{glyphtounicode}

\pagestyle{fancy}
\fancyhf{}
\fancyfoot{}
\renewcommand{\headrulewidth}{0pt}
\renewcommand{\footrulewidth}{0pt}

\urlstyle{same}
\raggedbottom
\raggedright
\setlength{\tabcolsep}{0in}
\setstretch{{line_stretch}}

%----------SPACING----------
\newcommand{\sectionbefore}{\vspace{{section_before}}}
\newcommand{\sectionafter}{\vspace{{section_after}}}
\newcommand{\itemgap}{\vspace{{item_gap}}}
\newcommand{\subheadinggap}{\vspace{{subheading_gap}}}
\newcommand{\listgap}{\vspace{{list_gap}}}

\titleformat{\section}{
  \sectionbefore\scshape\raggedright\large
}{}{0em}{}[\color{black}\titlerule \sectionafter]

\pdfgentounicode=1

%----------CUSTOM COMMANDS----------
\newcommand{\resumeItem}[1]{
  \item\small{
    {#1 \itemgap}
  }
}

\newcommand{\resumeSubheading}[4]{
  \vspace{-2pt}\item
    \begin{tabular*}{0.97\textwidth}[t]{l@{\extracolsep{\fill}}r}
      \textbf{#1} & #2 \\
      \textit{\small#3} & \textit{\small #4} \\
    \end{tabular*}\subheadinggap
}

\newcommand{\resumeProjectHeading}[2]{
    \item
    \begin{tabular*}{0.97\textwidth}{l@{\extracolsep{\fill}}r}
      \small#1 & #2 \\
    \end{tabular*}\subheadinggap
}

\renewcommand\labelitemii{$\vcenter{\hbox{\tiny$\bullet$}}$}

\newcommand{\resumeSubHeadingListStart}{\begin{itemize}[leftmargin=0.15in, label={}]}
\newcommand{\resumeSubHeadingListEnd}{\end{itemize}}
\newcommand{\resumeItemListStart}{\begin{itemize}}
\newcommand{\resumeItemListEnd}{\end{itemize}\listgap}
";

// ────────────────────────────────────────────────────────────────────────────
// Body fragments
// ────────────────────────────────────────────────────────────────────────────

pub const BEGIN_DOCUMENT: &str = "\\begin{document}\n";
pub const END_DOCUMENT: &str = "\\end{document}\n";

pub const CONTACT_SEPARATOR: &str = " $|$ ";

pub const EDUCATION_HEADER: &str = "%-----------EDUCATION-----------\n\\section{Education}\n";
pub const EXPERIENCE_HEADER: &str = "%-----------EXPERIENCE-----------\n\\section{Experience}\n";
pub const PROJECTS_HEADER: &str = "%-----------PROJECTS-----------\n\\section{Projects}\n";
pub const SKILLS_HEADER: &str = "%-----------TECHNICAL SKILLS-----------\n\\section{Technical Skills}\n";
pub const ACHIEVEMENTS_HEADER: &str =
    "%-----------ACHIEVEMENTS & PUBLICATIONS-----------\n\\section{Achievements \\& Publications}\n";
pub const CERTIFICATIONS_HEADER: &str =
    "%-----------CERTIFICATIONS-----------\n\\section{Certifications}\n";

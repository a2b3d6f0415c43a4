//! Sample resume written by `resume-builder init`.

pub const SAMPLE_RESUME: &str = r#"# Sample resume for resume-builder.
# Build it with: resume-builder build --input resume.yml --output resume.pdf --one-page

name: Jane Doe

contact:
  phone: "+1 (555) 123-4567"
  email: jane.doe@example.com
  linkedin: janedoe
  github: janedoe

education:
  - school: State University
    location: Springfield, IL
    degree: Bachelor of Science in Computer Science
    dates: Aug 2018 -- May 2022

experience:
  - company: Acme Corp
    role: Software Engineer
    location: Remote
    dates: Jun 2022 -- Present
    description:
      - Built a billing service in Rust handling 2M events/day with p99 latency under 40ms
      - Cut CI time by 35% by caching build artifacts & splitting the test suite
      - Mentored 3 interns on code review and testing practices

projects:
  - name: Resume Builder
    technologies: Rust, LaTeX
    date: 2024
    link: https://github.com/janedoe/resume-builder
    description:
      - Generates a typeset resume from YAML and fits it onto one page automatically

skills:
  - category: Languages
    list: [Rust, Python, TypeScript, SQL]
  - category: Tools
    list: [Git, Docker, PostgreSQL, Linux]

achievements:
  - First place, Springfield Hackathon 2021

publications:
  - title: Practical Incremental Builds
    journal: Journal of Build Systems
    date: 2023

certifications:
  - AWS Certified Developer -- Associate
  - name: Certified Kubernetes Application Developer
    link: https://www.cncf.io/certification/ckad/
"#;

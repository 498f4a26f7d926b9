//! Roadmap Generator: renders a role's career path as a single progression line.

pub const STAGE_SEPARATOR: &str = " → ";

/// Joins the stages, earliest first. An empty path renders as "".
pub fn render_roadmap<S: AsRef<str>>(career_path: &[S]) -> String {
    career_path
        .iter()
        .map(|stage| stage.as_ref())
        .collect::<Vec<&str>>()
        .join(STAGE_SEPARATOR)
}

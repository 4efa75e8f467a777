use std::path::PathBuf;

use combat::{Commander, Session, SessionResult, SessionTemplate};

#[allow(unused)]
pub fn run_session(
    name: String,
    template: SessionTemplate,
    commander: &mut impl Commander,
) -> Result<SessionResult, Box<dyn std::error::Error>> {
    let name = name.replace('"', "");
    let session: Session = template.try_into()?;
    let result = tracing::info_span!("session", %name).in_scope(|| session.run(commander));
    Ok(result)
}

#[allow(unused)]
pub fn read_session(path: &PathBuf) -> Result<SessionTemplate, Box<dyn std::error::Error>> {
    let session_str = std::fs::read_to_string(path)?;
    let mut template = SessionTemplate::from_toml_str(&session_str)?;
    template.source = Some(path.display().to_string());
    Ok(template)
}

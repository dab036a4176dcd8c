use crate::Mode;
use crate::Round;
use crate::Session;
use crate::Summary;
use anyhow::Context;
use std::path::Path;

/// Encoding of the persisted statistics.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Format {
    /// The human-readable report.
    #[default]
    Text,
    /// The same content as a JSON document.
    Json,
}

/// Serialized shape of a session: the rounds plus their summary.
#[derive(Debug, serde::Serialize)]
struct Snapshot<'a> {
    mode: Mode,
    rounds: Vec<&'a Round>,
    summary: Summary,
}

impl<'a> From<&'a Session> for Snapshot<'a> {
    fn from(session: &'a Session) -> Self {
        Self {
            mode: session.mode(),
            rounds: session.rounds().collect(),
            summary: session.summary(),
        }
    }
}

impl Format {
    pub fn render(&self, session: &Session) -> anyhow::Result<String> {
        match self {
            Self::Text => Ok(session.report()),
            Self::Json => serde_json::to_string_pretty(&Snapshot::from(session))
                .context("serialize session"),
        }
    }
}

/// Writes the session's statistics to `path`, replacing any previous file.
pub fn save(session: &Session, path: &Path, format: Format) -> anyhow::Result<()> {
    let contents = format.render(session)?;
    std::fs::write(path, contents)
        .with_context(|| format!("write statistics to {}", path.display()))?;
    log::info!("saved {} rounds to {}", session.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Move;

    fn session() -> Session {
        let mut session = Session::new(Mode::Single);
        session.record(Move::Rock, Move::Scissors);
        session.record(Move::Paper, Move::Paper);
        session.record(Move::Scissors, Move::Rock);
        session
    }

    #[test]
    fn text_file_is_the_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(crate::STATS_FILE);
        let session = session();
        save(&session, &path, Format::Text).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), session.report());
    }

    #[test]
    fn save_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(crate::STATS_FILE);
        std::fs::write(&path, "stale contents that are longer than nothing").unwrap();
        let empty = Session::default();
        save(&empty, &path, Format::Text).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), empty.report());
    }

    #[test]
    fn json_carries_summary_and_rounds() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.json");
        save(&session(), &path, Format::Json).unwrap();
        let json = std::fs::read_to_string(&path).unwrap();
        let value = serde_json::from_str::<serde_json::Value>(&json).unwrap();
        let summary = serde_json::from_value::<Summary>(value["summary"].clone()).unwrap();
        assert_eq!(summary, session().summary());
        assert_eq!(value["mode"], "single");
        assert_eq!(value["rounds"].as_array().map(Vec::len), Some(3));
        assert_eq!(value["rounds"][0]["index"], 1);
        assert_eq!(value["rounds"][2]["outcome"], "SecondWins");
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join(crate::STATS_FILE);
        let err = save(&session(), &path, Format::Text).unwrap_err();
        assert!(err.to_string().contains("write statistics"));
    }
}

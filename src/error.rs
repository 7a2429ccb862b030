use std::path::PathBuf;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("layout has no sides")]
    EmptyLayout,

    #[error("side {index} has no letters")]
    EmptySide { index: usize },

    #[error("invalid letter {letter:?}, sides may only hold lowercase ASCII letters")]
    InvalidLetter { letter: char },

    #[error("letter {letter:?} appears more than once in the layout")]
    RepeatedLetter { letter: char },

    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse game data in {}", path.display())]
    GameData {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum RoutingError {
    #[error("invalid route pattern: {0}")]
    InvalidPattern(String),

    #[error("duplicate route: {method} {pattern}")]
    DuplicateRoute { method: String, pattern: String },
}

#[derive(Debug, thiserror::Error)]
pub enum GeometryError {
    #[error("invalid placement spec: {0}")]
    InvalidSpec(String),
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("settings io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings parse error: {0}")]
    Parse(String),
}

#[derive(Debug, thiserror::Error)]
pub enum SashError {
    #[error(transparent)]
    Routing(#[from] RoutingError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("window error: {0}")]
    Window(String),

    #[error("{0}")]
    Other(String),
}

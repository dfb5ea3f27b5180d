#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("route yields no coordinates")]
    EmptyRoute,
}

#[derive(Debug, thiserror::Error)]
pub enum TrackError {
    #[error(transparent)]
    Index(#[from] IndexError),
    #[error("route is already fully traversed")]
    RouteCompleted,
}

use crate::ViewId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ViewError {
    #[error("view {0:?} has been removed")]
    Stale(ViewId),
    #[error("view {id:?} is a {found}, not a {expected}")]
    KindMismatch {
        id: ViewId,
        expected: &'static str,
        found: &'static str,
    },
}

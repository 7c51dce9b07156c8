//=========================================================================
// Errors
//=========================================================================
//
// Construction-time errors. Runtime operations of the controller are
// total; the only thing that can go wrong is wiring it up incompletely.
//
//=========================================================================

//=== BuildError ==========================================================

/// Errors returned by [`crate::ControllerBuilder::build`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildError {
    /// A required collaborator was never supplied to the builder.
    MissingCollaborator(&'static str),
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingCollaborator(name) => {
                write!(f, "Missing collaborator: {}", name)
            }
        }
    }
}

impl std::error::Error for BuildError {}

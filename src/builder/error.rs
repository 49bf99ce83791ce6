//! Build errors for machine definitions.

use thiserror::Error;

/// Problems found while validating a machine definition.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Initial state '{0}' has no node. Add it with .node(...)")]
    UnknownInitialState(String),

    #[error("Node '{0}' is defined more than once")]
    DuplicateNode(String),

    #[error("{} problems in machine definition: {}", .0.len(), join(.0))]
    Multiple(Vec<BuildError>),
}

impl BuildError {
    /// Collapse accumulated problems into a single error.
    pub(crate) fn from_problems(mut problems: Vec<BuildError>) -> Self {
        if problems.len() == 1 {
            problems.remove(0)
        } else {
            BuildError::Multiple(problems)
        }
    }

    /// Individual problems, flattening `Multiple`.
    pub fn problems(&self) -> Vec<&BuildError> {
        match self {
            BuildError::Multiple(problems) => problems.iter().collect(),
            other => vec![other],
        }
    }
}

fn join(problems: &[BuildError]) -> String {
    problems
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_problem_is_not_wrapped() {
        let error = BuildError::from_problems(vec![BuildError::MissingInitialState]);
        assert_eq!(error, BuildError::MissingInitialState);
        assert_eq!(error.problems().len(), 1);
    }

    #[test]
    fn multiple_problems_are_listed() {
        let error = BuildError::from_problems(vec![
            BuildError::MissingInitialState,
            BuildError::DuplicateNode("S0".to_string()),
        ]);

        assert_eq!(error.problems().len(), 2);
        assert_eq!(
            error.to_string(),
            "2 problems in machine definition: Initial state not specified. \
             Call .initial(state) before .build(); Node 'S0' is defined more than once"
        );
    }
}

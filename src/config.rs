use serde::Serialize;

pub const BUILD_ENV: &str = "BUILD_ENV";
pub const BUILD_NUMBER: &str = "BUILD_BUILDNUMBER";
pub const SOURCE_BRANCH: &str = "BUILD_SOURCEBRANCH";
pub const AGENT_NAME: &str = "AGENT_NAME";

const DEFAULT_ENVIRONMENT: &str = "local";
const DEFAULT_BUILD_NUMBER: &str = "local-build";
const DEFAULT_SOURCE_BRANCH: &str = "unknown";

/// Build metadata resolved from the environment at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildEnv {
    pub environment: String,
    pub build_number: String,
    pub source_branch: String,
    /// `None` when `AGENT_NAME` is unset or empty.
    pub agent_name: Option<String>,
    /// Variables that were missing and fell back to their default.
    pub defaulted: Vec<&'static str>,
}

impl BuildEnv {
    /// Resolve from the process environment. Non-UTF-8 values are decoded
    /// lossily rather than treated as unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var_os(key).map(|v| v.to_string_lossy().into_owned()))
    }

    /// Resolve using `lookup` in place of the process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut defaulted = Vec::new();
        let mut resolve = |key: &'static str, fallback: &str| match non_empty(lookup(key)) {
            Some(v) => v,
            None => {
                defaulted.push(key);
                fallback.to_string()
            }
        };

        let environment = resolve(BUILD_ENV, DEFAULT_ENVIRONMENT);
        let build_number = resolve(BUILD_NUMBER, DEFAULT_BUILD_NUMBER);
        let source_branch = resolve(SOURCE_BRANCH, DEFAULT_SOURCE_BRANCH);

        BuildEnv {
            environment,
            build_number,
            source_branch,
            agent_name: non_empty(lookup(AGENT_NAME)),
            defaulted,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

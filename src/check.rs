use crate::config::BuildEnv;
use crate::types::{CheckKind, CheckResult, CheckStatus};

pub fn add(a: i32, b: i32) -> i32 {
    a + b
}

pub fn greet(name: &str) -> String {
    format!("Hello, {name}!")
}

/// Run every check against `env`, in display order.
pub fn run_checks(env: &BuildEnv) -> Vec<CheckResult> {
    vec![math_check(), string_check(), agent_check(env)]
}

fn math_check() -> CheckResult {
    mandatory("math", "Math test", add(2, 2) == 4)
}

fn string_check() -> CheckResult {
    mandatory("string", "String test", greet("Pipeline").contains("Pipeline"))
}

fn agent_check(env: &BuildEnv) -> CheckResult {
    match &env.agent_name {
        Some(agent) => CheckResult {
            name: "agent".to_string(),
            kind: CheckKind::Informational,
            status: CheckStatus::Passed,
            message: format!("Running on agent: {agent}"),
        },
        None => CheckResult {
            name: "agent".to_string(),
            kind: CheckKind::Informational,
            status: CheckStatus::Warning,
            message: "Agent name not set (expected in pipeline context)".to_string(),
        },
    }
}

fn mandatory(name: &str, label: &str, ok: bool) -> CheckResult {
    let (status, outcome) = if ok {
        (CheckStatus::Passed, "passed")
    } else {
        (CheckStatus::Failed, "failed")
    };
    CheckResult {
        name: name.to_string(),
        kind: CheckKind::Mandatory,
        status,
        message: format!("{label} {outcome}"),
    }
}

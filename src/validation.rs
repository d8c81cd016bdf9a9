//! Project name validation following the npm package name rules

use crate::error::{Error, Result};

const MAX_NAME_LENGTH: usize = 214;

const BLACKLISTED_NAMES: &[&str] = &["node_modules", "favicon.ico"];

const SPECIAL_CHARACTERS: &[char] = &['~', '\'', '!', '(', ')', '*'];

const CORE_MODULE_NAMES: &[&str] = &[
    "assert", "async_hooks", "buffer", "child_process", "cluster", "console",
    "constants", "crypto", "dgram", "diagnostics_channel", "dns", "domain", "events",
    "fs", "http", "http2", "https", "inspector", "module", "net", "os", "path",
    "perf_hooks", "process", "punycode", "querystring", "readline", "repl", "stream",
    "string_decoder", "sys", "timers", "tls", "trace_events", "tty", "url", "util",
    "v8", "vm", "wasi", "worker_threads", "zlib",
];

/// Returns every rule `name` violates; an empty list means the name is valid.
pub fn project_name_problems(name: &str) -> Vec<String> {
    let mut problems = Vec::new();

    if name.is_empty() {
        problems.push("name length must be greater than zero".to_string());
    }
    if name.starts_with('.') {
        problems.push("name cannot start with a period".to_string());
    }
    if name.starts_with('_') {
        problems.push("name cannot start with an underscore".to_string());
    }
    if name.trim() != name {
        problems.push("name cannot contain leading or trailing spaces".to_string());
    }

    let lowercase = name.to_lowercase();
    if BLACKLISTED_NAMES.contains(&lowercase.as_str()) {
        problems.push(format!("{lowercase} is a blacklisted name"));
    }
    if CORE_MODULE_NAMES.contains(&lowercase.as_str()) {
        problems.push(format!("{lowercase} is a core module name"));
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        problems.push(format!(
            "name can no longer contain more than {MAX_NAME_LENGTH} characters"
        ));
    }
    if name != lowercase {
        problems.push("name can no longer contain capital letters".to_string());
    }
    if name.rsplit('/').next().is_some_and(|last| last.contains(SPECIAL_CHARACTERS)) {
        problems.push(
            "name can no longer contain special characters (\"~'!()*\")".to_string(),
        );
    }
    if !is_url_friendly_name(name) {
        problems.push("name can only contain URL-friendly characters".to_string());
    }

    problems
}

/// Fails with `Error::InvalidName` listing every violated rule.
pub fn validate_project_name(name: &str) -> Result<()> {
    let problems = project_name_problems(name);
    if problems.is_empty() {
        Ok(())
    } else {
        Err(Error::InvalidName { name: name.to_string(), problems })
    }
}

/// Characters left untouched by URI component encoding.
fn is_url_safe(part: &str) -> bool {
    part.chars().all(|c| {
        c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '!' | '~' | '*' | '\'' | '(' | ')')
    })
}

/// Scoped names (`@scope/name`) are accepted when both parts are URL safe.
fn is_url_friendly_name(name: &str) -> bool {
    if let Some(scoped) = name.strip_prefix('@') {
        if let Some((scope, package)) = scoped.split_once('/') {
            return !scope.is_empty()
                && !package.is_empty()
                && is_url_safe(scope)
                && is_url_safe(package);
        }
    }
    is_url_safe(name)
}

//! Project name validation
//!
//! The project directory name doubles as the npm package name written into
//! the template's package.json, so it has to satisfy npm's rules for new
//! packages. Unlike npm, scoped names (`@scope/name`) are rejected: the
//! input is a single directory segment.

use std::sync::LazyLock;

use regex::Regex;

/// Longest name npm accepts
pub const MAX_NAME_LENGTH: usize = 214;

/// Characters `encodeURIComponent` leaves untouched
static URL_FRIENDLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9\-_.!~*'()]*$").expect("valid pattern"));

/// Names npm refuses outright
const RESERVED_NAMES: &[&str] = &["node_modules", "favicon.ico"];

/// Node.js core modules; a package with one of these names would be
/// shadowed by the builtin.
const CORE_MODULES: &[&str] = &[
    "assert",
    "async_hooks",
    "buffer",
    "child_process",
    "cluster",
    "console",
    "constants",
    "crypto",
    "dgram",
    "diagnostics_channel",
    "dns",
    "domain",
    "events",
    "fs",
    "http",
    "http2",
    "https",
    "inspector",
    "module",
    "net",
    "os",
    "path",
    "perf_hooks",
    "process",
    "punycode",
    "querystring",
    "readline",
    "repl",
    "stream",
    "string_decoder",
    "sys",
    "timers",
    "tls",
    "trace_events",
    "tty",
    "url",
    "util",
    "v8",
    "vm",
    "wasi",
    "worker_threads",
    "zlib",
];

/// Outcome of validating a project name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameValidation {
    Valid,
    Invalid { problems: Vec<String> },
}

impl NameValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Human-readable reasons, empty when valid
    pub fn problems(&self) -> &[String] {
        match self {
            Self::Valid => &[],
            Self::Invalid { problems } => problems,
        }
    }

    pub fn first_problem(&self) -> Option<&str> {
        self.problems().first().map(String::as_str)
    }
}

/// Check `name` against the package naming rules, collecting every problem
pub fn validate_project_name(name: &str) -> NameValidation {
    let mut problems = Vec::new();
    let lower = name.to_lowercase();

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
    if RESERVED_NAMES.contains(&lower.as_str()) {
        problems.push(format!("{} is not a valid package name", lower));
    }
    if CORE_MODULES.contains(&lower.as_str()) {
        problems.push(format!("{} is a core module name", name));
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        problems.push(format!(
            "name can no longer contain more than {} characters",
            MAX_NAME_LENGTH
        ));
    }
    if lower != name {
        problems.push("name can no longer contain capital letters".to_string());
    }
    if name.contains(['~', '\'', '!', '(', ')', '*']) {
        problems.push("name can no longer contain special characters (\"~'!()*\")".to_string());
    }
    if !URL_FRIENDLY.is_match(name) {
        problems.push("name can only contain URL-friendly characters".to_string());
    }

    if problems.is_empty() {
        NameValidation::Valid
    } else {
        NameValidation::Invalid { problems }
    }
}

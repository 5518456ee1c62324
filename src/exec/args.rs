// src/exec/args.rs

//! Turning a parameter string into an sfdx argument vector.

use std::sync::LazyLock;

use regex::Regex;

/// A space, optionally preceded by the backslash that escapes it.
static SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\\)? ").expect("separator regex is valid"));

/// Flags whose value names the org a command runs against.
const USERNAME_FLAGS: &[&str] = &["-u", "--targetusername", "-o", "--target-org"];

/// Split a parameter string into individual arguments.
///
/// Unescaped spaces separate arguments. `\ ` is an escaped space: the
/// backslash is dropped and the space stays inside the current argument.
/// Empty arguments (from leading, trailing or repeated spaces) are dropped.
pub fn split_params(params: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut last = 0;

    for caps in SEPARATOR.captures_iter(params) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        current.push_str(&params[last..whole.start()]);
        if caps.get(1).is_some() {
            current.push(' ');
        } else if !current.is_empty() {
            args.push(std::mem::take(&mut current));
        }
        last = whole.end();
    }

    current.push_str(&params[last..]);
    if !current.is_empty() {
        args.push(current);
    }

    args
}

/// Full argument vector for `sfdx`: subcommand, params, then `--json`.
pub fn build_args(subcommand: &str, params: &str) -> Vec<String> {
    let mut args = Vec::with_capacity(8);
    args.push(subcommand.to_string());
    args.extend(split_params(params));
    args.push("--json".to_string());
    args
}

/// Extract the target username from a parameter string, if one is given.
///
/// Recognises `-u <name>`, `--targetusername <name>`, `-o <name>`,
/// `--target-org <name>` and the `--flag=<name>` forms.
pub fn username_from_params(params: &str) -> Option<String> {
    let args = split_params(params);
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if USERNAME_FLAGS.contains(&arg.as_str()) {
            return iter.next().cloned();
        }
        if let Some((flag, value)) = arg.split_once('=') {
            if USERNAME_FLAGS.contains(&flag) && !value.is_empty() {
                return Some(value.to_string());
            }
        }
    }

    None
}

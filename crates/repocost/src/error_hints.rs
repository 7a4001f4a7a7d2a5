use anyhow::Error;

pub(crate) fn format(err: &Error) -> String {
    let mut out = format!("Error: {err:#}");
    let hints = suggestions(err);
    if !hints.is_empty() {
        out.push_str("\n\nHints:\n");
        for hint in hints {
            out.push_str("- ");
            out.push_str(&hint);
            out.push('\n');
        }
    }
    out
}

fn suggestions(err: &Error) -> Vec<String> {
    let chain: Vec<String> = err.chain().map(|e| e.to_string()).collect();
    let haystack = chain.join(" | ").to_ascii_lowercase();
    let mut out: Vec<String> = Vec::new();

    if haystack.contains("path not found") || haystack.contains("no such file or directory") {
        push_hint(&mut out, "Verify the input path exists and is readable.");
        push_hint(
            &mut out,
            "Use an absolute path to avoid working-directory confusion.",
        );
    }

    if haystack.contains("must be between") || haystack.contains("must be greater than") {
        push_hint(
            &mut out,
            "Run `repocost estimate --help` to see each parameter's valid range.",
        );
    }

    if haystack.contains("non-negative") {
        push_hint(&mut out, "Pass a line count of 0 or more to `--lines`.");
    }

    if haystack.contains("toml") && (haystack.contains("parse") || haystack.contains("invalid")) {
        push_hint(
            &mut out,
            "Check `repocost.toml` syntax and key names, or skip it with `--no-config`.",
        );
    }

    if haystack.contains("failed to write reports") || haystack.contains("failed to create") {
        push_hint(
            &mut out,
            "Make sure the directory of `--out` exists and is writable.",
        );
    }

    out
}

fn push_hint(out: &mut Vec<String>, hint: &str) {
    if !out.iter().any(|h| h == hint) {
        out.push(hint.to_string());
    }
}

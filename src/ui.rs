use console::style;

/// Print the version as the single line CI consumers parse from stdout.
pub fn print_version(version: &str) {
    println!("{}", version);
}

/// Print a fatal error, with its causes, to stderr.
pub fn display_error(error: &anyhow::Error) {
    eprintln!("{} {}", style("ERROR:").red().bold(), format_error(error));
}

/// `outer: cause: root cause` on one line
pub fn format_error(error: &anyhow::Error) -> String {
    format!("{:#}", error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_includes_context() {
        let error = anyhow::anyhow!("401 Unauthorized").context("fetching merge request labels");
        assert_eq!(
            format_error(&error),
            "fetching merge request labels: 401 Unauthorized"
        );
    }
}

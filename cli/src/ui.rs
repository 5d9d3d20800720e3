use changelog::{Defect, DefectKind};
use colored::Colorize;

/// Print a success message
pub fn success_message(message: &str) {
    println!("{} {}", "✅".green(), message.green());
}

/// Print an error message
pub fn error_message(message: &str) {
    eprintln!("{} {}", "error:".red().bold(), message);
}

/// Print a simple informational message on stderr
pub fn info_message(message: &str) {
    eprintln!("{} {}", "ℹ️ ".blue(), message.blue());
}

/// Print one entry per defect with a suggested correction
pub fn defect_report(defects: &[Defect]) {
    for defect in defects {
        eprintln!("  at line {}, {}", defect.line, defect.kind.description());
        eprintln!("    {}", correction(defect.kind, &defect.excerpt));
    }
}

/// Excerpt of a defective line and how it should read
pub fn correction(kind: DefectKind, excerpt: &str) -> String {
    match kind {
        DefectKind::VersionBrackets => format!(
            "{excerpt} -> {}",
            map_version_word(excerpt, |version| format!(
                "{}{version}{}",
                "[".green(),
                "]".green()
            ))
        ),
        DefectKind::VersionSemver => format!(
            "{} -> {}",
            map_version_word(excerpt, |version| version.red().to_string()),
            map_version_word(excerpt, |_| "[vX.X.X]".green().to_string())
        ),
        DefectKind::ReleaseHeader => excerpt.to_string(),
    }
}

/// Rewrites the second whitespace separated word of a release header
fn map_version_word<F>(excerpt: &str, f: F) -> String
where
    F: Fn(&str) -> String,
{
    excerpt
        .split_whitespace()
        .enumerate()
        .map(|(i, word)| if i == 1 { f(word) } else { word.to_string() })
        .collect::<Vec<_>>()
        .join(" ")
}

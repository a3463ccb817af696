/// Turn a free-form project name into an artifact id.
///
/// Lower-cases the input, replaces every character outside `[a-z0-9-]`
/// with `-`, collapses runs of `-` and strips them from both ends.
/// Idempotent: feeding the result back in returns it unchanged.
pub fn artifact_from_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for ch in name.to_lowercase().chars() {
        let ch = if ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-' {
            ch
        } else {
            '-'
        };
        if ch == '-' && out.ends_with('-') {
            continue;
        }
        out.push(ch);
    }
    out.trim_matches('-').to_string()
}

/// Default package for a project: `group` followed by the artifact with
/// every `-` removed.
///
/// The result is not re-validated; callers check it before accepting it.
pub fn package_name_from_group_and_artifact(group: &str, artifact: &str) -> String {
    let stripped: String = artifact.chars().filter(|ch| *ch != '-').collect();
    format!("{group}.{stripped}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn artifact_from_plain_name_is_unchanged() {
        assert_eq!(artifact_from_name("my-app"), "my-app");
    }

    #[test]
    fn artifact_from_punctuated_name() {
        assert_eq!(artifact_from_name("My Cool App!!"), "my-cool-app");
        assert_eq!(artifact_from_name("  Hello__World  "), "hello-world");
        assert_eq!(artifact_from_name("--a---b--"), "a-b");
    }

    #[test]
    fn artifact_from_name_without_usable_characters_is_empty() {
        assert_eq!(artifact_from_name("!!!"), "");
        assert_eq!(artifact_from_name(""), "");
    }

    #[test]
    fn artifact_from_non_ascii_letters() {
        assert_eq!(artifact_from_name("Café Über"), "caf-ber");
    }

    #[test]
    fn package_name_strips_artifact_dashes() {
        assert_eq!(
            package_name_from_group_and_artifact("com.example", "my-app"),
            "com.example.myapp"
        );
        assert_eq!(
            package_name_from_group_and_artifact("org.acme", "a-b-c"),
            "org.acme.abc"
        );
    }

    #[test]
    fn package_name_keeps_group_verbatim() {
        assert_eq!(
            package_name_from_group_and_artifact("com.my-group", "app"),
            "com.my-group.app"
        );
    }
}

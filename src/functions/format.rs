use poise::serenity_prelude::Permissions;

/// Renders a permission set as the bullet list shown by `/permissions`.
///
/// Administrators collapse to a single line. A non-empty `include` mask
/// restricts the output to the flags it names.
pub fn format_permissions(permissions: Permissions, include: Permissions) -> String {
    if permissions.administrator() {
        return "- Administrator".to_string();
    }

    let lines: Vec<String> = permissions
        .iter_names()
        .filter(|(_, flag)| include.is_empty() || include.contains(*flag))
        .map(|(name, _)| format!("- {}", title_case(name)))
        .collect();

    if lines.is_empty() {
        "_No permissions_".to_string()
    } else {
        lines.join("\n")
    }
}

/// `SEND_MESSAGES` -> `Send Messages`
fn title_case(name: &str) -> String {
    name.split('_')
        .map(|word| {
            let lower = word.to_ascii_lowercase();
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn administrator_collapses() {
        let perms = Permissions::ADMINISTRATOR | Permissions::SEND_MESSAGES;
        assert_eq!(format_permissions(perms, Permissions::empty()), "- Administrator");
    }

    #[test]
    fn empty_set_has_placeholder() {
        assert_eq!(
            format_permissions(Permissions::empty(), Permissions::empty()),
            "_No permissions_"
        );
    }

    #[test]
    fn names_are_title_cased() {
        let formatted = format_permissions(Permissions::SEND_MESSAGES, Permissions::empty());
        assert_eq!(formatted, "- Send Messages");
    }

    #[test]
    fn include_mask_filters() {
        let perms = Permissions::SEND_MESSAGES | Permissions::MANAGE_THREADS;
        let formatted = format_permissions(perms, Permissions::MANAGE_THREADS);
        assert_eq!(formatted, "- Manage Threads");
    }

    #[test]
    fn one_line_per_flag() {
        let perms = Permissions::SEND_MESSAGES | Permissions::MANAGE_THREADS;
        let formatted = format_permissions(perms, Permissions::empty());
        assert_eq!(formatted.lines().count(), 2);
        assert!(formatted.lines().all(|line| line.starts_with("- ")));
    }
}

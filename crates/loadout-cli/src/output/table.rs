use loadout_core::model::Profile;

/// Human-readable summary of a resolved profile.
pub fn format_summary(profile: &Profile) -> String {
    let mut lines = Vec::new();

    lines.push(format!("Profile: {}", profile.name));
    lines.push(format!(
        "Rules:   {} ({} flag{})",
        profile.rules_block,
        profile.rules.len(),
        plural(profile.rules.len(), "", "s")
    ));
    lines.push(String::new());

    lines.push("Macro weights:".to_string());
    for (group, weights) in profile.macro_weights.iter() {
        lines.push(format!("  {:<22} {}", group.key(), weights.len()));
    }
    lines.push(String::new());

    lines.push("Micro weights:".to_string());
    lines.push(format!("  {:<22} {}", "tag", profile.micro.tag.len()));
    lines.push(format!("  {:<22} {}", "id", profile.micro.id.len()));
    lines.push(String::new());

    lines.push("Scoped overrides:".to_string());
    for (pool, node) in &profile.micro.pools {
        let entries: usize = node.categories.values().map(|c| c.len()).sum();
        lines.push(format!(
            "  {:<22} {} categor{}, {} entr{}",
            pool.key(),
            node.categories.len(),
            plural(node.categories.len(), "y", "ies"),
            entries,
            plural(entries, "y", "ies")
        ));
        for (category, weights) in &node.categories {
            lines.push(format!(
                "    {:<20} tag {}, id {}",
                category,
                weights.tag.len(),
                weights.id.len()
            ));
        }
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn plural(n: usize, one: &'static str, many: &'static str) -> &'static str {
    if n == 1 {
        one
    } else {
        many
    }
}

use console::style;
use springboot_wizard::ProjectConfiguration;
use std::fmt::Write;

const RULE_WIDTH: usize = 50;

/// Grouped, human-readable rendering of a collected configuration
pub fn render_summary(config: &ProjectConfiguration) -> String {
    let identity = config.identity();
    let stack = config.stack();
    let rule = style("━".repeat(RULE_WIDTH)).cyan();
    let value = |text: &str| style(text.to_string()).green();

    let mut out = String::new();
    let _ = writeln!(out, "\n{}\n", style("✨ Configuration Summary:").bold().green());
    let _ = writeln!(out, "{rule}");

    let _ = writeln!(out, "\n{}", style("📦 Project Information:").bold());
    let _ = writeln!(out, "   Name: {}", value(&identity.project_name));
    let _ = writeln!(out, "   Group: {}", value(&identity.group));
    let _ = writeln!(out, "   Artifact: {}", value(&identity.artifact));
    let _ = writeln!(out, "   Description: {}", style(&identity.description).dim());
    let _ = writeln!(out, "   Package: {}", value(&identity.package_name));

    let _ = writeln!(out, "\n{}", style("⚙️  Technical Stack:").bold());
    let _ = writeln!(out, "   Java: {}", value(&stack.java_version.to_string()));
    let _ = writeln!(out, "   Spring Boot: {}", value(&stack.spring_boot_version));
    let _ = writeln!(out, "   Build Tool: {}", value(&stack.build_tool.to_string()));
    let _ = writeln!(out, "   Packaging: {}", value(&stack.packaging.to_string()));
    let _ = writeln!(
        out,
        "   Configuration: {}",
        value(&stack.configuration_type.to_string())
    );

    let _ = writeln!(out, "\n{}", style("🗄️  Database:").bold());
    let database = if config.database().is_none() {
        "None".to_string()
    } else {
        config.database().to_string()
    };
    let _ = writeln!(out, "   {}", value(&database));

    let _ = writeln!(out, "\n{}", style("📚 Dependencies:").bold());
    if config.dependencies().is_empty() {
        let _ = writeln!(out, "   {}", style("None selected").dim());
    } else {
        for id in config.dependencies().iter() {
            let _ = writeln!(out, "   {} {id}", style("•").green());
        }
    }

    let _ = writeln!(out, "\n{rule}");
    out
}

/// Lines printed after the summary
pub fn render_closing() -> String {
    format!(
        "{}\n{}\n",
        style("⚠️  Project generation is not implemented yet.").yellow(),
        style("Configuration collected successfully! ✓").green()
    )
}

use console::style;

const ART: [&str; 6] = [
    r"  .   ____          _            __ _ _",
    r" /\\ / ___'_ __ _ _(_)_ __  __ _ \ \ \ \",
    r"( ( )\___ | '_ | '_| | '_ \/ _` | \ \ \ \",
    r" \\/  ___)| |_)| | | | | || (_| |  ) ) ) )",
    r"  '  |____| .__|_| |_|_| |_\__, | / / / /",
    r" =========|_|==============|___/=/_/_/_/",
];

/// Spring-style banner with the tool version
pub fn render_banner() -> String {
    let mut out = String::from("\n");
    for line in ART {
        out.push_str(&style(line).green().to_string());
        out.push('\n');
    }
    out.push('\n');
    out.push_str(&format!(
        "{}               {}\n",
        style(" :: SpringBoot CLI ::").bold().cyan(),
        style(format!("(v{})", env!("CARGO_PKG_VERSION"))).dim()
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_carries_name_and_version() {
        console::set_colors_enabled(false);
        let banner = render_banner();
        assert!(banner.contains(":: SpringBoot CLI ::"));
        assert!(banner.contains(concat!("(v", env!("CARGO_PKG_VERSION"), ")")));
        assert!(ART.iter().all(|line| banner.contains(line)));
    }
}

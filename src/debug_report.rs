use vaultfile::schemas::feature::Feature;
use vaultfile::tables::COLOURS;
use vaultfile::{LoadDetails, LoadError, LoadResultVerbose};

mod ansi {
    pub const DIM: &str = "2";
    pub const BOLD: &str = "1";
    pub const RED: &str = "31";
    pub const GREEN: &str = "32";
    pub const YELLOW: &str = "33";
    pub const CYAN: &str = "36";
    pub const GRAY: &str = "90";

    /// Wraps text in SGR escapes when enabled, passes it through otherwise.
    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, sgr: &str) -> String {
            if self.enabled { format!("\x1b[{}m{}\x1b[0m", sgr, s.as_ref()) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            self.paint(s, BOLD)
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            self.paint(s, DIM)
        }
    }
}

pub fn print_load(source: &str, out: &LoadResultVerbose<Feature>, color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Loading: {}", source), ansi::CYAN)));
    println!(
        "  {} {}  {} {}",
        palette.dim("schema:"),
        palette.paint(&out.details.schema, ansi::CYAN),
        palette.dim("│ codec:"),
        palette.paint(&out.details.codec, ansi::CYAN)
    );

    println!("\n{}", palette.paint("━━━ Records ━━━", ansi::GRAY));
    if out.records.is_empty() {
        println!("{}", palette.dim("  No records produced"));
    } else {
        print_records(&out.records, &palette);
    }

    if !out.errors.is_empty() {
        println!("\n{}", palette.paint("━━━ Errors ━━━", ansi::GRAY));
        print_errors(&out.errors, &palette);
    }

    println!("\n{}", palette.paint("━━━ Directives ━━━", ansi::GRAY));
    print_directives(&out.details, &palette);

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!("  Total: {}", palette.paint(format!("{:?}", out.elapsed), ansi::GREEN));
    println!();
}

fn print_records(records: &[Feature], palette: &ansi::Palette) {
    for (idx, feat) in records.iter().enumerate() {
        let glyph = if feat.glyph == '\0' { ' ' } else { feat.glyph };
        println!(
            "  {} {} {} {}",
            palette.paint(format!("[{}]", idx), ansi::GRAY),
            palette.bold(palette.paint(glyph.to_string(), ansi::YELLOW)),
            palette.bold(palette.paint(&feat.name, ansi::GREEN)),
            palette.dim(format!("│ {} │ priority {}", colour_label(feat.colour), feat.priority)),
        );

        let flags = feat.flag_names();
        if !flags.is_empty() {
            println!("      {} {}", palette.dim("flags:"), palette.paint(flags.join(" | "), ansi::CYAN));
        }
        if let Some(mimic) = &feat.mimic {
            println!("      {} {}", palette.dim("mimic:"), palette.paint(mimic, ansi::CYAN));
        }
        if let Some(resist) = feat.resist_flag_name() {
            println!("      {} {}", palette.dim("resist:"), palette.paint(resist, ansi::CYAN));
        }
        if let Some(desc) = &feat.desc {
            let preview: String = desc.chars().take(72).collect();
            println!("      {}", palette.dim(preview));
        }
    }
}

/// `"Light Green (G)"`, or the raw code for colours outside the table.
fn colour_label(code: u8) -> String {
    match (COLOURS.name_of(code), COLOURS.letter_of(code)) {
        (Some(name), Some(letter)) => format!("{name} ({letter})"),
        _ => format!("colour {code}"),
    }
}

fn print_errors(errors: &[LoadError], palette: &ansi::Palette) {
    for err in errors {
        println!(
            "  {} {} {}",
            palette.paint(format!("line {}:", err.line_number), ansi::YELLOW),
            palette.paint(err.kind.to_string(), ansi::RED),
            palette.dim(format!("│ {}", err.line)),
        );
    }
}

fn print_directives(details: &LoadDetails, palette: &ansi::Palette) {
    let metrics = &details.metrics;
    println!(
        "  lines {}  │  directives {}  │  skipped {}  │  failed {}  │  records {}",
        palette.paint(metrics.lines.to_string(), ansi::CYAN),
        palette.paint(metrics.directives.to_string(), ansi::CYAN),
        palette.dim(metrics.skipped.to_string()),
        if metrics.failed > 0 {
            palette.paint(metrics.failed.to_string(), ansi::RED)
        } else {
            palette.dim(metrics.failed.to_string())
        },
        palette.paint(metrics.records.to_string(), ansi::GREEN),
    );

    for row in &details.keywords {
        println!("    {} {}", palette.paint(format!("{:<20}", row.keyword), ansi::CYAN), palette.dim(row.count.to_string()));
    }
}

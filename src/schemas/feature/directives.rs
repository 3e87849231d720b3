use super::flags::{RACE_FLAGS, TERRAIN_FLAGS, TerrainFlags};
use super::record::Feature;
use crate::{ArgSpec, Args, DirectiveSpec, ErrorKind};

/// The terrain directives, in the order they usually appear in a file.
pub(crate) fn directives() -> Vec<DirectiveSpec<Feature>> {
    vec![
        directive! { keyword: "name", args: [ArgSpec::text("name")], header: parse_name },
        directive! {
            keyword: "graphics",
            args: [ArgSpec::glyph("glyph"), ArgSpec::colour("colour")],
            field: parse_graphics,
        },
        directive! { keyword: "priority", args: [ArgSpec::int("priority")], field: parse_priority },
        directive! { keyword: "mimic", args: [ArgSpec::text("feat")], field: parse_mimic },
        directive! {
            keyword: "flags",
            args: [ArgSpec::flags("flags", &TERRAIN_FLAGS).optional()],
            field: parse_flags,
        },
        directive! {
            keyword: "info",
            args: [ArgSpec::int("shopnum"), ArgSpec::int("dig")],
            field: parse_info,
        },
        directive! { keyword: "desc", args: [ArgSpec::text("text")], field: parse_desc },
        directive! { keyword: "walk-msg", args: [ArgSpec::text("text")], field: parse_walk_msg },
        directive! { keyword: "run-msg", args: [ArgSpec::text("text")], field: parse_run_msg },
        directive! { keyword: "hurt-msg", args: [ArgSpec::text("text")], field: parse_hurt_msg },
        directive! { keyword: "die-msg", args: [ArgSpec::text("text")], field: parse_die_msg },
        directive! { keyword: "confused-msg", args: [ArgSpec::text("text")], field: parse_confused_msg },
        directive! { keyword: "look-prefix", args: [ArgSpec::text("text")], field: parse_look_prefix },
        directive! {
            keyword: "look-in-preposition",
            args: [ArgSpec::text("text")],
            field: parse_look_in_preposition,
        },
        directive! {
            keyword: "resist-flag",
            args: [ArgSpec::symbol("flag", &RACE_FLAGS)],
            field: parse_resist_flag,
        },
    ]
}

fn parse_name(args: &Args) -> Result<Feature, ErrorKind> {
    Ok(Feature::named(args.text("name")?))
}

fn parse_graphics(feat: &mut Feature, args: &Args) -> Result<(), ErrorKind> {
    // An empty glyph field only updates the colour.
    if let Some(glyph) = args.glyph("glyph")? {
        feat.glyph = glyph;
    }
    feat.colour = args.colour("colour")?;
    Ok(())
}

fn parse_priority(feat: &mut Feature, args: &Args) -> Result<(), ErrorKind> {
    feat.priority = args.int("priority")?;
    Ok(())
}

fn parse_flags(feat: &mut Feature, args: &Args) -> Result<(), ErrorKind> {
    if !args.has("flags") {
        return Ok(());
    }
    feat.flags |= TerrainFlags::from_bits_retain(args.flags("flags")?);
    Ok(())
}

fn parse_info(feat: &mut Feature, args: &Args) -> Result<(), ErrorKind> {
    let shopnum = args.int("shopnum")?;
    let dig = args.int("dig")?;
    feat.shopnum = shopnum;
    feat.dig = dig;
    Ok(())
}

fn parse_resist_flag(feat: &mut Feature, args: &Args) -> Result<(), ErrorKind> {
    feat.resist_flag = Some(args.symbol("flag")?);
    Ok(())
}

text_handler!(parse_mimic, Feature, mimic, "feat");
text_handler!(parse_desc, Feature, desc, "text");
text_handler!(parse_walk_msg, Feature, walk_msg, "text");
text_handler!(parse_run_msg, Feature, run_msg, "text");
text_handler!(parse_hurt_msg, Feature, hurt_msg, "text");
text_handler!(parse_die_msg, Feature, die_msg, "text");
text_handler!(parse_confused_msg, Feature, confused_msg, "text");
text_handler!(parse_look_prefix, Feature, look_prefix, "text");
text_handler!(parse_look_in_preposition, Feature, look_in_preposition, "text");

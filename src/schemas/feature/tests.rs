use crate::schemas::feature::{Feature, RACE_FLAGS, TerrainFlags, schema};
use crate::tables::{COLOUR_BLUE, COLOUR_L_GREEN, COLOUR_L_PURPLE, COLOUR_RED, COLOUR_WHITE};
use crate::{EncodingCodec, ErrorKind, Parser};
use proptest::prelude::*;

fn parser_with_feature() -> Parser<'static, Feature> {
    let mut parser = Parser::new(schema());
    parser.process("name:Test Feature").unwrap();
    parser
}

fn current<'a>(parser: &'a Parser<'_, Feature>) -> &'a Feature {
    parser.current_record().expect("a feature is under construction")
}

#[test]
fn missing_header_record() {
    let mut parser = Parser::new(schema());
    assert!(parser.current_record().is_none());
    for line in ["graphics: :w", "priority:2", "mimic:granite wall", "flags:LOS | PASSABLE", "info:8:0"] {
        assert_eq!(parser.process(line), Err(ErrorKind::MissingRecordHeader), "{line}");
    }
}

#[test]
fn name_starts_an_empty_record() {
    let parser = parser_with_feature();
    let f = current(&parser);

    assert_eq!(f.name, "Test Feature");
    assert_eq!(f.desc, None);
    assert_eq!(f.mimic, None);
    assert_eq!((f.priority, f.shopnum, f.dig), (0, 0, 0));
    assert!(f.flags.is_empty());
    assert_eq!(f.colour, 0);
    assert_eq!(f.glyph, '\0');
    assert_eq!(f.walk_msg, None);
    assert_eq!(f.run_msg, None);
    assert_eq!(f.hurt_msg, None);
    assert_eq!(f.die_msg, None);
    assert_eq!(f.confused_msg, None);
    assert_eq!(f.look_prefix, None);
    assert_eq!(f.look_in_preposition, None);
    assert_eq!(f.resist_flag, None);
    assert_eq!(*f, Feature::named("Test Feature"));
}

#[test]
fn graphics() {
    let mut parser = parser_with_feature();

    parser.process("graphics:::Light Green").unwrap();
    assert_eq!((current(&parser).glyph, current(&parser).colour), (':', COLOUR_L_GREEN));

    // Single letter colour code.
    parser.process("graphics:^:b").unwrap();
    assert_eq!((current(&parser).glyph, current(&parser).colour), ('^', COLOUR_BLUE));

    // Full colour names ignore case.
    parser.process("graphics:#:light purple").unwrap();
    assert_eq!((current(&parser).glyph, current(&parser).colour), ('#', COLOUR_L_PURPLE));

    // Outside ASCII: the Yen sign, U+00A5 (C2 A5 in UTF-8).
    parser.process("graphics:¥:red").unwrap();
    assert_eq!((current(&parser).glyph, current(&parser).colour), ('¥', COLOUR_RED));
}

#[test]
fn graphics_with_empty_glyph_only_changes_colour() {
    let mut parser = parser_with_feature();
    parser.process("graphics:%:r").unwrap();
    parser.process("graphics::w").unwrap();
    assert_eq!((current(&parser).glyph, current(&parser).colour), ('%', COLOUR_WHITE));
}

#[test]
fn graphics_rejects_bad_values() {
    let mut parser = parser_with_feature();
    parser.process("graphics:+:u").unwrap();
    let before = current(&parser).clone();

    assert_eq!(parser.process("graphics:##:r"), Err(ErrorKind::DecodingFailure));
    assert_eq!(parser.process("graphics:#:Tartan"), Err(ErrorKind::InvalidColour));
    assert_eq!(parser.process("graphics:#"), Err(ErrorKind::TooFewArgs));
    assert_eq!(parser.process("graphics:#:r:r"), Err(ErrorKind::TooManyArgs));
    assert_eq!(*current(&parser), before);
}

#[test]
fn graphics_under_a_single_byte_codepage() {
    let latin1 = EncodingCodec::for_label("latin1").unwrap();
    let mut parser = Parser::with_codec(schema(), &latin1);
    parser.process("name:Test Feature").unwrap();
    assert_eq!(parser.process("graphics:¥:red"), Err(ErrorKind::DecodingFailure));
    parser.process("graphics:*:red").unwrap();
    assert_eq!(current(&parser).glyph, '*');
}

#[test]
fn mimic() {
    let mut parser = parser_with_feature();
    parser.process("mimic:marshmallow").unwrap();
    assert_eq!(current(&parser).mimic.as_deref(), Some("marshmallow"));
}

#[test]
fn priority() {
    let mut parser = parser_with_feature();
    parser.process("priority:2").unwrap();
    assert_eq!(current(&parser).priority, 2);
    assert_eq!(parser.process("priority:high"), Err(ErrorKind::BadValue));
    assert_eq!(current(&parser).priority, 2);
}

#[test]
fn flags() {
    let mut parser = parser_with_feature();

    // No flags at all.
    parser.process("flags:").unwrap();
    assert!(current(&parser).flags.is_empty());

    parser.process("flags:LOS").unwrap();
    parser.process("flags:PERMANENT | DOWNSTAIR").unwrap();
    assert_eq!(current(&parser).flags, TerrainFlags::LOS | TerrainFlags::PERMANENT | TerrainFlags::DOWNSTAIR);
    assert_eq!(current(&parser).flag_names(), vec!["LOS", "PERMANENT", "DOWNSTAIR"]);
}

#[test]
fn flags_apply_nothing_when_one_name_is_unknown() {
    let mut parser = parser_with_feature();
    parser.process("flags:LOS").unwrap();
    assert_eq!(parser.process("flags:PROJECT | XYZZY | WALL"), Err(ErrorKind::InvalidFlag));
    assert_eq!(current(&parser).flags, TerrainFlags::LOS);
}

#[test]
fn flags_reject_stray_separators() {
    let mut parser = parser_with_feature();
    parser.process("flags:WALL").unwrap();
    for line in ["flags:LOS |", "flags:LOS || ROCK", "flags:| LOS"] {
        assert_eq!(parser.process(line), Err(ErrorKind::InvalidFlag), "{line}");
    }
    assert_eq!(current(&parser).flags, TerrainFlags::WALL);

    // Whitespace alone is still an empty list.
    parser.process("flags:   ").unwrap();
    assert_eq!(current(&parser).flags, TerrainFlags::WALL);
}

#[test]
fn whitespace_and_delimiters_inside_fields() {
    let mut parser = Parser::new(schema());
    parser.process("name:").unwrap();
    assert_eq!(current(&parser).name, "");

    parser.process("graphics: :w").unwrap();
    assert_eq!((current(&parser).glyph, current(&parser).colour), (' ', COLOUR_WHITE));

    parser.process("desc:a:b").unwrap();
    assert_eq!(current(&parser).desc.as_deref(), Some("a:b"));

    parser.process("info: 9 : 2 ").unwrap();
    assert_eq!((current(&parser).shopnum, current(&parser).dig), (9, 2));
}

#[test]
fn info() {
    let mut parser = parser_with_feature();
    parser.process("info:9:2").unwrap();
    assert_eq!((current(&parser).shopnum, current(&parser).dig), (9, 2));
    assert_eq!(parser.process("info:9"), Err(ErrorKind::TooFewArgs));
    assert_eq!(parser.process("info:1:x"), Err(ErrorKind::BadValue));
    assert_eq!((current(&parser).shopnum, current(&parser).dig), (9, 2));
}

#[test]
fn desc() {
    let mut parser = parser_with_feature();
    parser.process("desc:A door that is already open.").unwrap();
    // Repeats are appended to the first.
    parser.process("desc:  Player, monster, spell, and missile can pass through as long as it stays open.").unwrap();
    assert_eq!(
        current(&parser).desc.as_deref(),
        Some("A door that is already open.  Player, monster, spell, and missile can pass through as long as it stays open.")
    );
}

fn message<'f>(f: &'f Feature, keyword: &str) -> Option<&'f str> {
    match keyword {
        "walk-msg" => f.walk_msg.as_deref(),
        "run-msg" => f.run_msg.as_deref(),
        "hurt-msg" => f.hurt_msg.as_deref(),
        "die-msg" => f.die_msg.as_deref(),
        "confused-msg" => f.confused_msg.as_deref(),
        "look-prefix" => f.look_prefix.as_deref(),
        "look-in-preposition" => f.look_in_preposition.as_deref(),
        _ => None,
    }
}

#[test]
fn messages_accumulate() {
    let cases = [
        ("walk-msg", "It looks dangerous.", "  Really enter? ", "It looks dangerous.  Really enter? "),
        ("run-msg", "It blocks your path.", "  Really enter? ", "It blocks your path.  Really enter? "),
        ("hurt-msg", "Ow!", "  That hurt!", "Ow!  That hurt!"),
        ("die-msg", "dissolving", " in a pool of acid", "dissolving in a pool of acid"),
        ("confused-msg", "slams into a wall", " and stumbles", "slams into a wall and stumbles"),
        ("look-prefix", "the entrance ", "to the", "the entrance to the"),
        ("look-in-preposition", "at the ", "brink of", "at the brink of"),
    ];

    for (keyword, first, second, expected) in cases {
        let mut parser = parser_with_feature();
        assert_eq!(message(current(&parser), keyword), None, "{keyword}");
        parser.process(&format!("{keyword}:{first}")).unwrap();
        parser.process(&format!("{keyword}:{second}")).unwrap();
        assert_eq!(message(current(&parser), keyword), Some(expected), "{keyword}");
    }
}

#[test]
fn resist_flag() {
    let mut parser = parser_with_feature();
    parser.process("resist-flag:IM_POIS").unwrap();
    assert_eq!(current(&parser).resist_flag, RACE_FLAGS.code("IM_POIS"));
    assert_eq!(current(&parser).resist_flag_name(), Some("IM_POIS"));
}

#[test]
fn resist_flag_bad() {
    let mut parser = parser_with_feature();
    assert_eq!(parser.process("resist-flag:XYZZY"), Err(ErrorKind::InvalidFlag));
    assert_eq!(current(&parser).resist_flag, None);

    parser.process("resist-flag:IM_FIRE").unwrap();
    assert_eq!(parser.process("resist-flag:XYZZY"), Err(ErrorKind::InvalidFlag));
    assert_eq!(current(&parser).resist_flag_name(), Some("IM_FIRE"));
}

#[test]
fn unknown_directive_with_a_record() {
    let mut parser = parser_with_feature();
    assert_eq!(parser.process("smell:acrid"), Err(ErrorKind::UnknownDirective));
    assert_eq!(parser.process("Name:Other"), Err(ErrorKind::UnknownDirective));
}

#[test]
fn second_name_needs_finalize() {
    let mut parser = parser_with_feature();
    assert_eq!(parser.process("name:Another"), Err(ErrorKind::RecordInProgress));
    let first = parser.finalize().unwrap();
    assert_eq!(first.name, "Test Feature");
    parser.process("name:Another").unwrap();
    assert_eq!(current(&parser).name, "Another");
}

#[test]
fn sessions_share_the_schema_across_threads() {
    let handles: Vec<_> = ["granite wall", "magma vein"]
        .into_iter()
        .map(|name| {
            std::thread::spawn(move || {
                let mut parser = Parser::new(schema());
                parser.process(&format!("name:{name}")).unwrap();
                parser.process("flags:WALL | ROCK").unwrap();
                parser.finalize().unwrap()
            })
        })
        .collect();

    let names: Vec<String> = handles.into_iter().map(|h| h.join().unwrap().name).collect();
    assert_eq!(names, vec!["granite wall", "magma vein"]);
}

const FIELD_KEYWORDS: &[&str] = &[
    "graphics",
    "priority",
    "mimic",
    "flags",
    "info",
    "desc",
    "walk-msg",
    "run-msg",
    "hurt-msg",
    "die-msg",
    "confused-msg",
    "look-prefix",
    "look-in-preposition",
    "resist-flag",
];

proptest! {
    #[test]
    fn no_field_directive_works_without_a_header(idx in 0..FIELD_KEYWORDS.len(), value in ".*") {
        let mut parser = Parser::new(schema());
        let line = format!("{}:{}", FIELD_KEYWORDS[idx], value);
        prop_assert_eq!(parser.process(&line), Err(ErrorKind::MissingRecordHeader));
        prop_assert!(parser.current_record().is_none());
    }

    #[test]
    fn unknown_keywords_without_a_header_are_missing_header(keyword in "[a-z]{1,12}") {
        prop_assume!(keyword != "name");
        let mut parser = Parser::new(schema());
        prop_assert_eq!(parser.process(&format!("{keyword}:x")), Err(ErrorKind::MissingRecordHeader));
    }

    #[test]
    fn desc_is_the_concatenation_of_every_line(parts in prop::collection::vec("[^\r\n]*", 1..6)) {
        let mut parser = parser_with_feature();
        for part in &parts {
            parser.process(&format!("desc:{part}")).unwrap();
        }
        prop_assert_eq!(current(&parser).desc.clone(), Some(parts.concat()));
    }

    #[test]
    fn flags_are_the_union_of_every_line(picks in prop::collection::vec(prop::sample::subsequence(vec!["LOS", "WALL", "ROCK", "TRAP", "SHOP"], 0..=5), 1..5)) {
        let mut parser = parser_with_feature();
        let mut expected = TerrainFlags::empty();
        for names in &picks {
            parser.process(&format!("flags:{}", names.join(" | "))).unwrap();
            for name in names {
                expected |= TerrainFlags::from_name(name).unwrap();
            }
        }
        prop_assert_eq!(current(&parser).flags, expected);
    }
}

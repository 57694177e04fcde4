//! Width tables checked case by case against known terminal behaviour.

use termwidth::{
    char_is_emoji_modifier_base, char_width, codepoint_width, codepoints_width, str_width,
    str_width_prefix, wcswidth, wcwidth, Width, WidthError, UNICODE_VERSION,
};

fn check_wcswidth(cases: &[(&str, &str, i32, Option<usize>)]) {
    for &(name, text, expected, limit) in cases {
        assert_eq!(
            wcswidth(text, limit),
            expected,
            "case {name}: wcswidth({text:?}, {limit:?})"
        );
    }
}

// ============================================================================
// Single codepoints
// ============================================================================

#[test]
fn single_codepoint_widths() {
    let cases: &[(&str, &str, i32)] = &[
        // basic
        ("exclamation", "!", 1),
        ("a", "a", 1),
        // non-printables
        ("one", "\x01", -1),
        ("esc", "\x1b", -1),
        ("carriage", "\r", -1),
        ("linebreak", "\n", -1),
        ("zero", "\0", 0),
        // accent
        ("acute", "\u{301}", 0),
        // narrow and wide
        ("right_triangle", "\u{22BF}", 1),
        ("turned_not_sign", "\u{2319}", 1),
        ("watch", "\u{231A}", 2),
        ("hourglass", "\u{231B}", 2),
        ("warning_sign", "\u{26A0}", 1),
        ("heavy_plus", "\u{2795}", 2),
        ("ideographic_half_fill", "\u{303F}", 1),
        ("hiragana_small_a", "\u{3041}", 2),
        ("segmented_digit_three", "\u{1FBF3}", 1),
        ("katakana_small_ha", "\u{31F5}", 2),
        ("cjk_tiger", "\u{4E54}", 2),
        // basic emoji
        ("smiley", "\u{1F600}", 2),
        ("shaking_face", "\u{1FAE8}", 2),
        // variation selectors
        ("vs15", "\u{FE0E}", 0),
        ("vs16", "\u{FE0F}", 0),
        ("tent", "\u{26FA}", 2),
        ("diamond_suit", "\u{2666}", 1),
        ("person_bouncing_ball", "\u{26F9}", 1),
        // skin tones
        ("fitzpatrick_3", "\u{1F3FC}", 2),
        ("fitzpatrick_5", "\u{1F3FE}", 2),
        // planes 2 and 3
        ("qiang", "\u{2B017}", 2),
        ("seal_script", "\u{32477}", 2),
        // unassigned
        ("unassigned_plane_4", "\u{40000}", 1),
        ("unassigned_plane_d", "\u{D0000}", 1),
        ("unassigned_plane_e", "\u{E0002}", 1),
        ("tag_unassigned", "\u{E0080}", 1),
        // tags
        ("tag_begin", "\u{E0001}", 0),
        ("tag_space", "\u{E0020}", 0),
        ("tag_cancel", "\u{E007F}", 0),
    ];

    for &(name, text, expected) in cases {
        let width = char_width(text).unwrap();
        assert_eq!(width.as_i32(), expected, "case {name}: char_width({text:?})");
        let cp = text.chars().next().unwrap() as u32;
        assert_eq!(wcwidth(cp), expected, "case {name}: wcwidth({cp:#x})");
    }
}

#[test]
fn char_width_rejects_wrong_arity() {
    for text in ["", "ab", "e\u{301}", "\u{26A0}\u{FE0F}"] {
        let err = char_width(text).unwrap_err();
        assert!(matches!(err, WidthError::InvalidInput { .. }));
        assert!(err.to_string().contains("need a single"), "{err}");
    }
}

#[test]
fn emoji_modifier_base_lookup() {
    assert!(char_is_emoji_modifier_base("\u{1F44D}").unwrap());
    assert!(char_is_emoji_modifier_base("\u{26F9}").unwrap());
    assert!(!char_is_emoji_modifier_base("\u{1F4EE}").unwrap());
    assert!(char_is_emoji_modifier_base("").is_err());
}

#[test]
fn wide_codepoints_have_two_columns() {
    for cp in [0x1100, 0x3000, 0xAC00, 0xFF01, 0x1F300, 0x20000, 0x3FFFD] {
        assert_eq!(codepoint_width(cp), Width::Wide, "{cp:#x}");
    }
}

#[test]
fn width_is_nameable_from_the_crate_root() {
    let columns = |width: termwidth::Width| match width {
        termwidth::Width::NonPrintable => None,
        termwidth::Width::Zero => Some(0),
        termwidth::Width::Narrow => Some(1),
        termwidth::Width::Wide => Some(2),
    };
    for cp in [0x01, 0x0301, 0x61, 0x4E54] {
        assert_eq!(columns(codepoint_width(cp)), codepoint_width(cp).columns());
    }
    assert_eq!(columns(codepoint_width(0x1B)), None);
}

#[test]
fn tables_report_their_unicode_version() {
    assert_eq!(UNICODE_VERSION, (17, 0, 0));
}

// ============================================================================
// Plain strings
// ============================================================================

#[test]
fn plain_strings() {
    check_wcswidth(&[
        ("empty", "", 0, None),
        ("hi", "Hello!", 6, None),
        ("exclamation", "!", 1, None),
        ("punctuation", "a~@!#~Z", 7, None),
        ("simple", "abcde", 5, None),
        ("plusminus", "±", 1, None),
        ("fancy_quote", "\u{201C}", 1, None),
        ("lower_right_triangle", "\u{25E3}", 1, None),
    ]);
}

#[test]
fn non_printable_strings() {
    check_wcswidth(&[
        ("tab", "Hi\tthere", -1, None),
        ("esc", "There is an \x1b", -1, None),
        ("one", "\x01", -1, None),
        ("zero", "\0", 0, None),
        ("escapes", "\x1b[31m\x1b[39m", -1, None),
    ]);
}

#[test]
fn accents_and_combining_marks() {
    check_wcswidth(&[
        ("umlaut", "m\u{FC}ller", 6, None),
        ("cafe_combining", "cafe\u{301}", 4, None),
        ("cafe_precomposed", "caf\u{E9}", 4, None),
        ("acute", "\u{301}", 0, None),
        ("thai", "ปฏัก", 3, None),
        ("thai_combining", "_\u{E34}", 1, None),
    ]);
}

#[test]
fn east_asian_text() {
    check_wcswidth(&[
        ("hello_world_jp", "コンニチハ, セカイ!", 19, None),
        ("jp_prefix", "コンニチハ, セカイ!", 12, Some(7)),
        ("cjk1", "古池や", 6, None),
        ("cjk2", "あいうabc", 9, None),
        ("cjk3", "あいう★", 7, None),
        ("katakana", "ノード.js", 9, None),
        ("chinese", "你好", 4, None),
        ("korean", "안녕하세요", 10, None),
        ("supplementary", "A\u{1F200}BC", 5, None),
        ("ideographic_variation", "\u{845B}\u{E0100}", 2, None),
    ]);
}

// ============================================================================
// Emoji sequences
// ============================================================================

#[test]
fn basic_emoji_and_flags() {
    check_wcswidth(&[
        ("hi_wave", "Hi\u{1F44B}!", 5, None),
        ("french_polynesia", "\u{1F1F5}\u{1F1EB}", 2, None),
        ("diego_garcia", "This is the \u{1F1E9}\u{1F1EC} island", 21, None),
        (
            "scotland",
            "\u{1F3F4}\u{E0067}\u{E0062}\u{E0073}\u{E0063}\u{E0074}\u{E007F}",
            2,
            None,
        ),
        ("presentation", "\u{231A}", 2, None),
        ("either_way", "\u{2194}\u{FE0F}", 2, None),
    ]);
}

#[test]
fn variation_selectors() {
    check_wcswidth(&[
        ("vs15", "\u{FE0E}", 0, None),
        ("vs16", "\u{FE0F}", 0, None),
        ("warn1", "\u{26A0}", 1, None),
        ("warn2", "\u{26A0}\u{FE0F}", 2, None),
        ("warn3", "\u{26A0}\u{FE0E}", 1, None),
        ("warn4", "This is a \u{26A0} warning!", 20, None),
        ("warn5", "This is a \u{26A0}\u{FE0E} warning!", 20, None),
        ("warn6", "This is a \u{26A0}\u{FE0F} warning!", 21, None),
        ("diamond_text", "\u{2666}\u{FE0E}", 1, None),
        ("diamond_emoji", "\u{2666}\u{FE0F}", 2, None),
        ("ball_text", "\u{26F9}\u{FE0E}", 1, None),
        ("ball_emoji", "\u{26F9}\u{FE0F}", 2, None),
        ("poodle", "\u{1F429}", 2, None),
        ("poodle_vs16", "\u{1F429}\u{FE0F}", 2, None),
        ("keycap", "5\u{FE0F}\u{20E3}", 2, None),
        ("keycap_sum", "5\u{FE0F}\u{20E3} + 1 = 6", 10, None),
    ]);
}

#[test]
fn skin_tone_modifiers() {
    check_wcswidth(&[
        ("lone_tone", "\u{1F3FC} is a skin tone!", 18, None),
        ("postbox_not_modified", "\u{1F4EE}\u{1F3FE}", 4, None),
        ("thumbs_up_modified", "\u{1F44D}\u{1F3FF}", 2, None),
        ("smiley_not_modified", "\u{1F600}\u{1F3FB}", 4, None),
        ("ball_emojified", "\u{26F9}\u{1F3FC}", 2, None),
        ("ball_emojified_prefix", "\u{26F9}\u{1F3FC}", 1, Some(1)),
        ("ball_vs16_tone", "\u{26F9}\u{FE0F}\u{1F3FD}", 4, None),
        ("ball_vs15_tone", "\u{26F9}\u{FE0E}\u{1F3FE}", 3, None),
        (
            "ball_explained",
            "\u{26F9}\u{1F3FF}=\u{26F9}\u{FE0E}\u{1F3FF}",
            6,
            None,
        ),
        ("tent_not_modified", "\u{26FA}\u{1F3FB}", 4, None),
        ("only_adjacent_base", "\u{26F9}\u{1F44D}\u{1F3FC}", 3, None),
        ("only_adjacent_base_1", "\u{26F9}\u{1F44D}\u{1F3FC}", 1, Some(1)),
        ("only_adjacent_base_2", "\u{26F9}\u{1F44D}\u{1F3FC}", 3, Some(2)),
        ("woman_dark_skin", "\u{1F469}\u{1F3FF}", 2, None),
        ("woman", "\u{1F469}", 2, None),
    ]);
}

#[test]
fn zwj_sequences() {
    check_wcswidth(&[
        ("white_cane", "\u{1F469}\u{200D}\u{1F9AF}", 2, None),
        (
            "white_cane_right",
            "\u{1F469}\u{200D}\u{1F9AF}\u{200D}\u{27A1}",
            2,
            None,
        ),
        (
            "white_cane_right_qualified",
            "\u{1F469}\u{200D}\u{1F9AF}\u{200D}\u{27A1}\u{FE0F}",
            2,
            None,
        ),
        (
            "couple_with_heart",
            "\u{1F469}\u{200D}\u{2764}\u{200D}\u{1F468}",
            2,
            None,
        ),
        (
            "couple_with_heart_qualified",
            "\u{1F469}\u{200D}\u{2764}\u{FE0F}\u{200D}\u{1F468}",
            2,
            None,
        ),
        (
            "man_running_toned",
            "\u{1F3C3}\u{1F3FE}\u{200D}\u{2642}\u{FE0F}",
            2,
            None,
        ),
        (
            "man_running_toned_unqualified",
            "\u{1F3C3}\u{1F3FE}\u{200D}\u{2642}",
            2,
            None,
        ),
        (
            "kiss_toned",
            "\u{1F9D1}\u{1F3FD}\u{200D}\u{2764}\u{200D}\u{1F48B}\u{200D}\u{1F9D1}\u{1F3FE}",
            2,
            None,
        ),
        (
            "kiss_toned_qualified",
            "\u{1F9D1}\u{1F3FD}\u{200D}\u{2764}\u{FE0F}\u{200D}\u{1F48B}\u{200D}\u{1F9D1}\u{1F3FE}",
            2,
            None,
        ),
        (
            "family",
            "\u{1F468}\u{200D}\u{1F468}\u{200D}\u{1F467}\u{200D}\u{1F467}",
            2,
            None,
        ),
        (
            "man_running_explained",
            "\u{1F3C3}\u{1F3FE}\u{200D}\u{2642}=\u{1F3FE}\u{1F3C3}\u{2642}",
            8,
            None,
        ),
        (
            "man_running_explained_qualified",
            "\u{1F3C3}\u{1F3FE}\u{200D}\u{2642}\u{FE0F}=\u{1F3C3}\u{FE0F}\u{1F3FE}\u{2642}",
            8,
            None,
        ),
        ("farmer", "\u{1F9D1}\u{200D}\u{1F33E}", 2, None),
    ]);
}

#[test]
fn mixed_sequences() {
    check_wcswidth(&[
        (
            "ball_for_scotland",
            "\u{26F9}\u{1F3FC}\u{1F3F4}\u{E0067}\u{E0062}\u{E0073}\u{E0063}\u{E0074}\u{E007F}!",
            5,
            None,
        ),
        (
            "untoned_ball_for_scotland",
            "\u{26F9}\u{1F3F4}\u{E0067}\u{E0062}\u{E0073}\u{E0063}\u{E0074}\u{E007F}!",
            4,
            None,
        ),
    ]);
}

// ============================================================================
// Entry points agree
// ============================================================================

#[test]
fn entry_points_agree() {
    let text = "\u{1F9D1}\u{1F3FD}\u{200D}\u{2764}\u{FE0F} ok";
    let cps: Vec<u32> = text.chars().map(u32::from).collect();

    assert_eq!(str_width(text), Some(5));
    assert_eq!(codepoints_width(&cps, None), Some(5));
    assert_eq!(str_width_prefix(text, usize::MAX), Some(5));
    assert_eq!(wcswidth(text, None), 5);

    for n in 0..=cps.len() {
        assert_eq!(str_width_prefix(text, n), codepoints_width(&cps, Some(n)));
    }
}

#[test]
fn control_after_the_limit_is_ignored() {
    assert_eq!(str_width_prefix("ok\n", 2), Some(2));
    assert_eq!(wcswidth("ok\n", Some(2)), 2);
    assert_eq!(wcswidth("ok\n", None), -1);
}

//! Tests pinning down the exact text format: layout, escapes, leniency and errors.

use prefsync::{
    from_str, from_str_with_options, to_string, to_string_with_options, value, ArrayElements,
    ArrayIndent, Error, FormatOptions, Value,
};

mod layout {
    use super::*;

    #[test]
    fn empty_containers() {
        assert_eq!(to_string(&value!({})).unwrap(), "{}");
        assert_eq!(to_string(&value!([])).unwrap(), "[]");
        assert_eq!(
            to_string(&value!({ "a": {}, "b": [] })).unwrap(),
            "{\n\t\"a\": {},\n\t\"b\": []\n}"
        );
    }

    #[test]
    fn scalars() {
        assert_eq!(to_string(&value!(null)).unwrap(), "null");
        assert_eq!(to_string(&value!(true)).unwrap(), "true");
        assert_eq!(to_string(&value!(false)).unwrap(), "false");
        assert_eq!(to_string(&value!(30)).unwrap(), "30");
        assert_eq!(to_string(&value!(-0.5)).unwrap(), "-0.5");
        assert_eq!(to_string(&value!("x")).unwrap(), "\"x\"");
    }

    #[test]
    fn non_finite_numbers_become_null() {
        assert_eq!(to_string(&Value::Num(f64::NAN)).unwrap(), "null");
        assert_eq!(to_string(&Value::Num(f64::INFINITY)).unwrap(), "null");
    }

    #[test]
    fn nested_objects_indent_one_tab_per_level() {
        let doc = value!({ "a": { "b": { "c": 1 } } });
        assert_eq!(
            to_string(&doc).unwrap(),
            "{\n\t\"a\": {\n\t\t\"b\": {\n\t\t\t\"c\": 1\n\t\t}\n\t}\n}"
        );
    }

    #[test]
    fn array_elements_use_doubled_indent() {
        let doc = value!({ "outer": { "list": [1, 2] } });
        assert_eq!(
            to_string(&doc).unwrap(),
            "{\n\t\"outer\": {\n\t\t\"list\": [\n\t\t\t\t1\n\t\t\t\t2\n\t\t]\n\t}\n}"
        );
    }

    #[test]
    fn nested_array_indent_option() {
        let doc = value!({ "outer": { "list": [1, 2] } });
        let options = FormatOptions::new().with_array_indent(ArrayIndent::Nested);
        assert_eq!(
            to_string_with_options(&doc, &options).unwrap(),
            "{\n\t\"outer\": {\n\t\t\"list\": [\n\t\t\t1\n\t\t\t2\n\t\t]\n\t}\n}"
        );
    }

    #[test]
    fn both_indent_styles_read_back() {
        let doc = value!({ "list": [{ "a": [1, { "b": null }] }] });
        for options in [FormatOptions::compatible(), FormatOptions::normalized()] {
            let text = to_string_with_options(&doc, &options).unwrap();
            assert_eq!(from_str(&text).unwrap(), doc);
        }
    }
}

mod strings {
    use super::*;

    #[test]
    fn only_three_characters_are_escaped() {
        let text = to_string(&value!("tab\there \"q\" back\\slash\nline")).unwrap();
        assert_eq!(text, "\"tab\there /\"q/\" back\\\\slash\\nline\"");
    }

    #[test]
    fn escapes_are_read_back() {
        assert_eq!(from_str(r#""a/"b""#).unwrap(), value!("a\"b"));
        assert_eq!(from_str(r#""a\"b""#).unwrap(), value!("a\"b"));
        assert_eq!(from_str(r#""a\nb""#).unwrap(), value!("a\nb"));
        assert_eq!(from_str(r#""a\\b""#).unwrap(), value!("a\\b"));
    }

    #[test]
    fn unknown_escapes_are_dropped() {
        assert_eq!(from_str(r#""a\tb""#).unwrap(), value!("ab"));
    }

    #[test]
    fn slashes_round_trip_unless_trailing() {
        let path = value!("/home/ann/notes.txt");
        assert_eq!(from_str(&to_string(&path).unwrap()).unwrap(), path);

        let trailing = to_string(&value!("/home/ann/")).unwrap();
        assert!(matches!(
            from_str(&trailing),
            Err(Error::UnexpectedEnd { .. })
        ));
    }

    #[test]
    fn unicode_passes_through() {
        let doc = value!("café ☕ 日本");
        let text = to_string(&doc).unwrap();
        assert_eq!(text, "\"café ☕ 日本\"");
        assert_eq!(from_str(&text).unwrap(), doc);
    }
}

mod leniency {
    use super::*;

    #[test]
    fn commas_are_whitespace() {
        assert_eq!(
            from_str("{,,\"a\": 1,,, \"b\": 2,}").unwrap(),
            value!({ "a": 1, "b": 2 })
        );
        assert_eq!(from_str("[1,2,,3,]").unwrap(), value!([1, 2, 3]));
        assert_eq!(from_str(",,true").unwrap(), value!(true));
    }

    #[test]
    fn indentation_is_optional() {
        assert_eq!(
            from_str("{\"a\":[{\"b\":true}]}").unwrap(),
            value!({ "a": [{ "b": true }] })
        );
    }

    #[test]
    fn carriage_returns_are_whitespace() {
        assert_eq!(
            from_str("{\r\n\t\"a\": 1\r\n}").unwrap(),
            value!({ "a": 1 })
        );
    }

    #[test]
    fn empty_input_is_absent() {
        assert_eq!(from_str("").unwrap(), Value::Absent);
        assert_eq!(from_str("\n\t ").unwrap(), Value::Absent);
    }

    #[test]
    fn trailing_text_is_ignored() {
        assert_eq!(from_str("{} garbage").unwrap(), value!({}));
        assert_eq!(from_str("1 2").unwrap(), value!(1));
    }

    #[test]
    fn unterminated_containers_end_at_input_end() {
        assert_eq!(from_str("[1, 2").unwrap(), value!([1, 2]));
        assert_eq!(from_str("{\"a\": 1").unwrap(), value!({ "a": 1 }));
    }

    #[test]
    fn objects_stop_at_first_non_key() {
        assert_eq!(from_str("{\"a\": 1 ] \"b\": 2}").unwrap(), value!({ "a": 1 }));
    }

    #[test]
    fn duplicate_keys_keep_last_value() {
        assert_eq!(
            from_str("{\"a\": 1, \"a\": 2}").unwrap(),
            value!({ "a": 2 })
        );
    }

    #[test]
    fn number_forms() {
        assert_eq!(from_str("-12.5e1").unwrap(), value!(-125.0));
        assert_eq!(from_str("1E+2").unwrap(), value!(100.0));
        assert_eq!(from_str("007").unwrap(), value!(7));
    }
}

mod objects_only_arrays {
    use super::*;

    fn compatible() -> FormatOptions {
        FormatOptions::new().with_array_elements(ArrayElements::ObjectsOnly)
    }

    #[test]
    fn object_elements_are_read() {
        assert_eq!(
            from_str_with_options("[{\"a\": 1} {}]", &compatible()).unwrap(),
            value!([{ "a": 1 }, {}])
        );
    }

    #[test]
    fn first_non_object_ends_the_array() {
        let doc = from_str_with_options("{\"list\": [{} 1 {}] \"next\": true}", &compatible())
            .unwrap();
        assert_eq!(doc.get("list"), Some(&value!([{}])));
        assert!(doc.get("next").is_none());
    }

    #[test]
    fn default_reads_any_element() {
        assert_eq!(
            from_str("[{} 1 \"x\" [null]]").unwrap(),
            value!([{}, 1, "x", [null]])
        );
    }
}

mod errors {
    use super::*;

    #[test]
    fn malformed_literals() {
        for input in ["tru", "nul", "fals", "trUe", "nulL"] {
            assert!(
                matches!(from_str(input), Err(Error::MalformedLiteral { .. })),
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn missing_colon() {
        match from_str("{\n\t\"a\" 1\n}") {
            Err(Error::MalformedObject { line, col, msg }) => {
                assert_eq!((line, col), (2, 6));
                assert!(msg.contains("\"a\""));
            }
            other => panic!("Expected malformed object, got {:?}", other),
        }
    }

    #[test]
    fn unexpected_characters() {
        match from_str("[1, @]") {
            Err(Error::UnexpectedCharacter { line, col, found }) => {
                assert_eq!((line, col), (1, 5));
                assert_eq!(found, '@');
            }
            other => panic!("Expected unexpected character, got {:?}", other),
        }
        assert!(matches!(
            from_str("'single'"),
            Err(Error::UnexpectedCharacter { found: '\'', .. })
        ));
    }

    #[test]
    fn malformed_numbers() {
        assert!(matches!(from_str("-"), Err(Error::MalformedNumber { .. })));
        assert!(matches!(from_str("1-2"), Err(Error::MalformedNumber { .. })));
        assert!(matches!(from_str("1.2.3"), Err(Error::MalformedNumber { .. })));
    }

    #[test]
    fn unterminated_string() {
        assert!(matches!(
            from_str("{\"open"),
            Err(Error::UnexpectedEnd { .. })
        ));
    }

    #[test]
    fn errors_are_syntax_errors() {
        for input in ["tru", "{\"a\" 1}", "@", "-", "\"open"] {
            let error = from_str(input).unwrap_err();
            assert!(error.is_syntax(), "{} should be a syntax error", error);
        }
        let error = value!(1).to_str().unwrap_err();
        assert!(!error.is_syntax());
    }

    #[test]
    fn error_messages_carry_positions() {
        let error = from_str("\n\n  nope").unwrap_err();
        assert!(error.to_string().contains("3"), "{}", error);
    }
}

#[cfg(test)]
mod verify {
    use macrofor::formatting::*;
    use macrofor::language::*;

    fn label(number: u32) -> Label {
        Label::new(number).unwrap()
    }

    #[test]
    fn call_with_arguments() {
        assert_eq!(
            call("compute", &["x", "y", "z"]).unwrap(),
            "call compute(x, y, z)"
        );
    }

    #[test]
    fn assignment() {
        assert_eq!(assign("x", "2*y + 1").unwrap(), "x = 2*y + 1");
    }

    #[test]
    fn declaration_requires_identifiers() {
        let error = declare::<&str>("real", &[]).unwrap_err();
        assert!(error.is_invalid_argument());

        assert_eq!(
            declare("integer", &["i", "j", "k"]).unwrap(),
            "integer i, j, k"
        );
    }

    #[test]
    fn single_line_results() {
        let lines = vec![
            call("f", &["a"]).unwrap(),
            assign("x", "1").unwrap(),
            declare("real", &["x"]).unwrap(),
            common("work", &["a", "b"]).unwrap(),
            parameter(&["n = 10"]).unwrap(),
            implicit_none(),
            comment("note").unwrap(),
            continue_(label(100)),
            goto(label(100)),
            if_goto("x .lt. 0", label(100)).unwrap(),
            if_then("x .gt. 0").unwrap(),
            else_(),
            end_if(),
            do_header(None, "i", &Bound::from(1), &Bound::from("n"), None).unwrap(),
            end_do(),
            return_(),
            stop(),
            end(),
            program("demo").unwrap(),
            subroutine("solve", &["a", "n"]).unwrap(),
            function("real", "norm", &["v"]).unwrap(),
            open("10", "data.txt", None).unwrap(),
            close("10").unwrap(),
            read("5", Some(label(100)), &["i"]).unwrap(),
            write("6", None, &["x"]).unwrap(),
            format(label(100), &["I3"]).unwrap(),
        ];

        for line in lines {
            assert!(!line.contains('\n'), "{:?}", line);
            assert!(!line.is_empty());
        }
    }

    #[test]
    fn no_dangling_separators() {
        let lines = vec![
            call::<&str>("init", &[]).unwrap(),
            subroutine::<&str>("reset", &[]).unwrap(),
            read::<&str>("5", None, &[]).unwrap(),
            write::<&str>("6", Some(label(200)), &[]).unwrap(),
            do_header(Some(label(100)), "i", &Bound::from(1), &Bound::from(10), None).unwrap(),
        ];

        assert_eq!(lines[0], "call init()");
        assert_eq!(lines[1], "subroutine reset()");
        assert_eq!(lines[2], "read(5)");
        assert_eq!(lines[3], "write(6, 200)");
        assert_eq!(lines[4], "do 100 i = 1, 10");

        for line in lines {
            assert!(!line.contains(", )"));
            assert!(!line.contains("(, "));
            assert!(!line.ends_with(' '));
            assert!(!line.ends_with(','));
        }
    }

    #[test]
    fn loop_headers() {
        assert_eq!(
            do_header(
                Some(label(10)),
                "k",
                &Bound::from(10),
                &Bound::from(1),
                Some(&Bound::from(-1))
            )
            .unwrap(),
            "do 10 k = 10, 1, -1"
        );
        assert!(do_header(None, "i", &Bound::from("1x"), &Bound::from(3), None)
            .unwrap_err()
            .is_invalid_argument());
        assert!(do_header(None, "", &Bound::from(1), &Bound::from(3), None).is_err());
    }

    #[test]
    fn resource_statements() {
        assert_eq!(
            open("10", "data.txt", Some("old")).unwrap(),
            "open(unit=10, file='data.txt', status='old')"
        );
        assert_eq!(
            open("20", "it's.dat", None).unwrap(),
            "open(unit=20, file='it''s.dat', status='unknown')"
        );
        assert!(open("", "data.txt", None).is_err());
        assert!(open("10", "", None).is_err());
    }

    #[test]
    fn transfers_and_formats() {
        assert_eq!(
            read("5", Some(label(100)), &["i", "x"]).unwrap(),
            "read(5, 100) i, x"
        );
        assert_eq!(write("6", None, &["i", "x"]).unwrap(), "write(6) i, x");
        assert_eq!(
            format(label(100), &["I3", "F8.3"]).unwrap(),
            "100 format(I3, F8.3)"
        );
        assert!(format::<&str>(label(100), &[]).is_err());
    }

    #[test]
    fn list_round_trip() {
        let lists: Vec<Vec<&str>> = vec![
            vec!["x"],
            vec!["x", "y", "z"],
            vec!["a(i)", "b(i,j)", "'text'"],
        ];
        for list in lists {
            let joined = join(&list);
            let split: Vec<&str> = joined
                .split(", ")
                .collect();
            assert_eq!(split, list);
        }
    }

    #[test]
    fn blank_and_multiline_arguments_rejected() {
        assert!(call("f", &["a", " "]).is_err());
        assert!(assign("x", "1\ny = 2").is_err());
        assert!(comment("one\ntwo").is_err());
        assert_eq!(comment("").unwrap(), "!");
    }
}

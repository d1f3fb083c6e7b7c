#[cfg(test)]
mod verify {
    use macrofor::composing::blocks::*;
    use macrofor::composing::Labels;
    use macrofor::language::*;

    fn indentation(line: &str) -> usize {
        line.len()
            - line
                .trim_start()
                .len()
    }

    #[test]
    fn bounded_loop() {
        let mut labels = Labels::new();
        let fragment = do_loop(
            &mut labels,
            "i",
            1,
            10,
            None,
            ["a(i) = i", "b(i) = i*2"],
        )
        .unwrap();

        let text = fragment.to_string();
        let lines: Vec<&str> = text
            .lines()
            .collect();
        assert_eq!(
            lines,
            vec!["do 100 i = 1, 10", "  a(i) = i", "  b(i) = i*2", "100 continue"]
        );

        let opener = lines[0]
            .split_whitespace()
            .nth(1)
            .unwrap();
        let closer = lines[3]
            .split_whitespace()
            .next()
            .unwrap();
        assert_eq!(opener, closer);
    }

    #[test]
    fn resource_scope() {
        let fragment = open("10", "data.txt", Some("old"), ["read(10) x, y"]).unwrap();
        assert_eq!(
            fragment.to_string(),
            "open(unit=10, file='data.txt', status='old')\n  read(10) x, y\nclose(unit=10)"
        );
    }

    #[test]
    fn formatted_write() {
        let mut labels = Labels::new();
        let fragment = write_formatted(&mut labels, "6", &["I3", "F8.3"], &["iter", "residual"]).unwrap();
        assert_eq!(
            fragment.to_string(),
            "write(6, 100) iter, residual\n100 format(I3, F8.3)"
        );

        let fragment = read_formatted(&mut labels, "5", &["I5"], &["n"]).unwrap();
        assert_eq!(fragment.to_string(), "read(5, 200) n\n200 format(I5)");
    }

    #[test]
    fn failed_transfer_spends_no_label() {
        let mut labels = Labels::new();
        let error = write_formatted::<&str, &str>(&mut labels, "6", &[], &["x"]).unwrap_err();
        assert!(error.is_invalid_argument());
        assert_eq!(
            labels
                .allocate()
                .unwrap()
                .number(),
            100
        );
    }

    #[test]
    fn indentation_is_additive() {
        let mut labels = Labels::new();

        let innermost = do_loop(&mut labels, "i", 1, "n", None, ["x(i) = 0"]).unwrap();
        let conditional = if_then("n .gt. 0", [innermost]).unwrap();
        let unit = subroutine("clear", &["x", "n"], [conditional]).unwrap();

        let text = unit.to_string();
        let lines: Vec<&str> = text
            .lines()
            .collect();

        assert_eq!(lines.len(), 7);
        assert_eq!(indentation(lines[0]), 0);
        assert_eq!(indentation(lines[1]), 2);
        assert_eq!(indentation(lines[2]), 4);
        assert_eq!(lines[3], "      x(i) = 0");
        assert_eq!(indentation(lines[4]), 4);
        assert_eq!(indentation(lines[5]), 2);
        assert_eq!(lines[6], "end");
    }

    #[test]
    fn rendered_text_nests_like_blocks() {
        let inner = if_then("x .gt. 0", ["y = 1"]).unwrap();

        let structural = program("demo", [inner.clone()]).unwrap();
        let textual = program("demo", [inner.to_string()]).unwrap();

        assert_eq!(structural.to_string(), textual.to_string());
        assert_eq!(
            textual.to_string(),
            "program demo\n  if (x .gt. 0) then\n    y = 1\n  end if\nend"
        );
    }

    #[test]
    fn sibling_and_nested_loops_get_distinct_labels() {
        let mut labels = Labels::new();

        let inner = do_loop(&mut labels, "j", 1, 3, None, ["s = s + a(i,j)"]).unwrap();
        let outer = do_loop(&mut labels, "i", 1, 3, None, [inner]).unwrap();
        let sibling = do_loop(&mut labels, "k", 1, 3, Some(Bound::from(2)), ["t = t + k"]).unwrap();

        assert_eq!(
            outer.to_string(),
            "do 200 i = 1, 3\n  do 100 j = 1, 3\n    s = s + a(i,j)\n  100 continue\n200 continue"
        );
        assert_eq!(
            sibling.to_string(),
            "do 300 k = 1, 3, 2\n  t = t + k\n300 continue"
        );
    }

    #[test]
    fn single_label_reused() {
        let mut labels = Labels::single(Label::new(1).unwrap());
        let first = do_loop(&mut labels, "i", 1, 2, None, ["x = i"]).unwrap();
        let second = do_loop(&mut labels, "j", 1, 2, None, ["y = j"]).unwrap();

        assert!(first
            .to_string()
            .starts_with("do 1 i"));
        assert!(second
            .to_string()
            .starts_with("do 1 j"));
    }

    #[test]
    fn alternatives() {
        let fragment = if_then_else("z .eq. 0", ["y = 1"], ["y = 0", "z = 1"]).unwrap();
        assert_eq!(
            fragment.to_string(),
            "if (z .eq. 0) then\n  y = 1\nelse\n  y = 0\n  z = 1\nend if"
        );
    }

    #[test]
    fn functions() {
        let fragment = function("real", "twice", &["x"], ["twice = 2 * x", "return"]).unwrap();
        assert_eq!(
            fragment.to_string(),
            "real function twice(x)\n  twice = 2 * x\n  return\nend"
        );
    }

    #[test]
    fn expression_bounds() {
        let mut labels = Labels::new();
        let fragment = do_loop(&mut labels, "i", 1, "2*n", None, ["x(i) = 0"]).unwrap();
        assert_eq!(
            fragment.to_string(),
            "do 100 i = 1, 2*n\n  x(i) = 0\n100 continue"
        );

        let fragment = do_loop(
            &mut labels,
            "j",
            "1 + k",
            "3*m - 1",
            Some(Bound::from("-s")),
            ["y(j) = 1"],
        )
        .unwrap();
        assert!(fragment
            .to_string()
            .starts_with("do 200 j = 1 + k, 3*m - 1, -s\n"));
    }

    #[test]
    fn malformed_bounds_fail_immediately() {
        let mut labels = Labels::new();
        let error = do_loop(&mut labels, "i", "1.5", 10, None, ["x = i"]).unwrap_err();
        assert!(error.is_invalid_argument());
    }
}

#[cfg(test)]
mod verify {
    use std::fs;

    use macrofor::composing::{blocks, Labels};
    use macrofor::formatting;
    use macrofor::language::*;
    use macrofor::output::{self, Emission};

    fn demo() -> Vec<Fragment> {
        vec![blocks::program("demo", ["x = 1"]).unwrap()]
    }

    #[test]
    fn missing_directories_created() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir
            .path()
            .join("generated")
            .join("deeper")
            .join("demo.f90");

        let emission = Emission {
            line_ending: LineEnding::Lf,
            ..Default::default()
        };
        output::emit(&target, &demo(), &emission).unwrap();

        let text = fs::read_to_string(&target).unwrap();
        assert_eq!(text, "program demo\n  x = 1\nend\n");
    }

    #[test]
    fn line_endings() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir
            .path()
            .join("demo.f90");

        let emission = Emission {
            line_ending: LineEnding::CrLf,
            ..Default::default()
        };
        output::emit(&target, &demo(), &emission).unwrap();
        let bytes = fs::read(&target).unwrap();
        assert_eq!(bytes, b"program demo\r\n  x = 1\r\nend\r\n".to_vec());

        let emission = Emission {
            line_ending: LineEnding::Lf,
            ..Default::default()
        };
        output::emit(&target, &demo(), &emission).unwrap();
        let bytes = fs::read(&target).unwrap();
        assert_eq!(bytes, b"program demo\n  x = 1\nend\n".to_vec());
    }

    #[test]
    fn encodings() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir
            .path()
            .join("notes.f90");
        let fragments = vec![Fragment::from(formatting::comment("Übung").unwrap())];

        let emission = Emission {
            line_ending: LineEnding::Lf,
            ..Default::default()
        };
        output::emit(&target, &fragments, &emission).unwrap();
        assert_eq!(fs::read_to_string(&target).unwrap(), "! Übung\n");

        let emission = Emission {
            line_ending: LineEnding::Lf,
            encoding: Encoding::Latin1,
            ..Default::default()
        };
        output::emit(&target, &fragments, &emission).unwrap();
        assert_eq!(
            fs::read(&target).unwrap(),
            vec![b'!', b' ', 0xdc, b'b', b'u', b'n', b'g', b'\n']
        );

        let emission = Emission {
            encoding: Encoding::Ascii,
            ..Default::default()
        };
        let error = output::emit(&target, &fragments, &emission).unwrap_err();
        assert!(error.is_invalid_argument());
    }

    #[test]
    fn unwritable_destination() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir
            .path()
            .join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let target = blocker.join("demo.f90");
        let error = output::emit(&target, &demo(), &Emission::default()).unwrap_err();

        match &error {
            GenerationError::Filesystem { filename, .. } => assert_eq!(filename, &target),
            _ => panic!("expected a filesystem error, got {:?}", error),
        }
    }

    #[test]
    fn sequential_labels_in_one_file() {
        let mut labels = Labels::new();
        let mut fragments = Vec::new();
        for index in ["i", "j", "k", "l"] {
            fragments.push(blocks::do_loop(&mut labels, index, 1, 10, None, ["call step()"]).unwrap());
        }

        let emission = Emission {
            style: Style::Fixed,
            line_ending: LineEnding::Lf,
            ..Default::default()
        };
        let text = output::render(&fragments, &emission).unwrap();

        let closers: Vec<&str> = text
            .lines()
            .filter(|line| line.ends_with("continue"))
            .collect();
        assert_eq!(
            closers,
            vec!["  100 continue", "  200 continue", "  300 continue", "  400 continue"]
        );
    }

    #[test]
    fn empty_output() {
        let text = output::render(&[], &Emission::default()).unwrap();
        assert_eq!(text, "");
    }
}

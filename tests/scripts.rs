use std::fs;

use quasi::run;
use walkdir::WalkDir;

const EXPECT: &str = "// expect:";

#[test]
fn scripts_produce_their_expected_value() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "qs"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected = expected_value(&source).unwrap_or_else(|| {
                                                   panic!("{path:?} has no `{EXPECT}` line")
                                               });

        count += 1;
        match run(&source) {
            Ok(value) => assert_eq!(value.to_string(), expected, "script {path:?}"),
            Err(e) => panic!("Script {path:?} failed:\n{e}"),
        }
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

/// The text after the first `// expect:` line, trimmed.
fn expected_value(source: &str) -> Option<String> {
    source.lines()
          .find_map(|line| line.trim_start().strip_prefix(EXPECT))
          .map(|rest| rest.trim().to_string())
}

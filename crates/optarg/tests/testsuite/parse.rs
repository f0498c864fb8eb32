use optarg::ErrorKind;
use optarg::Registry;

fn registry() -> Registry {
    let mut registry = Registry::new();
    registry
        .register("s", "source", "Path to the source folder.", "")
        .register("b", "bin", "Path to the binary folder.", "")
        .register("a", "arch", "Target architecture.", "amd64")
        .register("n", "noproc", "Skip pre/post processing.", false)
        .register("p", "purge", "Clean compiled packages.", false);
    registry
}

#[test]
fn go_style_build_line() {
    let mut registry = registry();
    let parsed = registry
        .parse(&[
            "prog", "--bin", "/a/b", "--arch", "amd64", "-nps", "/a/b/src", "foo.go", "bar.go",
        ])
        .unwrap();

    let mut actual = String::new();
    for (opt, value) in parsed.matches() {
        actual.push_str(&format!("{}={value}\n", opt.long()));
    }
    actual.push_str(&format!("remainder={:?}\n", parsed.remainder()));
    snapbox::assert_eq(
        "\
bin=/a/b
arch=amd64
noproc=true
purge=true
source=/a/b/src
remainder=[\"foo.go\", \"bar.go\"]
",
        actual,
    );
}

#[test]
fn flag_round_trip() {
    let mut registry = Registry::new();
    registry.register("x", "extra", "", false);
    let parsed = registry.parse(&["prog", "-x"]).unwrap();
    let matches = parsed.matches().collect::<Vec<_>>();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].0.long(), "extra");
    assert!(matches[0].0.to_bool());
    assert!(parsed.remainder().is_empty());
}

#[test]
fn unknown_long_option_is_an_error() {
    let mut registry = registry();
    let err = registry.parse(&["prog", "--frobnicate"]).unwrap_err();
    assert_eq!(
        err.kind(),
        &ErrorKind::UnknownOption {
            name: "frobnicate".to_owned(),
            long: true,
        }
    );
}

#[test]
fn unknown_short_option_is_an_error() {
    let mut registry = registry();
    let err = registry.parse(&["prog", "-nz"]).unwrap_err();
    assert_eq!(
        err.kind(),
        &ErrorKind::UnknownOption {
            name: "z".to_owned(),
            long: false,
        }
    );
    assert_eq!(err.to_string(), "unknown option `-z` specified");
}

#[test]
fn strict_mode_rejects_dangling_value_option() {
    let mut registry = registry();
    registry.strict(true);
    let err = registry.parse(&["prog", "foo.go", "--bin"]).unwrap_err();
    assert_eq!(
        err.kind(),
        &ErrorKind::MissingValue {
            name: "bin".to_owned()
        }
    );

    registry.strict(false);
    let parsed = registry.parse(&["prog", "foo.go", "--bin"]).unwrap();
    assert!(parsed.is_empty());
    assert_eq!(parsed.remainder(), ["foo.go"]);
}

#[test]
fn lazy_scanning_matches_eager_parse() {
    let raw = ["prog", "-n", "--arch", "arm", "x", "-p"];
    let registry = registry();
    let lazy = registry
        .scanner(&raw)
        .map(|m| m.map(|m| (m.option().long().to_owned(), m.value().to_owned())))
        .collect::<optarg::Result<Vec<_>>>()
        .unwrap();

    let mut eager_registry = registry.clone();
    let parsed = eager_registry.parse(&raw).unwrap();
    let eager = parsed
        .matches()
        .map(|(o, v)| (o.long().to_owned(), v.to_owned()))
        .collect::<Vec<_>>();
    assert_eq!(lazy, eager);
    assert_eq!(parsed.remainder(), ["x"]);
}

#[test]
fn owned_arguments() {
    let raw = vec!["prog".to_owned(), "-p".to_owned(), "rest".to_owned()];
    let mut registry = registry();
    let parsed = registry.parse(&raw).unwrap();
    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed.into_remainder(), vec!["rest".to_owned()]);
}

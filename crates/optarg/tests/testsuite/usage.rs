use optarg::Markers;
use optarg::Registry;
use optarg::Usage;

fn registry() -> Registry {
    let mut registry = Registry::new();
    registry
        .register(
            "s",
            "source",
            "Path to the source folder. Long descriptions are wrapped to the width of the \
                terminal and indented so they line up with the other descriptions.",
            "",
        )
        .register("b", "bin", "Path to the binary folder.", "")
        .register("a", "arch", "Target architecture.", "amd64")
        .register("j", "jobs", "Number of packages to build in parallel.", 1)
        .register("n", "noproc", "Skip pre/post processing.", false)
        .register(
            "p",
            "purge",
            "Clean compiled packages after linking is complete.",
            false,
        )
        .register("h", "help", "Print this help and exit.", false);
    registry
}

#[test]
fn default_width() {
    let registry = registry();
    snapbox::assert_eq(
        "\
Usage: builder [options]:

 --source, -s: Path to the source folder. Long descriptions are wrapped to the
               width of the terminal and indented so they line up with the other
               descriptions.
    --bin, -b: Path to the binary folder.
   --arch, -a: Target architecture. (defaults to: amd64)
   --jobs, -j: Number of packages to build in parallel. (defaults to: 1)
 --noproc, -n: Skip pre/post processing.
  --purge, -p: Clean compiled packages after linking is complete.
   --help, -h: Print this help and exit.
",
        Usage::new(&registry).bin("builder").render(),
    );
}

#[test]
fn narrow() {
    let registry = registry();
    snapbox::assert_eq(
        "\
\x20--source, -s: Path to the source folder. Long
               descriptions are wrapped to the
               width of the terminal and indented
               so they line up with the other
               descriptions.
    --bin, -b: Path to the binary folder.
   --arch, -a: Target architecture. (defaults to:
               amd64)
   --jobs, -j: Number of packages to build in
               parallel. (defaults to: 1)
 --noproc, -n: Skip pre/post processing.
  --purge, -p: Clean compiled packages after
               linking is complete.
   --help, -h: Print this help and exit.
",
        Usage::new(&registry).width(50).render(),
    );
}

#[test]
fn custom_markers_and_header() {
    let mut registry = Registry::new();
    registry
        .register("v", "verbose", "Talk more.", false)
        .register("o", "out", "Output file.", "a.out")
        .set_markers(Markers::new("/", "//"));
    snapbox::assert_eq(
        "\
tool - does things

 //verbose, /v: Talk more.
     //out, /o: Output file. (defaults to: a.out)
",
        Usage::new(&registry).header("tool - does things").render(),
    );
}

#[test]
fn defaults_are_only_shown_when_meaningful() {
    let mut registry = Registry::new();
    registry
        .register("a", "absent", "No default.", ())
        .register("e", "empty", "Empty default.", "")
        .register("f", "flag", "Flag defaulting on.", true)
        .register("r", "ratio", "Ratio.", 0.5_f64)
        .register("l", "limit", "Limit.", Some(10_i64));
    snapbox::assert_eq(
        "\
\x20--absent, -a: No default.
  --empty, -e: Empty default.
   --flag, -f: Flag defaulting on.
  --ratio, -r: Ratio. (defaults to: 0.5)
  --limit, -l: Limit. (defaults to: 10)
",
        Usage::new(&registry).render(),
    );
}

#[test]
fn label_column() {
    let registry = registry();
    // `--source, -s: ` plus one column of margin
    assert_eq!(Usage::new(&registry).column(), 15);
    assert_eq!(Usage::new(&Registry::new()).column(), 1);
    assert_eq!(Usage::new(&Registry::new()).render(), "");
}

#[test]
fn styled_labels() {
    let mut registry = Registry::new();
    registry.register("q", "quiet", "Say less.", false);
    let rendered = Usage::new(&registry).bin("tool").styled(true).render();
    assert!(
        rendered.contains("\u{1b}[1m--quiet, -q: \u{1b}[0mSay less."),
        "{rendered:?}"
    );
    let plain = Usage::new(&registry).bin("tool").render();
    assert!(!plain.contains('\u{1b}'), "{plain:?}");
}

#[test]
fn write_to_buffer() {
    let mut registry = Registry::new();
    registry.register("q", "quiet", "Say less.", false);
    let mut buffer = Vec::new();
    Usage::new(&registry).write_to(&mut buffer).unwrap();
    assert_eq!(String::from_utf8(buffer).unwrap(), " --quiet, -q: Say less.\n");
}
